//! API integration tests
//!
//! These run against a live server with the seeded demo data:
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000/api/v1";

/// Helper to resolve a seeded student by NetID
async fn lookup_student(client: &Client, net_id: &str) -> Value {
    let response = client
        .get(format!("{}/students/search?q={}", BASE_URL, net_id))
        .send()
        .await
        .expect("Failed to send search request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse search response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_role_dispatch() {
    let client = Client::new();

    let response = client
        .get(format!("{}/roles/student", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "student");
    assert!(body["landing_path"].is_string());

    let response = client
        .get(format!("{}/roles/admin", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_search_student_found() {
    let client = Client::new();
    let body = lookup_student(&client, "si2356").await;

    assert_eq!(body["net_id"], "si2356");
    assert!(body["fines"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_search_student_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/students/search?q=nonexistent-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchStudent");
    assert_eq!(body["code"], 4);
}

#[tokio::test]
#[ignore]
async fn test_student_borrowals_shape() {
    let client = Client::new();
    let student = lookup_student(&client, "si2356").await;
    let student_id = student["id"].as_i64().expect("No student ID");

    let response = client
        .get(format!("{}/students/{}/borrowals", BASE_URL, student_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["current"].is_array());
    assert!(body["upcoming"].is_array());
    assert!(body["history"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_apply_fine_appends_one_unpaid() {
    let client = Client::new();
    let student = lookup_student(&client, "si2356").await;
    let student_id = student["id"].as_i64().expect("No student ID");
    let fines_before = student["fines"].as_array().unwrap().len();

    let response = client
        .post(format!("{}/students/{}/fines", BASE_URL, student_id))
        .json(&json!({
            "reason": "damage",
            "amount": "12.00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let fine: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fine["status"], "unpaid");
    assert_eq!(fine["amount"], "12.00");

    let student = lookup_student(&client, "si2356").await;
    assert_eq!(student["fines"].as_array().unwrap().len(), fines_before + 1);
}

#[tokio::test]
#[ignore]
async fn test_apply_fine_rejects_non_positive_amount() {
    let client = Client::new();
    let student = lookup_student(&client, "si2356").await;
    let student_id = student["id"].as_i64().expect("No student ID");

    let response = client
        .post(format!("{}/students/{}/fines", BASE_URL, student_id))
        .json(&json!({
            "reason": "damage",
            "amount": "0.00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_double_payment_conflicts() {
    let client = Client::new();
    let student = lookup_student(&client, "si2356").await;
    let student_id = student["id"].as_i64().expect("No student ID");

    // Fresh fine so the test is repeatable
    let response = client
        .post(format!("{}/students/{}/fines", BASE_URL, student_id))
        .json(&json!({
            "reason": "test fine",
            "amount": "3.00"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let fine: Value = response.json().await.expect("Failed to parse response");
    let fine_id = fine["id"].as_i64().expect("No fine ID");

    let response = client
        .post(format!("{}/fines/{}/payment", BASE_URL, fine_id))
        .json(&json!({ "method": "cash" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let paid: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(paid["status"], "paid");
    assert_eq!(paid["paid_method"], "cash");

    // Second payment must conflict, never double-write
    let response = client
        .post(format!("{}/fines/{}/payment", BASE_URL, fine_id))
        .json(&json!({ "method": "card" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_payment_rejects_unknown_method() {
    let client = Client::new();
    let student = lookup_student(&client, "si2356").await;
    let fine_id = student["fines"][0]["id"].as_i64().expect("No seeded fine");

    let response = client
        .post(format!("{}/fines/{}/payment", BASE_URL, fine_id))
        .json(&json!({ "method": "cheque" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_preferences_round_trip() {
    let client = Client::new();
    let student = lookup_student(&client, "si2356").await;
    let student_id = student["id"].as_i64().expect("No student ID");

    let response = client
        .put(format!("{}/students/{}/preferences", BASE_URL, student_id))
        .json(&json!({
            "email_enabled": true,
            "sms_enabled": false,
            "app_enabled": true,
            "reminder_timing": "48hours"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/students/{}/preferences", BASE_URL, student_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["reminder_timing"], "48hours");
    assert_eq!(body["email_enabled"], true);
    assert_eq!(body["sms_enabled"], false);
    assert_eq!(body["app_enabled"], true);
}

#[tokio::test]
#[ignore]
async fn test_preferences_reject_unknown_timing() {
    let client = Client::new();
    let student = lookup_student(&client, "si2356").await;
    let student_id = student["id"].as_i64().expect("No student ID");

    let response = client
        .put(format!("{}/students/{}/preferences", BASE_URL, student_id))
        .json(&json!({
            "email_enabled": true,
            "sms_enabled": false,
            "app_enabled": true,
            "reminder_timing": "2weeks"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
#[ignore]
async fn test_overdue_listing() {
    let client = Client::new();

    let response = client
        .get(format!("{}/overdue", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let entries: Value = response.json().await.expect("Failed to parse response");
    let entries = entries.as_array().expect("Expected an array");

    // The seeded HD Camera is 3 days past due
    let camera = entries
        .iter()
        .find(|e| e["item_name"] == "HD Camera")
        .expect("Seeded overdue record missing");
    assert_eq!(camera["days_overdue"], 3);
    assert_eq!(camera["student_net_id"], "si2356");

    // The seeded MacBook is active but due 4 days from now; a record whose
    // due date has not passed must never appear in the overdue set
    assert!(entries
        .iter()
        .all(|e| e["item_name"] != "MacBook Pro 16\""));
}

#[tokio::test]
#[ignore]
async fn test_reservation_lifecycle() {
    let client = Client::new();
    let student = lookup_student(&client, "jd4012").await;
    let student_id = student["id"].as_i64().expect("No student ID");

    // Reserve
    let response = client
        .post(format!("{}/borrowals", BASE_URL))
        .json(&json!({
            "student_id": student_id,
            "item_name": "USB Microphone",
            "location": "Media Lab",
            "pickup_date": "2026-09-01T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let record: Value = response.json().await.expect("Failed to parse response");
    let record_id = record["id"].as_i64().expect("No record ID");
    assert_eq!(record["status"], "reserved");

    // Extending a reservation must conflict
    let response = client
        .post(format!("{}/borrowals/{}/extend", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Pick up
    let response = client
        .post(format!("{}/borrowals/{}/pickup", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "active");
    assert!(body["due_date"].is_string());

    // Extend now succeeds and moves the due date forward
    let response = client
        .post(format!("{}/borrowals/{}/extend", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let extended: Value = response.json().await.expect("Failed to parse response");
    let due_before = chrono::DateTime::parse_from_rfc3339(body["due_date"].as_str().unwrap())
        .expect("Bad due date");
    let due_after = chrono::DateTime::parse_from_rfc3339(extended["due_date"].as_str().unwrap())
        .expect("Bad due date");
    assert_eq!(due_after - due_before, chrono::Duration::days(7));

    // Return
    let response = client
        .post(format!("{}/borrowals/{}/return", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let returned: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(returned["status"], "returned");
    assert!(returned["returned_date"].is_string());

    // Return and extend on a returned record both conflict
    let response = client
        .post(format!("{}/borrowals/{}/return", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    let response = client
        .post(format!("{}/borrowals/{}/extend", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_cancel_requires_reserved() {
    let client = Client::new();
    let student = lookup_student(&client, "jd4012").await;
    let student_id = student["id"].as_i64().expect("No student ID");

    let response = client
        .post(format!("{}/borrowals", BASE_URL))
        .json(&json!({
            "student_id": student_id,
            "item_name": "Tripod",
            "location": "Media Lab",
            "pickup_date": "2026-09-02T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let record: Value = response.json().await.expect("Failed to parse response");
    let record_id = record["id"].as_i64().expect("No record ID");

    // Cancel the reservation
    let response = client
        .delete(format!("{}/borrowals/{}", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Cancelling again: the record is gone
    let response = client
        .delete(format!("{}/borrowals/{}", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_send_reminder_is_side_effect_only() {
    let client = Client::new();

    let response = client
        .get(format!("{}/overdue", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let entries: Value = response.json().await.expect("Failed to parse response");
    let record_id = entries[0]["record_id"].as_i64().expect("No overdue record");
    let days_before = entries[0]["days_overdue"].clone();

    let response = client
        .post(format!("{}/overdue/{}/remind", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Record state is unchanged
    let response = client
        .get(format!("{}/overdue", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let entries: Value = response.json().await.expect("Failed to parse response");
    let entry = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["record_id"].as_i64() == Some(record_id))
        .expect("Record dropped from overdue list");
    assert_eq!(entry["days_overdue"], days_before);
}

#[tokio::test]
#[ignore]
async fn test_fine_target_seeds_workflow() {
    let client = Client::new();

    let response = client
        .get(format!("{}/overdue", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let entries: Value = response.json().await.expect("Failed to parse response");
    let camera = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["item_name"] == "HD Camera")
        .expect("Seeded overdue record missing");
    let record_id = camera["record_id"].as_i64().unwrap();

    let response = client
        .get(format!("{}/overdue/{}/fine-target", BASE_URL, record_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["net_id"], "si2356");
    assert!(body["fines"].is_array());
}
