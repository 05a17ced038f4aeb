//! Fine model and payment types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment status of a fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    Unpaid,
    Paid,
}

impl FineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FineStatus::Unpaid => "unpaid",
            FineStatus::Paid => "paid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unpaid" => Some(FineStatus::Unpaid),
            "paid" => Some(FineStatus::Paid),
            _ => None,
        }
    }
}

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Online => "online",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "online" => Some(PaymentMethod::Online),
            _ => None,
        }
    }
}

/// A fine levied against a student
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Fine {
    pub id: i32,
    pub student_id: i32,
    pub reason: String,
    /// Currency amount, 2-decimal precision
    #[schema(value_type = String, example = "12.00")]
    pub amount: Decimal,
    pub status: FineStatus,
    pub created_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub paid_method: Option<PaymentMethod>,
}

/// Apply fine request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFine {
    pub reason: String,
    #[schema(value_type = String, example = "12.00")]
    pub amount: Decimal,
}
