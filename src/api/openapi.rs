//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{borrowals, fines, health, overdue, preferences, roles};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Borrowal API",
        version = "0.1.0",
        description = "Campus Equipment Borrowing System REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Borrowals
        borrowals::get_student_borrowals,
        borrowals::create_borrowal,
        borrowals::pickup_borrowal,
        borrowals::extend_borrowal,
        borrowals::return_borrowal,
        borrowals::cancel_borrowal,
        // Overdue
        overdue::list_overdue,
        overdue::send_reminder,
        overdue::fine_target,
        // Fines
        fines::search_students,
        fines::list_student_fines,
        fines::apply_fine,
        fines::record_payment,
        // Preferences
        preferences::get_preferences,
        preferences::save_preferences,
        // Roles
        roles::select_role,
    ),
    components(
        schemas(
            // Borrowals
            crate::models::borrow_record::BorrowRecord,
            crate::models::borrow_record::BorrowStatus,
            crate::models::borrow_record::BorrowalShelves,
            borrowals::CreateBorrowalRequest,
            borrowals::BorrowalActionResponse,
            // Overdue
            crate::models::overdue::OverdueEntry,
            overdue::ReminderResponse,
            // Fines
            crate::models::fine::Fine,
            crate::models::fine::FineStatus,
            crate::models::fine::PaymentMethod,
            crate::models::student::StudentLookup,
            fines::ApplyFineRequest,
            fines::RecordPaymentRequest,
            // Preferences
            crate::models::preferences::NotificationPreferences,
            crate::models::preferences::ReminderTiming,
            crate::models::preferences::UpdatePreferences,
            // Roles
            roles::RoleEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "borrowals", description = "Borrow record management"),
        (name = "overdue", description = "Overdue tracking"),
        (name = "fines", description = "Fine management"),
        (name = "preferences", description = "Notification preferences"),
        (name = "roles", description = "Role entry dispatch")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
