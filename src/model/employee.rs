use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP-001",
        "full_name": "Alice Rahman",
        "email": "alice@example.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "Alice Rahman")]
    pub full_name: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

/// Employee row augmented with its count of `Present` attendance days,
/// as returned by the list endpoint.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EmployeeSummary {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "Alice Rahman")]
    pub full_name: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = 12)]
    pub present_count: i64,
}

/// Request body for create and update (update is a full replace).
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct EmployeeInput {
    #[schema(example = "EMP-001")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub employee_id: String,

    #[schema(example = "Alice Rahman")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub full_name: String,

    #[schema(example = "alice@example.com", format = "email")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[schema(example = "Engineering")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub department: String,
}
