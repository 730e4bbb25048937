use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Closed status set. Stored as TEXT (`Present` / `Absent`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    sqlx::Type,
    ToSchema,
)]
#[sqlx(rename_all = "PascalCase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "employee_id": 1,
        "date": "2026-01-01",
        "status": "Present"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 7)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,
}

/// Request body for marking attendance; the employee comes from the path.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,
}

/// Result of the existence probe. `status` and `id` are present only
/// when a record exists for the requested day.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendanceCheck {
    pub exists: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Dashboard aggregate, computed fresh on every call.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    #[schema(example = 42)]
    pub total_employees: i64,

    #[schema(example = 30)]
    pub total_present_today: i64,

    #[schema(example = 5)]
    pub total_absent_today: i64,

    /// The 5 most recently created records system-wide, newest first.
    pub recent_activity: Vec<AttendanceRecord>,
}
