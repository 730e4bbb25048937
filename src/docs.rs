use crate::error::{ErrorBody, ErrorDetail};
use crate::model::attendance::{
    AttendanceCheck, AttendanceRecord, AttendanceStatus, DashboardSummary, MarkAttendance,
};
use crate::model::employee::{Employee, EmployeeInput, EmployeeSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small HR record-keeping backend for employees and their daily attendance.

### 🔹 Key Features
- **Employee Management**
  - Register, list, update and delete employees; deletes remove all owned attendance atomically
- **Attendance Management**
  - Idempotent daily marking (insert-or-update per employee/date), existence probe and ranged history
- **Dashboard**
  - Live totals for today plus the most recent activity

### 📦 Response Format
- JSON-based RESTful responses
- Failures use a uniform `{"error": {"message", "code", "details?"}}` envelope

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::check_attendance,
        crate::api::attendance::attendance_history,
        crate::api::attendance::today_summary
    ),
    components(
        schemas(
            Employee,
            EmployeeInput,
            EmployeeSummary,
            AttendanceRecord,
            AttendanceStatus,
            MarkAttendance,
            AttendanceCheck,
            DashboardSummary,
            ErrorBody,
            ErrorDetail
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance and dashboard APIs"),
    )
)]
pub struct ApiDoc;
