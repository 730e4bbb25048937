use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::{ApiError, ErrorBody};
use crate::model::attendance::{
    AttendanceCheck, AttendanceRecord, DashboardSummary, MarkAttendance,
};
use crate::service;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Mark attendance for a day (insert-or-update on the employee/date pair)
#[utoipa::path(
    post,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee surrogate id")
    ),
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Record created or overwritten", body = AttendanceRecord),
        (status = 400, description = "Malformed input", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let record = service::attendance::mark_attendance(pool.get_ref(), employee_id, &payload).await?;
    Ok(HttpResponse::Created().json(record))
}

/// Check whether attendance is already marked for a day
#[utoipa::path(
    get,
    path = "/attendance/check/{employee_id}/{date}",
    params(
        ("employee_id" = i64, Path, description = "Employee surrogate id"),
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Existence plus status/id when present", body = AttendanceCheck),
        (status = 400, description = "Malformed date", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn check_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, NaiveDate)>,
) -> Result<HttpResponse, ApiError> {
    let (employee_id, date) = path.into_inner();
    let check = service::attendance::check_attendance(pool.get_ref(), employee_id, date).await?;
    Ok(HttpResponse::Ok().json(check))
}

/// Attendance history for one employee, newest day first
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee surrogate id"),
        ("start_date" = Option<String>, Query, description = "Inclusive lower bound (YYYY-MM-DD)"),
        ("end_date" = Option<String>, Query, description = "Inclusive upper bound (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Records in descending date order", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn attendance_history(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    query: web::Query<HistoryQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let records = service::attendance::attendance_history(
        pool.get_ref(),
        employee_id,
        query.start_date,
        query.end_date,
    )
    .await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Dashboard summary for the current calendar date
#[utoipa::path(
    get,
    path = "/attendance/summary/today",
    responses(
        (status = 200, description = "Employee total, today's buckets and recent activity", body = DashboardSummary)
    ),
    tag = "Attendance"
)]
pub async fn today_summary(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let summary = service::attendance::today_summary(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(summary))
}
