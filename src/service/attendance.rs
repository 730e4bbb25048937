use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::model::attendance::{
    AttendanceCheck, AttendanceRecord, AttendanceStatus, DashboardSummary, MarkAttendance,
};

async fn find_for_date(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> Result<Option<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, employee_id, date, status FROM attendance WHERE employee_id = ? AND date = ?",
    )
    .bind(employee_id)
    .bind(date)
    .fetch_optional(pool)
    .await
}

async fn employee_exists(pool: &SqlitePool, employee_id: i64) -> Result<bool, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE id = ?")
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;
    Ok(id.is_some())
}

/// Upsert by (employee, date): marking the same day again overwrites the
/// status in place, so repeated marks converge to the latest write and a
/// second row is never created.
pub async fn mark_attendance(
    pool: &SqlitePool,
    employee_id: i64,
    input: &MarkAttendance,
) -> Result<AttendanceRecord, ApiError> {
    if !employee_exists(pool, employee_id).await? {
        return Err(ApiError::NotFound("Employee not found".into()));
    }

    if let Some(record) = find_for_date(pool, employee_id, input.date).await? {
        sqlx::query("UPDATE attendance SET status = ? WHERE id = ?")
            .bind(input.status)
            .bind(record.id)
            .execute(pool)
            .await?;
        return Ok(AttendanceRecord {
            status: input.status,
            ..record
        });
    }

    let result = sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
        .bind(employee_id)
        .bind(input.date)
        .bind(input.status)
        .execute(pool)
        .await?;

    Ok(AttendanceRecord {
        id: result.last_insert_rowid(),
        employee_id,
        date: input.date,
        status: input.status,
    })
}

/// Pure existence probe for one (employee, date) pair.
pub async fn check_attendance(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> Result<AttendanceCheck, ApiError> {
    Ok(match find_for_date(pool, employee_id, date).await? {
        Some(record) => AttendanceCheck {
            exists: true,
            status: Some(record.status),
            id: Some(record.id),
        },
        None => AttendanceCheck {
            exists: false,
            status: None,
            id: None,
        },
    })
}

/// Attendance history for one employee, optionally bounded by an inclusive
/// date range on either end, most recent day first.
pub async fn attendance_history(
    pool: &SqlitePool,
    employee_id: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let mut sql =
        String::from("SELECT id, employee_id, date, status FROM attendance WHERE employee_id = ?");
    if start_date.is_some() {
        sql.push_str(" AND date >= ?");
    }
    if end_date.is_some() {
        sql.push_str(" AND date <= ?");
    }
    // id ASC as a deterministic tiebreak for equal dates
    sql.push_str(" ORDER BY date DESC, id ASC");

    let mut query = sqlx::query_as::<_, AttendanceRecord>(&sql).bind(employee_id);
    if let Some(start) = start_date {
        query = query.bind(start);
    }
    if let Some(end) = end_date {
        query = query.bind(end);
    }

    Ok(query.fetch_all(pool).await?)
}

/// Dashboard aggregate for the current calendar date. Present/absent
/// buckets are independent counts; employees without a mark today are in
/// neither. Recomputed on every call.
pub async fn today_summary(pool: &SqlitePool) -> Result<DashboardSummary, ApiError> {
    let today = Local::now().date_naive();

    let total_employees = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;

    let total_present_today = count_for_date(pool, today, AttendanceStatus::Present).await?;
    let total_absent_today = count_for_date(pool, today, AttendanceStatus::Absent).await?;

    let recent_activity = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, employee_id, date, status FROM attendance ORDER BY id DESC LIMIT 5",
    )
    .fetch_all(pool)
    .await?;

    Ok(DashboardSummary {
        total_employees,
        total_present_today,
        total_absent_today,
        recent_activity,
    })
}

async fn count_for_date(
    pool: &SqlitePool,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
        .bind(date)
        .bind(status)
        .fetch_one(pool)
        .await
}
