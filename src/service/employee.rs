use sqlx::SqlitePool;
use tracing::error;

use crate::error::ApiError;
use crate::model::attendance::AttendanceStatus;
use crate::model::employee::{Employee, EmployeeInput, EmployeeSummary};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT id, employee_id, full_name, email, department FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

async fn find_by_employee_id(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT id, employee_id, full_name, email, department FROM employees WHERE employee_id = ?",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await
}

async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT id, employee_id, full_name, email, department FROM employees WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Register a new employee. The employee_id collision is checked before
/// the email collision, so on a double collision the employee_id error
/// is the one that surfaces.
pub async fn create_employee(
    pool: &SqlitePool,
    input: &EmployeeInput,
) -> Result<Employee, ApiError> {
    if find_by_employee_id(pool, &input.employee_id).await?.is_some() {
        return Err(ApiError::Conflict("Employee ID already registered".into()));
    }
    if find_by_email(pool, &input.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let result = sqlx::query(
        "INSERT INTO employees (employee_id, full_name, email, department) VALUES (?, ?, ?, ?)",
    )
    .bind(&input.employee_id)
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.department)
    .execute(pool)
    .await?;

    Ok(Employee {
        id: result.last_insert_rowid(),
        employee_id: input.employee_id.clone(),
        full_name: input.full_name.clone(),
        email: input.email.clone(),
        department: input.department.clone(),
    })
}

/// Offset/limit listing in id order, each row carrying its count of
/// `Present` attendance days (single batched aggregate, no per-row query).
pub async fn list_employees(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<EmployeeSummary>, ApiError> {
    let employees = sqlx::query_as::<_, EmployeeSummary>(
        r#"
        SELECT e.id, e.employee_id, e.full_name, e.email, e.department,
               COUNT(a.id) AS present_count
        FROM employees e
        LEFT JOIN attendance a ON a.employee_id = e.id AND a.status = ?
        GROUP BY e.id
        ORDER BY e.id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(AttendanceStatus::Present)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

/// Full replace of all mutable fields, re-checking uniqueness for any
/// changed email or employee_id. Collisions use the same conflict
/// taxonomy as create.
pub async fn update_employee(
    pool: &SqlitePool,
    id: i64,
    input: &EmployeeInput,
) -> Result<Employee, ApiError> {
    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".into()))?;

    if input.email != current.email && find_by_email(pool, &input.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }
    if input.employee_id != current.employee_id
        && find_by_employee_id(pool, &input.employee_id).await?.is_some()
    {
        return Err(ApiError::Conflict("Employee ID already registered".into()));
    }

    sqlx::query(
        "UPDATE employees SET employee_id = ?, full_name = ?, email = ?, department = ? WHERE id = ?",
    )
    .bind(&input.employee_id)
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.department)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Employee {
        id,
        employee_id: input.employee_id.clone(),
        full_name: input.full_name.clone(),
        email: input.email.clone(),
        department: input.department.clone(),
    })
}

/// Delete an employee together with all of its attendance rows in one
/// transaction. Dropping the transaction on any early exit rolls the
/// partial delete back, so no intermediate state is ever committed.
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
    if find_by_id(pool, id).await?.is_none() {
        return Err(ApiError::NotFound("Employee not found".into()));
    }

    let mut tx = pool.begin().await.map_err(|e| {
        error!(cause = %e, employee_id = id, "Failed to begin delete transaction");
        ApiError::Internal(e.into())
    })?;

    sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(cause = %e, employee_id = id, "Failed to delete attendance rows");
            ApiError::Internal(e.into())
        })?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(cause = %e, employee_id = id, "Failed to delete employee row");
            ApiError::Internal(e.into())
        })?;

    tx.commit().await.map_err(|e| {
        error!(cause = %e, employee_id = id, "Failed to commit employee delete");
        ApiError::Internal(e.into())
    })?;

    Ok(())
}
