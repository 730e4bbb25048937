use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::{ApiError, ErrorBody};
use crate::model::employee::{Employee, EmployeeInput, EmployeeSummary};
use crate::service;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Malformed input", body = ErrorBody),
        (status = 409, description = "Duplicate employee_id or email", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;
    let employee = service::employee::create_employee(pool.get_ref(), &payload).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 100)")
    ),
    responses(
        (status = 200, description = "Employees in id order with present-day counts", body = [EmployeeSummary])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let skip = query.skip.unwrap_or(0).max(0);
    let limit = query.limit.unwrap_or(100).clamp(1, 500);

    let employees = service::employee::list_employees(pool.get_ref(), skip, limit).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Update Employee (full replace of mutable fields)
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee surrogate id")
    ),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Malformed input", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 409, description = "Duplicate employee_id or email", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;
    let id = path.into_inner();
    let employee = service::employee::update_employee(pool.get_ref(), id, &payload).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee together with all of its attendance rows
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee surrogate id")
    ),
    responses(
        (status = 204, description = "Employee and attendance deleted"),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Transactional failure, nothing deleted", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    service::employee::delete_employee(pool.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}
