use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

#[macro_use]
mod common;

use common::employee_payload;

#[actix_web::test]
async fn create_returns_201_with_assigned_id() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    let res = test::call_service(
        &app,
        common::post("/employees")
            .set_json(employee_payload(
                "EMP-001",
                "Alice",
                "alice@example.com",
                "Engineering",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["employee_id"], "EMP-001");
    assert_eq!(body["email"], "alice@example.com");
}

#[actix_web::test]
async fn create_duplicate_returns_409_and_no_second_row() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    let payload = employee_payload("EMP-001", "Alice", "alice@example.com", "Engineering");
    let res = test::call_service(
        &app,
        common::post("/employees").set_json(&payload).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // duplicate employee_id
    let res = test::call_service(
        &app,
        common::post("/employees").set_json(&payload).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(res).await;
    assert!(body["error"]["message"].as_str().is_some());
    assert_eq!(body["error"]["code"], 409);

    // duplicate email under a fresh employee_id
    let res = test::call_service(
        &app,
        common::post("/employees")
            .set_json(employee_payload(
                "EMP-002",
                "Bob",
                "alice@example.com",
                "Sales",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // still exactly one row
    let res = test::call_service(&app, common::get("/employees").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn invalid_email_returns_400_with_details_and_no_row() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    let res = test::call_service(
        &app,
        common::post("/employees")
            .set_json(employee_payload(
                "EMP-001",
                "Alice",
                "not-an-email",
                "Engineering",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(!body["error"]["details"].as_array().unwrap().is_empty());

    let res = test::call_service(&app, common::get("/employees").to_request()).await;
    let body: Value = test::read_body_json(res).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn malformed_body_returns_400_envelope() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    // missing required fields entirely
    let res = test::call_service(
        &app,
        common::post("/employees")
            .set_json(serde_json::json!({ "employee_id": "EMP-001" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(!body["error"]["details"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn list_reports_present_count_and_honors_skip_limit() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    for (eid, email) in [
        ("EMP-001", "a@example.com"),
        ("EMP-002", "b@example.com"),
        ("EMP-003", "c@example.com"),
    ] {
        let res = test::call_service(
            &app,
            common::post("/employees")
                .set_json(employee_payload(eid, "Someone", email, "Engineering"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // two Present days and one Absent day for the first employee
    for (date, status) in [
        ("2026-01-01", "Present"),
        ("2026-01-02", "Present"),
        ("2026-01-03", "Absent"),
    ] {
        let res = test::call_service(
            &app,
            common::post("/attendance/1")
                .set_json(serde_json::json!({ "date": date, "status": status }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = test::call_service(&app, common::get("/employees").to_request()).await;
    let body: Value = test::read_body_json(res).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["present_count"], 2);
    assert_eq!(rows[1]["present_count"], 0);

    let res = test::call_service(&app, common::get("/employees?skip=1&limit=1").to_request()).await;
    let body: Value = test::read_body_json(res).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], "EMP-002");
}

#[actix_web::test]
async fn update_unknown_id_returns_404() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    let res = test::call_service(
        &app,
        common::put("/employees/99")
            .set_json(employee_payload(
                "EMP-001",
                "Alice",
                "alice@example.com",
                "Engineering",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn update_email_collision_returns_409() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    for (eid, email) in [("EMP-001", "a@example.com"), ("EMP-002", "b@example.com")] {
        let res = test::call_service(
            &app,
            common::post("/employees")
                .set_json(employee_payload(eid, "Someone", email, "Engineering"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // second employee tries to take the first one's email
    let res = test::call_service(
        &app,
        common::put("/employees/2")
            .set_json(employee_payload(
                "EMP-002",
                "Someone",
                "a@example.com",
                "Engineering",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn update_replaces_all_fields() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    let res = test::call_service(
        &app,
        common::post("/employees")
            .set_json(employee_payload(
                "EMP-001",
                "Alice",
                "alice@example.com",
                "Engineering",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = test::call_service(
        &app,
        common::put("/employees/1")
            .set_json(employee_payload(
                "EMP-100",
                "Alice Rahman",
                "alice.r@example.com",
                "Operations",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["employee_id"], "EMP-100");
    assert_eq!(body["full_name"], "Alice Rahman");
    assert_eq!(body["email"], "alice.r@example.com");
    assert_eq!(body["department"], "Operations");
}

#[actix_web::test]
async fn delete_unknown_id_returns_404() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    let res = test::call_service(&app, common::delete("/employees/99").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_cascades_attendance_and_frees_unique_keys() {
    let pool = common::test_pool().await;
    let app = test_app!(pool);

    let res = test::call_service(
        &app,
        common::post("/employees")
            .set_json(employee_payload(
                "EMP-001",
                "Alice",
                "alice@example.com",
                "Engineering",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    let id = created["id"].as_i64().unwrap();

    for date in ["2026-01-01", "2026-01-02"] {
        let res = test::call_service(
            &app,
            common::post(&format!("/attendance/{id}"))
                .set_json(serde_json::json!({ "date": date, "status": "Present" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = test::call_service(&app, common::delete(&format!("/employees/{id}")).to_request())
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // attendance rows are gone with the employee
    let res = test::call_service(&app, common::get(&format!("/attendance/{id}")).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert!(body.as_array().unwrap().is_empty());

    // the unique keys are free again
    let res = test::call_service(
        &app,
        common::post("/employees")
            .set_json(employee_payload(
                "EMP-001",
                "Alice",
                "alice@example.com",
                "Engineering",
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
}
