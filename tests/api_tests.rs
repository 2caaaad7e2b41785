use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_assignment::config::environment::EnvironmentConfig;
use fleet_assignment::services::assignment_store::AssignmentStore;
use fleet_assignment::{create_app, AppState};

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["consistent"], true);
    assert_eq!(body["drivers"], 4);
    assert_eq!(body["routes"], 4);
}

#[tokio::test]
async fn test_create_driver_returns_201_with_fresh_id() {
    let app = create_test_app();
    let payload = json!({ "name": "Ahmed Hassan", "availability": "Available" });

    let (status, first) = send(&app, "POST", "/drivers", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, second) = send(&app, "POST", "/drivers", Some(payload)).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["availability"], "Available");
    assert!(first.get("assignedRoute").is_none());
}

#[tokio::test]
async fn test_create_driver_validation_errors() {
    let app = create_test_app();

    let (status, body) = send(&app, "POST", "/drivers", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = send(
        &app,
        "POST",
        "/drivers",
        Some(json!({ "name": "Karim", "availability": "Assigned" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_route_and_validation() {
    let app = create_test_app();

    let (status, route) = send(
        &app,
        "POST",
        "/routes",
        Some(json!({
            "name": "Red Sea Express",
            "startLocation": "Cairo",
            "endLocation": "Hurghada",
            "time": "06:30"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(route["id"], "5");
    assert!(route.get("assignedDriverId").is_none());

    let (status, body) = send(
        &app,
        "POST",
        "/routes",
        Some(json!({ "name": "X", "startLocation": "Cairo", "endLocation": "Suez", "time": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_required_fields_are_validation_errors() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/routes",
        Some(json!({ "name": "X", "startLocation": "A", "endLocation": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(
        &app,
        "POST",
        "/drivers",
        Some(json!({ "availability": "Available" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(
        &app,
        "POST",
        "/drivers",
        Some(json!({ "name": "Karim", "availability": "Sleeping" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, "POST", "/routes/2/assign", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, "POST", "/routes/2/reassign", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Nada se creó ni se asignó
    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["totalDrivers"], 4);
    assert_eq!(stats["totalRoutes"], 4);
    assert_eq!(stats["assignedRoutes"], 1);
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/drivers")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = call(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_assign_then_unassign_flow() {
    let app = create_empty_app();
    let (_, driver) = send(&app, "POST", "/drivers", Some(json!({ "name": "D1" }))).await;
    let (_, route) = send(
        &app,
        "POST",
        "/routes",
        Some(json!({
            "name": "R1",
            "startLocation": "Giza",
            "endLocation": "Luxor",
            "time": "10:30"
        })),
    )
    .await;
    let driver_id = driver["id"].as_str().unwrap().to_string();
    let route_id = route["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/routes/{}/assign", route_id),
        Some(json!({ "driverId": driver_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"]["assignedDriverId"], driver_id.as_str());
    assert_eq!(body["driver"]["availability"], "Assigned");
    assert_eq!(body["driver"]["assignedRoute"], route_id.as_str());

    let (status, body) = send(&app, "POST", &format!("/routes/{}/unassign", route_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["route"].get("assignedDriverId").is_none());
    assert_eq!(body["driver"]["availability"], "Available");
    assert!(body["driver"].get("assignedRoute").is_none());

    // Segunda vez: sin efecto, driver = null
    let (status, body) = send(&app, "POST", &format!("/routes/{}/unassign", route_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["driver"].is_null());

    let (_, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(health["consistent"], true);
}

#[tokio::test]
async fn test_assign_unknown_ids_returns_404() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/routes/99/assign",
        Some(json!({ "driverId": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("'99'"));

    let (status, body) = send(
        &app,
        "POST",
        "/routes/2/assign",
        Some(json!({ "driverId": "42" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("'42'"));

    let (status, _) = send(&app, "POST", "/routes/99/unassign", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/drivers/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_conflicts() {
    let app = create_test_app();

    // Ruta 1 ya tiene conductor
    let (status, body) = send(
        &app,
        "POST",
        "/routes/1/assign",
        Some(json!({ "driverId": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    // Conductor 4 no disponible
    let (status, _) = send(
        &app,
        "POST",
        "/routes/2/assign",
        Some(json!({ "driverId": "4" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_reassign_releases_previous_driver() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/routes/1/reassign",
        Some(json!({ "driverId": "3" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"]["assignedDriverId"], "3");
    assert_eq!(body["driver"]["assignedRoute"], "1");
    assert_eq!(body["previousDriver"]["id"], "2");
    assert_eq!(body["previousDriver"]["availability"], "Available");

    let (_, driver) = send(&app, "GET", "/drivers/2", None).await;
    assert_eq!(driver["availability"], "Available");

    let (_, detail) = send(&app, "GET", "/routes/1", None).await;
    assert_eq!(detail["driver"]["name"], "Omar Ali");

    let (_, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(health["consistent"], true);
}

#[tokio::test]
async fn test_filter_drivers() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/drivers?availability=Available", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ahmed Hassan", "Omar Ali"]);

    let (_, body) = send(&app, "GET", "/drivers?search=MOHAMED", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/drivers/available", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _) = send(&app, "GET", "/drivers?availability=Busy", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filter_routes_partitions_by_status() {
    let app = create_test_app();

    let (_, all) = send(&app, "GET", "/routes?status=All", None).await;
    let (_, assigned) = send(&app, "GET", "/routes?status=Assigned", None).await;
    let (_, unassigned) = send(&app, "GET", "/routes?status=Unassigned", None).await;

    let assigned = assigned.as_array().unwrap();
    let unassigned = unassigned.as_array().unwrap();
    assert_eq!(assigned.len() + unassigned.len(), all.as_array().unwrap().len());
    assert!(assigned.iter().all(|r| r.get("assignedDriverId").is_some()));
    assert!(unassigned.iter().all(|r| r.get("assignedDriverId").is_none()));

    let (_, cairo) = send(&app, "GET", "/routes?search=cairo&status=Unassigned", None).await;
    let cairo = cairo.as_array().unwrap();
    assert_eq!(cairo.len(), 1);
    assert_eq!(cairo[0]["name"], "Capital Route");
}

#[tokio::test]
async fn test_stats_and_catalog() {
    let app = create_test_app();

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["availableDrivers"], 2);
    assert_eq!(stats["assignedDrivers"], 1);
    assert_eq!(stats["assignedRoutes"], 1);

    let (_, presets) = send(&app, "GET", "/routes/presets", None).await;
    assert_eq!(presets.as_array().unwrap().len(), 10);
    assert_eq!(presets[0]["startLocation"], "Cairo");

    let (_, cities) = send(&app, "GET", "/locations", None).await;
    assert!(cities.as_array().unwrap().iter().any(|c| c == "Aswan"));
}

// Función helper para crear la app de test con datos de demo
fn create_test_app() -> Router {
    create_app(AppState::new(
        EnvironmentConfig::default(),
        AssignmentStore::with_demo_data(),
    ))
}

fn create_empty_app() -> Router {
    create_app(AppState::new(EnvironmentConfig::default(), AssignmentStore::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    call(app, request).await
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
