use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use car_dealership::config::EnvironmentConfig;
use car_dealership::create_app;
use car_dealership::state::AppState;

// Función helper para crear la app de test
fn create_test_app() -> Router {
    create_app(AppState::in_memory(EnvironmentConfig::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn uno() -> Value {
    json!({
        "make": "Fiat",
        "model": "Uno",
        "year": 2020,
        "plate": "ABC-1234",
        "price": 15000.00
    })
}

fn ana() -> Value {
    json!({
        "name": "Ana Silva",
        "cpf": "12345678901"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_full_sale_scenario() {
    let app = create_test_app();

    let (status, vehicle) = send(&app, "POST", "/vehicles", Some(uno())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(vehicle["available"], true);
    assert_eq!(vehicle["price"].as_f64(), Some(15000.0));
    let vehicle_id = vehicle["id"].as_i64().unwrap();

    let (status, client) = send(&app, "POST", "/clients", Some(ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    let client_id = client["id"].as_i64().unwrap();

    let sale_request = json!({
        "vehicle_id": vehicle_id,
        "client_id": client_id,
        "price": 14000.00
    });
    let (status, sale) = send(&app, "POST", "/sales", Some(sale_request.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sale["vehicle"]["id"].as_i64(), Some(vehicle_id));
    assert_eq!(sale["vehicle"]["available"], false);
    assert_eq!(sale["client"]["cpf"], "12345678901");
    assert_eq!(sale["price"].as_f64(), Some(14000.0));
    assert!(sale["sold_at"].is_string());

    let (_, stored) = send(&app, "GET", &format!("/vehicles/{}", vehicle_id), None).await;
    assert_eq!(stored["available"], false);

    let (status, available) = send(&app, "GET", "/vehicles/available", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(available.as_array().map(Vec::len), Some(0));

    let (status, error) = send(&app, "POST", "/sales", Some(sale_request)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["status"], 409);
    assert_eq!(error["error"], "Conflict");

    let (status, sales) = send(&app, "GET", "/sales", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sales.as_array().map(Vec::len), Some(1));

    let (status, by_vehicle) =
        send(&app, "GET", &format!("/sales/vehicle/{}", vehicle_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_vehicle["client"]["name"], "Ana Silva");
}

#[tokio::test]
async fn test_vehicle_with_zero_price_is_rejected() {
    let app = create_test_app();
    let mut request = uno();
    request["price"] = json!(0);

    let (status, body) = send(&app, "POST", "/vehicles", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["price"].is_string());
}

#[tokio::test]
async fn test_vehicle_year_out_of_range() {
    let app = create_test_app();
    let mut request = uno();
    request["year"] = json!(1949);

    let (status, body) = send(&app, "POST", "/vehicles", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["year"].is_string());
}

#[tokio::test]
async fn test_duplicate_plate_conflicts() {
    let app = create_test_app();
    let (status, _) = send(&app, "POST", "/vehicles", Some(uno())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/vehicles", Some(uno())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_missing_vehicle_is_not_found() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/vehicles/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let (status, _) = send(&app, "DELETE", "/vehicles/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/sales/vehicle/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_and_delete_vehicle() {
    let app = create_test_app();
    let (_, vehicle) = send(&app, "POST", "/vehicles", Some(uno())).await;
    let id = vehicle["id"].as_i64().unwrap();

    let mut changes = uno();
    changes["color"] = json!("Prata");
    changes["price"] = json!(13500.50);
    let (status, updated) = send(&app, "PUT", &format!("/vehicles/{}", id), Some(changes)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["color"], "Prata");
    assert_eq!(updated["available"], true);
    assert_eq!(updated["registered_at"], vehicle["registered_at"]);

    let (status, body) = send(&app, "DELETE", &format!("/vehicles/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, all) = send(&app, "GET", "/vehicles", None).await;
    assert_eq!(all.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_client_endpoints() {
    let app = create_test_app();

    let (status, client) = send(&app, "POST", "/clients", Some(ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = client["id"].as_i64().unwrap();

    let (status, by_id) = send(&app, "GET", &format!("/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["name"], "Ana Silva");

    let (status, by_cpf) = send(&app, "GET", "/clients/cpf/12345678901", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_cpf["id"].as_i64(), Some(id));

    let (status, body) = send(&app, "POST", "/clients", Some(ana())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, _) = send(&app, "GET", "/clients/cpf/00000000000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_validation_returns_field_map() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/clients",
        Some(json!({ "name": "Ana Silva", "cpf": "123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["cpf"], "cpf must contain 11 digits");
}

#[tokio::test]
async fn test_sale_with_unknown_client() {
    let app = create_test_app();
    let (_, vehicle) = send(&app, "POST", "/vehicles", Some(uno())).await;

    let (status, _) = send(
        &app,
        "POST",
        "/sales",
        Some(json!({
            "vehicle_id": vehicle["id"],
            "client_id": 42,
            "price": 14000.00
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stored) = send(&app, "GET", "/vehicles/available", None).await;
    assert_eq!(stored.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_malformed_field_type_is_bad_request() {
    let app = create_test_app();
    let mut request = uno();
    request["year"] = json!("abc");

    let (status, body) = send(&app, "POST", "/vehicles", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].as_str().unwrap().contains("year"));
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/vehicles/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_sold_vehicle_delete_keeps_sale() {
    let app = create_test_app();
    let (_, vehicle) = send(&app, "POST", "/vehicles", Some(uno())).await;
    let vehicle_id = vehicle["id"].as_i64().unwrap();
    let (_, client) = send(&app, "POST", "/clients", Some(ana())).await;

    let (status, _) = send(
        &app,
        "POST",
        "/sales",
        Some(json!({
            "vehicle_id": vehicle_id,
            "client_id": client["id"],
            "price": 14000.00
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "DELETE", &format!("/vehicles/{}", vehicle_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, sale) =
        send(&app, "GET", &format!("/sales/vehicle/{}", vehicle_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sale["vehicle"]["plate"], "ABC-1234");
    assert_eq!(sale["vehicle"]["available"], false);
}
