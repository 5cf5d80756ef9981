use axum::http::StatusCode;

use crate::integration::common::{crop_payload, register, send, setup_test_app};

#[tokio::test]
async fn farmer_crop_crud_flow() {
    let app = setup_test_app().await;
    let auth = register(&app.router, "ana@example.com", "FARMER").await;
    let token = auth["token"].as_str().unwrap();

    // Create
    let (status, created) = send(
        &app.router,
        "POST",
        "/farmer/crops",
        Some(token),
        Some(crop_payload("Tomatoes")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Tomatoes");
    assert_eq!(created["status"], "IN_STOCK");
    // Snapshot fields come from the account, not the payload.
    assert_eq!(created["farmer_code"], auth["farmer_code"]);
    assert_eq!(created["farmer_location"], "Testville");
    let id = created["id"].as_i64().unwrap();

    // List own
    let (status, list) = send(&app.router, "GET", "/farmer/crops", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Update
    let (status, updated) = send(
        &app.router,
        "PUT",
        &format!("/farmer/crops/{id}"),
        Some(token),
        Some(crop_payload("Cherry Tomatoes")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Cherry Tomatoes");

    // Delete
    let (status, _) = send(
        &app.router,
        "DELETE",
        &format!("/farmer/crops/{id}"),
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, "GET", &format!("/crops/scan/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mutating_another_users_crop_returns_403() {
    let app = setup_test_app().await;
    let ana = register(&app.router, "ana@example.com", "FARMER").await;
    let bob = register(&app.router, "bob@example.com", "FARMER").await;

    let (_, created) = send(
        &app.router,
        "POST",
        "/farmer/crops",
        Some(ana["token"].as_str().unwrap()),
        Some(crop_payload("Tomatoes")),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let bob_token = bob["token"].as_str().unwrap();
    let (status, json) = send(
        &app.router,
        "PUT",
        &format!("/farmer/crops/{id}"),
        Some(bob_token),
        Some(crop_payload("Stolen")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "forbidden");

    let (status, _) = send(
        &app.router,
        "DELETE",
        &format!("/farmer/crops/{id}"),
        Some(bob_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn update_missing_crop_returns_404() {
    let app = setup_test_app().await;
    let auth = register(&app.router, "ana@example.com", "FARMER").await;

    let (status, json) = send(
        &app.router,
        "PUT",
        "/farmer/crops/424242",
        Some(auth["token"].as_str().unwrap()),
        Some(crop_payload("Ghost")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn public_catalog_and_scan() {
    let app = setup_test_app().await;
    let auth = register(&app.router, "ana@example.com", "FARMER").await;
    let token = auth["token"].as_str().unwrap();

    let (_, created) = send(
        &app.router,
        "POST",
        "/farmer/crops",
        Some(token),
        Some(crop_payload("Tomatoes")),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let code = auth["farmer_code"].as_str().unwrap();

    // No token needed for any of these.
    let (status, all) = send(&app.router, "GET", "/farmer/crops/all", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, by_code) = send(
        &app.router,
        "GET",
        &format!("/farmer/crops/by-farmer/{code}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_code.as_array().unwrap().len(), 1);

    // Alias path answers the same.
    let (status, aliased) = send(
        &app.router,
        "GET",
        &format!("/crops/farmer/{code}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(aliased, by_code);

    let (status, scanned) = send(&app.router, "GET", &format!("/crops/scan/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scanned["name"], "Tomatoes");
    assert_eq!(scanned["farmer_code"], code);
}

#[tokio::test]
async fn distributor_receives_from_farmer() {
    let app = setup_test_app().await;
    let farmer = register(&app.router, "ana@example.com", "FARMER").await;
    let dist = register(&app.router, "dist@example.com", "DISTRIBUTOR").await;

    let (_, crop) = send(
        &app.router,
        "POST",
        "/farmer/crops",
        Some(farmer["token"].as_str().unwrap()),
        Some(crop_payload("Tomatoes")),
    )
    .await;

    let dist_token = dist["token"].as_str().unwrap();
    let (status, lot) = send(
        &app.router,
        "POST",
        "/distributor/crops",
        Some(dist_token),
        Some(serde_json::json!({
            "farmer_crop_id": crop["id"],
            "received_date": "2025-06-05",
            "received_from_farmer_code": farmer["farmer_code"],
            "received_from_farmer_name": "Test FARMER",
            "farmer_location": "Testville",
            "quantity": 40.0,
            "quantity_unit": "kg",
            "price_per_unit": 3.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lot["farmer_crop_id"], crop["id"]);
    assert_eq!(lot["distributor_code"], dist["distributor_code"]);

    // Retailers browse distributor lots by code, unauthenticated.
    let code = dist["distributor_code"].as_str().unwrap();
    let (status, lots) = send(
        &app.router,
        "GET",
        &format!("/crops/distributor/{code}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lots.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn consumer_purchase_flow() {
    let app = setup_test_app().await;
    let retailer = register(&app.router, "shop@example.com", "RETAILER").await;
    let consumer = register(&app.router, "buyer@example.com", "CONSUMER").await;

    let (status, lot) = send(
        &app.router,
        "POST",
        "/retailer/crops",
        Some(retailer["token"].as_str().unwrap()),
        Some(serde_json::json!({
            "distributor_crop_id": 1,
            "received_date": "2025-06-10",
            "quantity": 20.0,
            "quantity_unit": "kg",
            "price_per_unit": 4.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let token = consumer["token"].as_str().unwrap();
    let (status, purchase) = send(
        &app.router,
        "POST",
        "/consumer-purchases",
        Some(token),
        Some(serde_json::json!({
            "retailer_crop_id": lot["id"],
            "purchase_date": "2025-06-15",
            "quantity": 2.0,
            "quantity_unit": "kg",
            "price_per_unit": 4.0,
            "total_price": 8.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(purchase["payment_status"], "PENDING");
    assert_eq!(purchase["consumer_name"], "Test CONSUMER");

    let (status, mine) = send(
        &app.router,
        "GET",
        "/consumer-purchases/my-purchases",
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine.as_array().unwrap().len(), 1);

    let (status, pending) = send(
        &app.router,
        "GET",
        "/consumer-purchases/payment-status/PENDING",
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (status, empty) = send(
        &app.router,
        "GET",
        "/consumer-purchases/payment-status/PAID",
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(empty.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn crops_facade_dispatches_by_role() {
    let app = setup_test_app().await;
    let farmer = register(&app.router, "ana@example.com", "FARMER").await;
    let dist = register(&app.router, "dist@example.com", "DISTRIBUTOR").await;
    let farmer_token = farmer["token"].as_str().unwrap();
    let dist_token = dist["token"].as_str().unwrap();

    // Farmers create through the facade.
    let (status, created) = send(
        &app.router,
        "POST",
        "/crops",
        Some(farmer_token),
        Some(crop_payload("Tomatoes")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    // Other roles cannot.
    let (status, json) = send(
        &app.router,
        "POST",
        "/crops",
        Some(dist_token),
        Some(crop_payload("Nope")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");

    // GET lists the caller's own table.
    let (status, listed) = send(&app.router, "GET", "/crops", Some(farmer_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, empty) = send(&app.router, "GET", "/crops", Some(dist_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(empty.as_array().unwrap().is_empty());

    // Facade update and delete follow the caller's role.
    let (status, updated) = send(
        &app.router,
        "PUT",
        &format!("/crops/{id}"),
        Some(farmer_token),
        Some(crop_payload("Cherry Tomatoes")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Cherry Tomatoes");

    let (status, _) = send(
        &app.router,
        "DELETE",
        &format!("/crops/{id}"),
        Some(farmer_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
