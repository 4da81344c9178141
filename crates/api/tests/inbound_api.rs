//! HTTP-level tests for inbound order placement.
//!
//! Each test gets a fresh migrated database from `DATABASE_URL`.

mod common;

use axum::http::StatusCode;
use common::{
    batch, body_json, create, get, inbound_body, post_json, put_json, seed_product, seed_seller,
    seed_topology,
};
use serde_json::json;
use sqlx::PgPool;

async fn section_used_volume(pool: &PgPool, warehouse_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/warehouses/{warehouse_id}/sections")).await;
    let json = body_json(response).await;
    json["data"][0]["used_volume"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Capacity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn batches_within_capacity_are_created(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/inbound-orders",
        inbound_body(&topology, vec![batch(product, 10, 40, 60), batch(product, 5, 50, 90)]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let batches = json["data"].as_array().unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0]["volume"], 40);
    assert_eq!(batches[1]["product_quantity"], 5);

    assert_eq!(section_used_volume(&pool, topology.warehouse_id).await, 90);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn batches_over_capacity_are_rejected_whole(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/inbound-orders",
        inbound_body(&topology, vec![batch(product, 10, 40, 60), batch(product, 5, 70, 90)]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BUSINESS_RULE_VIOLATION");
    assert_eq!(section_used_volume(&pool, topology.warehouse_id).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn existing_usage_counts_against_capacity(pool: PgPool) {
    let topology = seed_topology(&pool, "DRY", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "DRY").await;

    let first = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/inbound-orders",
        inbound_body(&topology, vec![batch(product, 1, 70, 60)]),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/inbound-orders",
        inbound_body(&topology, vec![batch(product, 1, 31, 60)]),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Categories, sellers and ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn fresh_product_cannot_enter_dry_section(pool: PgPool) {
    let topology = seed_topology(&pool, "SECO", 1_000_000).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let dry = seed_product(&pool, seller, "SECO").await;
    let fresh = seed_product(&pool, seller, "FRESCO").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/inbound-orders",
        inbound_body(&topology, vec![batch(dry, 1, 1, 60), batch(fresh, 1, 1, 60)]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains(&format!("Product {fresh}")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_inactive_seller_rejects_the_order(pool: PgPool) {
    let topology = seed_topology(&pool, "FROZEN", 1000).await;
    let active = seed_seller(&pool, "ana@example.com").await;
    let inactive = seed_seller(&pool, "bia@example.com").await;
    let p1 = seed_product(&pool, active, "FROZEN").await;
    let p2 = seed_product(&pool, inactive, "FROZEN").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/sellers/{inactive}/status"),
        json!({"is_active": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/inbound-orders",
        inbound_body(&topology, vec![batch(p1, 1, 1, 60), batch(p2, 1, 1, 60)]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains(&format!("Seller {inactive} is inactive")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn operator_of_another_warehouse_is_rejected(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let outsider = create(&pool, "/api/v1/warehouse-operators", json!({"name": "Other"})).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;

    let mut body = inbound_body(&topology, vec![batch(product, 1, 1, 60)]);
    body["operator_id"] = json!(outsider);

    let response = post_json(common::build_test_app(pool), "/api/v1/inbound-orders", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_section_returns_404(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;

    let mut body = inbound_body(&topology, vec![batch(product, 1, 1, 60)]);
    body["section_id"] = json!(999_999);

    let response = post_json(common::build_test_app(pool), "/api/v1/inbound-orders", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_product_returns_404(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/inbound-orders",
        inbound_body(&topology, vec![batch(424_242, 1, 1, 60)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Batch replacement
// ---------------------------------------------------------------------------

async fn place_order(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/inbound-orders", body)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"][0]["inbound_order_id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replacement_drops_omitted_batches(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;
    let order_id = place_order(
        &pool,
        inbound_body(&topology, vec![batch(product, 3, 20, 60), batch(product, 4, 30, 60)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/inbound-orders/{order_id}/item-batches"),
        json!({"item_batches": [batch(product, 9, 15, 45)]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/inbound-orders/{order_id}"),
    )
    .await;
    let json = body_json(response).await;
    let batches = json["data"]["item_batches"].as_array().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0]["product_quantity"], 9);
    assert_eq!(section_used_volume(&pool, topology.warehouse_id).await, 15);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replacement_does_not_count_its_own_batches(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;
    let order_id = place_order(&pool, inbound_body(&topology, vec![batch(product, 1, 60, 60)])).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/inbound-orders/{order_id}/item-batches"),
        json!({"item_batches": [batch(product, 1, 90, 60)]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replacement_rechecks_category(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let fresh = seed_product(&pool, seller, "FRESH").await;
    let frozen = seed_product(&pool, seller, "FROZEN").await;
    let order_id = place_order(&pool, inbound_body(&topology, vec![batch(fresh, 1, 10, 60)])).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/inbound-orders/{order_id}/item-batches"),
        json!({"item_batches": [batch(frozen, 1, 10, 60)]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn picked_batches_cannot_be_replaced(pool: PgPool) {
    let topology = seed_topology(&pool, "FRESH", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;
    let order_id = place_order(&pool, inbound_body(&topology, vec![batch(product, 10, 10, 60)])).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/outbound-orders",
        json!({"items": [{"product_id": product, "quantity": 2}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/inbound-orders/{order_id}/item-batches"),
        json!({"item_batches": [batch(product, 1, 10, 60)]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replacing_unknown_order_returns_404(pool: PgPool) {
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FRESH").await;

    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/inbound-orders/999999/item-batches",
        json!({"item_batches": [batch(product, 1, 10, 60)]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_orders_cannot_both_take_the_last_capacity(pool: PgPool) {
    let topology = seed_topology(&pool, "FROZEN", 100).await;
    let seller = seed_seller(&pool, "ana@example.com").await;
    let product = seed_product(&pool, seller, "FROZEN").await;
    let body = inbound_body(&topology, vec![batch(product, 10, 60, 90)]);

    let (first, second) = tokio::join!(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/inbound-orders",
            body.clone()
        ),
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/inbound-orders",
            body.clone()
        ),
    );

    let mut statuses = vec![first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
    assert_eq!(section_used_volume(&pool, topology.warehouse_id).await, 60);
}
