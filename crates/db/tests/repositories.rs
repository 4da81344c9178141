//! Repository integration tests against PostgreSQL.
//!
//! Each test gets a fresh migrated database from `DATABASE_URL`.

use chrono::Duration;
use depot_core::refund::RefundReason;
use depot_core::storage::StorageCategory;
use depot_core::types::{today, DbId};
use depot_db::models::inbound_order::{ItemBatchInput, NewInboundOrder};
use depot_db::models::outbound_order::NewOutboundItem;
use depot_db::models::product::CreateProduct;
use depot_db::models::seller::CreateSeller;
use depot_db::models::warehouse::{CreateSection, CreateWarehouse, CreateWarehouseOperator};
use depot_db::repositories::{
    InboundOrderRepo, ItemBatchRepo, OutboundOrderRepo, ProductRepo, RefundRepo, SectionRepo,
    SellerRepo, WarehouseOperatorRepo, WarehouseRepo,
};
use sqlx::PgPool;

struct Fixture {
    warehouse_id: DbId,
    section_id: DbId,
    operator_id: DbId,
    product_id: DbId,
}

async fn fixture(pool: &PgPool) -> Fixture {
    let operator = WarehouseOperatorRepo::create(
        pool,
        &CreateWarehouseOperator {
            name: "Op".into(),
        },
    )
    .await
    .unwrap();
    let warehouse = WarehouseRepo::create(
        pool,
        &CreateWarehouse {
            name: "Main".into(),
            operator_id: operator.id,
        },
    )
    .await
    .unwrap();
    let section = SectionRepo::create(
        pool,
        warehouse.id,
        &CreateSection {
            name: "A".into(),
            category: StorageCategory::Fresh,
            capacity: 100,
        },
    )
    .await
    .unwrap();
    let seller = SellerRepo::create(
        pool,
        &CreateSeller {
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            email: "ana@example.com".into(),
            address: "Rua Verde".into(),
            house_number: 12,
            zip_code: "01310100".into(),
        },
    )
    .await
    .unwrap();
    let product = ProductRepo::create(
        pool,
        &CreateProduct {
            seller_id: seller.id,
            name: "Milk".into(),
            price_cents: 450,
            category: StorageCategory::Fresh,
        },
    )
    .await
    .unwrap();

    Fixture {
        warehouse_id: warehouse.id,
        section_id: section.id,
        operator_id: operator.id,
        product_id: product.id,
    }
}

fn line(product_id: DbId, quantity: i32, volume: i64, due_in_days: i64) -> ItemBatchInput {
    ItemBatchInput {
        product_id,
        quantity,
        volume,
        due_date: today() + Duration::days(due_in_days),
    }
}

async fn place(pool: &PgPool, f: &Fixture, lines: &[ItemBatchInput]) -> DbId {
    let mut tx = pool.begin().await.unwrap();
    let order = InboundOrderRepo::create(
        &mut tx,
        &NewInboundOrder {
            warehouse_id: f.warehouse_id,
            section_id: f.section_id,
            operator_id: f.operator_id,
            order_date: today(),
        },
    )
    .await
    .unwrap();
    ItemBatchRepo::create_many(&mut tx, order.id, lines)
        .await
        .unwrap();
    tx.commit().await.unwrap();
    order.id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_many_keeps_input_order(pool: PgPool) {
    let f = fixture(&pool).await;
    let order_id = place(
        &pool,
        &f,
        &[line(f.product_id, 3, 10, 90), line(f.product_id, 1, 20, 30)],
    )
    .await;

    let batches = ItemBatchRepo::list_by_order(&pool, order_id).await.unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].product_quantity, 3);
    assert_eq!(batches[1].volume, 20);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn used_volume_can_exclude_an_order(pool: PgPool) {
    let f = fixture(&pool).await;
    let first = place(&pool, &f, &[line(f.product_id, 1, 30, 60)]).await;
    place(&pool, &f, &[line(f.product_id, 1, 25, 60)]).await;

    let mut conn = pool.acquire().await.unwrap();
    let all = SectionRepo::used_volume(&mut conn, f.section_id, None)
        .await
        .unwrap();
    let others = SectionRepo::used_volume(&mut conn, f.section_id, Some(first))
        .await
        .unwrap();
    assert_eq!(all, 55);
    assert_eq!(others, 25);

    let usage = SectionRepo::list_by_warehouse(&pool, f.warehouse_id)
        .await
        .unwrap();
    assert_eq!(usage[0].used_volume, 55);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn picking_locks_product_lots_and_listed_lots_by_id(pool: PgPool) {
    let f = fixture(&pool).await;
    let seller = SellerRepo::find_by_product_id(&pool, f.product_id)
        .await
        .unwrap()
        .unwrap();
    let other = ProductRepo::create(
        &pool,
        &CreateProduct {
            seller_id: seller.id,
            name: "Cheese".into(),
            price_cents: 900,
            category: StorageCategory::Fresh,
        },
    )
    .await
    .unwrap();
    let order_id = place(
        &pool,
        &f,
        &[
            line(f.product_id, 1, 1, 90),
            line(other.id, 1, 1, 30),
            line(f.product_id, 1, 1, 60),
            line(other.id, 1, 1, 45),
        ],
    )
    .await;
    let all = ItemBatchRepo::list_by_order(&pool, order_id).await.unwrap();
    let other_lot = all.iter().find(|l| l.product_id == other.id).unwrap().id;

    let mut tx = pool.begin().await.unwrap();
    let lots = ItemBatchRepo::lock_for_picking(&mut tx, &[f.product_id], &[other_lot])
        .await
        .unwrap();
    let ids: Vec<_> = lots.iter().map(|l| l.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(lots.len(), 3);
    assert_eq!(lots.iter().filter(|l| l.product_id == other.id).count(), 1);

    let none = ItemBatchRepo::lock_for_picking(&mut tx, &[], &[]).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quantity_cannot_go_negative(pool: PgPool) {
    let f = fixture(&pool).await;
    let order_id = place(&pool, &f, &[line(f.product_id, 5, 1, 60)]).await;
    let lot = ItemBatchRepo::list_by_order(&pool, order_id).await.unwrap()[0].clone();

    let mut conn = pool.acquire().await.unwrap();
    let updated = ItemBatchRepo::adjust_quantity(&mut conn, lot.id, -5)
        .await
        .unwrap();
    assert_eq!(updated.product_quantity, 0);
    assert!(ItemBatchRepo::adjust_quantity(&mut conn, lot.id, -1)
        .await
        .is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn picks_are_detected_and_returned_on_delete(pool: PgPool) {
    let f = fixture(&pool).await;
    let inbound_id = place(&pool, &f, &[line(f.product_id, 5, 1, 60)]).await;
    let lot = ItemBatchRepo::list_by_order(&pool, inbound_id).await.unwrap()[0].clone();

    let mut tx = pool.begin().await.unwrap();
    assert!(!ItemBatchRepo::has_picks_for_order(&mut tx, inbound_id)
        .await
        .unwrap());

    let outbound = OutboundOrderRepo::create(&mut tx, today()).await.unwrap();
    OutboundOrderRepo::add_item(
        &mut tx,
        &NewOutboundItem {
            outbound_order_id: outbound.id,
            item_batch_id: lot.id,
            product_id: f.product_id,
            quantity: 2,
        },
    )
    .await
    .unwrap();
    assert!(ItemBatchRepo::has_picks_for_order(&mut tx, inbound_id)
        .await
        .unwrap());

    let removed = OutboundOrderRepo::delete_items(&mut tx, outbound.id)
        .await
        .unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].quantity, 2);
    assert!(OutboundOrderRepo::list_items(&mut *tx, outbound.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seller_is_found_through_product(pool: PgPool) {
    let f = fixture(&pool).await;
    let seller = SellerRepo::find_by_product_id(&pool, f.product_id)
        .await
        .unwrap()
        .unwrap();
    assert!(seller.is_active);

    let updated = SellerRepo::set_active(&pool, seller.id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!updated.is_active);
    assert!(SellerRepo::set_active(&pool, 9999, true)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn an_order_is_refunded_at_most_once(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let order = OutboundOrderRepo::create(&mut tx, today()).await.unwrap();
    tx.commit().await.unwrap();

    assert!(RefundRepo::find_by_order(&pool, order.id)
        .await
        .unwrap()
        .is_none());

    let mut conn = pool.acquire().await.unwrap();
    let refund = RefundRepo::create(&mut conn, order.id, RefundReason::Damaged, today())
        .await
        .unwrap();
    assert_eq!(refund.reason_id, RefundReason::Damaged.id());
    assert_eq!(refund.refund_date, today());

    let found = RefundRepo::find_by_order(&pool, order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, refund.id);

    let err = RefundRepo::create(&mut conn, order.id, RefundReason::Expired, today())
        .await
        .unwrap_err();
    let constraint = err
        .as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_owned);
    assert_eq!(constraint.as_deref(), Some("uq_refunds_outbound_order"));
}
