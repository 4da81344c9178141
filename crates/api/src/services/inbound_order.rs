//! Inbound order placement: receiving lots into a warehouse section.

use std::collections::BTreeSet;

use depot_core::error::CoreError;
use depot_core::inbound::{self, ProductRef, SellerRef};
use depot_core::types::{Date, DbId, Volume};
use depot_db::models::inbound_order::{
    CreateInboundOrder, InboundOrderWithBatches, ItemBatch, ItemBatchInput, NewInboundOrder,
};
use depot_db::models::warehouse::Section;
use depot_db::repositories::{
    InboundOrderRepo, ItemBatchRepo, ProductRepo, SectionRepo, SellerRepo, WarehouseOperatorRepo,
    WarehouseRepo,
};
use depot_db::DbPool;
use sqlx::PgConnection;

use crate::error::AppResult;

/// Creates inbound orders and rewrites their batch lists.
#[derive(Clone)]
pub struct InboundOrderService {
    pool: DbPool,
}

impl InboundOrderService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Place a new inbound order dated `today`.
    ///
    /// The target section stays row-locked from the capacity read until
    /// commit. Returns the persisted batches in request order.
    pub async fn create(
        &self,
        input: &CreateInboundOrder,
        today: Date,
    ) -> AppResult<Vec<ItemBatch>> {
        let mut tx = self.pool.begin().await?;

        let warehouse = WarehouseRepo::find_by_id(&mut *tx, input.warehouse_id)
            .await?
            .ok_or(CoreError::not_found("Warehouse", input.warehouse_id))?;
        let section = lock_section(&mut tx, input.section_id).await?;
        WarehouseOperatorRepo::find_by_id(&mut *tx, input.operator_id)
            .await?
            .ok_or(CoreError::not_found("WarehouseOperator", input.operator_id))?;
        let products = resolve_products(&mut tx, &input.item_batches).await?;

        let used = SectionRepo::used_volume(&mut tx, section.id, None).await?;
        let state = section.state(used)?;
        let volumes = volumes_of(&input.item_batches);

        if let Err(err) = inbound::validate_creation(
            &warehouse.placement_ref(),
            input.operator_id,
            &state,
            &products,
            &volumes,
        ) {
            tracing::warn!(
                warehouse_id = input.warehouse_id,
                section_id = input.section_id,
                error = %err,
                "Inbound order rejected"
            );
            return Err(err.into());
        }
        check_sellers(&mut tx, &products).await?;

        let order = InboundOrderRepo::create(
            &mut tx,
            &NewInboundOrder {
                warehouse_id: input.warehouse_id,
                section_id: input.section_id,
                operator_id: input.operator_id,
                order_date: today,
            },
        )
        .await?;
        let batches = ItemBatchRepo::create_many(&mut tx, order.id, &input.item_batches).await?;

        tx.commit().await?;

        tracing::info!(
            inbound_order_id = order.id,
            section_id = section.id,
            batch_count = batches.len(),
            volume = inbound::total_volume(volumes),
            "Inbound order created"
        );
        Ok(batches)
    }

    /// Replace every batch of an inbound order.
    ///
    /// Only category and capacity are re-checked; the order keeps its
    /// warehouse, section and operator. Batches already picked by an
    /// outbound order cannot be replaced. The order's lots stay locked so
    /// no pick can land on them between that check and the delete.
    pub async fn replace_batches(
        &self,
        order_id: DbId,
        lines: &[ItemBatchInput],
    ) -> AppResult<Vec<ItemBatch>> {
        let mut tx = self.pool.begin().await?;

        let order = InboundOrderRepo::find_by_id(&mut *tx, order_id)
            .await?
            .ok_or(CoreError::not_found("InboundOrder", order_id))?;
        let section = lock_section(&mut tx, order.section_id).await?;
        ItemBatchRepo::lock_by_order(&mut tx, order.id).await?;
        let products = resolve_products(&mut tx, lines).await?;

        if ItemBatchRepo::has_picks_for_order(&mut tx, order.id).await? {
            return Err(CoreError::BusinessRule(format!(
                "Inbound order {order_id} has batches already picked by outbound orders"
            ))
            .into());
        }

        let used = SectionRepo::used_volume(&mut tx, section.id, Some(order.id)).await?;
        let state = section.state(used)?;
        let volumes = volumes_of(lines);

        if let Err(err) = inbound::validate_replacement(&state, &products, &volumes) {
            tracing::warn!(
                inbound_order_id = order.id,
                section_id = section.id,
                error = %err,
                "Inbound batch replacement rejected"
            );
            return Err(err.into());
        }

        let removed = ItemBatchRepo::delete_by_order(&mut tx, order.id).await?;
        let batches = ItemBatchRepo::create_many(&mut tx, order.id, lines).await?;
        InboundOrderRepo::touch(&mut tx, order.id).await?;

        tx.commit().await?;

        tracing::info!(
            inbound_order_id = order.id,
            removed,
            batch_count = batches.len(),
            "Inbound order batches replaced"
        );
        Ok(batches)
    }

    /// Fetch an order with its current batches.
    pub async fn get(&self, order_id: DbId) -> AppResult<InboundOrderWithBatches> {
        let order = InboundOrderRepo::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(CoreError::not_found("InboundOrder", order_id))?;
        let item_batches = ItemBatchRepo::list_by_order(&self.pool, order.id).await?;
        Ok(InboundOrderWithBatches {
            order,
            item_batches,
        })
    }
}

async fn lock_section(conn: &mut PgConnection, section_id: DbId) -> AppResult<Section> {
    let section = SectionRepo::lock_by_id(conn, section_id)
        .await?
        .ok_or(CoreError::not_found("Section", section_id))?;
    Ok(section)
}

/// Resolve each line's product, in request order.
async fn resolve_products(
    conn: &mut PgConnection,
    lines: &[ItemBatchInput],
) -> AppResult<Vec<ProductRef>> {
    let mut products = Vec::with_capacity(lines.len());
    for line in lines {
        let product = ProductRepo::find_by_id(&mut *conn, line.product_id)
            .await?
            .ok_or(CoreError::not_found("Product", line.product_id))?;
        products.push(ProductRef {
            id: product.id,
            category: product.category()?,
        });
    }
    Ok(products)
}

/// Look up the seller of every distinct product and require all active.
async fn check_sellers(conn: &mut PgConnection, products: &[ProductRef]) -> AppResult<()> {
    let product_ids: BTreeSet<DbId> = products.iter().map(|p| p.id).collect();
    let mut sellers = Vec::with_capacity(product_ids.len());
    for product_id in product_ids {
        let seller = SellerRepo::find_by_product_id(&mut *conn, product_id)
            .await?
            .ok_or(CoreError::not_found("Seller of product", product_id))?;
        sellers.push(SellerRef {
            id: seller.id,
            is_active: seller.is_active,
        });
    }

    if let Err(err) = inbound::verify_sellers_active(&sellers) {
        tracing::warn!(error = %err, "Inbound order rejected");
        return Err(err.into());
    }
    Ok(())
}

fn volumes_of(lines: &[ItemBatchInput]) -> Vec<Volume> {
    lines.iter().map(|l| l.volume).collect()
}
