//! Outbound order picking: taking stock out of single lots.
//!
//! Every transaction that changes lot quantities locks all the lots it may
//! touch in one ascending-id statement before reading them. Order headers
//! are always locked before lots.

use std::collections::BTreeSet;

use depot_core::error::CoreError;
use depot_core::lot_selection::{self, no_eligible_lot};
use depot_core::refund::{self, RefundReason};
use depot_core::types::{Date, DbId};
use depot_db::models::inbound_order::ItemBatch;
use depot_db::models::outbound_order::{
    NewOutboundItem, OutboundItem, OutboundOrder, OutboundOrderWithItems, PickLine,
    RefundWithOrder,
};
use depot_db::repositories::{ItemBatchRepo, OutboundOrderRepo, ProductRepo, RefundRepo};
use depot_db::DbPool;
use sqlx::PgConnection;

use crate::error::AppResult;

/// Creates outbound orders, rewrites their picks and refunds them.
#[derive(Clone)]
pub struct OutboundOrderService {
    pool: DbPool,
}

impl OutboundOrderService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create an outbound order dated `today`, picking every line from one lot.
    ///
    /// Any line that cannot be served aborts the whole order.
    pub async fn create(
        &self,
        lines: &[PickLine],
        today: Date,
    ) -> AppResult<OutboundOrderWithItems> {
        let mut tx = self.pool.begin().await?;

        let order = OutboundOrderRepo::create(&mut tx, today).await?;
        let items = pick_all(&mut tx, order.id, lines, &[], today).await?;

        tx.commit().await?;

        tracing::info!(
            outbound_order_id = order.id,
            item_count = items.len(),
            "Outbound order created"
        );
        Ok(OutboundOrderWithItems { order, items })
    }

    /// Replace every pick of an outbound order.
    ///
    /// Previous picks go back to their lots before the new lines are picked,
    /// so a line may be served from stock the order itself released.
    pub async fn replace_items(
        &self,
        order_id: DbId,
        lines: &[PickLine],
        today: Date,
    ) -> AppResult<OutboundOrderWithItems> {
        let mut tx = self.pool.begin().await?;

        let order = lock_order(&mut tx, order_id).await?;
        let refunded = RefundRepo::find_by_order(&mut *tx, order.id).await?.is_some();
        if let Err(err) = refund::verify_items_editable(order.id, refunded) {
            tracing::warn!(
                outbound_order_id = order.id,
                error = %err,
                "Outbound item replacement rejected"
            );
            return Err(err.into());
        }

        let released = OutboundOrderRepo::delete_items(&mut tx, order.id).await?;
        let items = pick_all(&mut tx, order.id, lines, &released, today).await?;
        OutboundOrderRepo::touch(&mut tx, order.id).await?;

        tx.commit().await?;

        tracing::info!(
            outbound_order_id = order.id,
            released = released.len(),
            item_count = items.len(),
            "Outbound order items replaced"
        );
        Ok(OutboundOrderWithItems { order, items })
    }

    /// Refund an outbound order dated `today`.
    ///
    /// Every picked unit goes back to the lot it was taken from. The picks
    /// stay on the order as a record of what was returned.
    pub async fn refund(
        &self,
        order_id: DbId,
        reason: RefundReason,
        today: Date,
    ) -> AppResult<RefundWithOrder> {
        let mut tx = self.pool.begin().await?;

        let order = lock_order(&mut tx, order_id).await?;
        let refunded = RefundRepo::find_by_order(&mut *tx, order.id).await?.is_some();
        if let Err(err) = refund::verify_not_refunded(order.id, refunded) {
            tracing::warn!(
                outbound_order_id = order.id,
                error = %err,
                "Outbound refund rejected"
            );
            return Err(err.into());
        }

        let items = OutboundOrderRepo::list_items(&mut *tx, order.id).await?;
        let lot_ids: Vec<DbId> = items.iter().map(|i| i.item_batch_id).collect();
        ItemBatchRepo::lock_for_picking(&mut tx, &[], &lot_ids).await?;
        for item in &items {
            ItemBatchRepo::adjust_quantity(&mut tx, item.item_batch_id, item.quantity).await?;
        }
        let refund = RefundRepo::create(&mut tx, order.id, reason, today).await?;

        tx.commit().await?;

        tracing::info!(
            outbound_order_id = order.id,
            refund_id = refund.id,
            reason = reason.code(),
            item_count = items.len(),
            "Outbound order refunded"
        );
        Ok(RefundWithOrder {
            refund,
            outbound_order: OutboundOrderWithItems { order, items },
        })
    }

    /// Fetch an order with its picks.
    pub async fn get(&self, order_id: DbId) -> AppResult<OutboundOrderWithItems> {
        let order = OutboundOrderRepo::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(CoreError::not_found("OutboundOrder", order_id))?;
        let items = OutboundOrderRepo::list_items(&self.pool, order.id).await?;
        Ok(OutboundOrderWithItems { order, items })
    }
}

async fn lock_order(conn: &mut PgConnection, order_id: DbId) -> AppResult<OutboundOrder> {
    let order = OutboundOrderRepo::lock_by_id(conn, order_id)
        .await?
        .ok_or(CoreError::not_found("OutboundOrder", order_id))?;
    Ok(order)
}

/// Lots locked by the current transaction, kept in step with the updates
/// it makes.
struct LockedLots(Vec<ItemBatch>);

impl LockedLots {
    fn of_product(&self, product_id: DbId) -> Vec<ItemBatch> {
        self.0
            .iter()
            .filter(|lot| lot.product_id == product_id)
            .cloned()
            .collect()
    }

    fn update(&mut self, lot: ItemBatch) {
        if let Some(slot) = self.0.iter_mut().find(|l| l.id == lot.id) {
            *slot = lot;
        }
    }
}

/// Put `released` picks back into their lots, then serve every line.
///
/// The lots of every requested product and every released lot are locked
/// up front, so line order in the request never decides lock order.
async fn pick_all(
    conn: &mut PgConnection,
    order_id: DbId,
    lines: &[PickLine],
    released: &[OutboundItem],
    today: Date,
) -> AppResult<Vec<OutboundItem>> {
    for line in lines {
        lot_selection::validate_pick_quantity(line.quantity)?;
    }
    let product_ids: BTreeSet<DbId> = lines.iter().map(|l| l.product_id).collect();
    for &product_id in &product_ids {
        ProductRepo::find_by_id(&mut *conn, product_id)
            .await?
            .ok_or(CoreError::not_found("Product", product_id))?;
    }

    let product_ids: Vec<DbId> = product_ids.into_iter().collect();
    let released_lots: Vec<DbId> = released.iter().map(|i| i.item_batch_id).collect();
    let mut lots = LockedLots(
        ItemBatchRepo::lock_for_picking(conn, &product_ids, &released_lots).await?,
    );

    for item in released {
        let lot = ItemBatchRepo::adjust_quantity(conn, item.item_batch_id, item.quantity).await?;
        lots.update(lot);
    }

    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        items.push(pick(conn, &mut lots, order_id, line, today).await?);
    }
    Ok(items)
}

/// Serve one line from a single already-locked lot and record the pick.
async fn pick(
    conn: &mut PgConnection,
    lots: &mut LockedLots,
    order_id: DbId,
    line: &PickLine,
    today: Date,
) -> AppResult<OutboundItem> {
    let candidates = lots.of_product(line.product_id);
    let Some(lot) = lot_selection::select_lot(&candidates, line.quantity, today) else {
        let err = no_eligible_lot(line.product_id, line.quantity);
        tracing::warn!(
            product_id = line.product_id,
            quantity = line.quantity,
            lot_count = candidates.len(),
            "Outbound pick rejected"
        );
        return Err(err.into());
    };

    let picked = ItemBatchRepo::adjust_quantity(conn, lot.id, -line.quantity).await?;
    let item = OutboundOrderRepo::add_item(
        conn,
        &NewOutboundItem {
            outbound_order_id: order_id,
            item_batch_id: picked.id,
            product_id: line.product_id,
            quantity: line.quantity,
        },
    )
    .await?;
    lots.update(picked);
    Ok(item)
}
