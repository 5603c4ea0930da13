//! Catering Order Repository
//!
//! Orders are written once with their pricing snapshot; afterwards only the
//! status column changes.

use super::{RepoError, RepoResult};
use shared::models::{CateringOrder, OrderLine, OrderQuery, OrderStatus};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const SELECT_ORDER: &str = "SELECT id, caterer_id, customer_name, customer_email, customer_phone, event_date, guest_count, quantity_mode, status, note, subtotal, misc_cost, discount_percent, discount_amount, total, created_at, updated_at FROM catering_order";

/// Persist an order and its line snapshot in one transaction
pub async fn insert(pool: &SqlitePool, order: &CateringOrder) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO catering_order (id, caterer_id, customer_name, customer_email, customer_phone, event_date, guest_count, quantity_mode, status, note, subtotal, misc_cost, discount_percent, discount_amount, total, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
    )
    .bind(order.id)
    .bind(order.caterer_id)
    .bind(&order.customer_name)
    .bind(&order.customer_email)
    .bind(&order.customer_phone)
    .bind(&order.event_date)
    .bind(order.guest_count)
    .bind(order.quantity_mode)
    .bind(order.status)
    .bind(&order.note)
    .bind(order.subtotal)
    .bind(order.misc_cost)
    .bind(order.discount_percent)
    .bind(order.discount_amount)
    .bind(order.total)
    .bind(order.created_at)
    .bind(order.updated_at)
    .execute(&mut *tx)
    .await?;

    for line in &order.lines {
        sqlx::query(
            "INSERT INTO order_line (id, order_id, menu_item_id, name, unit_price, quantity, line_total) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(line.id)
        .bind(order.id)
        .bind(line.menu_item_id)
        .bind(&line.name)
        .bind(line.unit_price)
        .bind(line.quantity)
        .bind(line.line_total)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Order with its lines
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<CateringOrder>> {
    let order = sqlx::query_as::<_, CateringOrder>(&format!("{SELECT_ORDER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match order {
        Some(mut order) => {
            order.lines = find_lines(pool, id).await?;
            Ok(Some(order))
        }
        None => Ok(None),
    }
}

/// Newest first; lines are not loaded
pub async fn find_by_caterer(
    pool: &SqlitePool,
    caterer_id: i64,
    query: &OrderQuery,
) -> RepoResult<Vec<CateringOrder>> {
    let mut builder = QueryBuilder::<Sqlite>::new(SELECT_ORDER);
    builder.push(" WHERE caterer_id = ").push_bind(caterer_id);
    if let Some(status) = query.status {
        builder.push(" AND status = ").push_bind(status);
    }
    builder.push(" ORDER BY created_at DESC, id DESC");

    let orders = builder
        .build_query_as::<CateringOrder>()
        .fetch_all(pool)
        .await?;
    Ok(orders)
}

pub async fn find_lines(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderLine>> {
    let lines = sqlx::query_as::<_, OrderLine>(
        "SELECT id, order_id, menu_item_id, name, unit_price, quantity, line_total FROM order_line WHERE order_id = ? ORDER BY rowid",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(lines)
}

/// Compare-and-set the status; fails when the row no longer holds `from`
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    from: OrderStatus,
    to: OrderStatus,
) -> RepoResult<CateringOrder> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE catering_order SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
    )
    .bind(to)
    .bind(now)
    .bind(id)
    .bind(from)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::Validation(format!(
            "Order {id} is no longer {}",
            from.as_str()
        )));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}
