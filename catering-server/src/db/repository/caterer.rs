//! Caterer Repository
//!
//! Profile rows live in `caterer`; the discount table lives in
//! `discount_rule` and is always replaced as a whole.

use super::{RepoError, RepoResult};
use shared::models::{Caterer, CatererCreate, CatererUpdate};
use shared::pricing::DiscountRule;
use sqlx::{Sqlite, SqlitePool, Transaction};

const SELECT_CATERER: &str =
    "SELECT id, name, contact_email, misc_cost, created_at, updated_at FROM caterer";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Caterer>> {
    let mut caterers = sqlx::query_as::<_, Caterer>(&format!("{SELECT_CATERER} ORDER BY name"))
        .fetch_all(pool)
        .await?;
    for caterer in &mut caterers {
        caterer.discount_rules = find_rules(pool, caterer.id).await?;
    }
    Ok(caterers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Caterer>> {
    let caterer = sqlx::query_as::<_, Caterer>(&format!("{SELECT_CATERER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match caterer {
        Some(mut caterer) => {
            caterer.discount_rules = find_rules(pool, id).await?;
            Ok(Some(caterer))
        }
        None => Ok(None),
    }
}

/// Discount table of one caterer, sorted by `min`
pub async fn find_rules(pool: &SqlitePool, caterer_id: i64) -> RepoResult<Vec<DiscountRule>> {
    let rules = sqlx::query_as::<_, DiscountRule>(
        "SELECT min_guests AS min, discount FROM discount_rule WHERE caterer_id = ? ORDER BY min_guests",
    )
    .bind(caterer_id)
    .fetch_all(pool)
    .await?;
    Ok(rules)
}

/// Insert a caterer with an already validated discount table
pub async fn create(
    pool: &SqlitePool,
    data: CatererCreate,
    rules: &[DiscountRule],
) -> RepoResult<Caterer> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO caterer (id, name, contact_email, misc_cost, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(data.name.trim())
    .bind(&data.contact_email)
    .bind(data.misc_cost.unwrap_or(0.0))
    .bind(now)
    .execute(&mut *tx)
    .await?;
    replace_rules(&mut tx, id, rules).await?;
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create caterer".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CatererUpdate) -> RepoResult<Caterer> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE caterer SET name = COALESCE(?1, name), contact_email = COALESCE(?2, contact_email), updated_at = ?3 WHERE id = ?4",
    )
    .bind(data.name.as_deref().map(str::trim))
    .bind(&data.contact_email)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Caterer {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Caterer {id} not found")))
}

/// Replace the surcharge (when given) and the whole discount table
pub async fn replace_pricing(
    pool: &SqlitePool,
    id: i64,
    misc_cost: Option<f64>,
    rules: &[DiscountRule],
) -> RepoResult<Caterer> {
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;
    let rows = sqlx::query(
        "UPDATE caterer SET misc_cost = COALESCE(?1, misc_cost), updated_at = ?2 WHERE id = ?3",
    )
    .bind(misc_cost)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Caterer {id} not found")));
    }
    replace_rules(&mut tx, id, rules).await?;
    tx.commit().await?;

    tracing::info!(caterer_id = id, tiers = rules.len(), "Pricing settings replaced");

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Caterer {id} not found")))
}

async fn replace_rules(
    tx: &mut Transaction<'_, Sqlite>,
    caterer_id: i64,
    rules: &[DiscountRule],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM discount_rule WHERE caterer_id = ?")
        .bind(caterer_id)
        .execute(&mut **tx)
        .await?;
    for rule in rules {
        sqlx::query(
            "INSERT INTO discount_rule (id, caterer_id, min_guests, discount) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(shared::util::snowflake_id())
        .bind(caterer_id)
        .bind(rule.min)
        .bind(rule.discount)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    fn new_caterer(name: &str) -> CatererCreate {
        CatererCreate {
            name: name.into(),
            contact_email: Some("kitchen@example.com".into()),
            misc_cost: Some(50.0),
            discount_rules: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_with_rules_sorted() {
        let pool = test_pool().await;
        let rules = vec![DiscountRule::new(50, 10.0), DiscountRule::new(10, 5.0)];
        let created = create(&pool, new_caterer("Spice Route"), &rules)
            .await
            .unwrap();

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Spice Route");
        assert_eq!(found.misc_cost, 50.0);
        assert_eq!(
            found.discount_rules,
            vec![DiscountRule::new(10, 5.0), DiscountRule::new(50, 10.0)]
        );
    }

    #[tokio::test]
    async fn test_replace_pricing_swaps_whole_table() {
        let pool = test_pool().await;
        let created = create(&pool, new_caterer("Tandoor"), &[DiscountRule::new(5, 10.0)])
            .await
            .unwrap();

        let updated = replace_pricing(&pool, created.id, None, &[DiscountRule::new(20, 15.0)])
            .await
            .unwrap();
        assert_eq!(updated.misc_cost, 50.0);
        assert_eq!(updated.discount_rules, vec![DiscountRule::new(20, 15.0)]);

        let cleared = replace_pricing(&pool, created.id, Some(0.0), &[])
            .await
            .unwrap();
        assert_eq!(cleared.misc_cost, 0.0);
        assert!(cleared.discount_rules.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_caterer() {
        let pool = test_pool().await;
        let result = update(
            &pool,
            404,
            CatererUpdate {
                name: Some("Ghost".into()),
                contact_email: None,
            },
        )
        .await;
        assert!(matches!(result, Err(RepoError::NotFound(_))));

        let result = replace_pricing(&pool, 404, Some(1.0), &[]).await;
        assert!(matches!(result, Err(RepoError::NotFound(_))));
    }
}
