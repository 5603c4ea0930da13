//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, MenuQuery};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const SELECT_MENU_ITEM: &str = "SELECT id, caterer_id, name, description, unit_price, is_available, category, item_type, created_at, updated_at FROM menu_item";

pub async fn find_by_caterer(
    pool: &SqlitePool,
    caterer_id: i64,
    query: &MenuQuery,
) -> RepoResult<Vec<MenuItem>> {
    let mut builder = QueryBuilder::<Sqlite>::new(SELECT_MENU_ITEM);
    builder.push(" WHERE caterer_id = ").push_bind(caterer_id);
    if query.available_only {
        builder.push(" AND is_available = 1");
    }
    if let Some(category) = &query.category {
        builder.push(" AND category = ").push_bind(category);
    }
    builder.push(" ORDER BY category, name");

    let items = builder
        .build_query_as::<MenuItem>()
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!("{SELECT_MENU_ITEM} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

/// Items of one caterer among `ids`; ids of other caterers are not returned
pub async fn find_many(
    pool: &SqlitePool,
    caterer_id: i64,
    ids: &[i64],
) -> RepoResult<Vec<MenuItem>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut builder = QueryBuilder::<Sqlite>::new(SELECT_MENU_ITEM);
    builder.push(" WHERE caterer_id = ").push_bind(caterer_id);
    builder.push(" AND id IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let items = builder
        .build_query_as::<MenuItem>()
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_name(
    pool: &SqlitePool,
    caterer_id: i64,
    name: &str,
) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "{SELECT_MENU_ITEM} WHERE caterer_id = ? AND name = ? LIMIT 1"
    ))
    .bind(caterer_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn create(
    pool: &SqlitePool,
    caterer_id: i64,
    data: MenuItemCreate,
) -> RepoResult<MenuItem> {
    let name = data.name.trim();
    if find_by_name(pool, caterer_id, name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Menu item '{name}' already exists"
        )));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO menu_item (id, caterer_id, name, description, unit_price, is_available, category, item_type, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(id)
    .bind(caterer_id)
    .bind(name)
    .bind(&data.description)
    .bind(data.unit_price)
    .bind(data.is_available.unwrap_or(true))
    .bind(&data.category)
    .bind(&data.item_type)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))?;

    let new_name = data.name.as_deref().map(str::trim);
    if let Some(name) = new_name
        && name != existing.name
        && find_by_name(pool, existing.caterer_id, name).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Menu item '{name}' already exists"
        )));
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE menu_item SET name = COALESCE(?1, name), description = COALESCE(?2, description), unit_price = COALESCE(?3, unit_price), is_available = COALESCE(?4, is_available), category = COALESCE(?5, category), item_type = COALESCE(?6, item_type), updated_at = ?7 WHERE id = ?8",
    )
    .bind(new_name)
    .bind(&data.description)
    .bind(data.unit_price)
    .bind(data.is_available)
    .bind(&data.category)
    .bind(&data.item_type)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{caterer, test_support::test_pool};
    use shared::models::CatererCreate;

    async fn seed_caterer(pool: &SqlitePool) -> i64 {
        caterer::create(
            pool,
            CatererCreate {
                name: "Saffron".into(),
                contact_email: None,
                misc_cost: None,
                discount_rules: None,
            },
            &[],
        )
        .await
        .unwrap()
        .id
    }

    fn dish(name: &str, price: f64) -> MenuItemCreate {
        MenuItemCreate {
            name: name.into(),
            description: None,
            unit_price: price,
            is_available: None,
            category: Some("Mains".into()),
            item_type: Some("veg".into()),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let pool = test_pool().await;
        let caterer_id = seed_caterer(&pool).await;

        let item = create(&pool, caterer_id, dish("Paneer Tikka", 12.5))
            .await
            .unwrap();
        assert!(item.is_available);
        assert_eq!(item.item_type.as_deref(), Some("veg"));

        let dup = create(&pool, caterer_id, dish(" Paneer Tikka ", 9.0)).await;
        assert!(matches!(dup, Err(RepoError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_available_only_filter() {
        let pool = test_pool().await;
        let caterer_id = seed_caterer(&pool).await;
        create(&pool, caterer_id, dish("Dal", 4.0)).await.unwrap();
        let hidden = create(&pool, caterer_id, dish("Lobster", 40.0)).await.unwrap();
        update(
            &pool,
            hidden.id,
            MenuItemUpdate {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let all = find_by_caterer(&pool, caterer_id, &MenuQuery::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let visible = find_by_caterer(
            &pool,
            caterer_id,
            &MenuQuery {
                available_only: true,
                category: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Dal");
    }

    #[tokio::test]
    async fn test_find_many_scopes_to_caterer() {
        let pool = test_pool().await;
        let first = seed_caterer(&pool).await;
        let second = seed_caterer(&pool).await;
        let mine = create(&pool, first, dish("Naan", 2.0)).await.unwrap();
        let theirs = create(&pool, second, dish("Naan", 2.0)).await.unwrap();

        let found = find_many(&pool, first, &[mine.id, theirs.id]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, mine.id);
        assert!(find_many(&pool, first, &[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let caterer_id = seed_caterer(&pool).await;
        let item = create(&pool, caterer_id, dish("Raita", 1.5)).await.unwrap();

        assert!(delete(&pool, item.id).await.unwrap());
        assert!(!delete(&pool, item.id).await.unwrap());
        assert!(find_by_id(&pool, item.id).await.unwrap().is_none());
    }
}
