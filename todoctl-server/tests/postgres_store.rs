//! PostgreSQL store integration tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p todoctl-server -- --ignored
//!
//! Tests share the `todos` table, so assertions only look at rows the test
//! itself created.

use todoctl_server::db::{create_pool, DbError, PgTodoStore, TodoStore};
use todoctl_server::models::{TodoId, TodoText};

async fn store() -> PgTodoStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    let store = PgTodoStore::new(pool);
    store.ensure_schema().await.expect("schema creation failed");
    store
}

fn text(s: &str) -> TodoText {
    TodoText::new(s).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn ensure_schema_is_idempotent() {
    let store = store().await;
    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_stores_trimmed_text() {
    let store = store().await;

    let todo = store.create(text("  buy milk  ")).await.unwrap();
    assert_eq!(todo.text, "buy milk");

    let fetched = store.get_by_id(TodoId(todo.id)).await.unwrap();
    assert_eq!(fetched, todo);
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_keeps_created_at() {
    let store = store().await;

    let created = store.create(text("draft")).await.unwrap();
    let updated = store.update(TodoId(created.id), text("final")).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "final");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires database"]
async fn remove_then_get_is_not_found() {
    let store = store().await;

    let todo = store.create(text("temporary")).await.unwrap();
    store.remove(TodoId(todo.id)).await.unwrap();

    assert!(matches!(
        store.get_by_id(TodoId(todo.id)).await,
        Err(DbError::NotFound { .. })
    ));
    assert!(matches!(
        store.remove(TodoId(todo.id)).await,
        Err(DbError::NotFound { .. })
    ));
}

#[tokio::test]
#[ignore = "requires database"]
async fn ids_are_not_reused() {
    let store = store().await;

    let first = store.create(text("first")).await.unwrap();
    store.remove(TodoId(first.id)).await.unwrap();
    let second = store.create(text("second")).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_orders_newest_first() {
    let store = store().await;

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        ids.push(store.create(text(name)).await.unwrap().id);
    }

    let listed: Vec<i64> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .filter(|id| ids.contains(id))
        .collect();

    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
#[ignore = "requires database"]
async fn text_is_bound_not_interpolated() {
    let store = store().await;

    let hostile = "'); DROP TABLE todos; --";
    let todo = store.create(text(hostile)).await.unwrap();
    assert_eq!(todo.text, hostile);

    // Table still exists
    store.get_by_id(TodoId(todo.id)).await.unwrap();
}
