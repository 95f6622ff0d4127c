//! Integration tests for `RemarkRepo`.

use sqlx::SqlitePool;
use wishlist_db::models::wish_item::CreateWishItem;
use wishlist_db::repositories::{RemarkRepo, WishItemRepo};

async fn new_item(pool: &SqlitePool, title: &str) -> i64 {
    let input = CreateWishItem {
        title: title.to_string(),
        ..Default::default()
    };
    WishItemRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: SqlitePool) {
    let item_id = new_item(&pool, "Visit Japan").await;

    let remark = RemarkRepo::create(&pool, item_id, "Look into rail passes")
        .await
        .unwrap();

    assert_eq!(remark.wish_item_id, item_id);
    assert_eq!(remark.content, "Look into rail passes");
    assert_eq!(remark.created_at, remark.updated_at);
    assert_eq!(
        RemarkRepo::find_by_id(&pool, remark.id).await.unwrap(),
        Some(remark)
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_for_missing_item_is_fk_violation(pool: SqlitePool) {
    let err = RemarkRepo::create(&pool, 4242, "Nobody home")
        .await
        .unwrap_err();
    assert!(wishlist_db::is_foreign_key_violation(&err));
    assert!(!wishlist_db::is_unique_violation(&err));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_is_scoped_and_newest_first(pool: SqlitePool) {
    let japan = new_item(&pool, "Visit Japan").await;
    let piano = new_item(&pool, "Learn piano").await;

    RemarkRepo::create(&pool, japan, "one").await.unwrap();
    RemarkRepo::create(&pool, piano, "unrelated").await.unwrap();
    RemarkRepo::create(&pool, japan, "two").await.unwrap();
    RemarkRepo::create(&pool, japan, "three").await.unwrap();

    let contents: Vec<String> = RemarkRepo::list_by_wish_item(&pool, japan)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.content)
        .collect();

    assert_eq!(contents, vec!["three", "two", "one"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_for_unknown_item_is_empty(pool: SqlitePool) {
    assert!(RemarkRepo::list_by_wish_item(&pool, 9)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_content(pool: SqlitePool) {
    let item_id = new_item(&pool, "Visit Japan").await;
    let remark = RemarkRepo::create(&pool, item_id, "draft").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let updated = RemarkRepo::update(&pool, remark.id, "final")
        .await
        .unwrap()
        .expect("remark should exist");

    assert_eq!(updated.content, "final");
    assert_eq!(updated.wish_item_id, item_id);
    assert!(updated.updated_at > remark.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    assert!(RemarkRepo::update(&pool, 1, "x").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_reports_whether_removed(pool: SqlitePool) {
    let item_id = new_item(&pool, "Visit Japan").await;
    let remark = RemarkRepo::create(&pool, item_id, "gone soon").await.unwrap();

    assert!(RemarkRepo::delete(&pool, remark.id).await.unwrap());
    assert!(!RemarkRepo::delete(&pool, remark.id).await.unwrap());

    // The parent item is unaffected.
    assert!(WishItemRepo::find_by_id(&pool, item_id)
        .await
        .unwrap()
        .is_some());
}
