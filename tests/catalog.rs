mod common;

use heliostore::catalog::QuickView;
use heliostore::error::StoreError;
use heliostore::storage::ThemeMode;

#[tokio::test]
async fn test_store_starts_empty() {
    let (_storage, store) = common::mem_store().await;
    assert!(store.products().is_empty());
    assert!(store.favorites().await.is_empty());
}

#[tokio::test]
async fn test_find_missing_id_is_not_found() {
    let (_storage, store) = common::mem_store().await;
    match store.find("ghost") {
        Err(StoreError::NotFound(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_insert_first_puts_new_product_at_head() {
    let (_storage, store) = common::mem_store().await;
    store.replace_all(vec![common::product("p1", "Panel", 100)]);

    store.insert_first(common::product("p2", "Inverter", 200));

    let ids: Vec<String> = store.products().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["p2", "p1"]);
}

#[tokio::test]
async fn test_replace_in_place_keeps_position() {
    let (_storage, store) = common::mem_store().await;
    store.replace_all(vec![
        common::product("p1", "Panel", 100),
        common::product("p2", "Inverter", 200),
        common::product("p3", "Battery", 300),
    ]);

    let mut edited = common::product("p2", "Hybrid Inverter", 250);
    edited.short_description = "updated".to_string();
    assert!(store.replace_in_place(edited));

    let products = store.products();
    assert_eq!(products[1].id, "p2");
    assert_eq!(products[1].name, "Hybrid Inverter");
    assert_eq!(products[0].id, "p1");
    assert_eq!(products[2].id, "p3");
}

#[tokio::test]
async fn test_replace_in_place_unknown_id_is_noop() {
    let (_storage, store) = common::mem_store().await;
    store.replace_all(vec![common::product("p1", "Panel", 100)]);

    assert!(!store.replace_in_place(common::product("ghost", "Ghost", 1)));
    assert_eq!(store.products().len(), 1);
}

#[tokio::test]
async fn test_favorite_toggle_is_an_involution() {
    let (_storage, store) = common::mem_store().await;

    assert!(store.toggle_favorite("p1").await);
    assert!(store.is_favorite("p1").await);

    assert!(!store.toggle_favorite("p1").await);
    assert!(!store.is_favorite("p1").await);
    assert!(store.favorites().await.is_empty());
}

#[tokio::test]
async fn test_favorites_survive_reload() {
    let (storage, store) = common::mem_store().await;
    store.toggle_favorite("p1").await;
    store.toggle_favorite("p2").await;

    // A fresh store over the same cache sees the persisted set.
    let fresh = heliostore::CatalogStore::new(storage);
    fresh.load_cached().await.unwrap();
    let favorites = fresh.favorites().await;
    assert!(favorites.contains("p1"));
    assert!(favorites.contains("p2"));
    assert_eq!(favorites.len(), 2);
}

#[tokio::test]
async fn test_subscription_sees_replacement() {
    let (_storage, store) = common::mem_store().await;
    let mut rx = store.subscribe();

    store.replace_all(vec![common::product("p1", "Panel", 100)]);

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().len(), 1);
}

#[tokio::test]
async fn test_quick_view_holds_one_selection() {
    let view = QuickView::new();
    assert!(view.current().await.is_none());

    view.open(common::product("p1", "Panel", 100)).await;
    view.open(common::product("p2", "Inverter", 200)).await;
    assert_eq!(view.current().await.unwrap().id, "p2");

    view.close().await;
    assert!(view.current().await.is_none());
}

#[tokio::test]
async fn test_theme_flag_round_trip() {
    let (storage, _store) = common::mem_store().await;
    let storage = storage.lock().await;

    assert_eq!(storage.load_theme().await.unwrap(), None);

    storage.store_theme(ThemeMode::Dark).await.unwrap();
    assert_eq!(storage.load_theme().await.unwrap(), Some(ThemeMode::Dark));

    storage.store_theme(ThemeMode::Light).await.unwrap();
    assert_eq!(storage.load_theme().await.unwrap(), Some(ThemeMode::Light));
}
