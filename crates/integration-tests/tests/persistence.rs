//! Cross-reopen persistence: the file-backed store must behave like the
//! in-memory one, plus survive process restarts (the CLI use case).

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use marigold_core::{ProductId, Role};
use marigold_store::kv::JsonFileStore;
use marigold_store::models::NewCartItem;
use marigold_store::services::{CartService, IdentityService, OrderService};
use marigold_store::{Store, fixtures};

use marigold_integration_tests::{test_config, unreachable_api_url};

#[test]
fn session_cart_and_orders_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let config = test_config(&unreachable_api_url());

    {
        let store = Store::new(JsonFileStore::open(&path).unwrap());
        let identity = IdentityService::new(store.clone());
        let cart = CartService::new(store.clone());
        let orders = OrderService::new(store, &config);

        fixtures::seed_default_users(&identity).unwrap();
        identity
            .login("super@example.com", fixtures::DEFAULT_PASSWORD)
            .unwrap();
        cart.add(
            NewCartItem {
                product_id: ProductId::new(1),
                name: "XYZ Pro Smartphone".to_owned(),
                price: Decimal::new(59999, 2),
                image: "https://via.placeholder.com/150".to_owned(),
            },
            2,
        )
        .unwrap();

        let mut rng = rand::rng();
        fixtures::seed_sample_orders(&identity, &orders, &mut rng).unwrap();
    }

    // A fresh open over the same file sees everything.
    let store = Store::new(JsonFileStore::open(&path).unwrap());
    let identity = IdentityService::new(store.clone());
    let cart = CartService::new(store.clone());
    let orders = OrderService::new(store, &config);

    let session = identity.current_session().unwrap().unwrap();
    assert_eq!(session.role, Role::Superuser);

    assert_eq!(cart.count().unwrap(), 2);

    let all = orders.get_all_orders().unwrap();
    assert!(!all.is_empty());
    for user in identity.users().unwrap() {
        assert!(!orders.get_orders_for_user(user.id).unwrap().is_empty());
    }
}
