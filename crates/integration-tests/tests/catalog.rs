//! Catalog integration tests: dual-source reads and writes against a real
//! HTTP mock of the remote API.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use marigold_core::ProductId;
use marigold_integration_tests::mock_remote::{MockCatalog, product_record};
use marigold_integration_tests::{test_config, unreachable_api_url};
use marigold_store::services::{CatalogError, CatalogService};
use marigold_store::{CatalogWritePolicy, Store};
use marigold_store::models::{NewProduct, ProductUpdate};

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_owned(),
        description: format!("{name} description"),
        price: Decimal::new(1999, 2),
        category: Some("Testing".to_owned()),
        image: "https://example.com/images/product.png".to_owned(),
        stock: 5,
    }
}

#[tokio::test]
async fn outage_falls_back_to_seeded_local_cache() {
    let store = Store::in_memory();
    let config = test_config(&unreachable_api_url());
    let catalog = CatalogService::new(store, &config);

    // Empty cache under an outage: the fixed starter catalog appears.
    let products = catalog.list().await.unwrap();
    assert_eq!(products.len(), 4);
    assert!(products.iter().any(|p| p.name == "UltraBook Laptop"));
}

#[tokio::test]
async fn remote_set_is_served_without_cross_source_merge() {
    let mock = MockCatalog::new();
    mock.set_products(vec![product_record(10, "Remote Widget", 5.0, "Remote", 1)]);
    let api_url = mock.serve().await;

    let store = Store::in_memory();
    let catalog = CatalogService::new(store.clone(), &test_config(&api_url));

    // Populate the local cache first (simulated outage).
    let offline = CatalogService::new(store, &test_config(&unreachable_api_url()));
    assert_eq!(offline.list().await.unwrap().len(), 4);

    // With the remote reachable, its set is served verbatim - the four
    // locally cached products do not leak in.
    let products = catalog.list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products.first().unwrap().id, ProductId::new(10));
    assert_eq!(products.first().unwrap().name, "Remote Widget");
}

#[tokio::test]
async fn get_by_id_treats_remote_404_as_not_found_without_fallback() {
    let mock = MockCatalog::new();
    mock.set_products(vec![product_record(1, "Remote One", 3.5, "Remote", 2)]);
    let api_url = mock.serve().await;

    let store = Store::in_memory();
    let catalog = CatalogService::new(store.clone(), &test_config(&api_url));

    // Seed the local cache, which does contain a product with id 2.
    let offline = CatalogService::new(store, &test_config(&unreachable_api_url()));
    assert!(offline.get_by_id(ProductId::new(2)).await.unwrap().is_some());

    // The remote 404 wins: no silent switch to the local copy.
    assert!(catalog.get_by_id(ProductId::new(2)).await.unwrap().is_none());
    assert!(catalog.get_by_id(ProductId::new(1)).await.unwrap().is_some());
}

#[tokio::test]
async fn outage_get_by_id_falls_back_to_local() {
    let store = Store::in_memory();
    let catalog = CatalogService::new(store, &test_config(&unreachable_api_url()));

    let product = catalog.get_by_id(ProductId::new(3)).await.unwrap().unwrap();
    assert_eq!(product.name, "Wireless Headphones");
    assert!(catalog.get_by_id(ProductId::new(99)).await.unwrap().is_none());
}

#[tokio::test]
async fn search_is_case_insensitive_over_name_description_and_category() {
    let mock = MockCatalog::new();
    mock.set_products(vec![
        product_record(1, "Espresso Machine", 120.0, "Kitchen", 3),
        product_record(2, "Office Chair", 80.0, "Furniture", 7),
        product_record(3, "Desk Lamp", 25.0, "FURNITURE", 9),
    ]);
    let api_url = mock.serve().await;
    let catalog = CatalogService::new(Store::in_memory(), &test_config(&api_url));

    let by_name = catalog.search("espresso").await.unwrap();
    assert_eq!(by_name.len(), 1);

    let by_category = catalog.search("furniture").await.unwrap();
    assert_eq!(by_category.len(), 2);

    // The mock derives descriptions from names, so "chair" also matches.
    let by_description = catalog.search("chair DESCRIPTION").await.unwrap();
    assert_eq!(by_description.len(), 1);

    let all = catalog.search("").await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn price_filter_bounds_are_inclusive() {
    let mock = MockCatalog::new();
    mock.set_products(vec![
        product_record(1, "Cheap", 10.0, "T", 1),
        product_record(2, "Mid", 50.0, "T", 1),
        product_record(3, "Expensive", 100.0, "T", 1),
    ]);
    let api_url = mock.serve().await;
    let catalog = CatalogService::new(Store::in_memory(), &test_config(&api_url));

    let within = catalog
        .filter_by_price(Decimal::from(10), Decimal::from(50))
        .await
        .unwrap();
    let names: Vec<&str> = within.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap", "Mid"]);
}

#[tokio::test]
async fn categories_are_deduplicated_and_sorted() {
    let mock = MockCatalog::new();
    mock.set_products(vec![
        product_record(1, "A", 1.0, "Kitchen", 1),
        product_record(2, "B", 1.0, "Audio", 1),
        product_record(3, "C", 1.0, "Kitchen", 1),
    ]);
    let api_url = mock.serve().await;
    let catalog = CatalogService::new(Store::in_memory(), &test_config(&api_url));

    assert_eq!(
        catalog.categories().await.unwrap(),
        vec!["Audio".to_owned(), "Kitchen".to_owned()]
    );
}

#[tokio::test]
async fn writes_require_a_bearer_token() {
    let mock = MockCatalog::new();
    let api_url = mock.serve().await;
    let catalog = CatalogService::new(Store::in_memory(), &test_config(&api_url));

    let err = catalog.create(new_product("Widget")).await.unwrap_err();
    assert!(matches!(err, CatalogError::Unauthenticated));

    catalog.set_auth_token("secret-token").unwrap();
    let created = catalog.create(new_product("Widget")).await.unwrap();
    assert_eq!(created.name, "Widget");
    assert_eq!(mock.products().len(), 1);

    catalog.clear_auth_token().unwrap();
    let err = catalog.delete(created.id).await.unwrap_err();
    assert!(matches!(err, CatalogError::Unauthenticated));
}

#[tokio::test]
async fn validation_rejects_bad_payloads_before_any_write() {
    let mock = MockCatalog::new();
    let api_url = mock.serve().await;
    let catalog = CatalogService::new(Store::in_memory(), &test_config(&api_url));
    catalog.set_auth_token("secret-token").unwrap();

    let no_name = new_product("  ");
    assert!(matches!(
        catalog.create(no_name).await.unwrap_err(),
        CatalogError::Validation { field: "name", .. }
    ));

    let mut free = new_product("Free");
    free.price = Decimal::ZERO;
    assert!(matches!(
        catalog.create(free).await.unwrap_err(),
        CatalogError::Validation { field: "price", .. }
    ));

    let mut negative = new_product("Negative");
    negative.stock = -1;
    assert!(matches!(
        catalog.create(negative).await.unwrap_err(),
        CatalogError::Validation { field: "stock", .. }
    ));

    assert!(matches!(
        catalog
            .update(
                ProductId::new(1),
                ProductUpdate {
                    price: Some(Decimal::from(-5)),
                    ..ProductUpdate::default()
                },
            )
            .await
            .unwrap_err(),
        CatalogError::Validation { field: "price", .. }
    ));

    // Nothing reached the remote.
    assert!(mock.products().is_empty());
}

#[tokio::test]
async fn failed_remote_write_diverges_into_local_cache() {
    let store = Store::in_memory();
    let catalog = CatalogService::new(store.clone(), &test_config(&unreachable_api_url()));
    catalog.set_auth_token("secret-token").unwrap();

    // The write lands in the local cache (after the starter seed, ids 1-4).
    let created = catalog.create(new_product("Local Only")).await.unwrap();
    assert_eq!(created.id, ProductId::new(5));

    // Under an outage the local write is visible...
    assert!(catalog.get_by_id(created.id).await.unwrap().is_some());

    // ...but once the remote recovers, its set wins and the local-only
    // product is gone from reads: the divergence is not reconciled.
    let mock = MockCatalog::new();
    mock.set_products(vec![product_record(1, "Remote Truth", 1.0, "R", 1)]);
    let api_url = mock.serve().await;
    let recovered = CatalogService::new(store, &test_config(&api_url));

    let names: Vec<String> = recovered
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Remote Truth".to_owned()]);
}

#[tokio::test]
async fn strict_write_policy_surfaces_remote_failure() {
    let store = Store::in_memory();
    let mut config = test_config(&unreachable_api_url());
    config.catalog_write_policy = CatalogWritePolicy::Strict;
    let catalog = CatalogService::new(store, &config);
    catalog.set_auth_token("secret-token").unwrap();

    let err = catalog.create(new_product("Nope")).await.unwrap_err();
    assert!(matches!(err, CatalogError::Remote(_)));
}

#[tokio::test]
async fn remote_update_and_delete_handle_404_as_absent() {
    let mock = MockCatalog::new();
    mock.set_products(vec![product_record(1, "Widget", 2.0, "T", 1)]);
    let api_url = mock.serve().await;
    let catalog = CatalogService::new(Store::in_memory(), &test_config(&api_url));
    catalog.set_auth_token("secret-token").unwrap();

    let updated = catalog
        .update(
            ProductId::new(1),
            ProductUpdate {
                price: Some(Decimal::new(375, 2)),
                ..ProductUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.price, Decimal::new(375, 2));

    assert!(
        catalog
            .update(ProductId::new(99), ProductUpdate::default())
            .await
            .unwrap()
            .is_none()
    );

    assert!(catalog.delete(ProductId::new(1)).await.unwrap());
    assert!(!catalog.delete(ProductId::new(1)).await.unwrap());
}
