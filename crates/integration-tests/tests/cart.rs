//! Cart integration tests.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use marigold_core::ProductId;
use marigold_store::Store;
use marigold_store::models::NewCartItem;
use marigold_store::services::{CartService, IdentityService};

fn item(id: i32, price: Decimal) -> NewCartItem {
    NewCartItem {
        product_id: ProductId::new(id),
        name: format!("Product {id}"),
        price,
        image: "https://via.placeholder.com/150".to_owned(),
    }
}

#[test]
fn repeated_add_merges_into_one_line() {
    let cart = CartService::new(Store::in_memory());

    cart.add(item(7, Decimal::new(999, 2)), 2).unwrap();
    cart.add(item(7, Decimal::new(999, 2)), 3).unwrap();

    let items = cart.items().unwrap();
    assert_eq!(items.len(), 1);
    let line = items.first().unwrap();
    assert_eq!(line.product_id, ProductId::new(7));
    assert_eq!(line.quantity, 5);
}

#[test]
fn update_quantity_below_one_is_a_noop() {
    let cart = CartService::new(Store::in_memory());
    cart.add(item(7, Decimal::new(999, 2)), 5).unwrap();

    cart.update_quantity(ProductId::new(7), 0).unwrap();

    let items = cart.items().unwrap();
    assert_eq!(items.first().unwrap().quantity, 5);
}

#[test]
fn add_preserves_insertion_order() {
    let cart = CartService::new(Store::in_memory());
    for id in [3, 1, 2] {
        cart.add(item(id, Decimal::ONE), 1).unwrap();
    }
    // Merging back into id 3 does not move it.
    cart.add(item(3, Decimal::ONE), 1).unwrap();

    let ids: Vec<i32> = cart
        .items()
        .unwrap()
        .iter()
        .map(|i| i.product_id.as_i32())
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn totals_and_counts_sum_over_lines() {
    let cart = CartService::new(Store::in_memory());
    cart.add(item(1, Decimal::new(1050, 2)), 2).unwrap(); // 21.00
    cart.add(item(2, Decimal::new(499, 2)), 3).unwrap(); // 14.97

    assert_eq!(cart.total().unwrap(), Decimal::new(3597, 2));
    assert_eq!(cart.count().unwrap(), 5);
}

#[test]
fn remove_and_clear() {
    let cart = CartService::new(Store::in_memory());
    cart.add(item(1, Decimal::ONE), 1).unwrap();
    cart.add(item(2, Decimal::ONE), 1).unwrap();

    cart.remove(ProductId::new(1)).unwrap();
    assert_eq!(cart.items().unwrap().len(), 1);

    // Removing an absent product is fine.
    cart.remove(ProductId::new(42)).unwrap();

    cart.clear().unwrap();
    assert!(cart.items().unwrap().is_empty());
}

#[test]
fn cart_is_not_scoped_to_the_signed_in_user() {
    let store = Store::in_memory();
    let identity = IdentityService::new(store.clone());
    let cart = CartService::new(store);

    identity.register("Jane", "jane@example.com", "pw1").unwrap();
    identity.register("John", "john@example.com", "pw2").unwrap();

    identity.login("jane@example.com", "pw1").unwrap();
    cart.add(item(7, Decimal::new(999, 2)), 2).unwrap();

    // Switching accounts on the same device leaves the cart untouched.
    identity.logout().unwrap();
    identity.login("john@example.com", "pw2").unwrap();

    let items = cart.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items.first().unwrap().quantity, 2);
}
