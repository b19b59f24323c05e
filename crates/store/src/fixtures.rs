//! Demo and test fixtures.
//!
//! Bootstrap data for demos, the CLI `seed` command, and tests. Nothing in
//! here runs implicitly: production code paths never seed users or orders
//! on their own (the catalog's starter-catalog seed on first local read is
//! the one deliberate exception, and lives with the catalog).

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;

use marigold_core::{Email, OrderId, OrderStatus, PaymentMethodType, ProductId, Role, UserId};

use crate::models::{Address, Order, OrderItem, PaymentMethod, Product, User};
use crate::services::identity::{IdentityError, IdentityService};
use crate::services::orders::{FIRST_ORDER_ID, OrderError, OrderService};
use crate::services::{CatalogError, CatalogService};

/// Password shared by all seeded demo accounts.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Seed the three standard demo accounts (superuser, admin, user).
///
/// No-op when the registry already has users; returns the registry either
/// way.
///
/// # Errors
///
/// Returns an error if the registry cannot be read or written.
pub fn seed_default_users(identity: &IdentityService) -> Result<Vec<User>, IdentityError> {
    let existing = identity.users()?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let now = Utc::now();
    let account = |id: i32, name: &str, email: &str, role| -> Result<User, IdentityError> {
        Ok(User {
            id: UserId::new(id),
            name: name.to_owned(),
            email: Email::parse(email)?,
            password: DEFAULT_PASSWORD.to_owned(),
            role,
            created_at: now,
        })
    };

    let users = vec![
        account(1, "Super Admin", "super@example.com", Role::Superuser)?,
        account(2, "Admin User", "admin@example.com", Role::Admin)?,
        account(3, "Regular User", "user@example.com", Role::User)?,
    ];

    identity.replace_registry(&users)?;
    Ok(users)
}

/// Seed the local product cache with the fixed starter catalog.
///
/// # Errors
///
/// Returns an error if the cache cannot be read or written.
pub fn seed_starter_catalog(catalog: &CatalogService) -> Result<Vec<Product>, CatalogError> {
    catalog.ensure_local_seed()
}

/// Populate 1-3 synthetic orders per registered user.
///
/// No-op when the order registry already has entries; returns the number of
/// orders created. Statuses cycle through Processing/Shipped/Delivered so
/// seeded data exercises more than the initial state.
///
/// # Errors
///
/// Returns an error if either registry cannot be read or written.
pub fn seed_sample_orders<R: Rng + ?Sized>(
    identity: &IdentityService,
    orders: &OrderService,
    rng: &mut R,
) -> Result<usize, OrderError> {
    if !orders.get_all_orders()?.is_empty() {
        return Ok(0);
    }

    let statuses = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    let mut seeded: Vec<Order> = Vec::new();
    for user in identity.users()? {
        let order_count = rng.random_range(1..=3);
        for _ in 0..order_count {
            let item_count = rng.random_range(1..=3);
            let mut items = Vec::with_capacity(item_count);
            let mut total = Decimal::ZERO;

            for line in 0..item_count {
                let product_number = i32::try_from(line).unwrap_or(i32::MAX) + 1;
                let price = Decimal::from(rng.random_range(10..=109));
                let quantity = rng.random_range(1..=3u32);
                total += price * Decimal::from(quantity);
                items.push(OrderItem {
                    product_id: ProductId::new(product_number),
                    name: format!("Product {product_number}"),
                    price,
                    quantity,
                    image_url: Some(format!(
                        "https://picsum.photos/id/{}/200/200",
                        product_number * 10
                    )),
                });
            }

            let index = seeded.len();
            let status = statuses
                .get(index % statuses.len())
                .copied()
                .unwrap_or_default();

            let id = FIRST_ORDER_ID + i32::try_from(index).unwrap_or(i32::MAX);
            seeded.push(Order {
                id: OrderId::new(id),
                user_id: user.id,
                date: Utc::now(),
                items,
                total,
                status,
                address: Address {
                    street: format!("{} Main St", user.id),
                    city: "City".to_owned(),
                    state: "State".to_owned(),
                    zip_code: "12345".to_owned(),
                    country: "Country".to_owned(),
                },
                payment_method: PaymentMethod {
                    kind: PaymentMethodType::CreditCard,
                    details: format!("**** **** **** {}", 1000 + user.id.as_i32()),
                    name: Some(format!("{}'s Card", user.name)),
                },
            });
        }
    }

    orders.replace_registry(&seeded)?;
    Ok(seeded.len())
}
