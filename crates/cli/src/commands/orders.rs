//! Order inspection commands.

use tracing::info;

use marigold_store::models::Order;
use marigold_store::services::{IdentityService, OrderService};

/// List orders - all of them, or only the signed-in user's with `--mine`.
///
/// # Errors
///
/// Returns an error when `--mine` is used without a session, or on a store
/// failure.
pub fn list(mine: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (store, config) = super::open_store()?;
    let orders = OrderService::new(store.clone(), &config);

    let listed = if mine {
        let identity = IdentityService::new(store);
        let user = identity
            .current_session()?
            .ok_or("not signed in; run `marigold login` first")?;
        orders.get_orders_for_user(user.id)?
    } else {
        orders.get_all_orders()?
    };

    info!(count = listed.len(), "orders");
    for order in &listed {
        print_order(order);
    }
    Ok(())
}

fn print_order(order: &Order) {
    info!(
        id = %order.id,
        user_id = %order.user_id,
        status = %order.status,
        total = %order.total,
        items = order.items.len(),
        date = %order.date,
        "order"
    );
}
