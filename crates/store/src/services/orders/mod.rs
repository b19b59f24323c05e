//! Order lifecycle management.
//!
//! Owns the `orders` key. Depends on the identity service to stamp and
//! filter by user - the session is only ever read through its public
//! operations, never through its storage keys.

mod error;

pub use error::OrderError;

use chrono::Utc;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::debug;

use marigold_core::{OrderId, OrderStatus, UserId};

use crate::Store;
use crate::config::StoreConfig;
use crate::kv::keys;
use crate::models::{Address, Order, OrderItem, PaymentMethod};
use crate::services::identity::IdentityService;

/// ID assigned to the very first order.
pub const FIRST_ORDER_ID: i32 = 1001;

/// Order lifecycle service.
///
/// Permissive by default: any status may be set to any other. With
/// `strict_order_transitions` enabled in the
/// configuration, status changes are checked against
/// [`OrderStatus::can_transition_to`] instead.
#[derive(Debug, Clone)]
pub struct OrderService {
    store: Store,
    identity: IdentityService,
    strict_transitions: bool,
}

impl OrderService {
    /// Create a new order service over the shared store.
    #[must_use]
    pub fn new(store: Store, config: &StoreConfig) -> Self {
        Self {
            identity: IdentityService::new(store.clone()),
            strict_transitions: config.strict_order_transitions,
            store,
        }
    }

    /// All orders in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub fn get_all_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.get_json(keys::ORDERS)?.unwrap_or_default())
    }

    fn save(&self, orders: &[Order]) -> Result<(), OrderError> {
        Ok(self.store.set_json(keys::ORDERS, &orders)?)
    }

    /// Orders whose `user_id` equals `user_id`, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub fn get_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .get_all_orders()?
            .into_iter()
            .filter(|o| o.user_id == user_id)
            .collect())
    }

    /// A single order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub fn get_order_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.get_all_orders()?.into_iter().find(|o| o.id == id))
    }

    /// Place an order for the signed-in user.
    ///
    /// The ID is `max(existing) + 1`, or [`FIRST_ORDER_ID`] for the very
    /// first order. The total is taken as given - callers are responsible
    /// for computing it consistently with the items.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Unauthenticated` when no session is active and
    /// `OrderError::InvalidTotal` for a negative total.
    pub fn create_order(
        &self,
        items: Vec<OrderItem>,
        total: Decimal,
        address: Address,
        payment_method: PaymentMethod,
    ) -> Result<Order, OrderError> {
        let user = self
            .identity
            .current_session()?
            .ok_or(OrderError::Unauthenticated)?;

        if total < Decimal::ZERO {
            return Err(OrderError::InvalidTotal);
        }

        let mut orders = self.get_all_orders()?;
        let next_id = orders
            .iter()
            .map(|o| o.id.as_i32())
            .max()
            .map_or(FIRST_ORDER_ID, |max| max + 1);

        let order = Order {
            id: OrderId::new(next_id),
            user_id: user.id,
            date: Utc::now(),
            items,
            total,
            status: OrderStatus::Processing,
            address,
            payment_method,
        };

        orders.push(order.clone());
        self.save(&orders)?;

        debug!(order_id = %order.id, user_id = %order.user_id, "created order");
        Ok(order)
    }

    /// Set an order's status.
    ///
    /// Returns `Ok(false)` - without error - when no order has `order_id`.
    ///
    /// # Errors
    ///
    /// In strict mode only, returns `OrderError::IllegalTransition` when
    /// the change violates the lifecycle table.
    pub fn update_status(
        &self,
        order_id: OrderId,
        new_status: OrderStatus,
    ) -> Result<bool, OrderError> {
        let mut orders = self.get_all_orders()?;

        let Some(order) = orders.iter_mut().find(|o| o.id == order_id) else {
            return Ok(false);
        };

        if self.strict_transitions && !order.status.can_transition_to(new_status) {
            return Err(OrderError::IllegalTransition {
                from: order.status,
                to: new_status,
            });
        }

        order.status = new_status;
        self.save(&orders)?;

        debug!(order_id = %order_id, status = %new_status, "updated order status");
        Ok(true)
    }

    /// The distinct addresses across a user's orders.
    ///
    /// Deduplicated by street alone - a deliberately weak key: two
    /// different addresses sharing a street string collapse into one, with
    /// the later order's address winning.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub fn addresses_for_user(&self, user_id: UserId) -> Result<Vec<Address>, OrderError> {
        let mut by_street: IndexMap<String, Address> = IndexMap::new();
        for order in self.get_orders_for_user(user_id)? {
            by_street.insert(order.address.street.clone(), order.address);
        }
        Ok(by_street.into_values().collect())
    }

    /// The distinct payment methods across a user's orders, deduplicated by
    /// the masked details string (same weak-key caveat as
    /// [`Self::addresses_for_user`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub fn payment_methods_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PaymentMethod>, OrderError> {
        let mut by_details: IndexMap<String, PaymentMethod> = IndexMap::new();
        for order in self.get_orders_for_user(user_id)? {
            by_details.insert(order.payment_method.details.clone(), order.payment_method);
        }
        Ok(by_details.into_values().collect())
    }

    /// Replace the whole registry. Bootstrap/fixture concern, not part of
    /// the public contract.
    pub(crate) fn replace_registry(&self, orders: &[Order]) -> Result<(), OrderError> {
        self.save(orders)
    }
}
