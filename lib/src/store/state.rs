//! Application state definitions.

use crate::types::{Item, OrderItem};

/// Complete state of the storefront.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// Whether a user is logged in
    pub is_login: bool,
    /// Whether the user proceeded to checkout
    pub go_order: bool,
    /// Catalog, ascending by medium price
    pub items: Vec<Item>,
    /// Cart entries in insertion order
    pub cart_list: Vec<OrderItem>,
    /// ID of the logged in user
    pub user_id: String,
}
