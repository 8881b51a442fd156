//! Derived state selectors. Read-only, never mutate state.

use crate::types::{Item, OrderItem, OrderTopping};

use super::state::State;

/// Returns whether the user proceeded to checkout.
pub fn go_order_status(state: &State) -> bool {
    state.go_order
}

/// Returns whether a user is logged in.
pub fn login_status(state: &State) -> bool {
    state.is_login
}

/// Returns the ID of the logged in user.
pub fn user_id(state: &State) -> &str {
    &state.user_id
}

/// Returns the catalog in the order maintained by the reducer.
pub fn item_list(state: &State) -> &[Item] {
    &state.items
}

/// Returns the cart, rebuilding every entry with its nested item and
/// topping selections as fresh values.
pub fn cart_list(state: &State) -> Vec<OrderItem> {
    state
        .cart_list
        .iter()
        .map(|entry| {
            let order_topping_list = entry
                .order_topping_list
                .iter()
                .map(|t| OrderTopping {
                    id: t.id,
                    topping_id: t.topping_id,
                    order_item_id: t.order_item_id,
                    topping: t.topping.clone(),
                })
                .collect::<Vec<OrderTopping>>();

            OrderItem {
                id: entry.id,
                item_id: entry.item_id,
                order_id: entry.order_id,
                quantity: entry.quantity,
                size: entry.size.clone(),
                item: Item {
                    id: entry.item.id,
                    item_type: entry.item.item_type.clone(),
                    name: entry.item.name.clone(),
                    description: entry.item.description.clone(),
                    price_m: entry.item.price_m,
                    price_l: entry.item.price_l,
                    image_path: entry.item.image_path.clone(),
                    deleted: entry.item.deleted,
                    topping_list: entry.item.topping_list.clone(),
                },
                order_topping_list,
            }
        })
        .collect::<Vec<OrderItem>>()
}

/// Returns the sum of all cart entry subtotals.
pub fn cart_total(state: &State) -> u64 {
    state.cart_list.iter().map(|entry| entry.subtotal()).sum()
}

#[cfg(test)]
#[path = "./derived_tests.rs"]
mod tests;
