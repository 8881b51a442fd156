//! Cart entries

use serde::{Deserialize, Serialize};

use super::{Item, OrderTopping};

/// A single line item selected for purchase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    /// The cart entry ID
    #[serde(rename = "_id", deserialize_with = "super::de::number")]
    pub id: i64,
    /// ID of the selected item
    #[serde(rename = "_itemId", deserialize_with = "super::de::number")]
    pub item_id: i64,
    /// ID of the order this entry belongs to
    #[serde(rename = "_orderId", deserialize_with = "super::de::number")]
    pub order_id: i64,
    /// Number of units
    #[serde(rename = "_quantity", deserialize_with = "super::de::number")]
    pub quantity: u32,
    /// Size selection, see [`SIZE_M`](super::SIZE_M) and
    /// [`SIZE_L`](super::SIZE_L)
    #[serde(rename = "_size", deserialize_with = "super::de::or_default")]
    pub size: String,
    /// Snapshot of the item at the time it was added
    #[serde(rename = "_item", deserialize_with = "super::de::or_default")]
    pub item: Item,
    /// Toppings chosen for this entry
    #[serde(rename = "_orderToppingList", deserialize_with = "super::de::list")]
    pub order_topping_list: Vec<OrderTopping>,
}

impl OrderItem {
    /// Price of one unit including toppings for the chosen size, multiplied
    /// by the quantity
    pub fn subtotal(&self) -> u64 {
        let toppings: u64 = self
            .order_topping_list
            .iter()
            .map(|t| u64::from(t.topping.price_for(&self.size)))
            .sum();
        let unit = u64::from(self.item.price_for(&self.size)) + toppings;
        unit * u64::from(self.quantity)
    }
}

/// Payload carried by [`Action::AppendToCart`](crate::store::action::Action)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartPayload {
    /// The entry to append
    #[serde(rename = "OrderItem")]
    pub order_item: OrderItem,
}

impl From<OrderItem> for CartPayload {
    fn from(order_item: OrderItem) -> Self {
        Self { order_item }
    }
}

#[cfg(test)]
#[path = "./order_item_tests.rs"]
mod tests;
