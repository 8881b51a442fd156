//! Topping selections attached to a cart entry

use serde::{Deserialize, Serialize};

use super::Topping;

/// A topping chosen for one cart entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderTopping {
    /// The selection ID
    #[serde(rename = "_id", deserialize_with = "super::de::number")]
    pub id: i64,
    /// ID of the chosen topping
    #[serde(rename = "_toppingId", deserialize_with = "super::de::number")]
    pub topping_id: i64,
    /// ID of the owning cart entry
    #[serde(rename = "_orderItemId", deserialize_with = "super::de::number")]
    pub order_item_id: i64,
    /// The resolved topping
    #[serde(rename = "_topping", deserialize_with = "super::de::or_default")]
    pub topping: Topping,
}
