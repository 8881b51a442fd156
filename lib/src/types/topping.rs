//! Topping add-on that can be attached to a cart entry

use serde::{Deserialize, Serialize};

use super::is_large;

/// An add-on choice offered with items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topping {
    /// The topping ID
    #[serde(rename = "_id", deserialize_with = "super::de::number")]
    pub id: i64,
    /// Category tag of the topping
    #[serde(rename = "_type", deserialize_with = "super::de::or_default")]
    pub topping_type: String,
    /// Display name
    #[serde(rename = "_name", deserialize_with = "super::de::or_default")]
    pub name: String,
    /// Price when added to a medium item
    #[serde(rename = "_priceM", deserialize_with = "super::de::number")]
    pub price_m: u32,
    /// Price when added to a large item
    #[serde(rename = "_priceL", deserialize_with = "super::de::number")]
    pub price_l: u32,
}

impl Topping {
    /// Returns the topping price for the given size selection
    pub fn price_for(&self, size: &str) -> u32 {
        if is_large(size) {
            self.price_l
        } else {
            self.price_m
        }
    }
}
