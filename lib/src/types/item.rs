//! Catalog items and the API payload they are created from

use serde::{Deserialize, Serialize};

use super::{Topping, is_large};

/// Catalog entry as delivered by the catalog API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawItem {
    /// The item ID
    #[serde(deserialize_with = "super::de::number")]
    pub id: i64,
    /// Category tag of the item
    #[serde(rename = "type", deserialize_with = "super::de::or_default")]
    pub item_type: String,
    /// Display name
    #[serde(deserialize_with = "super::de::or_default")]
    pub name: String,
    /// Free text description. The API spells this member `discription`.
    #[serde(rename = "discription", deserialize_with = "super::de::or_default")]
    pub description: String,
    /// Medium price
    #[serde(rename = "priceM", deserialize_with = "super::de::number")]
    pub price_m: u32,
    /// Large price
    #[serde(rename = "priceL", deserialize_with = "super::de::number")]
    pub price_l: u32,
    /// Reference to the item image
    #[serde(rename = "imagePath", deserialize_with = "super::de::or_default")]
    pub image_path: String,
    /// Whether the item has been withdrawn from sale
    #[serde(deserialize_with = "super::de::or_default")]
    pub deleted: bool,
}

/// Response body of the catalog API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogPayload {
    /// Every item of the requested category, in API order
    #[serde(deserialize_with = "super::de::list")]
    pub items: Vec<RawItem>,
}

/// A purchasable item of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// The item ID
    #[serde(rename = "_id", deserialize_with = "super::de::number")]
    pub id: i64,
    /// Category tag of the item
    #[serde(rename = "_type", deserialize_with = "super::de::or_default")]
    pub item_type: String,
    /// Display name
    #[serde(rename = "_name", deserialize_with = "super::de::or_default")]
    pub name: String,
    /// Free text description
    #[serde(rename = "_description", deserialize_with = "super::de::or_default")]
    pub description: String,
    /// Medium price
    #[serde(rename = "_priceM", deserialize_with = "super::de::number")]
    pub price_m: u32,
    /// Large price
    #[serde(rename = "_priceL", deserialize_with = "super::de::number")]
    pub price_l: u32,
    /// Reference to the item image
    #[serde(rename = "_imagePath", deserialize_with = "super::de::or_default")]
    pub image_path: String,
    /// Whether the item has been withdrawn from sale
    #[serde(rename = "_deleted", deserialize_with = "super::de::or_default")]
    pub deleted: bool,
    /// Toppings available for this item
    #[serde(rename = "_toppingList", deserialize_with = "super::de::list")]
    pub topping_list: Vec<Topping>,
}

impl Item {
    /// Returns the item price for the given size selection
    pub fn price_for(&self, size: &str) -> u32 {
        if is_large(size) {
            self.price_l
        } else {
            self.price_m
        }
    }
}

impl From<RawItem> for Item {
    /// Catalog items never carry toppings
    fn from(raw: RawItem) -> Self {
        Self {
            id: raw.id,
            item_type: raw.item_type,
            name: raw.name,
            description: raw.description,
            price_m: raw.price_m,
            price_l: raw.price_l,
            image_path: raw.image_path,
            deleted: raw.deleted,
            topping_list: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "./item_tests.rs"]
mod tests;
