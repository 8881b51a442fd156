//! Domain entities of the storefront: catalog items, toppings and cart
//! entries.
//!
//! Entities serialize with the underscore-prefixed member names the
//! storefront's classes use (`_id`, `_itemId`, ...), which is the shape
//! found in session storage. Every field falls back to its default when
//! absent from a stored record.

pub(crate) mod de;
pub mod item;
pub mod order_item;
pub mod order_topping;
pub mod topping;

pub use item::{CatalogPayload, Item, RawItem};
pub use order_item::{CartPayload, OrderItem};
pub use order_topping::OrderTopping;
pub use topping::Topping;

/// Size selection for a medium portion
pub const SIZE_M: &str = "M";
/// Size selection for a large portion
pub const SIZE_L: &str = "L";

/// Returns true when the size selection refers to the large portion. Any
/// other value is priced as medium.
pub fn is_large(size: &str) -> bool {
    size == SIZE_L
}

#[cfg(test)]
#[doc(hidden)]
pub mod fixtures;
