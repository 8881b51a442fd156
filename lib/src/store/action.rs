//! Action types for state transitions.

use crate::types::{CartPayload, CatalogPayload};

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Marks that the user proceeded to checkout
    SetProceededToCheckout,
    /// Clears the proceeded-to-checkout flag
    ClearProceededToCheckout,
    /// Marks the session as logged in
    SetLoggedIn,
    /// Marks the session as logged out
    SetLoggedOut,
    /// Replaces the whole catalog with the items of an API payload
    ReplaceCatalog(CatalogPayload),
    /// Appends an entry to the end of the cart
    AppendToCart(CartPayload),
    /// Removes the cart entry at a position. Negative positions count from
    /// the end.
    RemoveFromCartAt(isize),
    /// Sets the ID of the logged in user
    SetUserId(String),
}
