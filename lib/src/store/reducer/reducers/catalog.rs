//! Catalog reducers.

use itertools::Itertools;

use crate::{
    store::state::State,
    types::{CatalogPayload, Item},
};

/// Replaces the whole catalog. Items are sorted ascending by medium price;
/// the sort is stable so items with equal prices keep payload order.
pub fn replace_catalog(state: &mut State, payload: CatalogPayload) {
    state.items = payload
        .items
        .into_iter()
        .map(Item::from)
        .sorted_by_key(|item| item.price_m)
        .collect();
}
