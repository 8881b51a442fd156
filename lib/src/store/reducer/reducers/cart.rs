//! Cart reducers. Entries are addressed by position only.

use crate::{store::state::State, types::CartPayload};

/// Appends an entry to the end of the cart.
pub fn append_to_cart(state: &mut State, payload: CartPayload) {
    state.cart_list.push(payload.order_item);
}

/// Removes at most one entry. A negative index counts back from the end and
/// clamps to the first entry; an index past the end removes nothing.
pub fn remove_from_cart_at(state: &mut State, index: isize) {
    let len = state.cart_list.len();

    let position = if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs()
    };

    if position < len {
        state.cart_list.remove(position);
    }
}
