//! Session flag reducers for login and checkout state.

use crate::store::state::State;

/// Sets whether a user is logged in.
pub fn set_login(state: &mut State, value: bool) {
    state.is_login = value;
}

/// Sets whether the user proceeded to checkout.
pub fn set_go_order(state: &mut State, value: bool) {
    state.go_order = value;
}

/// Sets the ID of the logged in user.
pub fn set_user_id(state: &mut State, user_id: String) {
    state.user_id = user_id;
}
