//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, state::State};

mod reducers;

/// Applies actions to state in place.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    /// Returns a boxed reducer ready to hand to [`Store::new`](super::Store::new)
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

impl Reducer for StoreReducer {
    fn reduce(&self, state: &mut State, action: Action) {
        match action {
            // Session actions
            Action::SetProceededToCheckout => {
                self.log_action("SetProceededToCheckout", &"");
                reducers::session::set_go_order(state, true);
            }
            Action::ClearProceededToCheckout => {
                self.log_action("ClearProceededToCheckout", &"");
                reducers::session::set_go_order(state, false);
            }
            Action::SetLoggedIn => {
                self.log_action("SetLoggedIn", &"");
                reducers::session::set_login(state, true);
            }
            Action::SetLoggedOut => {
                self.log_action("SetLoggedOut", &"");
                reducers::session::set_login(state, false);
            }
            Action::SetUserId(user_id) => {
                self.log_action("SetUserId", &user_id);
                reducers::session::set_user_id(state, user_id);
            }

            // Catalog actions
            Action::ReplaceCatalog(payload) => {
                self.log_action("ReplaceCatalog", &payload.items.len());
                reducers::catalog::replace_catalog(state, payload);
            }

            // Cart actions
            Action::AppendToCart(payload) => {
                self.log_action("AppendToCart", &payload.order_item.item_id);
                reducers::cart::append_to_cart(state, payload);
            }
            Action::RemoveFromCartAt(index) => {
                self.log_action("RemoveFromCartAt", &index);
                reducers::cart::remove_from_cart_at(state, index);
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
