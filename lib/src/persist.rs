//! Mirrors the `{isLogin, cartList}` subset of state into session storage
//! and reads it back when a store is created.
//!
//! The stored value is a JSON object under a single key
//! ([`DEFAULT_STORAGE_KEY`] by default). Fields missing from the stored
//! object leave the corresponding state field at its default. Members of
//! the wrong type decode to defaults and undecodable cart entries are
//! skipped, so one bad member never discards the rest of the value. A value
//! that cannot be read or is not JSON is ignored with a warning.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    storage::SessionStorage,
    store::{
        Listener, Store, SubscriptionProvider, reducer::StoreReducer,
        state::State,
    },
    types::{OrderItem, de},
};

/// Storage key the persisted subset is written under
pub const DEFAULT_STORAGE_KEY: &str = "vuex";

/// The persisted subset of [`State`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedState {
    /// Mirror of [`State::is_login`]. A stored value that is not a boolean
    /// reads as None.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::or_default"
    )]
    pub is_login: Option<bool>,
    /// Mirror of [`State::cart_list`]. Entries that cannot be decoded are
    /// dropped; a stored value that is not a list reads as None.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::optional_list"
    )]
    pub cart_list: Option<Vec<OrderItem>>,
}

impl PersistedState {
    /// Captures the persisted subset of state
    pub fn from_state(state: &State) -> Self {
        Self {
            is_login: Some(state.is_login),
            cart_list: Some(state.cart_list.clone()),
        }
    }

    /// Overwrites the fields of state present in this value
    pub fn apply(self, state: &mut State) {
        if let Some(is_login) = self.is_login {
            state.is_login = is_login;
        }
        if let Some(cart_list) = self.cart_list {
            state.cart_list = cart_list;
        }
    }
}

/// Reads the persisted subset stored under key. Returns None when nothing
/// is stored or the stored value is unusable.
pub fn load(storage: &dyn SessionStorage, key: &str) -> Option<PersistedState> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("failed to read persisted state, using defaults: {err}");
            return None;
        }
    };

    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(persisted) => Some(persisted),
        Err(err) => {
            log::warn!("failed to parse persisted state, using defaults: {err}");
            None
        }
    }
}

/// Loads the persisted subset stored under key into state
pub fn rehydrate(storage: &dyn SessionStorage, key: &str, state: &mut State) {
    if let Some(persisted) = load(storage, key) {
        log::debug!(
            "rehydrating state: is_login={:?}, cart entries={:?}",
            persisted.is_login,
            persisted.cart_list.as_ref().map(Vec::len)
        );
        persisted.apply(state);
    }
}

/// Serializes the persisted subset of state under key
pub fn save(storage: &dyn SessionStorage, key: &str, state: &State) -> Result<()> {
    let serialized = serde_json::to_string(&PersistedState::from_state(state))?;
    storage.set_item(key, &serialized)
}

/// Discards the persisted subset stored under key. Stores created afterwards
/// start from the default state.
pub fn clear(storage: &dyn SessionStorage, key: &str) -> Result<()> {
    log::debug!("clearing persisted state under {key}");
    storage.remove_item(key)
}

/// Returns a store listener that writes the persisted subset after every
/// dispatch
pub fn persist(storage: Rc<dyn SessionStorage>, key: &str) -> Listener {
    let key = key.to_string();
    Box::new(move |state: &State| save(storage.as_ref(), &key, state))
}

/// Creates the store: default state, rehydrated from storage, with the
/// persistence listener installed
pub fn create_store(storage: Rc<dyn SessionStorage>, key: &str) -> Store {
    let mut initial_state = State::default();
    rehydrate(storage.as_ref(), key, &mut initial_state);

    let mut store = Store::new(initial_state, StoreReducer::boxed());
    store.subscribe(persist(storage, key));
    store
}

#[cfg(test)]
#[path = "./persist_tests.rs"]
mod tests;
