//! Redux-like state container for the storefront.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::Result,
    store::{action::Action, state::State},
};

pub mod action;
pub mod derived;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    /// Returns the current state
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    /// Applies the action and notifies listeners
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    /// Applies the action to the state in place
    fn reduce(&self, state: &mut State, action: Action);
}

/// Callback run with the new state after every dispatch
pub type Listener = Box<dyn Fn(&State) -> Result<()>>;

/// Registers listeners that observe every state change
pub trait SubscriptionProvider {
    /// Adds a listener. Listeners run in registration order.
    fn subscribe<F: Fn(&State) -> Result<()> + 'static>(&mut self, f: F);
}

/// Centralized state container
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    listeners: Vec<Listener>,
}

impl Store {
    /// Creates a new store from an initial state and the reducer that
    /// applies actions to it
    pub fn new(initial_state: State, reducer: Box<dyn Reducer>) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial_state)),
            reducer,
            listeners: Vec::new(),
        }
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let state = {
            let mut rc = self.state.borrow_mut();
            let state = Rc::make_mut(&mut rc);
            self.reducer.reduce(state, action);
            Rc::clone(&rc)
        };

        for listener in self.listeners.iter() {
            if let Err(err) = listener(&state) {
                log::error!("store listener failed: {err}");
            }
        }
    }
}

impl SubscriptionProvider for Store {
    fn subscribe<F: Fn(&State) -> Result<()> + 'static>(&mut self, f: F) {
        self.listeners.push(Box::new(f));
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
