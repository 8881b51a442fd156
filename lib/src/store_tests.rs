use std::{cell::RefCell, rc::Rc};

use mockall::predicate::eq;

use crate::{
    error::StoreError,
    store::reducer::StoreReducer,
    types::{
        SIZE_M,
        fixtures::{order_item, payload},
    },
};

use super::*;

fn setup() -> Store {
    Store::new(State::default(), StoreReducer::boxed())
}

#[test]
fn test_new() {
    let store = setup();
    assert_eq!(*store.get_state(), State::default());
}

#[test]
fn test_dispatch_delegates_to_reducer() {
    let mut reducer = MockReducer::new();
    reducer
        .expect_reduce()
        .with(mockall::predicate::always(), eq(Action::SetLoggedIn))
        .times(1)
        .returning(|state, _| state.is_login = true);

    let store = Store::new(State::default(), Box::new(reducer));
    store.dispatch(Action::SetLoggedIn);

    assert!(store.get_state().is_login);
}

#[test]
fn test_previous_snapshots_are_unchanged() {
    let store = setup();
    let before = store.get_state();

    store.dispatch(Action::SetLoggedIn);

    assert!(!before.is_login);
    assert!(store.get_state().is_login);
}

#[test]
fn test_listeners_run_in_order_with_new_state() {
    let mut store = setup();
    let calls: Rc<RefCell<Vec<(usize, bool)>>> = Rc::new(RefCell::new(vec![]));

    let first = Rc::clone(&calls);
    store.subscribe(move |state: &State| {
        first.borrow_mut().push((1, state.is_login));
        Ok(())
    });

    let second = Rc::clone(&calls);
    store.subscribe(move |state: &State| {
        second.borrow_mut().push((2, state.is_login));
        Ok(())
    });

    store.dispatch(Action::SetLoggedIn);

    assert_eq!(*calls.borrow(), vec![(1, true), (2, true)]);
}

#[test]
fn test_failing_listener_does_not_stop_others() {
    let mut store = setup();
    let called = Rc::new(RefCell::new(false));

    store.subscribe(|_: &State| {
        Err(StoreError::Storage(std::io::Error::other("boom")))
    });

    let flag = Rc::clone(&called);
    store.subscribe(move |_: &State| {
        *flag.borrow_mut() = true;
        Ok(())
    });

    store.dispatch(Action::SetProceededToCheckout);

    assert!(*called.borrow());
    assert!(store.get_state().go_order);
}

#[test]
fn test_end_to_end_catalog_and_cart() {
    let store = setup();

    store.dispatch(Action::ReplaceCatalog(payload(&[(1, 500), (2, 300)])));
    store.dispatch(Action::AppendToCart(order_item(1, SIZE_M).into()));

    let state = store.get_state();
    let prices: Vec<u32> = state.items.iter().map(|i| i.price_m).collect();
    assert_eq!(prices, vec![300, 500]);
    assert_eq!(state.cart_list.len(), 1);
}
