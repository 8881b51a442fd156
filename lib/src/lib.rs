//! Library package holding the client-side state of the ecsite storefront
//!
//! The store keeps the item catalog, the login / checkout flags and the
//! shopping cart. The `{isLogin, cartList}` subset is mirrored into a
//! session-scoped storage on every change and read back when the store is
//! created.
//!
//! # Examples
//!
//! ## Fetching the catalog
//!
//! ```bash
//! cargo run --example fetch-catalog -p ecsite-store
//! ```
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use ecsite_store::{
//!     catalog::{self, HttpCatalogFetcher},
//!     persist::{self, DEFAULT_STORAGE_KEY},
//!     storage::MemoryStorage,
//!     store::{StateGetter, derived},
//! };
//!
//! let storage = Rc::new(MemoryStorage::new());
//! let store = persist::create_store(storage, DEFAULT_STORAGE_KEY);
//! let fetcher = HttpCatalogFetcher::builder().build().unwrap();
//!
//! catalog::fetch_catalog(&store, &fetcher).unwrap();
//!
//! for item in derived::item_list(&store.get_state()) {
//!     println!("{} {}", item.name, item.price_m);
//! }
//! ```

#![deny(missing_docs)]
pub mod catalog;
pub mod error;
pub mod persist;
pub mod storage;
pub mod store;
pub mod types;
