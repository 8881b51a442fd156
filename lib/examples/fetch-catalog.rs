use std::{env, rc::Rc};

use ecsite_store::{
    catalog::{self, DEFAULT_CATALOG_URL, HttpCatalogFetcher},
    persist::{self, DEFAULT_STORAGE_KEY},
    storage::MemoryStorage,
    store::{StateGetter, derived},
};

fn main() {
    let url = env::var("CATALOG_URL").unwrap_or(DEFAULT_CATALOG_URL.to_string());

    let storage = Rc::new(MemoryStorage::new());
    let store = persist::create_store(storage, DEFAULT_STORAGE_KEY);

    let fetcher = HttpCatalogFetcher::builder()
        .url(url)
        .build()
        .expect("failed to build catalog fetcher");

    catalog::fetch_catalog(&store, &fetcher).expect("failed to fetch catalog");

    let state = store.get_state();

    for item in derived::item_list(&state) {
        println!(
            "{:>4}  {:<30} M:{:>6}  L:{:>6}",
            item.id, item.name, item.price_m, item.price_l
        );
    }
}
