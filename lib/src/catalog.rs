//! Retrieves the item catalog from the catalog API and commits it to the
//! store

#[cfg(test)]
use mockall::automock;

use derive_builder::Builder;

use crate::{
    error::Result,
    store::{Dispatcher, action::Action},
    types::CatalogPayload,
};

/// Catalog endpoint for the toy category
pub const DEFAULT_CATALOG_URL: &str =
    "http://153.127.48.168:8080/ecsite-api/item/items/toy";

/// Trait describing a source of catalog payloads
#[cfg_attr(test, automock)]
pub trait CatalogFetcher {
    /// Should return the complete catalog
    fn fetch(&self) -> Result<CatalogPayload>;
}

/// Fetches the catalog with a single blocking HTTP GET
#[derive(Clone, Builder)]
#[builder(setter(into))]
pub struct HttpCatalogFetcher {
    /// Catalog endpoint
    #[builder(default = "DEFAULT_CATALOG_URL.to_string()")]
    url: String,
    /// HTTP agent the request is issued with
    #[builder(default = "ureq::Agent::new_with_defaults()")]
    agent: ureq::Agent,
}

impl HttpCatalogFetcher {
    /// Returns a builder for HttpCatalogFetcher
    pub fn builder() -> HttpCatalogFetcherBuilder {
        HttpCatalogFetcherBuilder::default()
    }

    /// Returns the catalog endpoint
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogFetcher for HttpCatalogFetcher {
    /// Transport failures and non-2xx statuses are returned as errors. No
    /// retry is attempted.
    fn fetch(&self) -> Result<CatalogPayload> {
        log::debug!("requesting catalog: {}", self.url);
        let mut response = self.agent.get(&self.url).call()?;
        let payload = response.body_mut().read_json::<CatalogPayload>()?;
        log::debug!("received {} catalog items", payload.items.len());
        Ok(payload)
    }
}

/// Fetches the catalog and replaces the store's items with it. On error the
/// store is left untouched.
pub fn fetch_catalog(
    store: &dyn Dispatcher,
    fetcher: &dyn CatalogFetcher,
) -> Result<()> {
    let payload = fetcher.fetch()?;
    store.dispatch(Action::ReplaceCatalog(payload));
    Ok(())
}

#[cfg(test)]
#[path = "./catalog_tests.rs"]
mod tests;
