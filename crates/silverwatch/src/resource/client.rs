//! Generic CRUD client for one backend collection.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::auth::Session;
use crate::error::{Error, TransportError};
use crate::http::Request;
use crate::resource::Page;
use crate::types::ResourcePath;

/// Default number of items per page, matching the backend's default.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// A typed CRUD client for a single collection path.
///
/// Obtained via [`Session::resource`]; all clients created from the same
/// session share one page cache, so a mutation through any of them
/// invalidates cached reads for the path everywhere.
///
/// The item type is treated opaquely: the client requires only that it
/// deserializes; identifiers are passed in by the caller when building item
/// URLs.
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    session: Session,
    path: ResourcePath,
    page_size: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResourceClient<T> {
    pub(crate) fn new(session: Session, path: ResourcePath) -> Self {
        Self {
            session,
            path,
            page_size: DEFAULT_PAGE_SIZE,
            _marker: PhantomData,
        }
    }

    /// Set the page size used by [`page`](Self::page).
    ///
    /// The page size is part of the cache key, so clients with different
    /// page sizes never serve each other's cached pages.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Returns the collection path this client operates on.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Fetch one page of the collection.
    ///
    /// `filters` are appended to the query string verbatim. Responses are
    /// cached per exact parameter set; cached pages are served until they
    /// expire or a mutation on this path invalidates them.
    #[instrument(skip(self, filters), fields(path = %self.path))]
    pub async fn page(&self, page: u32, filters: &[(&str, &str)]) -> Result<Page<T>, Error> {
        let query = self.page_query(page, filters);
        let cache_key = canonical_query(&query);

        if let Some(body) = self.session.cache().get(self.path.as_str(), &cache_key).await {
            return decode(body);
        }

        debug!("fetching page");
        let request = Request::get(self.path.as_str()).with_query(query);
        let body: serde_json::Value = self.session.send(&request).await?;

        self.session
            .cache()
            .insert(self.path.as_str(), &cache_key, body.clone())
            .await;

        decode(body)
    }

    /// Fetch a single item by id.
    ///
    /// An empty id is a deliberate no-op: `Ok(None)` is returned and no
    /// network call is made, so callers can pass through an id that may
    /// not exist yet without hitting the collection endpoint.
    #[instrument(skip(self, filters), fields(path = %self.path))]
    pub async fn get(&self, id: &str, filters: &[(&str, &str)]) -> Result<Option<T>, Error> {
        if id.is_empty() {
            return Ok(None);
        }

        debug!("fetching item");
        let request = Request::get(self.path.item_path(id)).with_query(owned_query(filters));
        let item = self.session.send(&request).await?;
        Ok(Some(item))
    }

    /// Create an item in the collection.
    ///
    /// On success every cached page for this path is invalidated, so the
    /// next read fetches fresh data.
    #[instrument(skip(self, item), fields(path = %self.path))]
    pub async fn create<B: Serialize>(&self, item: &B) -> Result<T, Error> {
        debug!("creating item");
        let request = Request::post(self.path.as_str()).with_json(item)?;
        let created = self.session.send(&request).await?;

        self.session.cache().invalidate_path(self.path.as_str()).await;
        Ok(created)
    }

    /// Partially update an item by id. Same invalidation guarantee as
    /// [`create`](Self::create).
    #[instrument(skip(self, patch), fields(path = %self.path))]
    pub async fn update<B: Serialize>(&self, id: &str, patch: &B) -> Result<T, Error> {
        debug!("updating item");
        let request = Request::patch(self.path.item_path(id)).with_json(patch)?;
        let updated = self.session.send(&request).await?;

        self.session.cache().invalidate_path(self.path.as_str()).await;
        Ok(updated)
    }

    /// Delete an item by id. Same invalidation guarantee as
    /// [`create`](Self::create).
    #[instrument(skip(self), fields(path = %self.path))]
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!("deleting item");
        let request = Request::delete(self.path.item_path(id));
        self.session.send_no_content(&request).await?;

        self.session.cache().invalidate_path(self.path.as_str()).await;
        Ok(())
    }

    fn page_query(&self, page: u32, filters: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut query = owned_query(filters);
        query.push(("page".to_string(), page.to_string()));
        query.push(("page_size".to_string(), self.page_size.to_string()));
        query
    }
}

fn owned_query(filters: &[(&str, &str)]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Canonical form of a query set, used as the cache key: sorted `k=v`
/// pairs joined with `&`.
fn canonical_query(query: &[(String, String)]) -> String {
    let mut pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    pairs.join("&")
}

fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Result<Page<T>, Error> {
    serde_json::from_value(body).map_err(|e| {
        Error::Transport(TransportError::Http {
            message: format!("failed to decode page body: {e}"),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_query_is_order_independent() {
        let a = canonical_query(&[
            ("page".to_string(), "1".to_string()),
            ("status".to_string(), "Online".to_string()),
        ]);
        let b = canonical_query(&[
            ("status".to_string(), "Online".to_string()),
            ("page".to_string(), "1".to_string()),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn canonical_query_includes_every_pair() {
        let key = canonical_query(&[
            ("page".to_string(), "2".to_string()),
            ("page_size".to_string(), "10".to_string()),
        ]);
        assert_eq!(key, "page=2&page_size=10");
    }
}
