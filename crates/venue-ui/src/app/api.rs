//! Catalog client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one catalog client per app boot.
//! - The client holds no data; every activation fetches afresh.

use crate::services::catalog::CatalogClient;
use std::rc::Rc;

/// Shared catalog client context for page loaders.
#[derive(Clone)]
pub(crate) struct CatalogCtx {
    /// Singleton catalog client instance.
    pub(crate) client: Rc<CatalogClient>,
}

impl CatalogCtx {
    /// Create a new context for the resolved catalog URL.
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(CatalogClient::new(url)),
        }
    }
}

impl PartialEq for CatalogCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
