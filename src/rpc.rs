//! The remote-call seam between the client and the registry transport.

use std::sync::Arc;

use crate::error::Result;
use crate::types::{ResponseScope, ResultDocument};

/// A transport capable of carrying registry calls.
///
/// Implementations send one request per call and surface every failure as
/// a [`crate::RegistryError`]; no retries happen at this layer, and any
/// timeout policy belongs to the implementation.
///
/// The trait is `Send + Sync` so one client instance can be shared across
/// threads when the transport allows it.
pub trait RegistryRpc: Send + Sync {
    /// Run an XQuery against the registry at `endpoint`.
    ///
    /// A query matching nothing yields a document with a root element and
    /// no children, not an error.
    fn xquery_search(
        &self,
        endpoint: &str,
        query: &str,
        scope: ResponseScope,
    ) -> Result<ResultDocument>;

    /// Fetch the registration record for one identifier.
    ///
    /// An identifier with no registration is an error, unlike the
    /// query-based searches.
    fn get_resource(&self, endpoint: &str, identifier: &str) -> Result<ResultDocument>;
}

/// Shared transports are transports.
impl<R: RegistryRpc + ?Sized> RegistryRpc for Arc<R> {
    fn xquery_search(
        &self,
        endpoint: &str,
        query: &str,
        scope: ResponseScope,
    ) -> Result<ResultDocument> {
        (**self).xquery_search(endpoint, query, scope)
    }

    fn get_resource(&self, endpoint: &str, identifier: &str) -> Result<ResultDocument> {
        (**self).get_resource(endpoint, identifier)
    }
}
