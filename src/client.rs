//! The registry client and its finders.

use std::collections::HashSet;

use crate::config::{DEFAULT_REGISTRY_ENDPOINT, TAP_ID, TAP_XSAMS_ID, VAMDC_TAP_ID};
use crate::error::{RegistryError, Result};
use crate::rpc::RegistryRpc;
use crate::soap::SoapClient;
use crate::types::{ResponseScope, ResultDocument};
use crate::xml::{descendants_named, element_text};
use crate::xquery;

/// Client for querying a VAMDC registry.
///
/// A client talks to exactly one registry endpoint, fixed at construction.
/// [`RegistryClient::new`] targets the release registry; to use another
/// registry, pass its SOAP query endpoint to
/// [`RegistryClient::with_endpoint`]. The known endpoints are
/// [`crate::config::RELEASE_REGISTRY_ENDPOINT`] and
/// [`crate::config::DEVELOPMENT_REGISTRY_ENDPOINT`].
///
/// There are several ways of querying:
///
/// * **Whole registration documents by capability**: call
///   [`find_vamdc_tap`](Self::find_vamdc_tap), [`find_tap`](Self::find_tap),
///   [`find_web_interfaces`](Self::find_web_interfaces) or
///   [`find_resources_by_capability`](Self::find_resources_by_capability)
///   and dismantle the returned document; the registrations are its
///   first-level children.
/// * **Access URLs by capability**: call
///   [`find_access_urls_by_capability`](Self::find_access_urls_by_capability)
///   to get the URLs directly.
/// * **Custom XQuery**: call [`execute_xquery`](Self::execute_xquery) with
///   your own query text.
///
/// The client keeps no state beyond its endpoint and issues one blocking
/// remote call per operation, so an instance may be shared between threads
/// when its transport allows it. Nothing is cached and nothing is retried.
pub struct RegistryClient<R = SoapClient> {
    endpoint: String,
    rpc: R,
}

impl RegistryClient<SoapClient> {
    /// Client for the default (release) registry.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_REGISTRY_ENDPOINT)
    }

    /// Client for the registry at the given SOAP query endpoint.
    ///
    /// The endpoint is taken as-is; an unreachable or malformed URL shows
    /// up as an error on the first call, not here.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            endpoint: endpoint.into(),
            rpc: SoapClient::new()?,
        })
    }
}

impl<R: RegistryRpc> RegistryClient<R> {
    /// Client over a caller-supplied transport.
    pub fn with_transport(endpoint: impl Into<String>, rpc: R) -> Self {
        Self {
            endpoint: endpoint.into(),
            rpc,
        }
    }

    /// The endpoint this client queries.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Registration documents of all active resources with the given
    /// capability, combined in one document as first-level children of its
    /// root. Zero matches give a root with no children.
    pub fn find_resources_by_capability(&self, capability_id: &str) -> Result<ResultDocument> {
        self.execute_xquery(&xquery::resources_by_capability(capability_id))
    }

    /// Registration documents of all active resources with a VAMDC-TAP
    /// capability.
    pub fn find_vamdc_tap(&self) -> Result<ResultDocument> {
        self.find_resources_by_capability(VAMDC_TAP_ID)
    }

    /// Registration documents of all active resources with a generic TAP
    /// capability.
    pub fn find_tap(&self) -> Result<ResultDocument> {
        self.find_resources_by_capability(TAP_ID)
    }

    /// Registration documents of all active resources with a TAP-XSAMS
    /// capability.
    #[deprecated(note = "use find_vamdc_tap instead")]
    pub fn find_tap_xsams(&self) -> Result<ResultDocument> {
        self.find_resources_by_capability(TAP_XSAMS_ID)
    }

    /// Registration documents of all active resources with a web-browser
    /// interface.
    pub fn find_web_interfaces(&self) -> Result<ResultDocument> {
        self.execute_xquery(&xquery::web_browser_resources())
    }

    /// The registration document for the resource with the given
    /// identifier.
    ///
    /// Unlike the query-based finders, an unknown identifier is an error.
    pub fn get_resource(&self, identifier: &str) -> Result<ResultDocument> {
        self.rpc.get_resource(&self.endpoint, identifier)
    }

    /// Identifiers of all active resources with the given capability, in
    /// document order. Duplicate identifiers in the result are kept.
    pub fn list_identifiers_by_capability(&self, capability_id: &str) -> Result<Vec<String>> {
        let doc = self.execute_xquery(&xquery::identifiers_by_capability(capability_id))?;
        Ok(extract_identifiers(&doc))
    }

    /// An access URL for the given capability of the given resource.
    ///
    /// Where the capability has several interfaces, or an interface has
    /// several access URLs, the first in document order wins; the rest are
    /// ignored.
    pub fn find_access_url(&self, identifier: &str, capability_id: &str) -> Result<String> {
        let doc = self.get_resource(identifier)?;
        extract_access_url(&doc, identifier, capability_id)
    }

    /// One access URL per active resource with the given capability,
    /// deduplicated.
    ///
    /// Issues one remote lookup per identifier, sequentially, in document
    /// order.
    pub fn find_access_urls_by_capability(&self, capability_id: &str) -> Result<HashSet<String>> {
        let identifiers = self.list_identifiers_by_capability(capability_id)?;
        tracing::debug!(
            capability_id,
            count = identifiers.len(),
            "resolving access URLs"
        );
        let mut urls = HashSet::with_capacity(identifiers.len());
        for identifier in &identifiers {
            urls.insert(self.find_access_url(identifier, capability_id)?);
        }
        Ok(urls)
    }

    /// Execute a caller-supplied XQuery, passed through unmodified.
    ///
    /// The result document has an unspecified root element with the nodes
    /// raised by the query as first-level children. If the query is
    /// invalid (bad syntax, missing namespace declarations) or matches
    /// nothing, the shape of the result is unpredictable; don't expect
    /// useful error messages.
    pub fn execute_xquery(&self, query: &str) -> Result<ResultDocument> {
        self.rpc
            .xquery_search(&self.endpoint, query, ResponseScope::BodyOnly)
    }
}

/// Identifier strings from a search result, in document order.
///
/// A document with no `identifier` elements yields an empty list, never an
/// error.
fn extract_identifiers(doc: &ResultDocument) -> Vec<String> {
    let tree = doc.document();
    descendants_named(tree.root_element(), "identifier")
        .map(element_text)
        .collect()
}

/// The first access URL of the first interface of the first capability
/// matching `capability_id`, in document order.
fn extract_access_url(
    doc: &ResultDocument,
    identifier: &str,
    capability_id: &str,
) -> Result<String> {
    let missing = || RegistryError::MissingAccessUrl {
        identifier: identifier.to_string(),
        capability: capability_id.to_string(),
    };

    let tree = doc.document();
    let capability = descendants_named(tree.root_element(), "capability")
        .find(|c| c.attribute("standardID") == Some(capability_id))
        .ok_or_else(missing)?;
    let access_url = descendants_named(capability, "interface")
        .next()
        .and_then(|interface| descendants_named(interface, "accessURL").next())
        .map(element_text)
        .filter(|url| !url.is_empty())
        .ok_or_else(missing);
    access_url
}
