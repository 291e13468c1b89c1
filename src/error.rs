//! Error types for the registry client.

use thiserror::Error;

/// Main error type for registry operations.
///
/// Every operation either returns a well-formed (possibly empty) result or
/// this error; there is no partial-success channel. Callers that need a
/// non-fatal "not found" must probe with the query-based finders, which
/// yield empty documents instead of erroring.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// HTTP request failed (unreachable endpoint, timeout, bad URL).
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response payload could not be parsed as XML.
    #[error("malformed registry response: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The registry answered with a SOAP fault.
    #[error("registry fault: {fault_string} [{fault_code}]")]
    Fault {
        fault_code: String,
        fault_string: String,
    },

    /// The response parsed but did not have the expected shape.
    #[error("unexpected registry response: {0}")]
    UnexpectedResponse(String),

    /// Direct lookup of an identifier with no registration.
    #[error("no resource registered under '{0}'")]
    ResourceNotFound(String),

    /// The resource record has no access URL for the requested capability.
    #[error("no access URL for capability '{capability}' of '{identifier}'")]
    MissingAccessUrl {
        identifier: String,
        capability: String,
    },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
