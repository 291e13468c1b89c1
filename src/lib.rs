//! Client library for the VAMDC resource registry.
//!
//! The registry is reachable over a SOAP/XML interface and answers
//! XQueries against its store of registration documents. This crate builds
//! the canonical queries, sends them to a configurable endpoint and hands
//! back the resulting XML, or projections of it (identifier lists, access
//! URLs).
//!
//! Some assumptions are made about the registry: it responds to XQueries;
//! it behaves like an AstroGrid implementation of the IVOA registry
//! standards under query; there are few enough registrations that whole
//! result documents are safe to hold in memory.
//!
//! # Example
//!
//! ```
//! use vamdc_registry::{config, xquery};
//!
//! // The canonical query for all active VAMDC-TAP services.
//! let query = xquery::resources_by_capability(config::VAMDC_TAP_ID);
//! assert!(query.contains("ivo://vamdc/std/VAMDC-TAP"));
//! ```
//!
//! Talking to a live registry goes through [`RegistryClient`]:
//!
//! ```no_run
//! use vamdc_registry::{config, RegistryClient};
//!
//! # fn main() -> vamdc_registry::Result<()> {
//! let registry = RegistryClient::new()?; // release registry
//! let urls = registry.find_access_urls_by_capability(config::VAMDC_TAP_ID)?;
//! for url in urls {
//!     println!("{url}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`config`]: well-known endpoints, capability identifiers, namespaces
//! - [`error`]: error type and Result alias
//! - [`types`]: result document and per-call options
//! - [`xquery`]: query templates
//! - [`xml`]: XML navigation and extraction helpers
//! - [`rpc`]: the remote-call seam
//! - [`soap`]: default blocking SOAP transport
//! - [`client`]: the registry client

pub mod client;
pub mod config;
pub mod error;
pub mod rpc;
pub mod soap;
pub mod types;
pub mod xml;
pub mod xquery;

// Re-export the public surface.
pub use client::RegistryClient;
pub use error::{RegistryError, Result};
pub use rpc::RegistryRpc;
pub use soap::SoapClient;
pub use types::{ResponseScope, ResultDocument};
