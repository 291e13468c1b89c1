//! Well-known endpoints, capability identifiers and namespace URIs.

/// Standard identifier for the TAP-XSAMS capability.
pub const TAP_XSAMS_ID: &str = "ivo://vamdc/std/TAP-XSAMS";

/// Standard identifier for the VAMDC-TAP capability.
pub const VAMDC_TAP_ID: &str = "ivo://vamdc/std/VAMDC-TAP";

/// Standard identifier for the generic IVOA TAP capability.
pub const TAP_ID: &str = "ivo://ivoa.net/std/TAP";

/// Query endpoint of the release registry.
pub const RELEASE_REGISTRY_ENDPOINT: &str =
    "http://registry.vamdc.eu/vamdc_registry/services/RegistryQueryv1_0";

/// Endpoint used when a client is built without an explicit endpoint.
pub const DEFAULT_REGISTRY_ENDPOINT: &str = RELEASE_REGISTRY_ENDPOINT;

/// Query endpoint of the development registry.
pub const DEVELOPMENT_REGISTRY_ENDPOINT: &str =
    "http://casx019-zone1.ast.cam.ac.uk/registry/services/RegistryQueryv1_0";

/// XML namespace of the IVOA registry interface.
pub const RI_NAMESPACE: &str = "http://www.ivoa.net/xml/RegistryInterface/v1.0";

/// XML namespace of IVOA VOResource.
pub const VR_NAMESPACE: &str = "http://www.ivoa.net/xml/VOResource/v1.0";

/// XML namespace for XML Schema instance attributes.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// HTTP timeout for the default transport, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;
