//! XQuery templates for the fixed set of registry searches.
//!
//! Each builder renders a canonical XQuery string from a template with
//! named placeholders. The templates declare every namespace they
//! reference, so the rendered text is self-contained.
//!
//! Capability identifiers are substituted verbatim. An identifier
//! containing a single quote would break out of the XQuery string literal;
//! the registry rejects such queries. This is a known limitation, kept
//! because the standard identifiers never contain quotes.

use crate::config::{RI_NAMESPACE, VR_NAMESPACE, XSI_NAMESPACE};

const RESOURCES_BY_CAPABILITY: &str = "declare namespace ri='{ri}';\
     for $x in //ri:Resource \
     where $x/capability[@standardID='{capability}'] \
     and $x/@status='active' \
     return $x";

const IDENTIFIERS_BY_CAPABILITY: &str = "declare namespace ri='{ri}';\
     for $x in //ri:Resource \
     where $x/capability[@standardID='{capability}'] \
     and $x/@status='active' \
     return $x/identifier";

const WEB_BROWSER_RESOURCES: &str = "declare namespace ri='{ri}';\
     declare namespace vr='{vr}';\
     declare namespace xsi='{xsi}';\
     for $x in //ri:Resource \
     where $x/capability/interface[@xsi:type='vr:WebBrowser'] \
     and $x/@status='active' \
     return $x";

/// Substitute `{name}` placeholders in a template.
fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut query = template.to_string();
    for (name, value) in substitutions {
        query = query.replace(&format!("{{{name}}}"), value);
    }
    query
}

/// XQuery selecting all active resources with the given capability.
///
/// The matched registration records come back as first-level children of
/// the result root.
#[must_use]
pub fn resources_by_capability(capability_id: &str) -> String {
    render(
        RESOURCES_BY_CAPABILITY,
        &[("ri", RI_NAMESPACE), ("capability", capability_id)],
    )
}

/// XQuery selecting only the `identifier` element of each active resource
/// with the given capability.
#[must_use]
pub fn identifiers_by_capability(capability_id: &str) -> String {
    render(
        IDENTIFIERS_BY_CAPABILITY,
        &[("ri", RI_NAMESPACE), ("capability", capability_id)],
    )
}

/// XQuery selecting all active resources that expose a web-browser
/// interface.
#[must_use]
pub fn web_browser_resources() -> String {
    render(
        WEB_BROWSER_RESOURCES,
        &[
            ("ri", RI_NAMESPACE),
            ("vr", VR_NAMESPACE),
            ("xsi", XSI_NAMESPACE),
        ],
    )
}
