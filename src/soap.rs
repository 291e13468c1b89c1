//! Blocking SOAP transport for the registry query service.
//!
//! Speaks just enough SOAP 1.1 for the two registry operations the client
//! needs: `XQuerySearch` and `GetResource`. Faults are mapped onto
//! [`RegistryError`]; nothing is retried.

use std::time::Duration;

use reqwest::blocking::Client;
use roxmltree::Document;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{RegistryError, Result};
use crate::rpc::RegistryRpc;
use crate::types::{ResponseScope, ResultDocument};
use crate::xml::{local_name, subtree_text};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("vamdc-registry/", env!("CARGO_PKG_VERSION"));

const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const REGISTRY_SEARCH_NS: &str = "http://www.ivoa.net/wsdl/RegistrySearch/v1.0";

/// Default transport: SOAP 1.1 over blocking HTTP.
pub struct SoapClient {
    http: Client,
}

impl SoapClient {
    /// Create a transport with the default timeout and user agent.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    /// Send one SOAP request and pull the requested scope out of the
    /// response.
    fn call(
        &self,
        endpoint: &str,
        action: &str,
        body: &str,
        scope: ResponseScope,
    ) -> Result<ResultDocument> {
        tracing::debug!(endpoint, action, "sending registry call");

        let envelope = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <soapenv:Envelope xmlns:soapenv=\"{SOAP_ENVELOPE_NS}\">\
             <soapenv:Body>{body}</soapenv:Body>\
             </soapenv:Envelope>"
        );

        let response = self
            .http
            .post(endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{action}\""))
            .body(envelope)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        // Faults commonly arrive as HTTP 500 with an envelope, so inspect
        // the payload before the status.
        if let Some(fault) = parse_fault(&text) {
            tracing::warn!(endpoint, action, %fault, "registry returned a fault");
            return Err(fault);
        }
        if !status.is_success() {
            return Err(RegistryError::UnexpectedResponse(format!(
                "HTTP {status} from {endpoint}"
            )));
        }

        extract_result(&text, scope)
    }
}

impl RegistryRpc for SoapClient {
    fn xquery_search(
        &self,
        endpoint: &str,
        query: &str,
        scope: ResponseScope,
    ) -> Result<ResultDocument> {
        let body = format!(
            "<rs:XQuerySearch xmlns:rs=\"{REGISTRY_SEARCH_NS}\">\
             <rs:xquery>{}</rs:xquery>\
             </rs:XQuerySearch>",
            xml_escape(query)
        );
        self.call(endpoint, "XQuerySearch", &body, scope)
    }

    fn get_resource(&self, endpoint: &str, identifier: &str) -> Result<ResultDocument> {
        let body = format!(
            "<rs:GetResource xmlns:rs=\"{REGISTRY_SEARCH_NS}\">\
             <rs:identifier>{}</rs:identifier>\
             </rs:GetResource>",
            xml_escape(identifier)
        );
        let result = self.call(endpoint, "GetResource", &body, ResponseScope::BodyOnly)?;

        // The remote operation reports an unknown identifier either as a
        // fault or as a response with no record; both are errors here.
        if !has_element_children(&result) {
            return Err(RegistryError::ResourceNotFound(identifier.to_string()));
        }
        Ok(result)
    }
}

/// Escape text for embedding in an XML element.
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Detect a SOAP fault in a response payload.
fn parse_fault(text: &str) -> Option<RegistryError> {
    let doc = Document::parse(text).ok()?;
    let fault = doc
        .descendants()
        .find(|n| n.is_element() && local_name(*n) == "Fault")?;
    let field = |tag: &str| {
        fault
            .descendants()
            .find(|n| n.is_element() && local_name(*n) == tag)
            .and_then(|n| n.text())
            .map(str::trim)
            .unwrap_or("")
            .to_string()
    };
    Some(RegistryError::Fault {
        fault_code: field("faultcode"),
        fault_string: field("faultstring"),
    })
}

/// Pull the requested scope out of a SOAP response payload.
fn extract_result(text: &str, scope: ResponseScope) -> Result<ResultDocument> {
    match scope {
        ResponseScope::FullEnvelope => ResultDocument::new(text.to_string()),
        ResponseScope::BodyOnly => {
            let doc = Document::parse(text)?;
            let body = doc
                .descendants()
                .find(|n| n.is_element() && local_name(*n) == "Body")
                .ok_or_else(|| {
                    RegistryError::UnexpectedResponse("no SOAP body in response".to_string())
                })?;
            let result = body.children().find(|n| n.is_element()).ok_or_else(|| {
                RegistryError::UnexpectedResponse("empty SOAP body in response".to_string())
            })?;
            ResultDocument::new(subtree_text(result).to_string())
        }
    }
}

/// Whether the document's root element has any element children.
fn has_element_children(doc: &ResultDocument) -> bool {
    doc.document()
        .root_element()
        .children()
        .any(|n| n.is_element())
}
