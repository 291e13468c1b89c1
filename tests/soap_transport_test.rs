//! SOAP transport behaviour against a mock registry endpoint.
//!
//! The transport is blocking, so each test drives it from
//! `spawn_blocking` while wiremock serves the endpoint on the runtime.

use tokio::task;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vamdc_registry::config::VAMDC_TAP_ID;
use vamdc_registry::xml::{descendants_named, local_name};
use vamdc_registry::{RegistryClient, RegistryError, RegistryRpc, ResponseScope, SoapClient};

fn search_envelope(inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <rs:XQuerySearchResponse xmlns:rs="http://www.ivoa.net/wsdl/RegistrySearch/v1.0">{inner}</rs:XQuerySearchResponse>
  </soapenv:Body>
</soapenv:Envelope>"#
    )
}

fn get_resource_envelope(inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <rs:GetResourceResponse xmlns:rs="http://www.ivoa.net/wsdl/RegistrySearch/v1.0">{inner}</rs:GetResourceResponse>
  </soapenv:Body>
</soapenv:Envelope>"#
    )
}

const FAULT_ENVELOPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <soapenv:Fault>
      <faultcode>soapenv:Server</faultcode>
      <faultstring>registry store offline</faultstring>
    </soapenv:Fault>
  </soapenv:Body>
</soapenv:Envelope>"#;

const RESOURCE: &str = r#"<ri:Resource xmlns:ri="http://www.ivoa.net/xml/RegistryInterface/v1.0" status="active"><identifier>ivo://vamdc/node-a</identifier></ri:Resource>"#;

#[tokio::test(flavor = "multi_thread")]
async fn search_renders_query_into_envelope_and_extracts_identifiers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("SOAPAction", "\"XQuerySearch\""))
        .and(body_string_contains("XQuerySearch"))
        // The rendered XQuery travels inside the envelope.
        .and(body_string_contains(
            "capability[@standardID='ivo://vamdc/std/VAMDC-TAP']",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_envelope(
            "<identifier>ivo://vamdc/node-a</identifier><identifier>ivo://vamdc/node-b</identifier>",
        )))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let identifiers = task::spawn_blocking(move || {
        let client = RegistryClient::with_transport(endpoint, SoapClient::new()?);
        client.list_identifiers_by_capability(VAMDC_TAP_ID)
    })
    .await
    .expect("join")
    .expect("search");

    assert_eq!(identifiers, vec!["ivo://vamdc/node-a", "ivo://vamdc/node-b"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn body_only_scope_returns_response_wrapper_as_root() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_envelope(RESOURCE)))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let doc = task::spawn_blocking(move || {
        let rpc = SoapClient::new()?;
        rpc.xquery_search(&endpoint, "for $x in //ri:Resource return $x", ResponseScope::BodyOnly)
    })
    .await
    .expect("join")
    .expect("search");

    let tree = doc.document();
    assert_eq!(local_name(tree.root_element()), "XQuerySearchResponse");
    assert_eq!(descendants_named(tree.root_element(), "Resource").count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn full_envelope_scope_returns_the_whole_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_envelope(RESOURCE)))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let doc = task::spawn_blocking(move || {
        let rpc = SoapClient::new()?;
        rpc.xquery_search(
            &endpoint,
            "for $x in //ri:Resource return $x",
            ResponseScope::FullEnvelope,
        )
    })
    .await
    .expect("join")
    .expect("search");

    assert_eq!(local_name(doc.document().root_element()), "Envelope");
}

#[tokio::test(flavor = "multi_thread")]
async fn soap_fault_surfaces_as_registry_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(FAULT_ENVELOPE))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let err = task::spawn_blocking(move || {
        let client = RegistryClient::with_transport(endpoint, SoapClient::new()?);
        client.find_vamdc_tap()
    })
    .await
    .expect("join")
    .unwrap_err();

    match err {
        RegistryError::Fault { fault_string, .. } => {
            assert_eq!(fault_string, "registry store offline");
        }
        other => panic!("expected Fault, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_lookup_response_maps_to_resource_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("SOAPAction", "\"GetResource\""))
        .and(body_string_contains("ivo://vamdc/absent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(get_resource_envelope("")))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let err = task::spawn_blocking(move || {
        let client = RegistryClient::with_transport(endpoint, SoapClient::new()?);
        client.get_resource("ivo://vamdc/absent")
    })
    .await
    .expect("join")
    .unwrap_err();

    assert!(matches!(err, RegistryError::ResourceNotFound(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_returns_the_single_matching_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("SOAPAction", "\"GetResource\""))
        .respond_with(ResponseTemplate::new(200).set_body_string(get_resource_envelope(RESOURCE)))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let doc = task::spawn_blocking(move || {
        let client = RegistryClient::with_transport(endpoint, SoapClient::new()?);
        client.get_resource("ivo://vamdc/node-a")
    })
    .await
    .expect("join")
    .expect("lookup");

    assert_eq!(
        descendants_named(doc.document().root_element(), "Resource").count(),
        1
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_without_fault_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let err = task::spawn_blocking(move || {
        let client = RegistryClient::with_transport(endpoint, SoapClient::new()?);
        client.find_tap()
    })
    .await
    .expect("join")
    .unwrap_err();

    assert!(matches!(err, RegistryError::UnexpectedResponse(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_search_result_keeps_its_root() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_envelope("")))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let doc = task::spawn_blocking(move || {
        let client = RegistryClient::with_transport(endpoint, SoapClient::new()?);
        client.find_resources_by_capability("ivo://vamdc/std/unregistered")
    })
    .await
    .expect("join")
    .expect("empty search");

    let tree = doc.document();
    assert_eq!(local_name(tree.root_element()), "XQuerySearchResponse");
    assert_eq!(
        tree.root_element()
            .children()
            .filter(|n| n.is_element())
            .count(),
        0
    );
}
