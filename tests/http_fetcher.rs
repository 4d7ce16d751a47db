#![cfg(feature = "http")]

mod common;

use common::{HEADER, manifest};
use sphinx_inventory::{CollectingDiagnostics, Fetch, FetchError, HttpFetcher, SphinxInventory};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

/// Serves one canned response per connection, in order, on a local port.
fn serve_responses(responses: Vec<Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        for response in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut line = String::new();
            while reader.read_line(&mut line).expect("read request") > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            stream.write_all(&response).expect("write response");
        }
    });
    format!("http://{}", addr)
}

fn response(status: &str, body: &[u8]) -> Vec<u8> {
    let mut data = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    )
    .into_bytes();
    data.extend_from_slice(body);
    data
}

#[test]
fn http_error_status_is_fetch_error() {
    let base = serve_responses(vec![response("404 Not Found", b"")]);
    let fetcher = HttpFetcher::new().unwrap();

    let err = fetcher.fetch(&format!("{}/objects.inv", base)).unwrap_err();

    assert!(matches!(err, FetchError::Status(404)));
}

#[test]
fn http_empty_body_is_no_data() {
    let base = serve_responses(vec![response("200 OK", b"")]);
    let fetcher = HttpFetcher::new().unwrap();

    let err = fetcher.fetch(&format!("{}/objects.inv", base)).unwrap_err();

    assert!(matches!(err, FetchError::Empty));
}

#[test]
fn http_connection_refused_is_request_error() {
    let addr = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap();
    let fetcher = HttpFetcher::new().unwrap();

    let err = fetcher.fetch(&format!("http://{}/objects.inv", addr)).unwrap_err();

    assert!(matches!(err, FetchError::Request(_)));
}

#[test]
fn http_load_resolves_links() {
    let body = manifest(HEADER, "some.module1 py:module -1 module1.html -\n");
    let base = serve_responses(vec![response("200 OK", &body)]);
    let url = format!("{}/api/objects.inv", base);
    let mut sut = SphinxInventory::new(HttpFetcher::new().unwrap(), CollectingDiagnostics::new());

    sut.load(&url);

    assert_eq!(
        sut.get_link("some.module1"),
        Some(format!("{}/api/module1.html", base))
    );
    assert!(sut.diagnostics().entries().is_empty());
}
