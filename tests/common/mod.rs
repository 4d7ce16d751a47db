#![allow(dead_code)]

use flate2::Compression;
use flate2::write::ZlibEncoder;
use sphinx_inventory::FetchError;
use std::io::Write;

pub const HEADER: &str = "# Sphinx inventory version 2\n\
# Project: some-name\n\
# Version: 2.0\n\
# The rest of this file is compressed with zlib.\n";

pub fn compress(payload: &str) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(payload.as_bytes())
        .expect("in-memory write");
    encoder.finish().expect("in-memory finish")
}

/// Builds a complete manifest: `header` followed by the compressed payload.
pub fn manifest(header: &str, payload: &str) -> Vec<u8> {
    let mut data = header.as_bytes().to_vec();
    data.extend(compress(payload));
    data
}

pub fn serve(data: Vec<u8>) -> impl Fn(&str) -> Result<Vec<u8>, FetchError> {
    move |_: &str| -> Result<Vec<u8>, FetchError> { Ok(data.clone()) }
}

pub fn unreachable_host(_: &str) -> Result<Vec<u8>, FetchError> {
    Err(FetchError::Request("dns error: no such host".to_string()))
}
