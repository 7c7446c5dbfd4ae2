/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use crate::errors::FetchFailure;
use serde_json::Value;
use std::time::Duration;

pub mod filings;
pub mod http_source;
pub mod registry;

pub use filings::{FilingLocator, FilingLookup};
pub use http_source::EdgarHttp;
pub use registry::RegistryIndex;

/// Anything that can GET a URL and hand back a parsed JSON document.
///
/// `timeout` of `None` means the request may block for as long as the source allows.
pub trait JsonSource {
    fn get_json(&self, url: &str, timeout: Option<Duration>) -> Result<Value, FetchFailure>;
}

impl<S: JsonSource + ?Sized> JsonSource for &S {
    fn get_json(&self, url: &str, timeout: Option<Duration>) -> Result<Value, FetchFailure> {
        (**self).get_json(url, timeout)
    }
}
