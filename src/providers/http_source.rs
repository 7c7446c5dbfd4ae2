/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use super::JsonSource;
use crate::config::EdgarConfig;
use crate::errors::{FetchFailure, LocatorError};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::Duration;

/// Blocking HTTP source for sec.gov / data.sec.gov.
pub struct EdgarHttp {
    http: Client,
}

impl EdgarHttp {
    /// `user_agent` must include contact info, e.g. "cik-finder/0.1 (ops@example.com)"
    pub fn new(user_agent: &str) -> Result<Self, LocatorError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                LocatorError::InvalidArgument(format!("user agent `{user_agent}`: {e}"))
            })?,
        );

        // no client-wide timeout; each request states its own
        let http = Client::builder()
            .default_headers(headers)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| LocatorError::Client(e.to_string()))?;

        Ok(Self { http })
    }

    pub fn from_config(cfg: &EdgarConfig) -> Result<Self, LocatorError> {
        Self::new(&cfg.user_agent)
    }
}

impl JsonSource for EdgarHttp {
    fn get_json(&self, url: &str, timeout: Option<Duration>) -> Result<Value, FetchFailure> {
        debug!("GET {url} (timeout {timeout:?})");
        let mut req = self.http.get(url);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }

        let resp = req
            .send()
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        resp.json::<Value>()
            .map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}
