/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use crate::errors::LocatorError;
use std::time::Duration;

pub const DEFAULT_REGISTRY_URL: &str = "https://www.sec.gov/files/company_tickers_exchange.json";
pub const DEFAULT_SUBMISSIONS_BASE: &str = "https://data.sec.gov/submissions";
pub const DEFAULT_ARCHIVE_BASE: &str = "https://www.sec.gov/Archives/edgar/data";
/// The SEC rejects anonymous clients; the agent should name the caller and a contact address.
pub const DEFAULT_USER_AGENT: &str = "cik-finder/0.1 (contact@example.com)";
pub const DEFAULT_SUBMISSIONS_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints and client identity used against EDGAR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgarConfig {
    pub user_agent: String,
    pub registry_url: String,
    pub submissions_base: String,
    pub archive_base: String,
    pub submissions_timeout: Duration,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            submissions_base: DEFAULT_SUBMISSIONS_BASE.to_string(),
            archive_base: DEFAULT_ARCHIVE_BASE.to_string(),
            submissions_timeout: DEFAULT_SUBMISSIONS_TIMEOUT,
        }
    }
}

impl EdgarConfig {
    /// Defaults overridden by `EDGAR_*` variables (a `.env` file is honoured).
    ///
    ///   EDGAR_USER_AGENT, EDGAR_REGISTRY_URL, EDGAR_SUBMISSIONS_BASE,
    ///   EDGAR_ARCHIVE_BASE, EDGAR_TIMEOUT_SECS
    pub fn from_env() -> Result<Self, LocatorError> {
        // a missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, LocatorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup("EDGAR_USER_AGENT") {
            cfg.user_agent = v;
        }
        if let Some(v) = lookup("EDGAR_REGISTRY_URL") {
            cfg.registry_url = v;
        }
        if let Some(v) = lookup("EDGAR_SUBMISSIONS_BASE") {
            cfg.submissions_base = trim_slash(v);
        }
        if let Some(v) = lookup("EDGAR_ARCHIVE_BASE") {
            cfg.archive_base = trim_slash(v);
        }
        if let Some(v) = lookup("EDGAR_TIMEOUT_SECS") {
            let secs = v.trim().parse::<u64>().map_err(|e| {
                LocatorError::InvalidArgument(format!("EDGAR_TIMEOUT_SECS `{v}`: {e}"))
            })?;
            cfg.submissions_timeout = Duration::from_secs(secs);
        }
        Ok(cfg)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = url.into();
        self
    }

    pub fn with_submissions_base(mut self, base: impl Into<String>) -> Self {
        self.submissions_base = trim_slash(base.into());
        self
    }

    pub fn with_archive_base(mut self, base: impl Into<String>) -> Self {
        self.archive_base = trim_slash(base.into());
        self
    }

    pub fn with_submissions_timeout(mut self, timeout: Duration) -> Self {
        self.submissions_timeout = timeout;
        self
    }
}

fn trim_slash(mut s: String) -> String {
    while s.ends_with('/') {
        s.pop();
    }
    s
}
