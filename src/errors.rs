/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use thiserror::Error;

/// Why a JSON document could not be obtained from the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request error: {0}")]
    Network(String),

    #[error("http status {0}")]
    Status(u16),

    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("data fetch failed: {0}")]
    DataFetch(#[from] FetchFailure),

    #[error("unexpected payload shape: {0}")]
    Schema(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("http client error: {0}")]
    Client(String),
}

impl LocatorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LocatorError::NotFound(_))
    }
}
