/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

//! Resolve company names and tickers to SEC CIKs, then locate their
//! 10-K / 10-Q documents on EDGAR.
//!
//! ```no_run
//! use cik_finder::{EdgarConfig, EdgarHttp, FilingLocator, RegistryIndex};
//!
//! let cfg = EdgarConfig::from_env()?;
//! let http = EdgarHttp::from_config(&cfg)?;
//! let registry = RegistryIndex::load(&http, &cfg.registry_url)?;
//! let netflix = registry.lookup_by_ticker("NFLX")?;
//!
//! let locator = FilingLocator::new(&http, &cfg);
//! println!("{:?}", locator.find_annual_filing(&netflix.cik, 2023));
//! # Ok::<(), cik_finder::LocatorError>(())
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod query;


pub use config::EdgarConfig;
pub use errors::{FetchFailure, LocatorError};
pub use models::{CompanyRecord, FilingRecord, LocatedFiling};
pub use providers::{EdgarHttp, FilingLocator, FilingLookup, JsonSource, RegistryIndex};
pub use query::{FormType, Quarter};
