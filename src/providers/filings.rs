/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use super::JsonSource;
use crate::config::EdgarConfig;
use crate::errors::{FetchFailure, LocatorError};
use crate::models::{FilingRecord, LocatedFiling, RecentFilings, Submissions};
use crate::query::{FormType, Quarter, parse_filing_date, strip_cik, zero_pad_cik};
use log::{debug, warn};
use std::time::Duration;
use time::Date;

/// Outcome of a filing search. Never an error: a failed fetch is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilingLookup {
    Found(LocatedFiling),
    NotFound,
    FetchFailed(FetchFailure),
}

impl FilingLookup {
    pub fn url(&self) -> Option<&str> {
        match self {
            FilingLookup::Found(f) => Some(&f.url),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FilingLookup::Found(_))
    }
}

/// Locates 10-K / 10-Q documents through the per-entity submissions endpoint.
pub struct FilingLocator<S> {
    source: S,
    submissions_base: String,
    archive_base: String,
    timeout: Duration,
}

impl<S: JsonSource> FilingLocator<S> {
    pub fn new(source: S, cfg: &EdgarConfig) -> Self {
        Self {
            source,
            submissions_base: cfg.submissions_base.clone(),
            archive_base: cfg.archive_base.clone(),
            timeout: cfg.submissions_timeout,
        }
    }

    pub fn submissions_url(&self, cik: &str) -> String {
        format!(
            "{base}/CIK{cik}.json",
            base = self.submissions_base,
            cik = zero_pad_cik(cik)
        )
    }

    /// `{archive}/{cik without leading zeros}/{accession without hyphens}/{primary doc}`
    pub fn document_url(&self, cik: &str, record: &FilingRecord) -> String {
        let acc_clean: String = record
            .accession_number
            .chars()
            .filter(|c| *c != '-')
            .collect();
        format!(
            "{base}/{cik}/{acc}/{doc}",
            base = self.archive_base,
            cik = strip_cik(cik),
            acc = acc_clean,
            doc = record.primary_document
        )
    }

    /// Load the submissions payload; any failure comes back as a reason, not an error.
    pub fn fetch_submissions(&self, cik: &str) -> Result<Submissions, FetchFailure> {
        let url = self.submissions_url(cik);
        let result = self
            .source
            .get_json(&url, Some(self.timeout))
            .and_then(|v| {
                serde_json::from_value::<Submissions>(v)
                    .map_err(|e| FetchFailure::Decode(e.to_string()))
            });

        if let Err(e) = &result {
            warn!("submissions unavailable for CIK {cik} ({url}): {e}");
        }
        result
    }

    /// First 10-K filed in `year`, in provider order.
    pub fn find_annual_filing(&self, cik: &str, year: i32) -> FilingLookup {
        self.find_filing(cik, FormType::Annual, |d| d.year() == year)
    }

    /// First 10-Q filed in `year` with a filing month inside `quarter`.
    pub fn find_quarterly_filing(
        &self,
        cik: &str,
        year: i32,
        quarter: u8,
    ) -> Result<FilingLookup, LocatorError> {
        let quarter = Quarter::new(quarter)?;
        Ok(self.find_filing(cik, FormType::Quarterly, |d| {
            d.year() == year && quarter.contains_month(u8::from(d.month()))
        }))
    }

    fn find_filing<P>(&self, cik: &str, form: FormType, on_date: P) -> FilingLookup
    where
        P: Fn(Date) -> bool,
    {
        let submissions = match self.fetch_submissions(cik) {
            Ok(s) => s,
            Err(e) => return FilingLookup::FetchFailed(e),
        };

        match first_matching(&submissions.filings.recent, form, on_date) {
            Some(record) => {
                let url = self.document_url(cik, &record);
                debug!("CIK {cik}: {form} filed {} -> {url}", record.filing_date);
                FilingLookup::Found(LocatedFiling { record, url })
            }
            None => {
                debug!("CIK {cik}: no matching {form} among {} filings", submissions.filings.recent.len());
                FilingLookup::NotFound
            }
        }
    }
}

/// Walks every row in order and returns the first with `form` whose filing
/// date satisfies `on_date`. Rows with unparseable dates never match.
pub fn first_matching<P>(recent: &RecentFilings, form: FormType, on_date: P) -> Option<FilingRecord>
where
    P: Fn(Date) -> bool,
{
    recent.records().find(|r| {
        form.matches(&r.form) && parse_filing_date(&r.filing_date).is_some_and(&on_date)
    })
}
