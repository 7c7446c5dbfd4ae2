/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use crate::errors::LocatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormType {
    #[serde(rename = "10-K")]
    Annual,
    #[serde(rename = "10-Q")]
    Quarterly,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Annual => "10-K",
            FormType::Quarterly => "10-Q",
        }
    }

    /// Exact match on the form column; amendments (`10-K/A`) are distinct forms.
    pub fn matches(&self, form: &str) -> bool {
        form == self.as_str()
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar quarter, always within 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter(u8);

impl Quarter {
    pub fn new(q: u8) -> Result<Self, LocatorError> {
        if (1..=4).contains(&q) {
            Ok(Quarter(q))
        } else {
            Err(LocatorError::InvalidArgument(format!(
                "quarter must be between 1 and 4, got {q}"
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Months (1-based) the quarter spans: Q1 = 1..=3 ... Q4 = 10..=12.
    pub fn months(&self) -> RangeInclusive<u8> {
        let first = (self.0 - 1) * 3 + 1;
        first..=first + 2
    }

    pub fn contains_month(&self, month: u8) -> bool {
        self.months().contains(&month)
    }
}

impl TryFrom<u8> for Quarter {
    type Error = LocatorError;

    fn try_from(q: u8) -> Result<Self, Self::Error> {
        Quarter::new(q)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/* =================== CIK helpers =================== */

/// Left-pad to the 10 digits the submissions endpoint expects.
pub fn zero_pad_cik(cik: &str) -> String {
    format!("{:0>10}", cik.trim())
}

/// Archive paths use the CIK without leading zeros.
pub fn strip_cik(cik: &str) -> &str {
    let t = cik.trim().trim_start_matches('0');
    if t.is_empty() { "0" } else { t }
}

/// Parses the date part of `YYYY-MM-DD` (anything after the 10th char is ignored).
pub fn parse_filing_date(s: &str) -> Option<Date> {
    let t = s.trim();
    let date_part = t.get(..10).unwrap_or(t);
    Date::parse(
        date_part,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .ok()
}
