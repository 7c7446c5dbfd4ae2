/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use serde::{Deserialize, Serialize};

/// One row of the registry dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub cik: String,
    pub name: String,
    pub ticker: String,
    pub exchange: String,
}

/// A single filing taken from the `filings.recent` parallel arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRecord {
    pub form: String,
    pub filing_date: String,
    pub accession_number: String,
    pub primary_document: String,
}

/// A matched filing together with the archive URL of its primary document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedFiling {
    pub record: FilingRecord,
    pub url: String,
}

/* ================= submissions payload (data.sec.gov) ================= */

#[derive(Debug, Clone, Deserialize)]
pub struct Submissions {
    #[serde(default)]
    pub name: Option<String>,
    pub filings: Filings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Filings {
    pub recent: RecentFilings,
}

/// Parallel arrays: index `i` of every column describes the same filing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilings {
    #[serde(default)]
    pub form: Vec<String>,
    #[serde(default)]
    pub filing_date: Vec<String>,
    #[serde(default)]
    pub accession_number: Vec<String>,
    #[serde(default)]
    pub primary_document: Vec<String>,
}

impl RecentFilings {
    /// Rows present in every column.
    pub fn len(&self) -> usize {
        self.form
            .len()
            .min(self.filing_date.len())
            .min(self.accession_number.len())
            .min(self.primary_document.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows in provider order.
    pub fn records(&self) -> impl Iterator<Item = FilingRecord> + '_ {
        (0..self.len()).map(move |i| FilingRecord {
            form: self.form[i].clone(),
            filing_date: self.filing_date[i].clone(),
            accession_number: self.accession_number[i].clone(),
            primary_document: self.primary_document[i].clone(),
        })
    }
}
