/*

SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza

*/

use super::JsonSource;
use crate::errors::LocatorError;
use crate::models::CompanyRecord;
use log::{debug, info};
use serde_json::Value;
use std::collections::HashMap;

/// Name and ticker lookups over the SEC `company_tickers_exchange.json` dataset.
///
/// That file is `{"fields": ["cik","name","ticker","exchange"], "data": [[320193,"Apple Inc.","AAPL","Nasdaq"], ...]}`.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    by_name: HashMap<String, CompanyRecord>,
    by_ticker: HashMap<String, CompanyRecord>,
}

impl RegistryIndex {
    /// One GET of the registry dataset (no timeout), then index every row.
    pub fn load<S: JsonSource>(source: &S, url: &str) -> Result<Self, LocatorError> {
        debug!("fetching registry dataset from {url}");
        let body = source.get_json(url, None)?;
        let index = Self::from_value(body)?;
        info!(
            "registry loaded: {} names, {} tickers",
            index.by_name.len(),
            index.by_ticker.len()
        );
        Ok(index)
    }

    pub fn from_value(body: Value) -> Result<Self, LocatorError> {
        let rows = body
            .get("data")
            .ok_or_else(|| LocatorError::Schema("missing `data` field".into()))?
            .as_array()
            .ok_or_else(|| LocatorError::Schema("`data` is not an array".into()))?;

        let mut index = Self::default();
        for (i, row) in rows.iter().enumerate() {
            let record = record_from_row(i, row)?;
            index.insert(record);
        }
        Ok(index)
    }

    // later rows overwrite earlier ones on a name or ticker collision
    fn insert(&mut self, record: CompanyRecord) {
        self.by_name.insert(normalize(&record.name), record.clone());
        self.by_ticker.insert(normalize(&record.ticker), record);
    }

    pub fn lookup_by_name(&self, name: &str) -> Result<&CompanyRecord, LocatorError> {
        self.by_name
            .get(&normalize(name))
            .ok_or_else(|| LocatorError::NotFound(format!("company name `{}`", name.trim())))
    }

    pub fn lookup_by_ticker(&self, ticker: &str) -> Result<&CompanyRecord, LocatorError> {
        self.by_ticker
            .get(&normalize(ticker))
            .ok_or_else(|| LocatorError::NotFound(format!("ticker `{}`", ticker.trim())))
    }

    /// Distinct names indexed.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

pub fn normalize(key: &str) -> String {
    key.trim().to_uppercase()
}

fn record_from_row(i: usize, row: &Value) -> Result<CompanyRecord, LocatorError> {
    let cells = match row.as_array() {
        Some(cells) if cells.len() == 4 => cells,
        Some(cells) => {
            return Err(LocatorError::Schema(format!(
                "row {i}: expected 4 elements, got {}",
                cells.len()
            )));
        }
        None => return Err(LocatorError::Schema(format!("row {i}: not an array"))),
    };

    let cik = match &cells[0] {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(LocatorError::Schema(format!(
                "row {i}: cik must be a string or number, got {other}"
            )));
        }
    };

    Ok(CompanyRecord {
        cik,
        name: text_cell(i, "name", &cells[1])?,
        ticker: text_cell(i, "ticker", &cells[2])?,
        exchange: text_cell(i, "exchange", &cells[3])?,
    })
}

// the live dataset carries `null` exchanges for some OTC listings
fn text_cell(i: usize, field: &str, v: &Value) -> Result<String, LocatorError> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        other => Err(LocatorError::Schema(format!(
            "row {i}: {field} must be a string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "fields": ["cik", "name", "ticker", "exchange"],
            "data": [
                ["0001065280", "NETFLIX INC", "NFLX", "NASDAQ"],
                [320193, "Apple Inc.", "AAPL", "Nasdaq"],
                ["0001318605", "Tesla, Inc.", "TSLA", "Nasdaq"],
                ["0001234567", "Quiet Holdings Corp", "QHCO", null]
            ]
        })
    }

    #[test]
    fn every_row_is_reachable_both_ways() {
        let body = fixture();
        let index = RegistryIndex::from_value(body.clone()).unwrap();
        for row in body["data"].as_array().unwrap() {
            let name = row[1].as_str().unwrap();
            let ticker = row[2].as_str().unwrap();
            let a = index.lookup_by_name(&normalize(name)).unwrap();
            let b = index.lookup_by_ticker(&normalize(ticker)).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.name, name);
            assert_eq!(a.ticker, ticker);
        }
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn netflix_by_lowercase_ticker() {
        let index = RegistryIndex::from_value(fixture()).unwrap();
        let rec = index.lookup_by_ticker("nflx").unwrap();
        assert_eq!(rec.cik, "0001065280");
        assert_eq!(rec.exchange, "NASDAQ");
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let index = RegistryIndex::from_value(fixture()).unwrap();
        assert_eq!(
            index.lookup_by_name(" netflix inc ").unwrap(),
            index.lookup_by_name("NETFLIX INC").unwrap()
        );
        assert_eq!(index.lookup_by_ticker("\taapl\n").unwrap().cik, "320193");
    }

    #[test]
    fn null_exchange_becomes_empty() {
        let index = RegistryIndex::from_value(fixture()).unwrap();
        assert_eq!(index.lookup_by_ticker("QHCO").unwrap().exchange, "");
    }

    #[test]
    fn misses_are_not_found() {
        let index = RegistryIndex::from_value(fixture()).unwrap();
        assert!(index.lookup_by_name("NETFLIX").unwrap_err().is_not_found());
        assert!(index.lookup_by_ticker("ZZZZ").unwrap_err().is_not_found());
        assert!(index.lookup_by_ticker("").unwrap_err().is_not_found());
    }

    #[test]
    fn last_row_wins_on_collision() {
        let body = json!({ "data": [
            ["1", "DUPLICATE CO", "DUP", "NYSE"],
            ["2", "DUPLICATE CO", "DUP", "NASDAQ"]
        ]});
        let index = RegistryIndex::from_value(body).unwrap();
        assert_eq!(index.lookup_by_name("duplicate co").unwrap().cik, "2");
        assert_eq!(index.lookup_by_ticker("dup").unwrap().cik, "2");
    }

    #[test]
    fn schema_errors() {
        let missing = RegistryIndex::from_value(json!({ "rows": [] })).unwrap_err();
        assert!(matches!(missing, LocatorError::Schema(_)));

        let short = RegistryIndex::from_value(json!({ "data": [["1", "A", "B"]] })).unwrap_err();
        assert!(matches!(short, LocatorError::Schema(_)));

        let not_rows = RegistryIndex::from_value(json!({ "data": {"0": 1} })).unwrap_err();
        assert!(matches!(not_rows, LocatorError::Schema(_)));

        let bad_cell =
            RegistryIndex::from_value(json!({ "data": [["1", 7, "B", "NYSE"]] })).unwrap_err();
        assert!(matches!(bad_cell, LocatorError::Schema(_)));
    }
}
