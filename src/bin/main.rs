/*
SPDX-License-Identifier: AGPL-3.0-only
Copyright (c) 2025 Augustus Rizza
*/

extern crate cik_finder;

use anyhow::{Context, Result};
use cik_finder::{
    CompanyRecord, EdgarConfig, EdgarHttp, FilingLocator, FilingLookup, LocatorError,
    RegistryIndex,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// User agent sent to the SEC (overrides EDGAR_USER_AGENT)
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a company by its registered name
    Name {
        /// e.g. NETFLIX INC
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Look up a company by ticker symbol
    Ticker { ticker: String },
    /// Locate the 10-K filed in a given year
    Annual {
        #[command(flatten)]
        company: Company,
        #[arg(long)]
        year: i32,
    },
    /// Locate the 10-Q filed in a given year and calendar quarter
    Quarterly {
        #[command(flatten)]
        company: Company,
        #[arg(long)]
        year: i32,
        /// 1..=4
        #[arg(long)]
        quarter: u8,
    },
}

#[derive(Debug, ClapArgs)]
#[group(required = true, multiple = false)]
struct Company {
    /// CIK, with or without leading zeros
    cik: Option<String>,
    /// Resolve the CIK from a ticker first
    #[arg(long)]
    ticker: Option<String>,
}

fn main() -> ExitCode {
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Ok(false) means the query ran but produced no result.
fn run(args: Args) -> Result<bool> {
    let mut cfg = EdgarConfig::from_env().context("reading EDGAR_* configuration")?;
    if let Some(ua) = args.user_agent {
        cfg = cfg.with_user_agent(ua);
    }
    let http = EdgarHttp::from_config(&cfg)?;
    let json = args.json;

    match args.command {
        Command::Name { name } => {
            let registry = load_registry(&http, &cfg)?;
            report_company(registry.lookup_by_name(&name.join(" ")), json)
        }
        Command::Ticker { ticker } => {
            let registry = load_registry(&http, &cfg)?;
            report_company(registry.lookup_by_ticker(&ticker), json)
        }
        Command::Annual { company, year } => {
            let Some(cik) = resolve_cik(&http, &cfg, company, json)? else {
                return Ok(false);
            };
            let lookup = FilingLocator::new(&http, &cfg).find_annual_filing(&cik, year);
            report_filing(&lookup, json)
        }
        Command::Quarterly {
            company,
            year,
            quarter,
        } => {
            let Some(cik) = resolve_cik(&http, &cfg, company, json)? else {
                return Ok(false);
            };
            let lookup =
                FilingLocator::new(&http, &cfg).find_quarterly_filing(&cik, year, quarter)?;
            report_filing(&lookup, json)
        }
    }
}

fn load_registry(http: &EdgarHttp, cfg: &EdgarConfig) -> Result<RegistryIndex> {
    let registry = RegistryIndex::load(http, &cfg.registry_url)
        .with_context(|| format!("loading registry from {}", cfg.registry_url))?;
    info!("registry ready ({} companies)", registry.len());
    Ok(registry)
}

fn resolve_cik(
    http: &EdgarHttp,
    cfg: &EdgarConfig,
    company: Company,
    json: bool,
) -> Result<Option<String>> {
    match (company.cik, company.ticker) {
        (Some(cik), _) => Ok(Some(cik)),
        (None, Some(ticker)) => {
            let registry = load_registry(http, cfg)?;
            match registry.lookup_by_ticker(&ticker) {
                Ok(rec) => {
                    info!("{} -> CIK {}", rec.ticker, rec.cik);
                    Ok(Some(rec.cik.clone()))
                }
                Err(e) => {
                    report_company(Err(e), json)?;
                    Ok(None)
                }
            }
        }
        (None, None) => anyhow::bail!("either a CIK or --ticker is required"),
    }
}

fn report_company(found: Result<&CompanyRecord, LocatorError>, json: bool) -> Result<bool> {
    match found {
        Ok(rec) => {
            if json {
                print_json(rec)?;
            } else {
                println!("{}\t{}\t{}\t{}", rec.cik, rec.name, rec.ticker, rec.exchange);
            }
            Ok(true)
        }
        Err(e) if e.is_not_found() => {
            println!("{e}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum FilingOutput<'a> {
    Found { url: &'a str, form: &'a str, filing_date: &'a str },
    NotFound,
    FetchFailed { reason: String },
}

fn report_filing(lookup: &FilingLookup, json: bool) -> Result<bool> {
    let out = match lookup {
        FilingLookup::Found(f) => FilingOutput::Found {
            url: &f.url,
            form: &f.record.form,
            filing_date: &f.record.filing_date,
        },
        FilingLookup::NotFound => FilingOutput::NotFound,
        FilingLookup::FetchFailed(reason) => FilingOutput::FetchFailed {
            reason: reason.to_string(),
        },
    };

    if json {
        print_json(&out)?;
    } else {
        match &out {
            FilingOutput::Found { url, .. } => println!("{url}"),
            FilingOutput::NotFound => println!("filing not found"),
            FilingOutput::FetchFailed { reason } => println!("could not fetch submissions: {reason}"),
        }
    }
    Ok(lookup.is_found())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
