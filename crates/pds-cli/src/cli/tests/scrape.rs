//! Tests for the scrape subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_scrape_defaults() {
    match parse(&["pds-scraper", "scrape", "100"]) {
        CliCommand::Scrape {
            sol,
            node_name,
            mission,
            dl_edrs,
            dl_rdrs,
            dl_meshes,
            check,
            no_check,
        } => {
            assert_eq!(sol, 100);
            assert!(!check);
            assert!(node_name.is_none());
            assert!(mission.is_none());
            assert!(!dl_edrs && !dl_rdrs && !dl_meshes);
            assert!(!no_check);
        }
        _ => panic!("expected Scrape"),
    }
}

#[test]
fn cli_parse_scrape_short_flags() {
    match parse(&[
        "pds-scraper",
        "scrape",
        "12",
        "-n",
        "pds-imaging.jpl.nasa.gov",
        "-e",
        "-r",
        "-m",
    ]) {
        CliCommand::Scrape {
            sol,
            node_name,
            dl_edrs,
            dl_rdrs,
            dl_meshes,
            ..
        } => {
            assert_eq!(sol, 12);
            assert_eq!(node_name.as_deref(), Some("pds-imaging.jpl.nasa.gov"));
            assert!(dl_edrs && dl_rdrs && dl_meshes);
        }
        _ => panic!("expected Scrape with short flags"),
    }
}

#[test]
fn cli_parse_scrape_long_flags() {
    match parse(&[
        "pds-scraper",
        "scrape",
        "3",
        "--node-name",
        "https://example.org",
        "--mission",
        "MER - B",
        "--dl-meshes",
        "--no-check",
    ]) {
        CliCommand::Scrape {
            node_name,
            mission,
            dl_edrs,
            dl_meshes,
            no_check,
            ..
        } => {
            assert_eq!(node_name.as_deref(), Some("https://example.org"));
            assert_eq!(mission.as_deref(), Some("MER - B"));
            assert!(!dl_edrs);
            assert!(dl_meshes);
            assert!(no_check);
        }
        _ => panic!("expected Scrape with long flags"),
    }
}

#[test]
fn cli_parse_scrape_rejects_negative_sol() {
    assert!(Cli::try_parse_from(["pds-scraper", "scrape", "-1"]).is_err());
}

#[test]
fn cli_parse_scrape_requires_sol() {
    assert!(Cli::try_parse_from(["pds-scraper", "scrape"]).is_err());
}

#[test]
fn cli_parse_scrape_check_overrides_config() {
    match parse(&["pds-scraper", "scrape", "9", "--check"]) {
        CliCommand::Scrape {
            check, no_check, ..
        } => {
            assert!(check);
            assert!(!no_check);
        }
        _ => panic!("expected Scrape with --check"),
    }
}

#[test]
fn cli_parse_scrape_check_conflicts_with_no_check() {
    assert!(Cli::try_parse_from(["pds-scraper", "scrape", "9", "--check", "--no-check"]).is_err());
}
