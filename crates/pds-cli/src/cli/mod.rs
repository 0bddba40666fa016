//! CLI for the PDS imaging scraper.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pds_core::config;
use pds_core::url_check::Scheme;

use commands::{
    check_reachable, run_check_url, run_mission, run_missions, run_scrape, ScrapeArgs,
};

/// Top-level CLI for the PDS imaging scraper.
#[derive(Debug, Parser)]
#[command(name = "pds-scraper")]
#[command(about = "Locate Mars rover imagery on a PDS imaging node", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the archive location for one sol.
    Scrape {
        /// Sol from which to scrape data.
        sol: u32,

        /// Name of the PDS node from which to obtain the data (default from config).
        #[arg(short = 'n', long)]
        node_name: Option<String>,

        /// Name of the mission of interest (default from config).
        #[arg(long)]
        mission: Option<String>,

        /// Download EDRs for the given sol.
        #[arg(short = 'e', long)]
        dl_edrs: bool,

        /// Download RDRs for the given sol.
        #[arg(short = 'r', long)]
        dl_rdrs: bool,

        /// Download mesh data from the given sol.
        #[arg(short = 'm', long)]
        dl_meshes: bool,

        /// Probe the node with HEAD even if the config disables it.
        #[arg(long, conflicts_with = "no_check")]
        check: bool,

        /// Skip the HEAD reachability check on the node.
        #[arg(long)]
        no_check: bool,
    },

    /// Print the archive key for a mission name.
    Mission {
        /// Mission name, e.g. "Curiosity" or "MER-B".
        name: String,
    },

    /// List the missions the catalog knows.
    Missions,

    /// Validate a node name and print the resulting URL.
    CheckUrl {
        /// Full URL or bare host name.
        value: String,

        /// Probe with HEAD even if the config disables it.
        #[arg(long, conflicts_with = "no_check")]
        check: bool,

        /// Skip the HEAD reachability check.
        #[arg(long)]
        no_check: bool,

        /// Scheme for bare host names (http, https, ftp, ftps).
        #[arg(long, value_name = "SCHEME")]
        scheme: Option<Scheme>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scrape {
                sol,
                node_name,
                mission,
                dl_edrs,
                dl_rdrs,
                dl_meshes,
                check,
                no_check,
            } => run_scrape(
                &cfg,
                ScrapeArgs {
                    sol,
                    node_name,
                    mission,
                    dl_edrs,
                    dl_rdrs,
                    dl_meshes,
                    check,
                    no_check,
                },
            )?,
            CliCommand::Mission { name } => run_mission(&name),
            CliCommand::Missions => run_missions(),
            CliCommand::CheckUrl {
                value,
                check,
                no_check,
                scheme,
            } => run_check_url(&cfg, &value, check_reachable(&cfg, check, no_check), scheme)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
