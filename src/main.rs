// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-press: export locale message catalogs as per-locale JSON resources
//!
//! Writes one pretty-printed `landing.json` per locale under a locales root
//! (`public/locales/it-IT/landing.json`, ...), the layout translation
//! loaders consume at runtime. Ships a built-in corpus embedded at compile
//! time; external JSON/YAML catalogs are supported for content maintained
//! elsewhere.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use locale_press::catalog::Corpus;
use locale_press::check;
use locale_press::export::{self, ExportConfig};

#[derive(Parser)]
#[command(name = "locale-press")]
#[command(version)]
#[command(about = "Export locale message catalogs as per-locale JSON resource files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every locale's catalog to <LOCALES_DIR>/<code>/landing.json
    Export {
        /// Base directory that holds one subdirectory per locale
        #[arg(value_name = "LOCALES_DIR", default_value = "public/locales")]
        locales_dir: PathBuf,

        /// Load the catalog from a JSON/YAML file instead of the built-in corpus
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Export only this locale (repeatable)
        #[arg(short, long = "locale", value_name = "CODE")]
        locales: Vec<String>,

        /// Fail locales whose directory is missing instead of creating it
        #[arg(long)]
        require_dirs: bool,

        /// Write a JSON run report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Suppress per-locale confirmation lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the locales in the catalog
    List {
        /// Load the catalog from a JSON/YAML file instead of the built-in corpus
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Verify every locale carries the same schema as the first one
    Check {
        /// Load the catalog from a JSON/YAML file instead of the built-in corpus
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn load_corpus(catalog: Option<&PathBuf>) -> Result<Corpus> {
    match catalog {
        Some(path) => Corpus::load(path),
        None => Corpus::builtin(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            locales_dir,
            catalog,
            locales,
            require_dirs,
            report,
            quiet,
        } => {
            let corpus = load_corpus(catalog.as_ref())?;

            let config = ExportConfig {
                locales_dir,
                locales,
                create_dirs: !require_dirs,
                report,
                quiet,
            };

            let run_report = export::run(&corpus, &config)?;
            export::print_summary(&run_report);

            if let Some(report_path) = &config.report {
                export::write_report(&run_report, report_path)?;
                println!("Report saved to: {}", report_path.display());
            }

            if !run_report.is_complete() {
                bail!(
                    "{} of {} locale(s) failed to export",
                    run_report.locales_failed,
                    run_report.locales_total
                );
            }
        }

        Commands::List { catalog } => {
            let corpus = load_corpus(catalog.as_ref())?;

            for (code, messages) in corpus.iter() {
                println!(
                    "  {:<8} {:<32} {:<20} {} keys",
                    code,
                    code.language_name().unwrap_or("-"),
                    code.native_name().unwrap_or("-"),
                    messages.len()
                );
            }
            println!("\n{} locale(s)", corpus.len());
        }

        Commands::Check { catalog } => {
            let corpus = load_corpus(catalog.as_ref())?;

            let report = check::run(&corpus)?;
            check::print_summary(&report);

            if !report.is_clean() {
                bail!("schema parity check failed");
            }
        }
    }

    Ok(())
}
