//! Command-line interface definitions.
//!
//! One flat command line drives both modes: a positional login selects
//! analytics, `--fill`/`--create-tables` or any seed count selects seeding.

use std::path::PathBuf;

use clap::Parser;

use crate::application::SeedCounts;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// Seed blog/author databases with random data, or export analytics for a
/// user's login.
#[derive(Parser, Debug)]
#[command(name = "blogstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Login to export analytics for
    #[arg(conflicts_with_all = ["fill", "create_tables"])]
    pub login: Option<String>,

    /// Location of the authors database [default: authors.db]
    #[arg(long, value_name = "PATH")]
    pub authors_db: Option<PathBuf>,

    /// Location of the logs database [default: logs.db]
    #[arg(long, value_name = "PATH")]
    pub logs_db: Option<PathBuf>,

    /// Output location for the comments report [default: comments.csv]
    #[arg(long, value_name = "PATH")]
    pub comments_csv: Option<PathBuf>,

    /// Output location for the general activity report [default: general.csv]
    #[arg(long, value_name = "PATH")]
    pub general_csv: Option<PathBuf>,

    /// Also write the per-day activity summary here
    #[arg(long, value_name = "PATH")]
    pub daily_csv: Option<PathBuf>,

    /// Enable fill databases mode
    #[arg(short, long)]
    pub fill: bool,

    /// Create missing tables in both databases
    #[arg(short = 'g', long)]
    pub create_tables: bool,

    /// Add random users
    #[arg(short = 'u', long, value_name = "COUNT")]
    pub users_count: Option<usize>,

    /// Add random blogs
    #[arg(short = 'b', long, value_name = "COUNT")]
    pub blogs_count: Option<usize>,

    /// Add random posts
    #[arg(short = 'p', long, value_name = "COUNT")]
    pub posts_count: Option<usize>,

    /// Add random comments
    #[arg(short = 'c', long, value_name = "COUNT")]
    pub comments_count: Option<usize>,

    /// Add random actions to the logs database
    #[arg(short = 'l', long, value_name = "COUNT")]
    pub actions_count: Option<usize>,

    /// Seed for reproducible random data
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// What a run does, decided from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Report { login: String },
    Fill { create_tables: bool, counts: SeedCounts },
}

/// Effective paths and options after merging flags over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub authors_db: PathBuf,
    pub logs_db: PathBuf,
    pub comments_csv: PathBuf,
    pub general_csv: PathBuf,
    pub daily_csv: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl RunSettings {
    /// Check the merged settings before any store is opened.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] when both stores point at the same
    /// file.
    pub fn validate(&self) -> Result<()> {
        if self.authors_db == self.logs_db {
            return Err(Error::MalformedInput {
                field: "logs_db",
                reason: format!(
                    "authors and logs stores must be different files, both are {}",
                    self.logs_db.display()
                ),
            });
        }
        Ok(())
    }
}

impl Cli {
    /// Load the configuration file named by `--config`, or defaults.
    ///
    /// # Errors
    /// Returns a config error if the file cannot be read or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }

    #[must_use]
    pub fn seed_counts(&self) -> SeedCounts {
        SeedCounts {
            users: self.users_count.unwrap_or(0),
            blogs: self.blogs_count.unwrap_or(0),
            posts: self.posts_count.unwrap_or(0),
            comments: self.comments_count.unwrap_or(0),
            actions: self.actions_count.unwrap_or(0),
        }
    }

    fn any_count(&self) -> bool {
        [
            self.users_count,
            self.blogs_count,
            self.posts_count,
            self.comments_count,
            self.actions_count,
        ]
        .iter()
        .any(Option::is_some)
    }

    /// Decide the run mode.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] when neither a login nor any
    /// seeding option was given.
    pub fn mode(&self) -> Result<Mode> {
        if let Some(login) = &self.login {
            return Ok(Mode::Report {
                login: login.clone(),
            });
        }
        if self.fill || self.create_tables || self.any_count() {
            return Ok(Mode::Fill {
                create_tables: self.create_tables,
                counts: self.seed_counts(),
            });
        }
        Err(Error::MalformedInput {
            field: "arguments",
            reason: "give a login to report on, or --fill with seed counts (see --help)"
                .to_string(),
        })
    }

    /// Merge command-line paths over the configuration.
    #[must_use]
    pub fn settings(&self, config: &Config) -> RunSettings {
        let pick = |flag: &Option<PathBuf>, configured: &PathBuf| {
            flag.clone().unwrap_or_else(|| configured.clone())
        };

        RunSettings {
            authors_db: pick(&self.authors_db, &config.stores.authors),
            logs_db: pick(&self.logs_db, &config.stores.logs),
            comments_csv: pick(&self.comments_csv, &config.reports.comments),
            general_csv: pick(&self.general_csv, &config.reports.general),
            daily_csv: self.daily_csv.clone().or_else(|| config.reports.daily.clone()),
            seed: self.seed.or(config.generator.seed),
        }
    }
}
