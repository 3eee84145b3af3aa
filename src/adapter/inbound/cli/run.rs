//! Handlers for the two run modes.

use tracing::info;

use crate::adapter::inbound::cli::command::{Cli, Mode, RunSettings};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::csv::CsvReportSink;
use crate::application::{ensure_schema, Analytics, SeedCounts, Seeder};
use crate::domain::Login;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_generator, open_stores};
use crate::infrastructure::config::settings::Config;

/// Execute the mode selected by `cli`.
///
/// # Errors
/// Returns the first error from argument checks, the stores, or the
/// report files.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let mode = cli.mode()?;
    let settings = cli.settings(config);
    settings.validate()?;
    match mode {
        Mode::Report { login } => execute_report(&login, &settings),
        Mode::Fill {
            create_tables,
            counts,
        } => execute_fill(create_tables, counts, &settings),
    }
}

/// Create tables if asked, then seed both stores.
fn execute_fill(create_tables: bool, counts: SeedCounts, settings: &RunSettings) -> Result<()> {
    if counts.is_empty() && !create_tables {
        output::warning("Nothing to do: no counts given");
        return Ok(());
    }

    let mut stores = open_stores(&settings.authors_db, &settings.logs_db)?;

    if create_tables {
        ensure_schema(&mut stores.authors)?;
        ensure_schema(&mut stores.logs)?;
        output::success("Tables ready");
    }

    if counts.is_empty() {
        return Ok(());
    }

    let mut seeder = Seeder::new(build_generator(settings.seed));
    let summary = seeder.seed(&mut stores.authors, &mut stores.logs, counts)?;
    info!(total = summary.total(), "Seeding finished");

    output::section("Seeded");
    output::field("Users", summary.users);
    output::field("Blogs", summary.blogs);
    output::field("Posts", summary.posts);
    output::field("Comments", summary.comments);
    output::field("Actions", summary.actions);
    Ok(())
}

/// Export the reports for `login`.
///
/// Missing tables are created first so a fresh store reports empty.
fn execute_report(login: &str, settings: &RunSettings) -> Result<()> {
    let login = Login::parse(login)?;
    let mut stores = open_stores(&settings.authors_db, &settings.logs_db)?;
    ensure_schema(&mut stores.authors)?;
    ensure_schema(&mut stores.logs)?;

    let mut sink = CsvReportSink::new(&settings.comments_csv, &settings.general_csv);
    if let Some(daily) = &settings.daily_csv {
        sink = sink.with_daily(daily);
    }
    let with_daily = sink.wants_daily();

    let mut analytics = Analytics::new(&mut stores.authors, &mut stores.logs);
    let summary = analytics.export(&login, &mut sink, with_daily)?;

    output::section(&format!("Reports for {login}"));
    output::field("Comments", summary.comments);
    output::field("Activity", summary.general);
    if let Some(days) = summary.daily {
        output::field("Days", days);
    }
    output::success(&format!(
        "Wrote {} and {}",
        settings.comments_csv.display(),
        settings.general_csv.display()
    ));
    Ok(())
}
