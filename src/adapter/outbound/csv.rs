//! CSV report writer.
//!
//! Every file starts with a header row, then one line per entry. Fields
//! containing a comma, quote, CR or LF are quoted with inner quotes doubled.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{ActivityRow, CommentRow, DailyRow};
use crate::error::Result;
use crate::port::outbound::report::ReportSink;

/// A row type that can be rendered as one CSV line.
pub trait CsvRecord {
    const HEADER: &'static [&'static str];

    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for CommentRow {
    const HEADER: &'static [&'static str] = &[
        "comment_id",
        "created_at",
        "post_id",
        "post_header",
        "post_author",
        "blog_id",
        "blog_title",
        "post_comments",
        "body",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.comment_id.to_string(),
            self.created_at.clone(),
            self.post_id.to_string(),
            self.post_header.clone(),
            self.post_author.clone(),
            self.blog_id.to_string(),
            self.blog_title.clone(),
            self.post_comments.to_string(),
            self.body.clone(),
        ]
    }
}

impl CsvRecord for ActivityRow {
    const HEADER: &'static [&'static str] = &["created_at", "activity", "entity_id", "detail"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.created_at.clone(),
            self.kind.to_string(),
            self.entity_id.to_string(),
            self.detail.clone(),
        ]
    }
}

impl CsvRecord for DailyRow {
    const HEADER: &'static [&'static str] = &["date", "logins", "logouts", "actions"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.logins.to_string(),
            self.logouts.to_string(),
            self.actions.to_string(),
        ]
    }
}

/// Render rows as CSV text, header included.
#[must_use]
pub fn render<R: CsvRecord>(rows: &[R]) -> String {
    let mut csv = join_line(R::HEADER.iter().copied());
    for row in rows {
        let fields = row.fields();
        csv.push_str(&join_line(fields.iter().map(String::as_str)));
    }
    csv
}

/// Write rows as a CSV file at `path`, replacing any previous content.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_csv<R: CsvRecord>(path: &Path, rows: &[R]) -> Result<()> {
    fs::write(path, render(rows))?;
    info!(path = %path.display(), rows = rows.len(), "Report written");
    Ok(())
}

fn join_line<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    let mut line = fields.map(escape).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Report sink writing each report to its own CSV file.
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    comments: PathBuf,
    general: PathBuf,
    daily: Option<PathBuf>,
}

impl CsvReportSink {
    #[must_use]
    pub fn new(comments: impl Into<PathBuf>, general: impl Into<PathBuf>) -> Self {
        Self {
            comments: comments.into(),
            general: general.into(),
            daily: None,
        }
    }

    /// Also write the daily summary, to `path`.
    #[must_use]
    pub fn with_daily(mut self, path: impl Into<PathBuf>) -> Self {
        self.daily = Some(path.into());
        self
    }

    #[must_use]
    pub fn wants_daily(&self) -> bool {
        self.daily.is_some()
    }
}

impl ReportSink for CsvReportSink {
    fn write_comments(&mut self, rows: &[CommentRow]) -> Result<()> {
        write_csv(&self.comments, rows)
    }

    fn write_general(&mut self, rows: &[ActivityRow]) -> Result<()> {
        write_csv(&self.general, rows)
    }

    fn write_daily(&mut self, rows: &[DailyRow]) -> Result<()> {
        match &self.daily {
            Some(path) => write_csv(path, rows),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityKind;

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn empty_report_is_header_only() {
        assert_eq!(render::<DailyRow>(&[]), "date,logins,logouts,actions\n");
    }

    #[test]
    fn activity_rows_render_in_header_order() {
        let rows = vec![ActivityRow {
            created_at: "2024-03-10 08:00:00".into(),
            kind: ActivityKind::Action,
            entity_id: 3,
            detail: "login@global".into(),
        }];
        assert_eq!(
            render(&rows),
            "created_at,activity,entity_id,detail\n2024-03-10 08:00:00,action,3,login@global\n"
        );
    }

    #[test]
    fn comment_body_with_commas_stays_one_field() {
        let rows = vec![CommentRow {
            comment_id: 1,
            body: "Well, actually.".into(),
            created_at: "2024-03-10 08:00:00".into(),
            post_id: 2,
            post_header: "Header".into(),
            post_author: "bob".into(),
            blog_id: 3,
            blog_title: "Blog".into(),
            post_comments: 4,
        }];
        let csv = render(&rows);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "1,2024-03-10 08:00:00,2,Header,bob,3,Blog,4,\"Well, actually.\""
        );
    }

    #[test]
    fn sink_writes_files_and_skips_daily_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let comments = dir.path().join("comments.csv");
        let general = dir.path().join("general.csv");
        let mut sink = CsvReportSink::new(&comments, &general);

        sink.write_comments(&[]).unwrap();
        sink.write_general(&[]).unwrap();
        sink.write_daily(&[DailyRow::default()]).unwrap();

        assert!(fs::read_to_string(&comments)
            .unwrap()
            .starts_with("comment_id,"));
        assert_eq!(
            fs::read_to_string(&general).unwrap(),
            "created_at,activity,entity_id,detail\n"
        );
        assert!(!sink.wants_daily());
    }

    #[test]
    fn sink_writes_daily_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let daily = dir.path().join("daily.csv");
        let mut sink = CsvReportSink::new(dir.path().join("c.csv"), dir.path().join("g.csv"))
            .with_daily(&daily);

        sink.write_daily(&[DailyRow {
            date: "2024-03-10".into(),
            logins: 2,
            logouts: 1,
            actions: 5,
        }])
        .unwrap();

        assert_eq!(
            fs::read_to_string(&daily).unwrap(),
            "date,logins,logouts,actions\n2024-03-10,2,1,5\n"
        );
    }
}
