//! Report output port.

use crate::domain::{ActivityRow, CommentRow, DailyRow};
use crate::error::Result;

/// Destination for finished reports.
///
/// Implementations write a header row followed by one row per entry, even
/// when the report is empty.
pub trait ReportSink {
    fn write_comments(&mut self, rows: &[CommentRow]) -> Result<()>;

    fn write_general(&mut self, rows: &[ActivityRow]) -> Result<()>;

    fn write_daily(&mut self, rows: &[DailyRow]) -> Result<()>;
}
