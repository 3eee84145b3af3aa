//! Analytics use case: per-login reports over both stores.
//!
//! A login that matches nothing yields empty reports, not an error.

use tracing::info;

use crate::domain::report::{merge_activity, sort_comments, summarize_daily};
use crate::domain::{ActivityRow, CommentRow, DailyRow, Login};
use crate::error::Result;
use crate::port::outbound::report::ReportSink;
use crate::port::outbound::store::{AuthorsStore, LogsStore};

/// Row counts of the reports written by [`Analytics::export`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub comments: usize,
    pub general: usize,
    pub daily: Option<usize>,
}

/// Read-side queries over the authors and logs stores.
pub struct Analytics<'a, A: ?Sized, L: ?Sized> {
    authors: &'a mut A,
    logs: &'a mut L,
}

impl<'a, A, L> Analytics<'a, A, L>
where
    A: AuthorsStore + ?Sized,
    L: LogsStore + ?Sized,
{
    pub fn new(authors: &'a mut A, logs: &'a mut L) -> Self {
        Self { authors, logs }
    }

    /// Comments written by `login`, with the post and blog each belongs to.
    ///
    /// # Errors
    /// Returns a database error if the authors store cannot be queried.
    pub fn comments_report(&mut self, login: &Login) -> Result<Vec<CommentRow>> {
        let mut rows = self.authors.comment_details_by(login.as_str())?;
        sort_comments(&mut rows);
        Ok(rows)
    }

    /// Blogs owned by `login`, plus its posts, comments and actions, merged
    /// in time order.
    ///
    /// # Errors
    /// Returns a database error if either store cannot be queried.
    pub fn general_report(&mut self, login: &Login) -> Result<Vec<ActivityRow>> {
        let blogs = self.authors.blogs_by(login.as_str())?;
        let posts = self.authors.posts_by(login.as_str())?;
        let comments = self.authors.comments_by(login.as_str())?;
        let actions = self.logs.actions_by(login.as_str())?;
        Ok(merge_activity(blogs, posts, comments, actions))
    }

    /// Logins, logouts and in-site actions by `login`, per day.
    ///
    /// # Errors
    /// Returns a database error if the logs store cannot be queried.
    pub fn daily_report(&mut self, login: &Login) -> Result<Vec<DailyRow>> {
        let actions = self.logs.actions_by(login.as_str())?;
        Ok(summarize_daily(&actions))
    }

    /// Build every report for `login` and hand them to `sink`.
    ///
    /// The daily summary is built only when `with_daily` is set.
    ///
    /// # Errors
    /// Returns the first query or write error.
    pub fn export<S: ReportSink + ?Sized>(
        &mut self,
        login: &Login,
        sink: &mut S,
        with_daily: bool,
    ) -> Result<ReportSummary> {
        let comments = self.comments_report(login)?;
        sink.write_comments(&comments)?;

        let general = self.general_report(login)?;
        sink.write_general(&general)?;

        let daily = if with_daily {
            let daily = self.daily_report(login)?;
            sink.write_daily(&daily)?;
            Some(daily.len())
        } else {
            None
        };

        let summary = ReportSummary {
            comments: comments.len(),
            general: general.len(),
            daily,
        };
        info!(
            login = %login,
            comments = summary.comments,
            general = summary.general,
            "Reports exported"
        );
        Ok(summary)
    }
}
