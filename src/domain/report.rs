//! Report rows and the ordering rules shared by every report.
//!
//! All reports are ordered by timestamp ascending with ties broken by entity
//! id ascending. The general report merges four sources, so equal
//! `(timestamp, id)` pairs are further ordered by [`ActivityKind`].

use std::collections::BTreeMap;
use std::fmt;

use super::entity::{timestamp_date, Action, ActionType, Blog, Comment, Post, Space};

/// One comment written by the requested login, with its post and blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub comment_id: i32,
    pub body: String,
    pub created_at: String,
    pub post_id: i32,
    pub post_header: String,
    pub post_author: String,
    pub blog_id: i32,
    pub blog_title: String,
    /// Total comments on the post, by any author.
    pub post_comments: i64,
}

/// Source of a general report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityKind {
    Blog,
    Post,
    Comment,
    Action,
}

impl ActivityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Blog => "blog",
            ActivityKind::Post => "post",
            ActivityKind::Comment => "comment",
            ActivityKind::Action => "action",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the unified activity view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub created_at: String,
    pub kind: ActivityKind,
    pub entity_id: i32,
    /// Blog title, post header, `post <id>` for comments, `<type>@<space>`
    /// for actions.
    pub detail: String,
}

impl From<Blog> for ActivityRow {
    fn from(blog: Blog) -> Self {
        Self {
            created_at: blog.created_at,
            kind: ActivityKind::Blog,
            entity_id: blog.id,
            detail: blog.title,
        }
    }
}

impl From<Post> for ActivityRow {
    fn from(post: Post) -> Self {
        Self {
            created_at: post.created_at,
            kind: ActivityKind::Post,
            entity_id: post.id,
            detail: post.header,
        }
    }
}

impl From<Comment> for ActivityRow {
    fn from(comment: Comment) -> Self {
        Self {
            created_at: comment.created_at,
            kind: ActivityKind::Comment,
            entity_id: comment.id,
            detail: format!("post {}", comment.post_id),
        }
    }
}

impl From<Action> for ActivityRow {
    fn from(action: Action) -> Self {
        Self {
            created_at: action.created_at,
            kind: ActivityKind::Action,
            entity_id: action.id,
            detail: format!("{}@{}", action.action_type, action.space),
        }
    }
}

/// Per-day session and activity counts for one login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyRow {
    pub date: String,
    pub logins: u32,
    pub logouts: u32,
    /// Actions outside the global space.
    pub actions: u32,
}

/// Merge owned blogs, posts, comments and actions into one ordered
/// activity view.
#[must_use]
pub fn merge_activity(
    blogs: Vec<Blog>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    actions: Vec<Action>,
) -> Vec<ActivityRow> {
    let mut rows: Vec<ActivityRow> = blogs
        .into_iter()
        .map(ActivityRow::from)
        .chain(posts.into_iter().map(ActivityRow::from))
        .chain(comments.into_iter().map(ActivityRow::from))
        .chain(actions.into_iter().map(ActivityRow::from))
        .collect();
    sort_activity(&mut rows);
    rows
}

/// Order activity rows by timestamp, then entity id, then kind.
pub fn sort_activity(rows: &mut [ActivityRow]) {
    rows.sort_by(|left, right| {
        left.created_at
            .cmp(&right.created_at)
            .then(left.entity_id.cmp(&right.entity_id))
            .then(left.kind.cmp(&right.kind))
    });
}

/// Order comment rows by timestamp, then comment id.
pub fn sort_comments(rows: &mut [CommentRow]) {
    rows.sort_by(|left, right| {
        left.created_at
            .cmp(&right.created_at)
            .then(left.comment_id.cmp(&right.comment_id))
    });
}

/// Fold a login's actions into per-day counts, ascending by date.
#[must_use]
pub fn summarize_daily(actions: &[Action]) -> Vec<DailyRow> {
    let mut days: BTreeMap<&str, DailyRow> = BTreeMap::new();

    for action in actions {
        let date = timestamp_date(&action.created_at);
        let day = days.entry(date).or_insert_with(|| DailyRow {
            date: date.to_string(),
            ..DailyRow::default()
        });

        if action.action_type == ActionType::Login.as_str() {
            day.logins += 1;
        } else if action.action_type == ActionType::Logout.as_str() {
            day.logouts += 1;
        }
        if action.space != Space::Global.as_str() {
            day.actions += 1;
        }
    }

    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(id: i32, at: &str) -> Blog {
        Blog {
            id,
            owner_login: "ann".into(),
            title: format!("Blog {id}"),
            created_at: at.into(),
        }
    }

    fn post(id: i32, at: &str) -> Post {
        Post {
            id,
            blog_id: 1,
            author_login: "ann".into(),
            header: format!("Post {id}"),
            created_at: at.into(),
        }
    }

    fn comment(id: i32, at: &str) -> Comment {
        Comment {
            id,
            post_id: 7,
            author_login: "ann".into(),
            created_at: at.into(),
        }
    }

    fn action(id: i32, kind: ActionType, at: &str) -> Action {
        Action {
            id,
            login: "ann".into(),
            action_type: kind.as_str().into(),
            space: kind.space().as_str().into(),
            created_at: at.into(),
        }
    }

    #[test]
    fn merge_orders_by_timestamp_across_sources() {
        let rows = merge_activity(
            Vec::new(),
            vec![post(1, "2024-03-02 10:00:00")],
            vec![comment(4, "2024-03-01 09:00:00")],
            vec![action(2, ActionType::Login, "2024-03-03 08:00:00")],
        );

        let kinds: Vec<_> = rows.iter().map(|row| row.kind).collect();
        assert_eq!(
            kinds,
            vec![ActivityKind::Comment, ActivityKind::Post, ActivityKind::Action]
        );
    }

    #[test]
    fn equal_timestamps_break_ties_by_id_then_kind() {
        let at = "2024-03-02 10:00:00";
        let rows = merge_activity(
            Vec::new(),
            vec![post(5, at), post(2, at)],
            vec![comment(2, at)],
            vec![action(1, ActionType::Logout, at)],
        );

        let keys: Vec<_> = rows.iter().map(|row| (row.entity_id, row.kind)).collect();
        assert_eq!(
            keys,
            vec![
                (1, ActivityKind::Action),
                (2, ActivityKind::Post),
                (2, ActivityKind::Comment),
                (5, ActivityKind::Post),
            ]
        );
    }

    #[test]
    fn activity_detail_describes_the_source() {
        let rows = merge_activity(
            Vec::new(),
            vec![post(1, "2024-03-01 00:00:00")],
            vec![comment(2, "2024-03-02 00:00:00")],
            vec![action(3, ActionType::CreatePost, "2024-03-03 00:00:00")],
        );
        assert_eq!(rows[0].detail, "Post 1");
        assert_eq!(rows[1].detail, "post 7");
        assert_eq!(rows[2].detail, "create_post@blog");
    }

    #[test]
    fn owned_blogs_join_the_activity_view() {
        let at = "2024-03-02 10:00:00";
        let rows = merge_activity(
            vec![blog(3, "2024-03-01 00:00:00"), blog(2, at)],
            vec![post(2, at)],
            Vec::new(),
            vec![action(2, ActionType::Login, at)],
        );

        let keys: Vec<_> = rows
            .iter()
            .map(|row| (row.entity_id, row.kind, row.detail.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (3, ActivityKind::Blog, "Blog 3"),
                (2, ActivityKind::Blog, "Blog 2"),
                (2, ActivityKind::Post, "Post 2"),
                (2, ActivityKind::Action, "login@global"),
            ]
        );
    }

    #[test]
    fn daily_summary_counts_sessions_and_actions() {
        let actions = vec![
            action(1, ActionType::Login, "2024-03-01 08:00:00"),
            action(2, ActionType::Comment, "2024-03-01 09:00:00"),
            action(3, ActionType::Logout, "2024-03-01 18:00:00"),
            action(4, ActionType::Login, "2024-02-28 08:00:00"),
            action(5, ActionType::DeletePost, "2024-02-28 08:30:00"),
            action(6, ActionType::CreatePost, "2024-02-28 08:40:00"),
        ];

        let days = summarize_daily(&actions);
        assert_eq!(
            days,
            vec![
                DailyRow {
                    date: "2024-02-28".into(),
                    logins: 1,
                    logouts: 0,
                    actions: 2,
                },
                DailyRow {
                    date: "2024-03-01".into(),
                    logins: 1,
                    logouts: 1,
                    actions: 1,
                },
            ]
        );
    }

    #[test]
    fn daily_summary_of_nothing_is_empty() {
        assert!(summarize_daily(&[]).is_empty());
    }
}
