//! Entity records for the authors and logs stores.
//!
//! `New*` types are fully formed records ready for insertion; the store
//! assigns their ids. The id-carrying types are what the store hands back
//! to the analytics reader.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::Error;

/// Text layout of every stored timestamp. Sorts lexicographically in
/// chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp the way it is stored.
#[must_use]
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Calendar date part of a stored timestamp.
#[must_use]
pub fn timestamp_date(stored: &str) -> &str {
    stored.split(' ').next().unwrap_or(stored)
}

/// Kind of event recorded in the logs store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Login,
    Comment,
    CreatePost,
    DeletePost,
    Logout,
}

impl ActionType {
    pub const ALL: [ActionType; 5] = [
        ActionType::Login,
        ActionType::Comment,
        ActionType::CreatePost,
        ActionType::DeletePost,
        ActionType::Logout,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionType::Login => "login",
            ActionType::Comment => "comment",
            ActionType::CreatePost => "create_post",
            ActionType::DeletePost => "delete_post",
            ActionType::Logout => "logout",
        }
    }

    /// Where an action of this type takes place.
    #[must_use]
    pub const fn space(self) -> Space {
        match self {
            ActionType::Login | ActionType::Logout => Space::Global,
            ActionType::CreatePost | ActionType::DeletePost => Space::Blog,
            ActionType::Comment => Space::Post,
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::MalformedInput {
                field: "action_type",
                reason: format!("unknown action type '{s}'"),
            })
    }
}

/// Area of the site an action happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    Global,
    Blog,
    Post,
}

impl Space {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Space::Global => "global",
            Space::Blog => "blog",
            Space::Post => "post",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub owner_login: String,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub blog_id: i32,
    pub author_login: String,
    pub header: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i32,
    pub author_login: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAction {
    pub login: String,
    pub action_type: ActionType,
    pub space: Space,
    pub created_at: NaiveDateTime,
}

/// A stored blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: i32,
    pub owner_login: String,
    pub title: String,
    pub created_at: String,
}

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i32,
    pub blog_id: i32,
    pub author_login: String,
    pub header: String,
    pub created_at: String,
}

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author_login: String,
    pub created_at: String,
}

/// A stored action.
///
/// Type and space stay as stored text: the logs store may hold rows
/// written by other tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: i32,
    pub login: String,
    pub action_type: String,
    pub space: String,
    pub created_at: String,
}
