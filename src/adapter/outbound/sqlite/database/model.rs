//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{actions, blogs, comments, posts, users};
use crate::domain::{
    self, format_timestamp, Action, Blog, Comment, NewAction, NewBlog, NewComment, NewPost,
    NewUser, Post,
};

/// Database row for a user.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub login: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<&NewUser> for UserRow {
    fn from(user: &NewUser) -> Self {
        Self {
            login: user.login.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: format_timestamp(user.created_at),
        }
    }
}

/// Database row for a blog (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = blogs)]
pub struct NewBlogRow<'a> {
    pub owner_login: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub created_at: String,
}

impl<'a> From<&'a NewBlog> for NewBlogRow<'a> {
    fn from(blog: &'a NewBlog) -> Self {
        Self {
            owner_login: &blog.owner_login,
            title: &blog.title,
            description: &blog.description,
            created_at: format_timestamp(blog.created_at),
        }
    }
}

/// Database row for a blog (queryable, description omitted).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = blogs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BlogRow {
    pub id: i32,
    pub owner_login: String,
    pub title: String,
    pub created_at: String,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            owner_login: row.owner_login,
            title: row.title,
            created_at: row.created_at,
        }
    }
}

/// Database row for a post (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = posts)]
pub struct NewPostRow<'a> {
    pub blog_id: i32,
    pub author_login: &'a str,
    pub header: &'a str,
    pub body: &'a str,
    pub created_at: String,
}

impl<'a> From<&'a NewPost> for NewPostRow<'a> {
    fn from(post: &'a NewPost) -> Self {
        Self {
            blog_id: post.blog_id,
            author_login: &post.author_login,
            header: &post.header,
            body: &post.body,
            created_at: format_timestamp(post.created_at),
        }
    }
}

/// Database row for a post (queryable, body omitted).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostRow {
    pub id: i32,
    pub blog_id: i32,
    pub author_login: String,
    pub header: String,
    pub created_at: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            blog_id: row.blog_id,
            author_login: row.author_login,
            header: row.header,
            created_at: row.created_at,
        }
    }
}

/// Database row for a comment (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = comments)]
pub struct NewCommentRow<'a> {
    pub post_id: i32,
    pub author_login: &'a str,
    pub body: &'a str,
    pub created_at: String,
}

impl<'a> From<&'a NewComment> for NewCommentRow<'a> {
    fn from(comment: &'a NewComment) -> Self {
        Self {
            post_id: comment.post_id,
            author_login: &comment.author_login,
            body: &comment.body,
            created_at: format_timestamp(comment.created_at),
        }
    }
}

/// Database row for a comment (queryable, body omitted).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommentRow {
    pub id: i32,
    pub post_id: i32,
    pub author_login: String,
    pub created_at: String,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            post_id: row.post_id,
            author_login: row.author_login,
            created_at: row.created_at,
        }
    }
}

/// A comment joined with its post and blog, in select order.
#[derive(Queryable, Debug, Clone)]
pub struct CommentDetailRow {
    pub comment_id: i32,
    pub body: String,
    pub created_at: String,
    pub post_id: i32,
    pub post_header: String,
    pub post_author: String,
    pub blog_id: i32,
    pub blog_title: String,
}

impl CommentDetailRow {
    /// Attach the post's total comment count.
    pub fn into_report(self, post_comments: i64) -> domain::CommentRow {
        domain::CommentRow {
            comment_id: self.comment_id,
            body: self.body,
            created_at: self.created_at,
            post_id: self.post_id,
            post_header: self.post_header,
            post_author: self.post_author,
            blog_id: self.blog_id,
            blog_title: self.blog_title,
            post_comments,
        }
    }
}

/// Database row for an action (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = actions)]
pub struct NewActionRow<'a> {
    pub login: &'a str,
    pub action_type: &'static str,
    pub space: &'static str,
    pub created_at: String,
}

impl<'a> From<&'a NewAction> for NewActionRow<'a> {
    fn from(action: &'a NewAction) -> Self {
        Self {
            login: &action.login,
            action_type: action.action_type.as_str(),
            space: action.space.as_str(),
            created_at: format_timestamp(action.created_at),
        }
    }
}

/// Database row for an action (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = actions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActionRow {
    pub id: i32,
    pub login: String,
    pub action_type: String,
    pub space: String,
    pub created_at: String,
}

impl From<ActionRow> for Action {
    fn from(row: ActionRow) -> Self {
        Self {
            id: row.id,
            login: row.login,
            action_type: row.action_type,
            space: row.space,
            created_at: row.created_at,
        }
    }
}
