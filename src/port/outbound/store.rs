//! Persistence ports for the authors and logs stores.
//!
//! Every `insert_*` call is one unit of work: it either stores the whole
//! batch or nothing. Separate calls are independent, so a failed call leaves
//! earlier batches in place.

use crate::domain::{
    Action, Blog, Comment, CommentRow, NewAction, NewBlog, NewComment, NewPost, NewUser, Post,
};
use crate::error::Result;

/// Operations shared by every store.
pub trait Store {
    /// Short name used in logs and errors (`authors`, `logs`).
    fn name(&self) -> &'static str;

    /// Create any missing tables. Must be safe to call repeatedly.
    fn ensure_schema(&mut self) -> Result<()>;

    /// Names of the user tables currently present.
    fn table_names(&mut self) -> Result<Vec<String>>;
}

/// Users, blogs, posts and comments.
pub trait AuthorsStore: Store {
    fn user_logins(&mut self) -> Result<Vec<String>>;

    fn blog_ids(&mut self) -> Result<Vec<i32>>;

    fn post_ids(&mut self) -> Result<Vec<i32>>;

    fn insert_users(&mut self, users: &[NewUser]) -> Result<usize>;

    fn insert_blogs(&mut self, blogs: &[NewBlog]) -> Result<usize>;

    fn insert_posts(&mut self, posts: &[NewPost]) -> Result<usize>;

    fn insert_comments(&mut self, comments: &[NewComment]) -> Result<usize>;

    /// Blogs owned by `login`.
    fn blogs_by(&mut self, login: &str) -> Result<Vec<Blog>>;

    /// Posts written by `login`.
    fn posts_by(&mut self, login: &str) -> Result<Vec<Post>>;

    /// Comments written by `login`.
    fn comments_by(&mut self, login: &str) -> Result<Vec<Comment>>;

    /// Comments written by `login`, joined with their post and blog.
    fn comment_details_by(&mut self, login: &str) -> Result<Vec<CommentRow>>;
}

/// The action log.
pub trait LogsStore: Store {
    fn insert_actions(&mut self, actions: &[NewAction]) -> Result<usize>;

    /// Actions performed by `login`.
    fn actions_by(&mut self, login: &str) -> Result<Vec<Action>>;
}
