//! Store-agnostic domain logic: entity records, random generation, and
//! report shaping.

pub mod entity;
pub mod generator;
pub mod login;
pub mod report;

pub use entity::{
    format_timestamp, Action, ActionType, Blog, Comment, NewAction, NewBlog, NewComment, NewPost,
    NewUser, Post, Space, TIMESTAMP_FORMAT,
};
pub use generator::Generator;
pub use login::Login;
pub use report::{ActivityKind, ActivityRow, CommentRow, DailyRow};
