//! SQLite implementation of the authors store.

use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::database::connection::{self, AUTHORS_MIGRATIONS};
use super::database::model::{
    self, BlogRow, CommentDetailRow, NewBlogRow, NewCommentRow, NewPostRow, PostRow, UserRow,
};
use super::database::schema::{blogs, comments, posts, users};
use crate::domain::{Blog, Comment, CommentRow, NewBlog, NewComment, NewPost, NewUser, Post};
use crate::error::Result;
use crate::port::outbound::store::{AuthorsStore, Store};

const STORE: &str = "authors";

/// Authors store backed by one SQLite connection.
pub struct SqliteAuthorsStore {
    conn: SqliteConnection,
}

impl SqliteAuthorsStore {
    /// Open (creating if needed) the authors database at `database_url`.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::StorageUnavailable`] if it cannot be opened.
    pub fn open(database_url: &str) -> Result<Self> {
        Ok(Self {
            conn: connection::establish(STORE, database_url)?,
        })
    }
}

impl Store for SqliteAuthorsStore {
    fn name(&self) -> &'static str {
        STORE
    }

    fn ensure_schema(&mut self) -> Result<()> {
        connection::run_migrations(STORE, &mut self.conn, AUTHORS_MIGRATIONS)
    }

    fn table_names(&mut self) -> Result<Vec<String>> {
        connection::table_names(&mut self.conn)
    }
}

impl AuthorsStore for SqliteAuthorsStore {
    fn user_logins(&mut self) -> Result<Vec<String>> {
        let logins = users::table
            .select(users::login)
            .order(users::login.asc())
            .load(&mut self.conn)?;
        Ok(logins)
    }

    fn blog_ids(&mut self) -> Result<Vec<i32>> {
        let ids = blogs::table
            .select(blogs::id)
            .order(blogs::id.asc())
            .load(&mut self.conn)?;
        Ok(ids)
    }

    fn post_ids(&mut self) -> Result<Vec<i32>> {
        let ids = posts::table
            .select(posts::id)
            .order(posts::id.asc())
            .load(&mut self.conn)?;
        Ok(ids)
    }

    fn insert_users(&mut self, new_users: &[NewUser]) -> Result<usize> {
        let rows: Vec<UserRow> = new_users.iter().map(UserRow::from).collect();
        connection::insert_chunked(&mut self.conn, &rows, |conn, chunk| {
            diesel::insert_into(users::table).values(chunk).execute(conn)
        })
    }

    fn insert_blogs(&mut self, new_blogs: &[NewBlog]) -> Result<usize> {
        let rows: Vec<NewBlogRow<'_>> = new_blogs.iter().map(NewBlogRow::from).collect();
        connection::insert_chunked(&mut self.conn, &rows, |conn, chunk| {
            diesel::insert_into(blogs::table).values(chunk).execute(conn)
        })
    }

    fn insert_posts(&mut self, new_posts: &[NewPost]) -> Result<usize> {
        let rows: Vec<NewPostRow<'_>> = new_posts.iter().map(NewPostRow::from).collect();
        connection::insert_chunked(&mut self.conn, &rows, |conn, chunk| {
            diesel::insert_into(posts::table).values(chunk).execute(conn)
        })
    }

    fn insert_comments(&mut self, new_comments: &[NewComment]) -> Result<usize> {
        let rows: Vec<NewCommentRow<'_>> = new_comments.iter().map(NewCommentRow::from).collect();
        connection::insert_chunked(&mut self.conn, &rows, |conn, chunk| {
            diesel::insert_into(comments::table).values(chunk).execute(conn)
        })
    }

    fn blogs_by(&mut self, login: &str) -> Result<Vec<Blog>> {
        let rows: Vec<BlogRow> = blogs::table
            .filter(blogs::owner_login.eq(login))
            .order((blogs::created_at.asc(), blogs::id.asc()))
            .select(BlogRow::as_select())
            .load(&mut self.conn)?;
        Ok(rows.into_iter().map(Blog::from).collect())
    }

    fn posts_by(&mut self, login: &str) -> Result<Vec<Post>> {
        let rows: Vec<PostRow> = posts::table
            .filter(posts::author_login.eq(login))
            .order((posts::created_at.asc(), posts::id.asc()))
            .select(PostRow::as_select())
            .load(&mut self.conn)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    fn comments_by(&mut self, login: &str) -> Result<Vec<Comment>> {
        let rows: Vec<model::CommentRow> = comments::table
            .filter(comments::author_login.eq(login))
            .order((comments::created_at.asc(), comments::id.asc()))
            .select(model::CommentRow::as_select())
            .load(&mut self.conn)?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    fn comment_details_by(&mut self, login: &str) -> Result<Vec<CommentRow>> {
        let joined: Vec<CommentDetailRow> = comments::table
            .inner_join(posts::table.inner_join(blogs::table))
            .filter(comments::author_login.eq(login))
            .order((comments::created_at.asc(), comments::id.asc()))
            .select((
                comments::id,
                comments::body,
                comments::created_at,
                posts::id,
                posts::header,
                posts::author_login,
                blogs::id,
                blogs::title,
            ))
            .load(&mut self.conn)?;

        if joined.is_empty() {
            return Ok(Vec::new());
        }

        let mut post_ids: Vec<i32> = joined.iter().map(|row| row.post_id).collect();
        post_ids.sort_unstable();
        post_ids.dedup();

        let counts: HashMap<i32, i64> = comments::table
            .filter(comments::post_id.eq_any(post_ids))
            .group_by(comments::post_id)
            .select((comments::post_id, count_star()))
            .load::<(i32, i64)>(&mut self.conn)?
            .into_iter()
            .collect();

        Ok(joined
            .into_iter()
            .map(|row| {
                let post_comments = counts.get(&row.post_id).copied().unwrap_or(0);
                row.into_report(post_comments)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Generator;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn store() -> SqliteAuthorsStore {
        let mut store = SqliteAuthorsStore::open(":memory:").unwrap();
        store.ensure_schema().unwrap();
        store
    }

    fn user(login: &str) -> NewUser {
        NewUser {
            login: login.into(),
            name: "Test User".into(),
            email: format!("{login}@example.com"),
            created_at: at(0),
        }
    }

    fn seed_graph(store: &mut SqliteAuthorsStore) {
        store.insert_users(&[user("ann"), user("bob")]).unwrap();
        store
            .insert_blogs(&[NewBlog {
                owner_login: "bob".into(),
                title: "Bob's blog".into(),
                description: "About things".into(),
                created_at: at(1),
            }])
            .unwrap();
        store
            .insert_posts(&[
                NewPost {
                    blog_id: 1,
                    author_login: "bob".into(),
                    header: "First".into(),
                    body: "Hello".into(),
                    created_at: at(2),
                },
                NewPost {
                    blog_id: 1,
                    author_login: "ann".into(),
                    header: "Second".into(),
                    body: "Hi".into(),
                    created_at: at(3),
                },
            ])
            .unwrap();
        let comment = |post_id, author: &str, hour| NewComment {
            post_id,
            author_login: author.into(),
            body: format!("comment at {hour}"),
            created_at: at(hour),
        };
        store
            .insert_comments(&[
                comment(1, "ann", 9),
                comment(1, "bob", 5),
                comment(2, "ann", 4),
                comment(1, "ann", 6),
            ])
            .unwrap();
    }

    #[test]
    fn ensure_schema_twice_keeps_rows() {
        let mut store = store();
        seed_graph(&mut store);

        store.ensure_schema().unwrap();

        assert_eq!(
            store.table_names().unwrap(),
            vec!["blogs", "comments", "posts", "users"]
        );
        assert_eq!(store.user_logins().unwrap().len(), 2);
        assert_eq!(store.post_ids().unwrap(), vec![1, 2]);
    }

    #[test]
    fn inserts_report_counts_and_ids_are_listed() {
        let mut store = store();
        let users = Generator::with_seed(1).generate_users(3);

        assert_eq!(store.insert_users(&users).unwrap(), 3);
        assert_eq!(store.insert_users(&[]).unwrap(), 0);

        let mut expected: Vec<String> = users.into_iter().map(|user| user.login).collect();
        expected.sort();
        assert_eq!(store.user_logins().unwrap(), expected);
    }

    #[test]
    fn duplicate_login_rolls_back_the_whole_batch() {
        let mut store = store();
        store.insert_users(&[user("ann")]).unwrap();

        let result = store.insert_users(&[user("cat"), user("ann")]);
        assert!(result.is_err());
        assert_eq!(store.user_logins().unwrap(), vec!["ann"]);
    }

    #[test]
    fn dangling_blog_owner_is_rejected() {
        let mut store = store();
        let result = store.insert_blogs(&[NewBlog {
            owner_login: "ghost".into(),
            title: "t".into(),
            description: "d".into(),
            created_at: at(0),
        }]);
        assert!(result.is_err());
        assert!(store.blog_ids().unwrap().is_empty());
    }

    #[test]
    fn comment_details_join_post_and_blog_in_time_order() {
        let mut store = store();
        seed_graph(&mut store);

        let rows = store.comment_details_by("ann").unwrap();
        let ids: Vec<i32> = rows.iter().map(|row| row.comment_id).collect();
        assert_eq!(ids, vec![3, 4, 1]);

        let first = &rows[0];
        assert_eq!(first.post_id, 2);
        assert_eq!(first.post_header, "Second");
        assert_eq!(first.post_author, "ann");
        assert_eq!(first.blog_title, "Bob's blog");
        assert_eq!(first.post_comments, 1);
        assert_eq!(first.created_at, "2024-03-10 04:00:00");

        // Post 1 has three comments in total, two of them by ann.
        assert_eq!(rows[1].post_comments, 3);
        assert_eq!(rows[2].post_comments, 3);
    }

    #[test]
    fn comment_details_for_unknown_login_are_empty() {
        let mut store = store();
        seed_graph(&mut store);
        assert!(store.comment_details_by("nobody").unwrap().is_empty());
    }

    #[test]
    fn posts_and_comments_by_login() {
        let mut store = store();
        seed_graph(&mut store);

        let posts = store.posts_by("ann").unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].header, "Second");

        let comments = store.comments_by("bob").unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].created_at, "2024-03-10 05:00:00");
    }

    #[test]
    fn blogs_by_owner() {
        let mut store = store();
        seed_graph(&mut store);
        store
            .insert_blogs(&[NewBlog {
                owner_login: "bob".into(),
                title: "Bob's notes".into(),
                description: "Earlier".into(),
                created_at: at(0),
            }])
            .unwrap();

        let blogs = store.blogs_by("bob").unwrap();
        let titles: Vec<&str> = blogs.iter().map(|blog| blog.title.as_str()).collect();
        assert_eq!(titles, vec!["Bob's notes", "Bob's blog"]);
        assert_eq!(blogs[1].id, 1);
        assert_eq!(blogs[1].created_at, "2024-03-10 01:00:00");
        assert!(store.blogs_by("ann").unwrap().is_empty());
    }

    #[test]
    fn equal_timestamps_order_by_id() {
        let mut store = store();
        seed_graph(&mut store);
        let same = at(12);
        let extra: Vec<NewComment> = (0..3)
            .map(|_| NewComment {
                post_id: 2,
                author_login: "bob".into(),
                body: "same time".into(),
                created_at: same,
            })
            .collect();
        store.insert_comments(&extra).unwrap();

        let ids: Vec<i32> = store
            .comments_by("bob")
            .unwrap()
            .into_iter()
            .map(|comment| comment.id)
            .collect();
        assert_eq!(ids, vec![2, 5, 6, 7]);
    }
}
