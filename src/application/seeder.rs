//! Seeding use case.
//!
//! Steps run in dependency order: users, blogs, posts, comments, then
//! actions. Each step reads the parent ids currently in the store, so a run
//! can add blogs to users seeded by an earlier run. Each step commits on
//! its own; when a later step fails the earlier ones stay stored.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::Generator;
use crate::error::Result;
use crate::port::outbound::store::{AuthorsStore, LogsStore};

/// How many rows of each entity to add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub users: usize,
    pub blogs: usize,
    pub posts: usize,
    pub comments: usize,
    pub actions: usize,
}

impl SeedCounts {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Rows inserted by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub blogs: usize,
    pub posts: usize,
    pub comments: usize,
    pub actions: usize,
}

impl SeedSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.users + self.blogs + self.posts + self.comments + self.actions
    }
}

/// Inserts generated rows into the authors and logs stores.
pub struct Seeder {
    generator: Generator,
}

impl Seeder {
    #[must_use]
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }

    /// Seed both stores with `counts` new rows.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidPrecondition`] when a step has
    /// no parents to reference, or a database error from the failing step.
    pub fn seed<A, L>(
        &mut self,
        authors: &mut A,
        logs: &mut L,
        counts: SeedCounts,
    ) -> Result<SeedSummary>
    where
        A: AuthorsStore + ?Sized,
        L: LogsStore + ?Sized,
    {
        let mut summary = SeedSummary::default();
        if counts.is_empty() {
            debug!("Nothing to seed");
            return Ok(summary);
        }

        if counts.users > 0 {
            let taken: HashSet<String> = authors.user_logins()?.into_iter().collect();
            let users = self.generator.generate_users_avoiding(counts.users, &taken);
            summary.users = authors.insert_users(&users)?;
            info!(entity = "users", count = summary.users, "Seeded");
        }

        if counts.blogs > 0 {
            let logins = authors.user_logins()?;
            let blogs = self.generator.generate_blogs(counts.blogs, &logins)?;
            summary.blogs = authors.insert_blogs(&blogs)?;
            info!(entity = "blogs", count = summary.blogs, "Seeded");
        }

        if counts.posts > 0 {
            let blog_ids = authors.blog_ids()?;
            let logins = authors.user_logins()?;
            let posts = self.generator.generate_posts(counts.posts, &blog_ids, &logins)?;
            summary.posts = authors.insert_posts(&posts)?;
            info!(entity = "posts", count = summary.posts, "Seeded");
        }

        if counts.comments > 0 {
            let post_ids = authors.post_ids()?;
            let logins = authors.user_logins()?;
            let comments = self.generator.generate_comments(counts.comments, &post_ids, &logins)?;
            summary.comments = authors.insert_comments(&comments)?;
            info!(entity = "comments", count = summary.comments, "Seeded");
        }

        if counts.actions > 0 {
            let logins = authors.user_logins()?;
            let actions = self.generator.generate_actions(counts.actions, &logins)?;
            summary.actions = logs.insert_actions(&actions)?;
            info!(entity = "actions", count = summary.actions, "Seeded");
        }

        Ok(summary)
    }
}
