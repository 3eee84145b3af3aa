//! Random test data generation.
//!
//! [`Generator`] produces insert-ready records for every table. Foreign-key
//! fields are always drawn from the caller-supplied parent collections, so
//! a generated batch never references a row that does not exist.
//!
//! Timestamps fall in fixed windows around a reference instant, so posts
//! precede the comments on them:
//!
//! | entity          | window                 |
//! |-----------------|------------------------|
//! | users, blogs    | `[now-7d, now-5d)`     |
//! | posts           | `[now-2d, now)`        |
//! | comments        | `[now, now+1d)`        |
//! | actions         | `[now-5d, now+5d)`     |

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime, SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::entity::{ActionType, NewAction, NewBlog, NewComment, NewPost, NewUser};
use crate::error::{Error, Result};

const DAY: i64 = 24 * 60 * 60;

const USER_WINDOW: (i64, i64) = (-7 * DAY, -5 * DAY);
const POST_WINDOW: (i64, i64) = (-2 * DAY, 0);
const COMMENT_WINDOW: (i64, i64) = (0, DAY);
const ACTION_WINDOW: (i64, i64) = (-5 * DAY, 5 * DAY);

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Anna", "Boris", "Carla", "Chen", "Dmitri", "Elena", "Farah", "Grace",
    "Hiro", "Ines", "Jonas", "Kateryna", "Lars", "Maya", "Nikolai", "Olga", "Pavel", "Priya",
    "Rosa", "Sven", "Tomas", "Uma", "Viktor", "Wen", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anders", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hopper",
    "Ivanova", "Jensen", "Kowalski", "Lovelace", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quinn", "Rossi", "Schmidt", "Turing", "Ueda", "Volkov", "Wagner", "Xu", "Young", "Zhang",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

/// Source of random entity records.
pub struct Generator {
    rng: StdRng,
    now: NaiveDateTime,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from OS entropy, anchored at the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            now: Utc::now().naive_utc().trunc_subsecs(0),
        }
    }

    /// Create a generator with a fixed seed for reproducible output.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now: Utc::now().naive_utc().trunc_subsecs(0),
        }
    }

    /// Anchor timestamp windows at `now` instead of the current time.
    #[must_use]
    pub fn anchored_at(mut self, now: NaiveDateTime) -> Self {
        self.now = now.trunc_subsecs(0);
        self
    }

    /// Reference instant the timestamp windows are relative to.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Generate `n` users with logins unique within the batch.
    pub fn generate_users(&mut self, n: usize) -> Vec<NewUser> {
        self.generate_users_avoiding(n, &HashSet::new())
    }

    /// Generate `n` users whose logins are unique within the batch and
    /// absent from `taken`.
    pub fn generate_users_avoiding(&mut self, n: usize, taken: &HashSet<String>) -> Vec<NewUser> {
        let mut seen = HashSet::with_capacity(n);
        let mut users = Vec::with_capacity(n);

        while users.len() < n {
            let first = pick(&mut self.rng, FIRST_NAMES);
            let last = pick(&mut self.rng, LAST_NAMES);
            let tag: u32 = self.rng.gen_range(0..0x0100_0000);
            let login = format!("{}.{}.{tag:06x}", first.to_lowercase(), last.to_lowercase());

            if taken.contains(&login) || !seen.insert(login.clone()) {
                continue;
            }

            let name = format!("{first} {last}");
            let email = format!("{}_{tag:06x}@example.com", name.to_lowercase().replace(' ', "_"));
            users.push(NewUser {
                login,
                name,
                email,
                created_at: self.timestamp(USER_WINDOW),
            });
        }

        users
    }

    /// Generate `n` blogs owned by logins drawn from `user_logins`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecondition`] when `n > 0` and there are no users.
    pub fn generate_blogs(&mut self, n: usize, user_logins: &[String]) -> Result<Vec<NewBlog>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        require("blogs", "users", user_logins)?;

        Ok((0..n)
            .map(|_| NewBlog {
                owner_login: pick(&mut self.rng, user_logins).clone(),
                title: self.sentence(),
                description: self.paragraph(),
                created_at: self.timestamp(USER_WINDOW),
            })
            .collect())
    }

    /// Generate `n` posts in blogs from `blog_ids`, authored by `user_logins`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecondition`] when `n > 0` and either
    /// collection is empty.
    pub fn generate_posts(
        &mut self,
        n: usize,
        blog_ids: &[i32],
        user_logins: &[String],
    ) -> Result<Vec<NewPost>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        require("posts", "blogs", blog_ids)?;
        require("posts", "users", user_logins)?;

        Ok((0..n)
            .map(|_| NewPost {
                blog_id: *pick(&mut self.rng, blog_ids),
                author_login: pick(&mut self.rng, user_logins).clone(),
                header: self.sentence(),
                body: self.paragraph(),
                created_at: self.timestamp(POST_WINDOW),
            })
            .collect())
    }

    /// Generate `n` comments on posts from `post_ids`, authored by `user_logins`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecondition`] when `n > 0` and either
    /// collection is empty.
    pub fn generate_comments(
        &mut self,
        n: usize,
        post_ids: &[i32],
        user_logins: &[String],
    ) -> Result<Vec<NewComment>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        require("comments", "posts", post_ids)?;
        require("comments", "users", user_logins)?;

        Ok((0..n)
            .map(|_| NewComment {
                post_id: *pick(&mut self.rng, post_ids),
                author_login: pick(&mut self.rng, user_logins).clone(),
                body: self.paragraph(),
                created_at: self.timestamp(COMMENT_WINDOW),
            })
            .collect())
    }

    /// Generate `n` actions performed by logins drawn from `user_logins`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecondition`] when `n > 0` and there are no users.
    pub fn generate_actions(&mut self, n: usize, user_logins: &[String]) -> Result<Vec<NewAction>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        require("actions", "users", user_logins)?;

        Ok((0..n)
            .map(|_| {
                let action_type = *pick(&mut self.rng, &ActionType::ALL);
                NewAction {
                    login: pick(&mut self.rng, user_logins).clone(),
                    action_type,
                    space: action_type.space(),
                    created_at: self.timestamp(ACTION_WINDOW),
                }
            })
            .collect())
    }

    fn timestamp(&mut self, (from, to): (i64, i64)) -> NaiveDateTime {
        self.now + Duration::seconds(self.rng.gen_range(from..to))
    }

    fn sentence(&mut self) -> String {
        let len = self.rng.gen_range(4..=9);
        let words: Vec<&str> = (0..len).map(|_| *pick(&mut self.rng, LOREM)).collect();
        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }

    fn paragraph(&mut self) -> String {
        let len = self.rng.gen_range(2..=5);
        (0..len).map(|_| self.sentence()).collect::<Vec<_>>().join(" ")
    }
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    // Callers check for emptiness first; the word lists are never empty.
    items
        .choose(rng)
        .unwrap_or_else(|| unreachable!("pick from empty collection"))
}

fn require<T>(entity: &str, parent: &str, parents: &[T]) -> Result<()> {
    if parents.is_empty() {
        return Err(Error::InvalidPrecondition(format!(
            "cannot generate {entity} without existing {parent}"
        )));
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
