// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random actors and content for exhaustive permission sweeps.
use rand::Rng;

use crate::action::Action;
use crate::actor::{Actor, User};
use crate::subject::{Article, ForumCategory, ForumPost, ForumSection, ForumThread, Subject};
use crate::test_utils::UserId;

/// Category names drawn for articles, "missing" is never stored.
pub const CATEGORY_NAMES: [&str; 4] = ["open", "closed", "restricted", "missing"];

/// Users are drawn from a small id range so authorship collisions happen often.
const MAX_USER_ID: UserId = 4;

/// Owned counterpart of [`Subject`].
#[derive(Clone, Debug)]
pub enum TestSubject {
    Article(Article),
    ForumSection(ForumSection),
    ForumCategory(ForumCategory),
    ForumThread(ForumThread<UserId>),
    ForumPost(ForumPost<UserId>),
}

impl TestSubject {
    pub fn as_subject(&self) -> Subject<'_, UserId> {
        match self {
            TestSubject::Article(article) => Subject::Article(article),
            TestSubject::ForumSection(section) => Subject::ForumSection(section),
            TestSubject::ForumCategory(category) => Subject::ForumCategory(category),
            TestSubject::ForumThread(thread) => Subject::ForumThread(thread),
            TestSubject::ForumPost(post) => Subject::ForumPost(post),
        }
    }
}

pub fn random_user_id<R: Rng>(rng: &mut R) -> UserId {
    rng.random_range(1..=MAX_USER_ID)
}

pub fn random_actor<R: Rng>(rng: &mut R) -> Actor<UserId> {
    if rng.random_bool(0.2) {
        return Actor::Anonymous;
    }

    Actor::User(User {
        id: random_user_id(rng),
        is_superuser: rng.random_bool(0.1),
        is_staff: rng.random_bool(0.1),
        is_editor: rng.random_bool(0.4),
        is_forum_active: rng.random_bool(0.8),
    })
}

pub fn random_action<R: Rng>(rng: &mut R) -> Action {
    Action::ALL[rng.random_range(0..Action::ALL.len())]
}

pub fn random_article<R: Rng>(rng: &mut R) -> Article {
    let category = if rng.random_bool(0.2) {
        None
    } else {
        let name = CATEGORY_NAMES[rng.random_range(0..CATEGORY_NAMES.len())];
        Some(name.to_string())
    };

    Article {
        category,
        locked: rng.random_bool(0.3),
    }
}

pub fn random_section<R: Rng>(rng: &mut R) -> ForumSection {
    ForumSection {
        is_hidden_for_users: rng.random_bool(0.3),
    }
}

pub fn random_forum_category<R: Rng>(rng: &mut R) -> ForumCategory {
    ForumCategory::new(random_section(rng))
}

/// Mostly well-formed threads, with the occasional one anchored nowhere or in two places.
pub fn random_thread<R: Rng>(rng: &mut R) -> ForumThread<UserId> {
    let (category, article) = match rng.random_range(0..10) {
        0 => (None, None),
        1 => (Some(random_forum_category(rng)), Some(random_article(rng))),
        2..=5 => (None, Some(random_article(rng))),
        _ => (Some(random_forum_category(rng)), None),
    };

    ForumThread {
        category,
        article,
        author: rng.random_bool(0.8).then(|| random_user_id(rng)),
        is_locked: rng.random_bool(0.2),
    }
}

pub fn random_post<R: Rng>(rng: &mut R) -> ForumPost<UserId> {
    ForumPost {
        thread: random_thread(rng),
        author: rng.random_bool(0.8).then(|| random_user_id(rng)),
    }
}

pub fn random_subject<R: Rng>(rng: &mut R) -> TestSubject {
    match rng.random_range(0..5) {
        0 => TestSubject::Article(random_article(rng)),
        1 => TestSubject::ForumSection(random_section(rng)),
        2 => TestSubject::ForumCategory(random_forum_category(rng)),
        3 => TestSubject::ForumThread(random_thread(rng)),
        _ => TestSubject::ForumPost(random_post(rng)),
    }
}
