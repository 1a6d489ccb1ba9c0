// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only snapshots of the content a permission can be requested on.
//!
//! Wiki articles live in categories which carry their permission flags. Forum content forms a
//! shallow tree: posts belong to a thread, and a thread is anchored either in a forum category
//! (a discussion) or on an article (the article's comment thread). Forum categories in turn
//! belong to a section.
//!
//! ```text
//! ForumPost ──► ForumThread ──┬──► ForumCategory ──► ForumSection
//!                             └──► Article ──► (article category)
//! ```
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::IdentityHandle;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Article {
    /// Name of the article category. Articles without one belong to the default category.
    pub category: Option<String>,

    /// Locked articles can still be read, rated and commented on, but not changed.
    pub locked: bool,
}

impl Article {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            locked: false,
        }
    }

    pub fn uncategorised() -> Self {
        Self::default()
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ForumSection {
    pub is_hidden_for_users: bool,
}

impl ForumSection {
    pub fn visible() -> Self {
        Self {
            is_hidden_for_users: false,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_hidden_for_users: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ForumCategory {
    pub section: ForumSection,
}

impl ForumCategory {
    pub fn new(section: ForumSection) -> Self {
        Self { section }
    }
}

/// A forum thread.
///
/// Threads are anchored in exactly one of `category` or `article`. Snapshots violating this
/// (none or both set) are not rejected here, but no visibility rule applies to them and they are
/// denied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ForumThread<ID> {
    pub category: Option<ForumCategory>,
    pub article: Option<Article>,
    pub author: Option<ID>,
    pub is_locked: bool,
}

impl<ID> ForumThread<ID>
where
    ID: IdentityHandle,
{
    /// Discussion thread in a forum category.
    pub fn in_category(category: ForumCategory) -> Self {
        Self {
            category: Some(category),
            article: None,
            author: None,
            is_locked: false,
        }
    }

    /// Comment thread of an article.
    pub fn for_article(article: Article) -> Self {
        Self {
            category: None,
            article: Some(article),
            author: None,
            is_locked: false,
        }
    }

    pub fn authored_by(mut self, author: ID) -> Self {
        self.author = Some(author);
        self
    }

    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ForumPost<ID> {
    pub thread: ForumThread<ID>,
    pub author: Option<ID>,
}

impl<ID> ForumPost<ID>
where
    ID: IdentityHandle,
{
    pub fn new(thread: ForumThread<ID>, author: ID) -> Self {
        Self {
            thread,
            author: Some(author),
        }
    }

    /// Post which does not exist yet, used to ask whether an actor may reply in a thread.
    pub fn draft(thread: ForumThread<ID>) -> Self {
        Self {
            thread,
            author: None,
        }
    }
}

/// Borrowed view on the entity a permission is requested on.
#[derive(Debug, PartialEq, Eq)]
pub enum Subject<'a, ID> {
    Article(&'a Article),
    ForumSection(&'a ForumSection),
    ForumCategory(&'a ForumCategory),
    ForumThread(&'a ForumThread<ID>),
    ForumPost(&'a ForumPost<ID>),
}

// Manual impls, deriving would require `ID: Clone` even though only references are held.
impl<ID> Clone for Subject<'_, ID> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<ID> Copy for Subject<'_, ID> {}

impl<ID> Subject<'_, ID> {
    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Article(_) => SubjectKind::Article,
            Subject::ForumSection(_) => SubjectKind::ForumSection,
            Subject::ForumCategory(_) => SubjectKind::ForumCategory,
            Subject::ForumThread(_) => SubjectKind::ForumThread,
            Subject::ForumPost(_) => SubjectKind::ForumPost,
        }
    }
}

impl<'a, ID> From<&'a Article> for Subject<'a, ID> {
    fn from(article: &'a Article) -> Self {
        Subject::Article(article)
    }
}

impl<'a, ID> From<&'a ForumSection> for Subject<'a, ID> {
    fn from(section: &'a ForumSection) -> Self {
        Subject::ForumSection(section)
    }
}

impl<'a, ID> From<&'a ForumCategory> for Subject<'a, ID> {
    fn from(category: &'a ForumCategory) -> Self {
        Subject::ForumCategory(category)
    }
}

impl<'a, ID> From<&'a ForumThread<ID>> for Subject<'a, ID> {
    fn from(thread: &'a ForumThread<ID>) -> Self {
        Subject::ForumThread(thread)
    }
}

impl<'a, ID> From<&'a ForumPost<ID>> for Subject<'a, ID> {
    fn from(post: &'a ForumPost<ID>) -> Self {
        Subject::ForumPost(post)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    Article,
    ForumSection,
    ForumCategory,
    ForumThread,
    ForumPost,
}

impl Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SubjectKind::Article => "article",
            SubjectKind::ForumSection => "forum section",
            SubjectKind::ForumCategory => "forum category",
            SubjectKind::ForumThread => "forum thread",
            SubjectKind::ForumPost => "forum post",
        };

        write!(f, "{}", s)
    }
}
