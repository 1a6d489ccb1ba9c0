// SPDX-License-Identifier: MIT OR Apache-2.0

//! Permission resolution for wiki articles and forum content.
//!
//! `wiki-auth` decides whether an [`Actor`] may perform an [`Action`] on a [`Subject`]: an
//! article, a forum section, category, thread or post. Decisions are made by an ordered table of
//! rules where the first matching rule wins and everything not matched is denied. The table is
//! documented in the [`rules`] module.
//!
//! Articles are governed by the permission flags of their category. Categories are looked up in
//! a [`CategoryStore`](traits::CategoryStore) provided by the application, categories missing
//! from it get default flags which allow nothing unless configured otherwise in
//! [`PermissionsConfig`]. Forum content delegates to the entity it is attached to: a post is as
//! visible as its thread, a comment thread as its article, a discussion thread as its forum
//! category and a category as its section.
//!
//! All entities are plain snapshots owned by the caller. The engine never changes them and keeps
//! no state between checks.
//!
//! ```
//! use wiki_auth::{Action, Actor, ForumCategory, ForumSection, ForumThread, MemoryCategoryStore};
//! use wiki_auth::{Permissions, User};
//!
//! let permissions = Permissions::new(MemoryCategoryStore::new());
//!
//! let alice: Actor<u32> = User::new(1).into();
//! let category = ForumCategory::new(ForumSection::hidden());
//! let thread = ForumThread::in_category(category).authored_by(1);
//!
//! // The thread's section was hidden, its author can still edit it without seeing it.
//! assert!(!permissions.check(&alice, Action::View, &thread).unwrap());
//! assert!(permissions.check(&alice, Action::Edit, &thread).unwrap());
//! ```
mod action;
mod actor;
mod category;
mod config;
mod engine;
mod error;
#[cfg(feature = "memory")]
mod memory;
pub mod rules;
mod subject;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;

pub use action::{Action, ActionError};
pub use actor::{Actor, User};
pub use category::{
    CategoryConfig, CategoryFlag, CategoryFlags, CategoryLookup, CategoryResolver,
    DEFAULT_CATEGORY_NAME, ReaderFlags, UserFlags,
};
pub use config::{DEFAULT_MAX_DELEGATION_DEPTH, PermissionsConfig};
pub use engine::{Decision, Permissions};
pub use error::PermissionError;
#[cfg(feature = "memory")]
pub use memory::MemoryCategoryStore;
pub use rules::Rule;
pub use subject::{
    Article, ForumCategory, ForumPost, ForumSection, ForumThread, Subject, SubjectKind,
};
