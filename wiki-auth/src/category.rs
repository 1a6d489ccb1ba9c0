// SPDX-License-Identifier: MIT OR Apache-2.0

//! Article categories and their permission flags.
//!
//! Every article belongs to a category which holds two sets of flags: one for "readers"
//! (registered users who are not editors) and one for "users" (editors, anonymous visitors and
//! everyone else). Categories which were never configured are not stored at all, for them the
//! [`CategoryResolver`] synthesizes a configuration from default flags.
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::action::Action;
use crate::traits::CategoryStore;

/// Name of the category articles belong to when they don't name one.
pub const DEFAULT_CATEGORY_NAME: &str = "_default";

/// Permissions granted to registered users who are not editors.
///
/// Readers have no delete flag of their own, deletion is governed by [`UserFlags::can_delete`]
/// for everyone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderFlags {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_rate: bool,
    pub can_comment: bool,
}

impl ReaderFlags {
    pub const NONE: Self = Self {
        can_view: false,
        can_create: false,
        can_edit: false,
        can_rate: false,
        can_comment: false,
    };

    pub const ALL: Self = Self {
        can_view: true,
        can_create: true,
        can_edit: true,
        can_rate: true,
        can_comment: true,
    };
}

/// Permissions granted to everyone else reaching the category rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UserFlags {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_rate: bool,
    pub can_comment: bool,
    pub can_delete: bool,
}

impl UserFlags {
    pub const NONE: Self = Self {
        can_view: false,
        can_create: false,
        can_edit: false,
        can_rate: false,
        can_comment: false,
        can_delete: false,
    };

    pub const ALL: Self = Self {
        can_view: true,
        can_create: true,
        can_edit: true,
        can_rate: true,
        can_comment: true,
        can_delete: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryFlags {
    pub readers: ReaderFlags,
    pub users: UserFlags,
}

impl CategoryFlags {
    /// Nothing is allowed. Used for categories which were never configured.
    pub const RESTRICTIVE: Self = Self {
        readers: ReaderFlags::NONE,
        users: UserFlags::NONE,
    };

    /// Everything is allowed.
    pub const PERMISSIVE: Self = Self {
        readers: ReaderFlags::ALL,
        users: UserFlags::ALL,
    };

    pub fn get(&self, flag: CategoryFlag) -> bool {
        match flag {
            CategoryFlag::ReadersCanView => self.readers.can_view,
            CategoryFlag::ReadersCanCreate => self.readers.can_create,
            CategoryFlag::ReadersCanEdit => self.readers.can_edit,
            CategoryFlag::ReadersCanRate => self.readers.can_rate,
            CategoryFlag::ReadersCanComment => self.readers.can_comment,
            CategoryFlag::UsersCanView => self.users.can_view,
            CategoryFlag::UsersCanCreate => self.users.can_create,
            CategoryFlag::UsersCanEdit => self.users.can_edit,
            CategoryFlag::UsersCanRate => self.users.can_rate,
            CategoryFlag::UsersCanComment => self.users.can_comment,
            CategoryFlag::UsersCanDelete => self.users.can_delete,
        }
    }
}

impl Default for CategoryFlags {
    fn default() -> Self {
        Self::RESTRICTIVE
    }
}

/// A single permission flag of a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryFlag {
    ReadersCanView,
    ReadersCanCreate,
    ReadersCanEdit,
    ReadersCanRate,
    ReadersCanComment,
    UsersCanView,
    UsersCanCreate,
    UsersCanEdit,
    UsersCanRate,
    UsersCanComment,
    UsersCanDelete,
}

impl CategoryFlag {
    /// Flag consulted when a non-editor performs the action on an article.
    pub fn for_reader(action: Action) -> Self {
        match action {
            Action::View => CategoryFlag::ReadersCanView,
            Action::Create => CategoryFlag::ReadersCanCreate,
            Action::Edit => CategoryFlag::ReadersCanEdit,
            Action::Rate => CategoryFlag::ReadersCanRate,
            Action::Comment | Action::ViewComments => CategoryFlag::ReadersCanComment,
            Action::Delete => CategoryFlag::UsersCanDelete,
        }
    }

    /// Flag consulted for everyone else performing the action on an article.
    pub fn for_user(action: Action) -> Self {
        match action {
            Action::View => CategoryFlag::UsersCanView,
            Action::Create => CategoryFlag::UsersCanCreate,
            Action::Edit => CategoryFlag::UsersCanEdit,
            Action::Rate => CategoryFlag::UsersCanRate,
            Action::Comment | Action::ViewComments => CategoryFlag::UsersCanComment,
            Action::Delete => CategoryFlag::UsersCanDelete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFlag::ReadersCanView => "readers_can_view",
            CategoryFlag::ReadersCanCreate => "readers_can_create",
            CategoryFlag::ReadersCanEdit => "readers_can_edit",
            CategoryFlag::ReadersCanRate => "readers_can_rate",
            CategoryFlag::ReadersCanComment => "readers_can_comment",
            CategoryFlag::UsersCanView => "users_can_view",
            CategoryFlag::UsersCanCreate => "users_can_create",
            CategoryFlag::UsersCanEdit => "users_can_edit",
            CategoryFlag::UsersCanRate => "users_can_rate",
            CategoryFlag::UsersCanComment => "users_can_comment",
            CategoryFlag::UsersCanDelete => "users_can_delete",
        }
    }
}

impl Display for CategoryFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Permission configuration of an article category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct CategoryConfig {
    pub name: String,
    pub flags: CategoryFlags,
}

impl CategoryConfig {
    pub fn new(name: impl Into<String>, flags: CategoryFlags) -> Self {
        Self {
            name: name.into(),
            flags,
        }
    }

    pub fn is_allowed(&self, flag: CategoryFlag) -> bool {
        self.flags.get(flag)
    }
}

/// Outcome of looking a category up in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryLookup {
    /// The category is configured.
    Found(CategoryConfig),

    /// No configuration is stored under this name, default flags apply.
    UseDefault,
}

/// Resolves category names to their configuration, falling back to default flags for
/// categories which were never stored.
#[derive(Clone, Debug)]
pub struct CategoryResolver<S> {
    store: S,
    defaults: CategoryFlags,
}

impl<S> CategoryResolver<S>
where
    S: CategoryStore,
{
    pub fn new(store: S, defaults: CategoryFlags) -> Self {
        Self { store, defaults }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn defaults(&self) -> &CategoryFlags {
        &self.defaults
    }

    pub fn lookup(&self, name: &str) -> Result<CategoryLookup, S::Error> {
        let lookup = match self.store.category(name)? {
            Some(config) => CategoryLookup::Found(config),
            None => CategoryLookup::UseDefault,
        };

        Ok(lookup)
    }

    /// Get the configuration of a category.
    ///
    /// The synthesized default configuration is not written back to the store.
    pub fn resolve(&self, name: &str) -> Result<CategoryConfig, S::Error> {
        match self.lookup(name)? {
            CategoryLookup::Found(config) => Ok(config),
            CategoryLookup::UseDefault => {
                trace!(
                    category = name,
                    "category not configured, using default flags"
                );
                Ok(CategoryConfig::new(name, self.defaults))
            }
        }
    }
}
