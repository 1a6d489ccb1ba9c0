// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::IdentityHandle;

/// Snapshot of a registered user and the role bits relevant for permission checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct User<ID> {
    pub id: ID,

    /// Site administrator, passes every check.
    pub is_superuser: bool,

    /// Moderation staff, passes every check.
    pub is_staff: bool,

    /// Editors are checked against the "users" flags of an article category, everyone else
    /// against the "readers" flags.
    pub is_editor: bool,

    /// Users banned from the forum can still read it but not write to it.
    pub is_forum_active: bool,
}

impl<ID> User<ID>
where
    ID: IdentityHandle,
{
    /// Regular forum-active user without any elevated role.
    pub fn new(id: ID) -> Self {
        Self {
            id,
            is_superuser: false,
            is_staff: false,
            is_editor: false,
            is_forum_active: true,
        }
    }

    pub fn superuser(mut self) -> Self {
        self.is_superuser = true;
        self
    }

    pub fn staff(mut self) -> Self {
        self.is_staff = true;
        self
    }

    pub fn editor(mut self) -> Self {
        self.is_editor = true;
        self
    }

    pub fn forum_inactive(mut self) -> Self {
        self.is_forum_active = false;
        self
    }

    /// Returns `true` if the user bypasses all permission rules.
    pub fn is_privileged(&self) -> bool {
        self.is_superuser || self.is_staff
    }
}

/// Entity requesting permission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Actor<ID> {
    User(User<ID>),
    Anonymous,
}

impl<ID> Actor<ID>
where
    ID: IdentityHandle,
{
    pub fn user(&self) -> Option<&User<ID>> {
        match self {
            Actor::User(user) => Some(user),
            Actor::Anonymous => None,
        }
    }

    pub fn id(&self) -> Option<ID> {
        self.user().map(|user| user.id)
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Actor::Anonymous)
    }

    /// Returns `true` if this actor is the registered user with the given id.
    ///
    /// Content without a recorded author is never owned by anyone, anonymous actors own nothing.
    pub fn is_author_of(&self, author: Option<ID>) -> bool {
        match (self.id(), author) {
            (Some(id), Some(author)) => id == author,
            _ => false,
        }
    }
}

impl<ID> From<User<ID>> for Actor<ID> {
    fn from(user: User<ID>) -> Self {
        Actor::User(user)
    }
}

#[cfg(test)]
mod tests {
    use super::{Actor, User};

    #[test]
    fn role_builders() {
        let user = User::new(1u32);
        assert!(!user.is_privileged());
        assert!(user.is_forum_active);

        assert!(User::new(1u32).staff().is_privileged());
        assert!(User::new(1u32).superuser().is_privileged());
        assert!(!User::new(1u32).editor().is_privileged());
        assert!(!User::new(1u32).forum_inactive().is_forum_active);
    }

    #[test]
    fn authorship() {
        let alice: Actor<u32> = User::new(1).into();
        let bob: Actor<u32> = User::new(2).into();
        let anonymous = Actor::<u32>::Anonymous;

        assert!(alice.is_author_of(Some(1)));
        assert!(!bob.is_author_of(Some(1)));
        assert!(!alice.is_author_of(None));
        assert!(!anonymous.is_author_of(None));
        assert!(!anonymous.is_author_of(Some(1)));
        assert_eq!(anonymous.id(), None);
        assert!(anonymous.is_anonymous());
    }
}
