// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.

pub mod random;

use thiserror::Error;

use crate::actor::{Actor, User};
use crate::category::{CategoryConfig, CategoryFlags, ReaderFlags, UserFlags};
use crate::memory::MemoryCategoryStore;
use crate::traits::CategoryStore;

pub type UserId = u32;

pub fn anonymous() -> Actor<UserId> {
    Actor::Anonymous
}

/// Registered user without any role, checked against the reader flags.
pub fn reader(id: UserId) -> Actor<UserId> {
    User::new(id).into()
}

pub fn editor(id: UserId) -> Actor<UserId> {
    User::new(id).editor().into()
}

pub fn staff(id: UserId) -> Actor<UserId> {
    User::new(id).staff().into()
}

pub fn superuser(id: UserId) -> Actor<UserId> {
    User::new(id).superuser().into()
}

/// Reader who was banned from the forum.
pub fn inactive(id: UserId) -> Actor<UserId> {
    User::new(id).forum_inactive().into()
}

/// Category in which readers can only view, while editors can do everything.
pub fn restricted_category(name: &str) -> CategoryConfig {
    CategoryConfig::new(
        name,
        CategoryFlags {
            readers: ReaderFlags {
                can_view: true,
                ..ReaderFlags::NONE
            },
            users: UserFlags::ALL,
        },
    )
}

/// Store with an "open" (everything allowed), "closed" (nothing allowed) and "restricted"
/// category.
pub fn test_store() -> MemoryCategoryStore {
    [
        CategoryConfig::new("open", CategoryFlags::PERMISSIVE),
        CategoryConfig::new("closed", CategoryFlags::RESTRICTIVE),
        restricted_category("restricted"),
    ]
    .into_iter()
    .collect()
}

#[derive(Debug, Error)]
#[error("category store unavailable")]
pub struct StoreUnavailable;

/// Store failing every lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingStore;

impl CategoryStore for FailingStore {
    type Error = StoreUnavailable;

    fn category(&self, _name: &str) -> Result<Option<CategoryConfig>, Self::Error> {
        Err(StoreUnavailable)
    }
}

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}
