// SPDX-License-Identifier: MIT OR Apache-2.0

use std::error::Error;

use thiserror::Error;

use crate::action::Action;
use crate::rules::Rule;
use crate::subject::SubjectKind;

/// Errors which can occur while checking permissions.
///
/// A check simply evaluating to "not allowed" is not an error, only [`Permissions::require`]
/// reports it as [`PermissionError::Denied`].
///
/// [`Permissions::require`]: crate::Permissions::require
#[derive(Debug, Error)]
pub enum PermissionError<E>
where
    E: Error + 'static,
{
    /// The category store failed. This is never treated like a missing category.
    #[error("category store error: {0}")]
    Store(#[source] E),

    #[error("permission check exceeded the maximum delegation depth of {0}")]
    DelegationDepthExceeded(usize),

    #[error("{action} on {subject} denied by rule {rule}")]
    Denied {
        action: Action,
        subject: SubjectKind,
        rule: Rule,
    },
}

impl<E> PermissionError<E>
where
    E: Error + 'static,
{
    /// Returns `true` if the error represents a regular policy decision.
    pub fn is_denied(&self) -> bool {
        matches!(self, PermissionError::Denied { .. })
    }
}
