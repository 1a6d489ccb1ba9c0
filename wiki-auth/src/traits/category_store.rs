// SPDX-License-Identifier: MIT OR Apache-2.0

use std::error::Error;
use std::sync::Arc;

use crate::category::CategoryConfig;

/// Read-only interface to the persisted article category configurations.
///
/// Implementations look categories up by their exact name. A category which was never configured
/// is not an error and must be reported as `Ok(None)`, the resolver then falls back to default
/// flags. Errors are reserved for genuine failures of the underlying storage (connection lost,
/// corrupt row, etc.) and abort any permission check depending on the lookup.
pub trait CategoryStore {
    type Error: Error;

    /// Get the stored configuration of the category with the given name.
    fn category(&self, name: &str) -> Result<Option<CategoryConfig>, Self::Error>;
}

impl<T> CategoryStore for &T
where
    T: CategoryStore + ?Sized,
{
    type Error = T::Error;

    fn category(&self, name: &str) -> Result<Option<CategoryConfig>, Self::Error> {
        (**self).category(name)
    }
}

impl<T> CategoryStore for Box<T>
where
    T: CategoryStore + ?Sized,
{
    type Error = T::Error;

    fn category(&self, name: &str) -> Result<Option<CategoryConfig>, Self::Error> {
        (**self).category(name)
    }
}

impl<T> CategoryStore for Arc<T>
where
    T: CategoryStore + ?Sized,
{
    type Error = T::Error;

    fn category(&self, name: &str) -> Result<Option<CategoryConfig>, Self::Error> {
        (**self).category(name)
    }
}
