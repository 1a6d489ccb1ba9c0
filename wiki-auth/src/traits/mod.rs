// SPDX-License-Identifier: MIT OR Apache-2.0

mod category_store;
mod identity;

pub use category_store::CategoryStore;
pub use identity::IdentityHandle;
