// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a registered user.
///
/// Forum threads and posts record their author by this handle and ownership rules compare it
/// against the acting user, so it needs to be cheap to copy and comparable.
pub trait IdentityHandle: Copy + Debug + Eq + Hash {}

impl IdentityHandle for u32 {}
impl IdentityHandle for u64 {}
impl IdentityHandle for i32 {}
impl IdentityHandle for i64 {}
impl IdentityHandle for usize {}
