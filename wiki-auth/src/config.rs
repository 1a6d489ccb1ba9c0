// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration of the permission engine.
//!
//! None of these settings change the rule table, they only define the data the rules are
//! evaluated with when the store has nothing to say.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::category::{CategoryFlags, DEFAULT_CATEGORY_NAME};

/// Default upper bound for nested delegations of one permission check.
///
/// The deepest chain of the content model (post, thread, forum category, section) needs three.
pub const DEFAULT_MAX_DELEGATION_DEPTH: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PermissionsConfig {
    /// Maximum number of delegations before a check is aborted with an error.
    ///
    /// A value of `0` turns off delegation entirely. Checks decided by the first matching rule
    /// still succeed, while viewing a forum category, thread or post fails with
    /// [`DelegationDepthExceeded`](crate::PermissionError::DelegationDepthExceeded).
    pub max_delegation_depth: usize,

    /// Category used for articles which don't name one.
    pub default_category: String,

    /// Flags of categories without a stored configuration.
    pub category_defaults: CategoryFlags,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            max_delegation_depth: DEFAULT_MAX_DELEGATION_DEPTH,
            default_category: DEFAULT_CATEGORY_NAME.to_string(),
            category_defaults: CategoryFlags::RESTRICTIVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::category::{CategoryFlags, ReaderFlags, UserFlags};

    use super::{DEFAULT_MAX_DELEGATION_DEPTH, PermissionsConfig};

    #[test]
    fn defaults_are_restrictive() {
        let config = PermissionsConfig::default();
        assert_eq!(config.max_delegation_depth, DEFAULT_MAX_DELEGATION_DEPTH);
        assert_eq!(config.default_category, "_default");
        assert_eq!(config.category_defaults, CategoryFlags::RESTRICTIVE);
    }

    #[test]
    fn partial_config_from_json() {
        let config: PermissionsConfig = serde_json::from_str(
            r#"{
                "default_category": "main",
                "category_defaults": {
                    "readers": {
                        "can_view": true,
                        "can_create": false,
                        "can_edit": false,
                        "can_rate": false,
                        "can_comment": false
                    },
                    "users": {
                        "can_view": true,
                        "can_create": false,
                        "can_edit": false,
                        "can_rate": true,
                        "can_comment": true,
                        "can_delete": false
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.max_delegation_depth, DEFAULT_MAX_DELEGATION_DEPTH);
        assert_eq!(config.default_category, "main");
        assert_eq!(
            config.category_defaults,
            CategoryFlags {
                readers: ReaderFlags {
                    can_view: true,
                    ..ReaderFlags::NONE
                },
                users: UserFlags {
                    can_view: true,
                    can_rate: true,
                    can_comment: true,
                    ..UserFlags::NONE
                },
            }
        );

        let empty: PermissionsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PermissionsConfig::default());
    }

    #[test]
    fn single_flag_override() {
        let json = r#"{"category_defaults": {"readers": {"can_view": true}}}"#;
        let config: PermissionsConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.category_defaults,
            CategoryFlags {
                readers: ReaderFlags {
                    can_view: true,
                    ..ReaderFlags::NONE
                },
                users: UserFlags::NONE,
            }
        );
        assert_eq!(config.default_category, "_default");

        let json = r#"{"category_defaults": {"users": {"can_delete": true}}}"#;
        let config: PermissionsConfig = serde_json::from_str(json).unwrap();
        assert!(config.category_defaults.users.can_delete);
        assert_eq!(config.category_defaults.readers, ReaderFlags::NONE);
    }
}
