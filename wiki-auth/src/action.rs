// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown action '{0}'")]
    Unknown(String),
}

/// Operations an actor can request on a subject.
///
/// The set is closed. Callers receiving action names from requests should parse them with
/// [`Action::from_str`] and reject unknown names before asking for a permission decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Action {
    /// Read an article or forum content.
    View,

    /// Read the comment thread attached to an article.
    ViewComments,

    /// Create an article, a forum thread or a forum post.
    Create,

    /// Change existing content.
    Edit,

    /// Vote on an article.
    Rate,

    /// Post a comment on an article.
    Comment,

    /// Remove content.
    Delete,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::View,
        Action::ViewComments,
        Action::Create,
        Action::Edit,
        Action::Rate,
        Action::Comment,
        Action::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::ViewComments => "view-comments",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Rate => "rate",
            Action::Comment => "comment",
            Action::Delete => "delete",
        }
    }

    /// Returns `true` for the read-only actions which are open to anonymous visitors.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::View | Action::ViewComments)
    }

    /// Returns `true` for actions which remain available on locked articles.
    pub fn is_permitted_on_locked(&self) -> bool {
        matches!(
            self,
            Action::View | Action::Comment | Action::ViewComments | Action::Rate
        )
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| ActionError::Unknown(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::{Action, ActionError};

    #[rstest]
    #[case("view", Action::View)]
    #[case("view-comments", Action::ViewComments)]
    #[case("create", Action::Create)]
    #[case("edit", Action::Edit)]
    #[case("rate", Action::Rate)]
    #[case("comment", Action::Comment)]
    #[case("delete", Action::Delete)]
    fn parse_action_names(#[case] name: &str, #[case] expected: Action) {
        assert_eq!(Action::from_str(name), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[rstest]
    #[case("")]
    #[case("View")]
    #[case("view_comments")]
    #[case("destroy")]
    fn reject_unknown_actions(#[case] name: &str) {
        assert_eq!(
            Action::from_str(name),
            Err(ActionError::Unknown(name.to_string()))
        );
    }

    #[test]
    fn locked_and_read_only_sets() {
        let read_only: Vec<_> = Action::ALL
            .into_iter()
            .filter(Action::is_read_only)
            .collect();
        assert_eq!(read_only, vec![Action::View, Action::ViewComments]);

        // Locking an article blocks changes to it, but not reading, commenting or voting.
        let blocked: Vec<_> = Action::ALL
            .into_iter()
            .filter(|action| !action.is_permitted_on_locked())
            .collect();
        assert_eq!(blocked, vec![Action::Create, Action::Edit, Action::Delete]);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Action::ViewComments).unwrap();
        assert_eq!(json, "\"view-comments\"");

        let action: Action = serde_json::from_str("\"rate\"").unwrap();
        assert_eq!(action, Action::Rate);
    }
}
