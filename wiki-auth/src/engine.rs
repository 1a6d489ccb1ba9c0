// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::actor::Actor;
use crate::category::CategoryResolver;
use crate::config::PermissionsConfig;
use crate::error::PermissionError;
use crate::rules::{self, Rule, Step};
use crate::subject::Subject;
use crate::traits::{CategoryStore, IdentityHandle};

/// Outcome of a permission check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,

    /// Rule which decided the check.
    pub rule: Rule,

    /// Number of delegations followed before the deciding rule matched.
    pub depth: usize,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }
}

/// Permission engine deciding whether an actor may perform an action on a subject.
///
/// The engine holds no state besides its configuration and the category store, all checks only
/// read from it. It can be shared between threads as long as the store can.
///
/// ```
/// use wiki_auth::{Action, Actor, Article, CategoryConfig, CategoryFlags, MemoryCategoryStore};
/// use wiki_auth::{Permissions, User};
///
/// let mut store = MemoryCategoryStore::new();
/// store.insert(CategoryConfig::new("scp", CategoryFlags::PERMISSIVE));
/// let permissions = Permissions::new(store);
///
/// let reader: Actor<u32> = User::new(1).into();
/// let article = Article::new("scp");
/// assert!(permissions.check(&reader, Action::Edit, &article).unwrap());
///
/// // Categories without configuration allow nothing.
/// let draft = Article::new("drafts");
/// assert!(!permissions.check(&reader, Action::View, &draft).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Permissions<S> {
    resolver: CategoryResolver<S>,
    config: PermissionsConfig,
}

impl<S> Permissions<S>
where
    S: CategoryStore,
    S::Error: 'static,
{
    pub fn new(store: S) -> Self {
        Self::with_config(store, PermissionsConfig::default())
    }

    pub fn with_config(store: S, config: PermissionsConfig) -> Self {
        Self {
            resolver: CategoryResolver::new(store, config.category_defaults),
            config,
        }
    }

    pub fn config(&self) -> &PermissionsConfig {
        &self.config
    }

    pub fn resolver(&self) -> &CategoryResolver<S> {
        &self.resolver
    }

    /// Returns `true` if the actor may perform the action on the subject.
    pub fn check<'a, ID>(
        &self,
        actor: &Actor<ID>,
        action: Action,
        subject: impl Into<Subject<'a, ID>>,
    ) -> Result<bool, PermissionError<S::Error>>
    where
        ID: IdentityHandle + 'a,
    {
        let decision = self.decide(actor, action, subject)?;
        Ok(decision.is_allowed())
    }

    /// Check a permission and report which rule decided it.
    pub fn decide<'a, ID>(
        &self,
        actor: &Actor<ID>,
        action: Action,
        subject: impl Into<Subject<'a, ID>>,
    ) -> Result<Decision, PermissionError<S::Error>>
    where
        ID: IdentityHandle + 'a,
    {
        let subject = subject.into();
        let kind = subject.kind();
        let decision = self.decide_at(actor, action, subject, 0)?;

        debug!(
            actor = ?actor.id(),
            %action,
            subject = %kind,
            allowed = decision.allowed,
            rule = %decision.rule,
            depth = decision.depth,
            "permission decided"
        );

        Ok(decision)
    }

    /// Like [`Permissions::check`] but fails with [`PermissionError::Denied`] when the action is
    /// not allowed.
    pub fn require<'a, ID>(
        &self,
        actor: &Actor<ID>,
        action: Action,
        subject: impl Into<Subject<'a, ID>>,
    ) -> Result<(), PermissionError<S::Error>>
    where
        ID: IdentityHandle + 'a,
    {
        let subject = subject.into();
        let decision = self.decide(actor, action, subject)?;

        if decision.allowed {
            Ok(())
        } else {
            Err(PermissionError::Denied {
                action,
                subject: subject.kind(),
                rule: decision.rule,
            })
        }
    }

    fn decide_at<ID>(
        &self,
        actor: &Actor<ID>,
        action: Action,
        subject: Subject<'_, ID>,
        depth: usize,
    ) -> Result<Decision, PermissionError<S::Error>>
    where
        ID: IdentityHandle,
    {
        let limit = self.config.max_delegation_depth;
        if depth > limit {
            warn!(limit, "permission delegation too deep");
            return Err(PermissionError::DelegationDepthExceeded(limit));
        }

        let step = rules::evaluate(actor, action, subject);
        let rule = step.rule();
        trace!(%rule, %action, subject = %subject.kind(), depth, "rule matched");

        let allowed = match step {
            Step::Allow(_) => true,
            Step::Deny(_) => false,
            Step::Category { category, flag, .. } => {
                let name = category.unwrap_or(self.config.default_category.as_str());
                let config = self.resolver.resolve(name).map_err(|err| {
                    warn!(category = name, %err, "category lookup failed");
                    PermissionError::Store(err)
                })?;
                trace!(category = name, %flag, value = config.is_allowed(flag), "category flag");
                config.is_allowed(flag)
            }
            Step::Delegate {
                action, subject, ..
            } => return self.decide_at(actor, action, subject, depth + 1),
        };

        Ok(Decision {
            allowed,
            rule,
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use crate::action::Action;
    use crate::category::{CategoryConfig, CategoryFlags, ReaderFlags, UserFlags};
    use crate::config::PermissionsConfig;
    use crate::error::PermissionError;
    use crate::memory::MemoryCategoryStore;
    use crate::rules::Rule;
    use crate::subject::{Article, ForumCategory, ForumPost, ForumSection, ForumThread};
    use crate::test_utils::{FailingStore, UserId, anonymous, editor, reader, setup_logging};

    use super::{Decision, Permissions};

    fn store() -> MemoryCategoryStore {
        [
            CategoryConfig::new("open", CategoryFlags::PERMISSIVE),
            CategoryConfig::new("closed", CategoryFlags::RESTRICTIVE),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn decision_names_deciding_rule() {
        setup_logging();

        let permissions = Permissions::new(store());
        let thread: ForumThread<UserId> =
            ForumThread::in_category(ForumCategory::new(ForumSection::visible()));
        let post = ForumPost::new(thread, 7);

        // Post → thread → forum category → section.
        let decision = permissions.decide(&anonymous(), Action::View, &post);
        assert_eq!(
            decision.unwrap(),
            Decision {
                allowed: true,
                rule: Rule::VisibleSection,
                depth: 3,
            }
        );

        let article = Article::new("closed");
        let decision = permissions.decide(&reader(1), Action::View, &article);
        assert_eq!(
            decision.unwrap(),
            Decision {
                allowed: false,
                rule: Rule::ReaderCategoryFlag,
                depth: 0,
            }
        );
    }

    #[test]
    fn uncategorised_articles_use_default_category() {
        let mut store = store();
        store.insert(CategoryConfig::new(
            "_default",
            CategoryFlags {
                readers: ReaderFlags {
                    can_view: true,
                    ..ReaderFlags::NONE
                },
                users: UserFlags::NONE,
            },
        ));
        let permissions = Permissions::new(store);
        let article = Article::uncategorised();

        let reader_view = permissions.check(&reader(1), Action::View, &article);
        let editor_view = permissions.check(&editor(1), Action::View, &article);
        assert!(reader_view.unwrap());
        assert!(!editor_view.unwrap());
    }

    #[test]
    fn configured_defaults_and_default_category() {
        let config = PermissionsConfig {
            default_category: "main".to_string(),
            category_defaults: CategoryFlags::PERMISSIVE,
            ..PermissionsConfig::default()
        };
        let mut store = store();
        store.insert(CategoryConfig::new("main", CategoryFlags::RESTRICTIVE));
        let permissions = Permissions::with_config(store, config);

        assert_eq!(permissions.config().default_category, "main");

        // "main" is stored and restrictive, unknown categories get the permissive defaults.
        let uncategorised = Article::uncategorised();
        let elsewhere = Article::new("elsewhere");
        let main_view = permissions.check(&reader(1), Action::View, &uncategorised);
        let elsewhere_view = permissions.check(&reader(1), Action::View, &elsewhere);
        assert!(!main_view.unwrap());
        assert!(elsewhere_view.unwrap());
        assert_eq!(permissions.resolver().store().len(), 3);
    }

    #[test]
    fn store_failures_abort() {
        let permissions = Permissions::new(FailingStore);
        let article = Article::new("open");

        let result = permissions.check(&reader(1), Action::View, &article);
        assert!(matches!(result, Err(PermissionError::Store(_))));

        // Rules deciding before any lookup are not affected by the store.
        let result = permissions.check(&anonymous(), Action::Edit, &article);
        assert!(!result.unwrap());

        // Failures surface through delegations as well.
        let thread: ForumThread<UserId> = ForumThread::for_article(article);
        let post = ForumPost::draft(thread);
        let result = permissions.check(&reader(1), Action::Create, &post);
        assert!(matches!(result, Err(PermissionError::Store(_))));
    }

    #[test]
    fn delegation_depth_guard() {
        let config = PermissionsConfig {
            max_delegation_depth: 2,
            ..PermissionsConfig::default()
        };
        let permissions = Permissions::with_config(store(), config);
        let thread: ForumThread<UserId> =
            ForumThread::in_category(ForumCategory::new(ForumSection::visible()));
        let post = ForumPost::draft(thread.clone());

        let result = permissions.check(&reader(1), Action::View, &thread);
        assert!(result.unwrap());

        let result = permissions.check(&reader(1), Action::View, &post);
        assert!(matches!(result, Err(PermissionError::DelegationDepthExceeded(2))));
    }

    #[test]
    fn zero_depth_disables_delegation() {
        let config = PermissionsConfig {
            max_delegation_depth: 0,
            ..PermissionsConfig::default()
        };
        let permissions = Permissions::with_config(store(), config);
        let category = ForumCategory::new(ForumSection::visible());

        // Rules deciding directly are unaffected.
        let article = Article::new("open");
        let result = permissions.check(&reader(1), Action::Edit, &article);
        assert!(result.unwrap());
        let result = permissions.check(&reader(1), Action::View, &category.section);
        assert!(result.unwrap());

        let result = permissions.check(&reader(1), Action::View, &category);
        assert!(matches!(result, Err(PermissionError::DelegationDepthExceeded(0))));
    }

    #[test]
    fn require_reports_denials() {
        let permissions = Permissions::new(store());
        let article = Article::new("closed");

        let open = Article::new("open");
        let result = permissions.require(&reader(1), Action::View, &open);
        assert!(result.is_ok());

        let err = permissions
            .require(&reader(1), Action::Comment, &article)
            .unwrap_err();
        assert!(err.is_denied());
        assert_eq!(
            err.to_string(),
            "comment on article denied by rule reader-category-flag"
        );
    }

    #[test]
    fn shared_between_threads() {
        let permissions = Arc::new(Permissions::new(store()));
        let handles: Vec<_> = (0..4)
            .map(|id| {
                let permissions = permissions.clone();
                thread::spawn(move || {
                    let article = Article::new("open");
                    let decision = permissions.decide(&reader(id), Action::Rate, &article);
                    decision.unwrap().is_allowed()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
