// SPDX-License-Identifier: MIT OR Apache-2.0

//! The ordered permission rule table.
//!
//! Rules are tried top to bottom and the first one matching `(actor, action, subject)` decides.
//! A rule either allows, denies, defers to a flag of the article's category or delegates to a
//! permission check on a related entity. Whatever no rule catches is denied.
//!
//! ```text
//! privileged-override           superuser or staff   any action              allow
//! anonymous-read-only           anonymous            not view/view-comments  deny
//! locked-article                any                  change locked article   deny
//! reader-category-flag          non-editor           any action on article   readers_* flag
//! user-category-flag            any                  any action on article   users_* flag
//! hidden-section                any                  view hidden section     deny
//! visible-section               any                  view section            allow
//! category-section              any                  view forum category     view its section
//! inactive-thread-author        forum-inactive user  not view on thread      deny
//! comment-thread-visibility     any                  view comment thread     view its article
//! discussion-thread-visibility  any                  view discussion thread  view its category
//! thread-creation               any                  create thread           view its category
//! thread-author-edit            thread author        edit thread             allow
//! thread-author-delete          thread author        delete thread           allow
//! inactive-post-author          forum-inactive user  not view on post        deny
//! locked-thread                 any                  create post, locked     deny
//! article-comment               any                  create comment post     comment on article
//! thread-reply                  any                  create post             view the thread
//! post-visibility               any                  view post               view the thread
//! post-author-edit              post author          edit post               allow
//! default-deny                  any                  anything else           deny
//! ```
//!
//! Each line is named like the [`Rule`] reported for it. Readers have no delete flag of their
//! own, deleting an article as a non-editor consults `users_can_delete`.
//!
//! This module only evaluates a single step. Category lookups and delegation are carried out by
//! [`Permissions`](crate::Permissions) which re-enters the table from the top for every delegated
//! check, so the first rules apply at every depth.
use std::fmt::Display;

use crate::action::Action;
use crate::actor::{Actor, User};
use crate::category::CategoryFlag;
use crate::subject::{Article, ForumCategory, ForumPost, ForumSection, ForumThread, Subject};
use crate::traits::IdentityHandle;

/// Names the rule which produced a permission decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Superusers and staff may do anything.
    PrivilegedOverride,

    /// Anonymous visitors may only read.
    AnonymousReadOnly,

    /// Locked articles can not be created, edited or deleted.
    LockedArticle,

    /// Non-editors are governed by the category's reader flags.
    ReaderCategoryFlag,

    /// Everyone else is governed by the category's user flags.
    UserCategoryFlag,

    HiddenSection,

    VisibleSection,

    /// Forum categories are as visible as their section.
    CategorySection,

    /// Users banned from the forum can't change threads.
    InactiveThreadAuthor,

    /// Article comment threads are as visible as their article.
    CommentThreadVisibility,

    /// Discussion threads are as visible as their forum category.
    DiscussionThreadVisibility,

    /// Threads can be started in every visible forum category.
    ThreadCreation,

    ThreadAuthorEdit,

    ThreadAuthorDelete,

    /// Users banned from the forum can't write posts.
    InactivePostAuthor,

    /// Nobody replies in locked threads.
    LockedThread,

    /// Posting in a comment thread requires permission to comment on the article.
    ArticleComment,

    /// Posting requires the thread to be visible.
    ThreadReply,

    /// Posts are as visible as their thread.
    PostVisibility,

    PostAuthorEdit,

    /// Nothing else matched.
    DefaultDeny,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::PrivilegedOverride => "privileged-override",
            Rule::AnonymousReadOnly => "anonymous-read-only",
            Rule::LockedArticle => "locked-article",
            Rule::ReaderCategoryFlag => "reader-category-flag",
            Rule::UserCategoryFlag => "user-category-flag",
            Rule::HiddenSection => "hidden-section",
            Rule::VisibleSection => "visible-section",
            Rule::CategorySection => "category-section",
            Rule::InactiveThreadAuthor => "inactive-thread-author",
            Rule::CommentThreadVisibility => "comment-thread-visibility",
            Rule::DiscussionThreadVisibility => "discussion-thread-visibility",
            Rule::ThreadCreation => "thread-creation",
            Rule::ThreadAuthorEdit => "thread-author-edit",
            Rule::ThreadAuthorDelete => "thread-author-delete",
            Rule::InactivePostAuthor => "inactive-post-author",
            Rule::LockedThread => "locked-thread",
            Rule::ArticleComment => "article-comment",
            Rule::ThreadReply => "thread-reply",
            Rule::PostVisibility => "post-visibility",
            Rule::PostAuthorEdit => "post-author-edit",
            Rule::DefaultDeny => "default-deny",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of evaluating the rule table once.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step<'a, ID> {
    Allow(Rule),

    Deny(Rule),

    /// Decided by a flag of the named article category, `None` being the default category.
    Category {
        rule: Rule,
        category: Option<&'a str>,
        flag: CategoryFlag,
    },

    /// Decided by checking another action or subject for the same actor.
    Delegate {
        rule: Rule,
        action: Action,
        subject: Subject<'a, ID>,
    },
}

impl<ID> Step<'_, ID> {
    pub(crate) fn rule(&self) -> Rule {
        match self {
            Step::Allow(rule) | Step::Deny(rule) => *rule,
            Step::Category { rule, .. } | Step::Delegate { rule, .. } => *rule,
        }
    }
}

pub(crate) fn evaluate<'a, ID>(
    actor: &Actor<ID>,
    action: Action,
    subject: Subject<'a, ID>,
) -> Step<'a, ID>
where
    ID: IdentityHandle,
{
    match actor {
        Actor::User(user) if user.is_privileged() => return Step::Allow(Rule::PrivilegedOverride),
        Actor::Anonymous if !action.is_read_only() => return Step::Deny(Rule::AnonymousReadOnly),
        _ => (),
    }

    // All remaining rules are specific to one kind of subject.
    match subject {
        Subject::Article(article) => article_rule(actor, action, article),
        Subject::ForumSection(section) => section_rule(action, section),
        Subject::ForumCategory(category) => category_rule(action, category),
        Subject::ForumThread(thread) => thread_rule(actor, action, thread),
        Subject::ForumPost(post) => post_rule(actor, action, post),
    }
}

fn article_rule<'a, ID>(actor: &Actor<ID>, action: Action, article: &'a Article) -> Step<'a, ID>
where
    ID: IdentityHandle,
{
    if article.locked && !action.is_permitted_on_locked() {
        return Step::Deny(Rule::LockedArticle);
    }

    let category = article.category.as_deref();

    match actor {
        Actor::User(User {
            is_editor: false, ..
        }) => Step::Category {
            rule: Rule::ReaderCategoryFlag,
            category,
            flag: CategoryFlag::for_reader(action),
        },
        _ => Step::Category {
            rule: Rule::UserCategoryFlag,
            category,
            flag: CategoryFlag::for_user(action),
        },
    }
}

fn section_rule<'a, ID>(action: Action, section: &'a ForumSection) -> Step<'a, ID> {
    match action {
        Action::View if section.is_hidden_for_users => Step::Deny(Rule::HiddenSection),
        Action::View => Step::Allow(Rule::VisibleSection),
        _ => Step::Deny(Rule::DefaultDeny),
    }
}

fn category_rule<'a, ID>(action: Action, category: &'a ForumCategory) -> Step<'a, ID> {
    match action {
        Action::View => Step::Delegate {
            rule: Rule::CategorySection,
            action: Action::View,
            subject: Subject::ForumSection(&category.section),
        },
        _ => Step::Deny(Rule::DefaultDeny),
    }
}

fn thread_rule<'a, ID>(
    actor: &Actor<ID>,
    action: Action,
    thread: &'a ForumThread<ID>,
) -> Step<'a, ID>
where
    ID: IdentityHandle,
{
    match (actor, action) {
        (Actor::User(user), action) if !user.is_forum_active && action != Action::View => {
            Step::Deny(Rule::InactiveThreadAuthor)
        }
        (_, Action::View) => match (&thread.category, &thread.article) {
            (None, Some(article)) => Step::Delegate {
                rule: Rule::CommentThreadVisibility,
                action: Action::View,
                subject: Subject::Article(article),
            },
            (Some(category), None) => Step::Delegate {
                rule: Rule::DiscussionThreadVisibility,
                action: Action::View,
                subject: Subject::ForumCategory(category),
            },
            // Threads anchored nowhere or in two places at once.
            _ => Step::Deny(Rule::DefaultDeny),
        },
        (_, Action::Create) => match &thread.category {
            Some(category) => Step::Delegate {
                rule: Rule::ThreadCreation,
                action: Action::View,
                subject: Subject::ForumCategory(category),
            },
            None => Step::Deny(Rule::DefaultDeny),
        },
        (_, Action::Edit) if actor.is_author_of(thread.author) => {
            Step::Allow(Rule::ThreadAuthorEdit)
        }
        (_, Action::Delete) if actor.is_author_of(thread.author) => {
            Step::Allow(Rule::ThreadAuthorDelete)
        }
        _ => Step::Deny(Rule::DefaultDeny),
    }
}

fn post_rule<'a, ID>(actor: &Actor<ID>, action: Action, post: &'a ForumPost<ID>) -> Step<'a, ID>
where
    ID: IdentityHandle,
{
    let thread = &post.thread;

    match (actor, action) {
        (Actor::User(user), action) if !user.is_forum_active && action != Action::View => {
            Step::Deny(Rule::InactivePostAuthor)
        }
        (_, Action::Create) if thread.is_locked => Step::Deny(Rule::LockedThread),
        (_, Action::Create) => match &thread.article {
            Some(article) => Step::Delegate {
                rule: Rule::ArticleComment,
                action: Action::Comment,
                subject: Subject::Article(article),
            },
            None => Step::Delegate {
                rule: Rule::ThreadReply,
                action: Action::View,
                subject: Subject::ForumThread(thread),
            },
        },
        (_, Action::View) => Step::Delegate {
            rule: Rule::PostVisibility,
            action: Action::View,
            subject: Subject::ForumThread(thread),
        },
        (_, Action::Edit) if actor.is_author_of(post.author) => Step::Allow(Rule::PostAuthorEdit),
        _ => Step::Deny(Rule::DefaultDeny),
    }
}
