//! Role-based authorization rules.
//!
//! Pure functions over the acting user and the resource in question. They never touch
//! the database: callers load the issue, client, comment or file first and pass them
//! in. `AuthGuard` evaluates these rules for route-level permissions, and services use
//! them directly for decisions that depend on request data.
//!
//! The list scopes returned by [`issue_scope`] and [`client_scope`] select exactly the
//! rows [`can_view_issue`] and [`can_view_client`] accept.

use crate::{
    model::user::Role,
    server::model::{
        client::{Client, ClientScope},
        comment::Comment,
        file::File,
        issue::{Issue, IssueScope},
        user::User,
    },
};

pub fn is_admin(user: &User) -> bool {
    user.role == Role::Admin
}

pub fn is_account_manager(user: &User) -> bool {
    user.role == Role::AccountManager
}

/// Admins, account managers and developers.
pub fn is_staff(user: &User) -> bool {
    matches!(
        user.role,
        Role::Admin | Role::AccountManager | Role::Developer
    )
}

/// Whether the user is the account manager responsible for `client`.
pub fn manages_client(user: &User, client: &Client) -> bool {
    is_account_manager(user) && client.account_manager_id == Some(user.id)
}

pub fn can_view_client(user: &User, client: &Client) -> bool {
    match user.role {
        Role::Admin | Role::AccountManager | Role::Developer => true,
        Role::Client => user.client_id == Some(client.id),
        Role::User => false,
    }
}

pub fn can_manage_client(user: &User, client: &Client) -> bool {
    is_admin(user) || manages_client(user, client)
}

pub fn can_create_client(user: &User) -> bool {
    is_admin(user) || is_account_manager(user)
}

/// `client` must be the issue's client.
pub fn can_view_issue(user: &User, issue: &Issue, client: &Client) -> bool {
    if issue.reporter_id == user.id {
        return true;
    }

    match user.role {
        Role::Admin => true,
        Role::AccountManager => manages_client(user, client),
        Role::Developer => issue.assignee_id == Some(user.id),
        Role::Client => user.client_id == Some(issue.client_id),
        Role::User => false,
    }
}

/// Title, description, priority and due date.
pub fn can_edit_issue(user: &User, issue: &Issue, client: &Client) -> bool {
    is_admin(user) || manages_client(user, client) || issue.reporter_id == user.id
}

pub fn can_assign_issue(user: &User, client: &Client) -> bool {
    is_admin(user) || manages_client(user, client)
}

pub fn can_change_status(user: &User, issue: &Issue, client: &Client) -> bool {
    is_admin(user) || manages_client(user, client) || issue.assignee_id == Some(user.id)
}

pub fn can_delete_issue(user: &User, client: &Client) -> bool {
    is_admin(user) || manages_client(user, client)
}

pub fn can_edit_comment(user: &User, comment: &Comment) -> bool {
    comment.author_id == user.id
}

/// `client` must be the client of the comment's issue.
pub fn can_delete_comment(user: &User, comment: &Comment, client: &Client) -> bool {
    comment.author_id == user.id || is_admin(user) || manages_client(user, client)
}

/// `client` must be the client of the file's issue.
pub fn can_delete_file(user: &User, file: &File, client: &Client) -> bool {
    file.uploader_id == user.id || is_admin(user) || manages_client(user, client)
}

/// Issues the user may list.
pub fn issue_scope(user: &User) -> IssueScope {
    match user.role {
        Role::Admin => IssueScope::All,
        Role::AccountManager => IssueScope::ManagedBy(user.id),
        Role::Developer => IssueScope::AssignedOrReported(user.id),
        Role::Client => match user.client_id {
            Some(client_id) => IssueScope::ClientOrReported {
                client_id,
                user_id: user.id,
            },
            None => IssueScope::ReportedBy(user.id),
        },
        Role::User => IssueScope::ReportedBy(user.id),
    }
}

/// Clients the user may list.
pub fn client_scope(user: &User) -> ClientScope {
    match user.role {
        Role::Admin | Role::AccountManager | Role::Developer => ClientScope::All,
        Role::Client => match user.client_id {
            Some(client_id) => ClientScope::Only(client_id),
            None => ClientScope::Nothing,
        },
        Role::User => ClientScope::Nothing,
    }
}
