//! Route-level authorization guard.
//!
//! `AuthGuard` resolves the session user and checks a list of [`Permission`]s against
//! the rules in [`policy`](super::policy). Resource permissions load the resource and
//! its client first. A resource the user cannot see is reported as 404, an action
//! the user may not take on a visible resource as 403.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{
        client::ClientRepository, comment::CommentRepository, domain_name::DomainNameRepository,
        file::FileRepository, issue::IssueRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::{policy, session::AuthSession},
    model::{client::Client, issue::Issue, user::User},
};

pub enum Permission {
    /// Role ADMIN.
    Admin,
    /// Role ADMIN, ACCOUNT_MANAGER or DEVELOPER.
    Staff,
    CreateClient,
    ViewClient(i32),
    ManageClient(i32),
    ViewIssue(i32),
    EditIssue(i32),
    AssignIssue(i32),
    ChangeIssueStatus(i32),
    DeleteIssue(i32),
    EditComment(i32),
    DeleteComment(i32),
    DeleteFile(i32),
    /// Manage the client owning this domain name.
    ManageDomain(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - The session user, who holds every permission
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - The session user was deleted (401)
    /// - `Err(AppError::NotFound)` - A referenced resource is missing or invisible (404)
    /// - `Err(AuthError::AccessDenied)` - A permission check failed (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            self.check(&user, permission).await?;
        }

        Ok(user)
    }

    async fn check(&self, user: &User, permission: &Permission) -> Result<(), AppError> {
        match *permission {
            Permission::Admin => allow(user, policy::is_admin(user), "Admin access required"),
            Permission::Staff => allow(user, policy::is_staff(user), "Staff access required"),
            Permission::CreateClient => allow(
                user,
                policy::can_create_client(user),
                "Only admins and account managers can create clients",
            ),
            Permission::ViewClient(id) => {
                self.visible_client(user, id).await?;
                Ok(())
            }
            Permission::ManageClient(id) => {
                let client = self.visible_client(user, id).await?;
                allow(
                    user,
                    policy::can_manage_client(user, &client),
                    "You do not manage this client",
                )
            }
            Permission::ViewIssue(id) => {
                self.visible_issue(user, id).await?;
                Ok(())
            }
            Permission::EditIssue(id) => {
                let (issue, client) = self.visible_issue(user, id).await?;
                allow(
                    user,
                    policy::can_edit_issue(user, &issue, &client),
                    "You cannot edit this issue",
                )
            }
            Permission::AssignIssue(id) => {
                let (_, client) = self.visible_issue(user, id).await?;
                allow(
                    user,
                    policy::can_assign_issue(user, &client),
                    "You cannot assign this issue",
                )
            }
            Permission::ChangeIssueStatus(id) => {
                let (issue, client) = self.visible_issue(user, id).await?;
                allow(
                    user,
                    policy::can_change_status(user, &issue, &client),
                    "You cannot change the status of this issue",
                )
            }
            Permission::DeleteIssue(id) => {
                let (_, client) = self.visible_issue(user, id).await?;
                allow(
                    user,
                    policy::can_delete_issue(user, &client),
                    "You cannot delete this issue",
                )
            }
            Permission::EditComment(id) => {
                let comment = CommentRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Comment", id))?;
                self.visible_issue(user, comment.issue_id).await?;
                allow(
                    user,
                    policy::can_edit_comment(user, &comment),
                    "Only the author can edit a comment",
                )
            }
            Permission::DeleteComment(id) => {
                let comment = CommentRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Comment", id))?;
                let (_, client) = self.visible_issue(user, comment.issue_id).await?;
                allow(
                    user,
                    policy::can_delete_comment(user, &comment, &client),
                    "You cannot delete this comment",
                )
            }
            Permission::DeleteFile(id) => {
                let file = FileRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("File", id))?;
                let (_, client) = self.visible_issue(user, file.issue_id).await?;
                allow(
                    user,
                    policy::can_delete_file(user, &file, &client),
                    "You cannot delete this file",
                )
            }
            Permission::ManageDomain(id) => {
                let domain = DomainNameRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Domain name", id))?;
                let client = self
                    .visible_client(user, domain.client_id)
                    .await
                    .map_err(|e| match e {
                        AppError::NotFound(_) => not_found("Domain name", id),
                        other => other,
                    })?;
                allow(
                    user,
                    policy::can_manage_client(user, &client),
                    "You do not manage this client",
                )
            }
        }
    }

    async fn visible_client(&self, user: &User, id: i32) -> Result<Client, AppError> {
        match ClientRepository::new(self.db).find_by_id(id).await? {
            Some(client) if policy::can_view_client(user, &client) => Ok(client),
            _ => Err(not_found("Client", id)),
        }
    }

    async fn visible_issue(&self, user: &User, id: i32) -> Result<(Issue, Client), AppError> {
        let Some(issue) = IssueRepository::new(self.db).find_by_id(id).await? else {
            return Err(not_found("Issue", id));
        };

        let Some(client) = ClientRepository::new(self.db)
            .find_by_id(issue.client_id)
            .await?
        else {
            return Err(not_found("Issue", id));
        };

        if !policy::can_view_issue(user, &issue, &client) {
            return Err(not_found("Issue", id));
        }

        Ok((issue, client))
    }
}

fn allow(user: &User, allowed: bool, reason: &str) -> Result<(), AppError> {
    if allowed {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(user.id, reason.to_string()).into())
    }
}

fn not_found(kind: &str, id: i32) -> AppError {
    AppError::NotFound(format!("{} {} not found", kind, id))
}
