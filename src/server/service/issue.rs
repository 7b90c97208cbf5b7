//! Issue service.
//!
//! Creation rules, the status workflow, assignment and the name enrichment the API
//! returns with every issue. Status changes and assignments fan out notifications
//! through [`NotificationService`].

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::issue::{CreateIssueDto, IssueStatus, UpdateIssueDto},
    server::{
        data::{client::ClientRepository, issue::IssueRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::policy,
        model::{
            issue::{
                allowed_transitions, is_valid_status_transition, CreateIssueParam, Issue,
                IssueFilter, IssueWithNames, UpdateIssueParam,
            },
            page::Page,
            user::User,
        },
        service::notification::NotificationService,
        util::validate,
    },
};

const TITLE_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 10_000;

pub struct IssueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an issue reported by `actor`.
    ///
    /// The client must be visible to the actor, so CLIENT users can only report
    /// issues for their own organization. An initial assignee may only be given by
    /// someone allowed to assign issues for that client.
    ///
    /// # Returns
    /// - `Ok(IssueWithNames)` - The created issue
    /// - `Err(AppError::NotFound)` - Client missing or not visible
    /// - `Err(AppError::BadRequest)` - Invalid field or non-staff assignee
    /// - `Err(AuthError::AccessDenied)` - Actor may not assign issues for the client
    pub async fn create(&self, actor: &User, dto: CreateIssueDto) -> Result<IssueWithNames, AppError> {
        let mut param = CreateIssueParam::from_dto(dto, actor.id);
        param.title = validate::text("title", &param.title, 1, TITLE_MAX)?;
        param.description = validate::text("description", &param.description, 0, DESCRIPTION_MAX)?;

        let client = match ClientRepository::new(self.db).find_by_id(param.client_id).await? {
            Some(client) if policy::can_view_client(actor, &client) => client,
            _ => {
                return Err(AppError::NotFound(format!(
                    "Client {} not found",
                    param.client_id
                )))
            }
        };

        if let Some(assignee_id) = param.assignee_id {
            if !policy::can_assign_issue(actor, &client) {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "You cannot assign issues for this client".to_string(),
                )
                .into());
            }
            self.check_assignee(assignee_id).await?;
        }

        let issue = IssueRepository::new(self.db).create(param).await?;

        tracing::info!(
            "User {} reported issue {} for client {}",
            actor.id,
            issue.id,
            issue.client_id
        );

        if issue.assignee_id.is_some() {
            NotificationService::new(self.db)
                .notify_assigned(&issue, actor)
                .await?;
        }

        self.with_names(issue).await
    }

    /// Gets the issues `actor` may see, newest first.
    pub async fn get_paginated(
        &self,
        actor: &User,
        filter: IssueFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<IssueWithNames>, AppError> {
        let issues = IssueRepository::new(self.db)
            .get_paginated(policy::issue_scope(actor), filter, page, per_page)
            .await?;

        let names = self.names_for(&issues.items).await?;

        Ok(issues.map(|issue| names.attach(issue)))
    }

    pub async fn get(&self, id: i32) -> Result<IssueWithNames, AppError> {
        let issue = self.find(id).await?;

        self.with_names(issue).await
    }

    /// Applies a partial update of title, description, priority and due date.
    pub async fn update(&self, id: i32, dto: UpdateIssueDto) -> Result<IssueWithNames, AppError> {
        let mut param = UpdateIssueParam::from(dto);
        if let Some(title) = param.title.take() {
            param.title = Some(validate::text("title", &title, 1, TITLE_MAX)?);
        }
        if let Some(description) = param.description.take() {
            param.description = Some(validate::text(
                "description",
                &description,
                0,
                DESCRIPTION_MAX,
            )?);
        }

        let issue = IssueRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))?;

        self.with_names(issue).await
    }

    /// Moves an issue to `status` following the workflow table.
    ///
    /// Setting the current status again is accepted and changes nothing.
    ///
    /// # Returns
    /// - `Ok(IssueWithNames)` - The issue after the change
    /// - `Err(AppError::BadRequest)` - The workflow does not allow the transition
    pub async fn update_status(
        &self,
        actor: &User,
        id: i32,
        status: IssueStatus,
    ) -> Result<IssueWithNames, AppError> {
        let issue = self.find(id).await?;
        let from = issue.status;

        if from == status {
            return self.with_names(issue).await;
        }

        if !is_valid_status_transition(from, status) {
            let allowed: Vec<&str> = allowed_transitions(from).iter().map(|s| s.as_str()).collect();
            return Err(AppError::BadRequest(format!(
                "Cannot move an issue from {} to {} (allowed: {})",
                from.as_str(),
                status.as_str(),
                allowed.join(", ")
            )));
        }

        let issue = IssueRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| not_found(id))?;

        NotificationService::new(self.db)
            .notify_status_changed(&issue, from, actor)
            .await?;

        self.with_names(issue).await
    }

    /// Sets or clears the assignee. Only staff users can be assigned.
    ///
    /// Reassigning the current assignee changes nothing and sends no notification.
    pub async fn update_assignee(
        &self,
        actor: &User,
        id: i32,
        assignee_id: Option<i32>,
    ) -> Result<IssueWithNames, AppError> {
        let issue = self.find(id).await?;

        if issue.assignee_id == assignee_id {
            return self.with_names(issue).await;
        }

        if let Some(assignee_id) = assignee_id {
            self.check_assignee(assignee_id).await?;
        }

        let issue = IssueRepository::new(self.db)
            .update_assignee(id, assignee_id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if issue.assignee_id.is_some() {
            NotificationService::new(self.db)
                .notify_assigned(&issue, actor)
                .await?;
        }

        self.with_names(issue).await
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        if !IssueRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("User {} deleted issue {}", actor.id, id);

        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Issue, AppError> {
        IssueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn check_assignee(&self, assignee_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(assignee_id).await? {
            Some(user) if policy::is_staff(&user) => Ok(()),
            Some(_) => Err(AppError::BadRequest(format!(
                "User {} cannot be assigned to issues",
                assignee_id
            ))),
            None => Err(AppError::BadRequest(format!(
                "User {} does not exist",
                assignee_id
            ))),
        }
    }

    async fn with_names(&self, issue: Issue) -> Result<IssueWithNames, AppError> {
        let names = self.names_for(std::slice::from_ref(&issue)).await?;

        Ok(names.attach(issue))
    }

    async fn names_for(&self, issues: &[Issue]) -> Result<IssueNames, AppError> {
        let client_ids: Vec<i32> = issues.iter().map(|i| i.client_id).collect();
        let user_ids: Vec<i32> = issues
            .iter()
            .flat_map(|i| [Some(i.reporter_id), i.assignee_id])
            .flatten()
            .collect();

        Ok(IssueNames {
            clients: ClientRepository::new(self.db)
                .get_names_by_ids(&client_ids)
                .await?,
            users: UserRepository::new(self.db)
                .get_names_by_ids(&user_ids)
                .await?,
        })
    }
}

/// Client and user display names looked up for a batch of issues.
struct IssueNames {
    clients: HashMap<i32, String>,
    users: HashMap<i32, String>,
}

impl IssueNames {
    fn attach(&self, issue: Issue) -> IssueWithNames {
        IssueWithNames {
            client_name: self
                .clients
                .get(&issue.client_id)
                .cloned()
                .unwrap_or_default(),
            reporter_name: self
                .users
                .get(&issue.reporter_id)
                .cloned()
                .unwrap_or_default(),
            assignee_name: issue.assignee_id.and_then(|id| self.users.get(&id).cloned()),
            issue,
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Issue {} not found", id))
}
