//! Route table and OpenAPI document.
//!
//! Routes are registered through `utoipa_axum`'s `OpenApiRouter`, so every handler's
//! `#[utoipa::path]` annotation ends up in the generated document served by Swagger UI
//! at `/api/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        client::{self, CLIENT_TAG},
        comment::{self, COMMENT_TAG},
        domain_name::{self, DOMAIN_NAME_TAG},
        file::{self, FILE_TAG},
        issue::{self, ISSUE_TAG},
        notification::{self, NOTIFICATION_TAG},
        user::{self, USER_TAG},
    },
    middleware::gate::require_approved_user,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Issue Tracker API"),
    tags(
        (name = AUTH_TAG, description = "Login, logout and the current user"),
        (name = USER_TAG, description = "User approval, roles and client links"),
        (name = CLIENT_TAG, description = "Client organisations"),
        (name = ISSUE_TAG, description = "Issues and their workflow"),
        (name = COMMENT_TAG, description = "Comments on issues"),
        (name = FILE_TAG, description = "Issue attachments"),
        (name = NOTIFICATION_TAG, description = "Per-user notification feed"),
        (name = DOMAIN_NAME_TAG, description = "Domain names registered for clients"),
    )
)]
struct ApiDoc;

/// Builds the application router with all API routes and the Swagger UI.
///
/// Auth and notification routes only need a session; the rest sit behind
/// `require_approved_user`, so pending accounts cannot reach any data.
pub fn router(state: AppState) -> Router {
    let open = OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::get_unread_count))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(notification::mark_all_notifications_read))
        .routes(routes!(notification::delete_notification));

    let protected = OpenApiRouter::new()
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_assignable_users))
        .routes(routes!(user::update_user_role))
        .routes(routes!(user::update_user_client))
        .routes(routes!(client::create_client, client::get_clients))
        .routes(routes!(
            client::get_client,
            client::update_client,
            client::delete_client
        ))
        .routes(routes!(
            domain_name::get_domain_names,
            domain_name::create_domain_name
        ))
        .routes(routes!(
            domain_name::update_domain_name,
            domain_name::delete_domain_name
        ))
        .routes(routes!(issue::create_issue, issue::get_issues))
        .routes(routes!(
            issue::get_issue,
            issue::update_issue,
            issue::delete_issue
        ))
        .routes(routes!(issue::update_issue_status))
        .routes(routes!(issue::update_issue_assignee))
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(comment::update_comment, comment::delete_comment))
        .routes(routes!(file::get_files, file::create_file))
        .routes(routes!(file::delete_file))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_approved_user,
        ));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(open)
        .merge(protected)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
}
