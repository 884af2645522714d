//! HTTP endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    infrastructure::dto::http::{
        AuthResponse, ChatPageQuery, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest,
        PresenceDebugDto, PresentUserDto, RegisterRequest,
    },
    ui::{page, state::AppState},
    usecase::{LoginError, RegisterError, RegisterUserInput},
};
use agora_shared::time::to_jst_rfc3339;

const RECOVERY_MESSAGE: &str = "If your email exists, a recovery link has been sent.";

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(page::render_index())
}

/// Chat page. Redirects to the landing page unless `id` names a registered user.
pub async fn chat_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChatPageQuery>,
) -> Response {
    let Some(id) = query.id else {
        return Redirect::to("/").into_response();
    };

    match state.find_user_usecase.execute(id).await {
        Ok(Some(user)) => {
            Html(page::render_chat(user.id.as_str(), user.name.as_str())).into_response()
        }
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::error!("Failed to load chat page user: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `POST /register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    let input = RegisterUserInput {
        name: request.name,
        email: request.email,
        password: request.password,
        avatar: request.avatar,
    };

    match state.register_user_usecase.execute(input).await {
        Ok(_) => (
            StatusCode::OK,
            Json(AuthResponse::ok("Registration successful!")),
        ),
        Err(RegisterError::MissingEmail) => (
            StatusCode::OK,
            Json(AuthResponse::failed("Email is required.")),
        ),
        Err(RegisterError::MissingName) => (
            StatusCode::OK,
            Json(AuthResponse::failed("Name is required.")),
        ),
        Err(RegisterError::AlreadyRegistered(_)) => (
            StatusCode::OK,
            Json(AuthResponse::failed("This email is already in use.")),
        ),
        Err(RegisterError::Repository(e)) => {
            tracing::error!("Registration failed: {}", e);
            internal_error()
        }
    }
}

/// `POST /login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    match state
        .login_usecase
        .execute(request.email, &request.password)
        .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(AuthResponse::ok("Login successful.").with_name(user.name.into_string())),
        ),
        Err(LoginError::UserNotFound) => {
            (StatusCode::OK, Json(AuthResponse::failed("User not found.")))
        }
        Err(LoginError::WrongCredential) => (
            StatusCode::OK,
            Json(AuthResponse::failed("Incorrect password.")),
        ),
        Err(LoginError::Repository(e)) => {
            tracing::error!("Login failed: {}", e);
            internal_error()
        }
    }
}

/// `POST /forgot-password`
///
/// The response never reveals whether the identifier exists.
pub async fn forgot_password(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> (StatusCode, Json<ForgotPasswordResponse>) {
    let status = match state.forgot_password_usecase.execute(request.email).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Password recovery failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ForgotPasswordResponse {
            message: RECOVERY_MESSAGE.to_string(),
        }),
    )
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint to get the current presence (for testing purposes)
pub async fn debug_presence(State(state): State<Arc<AppState>>) -> Json<PresenceDebugDto> {
    let view = state.get_presence_usecase.execute().await;

    // Domain Model から DTO への変換
    let users = view
        .users
        .into_iter()
        .map(|(id, entry)| PresentUserDto {
            id: id.into_string(),
            name: entry.name.into_string(),
            avatar: entry.avatar.into_string(),
        })
        .collect();

    Json(PresenceDebugDto {
        generated_at: to_jst_rfc3339(state.clock.now_millis()),
        open_connections: view.open_connections,
        users,
    })
}

fn internal_error() -> (StatusCode, Json<AuthResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AuthResponse::failed("Internal server error.")),
    )
}
