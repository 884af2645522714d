//! Server execution logic.

use std::sync::Arc;

use agora_shared::time::Clock;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    ConnectionLifecycleHandler, FindUserUseCase, ForgotPasswordUseCase, GetPresenceUseCase,
    LoginUseCase, RegisterUserUseCase,
};

use super::{
    handler::{
        chat_page, debug_presence, forgot_password, health_check, index, login, register,
        websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Realtime chat server
///
/// # Example
///
/// ```ignore
/// let server = agora_server::bootstrap::build_server(repository);
/// server.run("127.0.0.1".to_string(), 10000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `lifecycle` - Realtime connection lifecycle handler
    /// * `register_user_usecase` - UseCase for registration
    /// * `login_usecase` - UseCase for login
    /// * `forgot_password_usecase` - UseCase for password recovery
    /// * `find_user_usecase` - UseCase for resolving the chat page user
    /// * `get_presence_usecase` - UseCase for the presence diagnostics
    /// * `clock` - Time source for diagnostics
    pub fn new(
        lifecycle: Arc<ConnectionLifecycleHandler>,
        register_user_usecase: Arc<RegisterUserUseCase>,
        login_usecase: Arc<LoginUseCase>,
        forgot_password_usecase: Arc<ForgotPasswordUseCase>,
        find_user_usecase: Arc<FindUserUseCase>,
        get_presence_usecase: Arc<GetPresenceUseCase>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: Arc::new(AppState {
                lifecycle,
                register_user_usecase,
                login_usecase,
                forgot_password_usecase,
                find_user_usecase,
                get_presence_usecase,
                clock,
            }),
        }
    }

    /// Build the router without binding a listener
    pub fn into_router(self) -> Router {
        Router::new()
            // Pages
            .route("/", get(index))
            .route("/chat", get(chat_page))
            // Account API
            .route("/register", post(register))
            .route("/login", post(login))
            .route("/forgot-password", post(forgot_password))
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // Diagnostics
            .route("/api/health", get(health_check))
            .route("/debug/presence", get(debug_presence))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state)
    }

    /// Run the chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 10000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on http://{}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
