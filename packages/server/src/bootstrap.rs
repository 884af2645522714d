//! Dependency wiring.

use std::sync::Arc;

use agora_shared::time::{Clock, SystemClock};

use crate::{
    domain::{ConnectionRegistry, UserRepository},
    infrastructure::connection_registry::WebSocketConnectionRegistry,
    ui::Server,
    usecase::{
        ConnectionLifecycleHandler, FindUserUseCase, ForgotPasswordUseCase, GetPresenceUseCase,
        LoginUseCase, MessageRouter, PresenceBroadcaster, RegisterUserUseCase,
    },
};

/// Builds a server around the given user repository.
///
/// Dependencies are initialized in order:
/// 1. ConnectionRegistry
/// 2. PresenceBroadcaster / MessageRouter
/// 3. UseCases
/// 4. Server
pub fn build_server(repository: Arc<dyn UserRepository>) -> Server {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 1. Create ConnectionRegistry (WebSocket implementation)
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(WebSocketConnectionRegistry::new());

    // 2. Presence and relay share the registry
    let broadcaster = Arc::new(PresenceBroadcaster::new(registry.clone()));
    let router = Arc::new(MessageRouter::new(registry.clone()));

    // 3. Create UseCases
    let lifecycle = Arc::new(ConnectionLifecycleHandler::new(
        repository.clone(),
        registry.clone(),
        broadcaster.clone(),
        router,
        clock.clone(),
    ));
    let register_user_usecase = Arc::new(RegisterUserUseCase::new(repository.clone()));
    let login_usecase = Arc::new(LoginUseCase::new(repository.clone()));
    let forgot_password_usecase = Arc::new(ForgotPasswordUseCase::new(repository.clone()));
    let find_user_usecase = Arc::new(FindUserUseCase::new(repository));
    let get_presence_usecase = Arc::new(GetPresenceUseCase::new(broadcaster, registry));

    // 4. Create the server
    Server::new(
        lifecycle,
        register_user_usecase,
        login_usecase,
        forgot_password_usecase,
        find_user_usecase,
        get_presence_usecase,
        clock,
    )
}
