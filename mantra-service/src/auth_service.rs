use axum::{
    Router, middleware,
    routing::{post, put},
};
use mantra_adapters::http::{
    middleware::authenticate,
    routes::{
        access_token, activate, delete_user, forgot_password, login, logout, register,
        reset_password,
    },
};
use mantra_core::{TokenService, UserStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled auth service: every route of the auth surface wired to its
/// stores, with the protected routes behind the access guard.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Build the router.
    ///
    /// Stores implement Clone via internal handles, so each route gets
    /// exactly the state it needs instead of one service-wide blob.
    pub fn new<U, T>(user_store: U, token_service: T, client_url: String) -> Self
    where
        U: UserStore + Clone + 'static,
        T: TokenService + Clone + 'static,
    {
        // Routes behind the access guard. The guard verifies the raw
        // Authorization header and attaches the current user.
        let guarded = Router::new()
            .route("/auth/reset-password/{token}", put(reset_password::<U, T>))
            .with_state((user_store.clone(), token_service.clone()))
            .route("/auth/logout", post(logout))
            .route("/auth/delete", put(delete_user::<U>))
            .with_state(user_store.clone())
            .layer(middleware::from_fn_with_state(
                (user_store.clone(), token_service.clone()),
                authenticate::<U, T>,
            ));

        let router = Router::new()
            .route("/auth/register", post(register::<U, T>))
            .with_state((user_store.clone(), token_service.clone()))
            .route("/auth/validate", post(activate::<U, T>))
            .with_state((user_store.clone(), token_service.clone()))
            .route("/auth/login", post(login::<U, T>))
            .with_state((user_store.clone(), token_service.clone()))
            .route("/auth/access-token", post(access_token::<U, T>))
            .with_state((user_store.clone(), token_service.clone()))
            .route("/auth/forgot-password", post(forgot_password::<U, T>))
            .with_state((user_store, token_service, client_url))
            .merge(guarded);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Run the service on the given listener until the server exits.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, self.with_trace_layer().router).await
    }
}
