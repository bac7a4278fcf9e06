//! Axum wiring for operation guards
//!
//! Each protected route gets its own `route_layer` carrying the
//! [`OperationGuard`] for its operation. On success the [`AuthContext`] is
//! inserted into request extensions for [`crate::CurrentUser`].

use axum::{
    extract::{Request, State},
    handler::Handler,
    http::Method,
    middleware::{from_fn_with_state, Next},
    response::Response,
    routing::{delete, get, post, put, MethodRouter},
    Router,
};

use crate::error::AuthError;
use crate::operation::Operation;
use crate::pipeline::{AuthPipeline, OperationGuard};

/// Middleware body: run the guard, then hand off to the handler.
pub async fn require_auth(
    State(guard): State<OperationGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let ctx = guard.authorize(req.headers()).await?;
    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Put `route` behind `guard`.
pub fn protect<S>(guard: OperationGuard, route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(from_fn_with_state(guard, require_auth))
}

/// Mount handlers at the method and path of their [`Operation`].
pub trait ProtectedRouterExt<S> {
    fn protected<H, T>(self, auth: &AuthPipeline, operation: Operation, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static;
}

impl<S> ProtectedRouterExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn protected<H, T>(self, auth: &AuthPipeline, operation: Operation, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let guard = auth.guard(operation);
        let (method, path) = operation.route();

        tracing::debug!(
            operation = %operation,
            %method,
            path,
            stages = ?guard.stages(),
            "Mounting protected route"
        );

        self.route(path, protect(guard, method_router(&method, handler)))
    }
}

// The catalog only uses these four verbs.
fn method_router<H, T, S>(method: &Method, handler: H) -> MethodRouter<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    match *method {
        Method::POST => post(handler),
        Method::PUT => put(handler),
        Method::DELETE => delete(handler),
        _ => get(handler),
    }
}
