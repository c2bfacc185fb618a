mod calendar;
mod healthcheck;

use salvo::Router;
use tzfeed_core::constants::API_ROUTE_COMPONENT;

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(calendar::routes())
}
