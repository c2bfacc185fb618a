use salvo::http::HeaderValue;
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Serialize;
use tracing::error;

use tzfeed_core::constants::{CALENDAR_CONTENT_TYPE, CALENDAR_ROUTE_COMPONENT};
use tzfeed_ical::ical::{TransformOptions, transform};

use crate::config::get_config_from_depot;
use crate::error::AppError;
use crate::fetch::fetch_feed;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// GET /api/calendar - Fetch the upstream feed, rewrite its timezones,
/// and serve the result as `text/calendar`.
///
/// Query parameters `url`, `tz`, and `override` fall back to the
/// configured defaults.
///
/// ## Errors
/// Returns HTTP 400 if no feed URL is supplied and none is configured
/// Returns HTTP 502 if the upstream fetch fails or returns no content
/// Returns HTTP 500 if configuration is missing from the depot
#[handler]
async fn get_calendar(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get configuration");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let url = req
        .query::<String>("url")
        .or_else(|| settings.feed.source_url.clone());
    let Some(url) = url else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: AppError::MissingSource.to_string(),
        }));
        return;
    };

    let timezone = req
        .query::<String>("tz")
        .unwrap_or_else(|| settings.feed.timezone.clone());
    let override_tzid = req
        .query::<bool>("override")
        .unwrap_or(settings.feed.override_tzid);

    let body = match fetch_feed(&url).await {
        Ok(b) => b,
        Err(e) => {
            error!(error = %e, url = %url, "Upstream fetch failed");
            res.status_code(StatusCode::BAD_GATEWAY);
            res.render(Json(ErrorResponse {
                error: AppError::FetchError(e).to_string(),
            }));
            return;
        }
    };

    let options = TransformOptions::new(timezone, override_tzid);
    let output = transform(&body, &options);

    if let Ok(ct_value) = HeaderValue::from_str(CALENDAR_CONTENT_TYPE) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("Content-Type", ct_value, true);
    }

    res.status_code(StatusCode::OK);
    if let Err(e) = res.write_body(output.into_bytes()) {
        error!("Failed to write response body: {}", e);
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CALENDAR_ROUTE_COMPONENT).get(get_calendar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_shape() {
        let payload = ErrorResponse {
            error: AppError::MissingSource.to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value["error"],
            "No feed URL supplied and no default configured"
        );
    }
}
