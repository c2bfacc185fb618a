use salvo::{Router, handler};

/// Liveness probe for the tzfeed proxy. Answers without touching the
/// upstream feed, so it only reports that the server itself is up.
#[handler]
async fn hello() -> &'static str {
    "tzfeed OK"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(hello)
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use salvo::test::{ResponseExt, TestClient};

    #[test_log::test(tokio::test)]
    async fn healthcheck_identifies_the_proxy() {
        let service = salvo::Router::new().push(super::routes());

        let mut content = TestClient::get("http://127.0.0.1:5800/healthcheck")
            .send(service)
            .await;

        assert_eq!(content.status_code, Some(StatusCode::OK));
        assert_eq!(content.take_string().await.unwrap(), "tzfeed OK");
    }
}
