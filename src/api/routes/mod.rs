pub mod analytics;
pub mod matches;
pub mod players;
pub mod tournaments;
pub mod wall;

#[cfg(test)]
pub(crate) mod testing {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::state::AppState;
    use crate::api::USER_HEADER;
    use crate::storage::StorageConfig;
    use crate::store::DataStore;

    pub fn test_state(dir: &std::path::Path) -> AppState {
        AppState::new(DataStore::new(StorageConfig::new(dir.to_path_buf())))
    }

    pub async fn get_json(app: axum::Router, uri: &str, user: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(USER_HEADER, user)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        into_json(resp).await
    }

    pub async fn post_json(
        app: axum::Router,
        uri: &str,
        user: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(USER_HEADER, user)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        into_json(resp).await
    }

    pub async fn delete_req(app: axum::Router, uri: &str, user: &str) -> StatusCode {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .header(USER_HEADER, user)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        resp.status()
    }

    async fn into_json(resp: axum::response::Response) -> (StatusCode, Value) {
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }
}
