use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{delete_handler, read_handler, write_handler};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const KV_ITEM: &str = "/{key}";

/// Bind the four verbs on the single key path
///
/// POST and PUT share the write handler: there is no existence check that
/// tells create from update.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            KV_ITEM,
            post(write_handler)
                .put(write_handler)
                .get(read_handler)
                .delete(delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{counting_app, memory_app, send, unreachable_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_read_delete_scenario() {
        let (app, _) = memory_app();

        let (status, body) = send(&app, "POST", "/color", Some(r#"{"value":"blue"}"#)).await;
        assert_eq!((status, body), (StatusCode::OK, json!("OK")));

        let (status, body) = send(&app, "GET", "/color", None).await;
        assert_eq!((status, body), (StatusCode::OK, json!({ "color": "blue" })));

        let (status, body) = send(&app, "DELETE", "/color", None).await;
        assert_eq!((status, body), (StatusCode::OK, json!(1)));

        let (status, body) = send(&app, "GET", "/color", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Key not found: color" }));
    }

    #[tokio::test]
    async fn test_overwrite_returns_latest_value() {
        let (app, _) = memory_app();

        send(&app, "POST", "/color", Some(r#"{"value":"blue"}"#)).await;
        send(&app, "PUT", "/color", Some(r#"{"value":"green"}"#)).await;

        let (status, body) = send(&app, "GET", "/color", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "color": "green" }));
    }

    #[tokio::test]
    async fn test_round_trip_for_several_keys() {
        let (app, _) = memory_app();
        let pairs = [("a", "1"), ("user-42", "{\"nested\":true}"), ("unicode", "ключ"), ("spaces", "x y z")];

        for (key, value) in pairs {
            let body = json!({ "value": value }).to_string();
            let (status, _) = send(&app, "PUT", &format!("/{}", key), Some(&body)).await;
            assert_eq!(status, StatusCode::OK);
        }

        for (key, value) in pairs {
            let (status, body) = send(&app, "GET", &format!("/{}", key), None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body[key], json!(value));
        }
    }

    #[tokio::test]
    async fn test_rejected_write_keeps_prior_value() {
        let (app, _) = memory_app();

        send(&app, "POST", "/color", Some(r#"{"value":"blue"}"#)).await;
        let (status, _) = send(&app, "PUT", "/color", Some(r#"{"other":"red"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, "GET", "/color", None).await;
        assert_eq!(body, json!({ "color": "blue" }));
    }

    #[tokio::test]
    async fn test_unbound_method_is_not_allowed() {
        let (app, _) = memory_app();

        let (status, _) = send(&app, "PATCH", "/color", Some(r#"{"value":"blue"}"#)).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_nested_path_is_not_routed() {
        let (app, _) = memory_app();

        let (status, _) = send(&app, "GET", "/color/shade", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_every_verb_fails_with_unreachable_store() {
        let app = unreachable_app();
        let write = Some(r#"{"value":"blue"}"#);

        for (method, body) in [("POST", write), ("PUT", write), ("GET", None), ("DELETE", None)] {
            let (status, response) = send(&app, method, "/color", body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", method);
            assert!(response["error"].is_string(), "{}", method);
        }
    }

    #[tokio::test]
    async fn test_each_request_issues_exactly_one_store_operation() {
        let (app, store) = counting_app();
        let write = Some(r#"{"value":"blue"}"#);

        let requests = [
            ("POST", "/color", write),
            ("PUT", "/color", write),
            ("GET", "/color", None),
            ("GET", "/missing", None),
            ("DELETE", "/color", None),
            ("DELETE", "/missing", None),
        ];
        for (method, uri, body) in requests {
            store.reset();
            send(&app, method, uri, body).await;
            assert_eq!(store.calls(), 1, "{} {}", method, uri);
        }
    }

    #[tokio::test]
    async fn test_rejected_write_issues_no_store_operation() {
        let (app, store) = counting_app();

        for body in [r#"{"other":"red"}"#, r#"{"value":1}"#, "not json"] {
            let (status, _) = send(&app, "PUT", "/color", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        assert_eq!(store.calls(), 0);
    }
}
