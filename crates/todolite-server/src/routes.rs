//! API route definitions.

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;

use crate::{handlers::todos, state::AppState};

/// Build the application router over the given state.
///
/// CORS is wide open: the API is a single-user scaffold meant to be called
/// from a browser front-end on another origin.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/:id",
            put(todos::update_todo).delete(todos::delete_todo),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn full_crud_flow_over_the_router() {
        let app = app(AppState::new());

        // Create.
        let response = app
            .clone()
            .oneshot(json_request("POST", "/todos", r#"{"title":"Buy milk"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["title"], "Buy milk");
        assert_eq!(created["done"], false);
        let id = created["id"].as_u64().unwrap();

        // List.
        let response = app
            .clone()
            .oneshot(Request::get("/todos").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        // Update.
        let response = app
            .clone()
            .oneshot(json_request("PUT", &format!("/todos/{id}"), r#"{"done":true}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["done"], true);

        // Delete.
        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/todos/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let deleted = body_json(response).await;
        assert_eq!(deleted["message"], "Todo deleted");

        // Store is empty again.
        let response = app
            .oneshot(Request::get("/todos").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn put_on_missing_id_returns_404_with_message() {
        let app = app(AppState::new());
        let response = app
            .oneshot(json_request("PUT", "/todos/999", r#"{"done":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Todo not found");
    }

    #[tokio::test]
    async fn delete_on_missing_id_still_reports_success() {
        let app = app(AppState::new());
        let response = app
            .oneshot(
                Request::delete("/todos/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Todo deleted");
    }

    #[tokio::test]
    async fn post_with_empty_title_returns_400() {
        let app = app(AppState::new());
        let response = app
            .oneshot(json_request("POST", "/todos", r#"{"title":"  "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Title must not be empty");
    }
}
