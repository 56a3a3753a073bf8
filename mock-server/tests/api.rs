use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, seed, Source, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn default_app_serves_two_hundred_todos() {
    let resp = app().oneshot(get("/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 200);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[199].id, 200);
}

#[tokio::test]
async fn seeded_app_serves_todos_in_order() {
    let resp = app_with(Source::Todos(seed(25)))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    let ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());
}

#[tokio::test]
async fn response_uses_source_field_names() {
    let resp = app_with(Source::Todos(seed(1)))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    let body: serde_json::Value = body_json(resp).await;
    let first = &body[0];
    assert_eq!(first["userId"], 1);
    assert_eq!(first["id"], 1);
    assert!(first["title"].is_string());
    assert!(first["completed"].is_boolean());
}

#[tokio::test]
async fn empty_source_serves_empty_array() {
    let resp = app_with(Source::Todos(Vec::new()))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn failing_source_returns_configured_status() {
    let resp = app_with(Source::Fail(StatusCode::INTERNAL_SERVER_ERROR))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_bytes(resp).await, "simulated failure");
}

#[tokio::test]
async fn garbage_source_returns_raw_body() {
    let resp = app_with(Source::Garbage("<html>nope</html>".to_string()))
        .oneshot(get("/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "<html>nope</html>");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/todos")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
