//! Pass-through tests against a live mock of the external API.
//!
//! # Design
//! Starts `mock-external` on a random port, points the router's client at
//! it, then drives the `/external/*` routes in-process. Validates that the
//! handlers forward upstream bodies untouched and map upstream failures to
//! the right status codes.

use std::net::SocketAddr;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use todo_server::Config;
use tower::ServiceExt;

/// Boot the mock external API on a random port and return its address.
fn start_mock() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_external::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn app_against(addr: SocketAddr) -> axum::Router {
    todo_server::app(Config {
        external_base_url: format!("http://{addr}"),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn list_users_forwards_the_upstream_array() {
    let app = app_against(start_mock());
    let resp = app.oneshot(get_request("/external/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users = body_json(resp).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["name"], "Leanne Graham");
}

#[tokio::test]
async fn get_user_forwards_the_upstream_body() {
    let app = app_against(start_mock());
    let resp = app.oneshot(get_request("/external/users/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user = body_json(resp).await;
    assert_eq!(user["id"], 1);
    assert_eq!(user["username"], "Bret");
    assert_eq!(user["email"], "Sincere@april.biz");
}

#[tokio::test]
async fn get_unknown_user_returns_404() {
    let app = app_against(start_mock());
    let resp = app.oneshot(get_request("/external/users/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_posts_are_filtered_upstream() {
    let app = app_against(start_mock());
    let resp = app
        .oneshot(get_request("/external/users/1/posts"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts = body_json(resp).await;
    let posts = posts.as_array().unwrap();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| p["userId"] == 1));
}

#[tokio::test]
async fn create_user_returns_the_upstream_assigned_id() {
    let app = app_against(start_mock());
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/external/users")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"name":"Grace Hopper","username":"grace"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["id"], 4);
    assert_eq!(created["name"], "Grace Hopper");
}

#[tokio::test]
async fn unreachable_upstream_returns_502() {
    // Nothing listens on the reserved port; the connect fails.
    let app = todo_server::app(Config {
        external_base_url: "http://127.0.0.1:9".to_string(),
    });
    let resp = app.oneshot(get_request("/external/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
