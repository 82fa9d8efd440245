use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
struct PostsQuery {
    #[serde(rename = "userId")]
    user_id: Option<u64>,
}

pub struct Fixtures {
    users: RwLock<HashMap<u64, User>>,
    posts: Vec<Post>,
    next_user_id: AtomicU64,
}

pub type Db = Arc<Fixtures>;

fn user(id: u64, name: &str, username: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
    }
}

fn post(user_id: u64, id: u64, title: &str, body: &str) -> Post {
    Post {
        user_id,
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

impl Fixtures {
    pub fn seeded() -> Self {
        let users = [
            user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
            user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
            user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
        ];
        let posts = vec![
            post(1, 1, "sunt aut facere", "quia et suscipit"),
            post(1, 2, "qui est esse", "est rerum tempore"),
            post(2, 11, "et ea vero quia", "delectus reiciendis"),
            post(3, 21, "asperiores ea ipsam", "voluptatibus aut"),
        ];
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
            posts,
            next_user_id: AtomicU64::new(4),
        }
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(Fixtures::seeded());
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/posts", get(list_posts))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let users = db.users.read().await;
    let mut all: Vec<User> = users.values().cloned().collect();
    all.sort_by_key(|u| u.id);
    Json(all)
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    let users = db.users.read().await;
    users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_posts(State(db): State<Db>, Query(query): Query<PostsQuery>) -> Json<Vec<Post>> {
    let posts = match query.user_id {
        Some(user_id) => db.posts.iter().filter(|p| p.user_id == user_id).cloned().collect(),
        None => db.posts.clone(),
    };
    Json(posts)
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<User>) {
    let id = db.next_user_id.fetch_add(1, Ordering::Relaxed);
    let user = User {
        id,
        name: input.name,
        username: input.username,
        email: input.email,
    };
    db.users.write().await.insert(id, user.clone());
    (StatusCode::CREATED, Json(user))
}
