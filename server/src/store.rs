//! Storage port and its in-memory implementation.
//!
//! # Design
//! `TodoStore` is the id-keyed persistence abstraction the service is built
//! against: save, find, find-all, and two delete forms. Methods return
//! `impl Future + Send` so the trait stays object-free and the service can
//! be generic over its store. A `StoreError` from any implementation
//! propagates to the caller unmodified, with no retry and no local recovery.
//!
//! `InMemoryStore` keeps rows in a `HashMap` behind an async `RwLock` and
//! assigns ids from an atomic counter starting at 1. It doubles as the
//! substitutable fake for service tests.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use crate::types::{Todo, TodoDraft, TodoId};

/// Failure surfaced by a store implementation.
#[derive(Debug)]
pub struct StoreError(String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Id-keyed todo persistence.
pub trait TodoStore: Send + Sync + 'static {
    /// Persist a draft, assigning the next id when the draft has none.
    /// Saving a draft with an existing id overwrites that row.
    fn save(&self, draft: TodoDraft) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    fn find_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    /// Remove a fetched row. Missing rows are a no-op; existence checks
    /// belong to the caller.
    fn delete(&self, todo: &Todo) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Remove by id, silently no-opping when the row is missing.
    fn delete_by_id(&self, id: TodoId) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// `HashMap`-backed store with sequential id assignment.
#[derive(Debug)]
pub struct InMemoryStore {
    todos: RwLock<HashMap<TodoId, Todo>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for InMemoryStore {
    fn save(&self, draft: TodoDraft) -> impl Future<Output = Result<Todo, StoreError>> + Send {
        async move {
            let id = match draft.id {
                Some(id) => id,
                None => self.next_id.fetch_add(1, Ordering::Relaxed),
            };
            let todo = Todo {
                id,
                text: draft.text,
                done: draft.done,
            };
            self.todos.write().await.insert(id, todo.clone());
            Ok(todo)
        }
    }

    fn find_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send {
        async move { Ok(self.todos.read().await.get(&id).cloned()) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send {
        async move { Ok(self.todos.read().await.values().cloned().collect()) }
    }

    fn delete(&self, todo: &Todo) -> impl Future<Output = Result<(), StoreError>> + Send {
        async move {
            self.todos.write().await.remove(&todo.id);
            Ok(())
        }
    }

    fn delete_by_id(&self, id: TodoId) -> impl Future<Output = Result<(), StoreError>> + Send {
        async move {
            self.todos.write().await.remove(&id);
            Ok(())
        }
    }
}
