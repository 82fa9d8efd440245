//! Business rules for the todo lifecycle.
//!
//! # Design
//! Every id-scoped mutation fetches the row first and fails with
//! `NotFound(id)` when it is absent, instead of relying on the store's own
//! missing-row semantics. That keeps "the todo does not exist" a typed,
//! machine-visible condition for every mutating operation. The service does
//! no logging and no error recovery of its own; store failures pass through
//! untouched.

use std::fmt;

use crate::store::{StoreError, TodoStore};
use crate::types::{Todo, TodoDraft, TodoId, UpdateTodo};

/// Errors raised by [`TodoService`] operations.
#[derive(Debug)]
pub enum TodoError {
    /// No todo exists with the given id.
    NotFound(TodoId),

    /// The store failed; passed through unmodified.
    Store(StoreError),
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoError::NotFound(id) => write!(f, "todo not found with id: {id}"),
            TodoError::Store(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl std::error::Error for TodoError {}

impl From<StoreError> for TodoError {
    fn from(err: StoreError) -> Self {
        TodoError::Store(err)
    }
}

/// Mediates all reads and writes of todo entities against an injected store.
pub struct TodoService<S> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full, unordered set of stored todos.
    pub async fn all_todos(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.store.find_all().await?)
    }

    /// Persist a new todo as given. A pre-set id or done flag passes
    /// through; no duplicate detection.
    pub async fn create_todo(&self, draft: TodoDraft) -> Result<Todo, TodoError> {
        Ok(self.store.save(draft).await?)
    }

    /// Look up one todo. An unknown id is `Ok(None)`, not an error.
    pub async fn todo_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Replace both `text` and `done` of an existing todo.
    pub async fn update_todo(&self, id: TodoId, details: UpdateTodo) -> Result<Todo, TodoError> {
        let todo = self.fetch(id).await?;
        let draft = TodoDraft {
            id: Some(todo.id),
            text: details.text,
            done: details.done,
        };
        Ok(self.store.save(draft).await?)
    }

    /// Flip the done flag of an existing todo.
    pub async fn toggle_status(&self, id: TodoId) -> Result<Todo, TodoError> {
        let todo = self.fetch(id).await?;
        let draft = TodoDraft {
            id: Some(todo.id),
            text: todo.text,
            done: !todo.done,
        };
        Ok(self.store.save(draft).await?)
    }

    /// Remove an existing todo. Fetches first so a missing id is reported
    /// instead of silently no-opping.
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        let todo = self.fetch(id).await?;
        self.store.delete(&todo).await?;
        Ok(())
    }

    async fn fetch(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn service() -> TodoService<InMemoryStore> {
        TodoService::new(InMemoryStore::new())
    }

    fn draft(text: &str, done: bool) -> TodoDraft {
        TodoDraft {
            id: None,
            text: text.to_string(),
            done,
        }
    }

    #[tokio::test]
    async fn create_returns_entity_with_assigned_id() {
        let service = service();
        let todo = service.create_todo(draft("Buy milk", false)).await.unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.done);
    }

    #[tokio::test]
    async fn create_passes_preset_done_through() {
        let service = service();
        let todo = service.create_todo(draft("Already done", true)).await.unwrap();
        assert!(todo.done);
    }

    #[tokio::test]
    async fn create_passes_preset_id_through() {
        let service = service();
        let todo = service
            .create_todo(TodoDraft {
                id: Some(42),
                text: "Pinned".to_string(),
                done: false,
            })
            .await
            .unwrap();
        assert_eq!(todo.id, 42);
        assert!(service.todo_by_id(42).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn get_missing_todo_is_none_not_an_error() {
        let service = service();
        assert!(service.todo_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_todo_fails_with_not_found() {
        let service = service();
        let err = service
            .update_todo(
                99,
                UpdateTodo {
                    text: "Nope".to_string(),
                    done: false,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound(99)));
    }

    #[tokio::test]
    async fn update_replaces_the_whole_text_done_pair() {
        let service = service();
        let created = service.create_todo(draft("Buy milk", false)).await.unwrap();

        let updated = service
            .update_todo(
                created.id,
                UpdateTodo {
                    text: "Buy oat milk".to_string(),
                    done: true,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.text, "Buy oat milk");
        assert!(updated.done);

        let stored = service.todo_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn toggle_missing_todo_fails_with_not_found() {
        let service = service();
        let err = service.toggle_status(99).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound(99)));
    }

    #[tokio::test]
    async fn toggle_twice_restores_the_original_flag() {
        let service = service();
        let created = service.create_todo(draft("Buy milk", false)).await.unwrap();

        let once = service.toggle_status(created.id).await.unwrap();
        assert!(once.done);
        assert_eq!(once.text, "Buy milk");

        let twice = service.toggle_status(created.id).await.unwrap();
        assert!(!twice.done);
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_fails() {
        let service = service();
        let created = service.create_todo(draft("Buy milk", false)).await.unwrap();

        service.delete_todo(created.id).await.unwrap();
        assert!(service.todo_by_id(created.id).await.unwrap().is_none());

        let err = service.delete_todo(created.id).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound(id) if id == created.id));
    }

    #[tokio::test]
    async fn all_todos_returns_every_row() {
        let service = service();
        service.create_todo(draft("one", false)).await.unwrap();
        service.create_todo(draft("two", true)).await.unwrap();
        assert_eq!(service.all_todos().await.unwrap().len(), 2);
    }
}
