//! The in-memory todo store.
//!
//! A single ordered list plus the next-id counter, behind one async mutex.
//! Every operation takes the lock for its whole read-modify-write, so
//! concurrent creates never share an id and no update is lost.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::todo::{ListFilter, NewTodo, Todo, TodoId, TodoUpdate};

/// Shared handle to the todo list. Cloning is cheap and every clone sees the
/// same data.
#[derive(Clone, Debug, Default)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Todos accepted by `filter`, in insertion order.
    pub async fn list(&self, filter: &ListFilter) -> Vec<Todo> {
        let inner = self.inner.lock().await;
        inner.todos.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Appends a todo under the next id.
    pub async fn create(&self, new: NewTodo) -> Todo {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let todo = Todo {
            id,
            title: Value::String(new.title),
            checked: Value::Bool(new.checked),
        };
        inner.todos.push(todo.clone());
        debug!(id, "todo created");
        todo
    }

    pub async fn get(&self, id: TodoId) -> Option<Todo> {
        let inner = self.inner.lock().await;
        inner.todos.iter().find(|t| t.id == id).cloned()
    }

    /// Overwrites title and checked in place. `None` when `id` is unknown.
    pub async fn update(&self, id: TodoId, update: TodoUpdate) -> Option<Todo> {
        let mut inner = self.inner.lock().await;
        let todo = inner.todos.iter_mut().find(|t| t.id == id)?;
        todo.title = update.title;
        todo.checked = update.checked;
        debug!(id, "todo updated");
        Some(todo.clone())
    }

    /// Removes a todo. `None` when `id` is unknown.
    pub async fn remove(&self, id: TodoId) -> Option<Todo> {
        let mut inner = self.inner.lock().await;
        let index = inner.todos.iter().position(|t| t.id == id)?;
        debug!(id, "todo deleted");
        Some(inner.todos.remove(index))
    }

    /// Drops every todo and restarts ids at 0. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let removed = inner.todos.len();
        inner.todos.clear();
        inner.next_id = 0;
        debug!(removed, "todo list cleared");
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn new(title: &str, checked: bool) -> NewTodo {
        NewTodo { title: title.to_owned(), checked }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let store = Store::new();
        assert_eq!(store.create(new("a", false)).await.id(), 0);
        assert_eq!(store.create(new("b", false)).await.id(), 1);
        store.remove(1).await.unwrap();
        assert_eq!(store.create(new("c", false)).await.id(), 2);
    }

    #[tokio::test]
    async fn clear_resets_counter() {
        let store = Store::new();
        store.create(new("a", false)).await;
        store.create(new("b", true)).await;
        assert_eq!(store.clear().await, 2);
        assert!(store.is_empty().await);
        assert_eq!(store.create(new("c", false)).await.id(), 0);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = Store::new();
        for title in ["one", "two", "three"] {
            store.create(new(title, false)).await;
        }
        let titles: Vec<_> = store
            .list(&ListFilter::default())
            .await
            .into_iter()
            .map(|t| t.title().clone())
            .collect();
        assert_eq!(titles, vec![json!("one"), json!("two"), json!("three")]);
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_not_id() {
        let store = Store::new();
        store.create(new("a", true)).await;
        let updated = store
            .update(0, TodoUpdate { title: json!("b"), checked: Value::Null })
            .await
            .unwrap();
        assert_eq!(updated.id(), 0);
        assert_eq!(updated.title(), &json!("b"));
        assert_eq!(updated.checked(), &Value::Null);
        assert_eq!(store.get(0).await, Some(updated));
    }

    #[tokio::test]
    async fn unknown_ids_leave_store_untouched() {
        let store = Store::new();
        store.create(new("a", false)).await;
        let update = TodoUpdate { title: json!("x"), checked: json!(true) };
        assert!(store.update(42, update).await.is_none());
        assert!(store.remove(42).await.is_none());
        assert!(store.get(42).await.is_none());
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(0).await.unwrap().title(), &json!("a"));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Store::new();
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(new(&i.to_string(), false)).await.id() })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (0..32).collect::<Vec<_>>());
    }
}
