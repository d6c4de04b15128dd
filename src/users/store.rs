use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored user record. Ids are always generated server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Process-wide, insertion-ordered collection of users. Lives only for the
/// lifetime of the process; a single lock guards every read and append.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record with a freshly generated id and returns it.
    /// Id uniqueness is only probabilistic (random v4) and is not checked
    /// against existing records.
    pub async fn insert(&self, name: String, email: String) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name,
            email,
        };
        self.inner.write().await.push(user.clone());
        user
    }

    pub async fn all(&self) -> Vec<User> {
        self.inner.read().await.clone()
    }

    /// Case-insensitive exact match on name, in insertion order.
    pub async fn find_by_name(&self, name: &str) -> Vec<User> {
        let needle = name.to_lowercase();
        self.inner
            .read()
            .await
            .iter()
            .filter(|u| u.name.to_lowercase() == needle)
            .cloned()
            .collect()
    }

    /// Linear scan comparing the caller-supplied segment against the
    /// canonical hyphenated form. Alternate uuid spellings (uppercase,
    /// un-hyphenated, urn-prefixed) never match.
    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .iter()
            .find(|u| u.id.to_string() == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_distinct_nonempty_ids() {
        let store = UserStore::new();
        let a = store.insert("Alice".into(), "alice@example.com".into()).await;
        let b = store.insert("Alice".into(), "alice@example.com".into()).await;
        assert_ne!(a.id, b.id);
        assert!(!a.id.to_string().is_empty());
        assert_eq!(store.all().await.len(), 2);
    }

    #[tokio::test]
    async fn all_preserves_insertion_order() {
        let store = UserStore::new();
        for name in ["first", "second", "third"] {
            store.insert(name.into(), format!("{name}@example.com")).await;
        }
        let names: Vec<_> = store.all().await.into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn find_by_name_is_case_insensitive() {
        let store = UserStore::new();
        let alice = store.insert("Alice".into(), "alice@example.com".into()).await;
        store.insert("Bob".into(), "bob@example.com".into()).await;

        for query in ["alice", "ALICE", "Alice"] {
            let found = store.find_by_name(query).await;
            assert_eq!(found, vec![alice.clone()], "query {query:?}");
        }
        assert!(store.find_by_name("alic").await.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_exact_record() {
        let store = UserStore::new();
        let user = store.insert("Carol".into(), "carol@example.com".into()).await;
        assert_eq!(store.find_by_id(&user.id.to_string()).await, Some(user));
        assert_eq!(store.find_by_id(&Uuid::new_v4().to_string()).await, None);
        assert_eq!(store.find_by_id("not-a-uuid").await, None);
    }

    #[tokio::test]
    async fn find_by_id_requires_canonical_form() {
        let store = UserStore::new();
        let user = store.insert("Dave".into(), "dave@example.com".into()).await;
        let canonical = user.id.to_string();
        assert_eq!(store.find_by_id(&canonical).await, Some(user));

        let uppercase = canonical.to_uppercase();
        if uppercase != canonical {
            assert_eq!(store.find_by_id(&uppercase).await, None);
        }
        assert_eq!(store.find_by_id(&canonical.replace('-', "")).await, None);
        assert_eq!(store.find_by_id(&format!("urn:uuid:{canonical}")).await, None);
    }
}
