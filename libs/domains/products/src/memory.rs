use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Product, ProductDraft};
use crate::repository::ProductRepository;

#[derive(Debug)]
struct Store {
    items: HashMap<i64, Product>,
    next_id: i64,
}

/// In-memory implementation of [`ProductRepository`].
///
/// A reader/writer lock guards the map together with the id counter: reads
/// run concurrently, writes are exclusive, and every method is its own
/// atomic unit. The counter only moves forward, so an id is never reused
/// after deletion.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    /// Build a repository pre-populated with `seed`. The id counter starts
    /// past the highest seeded id (at 1 for an empty seed).
    pub fn new(seed: Vec<Product>) -> Self {
        let mut items = HashMap::with_capacity(seed.len());
        let mut max_id = 0;
        for product in seed {
            max_id = max_id.max(product.id);
            items.insert(product.id, product);
        }

        Self {
            store: Arc::new(RwLock::new(Store {
                items,
                next_id: max_id + 1,
            })),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Vec<Product> {
        let store = self.store.read().await;

        let mut products: Vec<Product> = store.items.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        products
    }

    async fn get_by_id(&self, id: i64) -> Option<Product> {
        let store = self.store.read().await;
        store.items.get(&id).cloned()
    }

    async fn create(&self, draft: ProductDraft) -> Product {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let product = draft.into_product(id);
        store.items.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        product
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> Option<Product> {
        let mut store = self.store.write().await;

        if !store.items.contains_key(&id) {
            return None;
        }

        let product = draft.into_product(id);
        store.items.insert(id, product.clone());

        tracing::info!(product_id = id, "Updated product");
        Some(product)
    }

    async fn delete(&self, id: i64) -> bool {
        let mut store = self.store.write().await;

        if store.items.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            stock: 1,
        }
    }

    #[tokio::test]
    async fn test_empty_repository_lists_nothing() {
        let repo = InMemoryProductRepository::default();
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::default();

        let a = repo.create(draft("a")).await;
        let b = repo.create(draft("b")).await;
        let c = repo.create(draft("c")).await;

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_id_counter_starts_past_seed() {
        let seed = vec![
            draft("a").into_product(1),
            draft("b").into_product(7),
            draft("c").into_product(3),
        ];
        let repo = InMemoryProductRepository::new(seed);

        let created = repo.create(draft("d")).await;
        assert_eq!(created.id, 8);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_never_reused() {
        let repo = InMemoryProductRepository::default();

        let a = repo.create(draft("a")).await;
        let b = repo.create(draft("b")).await;
        assert!(repo.delete(b.id).await);
        assert!(repo.delete(a.id).await);

        let c = repo.create(draft("c")).await;
        assert_eq!(c.id, 3);
        assert!(repo.get_by_id(a.id).await.is_none());
        assert!(repo.get_by_id(b.id).await.is_none());
    }

    #[tokio::test]
    async fn test_list_is_sorted_regardless_of_seed_order() {
        let seed = vec![
            draft("c").into_product(9),
            draft("a").into_product(2),
            draft("b").into_product(5),
        ];
        let repo = InMemoryProductRepository::new(seed);

        let ids: Vec<i64> = repo.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryProductRepository::default();
        let created = repo.create(draft("before")).await;

        let replacement = ProductDraft {
            name: "after".to_string(),
            description: "changed".to_string(),
            price: 99.5,
            stock: 42,
        };
        let updated = repo.update(created.id, replacement.clone()).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated, replacement.into_product(created.id));
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_collection_unchanged() {
        let repo = InMemoryProductRepository::default();
        let created = repo.create(draft("only")).await;

        assert!(repo.update(999, draft("ghost")).await.is_none());

        let all = repo.list().await;
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = InMemoryProductRepository::default();
        assert!(!repo.delete(1).await);
    }

    #[tokio::test]
    async fn test_concurrent_creates_yield_unique_ids() {
        let repo = InMemoryProductRepository::default();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(draft(&format!("p{}", i))).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        assert_eq!(repo.list().await.len(), 32);
    }
}
