use async_trait::async_trait;

use crate::models::{Product, ProductDraft};

/// Repository trait for product storage.
///
/// The repository is the exclusive owner of the product collection and of
/// identifier allocation; it is the only component that mutates stored
/// records. Absence is a signal (`Option`/`bool`), never an error: the
/// in-memory store has no failure mode, and translating outcomes into
/// [`crate::error::ProductError`] belongs to the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, sorted ascending by id.
    async fn list(&self) -> Vec<Product>;

    /// The product with the given id, if present.
    async fn get_by_id(&self, id: i64) -> Option<Product>;

    /// Store a new product under the next unused id and return it.
    async fn create(&self, draft: ProductDraft) -> Product;

    /// Replace every field of the product with `id` (id preserved).
    /// `None` when no such product exists; the collection is unchanged.
    async fn update(&self, id: i64, draft: ProductDraft) -> Option<Product>;

    /// Remove the product with `id`; `false` when no such product exists.
    async fn delete(&self, id: i64) -> bool;
}
