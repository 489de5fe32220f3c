//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductDraft, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations.
///
/// The service validates candidates, normalizes them, and translates
/// repository outcomes into [`ProductError`]. It holds no state of its own
/// beyond the repository handle.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products, ascending by id
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Vec<Product> {
        self.repository.list().await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let draft = validated_draft(&input.name, &input.description, input.price, input.stock)?;
        Ok(self.repository.create(draft).await)
    }

    /// Replace an existing product (full replace, id preserved)
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        let draft = validated_draft(&input.name, &input.description, input.price, input.stock)?;
        self.repository
            .update(id, draft)
            .await
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if self.repository.delete(id).await {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// The validation rule, applied identically for create and update: trimmed
/// name must be non-empty, price strictly positive, stock non-negative.
/// Valid candidates come back with name and description trimmed.
fn validated_draft(
    name: &str,
    description: &str,
    price: f64,
    stock: i32,
) -> ProductResult<ProductDraft> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }
    if price <= 0.0 {
        return Err(ProductError::InvalidInput(
            "price must be greater than zero".to_string(),
        ));
    }
    if stock < 0 {
        return Err(ProductError::InvalidInput(
            "stock must not be negative".to_string(),
        ));
    }

    Ok(ProductDraft {
        name: name.to_string(),
        description: description.trim().to_string(),
        price,
        stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn create_input(name: &str, price: f64, stock: i32) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            stock,
        }
    }

    fn update_input(name: &str, price: f64, stock: i32) -> UpdateProduct {
        UpdateProduct {
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = ProductService::new(MockProductRepository::new());

        for name in ["", "   ", "\t\n"] {
            let result = service.create_product(create_input(name, 10.0, 1)).await;
            assert!(matches!(result, Err(ProductError::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let service = ProductService::new(MockProductRepository::new());

        for price in [0.0, -1.0] {
            let result = service.create_product(create_input("mouse", price, 1)).await;
            assert!(matches!(result, Err(ProductError::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn test_create_rejects_negative_stock() {
        let service = ProductService::new(MockProductRepository::new());

        let result = service.create_product(create_input("mouse", 10.0, -1)).await;
        assert!(matches!(result, Err(ProductError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_trims_name_and_description() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .withf(|draft| draft.name == "mouse" && draft.description == "wireless")
            .returning(|draft| draft.into_product(1));

        let service = ProductService::new(repo);
        let input = CreateProduct {
            name: "  mouse  ".to_string(),
            description: "  wireless ".to_string(),
            price: 89.0,
            stock: 10,
        };

        let product = service.create_product(input).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "mouse");
        assert_eq!(product.description, "wireless");
    }

    #[tokio::test]
    async fn test_create_accepts_zero_stock() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().returning(|draft| draft.into_product(1));

        let service = ProductService::new(repo);
        let result = service.create_product(create_input("mouse", 0.01, 0)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| None);

        let service = ProductService::new(repo);
        let result = service.get_product(42).await;
        assert_eq!(result, Err(ProductError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_update_validates_before_touching_repository() {
        // No expectations: an invalid candidate must never reach the repository.
        let service = ProductService::new(MockProductRepository::new());

        let result = service.update_product(1, update_input("", 10.0, 1)).await;
        assert!(matches!(result, Err(ProductError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| None);

        let service = ProductService::new(repo);
        let result = service.update_product(999, update_input("mouse", 10.0, 1)).await;
        assert_eq!(result, Err(ProductError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_update_returns_replaced_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .withf(|id, draft| *id == 2 && draft.name == "keyboard")
            .returning(|id, draft| Some(draft.into_product(id)));

        let service = ProductService::new(repo);
        let updated = service
            .update_product(2, update_input("keyboard", 299.0, 60))
            .await
            .unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "keyboard");
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| false);

        let service = ProductService::new(repo);
        let result = service.delete_product(7).await;
        assert_eq!(result, Err(ProductError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_delete_existing_product_succeeds() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| true);

        let service = ProductService::new(repo);
        assert!(service.delete_product(1).await.is_ok());
    }
}
