use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (positive, assigned by the repository)
    pub id: i64,
    /// Product name (non-empty, trimmed)
    pub name: String,
    /// Product description (trimmed, may be empty)
    pub description: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock, never negative
    pub stock: i32,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
}

/// DTO for replacing an existing product.
///
/// Updates are full replacements: every field overwrites the stored value,
/// only the id is preserved. There are no partial/PATCH semantics.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
}

/// A normalized candidate the service hands to the repository: name and
/// description are already trimmed and the validation rule has passed.
/// Carries no id; the repository assigns or preserves one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

impl ProductDraft {
    /// Attach an identifier, producing the stored record.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}
