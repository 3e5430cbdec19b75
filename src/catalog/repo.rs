use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category_id: i32,
    pub ingredients: Option<String>,
    pub dietary: Option<Vec<String>>,
    #[serde(default)]
    pub popularity: i32,
}

/// Read-side catalog capability. The process-local implementation is
/// [`MemCatalog`]; a persistent store can be swapped in behind the same
/// trait without touching handlers.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_categories(&self) -> anyhow::Result<Vec<Category>>;
    async fn category_by_slug(&self, slug: &str) -> anyhow::Result<Option<Category>>;
    async fn list_products(&self) -> anyhow::Result<Vec<Product>>;
    async fn products_by_category_slug(&self, slug: &str) -> anyhow::Result<Vec<Product>>;
    async fn product_by_slug(&self, slug: &str) -> anyhow::Result<Option<Product>>;
    async fn product_by_id(&self, id: i32) -> anyhow::Result<Option<Product>>;
}

/// In-memory catalog, fixed for the process lifetime: categories and
/// products are seeded once and never mutated, so lookups need no locking.
pub struct MemCatalog {
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
}

impl MemCatalog {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

#[async_trait]
impl CatalogStore for MemCatalog {
    async fn list_categories(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    async fn category_by_slug(&self, slug: &str) -> anyhow::Result<Option<Category>> {
        Ok(self.categories.values().find(|c| c.slug == slug).cloned())
    }

    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.products.values().cloned().collect())
    }

    async fn products_by_category_slug(&self, slug: &str) -> anyhow::Result<Vec<Product>> {
        // Unknown slugs yield an empty list, not an error.
        let Some(category) = self.categories.values().find(|c| c.slug == slug) else {
            return Ok(Vec::new());
        };
        Ok(self
            .products
            .values()
            .filter(|p| p.category_id == category.id)
            .cloned()
            .collect())
    }

    async fn product_by_slug(&self, slug: &str) -> anyhow::Result<Option<Product>> {
        Ok(self.products.values().find(|p| p.slug == slug).cloned())
    }

    async fn product_by_id(&self, id: i32) -> anyhow::Result<Option<Product>> {
        Ok(self.products.get(&id).cloned())
    }
}
