use serde::{Deserialize, Serialize};

use super::repo::{Category, Product};

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub dietary: Option<String>,
}

/// Product detail payload: the product's own fields merged with its category.
#[derive(Debug, Serialize)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
}
