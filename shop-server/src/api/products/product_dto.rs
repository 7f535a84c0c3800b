use shop_core::Product;

use serde::Serialize;

/// Product DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub created_at: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            category: p.category,
            description: p.description,
            price: p.price,
            image: p.image,
            rating: p.rating,
            created_at: p.created_at.timestamp(),
        }
    }
}
