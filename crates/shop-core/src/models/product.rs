//! Product entity - a catalog item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sports-equipment catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Free-form category label (e.g., "Football", "Fitness")
    pub category: String,
    pub description: Option<String>,
    pub price: f64,
    /// Optional image URL
    pub image: Option<String>,
    /// Average customer rating, 0.0 - 5.0
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh id and creation timestamp.
    pub fn new(name: String, category: String, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            description: None,
            price,
            image: None,
            rating: None,
            created_at: Utc::now(),
        }
    }
}
