use crate::{ApiError, ApiResult};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Product name (required)
    #[serde(default)]
    pub name: String,

    /// Category label, e.g. "Football" (required)
    #[serde(default)]
    pub category: String,

    /// Price (required, non-negative)
    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    /// Average rating, 0.0 - 5.0
    #[serde(default)]
    pub rating: Option<f64>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("name is required", Some("name")));
        }
        if self.category.trim().is_empty() {
            return Err(ApiError::validation("category is required", Some("category")));
        }

        match self.price {
            None => return Err(ApiError::validation("price is required", Some("price"))),
            Some(p) if !p.is_finite() || p < 0.0 => {
                return Err(ApiError::validation(
                    "price must be non-negative",
                    Some("price"),
                ));
            }
            Some(_) => {}
        }

        if let Some(r) = self.rating
            && !(0.0..=5.0).contains(&r)
        {
            return Err(ApiError::validation(
                "rating must be between 0 and 5",
                Some("rating"),
            ));
        }

        Ok(())
    }
}
