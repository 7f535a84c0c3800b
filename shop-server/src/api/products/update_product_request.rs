use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// Partial update; omitted fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if let Some(ref name) = self.name
            && name.trim().is_empty()
        {
            return Err(ApiError::validation("name cannot be empty", Some("name")));
        }

        if let Some(p) = self.price
            && (!p.is_finite() || p < 0.0)
        {
            return Err(ApiError::validation(
                "price must be non-negative",
                Some("price"),
            ));
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
