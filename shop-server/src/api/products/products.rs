//! Catalog REST API handlers

use crate::{
    ApiError, ApiResult, CreateProductRequest, DeleteResponse, ProductDto, ProductListResponse,
    ProductResponse, UpdateProductRequest,
};

use crate::state::AppState;

use shop_core::Product;
use shop_db::ProductRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// How many products the storefront's featured section shows.
const FEATURED_SAMPLE_SIZE: i64 = 6;

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    req.validate()?;

    let mut product = Product::new(
        req.name.trim().to_string(),
        req.category.trim().to_string(),
        req.price.unwrap_or_default(),
    );
    product.description = req.description;
    product.image = req.image;
    product.rating = req.rating;

    let repo = ProductRepository::new(state.pool.clone());
    repo.create(&product).await?;

    log::debug!("Created product {} ({})", product.id, product.name);

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            product: product.into(),
        }),
    ))
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<ProductListResponse>> {
    let repo = ProductRepository::new(state.pool.clone());
    let products = repo.find_all().await?;

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductDto::from).collect(),
    }))
}

/// GET /products/random
///
/// Random sample for the featured section, at most six entries.
pub async fn random_products(
    State(state): State<AppState>,
) -> ApiResult<Json<ProductListResponse>> {
    let repo = ProductRepository::new(state.pool.clone());
    let products = repo.sample(FEATURED_SAMPLE_SIZE).await?;

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductDto::from).collect(),
    }))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductResponse>> {
    let product_id = Uuid::parse_str(&id)?;

    let repo = ProductRepository::new(state.pool.clone());
    let product = repo
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product {} not found", id)))?;

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// PUT /products/{id}
///
/// Lookup-first update: a missing product is a 404, an update that
/// changes nothing is still a success.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product_id = Uuid::parse_str(&id)?;
    req.validate()?;

    let repo = ProductRepository::new(state.pool.clone());
    let mut product = repo
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product {} not found", id)))?;

    if let Some(name) = req.name {
        product.name = name.trim().to_string();
    }
    if let Some(category) = req.category {
        product.category = category.trim().to_string();
    }
    if let Some(description) = req.description {
        product.description = Some(description);
    }
    if let Some(price) = req.price {
        product.price = price;
    }
    if let Some(image) = req.image {
        product.image = Some(image);
    }
    if let Some(rating) = req.rating {
        product.rating = Some(rating);
    }

    repo.update(&product).await?;

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let product_id = Uuid::parse_str(&id)?;

    let repo = ProductRepository::new(state.pool.clone());
    if !repo.delete(product_id).await? {
        return Err(ApiError::not_found(format!("Product {} not found", id)));
    }

    Ok(Json(DeleteResponse {
        message: "Deleted successfully".to_string(),
    }))
}
