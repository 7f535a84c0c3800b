pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, me, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        me_response::MeResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::bearer::BearerToken,
    products::{
        create_product_request::CreateProductRequest,
        delete_response::DeleteResponse,
        product_dto::ProductDto,
        product_list_response::ProductListResponse,
        product_response::ProductResponse,
        products::{
            create_product, delete_product, get_product, list_products, random_products,
            update_product,
        },
        update_product_request::UpdateProductRequest,
    },
    users::{
        update_profile_request::UpdateProfileRequest,
        update_profile_response::UpdateProfileResponse,
        user_dto::UserDto,
        users::update_profile,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
