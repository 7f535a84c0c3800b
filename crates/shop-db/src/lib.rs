pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::product_repository::ProductRepository;
pub use repositories::user_repository::UserRepository;
