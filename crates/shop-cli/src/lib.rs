pub mod client;
pub mod session;

pub use client::client::{ApiUser, ShopClient};
pub use client::error::{ClientError, Result as ClientResult};
pub use session::error::{Result as SessionResult, SessionError};
pub use session::identity::SessionIdentity;
pub use session::manager::SessionManager;
pub use session::store::{PersistedSession, SessionStore};

#[cfg(test)]
mod tests;
