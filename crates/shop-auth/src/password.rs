//! Password hashing with bcrypt.
//!
//! bcrypt embeds a random per-hash salt, so two hashes of the same
//! password never compare equal as strings; verification goes through
//! [`verify_password`].

use crate::Result as AuthErrorResult;

/// bcrypt work factor. Fixed; raising it invalidates no existing hashes
/// (the cost is embedded in each hash string).
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    Ok(bcrypt::hash(plain, BCRYPT_COST)?)
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(plain: &str, hash: &str) -> AuthErrorResult<bool> {
    Ok(bcrypt::verify(plain, hash)?)
}

/// Burn roughly the same time as a real verification.
///
/// Called on the unknown-email path so callers cannot tell a missing
/// account from a wrong password by timing the response.
pub fn dummy_verify(plain: &str) {
    let _ = bcrypt::hash(plain, BCRYPT_COST);
}
