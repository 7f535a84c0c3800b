use crate::{hash_password, verify_password};

#[test]
fn hash_then_verify_succeeds() {
    let hash = hash_password("pw123").unwrap();
    assert!(verify_password("pw123", &hash).unwrap());
}

#[test]
fn wrong_password_fails_verification() {
    let hash = hash_password("pw123").unwrap();
    assert!(!verify_password("wrong", &hash).unwrap());
}

#[test]
fn plaintext_never_appears_in_the_hash() {
    let hash = hash_password("hunter2-plaintext").unwrap();
    assert!(!hash.contains("hunter2"));
    assert!(hash.starts_with("$2"));
}

#[test]
fn same_password_hashes_differently_each_time() {
    // bcrypt salts per hash, so equality would mean a fixed salt
    let a = hash_password("pw123").unwrap();
    let b = hash_password("pw123").unwrap();
    assert_ne!(a, b);

    assert!(verify_password("pw123", &a).unwrap());
    assert!(verify_password("pw123", &b).unwrap());
}
