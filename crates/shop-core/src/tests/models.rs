use crate::{Product, UserRecord};

#[test]
fn new_user_gets_unique_id_and_timestamp() {
    let a = UserRecord::new(
        "Ana".into(),
        "a@x.com".into(),
        "$2b$10$hash".into(),
        None,
    );
    let b = UserRecord::new(
        "Bo".into(),
        "b@x.com".into(),
        "$2b$10$hash".into(),
        None,
    );

    assert_ne!(a.id, b.id);
    assert!(a.created_at <= chrono::Utc::now());
}

#[test]
fn has_photo_treats_empty_string_as_absent() {
    let mut user = UserRecord::new(
        "Ana".into(),
        "a@x.com".into(),
        "$2b$10$hash".into(),
        Some(String::new()),
    );
    assert!(!user.has_photo());

    user.photo = Some("https://example.com/ana.png".into());
    assert!(user.has_photo());

    user.photo = None;
    assert!(!user.has_photo());
}

#[test]
fn new_product_has_no_optional_fields() {
    let product = Product::new("Football".into(), "Football".into(), 29.99);
    assert!(product.description.is_none());
    assert!(product.image.is_none());
    assert!(product.rating.is_none());
}
