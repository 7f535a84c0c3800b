mod common;

use crate::common::{create_test_pool, sample_user};

use shop_db::{DbError, UserRepository};

use uuid::Uuid;

#[tokio::test]
async fn create_then_find_by_email() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let user = sample_user("a@x.com");
    repo.create(&user).await.unwrap();

    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(found, user);
}

#[tokio::test]
async fn email_lookup_is_case_insensitive() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    repo.create(&sample_user("Ana@X.com")).await.unwrap();

    let found = repo.find_by_email("ana@x.com").await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn duplicate_email_is_rejected_by_the_store() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    repo.create(&sample_user("b@x.com")).await.unwrap();

    let second = sample_user("b@x.com");
    let result = repo.create(&second).await;
    assert!(matches!(result, Err(DbError::DuplicateEmail { .. })));

    // The losing insert left nothing behind
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_detection_ignores_email_case() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    repo.create(&sample_user("c@x.com")).await.unwrap();

    let result = repo.create(&sample_user("C@X.COM")).await;
    assert!(matches!(result, Err(DbError::DuplicateEmail { .. })));
}

#[tokio::test]
async fn find_by_id_roundtrip() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let user = sample_user("d@x.com");
    repo.create(&user).await.unwrap();

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "d@x.com");

    let missing = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn update_profile_changes_only_display_fields() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let user = sample_user("e@x.com");
    repo.create(&user).await.unwrap();

    repo.update_profile(user.id, "New Name", Some("new.png"))
        .await
        .unwrap();

    let updated = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.photo.as_deref(), Some("new.png"));
    // Immutable fields untouched
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);
    assert_eq!(updated.created_at, user.created_at);
}

#[tokio::test]
async fn update_profile_with_unchanged_values_still_succeeds() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let user = sample_user("f@x.com");
    repo.create(&user).await.unwrap();

    // Write the same values twice; both calls must succeed and leave
    // identical state behind.
    repo.update_profile(user.id, &user.name, user.photo.as_deref())
        .await
        .unwrap();
    repo.update_profile(user.id, &user.name, user.photo.as_deref())
        .await
        .unwrap();

    let after = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(after, user);
}
