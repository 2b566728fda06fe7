use chrono::Duration;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;
use crate::repositories::verification_code::{
    MockVerificationCodeRepository, VerificationCodeRepository,
};

fn code(email: &str, value: &str) -> VerificationCode {
    VerificationCode::new(email, value, Duration::minutes(5))
}

#[tokio::test]
async fn test_upsert_replaces_row_for_same_email() {
    let repo = MockVerificationCodeRepository::new();

    repo.upsert_replacing(code("a@b.com", "111111")).await.unwrap();
    repo.upsert_replacing(code("a@b.com", "222222")).await.unwrap();
    repo.upsert_replacing(code("c@d.com", "333333")).await.unwrap();

    assert_eq!(repo.count().await, 2);
    let found = repo.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(found.code, "222222");
}

#[tokio::test]
async fn test_delete_by_id_ignores_replaced_rows() {
    let repo = MockVerificationCodeRepository::new();
    let first = repo.upsert_replacing(code("a@b.com", "111111")).await.unwrap();
    let second = repo.upsert_replacing(code("a@b.com", "222222")).await.unwrap();

    assert!(!repo.delete(first.id).await.unwrap());
    assert_eq!(repo.count().await, 1);
    assert!(repo.delete(second.id).await.unwrap());
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_delete_by_email() {
    let repo = MockVerificationCodeRepository::new();
    repo.upsert_replacing(code("a@b.com", "111111")).await.unwrap();

    assert_eq!(repo.delete_by_email("a@b.com").await.unwrap(), 1);
    assert_eq!(repo.delete_by_email("a@b.com").await.unwrap(), 0);
    assert!(repo.find_by_email("a@b.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_failure_injection() {
    let repo = MockVerificationCodeRepository::new();
    repo.set_fail_writes(true);

    let result = repo.upsert_replacing(code("a@b.com", "111111")).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert_eq!(repo.count().await, 0);

    repo.set_fail_writes(false);
    let stored = repo.upsert_replacing(code("a@b.com", "111111")).await.unwrap();
    repo.set_fail_deletes(true);
    assert!(repo.delete(stored.id).await.is_err());
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_email_match_is_exact() {
    let repo = MockVerificationCodeRepository::new();
    repo.upsert_replacing(code("A@b.com", "111111")).await.unwrap();

    assert!(repo.find_by_email("a@b.com").await.unwrap().is_none());
    assert_eq!(repo.delete_by_email("a@b.com").await.unwrap(), 0);

    repo.upsert_replacing(code("a@b.com", "222222")).await.unwrap();
    assert_eq!(repo.count().await, 2);
    assert_eq!(repo.find_by_email("A@b.com").await.unwrap().unwrap().code, "111111");
}
