use tracing::{info, warn};

use crate::errors::{GradebookError, Result};
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::utils::validate::{
    TEACHER_NAME_MAX, normalize_email, validate_email, validate_password, validate_text,
};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    name: &str,
    email: &str,
    password: &str,
) -> Result<i64> {
    let storage = service.get_storage();

    let name = name.trim();
    validate_text(name, TEACHER_NAME_MAX)
        .map_err(|msg| GradebookError::validation(format!("Teacher name: {msg}")))?;

    let email = normalize_email(email);
    validate_email(&email).map_err(GradebookError::validation)?;
    validate_password(password).map_err(GradebookError::validation)?;

    // 1. 检查邮箱是否已存在
    if storage.get_teacher_by_email(&email).await?.is_some() {
        warn!("Registration rejected, email {} already exists", email);
        return Err(GradebookError::duplicate_email(format!(
            "Email {email} already exists"
        )));
    }

    // 2. 哈希密码，放到阻塞线程池避免占用异步工作线程
    let hasher = service.get_hasher();
    let plain = password.to_owned();
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&plain)).await??;

    // 3. 创建教师，并发注册时由唯一约束兜底
    let teacher = storage
        .create_teacher(CreateTeacherRequest {
            name: name.to_string(),
            email,
            password_hash,
        })
        .await?;

    info!("Teacher {} registered with id {}", teacher.email, teacher.id);
    Ok(teacher.id)
}

#[cfg(test)]
mod tests {
    use crate::errors::GradebookError;
    use crate::test_support::TestContext;

    #[tokio::test]
    async fn test_register_distinct_emails() {
        let ctx = TestContext::new().await;
        let auth = ctx.auth();

        let ana = auth.register("Ana", "ana@x.com", "pw1").await.unwrap();
        let bia = auth.register("Bia", "bia@x.com", "pw2").await.unwrap();
        assert_ne!(ana, bia);

        let stored = ctx.storage.get_teacher_by_id(ana).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ana");
        assert_ne!(stored.password_hash, "pw1");
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let ctx = TestContext::new().await;
        let auth = ctx.auth();

        auth.register("Ana", "ana@x.com", "pw1").await.unwrap();
        let err = auth.register("Outra Ana", "ana@x.com", "pw2").await.unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateEmail(_)));

        // 大小写与空白不同也视为同一邮箱
        let err = auth.register("Ana", "  ANA@x.com", "pw3").await.unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateEmail(_)));
        assert_eq!(ctx.storage.count_teachers().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let ctx = TestContext::new().await;
        let auth = ctx.auth();

        for (name, email, password) in [
            ("", "ana@x.com", "pw1"),
            ("Ana", "not-an-email", "pw1"),
            ("Ana", "ana@x.com", ""),
        ] {
            let err = auth.register(name, email, password).await.unwrap_err();
            assert!(matches!(err, GradebookError::Validation(_)), "{err}");
        }
        assert_eq!(ctx.storage.count_teachers().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_registration() {
        let ctx = TestContext::new().await;
        let first = ctx.auth();
        let second = ctx.auth();

        let (a, b) = tokio::join!(
            first.register("Ana", "ana@x.com", "pw1"),
            second.register("Ana", "ana@x.com", "pw1"),
        );

        // 恰好一个成功，另一个被应用层检查或唯一约束拒绝
        let results = [a, b];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results.iter().any(|r| matches!(
            r,
            Err(GradebookError::DuplicateEmail(_)) | Err(GradebookError::ConstraintViolation(_))
        )));
        assert_eq!(ctx.storage.count_teachers().await.unwrap(), 1);
    }
}
