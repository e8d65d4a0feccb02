use tracing::{info, warn};

use crate::errors::{GradebookError, Result};
use crate::models::{auth::AuthenticatedTeacher, teachers::entities::Teacher};
use crate::utils::validate::normalize_email;

use super::AuthService;

pub async fn handle_authenticate(
    service: &AuthService,
    email: &str,
    password: &str,
) -> Result<AuthenticatedTeacher> {
    let storage = service.get_storage();
    let email = normalize_email(email);

    // 1. 根据邮箱获取教师信息
    let teacher = storage.get_teacher_by_email(&email).await?;

    // 2. 验证密码，邮箱不存在时用占位哈希走同样的验证流程
    let hasher = service.get_hasher();
    let stored_hash = match &teacher {
        Some(t) => t.password_hash.clone(),
        None => hasher.dummy_hash().to_owned(),
    };
    let plain = password.to_owned();
    let verified = tokio::task::spawn_blocking(move || hasher.verify(&plain, &stored_hash)).await?;

    match teacher {
        Some(teacher) if verified => {
            info!("Teacher {} logged in successfully", teacher.id);
            Ok(teacher.into())
        }
        _ => {
            warn!("Failed login attempt for {}", email);
            Err(GradebookError::invalid_credentials(
                "Email or password is incorrect",
            ))
        }
    }
}

pub async fn handle_get_teacher(service: &AuthService, teacher_id: i64) -> Result<Teacher> {
    service
        .get_storage()
        .get_teacher_by_id(teacher_id)
        .await?
        .ok_or_else(|| GradebookError::not_found(format!("Teacher {teacher_id} not found")))
}

#[cfg(test)]
mod tests {
    use crate::errors::GradebookError;
    use crate::test_support::TestContext;

    #[tokio::test]
    async fn test_authenticate_returns_registered_id() {
        let ctx = TestContext::new().await;
        let auth = ctx.auth();

        let id = auth.register("Ana", "ana@x.com", "pw1").await.unwrap();
        let session = auth.authenticate("ana@x.com", "pw1").await.unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.name, "Ana");

        // 登录邮箱同样经过规范化
        let session = auth.authenticate(" Ana@X.com", "pw1").await.unwrap();
        assert_eq!(session.id, id);
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        let ctx = TestContext::new().await;
        let auth = ctx.auth();
        auth.register("Ana", "ana@x.com", "pw1").await.unwrap();

        let wrong_password = auth.authenticate("ana@x.com", "pw2").await.unwrap_err();
        let unknown_email = auth.authenticate("bia@x.com", "pw1").await.unwrap_err();

        assert!(matches!(wrong_password, GradebookError::InvalidCredentials(_)));
        assert_eq!(wrong_password, unknown_email);
    }

    #[tokio::test]
    async fn test_get_teacher() {
        let ctx = TestContext::new().await;
        let auth = ctx.auth();
        let id = auth.register("Ana", "ana@x.com", "pw1").await.unwrap();

        let teacher = auth.get_teacher(id).await.unwrap();
        assert_eq!(teacher.email, "ana@x.com");

        // 序列化时不输出密码哈希
        let json = serde_json::to_value(&teacher).unwrap();
        assert!(json.get("password_hash").is_none());

        assert!(matches!(
            auth.get_teacher(id + 100).await,
            Err(GradebookError::NotFound(_))
        ));
    }
}
