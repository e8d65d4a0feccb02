use tracing::info;

use super::StudentService;
use crate::errors::{GradebookError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::validate::{STUDENT_NAME_MAX, validate_text};

pub async fn enroll_student(
    service: &StudentService,
    teacher_id: i64,
    class_id: i64,
    name: &str,
) -> Result<Student> {
    // 权限校验必须先于任何写入
    let class = service
        .get_policy()
        .authorize_class(teacher_id, class_id)
        .await?;

    let name = name.trim();
    validate_text(name, STUDENT_NAME_MAX)
        .map_err(|msg| GradebookError::validation(format!("Student name: {msg}")))?;

    // 写入时在事务内重新确认归属，班级被并发删除则返回 NotFound
    let student = service
        .get_storage()
        .create_student_for_owner(
            teacher_id,
            CreateStudentRequest {
                class_id: class.id,
                name: name.to_string(),
            },
        )
        .await?;

    info!(
        "Student {} enrolled in class {} by {}",
        student.id, class.id, teacher_id
    );
    Ok(student)
}

#[cfg(test)]
mod tests {
    use crate::errors::GradebookError;
    use crate::test_support::{TestContext, sample_teacher};

    #[tokio::test]
    async fn test_enroll_student() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bio = ctx.classes().create_class(ana, "Bio", "BIO01").await.unwrap();

        let student = ctx
            .students()
            .enroll_student(ana, bio.id, "Carlos")
            .await
            .unwrap();
        assert_eq!(student.class_id, bio.id);
        assert_eq!(student.name, "Carlos");
    }

    #[tokio::test]
    async fn test_enroll_forbidden_without_mutation() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bia = sample_teacher(&ctx, "bia@x.com").await;
        let bio = ctx.classes().create_class(ana, "Bio", "BIO01").await.unwrap();

        let err = ctx
            .students()
            .enroll_student(bia, bio.id, "Intruso")
            .await
            .unwrap_err();
        assert!(matches!(err, GradebookError::Forbidden(_)));
        assert!(
            ctx.storage
                .list_students_by_class(bio.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_enroll_into_missing_class() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;

        let err = ctx
            .students()
            .enroll_student(ana, 404, "Carlos")
            .await
            .unwrap_err();
        assert!(matches!(err, GradebookError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_enroll_blank_name() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bio = ctx.classes().create_class(ana, "Bio", "BIO01").await.unwrap();

        let err = ctx
            .students()
            .enroll_student(ana, bio.id, "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, GradebookError::Validation(_)));
    }
}
