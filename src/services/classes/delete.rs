use tracing::info;

use super::ClassService;
use crate::errors::{GradebookError, Result};

pub async fn delete_class(service: &ClassService, teacher_id: i64, class_id: i64) -> Result<()> {
    // 权限校验
    let class = service
        .get_policy()
        .authorize_class(teacher_id, class_id)
        .await?;

    // 学生与成绩由外键级联删除
    if !service.get_storage().delete_class(class.id).await? {
        return Err(GradebookError::not_found(format!(
            "Class {class_id} not found"
        )));
    }

    info!("Class {} deleted by {}", class.id, teacher_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::GradebookError;
    use crate::test_support::{TestContext, sample_teacher};

    #[tokio::test]
    async fn test_delete_class_cascades() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let (class, student, grade) = ctx.sample_tree(ana).await;

        ctx.classes().delete_class(ana, class.id).await.unwrap();

        assert!(ctx.storage.get_class_by_id(class.id).await.unwrap().is_none());
        assert!(ctx.storage.get_student_by_id(student.id).await.unwrap().is_none());
        assert!(ctx.storage.get_grade_by_id(grade.id).await.unwrap().is_none());
        assert!(ctx.storage.list_students_by_class(class.id).await.unwrap().is_empty());
        assert!(
            ctx.storage
                .list_grades_by_student(student.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_class_keeps_other_trees() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bia = sample_teacher(&ctx, "bia@x.com").await;
        let (ana_class, _, _) = ctx.sample_tree(ana).await;
        let (bia_class, bia_student, bia_grade) = ctx.sample_tree(bia).await;

        ctx.classes().delete_class(ana, ana_class.id).await.unwrap();

        assert!(ctx.storage.get_class_by_id(bia_class.id).await.unwrap().is_some());
        assert!(ctx.storage.get_student_by_id(bia_student.id).await.unwrap().is_some());
        assert!(ctx.storage.get_grade_by_id(bia_grade.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_class_forbidden_for_other_teacher() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bia = sample_teacher(&ctx, "bia@x.com").await;
        let (class, student, _) = ctx.sample_tree(ana).await;

        let err = ctx.classes().delete_class(bia, class.id).await.unwrap_err();
        assert!(matches!(err, GradebookError::Forbidden(_)));
        assert!(ctx.storage.get_class_by_id(class.id).await.unwrap().is_some());
        assert!(ctx.storage.get_student_by_id(student.id).await.unwrap().is_some());
    }
}
