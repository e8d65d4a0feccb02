use super::GradeService;
use crate::errors::Result;
use crate::models::grades::entities::Grade;

pub async fn list_grades(
    service: &GradeService,
    teacher_id: i64,
    student_id: i64,
) -> Result<Vec<Grade>> {
    let (student, _) = service
        .get_policy()
        .authorize_student(teacher_id, student_id)
        .await?;

    service.get_storage().list_grades_by_student(student.id).await
}

#[cfg(test)]
mod tests {
    use crate::errors::GradebookError;
    use crate::test_support::{TestContext, sample_teacher};

    #[tokio::test]
    async fn test_list_grades_in_recorded_order() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bia = sample_teacher(&ctx, "bia@x.com").await;
        let (_, student, first) = ctx.sample_tree(ana).await;
        let grades = ctx.grades();

        let second = grades
            .record_grade(ana, student.id, "Prova 2", 7.0)
            .await
            .unwrap();

        let listed = grades.list_grades(ana, student.id).await.unwrap();
        assert_eq!(listed, vec![first, second]);

        assert!(matches!(
            grades.list_grades(bia, student.id).await,
            Err(GradebookError::Forbidden(_))
        ));
    }
}
