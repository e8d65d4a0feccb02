use super::StudentService;
use crate::errors::Result;
use crate::models::students::entities::Student;

pub async fn list_students(
    service: &StudentService,
    teacher_id: i64,
    class_id: i64,
) -> Result<Vec<Student>> {
    let class = service
        .get_policy()
        .authorize_class(teacher_id, class_id)
        .await?;

    service.get_storage().list_students_by_class(class.id).await
}

#[cfg(test)]
mod tests {
    use crate::errors::GradebookError;
    use crate::test_support::{TestContext, sample_teacher};

    #[tokio::test]
    async fn test_list_students_sorted_by_name() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bia = sample_teacher(&ctx, "bia@x.com").await;
        let bio = ctx.classes().create_class(ana, "Bio", "BIO01").await.unwrap();
        let students = ctx.students();

        for name in ["Davi", "Beatriz", "Carlos"] {
            students.enroll_student(ana, bio.id, name).await.unwrap();
        }

        let listed = students.list_students(ana, bio.id).await.unwrap();
        let names: Vec<_> = listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Beatriz", "Carlos", "Davi"]);

        assert!(matches!(
            students.list_students(bia, bio.id).await,
            Err(GradebookError::Forbidden(_))
        ));
    }
}
