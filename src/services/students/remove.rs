use tracing::info;

use super::StudentService;
use crate::errors::{GradebookError, Result};

pub async fn remove_student(
    service: &StudentService,
    teacher_id: i64,
    student_id: i64,
) -> Result<()> {
    let (student, class) = service
        .get_policy()
        .authorize_student(teacher_id, student_id)
        .await?;

    // 成绩由外键级联删除
    if !service.get_storage().delete_student(student.id).await? {
        return Err(GradebookError::not_found(format!(
            "Student {student_id} not found"
        )));
    }

    info!(
        "Student {} removed from class {} by {}",
        student.id, class.id, teacher_id
    );
    Ok(())
}
