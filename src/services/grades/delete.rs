use tracing::info;

use super::GradeService;
use crate::errors::{GradebookError, Result};

pub async fn delete_grade(service: &GradeService, teacher_id: i64, grade_id: i64) -> Result<()> {
    let grade = service
        .get_policy()
        .authorize_grade(teacher_id, grade_id)
        .await?;

    if !service.get_storage().delete_grade(grade.id).await? {
        return Err(GradebookError::not_found(format!(
            "Grade {grade_id} not found"
        )));
    }

    info!("Grade {} deleted by {}", grade.id, teacher_id);
    Ok(())
}
