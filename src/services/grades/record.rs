use tracing::info;

use super::GradeService;
use crate::errors::{GradebookError, Result};
use crate::models::grades::{entities::Grade, requests::CreateGradeRequest};
use crate::utils::validate::{GRADE_LABEL_MAX, validate_grade_value, validate_text};

pub async fn record_grade(
    service: &GradeService,
    teacher_id: i64,
    student_id: i64,
    label: &str,
    value: f64,
) -> Result<Grade> {
    // 沿 学生 → 班级 校验所有权
    let (student, _) = service
        .get_policy()
        .authorize_student(teacher_id, student_id)
        .await?;

    let label = label.trim();
    validate_text(label, GRADE_LABEL_MAX)
        .map_err(|msg| GradebookError::validation(format!("Assessment label: {msg}")))?;
    validate_grade_value(value).map_err(GradebookError::validation)?;

    let grade = service
        .get_storage()
        .create_grade_for_owner(
            teacher_id,
            CreateGradeRequest {
                student_id: student.id,
                label: label.to_string(),
                value,
            },
        )
        .await?;

    info!(
        "Grade {} recorded for student {} by {}",
        grade.id, student.id, teacher_id
    );
    Ok(grade)
}
