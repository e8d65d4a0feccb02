use tracing::{debug, info, warn};

use super::ClassService;
use crate::errors::{GradebookError, Result};
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::utils::random_code::generate_random_code;
use crate::utils::validate::{CLASS_NAME_MAX, validate_class_code, validate_text};

pub async fn create_class(
    service: &ClassService,
    teacher_id: i64,
    name: &str,
    code: &str,
) -> Result<Class> {
    let storage = service.get_storage();

    let name = name.trim();
    validate_text(name, CLASS_NAME_MAX)
        .map_err(|msg| GradebookError::validation(format!("Class name: {msg}")))?;

    let code = code.trim();
    validate_class_code(code).map_err(GradebookError::validation)?;

    // 选课码在所有教师之间唯一
    if storage.get_class_by_code(code).await?.is_some() {
        warn!("Class code {} already in use", code);
        return Err(GradebookError::duplicate_code(format!(
            "Class code {code} already exists"
        )));
    }

    // 教师不存在时外键约束返回 IntegrityError
    let class = storage
        .create_class(CreateClassRequest {
            teacher_id,
            name: name.to_string(),
            code: code.to_string(),
        })
        .await?;

    info!("Class {} created successfully by {}", class.id, teacher_id);
    Ok(class)
}

pub async fn create_class_with_generated_code(
    service: &ClassService,
    teacher_id: i64,
    name: &str,
) -> Result<Class> {
    let config = service.get_config();

    for attempt in 1..=config.code_attempts {
        let code = generate_random_code(config.code_length);
        match create_class(service, teacher_id, name, &code).await {
            Err(GradebookError::DuplicateCode(_)) | Err(GradebookError::ConstraintViolation(_)) => {
                debug!("Generated class code {} collided (attempt {})", code, attempt);
            }
            other => return other,
        }
    }

    Err(GradebookError::duplicate_code(format!(
        "Failed to generate a unique class code after {} attempts",
        config.code_attempts
    )))
}
