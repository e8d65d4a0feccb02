use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::Class;

pub async fn get_class(service: &ClassService, teacher_id: i64, class_id: i64) -> Result<Class> {
    service.get_policy().authorize_class(teacher_id, class_id).await
}
