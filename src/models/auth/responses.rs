use crate::models::teachers::entities::Teacher;
use serde::Serialize;

// 登录成功后交给调用方保存到会话中的教师身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedTeacher {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Teacher> for AuthenticatedTeacher {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            email: teacher.email,
        }
    }
}
