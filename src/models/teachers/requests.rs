use serde::Deserialize;

// 创建教师请求（存储层），密码必须已经哈希
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
