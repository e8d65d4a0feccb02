use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    // 教师ID
    pub id: i64,
    // 显示名称
    pub name: String,
    // 登录邮箱（唯一）
    pub email: String,
    // 密码哈希，不对外输出
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}
