use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 选课码（全局唯一）
    pub code: String,
    // 所属教师ID，创建后不可变
    pub teacher_id: i64,
}
