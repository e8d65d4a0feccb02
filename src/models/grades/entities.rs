use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    // 评估名称，自由文本
    pub label: String,
    pub value: f64,
    // 所属学生ID
    pub student_id: i64,
}
