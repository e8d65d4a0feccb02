use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub label: String,
    pub value: f64,
}
