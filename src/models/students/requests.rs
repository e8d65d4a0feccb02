use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub class_id: i64,
    pub name: String,
}
