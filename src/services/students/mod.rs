pub mod enroll;
pub mod list;
pub mod remove;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::policy::AccessPolicy;
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
    policy: AccessPolicy,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            policy: AccessPolicy::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn get_policy(&self) -> &AccessPolicy {
        &self.policy
    }

    // 向班级添加学生
    pub async fn enroll_student(
        &self,
        teacher_id: i64,
        class_id: i64,
        name: &str,
    ) -> Result<Student> {
        enroll::enroll_student(self, teacher_id, class_id, name).await
    }

    // 列出班级学生
    pub async fn list_students(&self, teacher_id: i64, class_id: i64) -> Result<Vec<Student>> {
        list::list_students(self, teacher_id, class_id).await
    }

    // 移除学生（连同成绩）
    pub async fn remove_student(&self, teacher_id: i64, student_id: i64) -> Result<()> {
        remove::remove_student(self, teacher_id, student_id).await
    }
}
