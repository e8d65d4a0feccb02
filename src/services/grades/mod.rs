pub mod delete;
pub mod list;
pub mod record;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::grades::entities::Grade;
use crate::policy::AccessPolicy;
use crate::storage::Storage;

pub struct GradeService {
    storage: Arc<dyn Storage>,
    policy: AccessPolicy,
}

impl GradeService {
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

    // 录入成绩
    pub async fn record_grade(
        &self,
        teacher_id: i64,
        student_id: i64,
        label: &str,
        value: f64,
    ) -> Result<Grade> {
        record::record_grade(self, teacher_id, student_id, label, value).await
    }

    // 列出学生成绩
    pub async fn list_grades(&self, teacher_id: i64, student_id: i64) -> Result<Vec<Grade>> {
        list::list_grades(self, teacher_id, student_id).await
    }

    // 删除成绩
    pub async fn delete_grade(&self, teacher_id: i64, grade_id: i64) -> Result<()> {
        delete::delete_grade(self, teacher_id, grade_id).await
    }
}
