pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use std::sync::Arc;

use crate::config::ClassConfig;
use crate::errors::Result;
use crate::models::classes::entities::Class;
use crate::policy::AccessPolicy;
use crate::storage::Storage;

pub struct ClassService {
    storage: Arc<dyn Storage>,
    policy: AccessPolicy,
    config: ClassConfig,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>, config: ClassConfig) -> Self {
        Self {
            policy: AccessPolicy::new(storage.clone()),
            storage,
            config,
        }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn get_policy(&self) -> &AccessPolicy {
        &self.policy
    }

    pub(crate) fn get_config(&self) -> &ClassConfig {
        &self.config
    }

    // 创建班级
    pub async fn create_class(&self, teacher_id: i64, name: &str, code: &str) -> Result<Class> {
        create::create_class(self, teacher_id, name, code).await
    }

    // 创建班级并自动生成选课码
    pub async fn create_class_with_generated_code(
        &self,
        teacher_id: i64,
        name: &str,
    ) -> Result<Class> {
        create::create_class_with_generated_code(self, teacher_id, name).await
    }

    // 获取教师的班级列表
    pub async fn list_classes(&self, teacher_id: i64) -> Result<Vec<Class>> {
        list::list_classes(self, teacher_id).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_class(&self, teacher_id: i64, class_id: i64) -> Result<Class> {
        get::get_class(self, teacher_id, class_id).await
    }

    // 根据班级 ID 删除班级
    pub async fn delete_class(&self, teacher_id: i64, class_id: i64) -> Result<()> {
        delete::delete_class(self, teacher_id, class_id).await
    }
}
