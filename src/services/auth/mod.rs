pub mod login;
pub mod register;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{auth::AuthenticatedTeacher, teachers::entities::Teacher};
use crate::storage::Storage;
use crate::utils::CredentialHasher;

pub struct AuthService {
    storage: Arc<dyn Storage>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { storage, hasher }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn get_hasher(&self) -> Arc<dyn CredentialHasher> {
        self.hasher.clone()
    }

    // 教师注册，返回新教师ID
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<i64> {
        register::handle_register(self, name, email, password).await
    }

    // 登录验证
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthenticatedTeacher> {
        login::handle_authenticate(self, email, password).await
    }

    // 获取教师信息（会话刷新）
    pub async fn get_teacher(&self, teacher_id: i64) -> Result<Teacher> {
        login::handle_get_teacher(self, teacher_id).await
    }
}
