pub mod auth;
pub mod classes;
pub mod grades;
pub mod students;

use std::sync::Arc;

pub use auth::AuthService;
pub use classes::ClassService;
pub use grades::GradeService;
pub use students::StudentService;

use crate::config::AppConfig;
use crate::storage::Storage;
use crate::utils::CredentialHasher;

/// 表现层持有的服务集合
pub struct GradebookServices {
    pub auth: AuthService,
    pub classes: ClassService,
    pub students: StudentService,
    pub grades: GradeService,
}

impl GradebookServices {
    pub fn new(
        storage: Arc<dyn Storage>,
        hasher: Arc<dyn CredentialHasher>,
        config: &AppConfig,
    ) -> Self {
        Self {
            auth: AuthService::new(storage.clone(), hasher),
            classes: ClassService::new(storage.clone(), config.classes.clone()),
            students: StudentService::new(storage.clone()),
            grades: GradeService::new(storage),
        }
    }
}
