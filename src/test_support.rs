//! 测试辅助：内存 SQLite + 轻量 Argon2 参数

use std::sync::Arc;

use crate::config::{Argon2Config, ClassConfig, DatabaseConfig};
use crate::models::{
    classes::{entities::Class, requests::CreateClassRequest},
    grades::{entities::Grade, requests::CreateGradeRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    teachers::requests::CreateTeacherRequest,
};
use crate::services::{AuthService, ClassService, GradeService, StudentService};
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use crate::utils::{Argon2Hasher, CredentialHasher};

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub hasher: Arc<dyn CredentialHasher>,
}

impl TestContext {
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        let storage = SeaOrmStorage::connect(&config)
            .await
            .expect("in-memory database should open");
        let hasher = Argon2Hasher::new(&Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        })
        .expect("light argon2 params should be valid");

        Self {
            storage: Arc::new(storage),
            hasher: Arc::new(hasher),
        }
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.storage.clone(), self.hasher.clone())
    }

    pub fn classes(&self) -> ClassService {
        ClassService::new(
            self.storage.clone(),
            ClassConfig {
                code_length: 8,
                code_attempts: 5,
            },
        )
    }

    pub fn students(&self) -> StudentService {
        StudentService::new(self.storage.clone())
    }

    pub fn grades(&self) -> GradeService {
        GradeService::new(self.storage.clone())
    }

    /// 直接通过存储层为教师创建 班级 → 学生 → 成绩
    pub async fn sample_tree(&self, teacher_id: i64) -> (Class, Student, Grade) {
        let class = self
            .storage
            .create_class(CreateClassRequest {
                teacher_id,
                name: "Bio".to_string(),
                code: format!("BIO{teacher_id:02}"),
            })
            .await
            .expect("class");
        let student = self
            .storage
            .create_student(CreateStudentRequest {
                class_id: class.id,
                name: "Carlos".to_string(),
            })
            .await
            .expect("student");
        let grade = self
            .storage
            .create_grade(CreateGradeRequest {
                student_id: student.id,
                label: "Prova 1".to_string(),
                value: 8.5,
            })
            .await
            .expect("grade");
        (class, student, grade)
    }
}

/// 不经过哈希直接插入教师，返回ID
pub async fn sample_teacher(ctx: &TestContext, email: &str) -> i64 {
    ctx.storage
        .create_teacher(CreateTeacherRequest {
            name: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            password_hash: "unused".to_string(),
        })
        .await
        .expect("teacher")
        .id
}
