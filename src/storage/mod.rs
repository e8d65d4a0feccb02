use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{
    classes::{entities::Class, requests::CreateClassRequest},
    grades::{entities::Grade, requests::CreateGradeRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 实体存储
///
/// 唯一约束冲突返回 `ConstraintViolation`，外键目标缺失返回 `IntegrityError`。
/// 删除沿所有权树级联：班级 → 学生 → 成绩。
/// `*_for_owner` 写入在事务内先读取所有权链，目标缺失返回 `NotFound`，不属于该教师返回 `Forbidden`。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过邮箱获取教师信息
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过选课码获取班级信息
    async fn get_class_by_code(&self, code: &str) -> Result<Option<Class>>;
    // 列出教师的班级（按名称、ID 升序）
    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 删除班级（级联删除学生与成绩）
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 在同一事务内校验班级归属并创建学生
    async fn create_student_for_owner(
        &self,
        teacher_id: i64,
        student: CreateStudentRequest,
    ) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 获取学生及其所属班级
    async fn get_student_with_class(&self, student_id: i64) -> Result<Option<(Student, Class)>>;
    // 列出班级学生（按名称、ID 升序）
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    // 删除学生（级联删除成绩）
    async fn delete_student(&self, student_id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 创建成绩
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    // 在同一事务内沿 学生 → 班级 校验归属并录入成绩
    async fn create_grade_for_owner(
        &self,
        teacher_id: i64,
        grade: CreateGradeRequest,
    ) -> Result<Grade>;
    // 通过ID获取成绩
    async fn get_grade_by_id(&self, grade_id: i64) -> Result<Option<Grade>>;
    // 列出学生成绩（按录入顺序）
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>>;
    // 删除成绩
    async fn delete_grade(&self, grade_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    let storage = sea_orm_storage::SeaOrmStorage::connect(&config.database).await?;
    Ok(Arc::new(storage))
}
