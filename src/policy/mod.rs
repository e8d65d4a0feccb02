//! 访问控制策略
//!
//! 教师只能访问自己拥有的班级，以及这些班级下的学生和成绩。
//! 判定本身是纯函数；[`AccessPolicy`] 负责沿所有权链加载记录。

use std::sync::Arc;

use tracing::warn;

use crate::errors::{GradebookError, Result};
use crate::models::{classes::entities::Class, grades::entities::Grade, students::entities::Student};
use crate::storage::Storage;

/// 教师是否拥有该班级
pub fn can_access(teacher_id: i64, class: &Class) -> bool {
    class.teacher_id == teacher_id
}

/// 所有权链解析器
#[derive(Clone)]
pub struct AccessPolicy {
    storage: Arc<dyn Storage>,
}

impl AccessPolicy {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 教师是否可以访问指定班级，班级不存在时为 false
    pub async fn can_access_class(&self, teacher_id: i64, class_id: i64) -> Result<bool> {
        Ok(self
            .storage
            .get_class_by_id(class_id)
            .await?
            .is_some_and(|class| can_access(teacher_id, &class)))
    }

    /// 加载班级并校验所有权
    pub async fn authorize_class(&self, teacher_id: i64, class_id: i64) -> Result<Class> {
        let class = self
            .storage
            .get_class_by_id(class_id)
            .await?
            .ok_or_else(|| GradebookError::not_found(format!("Class {class_id} not found")))?;

        if !can_access(teacher_id, &class) {
            warn!(
                "Teacher {} denied access to class {} owned by {}",
                teacher_id, class.id, class.teacher_id
            );
            return Err(GradebookError::forbidden(
                "You do not have permission to access this class",
            ));
        }

        Ok(class)
    }

    /// 加载学生及其班级并校验所有权
    pub async fn authorize_student(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<(Student, Class)> {
        let (student, class) = self
            .storage
            .get_student_with_class(student_id)
            .await?
            .ok_or_else(|| GradebookError::not_found(format!("Student {student_id} not found")))?;

        if !can_access(teacher_id, &class) {
            warn!(
                "Teacher {} denied access to student {} in class {}",
                teacher_id, student.id, class.id
            );
            return Err(GradebookError::forbidden(
                "You do not have permission to access this student",
            ));
        }

        Ok((student, class))
    }

    /// 加载成绩并沿 学生 → 班级 校验所有权
    pub async fn authorize_grade(&self, teacher_id: i64, grade_id: i64) -> Result<Grade> {
        let grade = self
            .storage
            .get_grade_by_id(grade_id)
            .await?
            .ok_or_else(|| GradebookError::not_found(format!("Grade {grade_id} not found")))?;

        // 成绩存在则学生必然存在（外键约束）
        match self.authorize_student(teacher_id, grade.student_id).await {
            Ok(_) => Ok(grade),
            Err(GradebookError::NotFound(msg)) => Err(GradebookError::integrity_error(format!(
                "Grade {grade_id} has no owner: {msg}"
            ))),
            Err(GradebookError::Forbidden(_)) => Err(GradebookError::forbidden(
                "You do not have permission to access this grade",
            )),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestContext, sample_teacher};

    fn class_owned_by(teacher_id: i64) -> Class {
        Class {
            id: 10,
            name: "Bio".to_string(),
            code: "BIO01".to_string(),
            teacher_id,
        }
    }

    #[test]
    fn test_can_access_owner_only() {
        let class = class_owned_by(1);
        assert!(can_access(1, &class));
        assert!(!can_access(2, &class));
    }

    #[tokio::test]
    async fn test_ownership_chain() {
        let ctx = TestContext::new().await;
        let owner = sample_teacher(&ctx, "ana@x.com").await;
        let other = sample_teacher(&ctx, "bia@x.com").await;
        let (class, student, grade) = ctx.sample_tree(owner).await;

        let policy = AccessPolicy::new(ctx.storage.clone());

        assert!(policy.can_access_class(owner, class.id).await.unwrap());
        assert!(!policy.can_access_class(other, class.id).await.unwrap());
        assert!(!policy.can_access_class(owner, 9999).await.unwrap());

        assert_eq!(policy.authorize_class(owner, class.id).await.unwrap(), class);
        assert!(matches!(
            policy.authorize_class(other, class.id).await,
            Err(GradebookError::Forbidden(_))
        ));

        let (found, found_class) = policy.authorize_student(owner, student.id).await.unwrap();
        assert_eq!(found, student);
        assert_eq!(found_class.id, class.id);
        assert!(matches!(
            policy.authorize_student(other, student.id).await,
            Err(GradebookError::Forbidden(_))
        ));

        assert_eq!(policy.authorize_grade(owner, grade.id).await.unwrap(), grade);
        assert!(matches!(
            policy.authorize_grade(other, grade.id).await,
            Err(GradebookError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_targets_are_not_found() {
        let ctx = TestContext::new().await;
        let owner = sample_teacher(&ctx, "ana@x.com").await;
        let policy = AccessPolicy::new(ctx.storage.clone());

        assert!(matches!(
            policy.authorize_class(owner, 42).await,
            Err(GradebookError::NotFound(_))
        ));
        assert!(matches!(
            policy.authorize_student(owner, 42).await,
            Err(GradebookError::NotFound(_))
        ));
        assert!(matches!(
            policy.authorize_grade(owner, 42).await,
            Err(GradebookError::NotFound(_))
        ));
    }
}
