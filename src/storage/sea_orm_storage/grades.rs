//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::Column;
use crate::entity::prelude::{Classes, GradeActiveModel, Grades, Students};
use crate::errors::{GradebookError, Result};
use crate::models::grades::{entities::Grade, requests::CreateGradeRequest};
use crate::policy::can_access;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = GradeActiveModel {
            label: Set(req.label),
            value: Set(req.value),
            student_id: Set(req.student_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "创建成绩失败"))?;

        Ok(result.into_grade())
    }

    /// 沿 学生 → 班级 校验归属后录入成绩，读取与插入在同一事务内
    pub async fn create_grade_for_owner_impl(
        &self,
        teacher_id: i64,
        req: CreateGradeRequest,
    ) -> Result<Grade> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db(e, "开启事务失败"))?;

        let (student, class) = Students::find_by_id(req.student_id)
            .find_also_related(Classes)
            .one(&txn)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询学生失败"))?
            .ok_or_else(|| {
                GradebookError::not_found(format!("Student {} not found", req.student_id))
            })?;

        let class = class
            .ok_or_else(|| {
                GradebookError::integrity_error(format!(
                    "学生 {} 的班级 {} 不存在",
                    student.id, student.class_id
                ))
            })?
            .into_class();

        if !can_access(teacher_id, &class) {
            return Err(GradebookError::forbidden(
                "You do not have permission to access this student",
            ));
        }

        let model = GradeActiveModel {
            label: Set(req.label),
            value: Set(req.value),
            student_id: Set(student.id),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::from_db(e, "创建成绩失败"))?;

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db(e, "提交事务失败"))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, grade_id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询成绩失败"))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 列出学生成绩（按录入顺序）
    pub async fn list_grades_by_student_impl(&self, student_id: i64) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询成绩列表失败"))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, grade_id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(grade_id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "删除成绩失败"))?;

        Ok(result.rows_affected > 0)
    }
}
