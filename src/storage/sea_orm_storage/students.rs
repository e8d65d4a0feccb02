//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{Classes, StudentActiveModel, Students};
use crate::entity::students::Column;
use crate::errors::{GradebookError, Result};
use crate::models::{
    classes::entities::Class,
    students::{entities::Student, requests::CreateStudentRequest},
};
use crate::policy::can_access;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = StudentActiveModel {
            name: Set(req.name),
            class_id: Set(req.class_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 校验班级归属后创建学生，读取与插入在同一事务内
    pub async fn create_student_for_owner_impl(
        &self,
        teacher_id: i64,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::from_db(e, "开启事务失败"))?;

        let class = Classes::find_by_id(req.class_id)
            .one(&txn)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询班级失败"))?
            .ok_or_else(|| GradebookError::not_found(format!("Class {} not found", req.class_id)))?
            .into_class();

        // 未提交的事务在 drop 时回滚
        if !can_access(teacher_id, &class) {
            return Err(GradebookError::forbidden(
                "You do not have permission to access this class",
            ));
        }

        let model = StudentActiveModel {
            name: Set(req.name),
            class_id: Set(class.id),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::from_db(e, "创建学生失败"))?;

        txn.commit()
            .await
            .map_err(|e| GradebookError::from_db(e, "提交事务失败"))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询学生失败"))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 获取学生及其所属班级
    pub async fn get_student_with_class_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<(Student, Class)>> {
        let result = Students::find_by_id(student_id)
            .find_also_related(Classes)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询学生失败"))?;

        match result {
            Some((student, Some(class))) => Ok(Some((student.into_student(), class.into_class()))),
            Some((student, None)) => Err(GradebookError::integrity_error(format!(
                "学生 {} 的班级 {} 不存在",
                student.id, student.class_id
            ))),
            None => Ok(None),
        }
    }

    /// 列出班级学生
    pub async fn list_students_by_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询学生列表失败"))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 删除学生，成绩由外键级联删除
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let result = Students::delete_by_id(student_id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "删除学生失败"))?;

        Ok(result.rows_affected > 0)
    }
}
