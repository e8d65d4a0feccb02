//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::Column;
use crate::entity::prelude::{ClassActiveModel, Classes};
use crate::errors::{GradebookError, Result};
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ClassActiveModel {
            teacher_id: Set(req.teacher_id),
            name: Set(req.name),
            code: Set(req.code),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "创建班级失败"))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询班级失败"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 通过选课码获取班级
    pub async fn get_class_by_code_impl(&self, code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询班级失败"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出教师拥有的班级
    pub async fn list_classes_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "查询班级列表失败"))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 删除班级，学生与成绩由外键级联删除
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::from_db(e, "删除班级失败"))?;

        Ok(result.rows_affected > 0)
    }
}
