//! 院系存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{IntellGradeError, Result};
use crate::models::departments::{
    entities::Department,
    requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建院系
    pub async fn create_department_impl(
        &self,
        req: CreateDepartmentRequest,
    ) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("创建院系失败: {e}")))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 通过代码获取院系
    pub async fn get_department_by_code_impl(&self, code: &str) -> Result<Option<Department>> {
        let result = Departments::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 列出全部院系（按名称排序）
    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let departments = Departments::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(departments
            .into_iter()
            .map(|m| m.into_department())
            .collect())
    }

    /// 更新院系
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        let existing = self.get_department_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            name: Set(update.name),
            code: Set(update.code),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("更新院系失败: {e}")))?;

        self.get_department_by_id_impl(id).await
    }

    /// 删除院系
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("删除院系失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计院系下的课程数量（删除前检查）
    pub async fn count_department_courses_impl(&self, department_id: i64) -> Result<i64> {
        let count = Courses::find()
            .filter(CourseColumn::DepartmentId.eq(department_id))
            .count(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("统计课程数量失败: {e}")))?;

        Ok(count as i64)
    }
}
