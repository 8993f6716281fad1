//! 成绩存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::courses::Entity as Courses;
use crate::entity::results::{ActiveModel, Column, Entity as Results};
use crate::errors::{IntellGradeError, Result};
use crate::models::results::{
    entities::{ResultRow, StudentResult},
    requests::CreateResultRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 录入成绩
    pub async fn create_result_impl(
        &self,
        req: CreateResultRequest,
        grade: &str,
    ) -> Result<StudentResult> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            score: Set(req.score),
            grade: Set(grade.to_string()),
            session: Set(req.session),
            semester: Set(req.semester),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_result())
    }

    /// 通过 ID 获取成绩
    pub async fn get_result_by_id_impl(&self, id: i64) -> Result<Option<StudentResult>> {
        let result = Results::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_result()))
    }

    /// 查找某学生某课程某学期的成绩（重复录入检查）
    pub async fn find_result_impl(
        &self,
        student_id: i64,
        course_id: i64,
        session: &str,
        semester: i32,
    ) -> Result<Option<StudentResult>> {
        let result = Results::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Session.eq(session))
            .filter(Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_result()))
    }

    /// 修改成绩分数
    pub async fn update_result_score_impl(
        &self,
        id: i64,
        score: f64,
        grade: &str,
    ) -> Result<Option<StudentResult>> {
        let existing = self.get_result_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            score: Set(score),
            grade: Set(grade.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_result_by_id_impl(id).await
    }

    /// 某学生的全部成绩（带课程信息，按学年学期倒序）
    pub async fn list_student_results_impl(&self, student_id: i64) -> Result<Vec<ResultRow>> {
        let results = Results::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::Session)
            .order_by_desc(Column::Semester)
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询成绩列表失败: {e}")))?;

        if results.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = results
            .iter()
            .map(|r| r.course_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let courses: HashMap<i64, crate::entity::courses::Model> = Courses::find()
            .filter(crate::entity::courses::Column::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(results
            .into_iter()
            .filter_map(|r| {
                let course = courses.get(&r.course_id)?;
                Some(ResultRow {
                    id: r.id,
                    course_id: r.course_id,
                    course_code: course.code.clone(),
                    course_title: course.title.clone(),
                    unit: course.unit,
                    score: r.score,
                    grade: r.grade,
                    session: r.session,
                    semester: r.semester,
                })
            })
            .collect())
    }

    /// 统计成绩数量
    pub async fn count_results_impl(&self) -> Result<i64> {
        let count = Results::find()
            .count(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("统计成绩数量失败: {e}")))?;

        Ok(count as i64)
    }
}
