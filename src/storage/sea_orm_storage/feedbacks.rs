//! 反馈存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::courses::Entity as Courses;
use crate::entity::feedbacks::{ActiveModel, Column, Entity as Feedbacks};
use crate::entity::lecturer_courses::{Column as LecturerCourseColumn, Entity as LecturerCourses};
use crate::entity::results::{Column as ResultColumn, Entity as Results};
use crate::entity::users::Entity as Users;
use crate::errors::{IntellGradeError, Result};
use crate::models::analytics::responses::LecturerStudent;
use crate::models::feedbacks::{
    entities::{Feedback, FeedbackDetailRow, FeedbackRow},
    requests::SubmitFeedbackRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 提交反馈
    pub async fn create_feedback_impl(
        &self,
        student_id: i64,
        req: SubmitFeedbackRequest,
    ) -> Result<Feedback> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(req.course_id),
            lecturer_id: Set(req.lecturer_id),
            rating: Set(req.rating),
            comment: Set(req.comment),
            semester: Set(req.semester),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("提交反馈失败: {e}")))?;

        Ok(result.into_feedback())
    }

    /// 查找重复反馈（同学生同课程同讲师同学期）
    pub async fn find_feedback_impl(
        &self,
        student_id: i64,
        course_id: i64,
        lecturer_id: i64,
        semester: i32,
    ) -> Result<Option<Feedback>> {
        let result = Feedbacks::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::LecturerId.eq(lecturer_id))
            .filter(Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询反馈失败: {e}")))?;

        Ok(result.map(|m| m.into_feedback()))
    }

    /// 某讲师收到的全部反馈（匿名化，带课程信息，按时间倒序）
    pub async fn list_lecturer_feedbacks_impl(&self, lecturer_id: i64) -> Result<Vec<FeedbackRow>> {
        let feedbacks = Feedbacks::find()
            .filter(Column::LecturerId.eq(lecturer_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询反馈列表失败: {e}")))?;

        if feedbacks.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = feedbacks
            .iter()
            .map(|f| f.course_id)
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

        Ok(feedbacks
            .into_iter()
            .filter_map(|f| {
                let course = courses.get(&f.course_id)?;
                Some(FeedbackRow {
                    id: f.id,
                    course_id: f.course_id,
                    course_code: course.code.clone(),
                    course_title: course.title.clone(),
                    unit: course.unit,
                    rating: f.rating,
                    comment: f.comment,
                    semester: f.semester,
                    created_at: chrono::DateTime::from_timestamp(f.created_at, 0)
                        .unwrap_or_default(),
                })
            })
            .collect())
    }

    /// 全量反馈明细（管理员视角，带学生与讲师姓名，按时间倒序）
    pub async fn list_feedback_details_impl(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<FeedbackDetailRow>> {
        let mut select = Feedbacks::find().order_by_desc(Column::CreatedAt);

        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        let feedbacks = select
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询反馈列表失败: {e}")))?;

        if feedbacks.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = feedbacks
            .iter()
            .map(|f| f.course_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let user_ids: Vec<i64> = feedbacks
            .iter()
            .flat_map(|f| [f.student_id, f.lecturer_id])
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

        let users: HashMap<i64, crate::entity::users::Model> = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询用户失败: {e}")))?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let name_of = |id: i64| -> String {
            users
                .get(&id)
                .map(|u| u.display_name.clone().unwrap_or_else(|| u.username.clone()))
                .unwrap_or_default()
        };

        Ok(feedbacks
            .into_iter()
            .filter_map(|f| {
                let course = courses.get(&f.course_id)?;
                Some(FeedbackDetailRow {
                    id: f.id,
                    course_id: f.course_id,
                    course_code: course.code.clone(),
                    course_title: course.title.clone(),
                    lecturer_name: name_of(f.lecturer_id),
                    student_name: name_of(f.student_id),
                    rating: f.rating,
                    comment: f.comment,
                    semester: f.semester,
                    created_at: chrono::DateTime::from_timestamp(f.created_at, 0)
                        .unwrap_or_default(),
                })
            })
            .collect())
    }

    /// 统计反馈数量
    pub async fn count_feedbacks_impl(&self) -> Result<i64> {
        let count = Feedbacks::find()
            .count(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("统计反馈数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 讲师视角的学生名单（选修其课程的学生，按姓名排序）
    pub async fn list_lecturer_students_impl(
        &self,
        lecturer_id: i64,
    ) -> Result<Vec<LecturerStudent>> {
        let course_ids: Vec<i64> = LecturerCourses::find()
            .select_only()
            .column(LecturerCourseColumn::CourseId)
            .filter(LecturerCourseColumn::LecturerId.eq(lecturer_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询授课关系失败: {e}")))?;

        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        // 学生在该讲师课程下的选课记录
        let enrollments: Vec<(i64, i64)> = Results::find()
            .select_only()
            .column(ResultColumn::StudentId)
            .column(ResultColumn::CourseId)
            .filter(ResultColumn::CourseId.is_in(course_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询选课记录失败: {e}")))?;

        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let mut courses_per_student: HashMap<i64, HashSet<i64>> = HashMap::new();
        for (student_id, course_id) in enrollments {
            courses_per_student
                .entry(student_id)
                .or_default()
                .insert(course_id);
        }

        let student_ids: Vec<i64> = courses_per_student.keys().copied().collect();

        let students = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询学生失败: {e}")))?;

        let department_ids: Vec<i64> = students
            .iter()
            .filter_map(|s| s.department_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let department_names: HashMap<i64, String> = if department_ids.is_empty() {
            HashMap::new()
        } else {
            crate::entity::departments::Entity::find()
                .filter(crate::entity::departments::Column::Id.is_in(department_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    IntellGradeError::database_operation(format!("查询院系名称失败: {e}"))
                })?
                .into_iter()
                .map(|d| (d.id, d.name))
                .collect()
        };

        let mut items: Vec<LecturerStudent> = students
            .into_iter()
            .map(|s| {
                let course_count = courses_per_student
                    .get(&s.id)
                    .map(|c| c.len() as i64)
                    .unwrap_or(0);
                LecturerStudent {
                    id: s.id,
                    name: s.display_name.clone().unwrap_or_else(|| s.username.clone()),
                    email: s.email,
                    department: s
                        .department_id
                        .and_then(|id| department_names.get(&id).cloned()),
                    course_count,
                }
            })
            .collect();

        items.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(items)
    }
}
