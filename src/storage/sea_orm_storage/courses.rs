//! 课程存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::departments::Entity as Departments;
use crate::entity::feedbacks::{Column as FeedbackColumn, Entity as Feedbacks};
use crate::entity::lecturer_courses::{
    ActiveModel as LecturerCourseActiveModel, Column as LecturerCourseColumn,
    Entity as LecturerCourses,
};
use crate::entity::results::{Column as ResultColumn, Entity as Results};
use crate::entity::users::Entity as Users;
use crate::errors::{IntellGradeError, Result};
use crate::models::PaginationInfo;
use crate::models::courses::{
    entities::{Course, CourseWithDepartment},
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    responses::{CourseListResponse, FeedbackCourse, LecturerCourse},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            title: Set(req.title),
            unit: Set(req.unit),
            department_id: Set(req.department_id),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程（带院系名称）
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Code.contains(&escaped))
                    .add(Column::Title.contains(&escaped)),
            );
        }

        // 院系筛选
        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        select = select.order_by_asc(Column::Code);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程列表失败: {e}")))?;

        // 批量查询院系名称
        let department_ids: Vec<i64> = courses
            .iter()
            .map(|c| c.department_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let department_names: HashMap<i64, String> = if department_ids.is_empty() {
            HashMap::new()
        } else {
            Departments::find()
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

        let items = courses
            .into_iter()
            .map(|m| {
                let department_name = department_names
                    .get(&m.department_id)
                    .cloned()
                    .unwrap_or_default();
                CourseWithDepartment {
                    course: m.into_course(),
                    department_name,
                }
            })
            .collect();

        Ok(CourseListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(unit) = update.unit {
            model.unit = Set(unit);
        }

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计课程数量
    pub async fn count_courses_impl(&self) -> Result<i64> {
        let count = Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("统计课程数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 指派讲师授课
    pub async fn assign_lecturer_impl(&self, course_id: i64, lecturer_id: i64) -> Result<()> {
        let model = LecturerCourseActiveModel {
            lecturer_id: Set(lecturer_id),
            course_id: Set(course_id),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("指派讲师失败: {e}")))?;

        Ok(())
    }

    /// 检查讲师是否已被指派到课程
    pub async fn is_lecturer_assigned_impl(
        &self,
        course_id: i64,
        lecturer_id: i64,
    ) -> Result<bool> {
        let count = LecturerCourses::find()
            .filter(LecturerCourseColumn::CourseId.eq(course_id))
            .filter(LecturerCourseColumn::LecturerId.eq(lecturer_id))
            .count(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询授课关系失败: {e}")))?;

        Ok(count > 0)
    }

    /// 列出可供反馈的课程（课程 + 授课讲师）
    pub async fn list_feedback_courses_impl(&self) -> Result<Vec<FeedbackCourse>> {
        let assignments = LecturerCourses::find()
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询授课关系失败: {e}")))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.course_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let lecturer_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.lecturer_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let courses: HashMap<i64, crate::entity::courses::Model> = Courses::find()
            .filter(Column::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let lecturers: HashMap<i64, crate::entity::users::Model> = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(lecturer_ids))
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询讲师失败: {e}")))?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut items: Vec<FeedbackCourse> = assignments
            .into_iter()
            .filter_map(|a| {
                let course = courses.get(&a.course_id)?;
                let lecturer = lecturers.get(&a.lecturer_id)?;
                Some(FeedbackCourse {
                    id: course.id,
                    code: course.code.clone(),
                    title: course.title.clone(),
                    lecturer_id: lecturer.id,
                    lecturer_name: lecturer
                        .display_name
                        .clone()
                        .unwrap_or_else(|| lecturer.username.clone()),
                })
            })
            .collect();

        items.sort_by(|a, b| a.code.cmp(&b.code).then(a.lecturer_name.cmp(&b.lecturer_name)));

        Ok(items)
    }

    /// 讲师自己的课程（含选课人数与平均评分）
    pub async fn list_lecturer_courses_impl(&self, lecturer_id: i64) -> Result<Vec<LecturerCourse>> {
        let assignments = LecturerCourses::find()
            .filter(LecturerCourseColumn::LecturerId.eq(lecturer_id))
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询授课关系失败: {e}")))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = assignments.iter().map(|a| a.course_id).collect();

        let courses = Courses::find()
            .filter(Column::Id.is_in(course_ids.clone()))
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程失败: {e}")))?;

        let department_ids: Vec<i64> = courses
            .iter()
            .map(|c| c.department_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let department_names: HashMap<i64, String> = Departments::find()
            .filter(crate::entity::departments::Column::Id.is_in(department_ids))
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询院系名称失败: {e}")))?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        // 每门课程的选课学生（去重）
        let enrollments: Vec<(i64, i64)> = Results::find()
            .select_only()
            .column(ResultColumn::CourseId)
            .column(ResultColumn::StudentId)
            .filter(ResultColumn::CourseId.is_in(course_ids.clone()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询选课记录失败: {e}")))?;

        let mut students_per_course: HashMap<i64, HashSet<i64>> = HashMap::new();
        for (course_id, student_id) in enrollments {
            students_per_course
                .entry(course_id)
                .or_default()
                .insert(student_id);
        }

        // 每门课程对该讲师的评分
        let ratings: Vec<(i64, i32)> = Feedbacks::find()
            .select_only()
            .column(FeedbackColumn::CourseId)
            .column(FeedbackColumn::Rating)
            .filter(FeedbackColumn::CourseId.is_in(course_ids))
            .filter(FeedbackColumn::LecturerId.eq(lecturer_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("查询课程评分失败: {e}")))?;

        let mut rating_sums: HashMap<i64, (i64, i64)> = HashMap::new();
        for (course_id, rating) in ratings {
            let entry = rating_sums.entry(course_id).or_insert((0, 0));
            entry.0 += rating as i64;
            entry.1 += 1;
        }

        Ok(courses
            .into_iter()
            .map(|c| {
                let student_count = students_per_course
                    .get(&c.id)
                    .map(|s| s.len() as i64)
                    .unwrap_or(0);
                let average_rating = rating_sums
                    .get(&c.id)
                    .map(|(sum, count)| (*sum as f64 / *count as f64 * 100.0).round() / 100.0);
                LecturerCourse {
                    id: c.id,
                    code: c.code,
                    title: c.title,
                    unit: c.unit,
                    department_name: department_names
                        .get(&c.department_id)
                        .cloned()
                        .unwrap_or_default(),
                    student_count,
                    average_rating,
                }
            })
            .collect())
    }
}
