use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseListResponse, FeedbackCourse, LecturerCourse},
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
    },
    feedbacks::{
        entities::{Feedback, FeedbackDetailRow, FeedbackRow},
        requests::SubmitFeedbackRequest,
    },
    results::{
        entities::{ResultRow, StudentResult},
        requests::CreateResultRequest,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::{StudentEntry, UserListResponse},
    },
};

use crate::errors::Result;
use crate::models::analytics::responses::LecturerStudent;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 按角色统计用户数量
    async fn count_users_by_role(&self, role: UserRole) -> Result<i64>;
    // 学生花名册（按姓名排序）
    async fn list_students(&self) -> Result<Vec<StudentEntry>>;

    /// 院系管理方法
    // 创建院系
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    // 通过ID获取院系信息
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 通过代码获取院系信息
    async fn get_department_by_code(&self, code: &str) -> Result<Option<Department>>;
    // 列出全部院系
    async fn list_departments(&self) -> Result<Vec<Department>>;
    // 更新院系信息
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    // 删除院系
    async fn delete_department(&self, id: i64) -> Result<bool>;
    // 统计院系下属课程数量
    async fn count_department_courses(&self, department_id: i64) -> Result<i64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过代码获取课程信息
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出课程（带院系名称）
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 统计课程数量
    async fn count_courses(&self) -> Result<i64>;
    // 指派讲师授课
    async fn assign_lecturer(&self, course_id: i64, lecturer_id: i64) -> Result<()>;
    // 检查讲师是否已授该课
    async fn is_lecturer_assigned(&self, course_id: i64, lecturer_id: i64) -> Result<bool>;
    // 可供学生反馈的课程（课程 + 授课讲师）
    async fn list_feedback_courses(&self) -> Result<Vec<FeedbackCourse>>;
    // 讲师自己的课程（含选课人数与平均评分）
    async fn list_lecturer_courses(&self, lecturer_id: i64) -> Result<Vec<LecturerCourse>>;

    /// 成绩管理方法
    // 录入成绩（grade 由调用方根据分数推导）
    async fn create_result(&self, result: CreateResultRequest, grade: &str)
    -> Result<StudentResult>;
    // 查找某学生某课程某学期的成绩
    async fn find_result(
        &self,
        student_id: i64,
        course_id: i64,
        session: &str,
        semester: i32,
    ) -> Result<Option<StudentResult>>;
    // 修改成绩分数（等级随分数重新推导）
    async fn update_result_score(
        &self,
        id: i64,
        score: f64,
        grade: &str,
    ) -> Result<Option<StudentResult>>;
    // 某学生的全部成绩（带课程信息，按学年学期倒序）
    async fn list_student_results(&self, student_id: i64) -> Result<Vec<ResultRow>>;
    // 统计成绩数量
    async fn count_results(&self) -> Result<i64>;

    /// 反馈管理方法
    // 提交反馈
    async fn create_feedback(
        &self,
        student_id: i64,
        feedback: SubmitFeedbackRequest,
    ) -> Result<Feedback>;
    // 查找某学生对某讲师某课程某学期的反馈
    async fn find_feedback(
        &self,
        student_id: i64,
        course_id: i64,
        lecturer_id: i64,
        semester: i32,
    ) -> Result<Option<Feedback>>;
    // 某讲师收到的全部反馈（匿名化，带课程信息）
    async fn list_lecturer_feedbacks(&self, lecturer_id: i64) -> Result<Vec<FeedbackRow>>;
    // 全量反馈明细（管理员视角，带学生与讲师姓名）
    async fn list_feedback_details(&self, limit: Option<u64>) -> Result<Vec<FeedbackDetailRow>>;
    // 统计反馈数量
    async fn count_feedbacks(&self) -> Result<i64>;

    /// 讲师视角的学生名单（选修其课程的学生）
    async fn list_lecturer_students(&self, lecturer_id: i64) -> Result<Vec<LecturerStudent>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
