//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod departments;
mod feedbacks;
mod results;
mod users;

use crate::config::AppConfig;
use crate::errors::{IntellGradeError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| IntellGradeError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| IntellGradeError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| IntellGradeError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| IntellGradeError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(IntellGradeError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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

use crate::models::analytics::responses::LecturerStudent;
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<i64> {
        self.count_users_by_role_impl(role).await
    }

    async fn list_students(&self) -> Result<Vec<StudentEntry>> {
        self.list_students_impl().await
    }

    // 院系模块
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_by_code(&self, code: &str) -> Result<Option<Department>> {
        self.get_department_by_code_impl(code).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    async fn count_department_courses(&self, department_id: i64) -> Result<i64> {
        self.count_department_courses_impl(department_id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn count_courses(&self) -> Result<i64> {
        self.count_courses_impl().await
    }

    async fn assign_lecturer(&self, course_id: i64, lecturer_id: i64) -> Result<()> {
        self.assign_lecturer_impl(course_id, lecturer_id).await
    }

    async fn is_lecturer_assigned(&self, course_id: i64, lecturer_id: i64) -> Result<bool> {
        self.is_lecturer_assigned_impl(course_id, lecturer_id).await
    }

    async fn list_feedback_courses(&self) -> Result<Vec<FeedbackCourse>> {
        self.list_feedback_courses_impl().await
    }

    async fn list_lecturer_courses(&self, lecturer_id: i64) -> Result<Vec<LecturerCourse>> {
        self.list_lecturer_courses_impl(lecturer_id).await
    }

    // 成绩模块
    async fn create_result(
        &self,
        result: CreateResultRequest,
        grade: &str,
    ) -> Result<StudentResult> {
        self.create_result_impl(result, grade).await
    }

    async fn find_result(
        &self,
        student_id: i64,
        course_id: i64,
        session: &str,
        semester: i32,
    ) -> Result<Option<StudentResult>> {
        self.find_result_impl(student_id, course_id, session, semester)
            .await
    }

    async fn update_result_score(
        &self,
        id: i64,
        score: f64,
        grade: &str,
    ) -> Result<Option<StudentResult>> {
        self.update_result_score_impl(id, score, grade).await
    }

    async fn list_student_results(&self, student_id: i64) -> Result<Vec<ResultRow>> {
        self.list_student_results_impl(student_id).await
    }

    async fn count_results(&self) -> Result<i64> {
        self.count_results_impl().await
    }

    // 反馈模块
    async fn create_feedback(
        &self,
        student_id: i64,
        feedback: SubmitFeedbackRequest,
    ) -> Result<Feedback> {
        self.create_feedback_impl(student_id, feedback).await
    }

    async fn find_feedback(
        &self,
        student_id: i64,
        course_id: i64,
        lecturer_id: i64,
        semester: i32,
    ) -> Result<Option<Feedback>> {
        self.find_feedback_impl(student_id, course_id, lecturer_id, semester)
            .await
    }

    async fn list_lecturer_feedbacks(&self, lecturer_id: i64) -> Result<Vec<FeedbackRow>> {
        self.list_lecturer_feedbacks_impl(lecturer_id).await
    }

    async fn list_feedback_details(&self, limit: Option<u64>) -> Result<Vec<FeedbackDetailRow>> {
        self.list_feedback_details_impl(limit).await
    }

    async fn count_feedbacks(&self) -> Result<i64> {
        self.count_feedbacks_impl().await
    }

    async fn list_lecturer_students(&self, lecturer_id: i64) -> Result<Vec<LecturerStudent>> {
        self.list_lecturer_students_impl(lecturer_id).await
    }
}
