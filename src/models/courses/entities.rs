use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub unit: i32,
    pub department_id: i64,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 带院系名称的课程（列表查询 JOIN 结果）
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithDepartment {
    #[serde(flatten)]
    pub course: Course,
    pub department_name: String,
}
