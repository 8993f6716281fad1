use serde::{Deserialize, Serialize};

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResult {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub score: f64,
    pub grade: String,
    pub session: String, // 学年，如 "2023/2024"
    pub semester: i32,   // 学期：1 或 2
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 带课程信息的成绩行（JOIN courses）
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub id: i64,
    pub course_id: i64,
    pub course_code: String,
    pub course_title: String,
    pub unit: i32,
    pub score: f64,
    pub grade: String,
    pub session: String,
    pub semester: i32,
}
