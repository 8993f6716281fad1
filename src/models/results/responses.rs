use serde::Serialize;

use super::entities::{ResultRow, StudentResult};

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: StudentResult,
}

// 按学年+学期分组的成绩
#[derive(Debug, Serialize)]
pub struct SemesterGroup {
    pub session: String,
    pub semester: i32,
    pub courses: Vec<ResultRow>,
}

#[derive(Debug, Serialize)]
pub struct StudentResultsResponse {
    pub results: Vec<SemesterGroup>,
}

// 成绩单：分组成绩 + 学期均分与学分
#[derive(Debug, Serialize)]
pub struct TranscriptSemester {
    pub session: String,
    pub semester: i32,
    pub courses: Vec<ResultRow>,
    pub semester_credits: i64,
    pub semester_gpa: f64,
}

#[derive(Debug, Serialize)]
pub struct TranscriptStudent {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptSummary {
    pub total_credits: i64,
    pub completed_courses: i64,
    pub overall_gpa: f64, // 原系统口径：0-100 分制均分
    pub total_semesters: i64,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub student: TranscriptStudent,
    pub summary: TranscriptSummary,
    pub results: Vec<TranscriptSemester>,
}
