use serde::Deserialize;

// 提交反馈请求（学生）
#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub course_id: i64,
    pub lecturer_id: i64,
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub semester: i32,
}
