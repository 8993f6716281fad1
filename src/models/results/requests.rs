use serde::Deserialize;

// 录入成绩请求（管理员/讲师）
#[derive(Debug, Deserialize)]
pub struct CreateResultRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub score: f64,
    pub session: String,
    pub semester: i32,
}

// 修改成绩请求：只允许改分数，等级重新推导
#[derive(Debug, Deserialize)]
pub struct UpdateResultRequest {
    pub result_id: i64,
    pub score: f64,
}
