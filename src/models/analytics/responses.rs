use serde::Serialize;

use crate::analytics::prediction::{BatchPredictionSummary, Prediction};
use crate::analytics::sentiment::{SentimentReport, SentimentSummary};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
}

#[derive(Debug, Serialize)]
pub struct BatchPredictResponse {
    pub predictions: Vec<Prediction>,
    pub summary: BatchPredictionSummary,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub result: SentimentReport,
}

#[derive(Debug, Serialize)]
pub struct BatchSentimentResponse {
    pub results: Vec<SentimentReport>,
    pub summary: SentimentSummary,
}

// 管理员仪表盘总览
#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub students: i64,
    pub lecturers: i64,
    pub courses: i64,
    pub results: i64,
    pub feedbacks: i64,
    pub recent_feedbacks: Vec<crate::models::feedbacks::entities::FeedbackDetailRow>,
}

#[derive(Debug, Serialize)]
pub struct AdminOverviewResponse {
    pub overview: AdminOverview,
}

// 讲师学生列表
#[derive(Debug, Clone, Serialize)]
pub struct LecturerStudent {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub course_count: i64,
}

#[derive(Debug, Serialize)]
pub struct LecturerStudentListResponse {
    pub students: Vec<LecturerStudent>,
}
