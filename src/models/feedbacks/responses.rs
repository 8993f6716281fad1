use serde::Serialize;

use super::entities::{FeedbackDetailRow, FeedbackRow};
use crate::analytics::sentiment::SentimentBreakdown;

// 单门课程的反馈分析
#[derive(Debug, Serialize)]
pub struct CourseFeedbackAnalytics {
    pub course_id: i64,
    pub course_code: String,
    pub course_title: String,
    pub unit: i32,
    pub total_feedbacks: i64,
    pub average_rating: f64,
    pub sentiment: SentimentBreakdown,
}

// 讲师反馈总览
#[derive(Debug, Serialize)]
pub struct LecturerFeedbackAnalytics {
    pub total_feedbacks: i64,
    pub average_rating: f64,
    pub total_courses: i64,
    pub sentiment: SentimentBreakdown,
    pub courses: Vec<CourseFeedbackAnalytics>,
    pub recent_feedbacks: Vec<FeedbackRow>,
}

#[derive(Debug, Serialize)]
pub struct LecturerFeedbackResponse {
    pub analytics: LecturerFeedbackAnalytics,
}

// 管理员全量反馈视图
#[derive(Debug, Serialize)]
pub struct AdminFeedbackAnalytics {
    pub total_feedbacks: i64,
    pub average_rating: f64,
    pub sentiment: SentimentBreakdown,
}

#[derive(Debug, Serialize)]
pub struct AdminFeedbackResponse {
    pub feedbacks: Vec<FeedbackDetailRow>,
    pub analytics: AdminFeedbackAnalytics,
}
