use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LecturerService;
use crate::analytics::sentiment::ANALYZER;
use crate::middlewares::RequireJWT;
use crate::models::feedbacks::{
    entities::FeedbackRow,
    responses::{CourseFeedbackAnalytics, LecturerFeedbackAnalytics, LecturerFeedbackResponse},
};
use crate::models::{ApiResponse, ErrorCode};

const RECENT_FEEDBACK_LIMIT: usize = 10;

pub async fn my_feedback(
    service: &LecturerService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(lecturer_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_lecturer_feedbacks(lecturer_id).await {
        Ok(rows) => {
            let analytics = build_analytics(rows);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                LecturerFeedbackResponse { analytics },
                "Feedback retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve feedback: {e}"),
            )),
        ),
    }
}

/// 汇总讲师收到的全部反馈：整体与分课程的均分和情感分布
fn build_analytics(rows: Vec<FeedbackRow>) -> LecturerFeedbackAnalytics {
    let total_feedbacks = rows.len() as i64;

    let average_rating = if rows.is_empty() {
        0.0
    } else {
        round2(rows.iter().map(|r| r.rating as f64).sum::<f64>() / rows.len() as f64)
    };

    let entries: Vec<(i32, String)> = rows
        .iter()
        .map(|r| (r.rating, r.comment.clone().unwrap_or_default()))
        .collect();
    let sentiment = ANALYZER.rating_breakdown(&entries);

    // 按课程分组（BTreeMap 保证输出顺序稳定）
    let mut per_course: BTreeMap<i64, Vec<&FeedbackRow>> = BTreeMap::new();
    for row in &rows {
        per_course.entry(row.course_id).or_default().push(row);
    }

    let courses: Vec<CourseFeedbackAnalytics> = per_course
        .into_values()
        .map(|course_rows| {
            let first = course_rows[0];
            let course_entries: Vec<(i32, String)> = course_rows
                .iter()
                .map(|r| (r.rating, r.comment.clone().unwrap_or_default()))
                .collect();
            CourseFeedbackAnalytics {
                course_id: first.course_id,
                course_code: first.course_code.clone(),
                course_title: first.course_title.clone(),
                unit: first.unit,
                total_feedbacks: course_rows.len() as i64,
                average_rating: round2(
                    course_rows.iter().map(|r| r.rating as f64).sum::<f64>()
                        / course_rows.len() as f64,
                ),
                sentiment: ANALYZER.rating_breakdown(&course_entries),
            }
        })
        .collect();

    // 行已按时间倒序排列
    let recent_feedbacks: Vec<FeedbackRow> =
        rows.into_iter().take(RECENT_FEEDBACK_LIMIT).collect();

    LecturerFeedbackAnalytics {
        total_feedbacks,
        average_rating,
        total_courses: courses.len() as i64,
        sentiment,
        courses,
        recent_feedbacks,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(course_id: i64, rating: i32, comment: &str) -> FeedbackRow {
        FeedbackRow {
            id: 1,
            course_id,
            course_code: format!("CSC10{course_id}"),
            course_title: "Course".to_string(),
            unit: 3,
            rating,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
            semester: 1,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_build_analytics_empty() {
        let analytics = build_analytics(Vec::new());
        assert_eq!(analytics.total_feedbacks, 0);
        assert_eq!(analytics.average_rating, 0.0);
        assert!(analytics.courses.is_empty());
    }

    #[test]
    fn test_build_analytics_groups_by_course() {
        let rows = vec![
            row(1, 5, "excellent lecture"),
            row(1, 4, "good"),
            row(2, 2, "confusing and boring"),
        ];

        let analytics = build_analytics(rows);
        assert_eq!(analytics.total_feedbacks, 3);
        assert_eq!(analytics.total_courses, 2);
        assert_eq!(analytics.average_rating, 3.67);
        assert_eq!(analytics.courses[0].total_feedbacks, 2);
        assert_eq!(analytics.courses[0].average_rating, 4.5);
        assert_eq!(analytics.sentiment.positive, 2);
        assert_eq!(analytics.sentiment.negative, 1);
    }
}
