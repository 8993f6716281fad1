use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::analytics::sentiment::ANALYZER;
use crate::models::feedbacks::responses::{AdminFeedbackAnalytics, AdminFeedbackResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn all_feedback(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_feedback_details(None).await {
        Ok(feedbacks) => {
            let total_feedbacks = feedbacks.len() as i64;
            let average_rating = if feedbacks.is_empty() {
                0.0
            } else {
                let sum: f64 = feedbacks.iter().map(|f| f.rating as f64).sum();
                ((sum / feedbacks.len() as f64) * 100.0).round() / 100.0
            };

            let entries: Vec<(i32, String)> = feedbacks
                .iter()
                .map(|f| (f.rating, f.comment.clone().unwrap_or_default()))
                .collect();
            let sentiment = ANALYZER.rating_breakdown(&entries);

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AdminFeedbackResponse {
                    feedbacks,
                    analytics: AdminFeedbackAnalytics {
                        total_feedbacks,
                        average_rating,
                        sentiment,
                    },
                },
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
