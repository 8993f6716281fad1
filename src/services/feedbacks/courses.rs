use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::models::courses::responses::FeedbackCourseListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_feedback_courses(
    service: &FeedbackService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_feedback_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeedbackCourseListResponse { courses },
            "Feedback courses retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve feedback courses: {e}"),
            )),
        ),
    }
}
