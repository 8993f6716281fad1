use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    feedbacks::requests::SubmitFeedbackRequest,
};
use crate::utils::validate::{validate_rating, validate_semester};

pub async fn submit_feedback(
    service: &FeedbackService,
    feedback_data: SubmitFeedbackRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    // 评分范围检查
    if let Err(msg) = validate_rating(feedback_data.rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingOutOfRange, msg)));
    }

    // 学期取值检查
    if let Err(msg) = validate_semester(feedback_data.semester) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    // 课程必须存在
    match storage.get_course_by_id(feedback_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check course: {e}"),
                )),
            );
        }
    }

    // 讲师必须实际讲授该课程
    match storage
        .is_lecturer_assigned(feedback_data.course_id, feedback_data.lecturer_id)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Lecturer does not teach this course",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check assignment: {e}"),
                )),
            );
        }
    }

    // 同一学生对同一课程同一讲师同一学期只允许一条反馈
    match storage
        .find_feedback(
            student_id,
            feedback_data.course_id,
            feedback_data.lecturer_id,
            feedback_data.semester,
        )
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::FeedbackAlreadyExists,
                "Feedback already submitted for this course and semester",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check existing feedback: {e}"),
                )),
            );
        }
    }

    match storage.create_feedback(student_id, feedback_data).await {
        Ok(feedback) => {
            info!(
                "Feedback {} submitted for course {}",
                feedback.id, feedback.course_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success_empty("反馈提交成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to submit feedback: {e}"),
            )),
        ),
    }
}
