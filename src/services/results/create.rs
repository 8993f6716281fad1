use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ResultService;
use crate::models::{
    ApiResponse, ErrorCode,
    results::{requests::CreateResultRequest, responses::ResultResponse},
    users::entities::UserRole,
};
use crate::utils::grade::calculate_grade;
use crate::utils::validate::{validate_score, validate_semester, validate_session};

pub async fn create_result(
    service: &ResultService,
    result_data: CreateResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 分数范围检查
    if let Err(msg) = validate_score(result_data.score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScoreOutOfRange, msg)));
    }

    // 学年格式检查
    if let Err(msg) = validate_session(&result_data.session) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 学期取值检查
    if let Err(msg) = validate_semester(result_data.semester) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    // 学生必须存在且角色为学生
    match storage.get_user_by_id(result_data.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Target user is not a student",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check student: {e}"),
                )),
            );
        }
    }

    // 课程必须存在
    match storage.get_course_by_id(result_data.course_id).await {
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

    // 同一学生同一课程同一学期只允许一条成绩
    match storage
        .find_result(
            result_data.student_id,
            result_data.course_id,
            &result_data.session,
            result_data.semester,
        )
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ResultAlreadyExists,
                "Result already exists for this student, course and semester",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check existing result: {e}"),
                )),
            );
        }
    }

    // 等级由分数推导
    let grade = calculate_grade(result_data.score);

    match storage.create_result(result_data, grade).await {
        Ok(result) => {
            info!(
                "Result recorded for student {} in course {}",
                result.student_id, result.course_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(ResultResponse { result }, "成绩录入成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to record result: {e}"),
            )),
        ),
    }
}
