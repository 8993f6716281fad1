use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::AssignLecturerRequest,
    users::entities::UserRole,
};

pub async fn assign_lecturer(
    service: &CourseService,
    course_id: i64,
    assign_data: AssignLecturerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课程必须存在
    match storage.get_course_by_id(course_id).await {
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

    // 被指派的用户必须是讲师
    match storage.get_user_by_id(assign_data.lecturer_id).await {
        Ok(Some(user)) if user.role == UserRole::Lecturer => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Assigned user is not a lecturer",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Lecturer not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check lecturer: {e}"),
                )),
            );
        }
    }

    // 重复指派检查
    match storage
        .is_lecturer_assigned(course_id, assign_data.lecturer_id)
        .await
    {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::LecturerAlreadyAssigned,
                "Lecturer is already assigned to this course",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check assignment: {e}"),
                )),
            );
        }
    }

    match storage
        .assign_lecturer(course_id, assign_data.lecturer_id)
        .await
    {
        Ok(()) => {
            info!(
                "Lecturer {} assigned to course {}",
                assign_data.lecturer_id, course_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success_empty("Lecturer assigned successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to assign lecturer: {e}"),
            )),
        ),
    }
}
