use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LecturerService;
use crate::middlewares::RequireJWT;
use crate::models::courses::responses::LecturerCourseListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn my_courses(
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

    match storage.list_lecturer_courses(lecturer_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LecturerCourseListResponse { courses },
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course list: {e}"),
            )),
        ),
    }
}
