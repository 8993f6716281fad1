use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LecturerService;
use crate::middlewares::RequireJWT;
use crate::models::analytics::responses::LecturerStudentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn my_students(
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

    match storage.list_lecturer_students(lecturer_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LecturerStudentListResponse { students },
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
