use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, group_by_semester};
use crate::middlewares::RequireJWT;
use crate::models::results::responses::StudentResultsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn my_results(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_student_results(student_id).await {
        Ok(rows) => {
            let results = group_by_semester(rows);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentResultsResponse { results },
                "Results retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve results: {e}"),
            )),
        ),
    }
}
