use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::departments::responses::DepartmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments().await {
        Ok(departments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentListResponse { departments },
            "Department list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve department list: {e}"),
            )),
        ),
    }
}
