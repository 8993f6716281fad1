use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    departments::{requests::UpdateDepartmentRequest, responses::DepartmentResponse},
};

pub async fn update_department(
    service: &DepartmentService,
    department_id: i64,
    update_data: UpdateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if update_data.name.trim().is_empty() || update_data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Department name and code are required",
        )));
    }

    let storage = service.get_storage(request);

    // 代码唯一性检查（排除自身）
    match storage.get_department_by_code(&update_data.code).await {
        Ok(Some(existing)) if existing.id != department_id => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DepartmentCodeExists,
                "Department code already exists",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check department code: {e}"),
                )),
            );
        }
    }

    match storage.update_department(department_id, update_data).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentResponse { department },
            "Department updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update department: {e}"),
            )),
        ),
    }
}
