use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    departments::{requests::CreateDepartmentRequest, responses::DepartmentResponse},
};

pub async fn create_department(
    service: &DepartmentService,
    department_data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if department_data.name.trim().is_empty() || department_data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Department name and code are required",
        )));
    }

    let storage = service.get_storage(request);

    // 院系代码唯一性检查
    match storage.get_department_by_code(&department_data.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DepartmentCodeExists,
                "Department code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check department code: {e}"),
                )),
            );
        }
    }

    match storage.create_department(department_data).await {
        Ok(department) => Ok(HttpResponse::Created().json(ApiResponse::success(
            DepartmentResponse { department },
            "院系创建成功",
        ))),
        Err(e) => {
            error!("Department creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Department creation failed: {e}"),
                )),
            )
        }
    }
}
