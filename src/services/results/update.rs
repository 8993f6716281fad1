use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::{
    ApiResponse, ErrorCode,
    results::{requests::UpdateResultRequest, responses::ResultResponse},
};
use crate::utils::grade::calculate_grade;
use crate::utils::validate::validate_score;

pub async fn update_result(
    service: &ResultService,
    update_data: UpdateResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_score(update_data.score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScoreOutOfRange, msg)));
    }

    let storage = service.get_storage(request);

    // 等级随新分数重新推导
    let grade = calculate_grade(update_data.score);

    match storage
        .update_result_score(update_data.result_id, update_data.score, grade)
        .await
    {
        Ok(Some(result)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ResultResponse { result },
            "Result updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ResultNotFound,
            "Result not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update result: {e}"),
            )),
        ),
    }
}
