use actix_web::{HttpResponse, Result as ActixResult};
use tracing::warn;

use crate::analytics::prediction::PREDICTOR;
use crate::models::analytics::{
    requests::{BatchPredictRequest, PredictRequest},
    responses::{BatchPredictResponse, PredictResponse},
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn predict(predict_request: PredictRequest) -> ActixResult<HttpResponse> {
    match PREDICTOR.predict(&predict_request.features) {
        Ok(prediction) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PredictResponse { prediction },
            "Prediction completed successfully",
        ))),
        Err(e) => {
            warn!("Prediction rejected: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::PredictionFailed,
                format!("Prediction failed: {e}"),
            )))
        }
    }
}

pub async fn predict_batch(batch_request: BatchPredictRequest) -> ActixResult<HttpResponse> {
    if batch_request.students.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Student list is empty",
        )));
    }

    match PREDICTOR.batch_predict(&batch_request.students) {
        Ok(predictions) => {
            let summary = PREDICTOR.summarize(&predictions);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                BatchPredictResponse {
                    predictions,
                    summary,
                },
                "Batch prediction completed successfully",
            )))
        }
        Err(e) => {
            warn!("Batch prediction rejected: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::PredictionFailed,
                format!("Prediction failed: {e}"),
            )))
        }
    }
}
