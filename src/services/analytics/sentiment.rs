use actix_web::{HttpResponse, Result as ActixResult};

use crate::analytics::sentiment::ANALYZER;
use crate::models::analytics::{
    requests::{BatchSentimentRequest, SentimentRequest},
    responses::{BatchSentimentResponse, SentimentResponse},
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn analyze(sentiment_request: SentimentRequest) -> ActixResult<HttpResponse> {
    let result = ANALYZER.analyze(&sentiment_request.text);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SentimentResponse { result },
        "Sentiment analysis completed successfully",
    )))
}

pub async fn analyze_batch(batch_request: BatchSentimentRequest) -> ActixResult<HttpResponse> {
    if batch_request.texts.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Text list is empty",
        )));
    }

    let results = ANALYZER.batch_analyze(&batch_request.texts);
    let summary = ANALYZER.summarize(&results);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BatchSentimentResponse { results, summary },
        "Batch sentiment analysis completed successfully",
    )))
}
