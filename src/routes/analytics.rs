use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::analytics::requests::{
    BatchPredictRequest, BatchSentimentRequest, PredictRequest, SentimentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AnalyticsService;

// 懒加载的全局 AnalyticsService 实例
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

pub async fn predict(predict_data: web::Json<PredictRequest>) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.predict(predict_data.into_inner()).await
}

pub async fn predict_batch(
    batch_data: web::Json<BatchPredictRequest>,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .predict_batch(batch_data.into_inner())
        .await
}

pub async fn sentiment(sentiment_data: web::Json<SentimentRequest>) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .sentiment(sentiment_data.into_inner())
        .await
}

pub async fn sentiment_batch(
    batch_data: web::Json<BatchSentimentRequest>,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .sentiment_batch(batch_data.into_inner())
        .await
}

// 配置路由
pub fn configure_analytics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/analytics")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
                    .wrap(middlewares::RateLimit::predict())
                    .route("/predict", web::post().to(predict))
                    .route("/predict/batch", web::post().to(predict_batch))
                    .route("/sentiment", web::post().to(sentiment))
                    .route("/sentiment/batch", web::post().to(sentiment_batch)),
            ),
    );
}
