pub mod predict;
pub mod sentiment;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::analytics::requests::{
    BatchPredictRequest, BatchSentimentRequest, PredictRequest, SentimentRequest,
};

/// 纯计算服务：预测模型与情感分析器都是进程内单例，不访问存储
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 单个学生成绩预测
    pub async fn predict(&self, predict_request: PredictRequest) -> ActixResult<HttpResponse> {
        predict::predict(predict_request).await
    }

    // 批量成绩预测
    pub async fn predict_batch(
        &self,
        batch_request: BatchPredictRequest,
    ) -> ActixResult<HttpResponse> {
        predict::predict_batch(batch_request).await
    }

    // 文本情感分析
    pub async fn sentiment(&self, sentiment_request: SentimentRequest) -> ActixResult<HttpResponse> {
        sentiment::analyze(sentiment_request).await
    }

    // 批量文本情感分析
    pub async fn sentiment_batch(
        &self,
        batch_request: BatchSentimentRequest,
    ) -> ActixResult<HttpResponse> {
        sentiment::analyze_batch(batch_request).await
    }
}
