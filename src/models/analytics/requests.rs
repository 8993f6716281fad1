use serde::Deserialize;

use crate::analytics::prediction::StudentFeatures;

// 单个学生的预测请求
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(flatten)]
    pub features: StudentFeatures,
}

// 批量预测请求
#[derive(Debug, Deserialize)]
pub struct BatchPredictRequest {
    pub students: Vec<StudentFeatures>,
}

// 文本情感分析请求
#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

// 批量文本情感分析请求
#[derive(Debug, Deserialize)]
pub struct BatchSentimentRequest {
    pub texts: Vec<String>,
}
