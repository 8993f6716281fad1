//! 基于线性回归的学业表现预测
//!
//! 在首次使用时用固定随机种子生成的合成数据训练一个最小二乘回归模型，
//! 特征标准化后经正规方程求解。预测结果附带置信度、风险等级与改进建议。

use once_cell::sync::Lazy;
use rand::prelude::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{IntellGradeError, Result};

/// 特征名称，与请求字段一一对应
pub const FEATURE_NAMES: [&str; 8] = [
    "previous_gpa",
    "attendance_rate",
    "assignment_completion",
    "midterm_score",
    "course_difficulty",
    "study_hours_per_week",
    "previous_course_performance",
    "department_average",
];

const FEATURE_COUNT: usize = 8;
const TRAINING_SAMPLES: usize = 1000;
const TRAINING_SEED: u64 = 42;
const TEST_FRACTION: f64 = 0.2;

/// 单个学生的预测输入特征
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentFeatures {
    pub previous_gpa: f64,
    pub attendance_rate: f64,
    pub assignment_completion: f64,
    pub midterm_score: f64,
    pub course_difficulty: f64,
    pub study_hours_per_week: f64,
    pub previous_course_performance: f64,
    pub department_average: f64,
}

impl StudentFeatures {
    /// 按 FEATURE_NAMES 顺序展开为向量
    fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.previous_gpa,
            self.attendance_rate,
            self.assignment_completion,
            self.midterm_score,
            self.course_difficulty,
            self.study_hours_per_week,
            self.previous_course_performance,
            self.department_average,
        ]
    }

    /// 校验特征取值范围
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        let vector = self.to_vector();
        if vector.iter().any(|v| !v.is_finite()) {
            return Err("All features must be finite numbers");
        }
        if !(0.0..=5.0).contains(&self.previous_gpa) {
            return Err("previous_gpa must be between 0 and 5");
        }
        if !(0.0..=1.0).contains(&self.attendance_rate) {
            return Err("attendance_rate must be between 0 and 1");
        }
        if !(0.0..=1.0).contains(&self.assignment_completion) {
            return Err("assignment_completion must be between 0 and 1");
        }
        if !(0.0..=100.0).contains(&self.midterm_score) {
            return Err("midterm_score must be between 0 and 100");
        }
        if !(1.0..=5.0).contains(&self.course_difficulty) {
            return Err("course_difficulty must be between 1 and 5");
        }
        if !(0.0..=100.0).contains(&self.study_hours_per_week) {
            return Err("study_hours_per_week must be between 0 and 100");
        }
        if !(0.0..=100.0).contains(&self.previous_course_performance) {
            return Err("previous_course_performance must be between 0 and 100");
        }
        if !(0.0..=100.0).contains(&self.department_average) {
            return Err("department_average must be between 0 and 100");
        }
        Ok(())
    }
}

/// 风险等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// 单个学生的预测结果
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub prediction: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub feature_importance: BTreeMap<String, f64>,
}

/// 模型训练指标
#[derive(Debug, Clone, Serialize)]
pub struct ModelPerformance {
    pub train_r2: f64,
    pub test_r2: f64,
    pub sample_size: usize,
}

/// 批量预测汇总
#[derive(Debug, Clone, Serialize)]
pub struct BatchPredictionSummary {
    pub total_students: usize,
    pub average_predicted_score: f64,
    pub min_predicted_score: f64,
    pub max_predicted_score: f64,
    pub std_predicted_score: f64,
    pub risk_distribution: BTreeMap<String, usize>,
    pub recommendations_summary: Vec<String>,
}

/// 线性回归预测器
///
/// weights[0] 为截距项，其余与 FEATURE_NAMES 顺序对应。
pub struct PerformancePredictor {
    weights: [f64; FEATURE_COUNT + 1],
    scaler_mean: [f64; FEATURE_COUNT],
    scaler_std: [f64; FEATURE_COUNT],
    performance: ModelPerformance,
}

/// 全局预测器实例，首次访问时完成训练
pub static PREDICTOR: Lazy<PerformancePredictor> = Lazy::new(PerformancePredictor::train);

impl PerformancePredictor {
    /// 用合成数据训练模型
    fn train() -> Self {
        let (samples, targets) = generate_training_data();

        // 80/20 划分训练集与测试集
        let test_size = (TRAINING_SAMPLES as f64 * TEST_FRACTION) as usize;
        let train_size = TRAINING_SAMPLES - test_size;
        let (train_x, test_x) = samples.split_at(train_size);
        let (train_y, test_y) = targets.split_at(train_size);

        // 基于训练集统计量做标准化
        let (scaler_mean, scaler_std) = fit_scaler(train_x);
        let train_scaled: Vec<[f64; FEATURE_COUNT]> = train_x
            .iter()
            .map(|x| scale(x, &scaler_mean, &scaler_std))
            .collect();
        let test_scaled: Vec<[f64; FEATURE_COUNT]> = test_x
            .iter()
            .map(|x| scale(x, &scaler_mean, &scaler_std))
            .collect();

        let weights = fit_ols(&train_scaled, train_y);

        let performance = ModelPerformance {
            train_r2: r_squared(&weights, &train_scaled, train_y),
            test_r2: r_squared(&weights, &test_scaled, test_y),
            sample_size: TRAINING_SAMPLES,
        };

        Self {
            weights,
            scaler_mean,
            scaler_std,
            performance,
        }
    }

    pub fn performance(&self) -> &ModelPerformance {
        &self.performance
    }

    /// 预测单个学生的期末成绩
    pub fn predict(&self, features: &StudentFeatures) -> Result<Prediction> {
        features
            .validate()
            .map_err(IntellGradeError::prediction)?;

        let scaled = scale(&features.to_vector(), &self.scaler_mean, &self.scaler_std);
        let raw = predict_scaled(&self.weights, &scaled);
        let predicted_score = raw.clamp(0.0, 100.0);

        let confidence = calculate_confidence(features);
        let risk_level = determine_risk_level(predicted_score);
        let recommendations = generate_recommendations(features, predicted_score, risk_level);

        Ok(Prediction {
            prediction: round2(predicted_score),
            confidence,
            risk_level,
            recommendations,
            feature_importance: self.feature_importance(),
        })
    }

    /// 批量预测，单条失败即整体失败
    pub fn batch_predict(&self, students: &[StudentFeatures]) -> Result<Vec<Prediction>> {
        students.iter().map(|s| self.predict(s)).collect()
    }

    /// 汇总多条预测结果
    pub fn summarize(&self, predictions: &[Prediction]) -> BatchPredictionSummary {
        let mut risk_distribution: BTreeMap<String, usize> = BTreeMap::new();
        for risk in [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ] {
            risk_distribution.insert(risk.as_str().to_string(), 0);
        }

        if predictions.is_empty() {
            return BatchPredictionSummary {
                total_students: 0,
                average_predicted_score: 0.0,
                min_predicted_score: 0.0,
                max_predicted_score: 0.0,
                std_predicted_score: 0.0,
                risk_distribution,
                recommendations_summary: vec![],
            };
        }

        let scores: Vec<f64> = predictions.iter().map(|p| p.prediction).collect();
        let total = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / total;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / total;
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        for prediction in predictions {
            *risk_distribution
                .entry(prediction.risk_level.as_str().to_string())
                .or_insert(0) += 1;
        }

        // 统计出现最频繁的前 5 条建议
        let mut recommendation_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for prediction in predictions {
            for rec in &prediction.recommendations {
                *recommendation_counts.entry(rec.as_str()).or_insert(0) += 1;
            }
        }
        let mut ranked: Vec<(&str, usize)> = recommendation_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let recommendations_summary = ranked
            .into_iter()
            .take(5)
            .map(|(rec, _)| rec.to_string())
            .collect();

        BatchPredictionSummary {
            total_students: predictions.len(),
            average_predicted_score: round2(mean),
            min_predicted_score: round2(min),
            max_predicted_score: round2(max),
            std_predicted_score: round2(variance.sqrt()),
            risk_distribution,
            recommendations_summary,
        }
    }

    fn feature_importance(&self) -> BTreeMap<String, f64> {
        FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), round4(self.weights[i + 1])))
            .collect()
    }
}

/// 生成带相关性的合成训练数据
///
/// 固定种子保证每次训练得到同一个模型。
fn generate_training_data() -> (Vec<[f64; FEATURE_COUNT]>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(TRAINING_SEED);

    let gpa_dist: Normal<f64> = Normal::new(3.0, 0.8).expect("invalid normal params");
    let midterm_dist: Normal<f64> = Normal::new(75.0, 15.0).expect("invalid normal params");
    let study_dist: Normal<f64> = Normal::new(15.0, 8.0).expect("invalid normal params");
    let prev_course_dist: Normal<f64> = Normal::new(75.0, 15.0).expect("invalid normal params");
    let dept_dist: Normal<f64> = Normal::new(72.0, 8.0).expect("invalid normal params");
    let noise_dist: Normal<f64> = Normal::new(0.0, 8.0).expect("invalid normal params");

    // 课程难度按 1..=5 加权采样，3 为众数
    let difficulties = [1.0, 2.0, 3.0, 4.0, 5.0];
    let difficulty_weights = [0.1, 0.2, 0.4, 0.2, 0.1];

    let mut samples = Vec::with_capacity(TRAINING_SAMPLES);
    let mut targets = Vec::with_capacity(TRAINING_SAMPLES);

    for _ in 0..TRAINING_SAMPLES {
        let previous_gpa = gpa_dist.sample(&mut rng).clamp(1.0, 4.0);
        let attendance_rate = rng.random_range(0.6..1.0);
        let assignment_completion = rng.random_range(0.5..1.0);
        let midterm_score = midterm_dist.sample(&mut rng).clamp(0.0, 100.0);
        let course_difficulty = *difficulties
            .choose_weighted(&mut rng, |d| {
                difficulty_weights[(*d as usize).saturating_sub(1)]
            })
            .expect("invalid difficulty weights");
        let study_hours = study_dist.sample(&mut rng).clamp(0.0, 40.0);
        let previous_course = prev_course_dist.sample(&mut rng).clamp(0.0, 100.0);
        let department_average = dept_dist.sample(&mut rng).clamp(60.0, 85.0);

        let final_score = (previous_gpa * 15.0
            + attendance_rate * 20.0
            + assignment_completion * 15.0
            + midterm_score * 0.3
            + (6.0 - course_difficulty) * 5.0
            + study_hours * 0.5
            + previous_course * 0.2
            + noise_dist.sample(&mut rng))
        .clamp(0.0, 100.0);

        samples.push([
            previous_gpa,
            attendance_rate,
            assignment_completion,
            midterm_score,
            course_difficulty,
            study_hours,
            previous_course,
            department_average,
        ]);
        targets.push(final_score);
    }

    (samples, targets)
}

/// 计算每个特征的均值与标准差
fn fit_scaler(samples: &[[f64; FEATURE_COUNT]]) -> ([f64; FEATURE_COUNT], [f64; FEATURE_COUNT]) {
    let n = samples.len() as f64;
    let mut mean = [0.0; FEATURE_COUNT];
    let mut std = [0.0; FEATURE_COUNT];

    for sample in samples {
        for (i, value) in sample.iter().enumerate() {
            mean[i] += value;
        }
    }
    for m in mean.iter_mut() {
        *m /= n;
    }

    for sample in samples {
        for (i, value) in sample.iter().enumerate() {
            std[i] += (value - mean[i]).powi(2);
        }
    }
    for s in std.iter_mut() {
        *s = (*s / n).sqrt();
        // 常量特征不做缩放
        if *s < f64::EPSILON {
            *s = 1.0;
        }
    }

    (mean, std)
}

fn scale(
    sample: &[f64; FEATURE_COUNT],
    mean: &[f64; FEATURE_COUNT],
    std: &[f64; FEATURE_COUNT],
) -> [f64; FEATURE_COUNT] {
    let mut scaled = [0.0; FEATURE_COUNT];
    for i in 0..FEATURE_COUNT {
        scaled[i] = (sample[i] - mean[i]) / std[i];
    }
    scaled
}

/// 通过正规方程 XᵀXw = Xᵀy 求解最小二乘，带截距项
fn fit_ols(samples: &[[f64; FEATURE_COUNT]], targets: &[f64]) -> [f64; FEATURE_COUNT + 1] {
    const DIM: usize = FEATURE_COUNT + 1;
    let mut xtx = [[0.0f64; DIM]; DIM];
    let mut xty = [0.0f64; DIM];

    for (sample, y) in samples.iter().zip(targets) {
        let mut row = [1.0f64; DIM];
        row[1..].copy_from_slice(sample);
        for i in 0..DIM {
            xty[i] += row[i] * y;
            for j in 0..DIM {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }

    solve_linear_system(xtx, xty)
}

/// 带部分主元选取的高斯消元
fn solve_linear_system<const N: usize>(mut a: [[f64; N]; N], mut b: [f64; N]) -> [f64; N] {
    for col in 0..N {
        // 选取绝对值最大的主元行
        let mut pivot = col;
        for row in (col + 1)..N {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        let diag = a[col][col];
        if diag.abs() < f64::EPSILON {
            continue;
        }

        for row in (col + 1)..N {
            let factor = a[row][col] / diag;
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; N];
    for row in (0..N).rev() {
        let mut sum = b[row];
        for col in (row + 1)..N {
            sum -= a[row][col] * x[col];
        }
        if a[row][row].abs() < f64::EPSILON {
            x[row] = 0.0;
        } else {
            x[row] = sum / a[row][row];
        }
    }
    x
}

fn predict_scaled(weights: &[f64; FEATURE_COUNT + 1], scaled: &[f64; FEATURE_COUNT]) -> f64 {
    let mut value = weights[0];
    for i in 0..FEATURE_COUNT {
        value += weights[i + 1] * scaled[i];
    }
    value
}

/// 决定系数 R²
fn r_squared(
    weights: &[f64; FEATURE_COUNT + 1],
    samples: &[[f64; FEATURE_COUNT]],
    targets: &[f64],
) -> f64 {
    let n = targets.len() as f64;
    let mean = targets.iter().sum::<f64>() / n;
    let ss_tot: f64 = targets.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = samples
        .iter()
        .zip(targets)
        .map(|(x, y)| (y - predict_scaled(weights, x)).powi(2))
        .sum();
    if ss_tot < f64::EPSILON {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    }
}

/// 基础置信度 0.8，数据质量差时扣减，最终限制在 [0.3, 0.95]
fn calculate_confidence(features: &StudentFeatures) -> f64 {
    let mut confidence: f64 = 0.8;
    if features.attendance_rate < 0.5 {
        confidence -= 0.1;
    }
    if features.assignment_completion < 0.5 {
        confidence -= 0.1;
    }
    if features.study_hours_per_week < 5.0 {
        confidence -= 0.1;
    }
    if features.study_hours_per_week > 30.0 {
        confidence -= 0.05;
    }
    confidence.clamp(0.3, 0.95)
}

fn determine_risk_level(predicted_score: f64) -> RiskLevel {
    if predicted_score >= 80.0 {
        RiskLevel::Low
    } else if predicted_score >= 70.0 {
        RiskLevel::Medium
    } else if predicted_score >= 60.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// 根据特征与预测结果生成个性化建议
fn generate_recommendations(
    features: &StudentFeatures,
    predicted_score: f64,
    risk_level: RiskLevel,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if features.attendance_rate < 0.8 {
        recommendations.push("Increase class attendance to improve performance".to_string());
    }
    if features.assignment_completion < 0.8 {
        recommendations.push("Complete all assignments on time".to_string());
    }
    if features.study_hours_per_week < 15.0 {
        recommendations
            .push("Increase study hours to at least 15 hours per week".to_string());
    } else if features.study_hours_per_week > 25.0 {
        recommendations.push("Consider study efficiency - quality over quantity".to_string());
    }

    if predicted_score < 70.0 {
        recommendations.push("Seek additional academic support and tutoring".to_string());
        recommendations.push(
            "Meet with course instructor to discuss improvement strategies".to_string(),
        );
    }

    if matches!(risk_level, RiskLevel::High | RiskLevel::Critical) {
        recommendations.push(
            "Consider reducing course load or taking prerequisite courses".to_string(),
        );
        recommendations.push("Develop a detailed study schedule and stick to it".to_string());
    }

    recommendations
        .push("Participate actively in class discussions and group activities".to_string());
    recommendations.push("Form study groups with classmates".to_string());

    recommendations
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_student() -> StudentFeatures {
        StudentFeatures {
            previous_gpa: 3.8,
            attendance_rate: 0.95,
            assignment_completion: 1.0,
            midterm_score: 92.0,
            course_difficulty: 2.0,
            study_hours_per_week: 25.0,
            previous_course_performance: 88.0,
            department_average: 75.0,
        }
    }

    fn weak_student() -> StudentFeatures {
        StudentFeatures {
            previous_gpa: 1.5,
            attendance_rate: 0.45,
            assignment_completion: 0.4,
            midterm_score: 40.0,
            course_difficulty: 5.0,
            study_hours_per_week: 3.0,
            previous_course_performance: 45.0,
            department_average: 70.0,
        }
    }

    #[test]
    fn test_model_training_metrics() {
        let performance = PREDICTOR.performance();
        assert_eq!(performance.sample_size, 1000);
        // 线性组合的期望值在 130 分附近，目标分数在 100 分上限处饱和，
        // 可解释方差因此很小；只要求 R² 为正的有效值
        assert!(
            performance.train_r2 > 0.02 && performance.train_r2 < 1.0,
            "train_r2 = {}",
            performance.train_r2
        );
        assert!(
            performance.test_r2 > 0.02 && performance.test_r2 < 1.0,
            "test_r2 = {}",
            performance.test_r2
        );
    }

    #[test]
    fn test_training_targets_saturate_at_cap() {
        let (_, targets) = generate_training_data();
        let mean = targets.iter().sum::<f64>() / targets.len() as f64;
        assert!(mean > 95.0, "mean target = {mean}");
        assert!(targets.iter().all(|t| (0.0..=100.0).contains(t)));
    }

    #[test]
    fn test_prediction_in_valid_range() {
        let prediction = PREDICTOR.predict(&strong_student()).unwrap();
        assert!((0.0..=100.0).contains(&prediction.prediction));
        let prediction = PREDICTOR.predict(&weak_student()).unwrap();
        assert!((0.0..=100.0).contains(&prediction.prediction));
    }

    #[test]
    fn test_strong_student_outscores_weak_student() {
        let strong = PREDICTOR.predict(&strong_student()).unwrap();
        let weak = PREDICTOR.predict(&weak_student()).unwrap();
        assert!(strong.prediction > weak.prediction);
    }

    #[test]
    fn test_deterministic_predictions() {
        let a = PREDICTOR.predict(&strong_student()).unwrap();
        let b = PREDICTOR.predict(&strong_student()).unwrap();
        assert_eq!(a.prediction, b.prediction);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(determine_risk_level(85.0), RiskLevel::Low);
        assert_eq!(determine_risk_level(80.0), RiskLevel::Low);
        assert_eq!(determine_risk_level(75.0), RiskLevel::Medium);
        assert_eq!(determine_risk_level(65.0), RiskLevel::High);
        assert_eq!(determine_risk_level(59.9), RiskLevel::Critical);
    }

    #[test]
    fn test_confidence_deductions() {
        let mut features = strong_student();
        assert_eq!(calculate_confidence(&features), 0.8);

        features.attendance_rate = 0.4;
        features.assignment_completion = 0.3;
        features.study_hours_per_week = 2.0;
        // 0.8 - 0.1 - 0.1 - 0.1
        assert!((calculate_confidence(&features) - 0.5).abs() < 1e-9);

        features.study_hours_per_week = 35.0;
        // 0.8 - 0.1 - 0.1 - 0.05
        assert!((calculate_confidence(&features) - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_floor() {
        let features = StudentFeatures {
            attendance_rate: 0.1,
            assignment_completion: 0.1,
            study_hours_per_week: 0.0,
            ..weak_student()
        };
        assert!(calculate_confidence(&features) >= 0.3);
    }

    #[test]
    fn test_recommendations_for_weak_student() {
        let prediction = PREDICTOR.predict(&weak_student()).unwrap();
        let recs = &prediction.recommendations;
        assert!(recs.iter().any(|r| r.contains("attendance")));
        assert!(recs.iter().any(|r| r.contains("assignments")));
        assert!(recs.iter().any(|r| r.contains("study hours")));
        // 通用建议始终存在
        assert!(recs.iter().any(|r| r.contains("study groups")));
    }

    #[test]
    fn test_feature_validation() {
        let mut features = strong_student();
        features.attendance_rate = 1.5;
        assert!(features.validate().is_err());

        features = strong_student();
        features.midterm_score = f64::NAN;
        assert!(features.validate().is_err());

        assert!(strong_student().validate().is_ok());
    }

    #[test]
    fn test_invalid_features_rejected() {
        let mut features = strong_student();
        features.course_difficulty = 9.0;
        assert!(PREDICTOR.predict(&features).is_err());
    }

    #[test]
    fn test_batch_summary() {
        let predictions = PREDICTOR
            .batch_predict(&[strong_student(), weak_student()])
            .unwrap();
        let summary = PREDICTOR.summarize(&predictions);
        assert_eq!(summary.total_students, 2);
        assert!(summary.min_predicted_score <= summary.average_predicted_score);
        assert!(summary.average_predicted_score <= summary.max_predicted_score);
        let risk_total: usize = summary.risk_distribution.values().sum();
        assert_eq!(risk_total, 2);
        assert!(summary.recommendations_summary.len() <= 5);
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = PREDICTOR.summarize(&[]);
        assert_eq!(summary.total_students, 0);
        assert_eq!(summary.average_predicted_score, 0.0);
        assert!(summary.recommendations_summary.is_empty());
    }

    #[test]
    fn test_solve_linear_system() {
        // 2x + y = 5, x - y = 1 => x = 2, y = 1
        let a = [[2.0, 1.0], [1.0, -1.0]];
        let b = [5.0, 1.0];
        let x = solve_linear_system(a, b);
        assert!((x[0] - 2.0).abs() < 1e-9);
        assert!((x[1] - 1.0).abs() < 1e-9);
    }
}
