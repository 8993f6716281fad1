//! 教学分析模块
//!
//! 包含两个纯计算组件：
//! - sentiment: 基于关键词的反馈情感分析
//! - prediction: 基于线性回归的学业表现预测
//!
//! 两者都不依赖存储层，services 层负责取数后调用。

pub mod prediction;
pub mod sentiment;
