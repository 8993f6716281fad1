//! 基于关键词的反馈情感分析
//!
//! 针对教学评价场景维护正负关键词表，结合程度副词与否定词窗口
//! 计算情感得分，不依赖外部模型服务。

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

/// 教学评价场景的正面关键词
static POSITIVE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "excellent",
        "great",
        "good",
        "amazing",
        "wonderful",
        "fantastic",
        "outstanding",
        "brilliant",
        "superb",
        "perfect",
        "helpful",
        "clear",
        "understandable",
        "interesting",
        "engaging",
        "inspiring",
        "motivating",
        "supportive",
        "patient",
        "knowledgeable",
        "professional",
        "organized",
        "structured",
        "comprehensive",
        "thorough",
        "detailed",
        "practical",
        "useful",
        "valuable",
        "enjoyable",
        "fun",
        "exciting",
        "stimulating",
        "challenging",
        "rewarding",
        "satisfying",
        "fulfilling",
        "educational",
        "informative",
        "approachable",
        "friendly",
        "encouraging",
        "positive",
        "constructive",
        "effective",
        "efficient",
        "productive",
        "successful",
        "achievement",
        "improvement",
        "progress",
        "development",
        "growth",
        "learning",
        "understanding",
        "comprehension",
        "mastery",
    ]
    .into_iter()
    .collect()
});

/// 教学评价场景的负面关键词
static NEGATIVE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad",
        "poor",
        "terrible",
        "awful",
        "horrible",
        "dreadful",
        "disappointing",
        "frustrating",
        "confusing",
        "unclear",
        "difficult",
        "hard",
        "complex",
        "complicated",
        "boring",
        "dull",
        "monotonous",
        "repetitive",
        "tedious",
        "annoying",
        "irritating",
        "unhelpful",
        "useless",
        "pointless",
        "waste",
        "slow",
        "inefficient",
        "disorganized",
        "chaotic",
        "messy",
        "unstructured",
        "unprepared",
        "unprofessional",
        "rude",
        "unfriendly",
        "hostile",
        "aggressive",
        "intimidating",
        "threatening",
        "discouraging",
        "demotivating",
        "depressing",
        "stressful",
        "overwhelming",
        "exhausting",
        "tiring",
        "draining",
        "misleading",
        "inaccurate",
        "incorrect",
        "wrong",
        "false",
        "untrue",
        "incomplete",
        "partial",
        "superficial",
        "shallow",
        "basic",
        "elementary",
        "simple",
        "easy",
        "trivial",
        "insignificant",
        "unimportant",
        "irrelevant",
        "unnecessary",
        "redundant",
    ]
    .into_iter()
    .collect()
});

/// 程度副词，命中时放大关键词权重
static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "very",
        "extremely",
        "really",
        "quite",
        "rather",
        "somewhat",
        "slightly",
    ]
    .into_iter()
    .collect()
});

/// 否定词，关键词前 3 个 token 内出现时削减得分
static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "none", "neither", "nor", "hardly", "barely", "scarcely",
    ]
    .into_iter()
    .collect()
});

/// 否定词检测窗口（token 数）
const NEGATION_WINDOW: usize = 3;

/// 评分口径复判用的正面词干，按子串匹配评语
const RATING_POSITIVE_STEMS: [&str; 15] = [
    "excellent",
    "great",
    "good",
    "amazing",
    "wonderful",
    "fantastic",
    "outstanding",
    "perfect",
    "love",
    "enjoy",
    "helpful",
    "clear",
    "understand",
    "learn",
    "improve",
];

/// 评分口径复判用的负面词干
const RATING_NEGATIVE_STEMS: [&str; 14] = [
    "bad",
    "poor",
    "terrible",
    "awful",
    "horrible",
    "confusing",
    "difficult",
    "hard",
    "boring",
    "waste",
    "disappoint",
    "frustrate",
    "hate",
    "dislike",
];

/// 情感分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// 单条文本的分析结果
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport {
    pub sentiment: Sentiment,
    pub score: f64,
    pub confidence: f64,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    pub positive_score: f64,
    pub negative_score: f64,
    pub reasoning: String,
}

/// 批量分析的汇总统计
#[derive(Debug, Clone, Serialize)]
pub struct SentimentSummary {
    pub total_feedback: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    pub average_confidence: f64,
}

/// 按评分 + 评语混合口径的反馈情感分布
///
/// 评分 >= 4 记为正面、<= 2 记为负面、3 分按评语文本重新划分。
#[derive(Debug, Clone, Default, Serialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub total: usize,
    pub positive_percentage: f64,
    pub neutral_percentage: f64,
    pub negative_percentage: f64,
}

/// 关键词情感分析器
pub struct SentimentAnalyzer;

/// 全局分析器实例
pub static ANALYZER: Lazy<SentimentAnalyzer> = Lazy::new(|| SentimentAnalyzer);

impl SentimentAnalyzer {
    /// 分析单条文本
    pub fn analyze(&self, text: &str) -> SentimentReport {
        if text.trim().is_empty() {
            return SentimentReport {
                sentiment: Sentiment::Neutral,
                score: 0.0,
                confidence: 0.0,
                positive_words: vec![],
                negative_words: vec![],
                positive_score: 0.0,
                negative_score: 0.0,
                reasoning: "Empty or null text provided".to_string(),
            };
        }

        let tokens = tokenize(text);

        let positive_words = find_keywords(&tokens, &POSITIVE_KEYWORDS);
        let negative_words = find_keywords(&tokens, &NEGATIVE_KEYWORDS);

        let mut positive_score = weighted_score(&tokens, &POSITIVE_KEYWORDS);
        let mut negative_score = weighted_score(&tokens, &NEGATIVE_KEYWORDS);

        positive_score = apply_negation(&tokens, &POSITIVE_KEYWORDS, positive_score);
        negative_score = apply_negation(&tokens, &NEGATIVE_KEYWORDS, negative_score);

        let score = positive_score - negative_score;
        let (sentiment, confidence) =
            categorize(score, positive_words.len() + negative_words.len());
        let reasoning = build_reasoning(sentiment, &positive_words, &negative_words);

        SentimentReport {
            sentiment,
            score,
            confidence,
            positive_words,
            negative_words,
            positive_score,
            negative_score,
            reasoning,
        }
    }

    /// 批量分析
    pub fn batch_analyze(&self, texts: &[String]) -> Vec<SentimentReport> {
        texts.iter().map(|t| self.analyze(t)).collect()
    }

    /// 汇总多条分析结果
    pub fn summarize(&self, reports: &[SentimentReport]) -> SentimentSummary {
        let total = reports.len();
        if total == 0 {
            return SentimentSummary {
                total_feedback: 0,
                positive_count: 0,
                negative_count: 0,
                neutral_count: 0,
                positive_percentage: 0.0,
                negative_percentage: 0.0,
                neutral_percentage: 0.0,
                average_confidence: 0.0,
            };
        }

        let positive_count = reports
            .iter()
            .filter(|r| r.sentiment == Sentiment::Positive)
            .count();
        let negative_count = reports
            .iter()
            .filter(|r| r.sentiment == Sentiment::Negative)
            .count();
        let neutral_count = total - positive_count - negative_count;
        let average_confidence =
            reports.iter().map(|r| r.confidence).sum::<f64>() / total as f64;

        SentimentSummary {
            total_feedback: total,
            positive_count,
            negative_count,
            neutral_count,
            positive_percentage: percentage(positive_count, total),
            negative_percentage: percentage(negative_count, total),
            neutral_percentage: percentage(neutral_count, total),
            average_confidence,
        }
    }

    /// 评分 + 评语混合口径的情感分布
    ///
    /// entries 为 (rating, comment) 对。评分 3 分的反馈被视为中性，
    /// 但若评语按词干子串计数带有明显倾向则重新归类。
    pub fn rating_breakdown(&self, entries: &[(i32, String)]) -> SentimentBreakdown {
        let total = entries.len();
        if total == 0 {
            return SentimentBreakdown::default();
        }

        let mut positive = 0usize;
        let mut neutral = 0usize;
        let mut negative = 0usize;

        for (rating, comment) in entries {
            if *rating >= 4 {
                positive += 1;
            } else if *rating <= 2 {
                negative += 1;
            } else {
                let comment = comment.to_lowercase();
                let positive_hits = RATING_POSITIVE_STEMS
                    .iter()
                    .filter(|stem| comment.contains(*stem))
                    .count();
                let negative_hits = RATING_NEGATIVE_STEMS
                    .iter()
                    .filter(|stem| comment.contains(*stem))
                    .count();
                if positive_hits > negative_hits {
                    positive += 1;
                } else if negative_hits > positive_hits {
                    negative += 1;
                } else {
                    neutral += 1;
                }
            }
        }

        SentimentBreakdown {
            positive,
            neutral,
            negative,
            total,
            positive_percentage: percentage(positive, total),
            neutral_percentage: percentage(neutral, total),
            negative_percentage: percentage(negative, total),
        }
    }
}

/// 去掉标点（含连字符）后按空白切分，全部转小写
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

fn find_keywords(tokens: &[String], keywords: &HashSet<&'static str>) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| keywords.contains(t.as_str()))
        .cloned()
        .collect()
}

/// 关键词基础得分 1.0，前一个 token 是程度副词时放大 1.5 倍
fn weighted_score(tokens: &[String], keywords: &HashSet<&'static str>) -> f64 {
    let mut score = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        if !keywords.contains(token.as_str()) {
            continue;
        }
        let mut base = 1.0;
        if i > 0 && INTENSIFIERS.contains(tokens[i - 1].as_str()) {
            base *= 1.5;
        }
        score += base;
    }
    score
}

/// 关键词前 NEGATION_WINDOW 个 token 内出现否定词时扣减 1.0，结果下限为 0
fn apply_negation(tokens: &[String], keywords: &HashSet<&'static str>, score: f64) -> f64 {
    let mut adjusted = score;
    for (i, token) in tokens.iter().enumerate() {
        if !keywords.contains(token.as_str()) {
            continue;
        }
        let window_start = i.saturating_sub(NEGATION_WINDOW);
        if tokens[window_start..i]
            .iter()
            .any(|t| NEGATORS.contains(t.as_str()))
        {
            adjusted -= 1.0;
        }
    }
    adjusted.max(0.0)
}

/// 根据最终得分和命中词数量划分类别并估算置信度
fn categorize(score: f64, keyword_count: usize) -> (Sentiment, f64) {
    if keyword_count == 0 {
        return (Sentiment::Neutral, 0.0);
    }

    // 命中 10 个词或得分绝对值达到 5 时置信度封顶
    let count_confidence = (keyword_count as f64 / 10.0).min(1.0);
    let score_confidence = (score.abs() / 5.0).min(1.0);
    let confidence = (count_confidence + score_confidence) / 2.0;

    let sentiment = if score > 1.0 {
        Sentiment::Positive
    } else if score < -1.0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    (sentiment, confidence)
}

fn build_reasoning(
    sentiment: Sentiment,
    positive_words: &[String],
    negative_words: &[String],
) -> String {
    match sentiment {
        Sentiment::Positive => {
            if positive_words.is_empty() {
                "Positive sentiment based on overall score".to_string()
            } else {
                format!(
                    "Positive sentiment detected based on words: {}",
                    positive_words
                        .iter()
                        .take(3)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
        Sentiment::Negative => {
            if negative_words.is_empty() {
                "Negative sentiment based on overall score".to_string()
            } else {
                format!(
                    "Negative sentiment detected based on words: {}",
                    negative_words
                        .iter()
                        .take(3)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
        Sentiment::Neutral => {
            "Neutral sentiment - balanced or insufficient indicators".to_string()
        }
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64 * 1000.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        let report = ANALYZER.analyze("   ");
        assert_eq!(report.sentiment, Sentiment::Neutral);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.confidence, 0.0);
    }

    #[test]
    fn test_positive_feedback() {
        let report =
            ANALYZER.analyze("Excellent teaching and clear explanations, very helpful sessions");
        assert_eq!(report.sentiment, Sentiment::Positive);
        assert!(report.score > 1.0);
        assert!(report.positive_words.contains(&"excellent".to_string()));
        assert!(report.positive_words.contains(&"helpful".to_string()));
        assert!(report.negative_words.is_empty());
    }

    #[test]
    fn test_negative_feedback() {
        let report = ANALYZER.analyze("Confusing and poorly organized, a terrible waste of time");
        assert_eq!(report.sentiment, Sentiment::Negative);
        assert!(report.score < -1.0);
        assert!(report.negative_words.contains(&"confusing".to_string()));
    }

    #[test]
    fn test_intensifier_scales_keyword() {
        let plain = ANALYZER.analyze("good lecture");
        assert_eq!(plain.positive_score, 1.0);

        // 所有程度副词统一放大 1.5 倍
        let strong = ANALYZER.analyze("extremely good lecture");
        assert_eq!(strong.positive_score, 1.5);
        let very = ANALYZER.analyze("very good lecture");
        assert_eq!(very.positive_score, 1.5);
        let mild = ANALYZER.analyze("quite good lecture");
        assert_eq!(mild.positive_score, 1.5);
    }

    #[test]
    fn test_dismissive_wording_is_negative() {
        let report = ANALYZER.analyze("the course is easy and simple");
        assert_eq!(report.sentiment, Sentiment::Negative);
        assert!(report.negative_words.contains(&"easy".to_string()));
        assert!(report.negative_words.contains(&"simple".to_string()));
    }

    #[test]
    fn test_hyphenated_words_split_into_tokens() {
        let report = ANALYZER.analyze("an easy-going teaching style");
        assert!(report.negative_words.contains(&"easy".to_string()));
    }

    #[test]
    fn test_negation_reduces_score() {
        // "not helpful" 的正面得分被否定词抵消后归零
        let report = ANALYZER.analyze("the lecturer is not helpful");
        assert_eq!(report.positive_score, 0.0);
        assert_eq!(report.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_negation_window_is_three_tokens() {
        // 否定词距离关键词超过 3 个 token 时不生效
        let report = ANALYZER.analyze("not at all entirely sure but helpful");
        assert_eq!(report.positive_score, 1.0);
    }

    #[test]
    fn test_score_never_below_zero_after_negation() {
        let report = ANALYZER.analyze("not good");
        assert!(report.positive_score >= 0.0);
    }

    #[test]
    fn test_neutral_when_balanced() {
        let report = ANALYZER.analyze("good content but boring delivery");
        assert_eq!(report.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_confidence_capped_at_one() {
        let text = "excellent great good amazing wonderful fantastic outstanding \
                    brilliant superb perfect helpful clear";
        let report = ANALYZER.analyze(text);
        assert!(report.confidence <= 1.0);
        assert!(report.confidence > 0.9);
    }

    #[test]
    fn test_summary_percentages() {
        let reports = ANALYZER.batch_analyze(&[
            "Excellent and very helpful course".to_string(),
            "Terrible, confusing and boring".to_string(),
            "It was okay".to_string(),
            "Amazing lecturer, wonderful and engaging".to_string(),
        ]);
        let summary = ANALYZER.summarize(&reports);
        assert_eq!(summary.total_feedback, 4);
        assert_eq!(summary.positive_count, 2);
        assert_eq!(summary.negative_count, 1);
        assert_eq!(summary.neutral_count, 1);
        assert_eq!(summary.positive_percentage, 50.0);
        assert_eq!(summary.negative_percentage, 25.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ANALYZER.summarize(&[]);
        assert_eq!(summary.total_feedback, 0);
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[test]
    fn test_rating_breakdown_by_rating() {
        let entries = vec![
            (5, String::new()),
            (4, String::new()),
            (2, String::new()),
            (1, String::new()),
        ];
        let breakdown = ANALYZER.rating_breakdown(&entries);
        assert_eq!(breakdown.positive, 2);
        assert_eq!(breakdown.negative, 2);
        assert_eq!(breakdown.neutral, 0);
        assert_eq!(breakdown.total, 4);
    }

    #[test]
    fn test_rating_breakdown_reclassifies_three_star() {
        let entries = vec![
            (3, "excellent and helpful".to_string()),
            (3, "terrible and boring".to_string()),
            (3, "nothing to report".to_string()),
        ];
        let breakdown = ANALYZER.rating_breakdown(&entries);
        assert_eq!(breakdown.positive, 1);
        assert_eq!(breakdown.negative, 1);
        assert_eq!(breakdown.neutral, 1);
    }

    #[test]
    fn test_rating_breakdown_matches_stems_as_substrings() {
        // 复判用词干表与主分析器的词表不同，按子串匹配，
        // 因此 "love"/"enjoy" 命中，"disappointed" 命中 "disappoint"
        let entries = vec![
            (3, "I love this course and enjoy it".to_string()),
            (3, "quite disappointed overall".to_string()),
        ];
        let breakdown = ANALYZER.rating_breakdown(&entries);
        assert_eq!(breakdown.positive, 1);
        assert_eq!(breakdown.negative, 1);
        assert_eq!(breakdown.neutral, 0);
    }

    #[test]
    fn test_rating_breakdown_empty() {
        let breakdown = ANALYZER.rating_breakdown(&[]);
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.positive_percentage, 0.0);
    }
}
