/// 根据百分制分数计算成绩等级
pub fn calculate_grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A+"
    } else if score >= 85.0 {
        "A"
    } else if score >= 80.0 {
        "A-"
    } else if score >= 75.0 {
        "B+"
    } else if score >= 70.0 {
        "B"
    } else if score >= 65.0 {
        "B-"
    } else if score >= 60.0 {
        "C+"
    } else if score >= 55.0 {
        "C"
    } else if score >= 50.0 {
        "C-"
    } else if score >= 45.0 {
        "D+"
    } else if score >= 40.0 {
        "D"
    } else {
        "F"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(calculate_grade(100.0), "A+");
        assert_eq!(calculate_grade(90.0), "A+");
        assert_eq!(calculate_grade(89.9), "A");
        assert_eq!(calculate_grade(85.0), "A");
        assert_eq!(calculate_grade(80.0), "A-");
        assert_eq!(calculate_grade(75.0), "B+");
        assert_eq!(calculate_grade(70.0), "B");
        assert_eq!(calculate_grade(65.0), "B-");
        assert_eq!(calculate_grade(60.0), "C+");
        assert_eq!(calculate_grade(55.0), "C");
        assert_eq!(calculate_grade(50.0), "C-");
        assert_eq!(calculate_grade(45.0), "D+");
        assert_eq!(calculate_grade(40.0), "D");
        assert_eq!(calculate_grade(39.9), "F");
        assert_eq!(calculate_grade(0.0), "F");
    }
}
