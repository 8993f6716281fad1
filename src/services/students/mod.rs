pub mod results;
pub mod transcript;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::results::{entities::ResultRow, responses::SemesterGroup};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 本人成绩（按学期分组）
    pub async fn my_results(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        results::my_results(self, request).await
    }

    // 本人成绩单
    pub async fn my_transcript(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        transcript::my_transcript(self, request).await
    }
}

/// 把已按学年学期倒序排列的成绩行按 (session, semester) 分组
pub(crate) fn group_by_semester(rows: Vec<ResultRow>) -> Vec<SemesterGroup> {
    let mut groups: Vec<SemesterGroup> = Vec::new();

    for row in rows {
        match groups.last_mut() {
            Some(group) if group.session == row.session && group.semester == row.semester => {
                group.courses.push(row);
            }
            _ => {
                groups.push(SemesterGroup {
                    session: row.session.clone(),
                    semester: row.semester,
                    courses: vec![row],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(session: &str, semester: i32, score: f64) -> ResultRow {
        ResultRow {
            id: 1,
            course_id: 1,
            course_code: "CSC101".to_string(),
            course_title: "Intro".to_string(),
            unit: 3,
            score,
            grade: "A".to_string(),
            session: session.to_string(),
            semester,
        }
    }

    #[test]
    fn test_group_by_semester_preserves_order() {
        let rows = vec![
            row("2024/2025", 2, 88.0),
            row("2024/2025", 1, 70.0),
            row("2024/2025", 1, 65.0),
            row("2023/2024", 2, 92.0),
        ];

        let groups = group_by_semester(rows);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].semester, 2);
        assert_eq!(groups[1].courses.len(), 2);
        assert_eq!(groups[2].session, "2023/2024");
    }

    #[test]
    fn test_group_by_semester_empty() {
        assert!(group_by_semester(Vec::new()).is_empty());
    }
}
