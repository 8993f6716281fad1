pub mod courses;
pub mod feedback;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct LecturerService {
    storage: Option<Arc<dyn Storage>>,
}

impl LecturerService {
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

    // 本人收到的反馈与分析
    pub async fn my_feedback(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        feedback::my_feedback(self, request).await
    }

    // 本人讲授的课程
    pub async fn my_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::my_courses(self, request).await
    }

    // 选修本人课程的学生
    pub async fn my_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        students::my_students(self, request).await
    }
}
