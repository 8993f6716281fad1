pub mod courses;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
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

    // 提交课程反馈
    pub async fn submit_feedback(
        &self,
        feedback_data: SubmitFeedbackRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_feedback(self, feedback_data, request).await
    }

    // 可供反馈的课程
    pub async fn list_feedback_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::list_feedback_courses(self, request).await
    }
}
