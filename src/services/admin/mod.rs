pub mod feedback;
pub mod overview;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
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

    // 系统总览
    pub async fn overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::overview(self, request).await
    }

    // 全量反馈视图
    pub async fn all_feedback(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        feedback::all_feedback(self, request).await
    }
}
