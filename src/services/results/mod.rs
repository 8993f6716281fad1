pub mod create;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::results::requests::{CreateResultRequest, UpdateResultRequest};
use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
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

    // 录入成绩
    pub async fn create_result(
        &self,
        result_data: CreateResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_result(self, result_data, request).await
    }

    // 修改成绩分数
    pub async fn update_result(
        &self,
        update_data: UpdateResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_result(self, update_data, request).await
    }
}
