use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::results::requests::{CreateResultRequest, UpdateResultRequest};
use crate::models::users::entities::UserRole;
use crate::services::ResultService;

// 懒加载的全局 ResultService 实例
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn create_result(
    req: HttpRequest,
    result_data: web::Json<CreateResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .create_result(result_data.into_inner(), &req)
        .await
}

pub async fn update_result(
    req: HttpRequest,
    update_data: web::Json<UpdateResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .update_result(update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
                    .route("", web::post().to(create_result))
                    .route("", web::put().to(update_result)),
            ),
    );
}
