use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::AdminService;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.overview(&req).await
}

pub async fn all_feedback(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.all_feedback(&req).await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/overview", web::get().to(overview))
                    .route("/feedback", web::get().to(all_feedback)),
            ),
    );
}
