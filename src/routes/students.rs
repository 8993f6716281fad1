use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn my_results(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.my_results(&req).await
}

pub async fn my_transcript(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.my_transcript(&req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("/results", web::get().to(my_results))
                    .route("/transcript", web::get().to(my_transcript)),
            ),
    );
}
