use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::LecturerService;

// 懒加载的全局 LecturerService 实例
static LECTURER_SERVICE: Lazy<LecturerService> = Lazy::new(LecturerService::new_lazy);

pub async fn my_feedback(req: HttpRequest) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE.my_feedback(&req).await
}

pub async fn my_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE.my_courses(&req).await
}

pub async fn my_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    LECTURER_SERVICE.my_students(&req).await
}

// 配置路由
pub fn configure_lecturer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lecturers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Lecturer))
                    .route("/feedback", web::get().to(my_feedback))
                    .route("/courses", web::get().to(my_courses))
                    .route("/students", web::get().to(my_students)),
            ),
    );
}
