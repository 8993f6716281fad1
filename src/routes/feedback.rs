use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::models::users::entities::UserRole;
use crate::services::FeedbackService;

// 懒加载的全局 FeedbackService 实例
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

pub async fn submit_feedback(
    req: HttpRequest,
    feedback_data: web::Json<SubmitFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .submit_feedback(feedback_data.into_inner(), &req)
        .await
}

pub async fn list_feedback_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.list_feedback_courses(&req).await
}

// 配置路由
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feedback")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .service(
                        web::resource("")
                            .wrap(middlewares::RateLimit::submit_feedback())
                            .route(web::post().to(submit_feedback)),
                    )
                    .route("/courses", web::get().to(list_feedback_courses)),
            ),
    );
}
