use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::analytics::responses::{AdminOverview, AdminOverviewResponse};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

const RECENT_FEEDBACK_LIMIT: u64 = 10;

pub async fn overview(service: &AdminService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let counts = async {
        let students = storage.count_users_by_role(UserRole::Student).await?;
        let lecturers = storage.count_users_by_role(UserRole::Lecturer).await?;
        let courses = storage.count_courses().await?;
        let results = storage.count_results().await?;
        let feedbacks = storage.count_feedbacks().await?;
        let recent_feedbacks = storage
            .list_feedback_details(Some(RECENT_FEEDBACK_LIMIT))
            .await?;

        Ok::<AdminOverview, crate::errors::IntellGradeError>(AdminOverview {
            students,
            lecturers,
            courses,
            results,
            feedbacks,
            recent_feedbacks,
        })
    }
    .await;

    match counts {
        Ok(overview) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdminOverviewResponse { overview },
            "Overview retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve overview: {e}"),
            )),
        ),
    }
}
