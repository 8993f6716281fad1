use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, group_by_semester};
use crate::middlewares::RequireJWT;
use crate::models::results::responses::{
    TranscriptResponse, TranscriptSemester, TranscriptStudent, TranscriptSummary,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn my_transcript(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let rows = match storage.list_student_results(user.id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve results: {e}"),
                )),
            );
        }
    };

    let total_credits: i64 = rows.iter().map(|r| r.unit as i64).sum();
    let completed_courses = rows.len() as i64;
    let overall_gpa = if rows.is_empty() {
        0.0
    } else {
        round2(rows.iter().map(|r| r.score).sum::<f64>() / rows.len() as f64)
    };

    let results: Vec<TranscriptSemester> = group_by_semester(rows)
        .into_iter()
        .map(|group| {
            let semester_credits: i64 = group.courses.iter().map(|r| r.unit as i64).sum();
            let semester_gpa = round2(
                group.courses.iter().map(|r| r.score).sum::<f64>() / group.courses.len() as f64,
            );
            TranscriptSemester {
                session: group.session,
                semester: group.semester,
                courses: group.courses,
                semester_credits,
                semester_gpa,
            }
        })
        .collect();

    let response = TranscriptResponse {
        student: TranscriptStudent {
            id: user.id,
            name: user.display_name.clone().unwrap_or_else(|| user.username.clone()),
            email: user.email,
        },
        summary: TranscriptSummary {
            total_credits,
            completed_courses,
            overall_gpa,
            total_semesters: results.len() as i64,
        },
        results,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Transcript retrieved successfully",
    )))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
