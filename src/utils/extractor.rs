use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 安全的 i64 路径参数提取器
///
/// 解析路径中的 `{id}` 段，非法输入返回统一的 400 响应而不是 actix 默认错误。
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_positive_i64(req, "id").map(SafeIDI64))
    }
}

fn extract_positive_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| bad_request(format!("Missing {name} path parameter")))?;
    let id = raw
        .parse::<i64>()
        .map_err(|_| bad_request(format!("Invalid {name} path parameter")))?;
    if id <= 0 {
        return Err(bad_request(format!("{name} must be a positive integer")));
    }
    Ok(id)
}

fn bad_request(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::BadRequest,
            message,
        ));
    InternalError::from_response("Bad path parameter", response).into()
}
