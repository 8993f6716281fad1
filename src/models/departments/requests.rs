use serde::Deserialize;

// 院系创建请求
#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub code: String,
}

// 院系更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: String,
    pub code: String,
}
