use super::entities::User;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 用户响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

// 用户列表响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}

// 学生花名册条目（管理员/讲师查询全部学生）
#[derive(Debug, Clone, Serialize)]
pub struct StudentEntry {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<StudentEntry>,
}
