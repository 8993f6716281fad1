use serde::Serialize;

use super::entities::Department;

#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub department: Department,
}

#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub departments: Vec<Department>,
}
