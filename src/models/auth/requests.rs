use serde::Deserialize;

// 登录请求：username 字段同时接受用户名或邮箱
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}
