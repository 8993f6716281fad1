pub mod admin;

pub mod analytics;

pub mod auth;

pub mod courses;

pub mod departments;

pub mod feedback;

pub mod lecturers;

pub mod results;

pub mod students;

pub mod users;

pub use admin::configure_admin_routes;
pub use analytics::configure_analytics_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use departments::configure_department_routes;
pub use feedback::configure_feedback_routes;
pub use lecturers::configure_lecturer_routes;
pub use results::configure_result_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;
