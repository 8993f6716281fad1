pub mod admin;
pub mod analytics;
pub mod auth;
pub mod courses;
pub mod departments;
pub mod feedbacks;
pub mod lecturers;
pub mod results;
pub mod students;
pub mod users;

pub use admin::AdminService;
pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use departments::DepartmentService;
pub use feedbacks::FeedbackService;
pub use lecturers::LecturerService;
pub use results::ResultService;
pub use students::StudentService;
pub use users::UserService;
