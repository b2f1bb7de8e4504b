pub mod admin_service;
pub mod auth_service;
pub mod candidate_service;
pub mod company_service;
pub mod lifecycle;
pub mod notification_service;
pub mod vacancy_service;
