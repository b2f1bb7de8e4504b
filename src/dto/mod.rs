pub mod admin_dto;
pub mod company_dto;
pub mod public_dto;
pub mod vacancy_dto;
