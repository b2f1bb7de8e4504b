use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vacancy::VacancyId;

pub const ALLOWED_CV_TYPES: [&str; 4] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Metadata of the uploaded CV. Contents are handled by the upload layer;
/// only the declared type and size are checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvAttachment {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl CvAttachment {
    pub fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }

    /// Compares the MIME essence, ignoring parameters such as `charset`.
    pub fn has_allowed_type(&self) -> bool {
        let essence = self
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        ALLOWED_CV_TYPES.contains(&essence.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationPayload {
    pub job_id: VacancyId,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub full_name: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub professional_title: String,
    #[validate(range(max = 80))]
    pub years_of_experience: u32,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub location: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub phone: String,
    pub cv: Option<CvAttachment>,
}
