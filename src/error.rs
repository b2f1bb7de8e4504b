pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("An administrator cannot edit, reset or delete their own account")]
    SelfModification,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is blocked")]
    AccountBlocked,

    #[error("The company associated with this account is blocked")]
    CompanyBlocked,

    #[error("Company still has {admins} admin(s) and {vacancies} vacancy(ies)")]
    DependentsExist { admins: usize, vacancies: usize },

    #[error("A CV attachment is required")]
    MissingAttachment,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Vacancy is not accepting applications")]
    VacancyUnavailable,

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Company name already exists: {0}")]
    CompanyNameTaken(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable machine-readable code; the presentation layer owns the wording.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Validation(_) => "validation",
            Error::NotFound(_) => "not_found",
            Error::Forbidden(_) => "forbidden",
            Error::SelfModification => "self_modification",
            Error::InvalidCredentials => "invalid_credentials",
            Error::AccountBlocked => "account_blocked",
            Error::CompanyBlocked => "company_blocked",
            Error::DependentsExist { .. } => "dependents_exist",
            Error::MissingAttachment => "missing_attachment",
            Error::UnsupportedFileType(_) => "unsupported_file_type",
            Error::VacancyUnavailable => "vacancy_unavailable",
            Error::EmailTaken(_) => "email_taken",
            Error::CompanyNameTaken(_) => "company_name_taken",
            Error::Notification(_) => "notification",
            Error::Json(_) => "json",
        }
    }

    /// JSON body in the `{ "error": ..., "message": ... }` shape.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.code(), "message": self.to_string() })
    }
}
