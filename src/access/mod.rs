pub mod principal;
pub mod rules;
pub mod session;

pub use principal::Principal;
pub use session::verify_principal;
