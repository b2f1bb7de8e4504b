use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Random alphanumeric token used for password reset links.
pub fn generate_reset_token(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
