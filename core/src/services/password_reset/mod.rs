//! Password reset lifecycle.

mod service;

pub use service::{PasswordResetService, ResetRequested};

#[cfg(test)]
mod tests;
