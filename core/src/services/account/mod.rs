//! Account signup and signin.

mod service;

pub use service::AccountService;

#[cfg(test)]
mod tests;
