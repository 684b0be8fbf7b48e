//! Tests for account signup and signin

mod service_tests;
