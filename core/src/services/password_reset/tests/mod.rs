//! Tests for the password reset lifecycle
