//! Property-based tests for contact-form validation.
