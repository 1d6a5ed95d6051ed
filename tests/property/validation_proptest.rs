//! Property-based tests for input validation
//!
//! Uses proptest to generate random inputs and verify the validation rules

use inkwell::shared::validation::{is_valid_email, is_valid_password, MIN_PASSWORD_LEN};
use inkwell::shared::{AddCommentRequest, CreatePostRequest, RegisterRequest};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_password_length_in_chars(password in "\\PC{0,20}") {
        prop_assert_eq!(is_valid_password(&password), password.chars().count() >= MIN_PASSWORD_LEN);
    }

    #[test]
    fn test_well_formed_emails_pass(
        local in "[a-z0-9._+-]{1,16}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email), "{}", email);
    }

    #[test]
    fn test_emails_without_at_fail(email in "[^@]{0,30}") {
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn test_emails_with_whitespace_fail(
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
        space in "[ \t\n]",
    ) {
        let email = format!("{local}{space}@{domain}.com");
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn test_blank_titles_are_rejected(title in "[ \t]{0,5}", content in "[a-z]{1,20}") {
        let request = CreatePostRequest {
            title,
            content,
            author: "alice".into(),
            category: None,
        };
        prop_assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_blank_comment_is_accepted(author in "[a-z]{1,10}", content in "\\PC*[a-z]\\PC*") {
        let request = AddCommentRequest { author, content };
        prop_assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_accepts_valid_input(
        username in "[a-z][a-z0-9_]{0,15}",
        local in "[a-z]{1,10}",
        password in "[a-zA-Z0-9]{6,20}",
    ) {
        let request = RegisterRequest {
            username,
            email: format!("{local}@example.com"),
            password,
        };
        prop_assert!(request.validate().is_ok());
    }
}
