//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{Credential, Greeting, is_token68};
use proptest::prelude::*;

// ============================================================================
// Credential Property Tests
// ============================================================================

mod credential_tests {
    use super::*;

    proptest! {
        #[test]
        fn token68_tokens_match_themselves(token in "[A-Za-z0-9._~+/-]{1,64}={0,2}") {
            prop_assert!(is_token68(&token));

            let credential = Credential::new(token.clone()).unwrap();
            prop_assert!(credential.matches(&token));
        }

        #[test]
        fn other_tokens_never_match(
            token in "[A-Za-z0-9]{1,32}",
            other in "[A-Za-z0-9]{1,32}"
        ) {
            prop_assume!(token != other);

            let credential = Credential::new(token).unwrap();
            prop_assert!(!credential.matches(&other));
        }

        #[test]
        fn tokens_with_whitespace_rejected(
            head in "[a-z]{1,8}",
            tail in "[a-z]{1,8}"
        ) {
            let token = format!("{head} {tail}");
            prop_assert!(Credential::new(token).is_err());
        }
    }
}

// ============================================================================
// Greeting Property Tests
// ============================================================================

mod greeting_tests {
    use super::*;

    proptest! {
        #[test]
        fn echo_ends_with_message(message in ".*") {
            let greeting = Greeting::echo(&message);
            prop_assert!(greeting.as_str().starts_with("Hello! You sent: "));
            prop_assert!(greeting.as_str().ends_with(&message));
        }

        #[test]
        fn echo_is_deterministic(message in ".*") {
            prop_assert_eq!(Greeting::echo(&message), Greeting::echo(&message));
        }
    }
}
