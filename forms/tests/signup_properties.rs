//! Property tests over arbitrary form contents.
//!
//! Every generated state fails validation, so no submission delay is ever
//! awaited.

use proptest::prelude::*;
use vertex_forms::checks::is_valid_email;
use vertex_forms::prelude::*;

fn run(fields: SignupFields) -> (Result<SignupReceipt, SignupError>, SignupFormState) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();

    runtime.block_on(async {
        let mut workflow = SignupWorkflow::default();
        for update in [
            FieldUpdate::Name(fields.name),
            FieldUpdate::Phone(fields.phone),
            FieldUpdate::DateOfBirth(fields.date_of_birth),
            FieldUpdate::Email(fields.email),
            FieldUpdate::Password(fields.password),
            FieldUpdate::ConfirmPassword(fields.confirm_password),
            FieldUpdate::TermsAccepted(fields.terms_accepted),
        ] {
            workflow.update_field(update);
        }
        let result = workflow.submit().await;
        (result, workflow.state())
    })
}

fn arb_valid_email() -> impl Strategy<Value = String> {
    ("[a-z0-9._+-]{1,12}", "[a-z0-9-]{1,12}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn arb_invalid_email() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("must not be email-shaped", |s| !is_valid_email(s))
}

fn arb_long_password() -> impl Strategy<Value = String> {
    "[ -~]{8,24}"
}

fn assert_failed(state: &SignupFormState, message: &str) {
    assert_eq!(state.error_message.as_deref(), Some(message));
    assert!(!state.is_submitting);
    assert!(!state.is_success);
    assert_eq!(state.phase(), FormPhase::Failed);
}

proptest! {
    #[test]
    fn bad_email_is_always_reported_first(
        email in arb_invalid_email(),
        password in ".{0,12}",
        confirm in ".{0,12}",
        terms in any::<bool>(),
    ) {
        let (result, state) = run(SignupFields {
            email,
            password,
            confirm_password: confirm,
            terms_accepted: terms,
            ..Default::default()
        });
        prop_assert_eq!(result, Err(SignupError::InvalidEmail));
        assert_failed(&state, "Invalid email address.");
    }

    #[test]
    fn short_password_is_reported(
        email in arb_valid_email(),
        password in "[ -~]{0,7}",
        terms in any::<bool>(),
    ) {
        let (result, state) = run(SignupFields {
            email,
            confirm_password: password.clone(),
            password,
            terms_accepted: terms,
            ..Default::default()
        });
        prop_assert_eq!(result, Err(SignupError::PasswordTooShort { min: 8 }));
        assert_failed(&state, "Password must be at least 8 characters long.");
    }

    #[test]
    fn mismatched_passwords_are_reported(
        email in arb_valid_email(),
        password in arb_long_password(),
        confirm in "[ -~]{0,24}",
        terms in any::<bool>(),
    ) {
        prop_assume!(password != confirm);
        let (result, state) = run(SignupFields {
            email,
            password,
            confirm_password: confirm,
            terms_accepted: terms,
            ..Default::default()
        });
        prop_assert_eq!(result, Err(SignupError::PasswordMismatch));
        assert_failed(&state, "Passwords do not match.");
    }

    #[test]
    fn unaccepted_terms_are_reported(
        email in arb_valid_email(),
        password in arb_long_password(),
    ) {
        let (result, state) = run(SignupFields {
            email,
            confirm_password: password.clone(),
            password,
            terms_accepted: false,
            ..Default::default()
        });
        prop_assert_eq!(result, Err(SignupError::TermsNotAccepted));
        assert_failed(&state, "You must accept the terms and conditions.");
    }

    #[test]
    fn generated_valid_emails_match_the_pattern(email in arb_valid_email()) {
        prop_assert!(is_valid_email(&email));
    }
}
