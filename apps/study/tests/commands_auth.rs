//! Identity and language command tests.

mod common;

use civics_core::{Language, StudyMode};
use patrias_study::commands;

use common::TestContext;

#[test]
fn sign_in_sets_current_user() {
    let state = common::in_memory();
    assert_eq!(commands::current_user(&state).unwrap(), None);

    let user = commands::sign_in(&state, "ana@example.com", "secret").unwrap();
    assert_eq!(user.name, "ana");
    assert_eq!(commands::current_user(&state).unwrap(), Some(user));
}

#[test]
fn empty_email_is_rejected() {
    let state = common::in_memory();
    let err = commands::sign_in(&state, "", "secret").unwrap_err();
    assert_eq!(err.message, "email is required");
    assert_eq!(commands::current_user(&state).unwrap(), None);
}

#[test]
fn signed_in_user_survives_reopen() {
    let ctx = TestContext::new();

    let user = {
        let state = ctx.open();
        let user = commands::sign_up(&state, "Luis", "luis@example.com", "pw").unwrap();
        assert!(commands::record_attempt(&state, 1, "flashCards", true, None).unwrap());
        user
    };

    let state = ctx.open();
    assert_eq!(commands::current_user(&state).unwrap(), Some(user));
    assert_eq!(commands::get_completion(&state, Some("flashCards")).unwrap(), 1);
    let record = commands::get_question_progress(&state, 1).unwrap().unwrap();
    assert_eq!((record.attempted, record.correct), (1, 1));
}

#[test]
fn sign_out_forgets_user_and_progress() {
    let ctx = TestContext::new();
    {
        let state = ctx.open();
        commands::sign_in(&state, "ana@example.com", "pw").unwrap();
        commands::record_attempt(&state, 2, "multipleChoice", true, None).unwrap();

        commands::sign_out(&state).unwrap();
        assert_eq!(commands::current_user(&state).unwrap(), None);
        assert_eq!(commands::get_accuracy(&state, None).unwrap(), 0);
    }

    let state = ctx.open();
    assert_eq!(commands::current_user(&state).unwrap(), None);
}

#[test]
fn new_identity_starts_from_zero() {
    let state = common::in_memory();
    commands::sign_in(&state, "a@example.com", "pw").unwrap();
    for id in 1..=5 {
        commands::record_attempt(&state, id, "fillInBlank", true, None).unwrap();
    }
    assert_eq!(commands::get_completion(&state, Some("fillInBlank")).unwrap(), 5);

    commands::sign_in(&state, "b@example.com", "pw").unwrap();
    let summary = commands::get_progress_summary(&state).unwrap();
    assert_eq!(summary.mode(StudyMode::FillInBlank).unwrap().completion, 0);
    assert_eq!(summary.accuracy, 0);
}

#[test]
fn language_preference_survives_reopen() {
    let ctx = TestContext::new();
    {
        let state = ctx.open();
        assert_eq!(commands::get_language(&state).unwrap(), Language::En);
        assert_eq!(commands::translate(&state, "nav.signIn").unwrap(), "Sign In");

        commands::set_language(&state, "es").unwrap();
        assert_eq!(commands::translate(&state, "nav.signIn").unwrap(), "Iniciar Sesión");
    }

    let state = ctx.open();
    assert_eq!(commands::get_language(&state).unwrap(), Language::Es);
}

#[test]
fn unknown_language_is_rejected() {
    let state = common::in_memory();
    assert!(commands::set_language(&state, "fr").is_err());
    assert_eq!(commands::get_language(&state).unwrap(), Language::En);
    assert_eq!(commands::translate(&state, "no.such.key").unwrap(), "no.such.key");
}
