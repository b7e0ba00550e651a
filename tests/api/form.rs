use waitlist::form::{EmailForm, FieldError, Outcome, SUBMISSION_FAILED_MESSAGE};
use waitlist::waitlist_client::WaitlistClient;

use crate::helpers::spawn_app;

#[tokio::test]
async fn form_registers_an_email_end_to_end() {
    let (app, store) = spawn_app().await;
    let client = app.waitlist_client();
    let mut form = EmailForm::new();

    form.on_input_change("  USER@Example.COM  ");
    form.submit(&client).await;

    assert_eq!(
        form.outcome(),
        Some(&Outcome::Success("Email successfully registered!".into()))
    );
    assert_eq!(form.email(), "");
    assert!(form.success_dialog().is_open());
    assert_eq!(store.submissions()[0].email, "user@example.com");
}

#[tokio::test]
async fn form_keeps_the_input_when_the_email_is_taken() {
    let (app, store) = spawn_app().await;
    let client = app.waitlist_client();
    let mut form = EmailForm::new();

    form.on_input_change("a@b.co");
    form.submit(&client).await;
    form.close_success_dialog();

    form.on_input_change("a@b.co");
    form.submit(&client).await;

    assert_eq!(
        form.outcome(),
        Some(&Outcome::Error("This email is already registered".into()))
    );
    assert_eq!(form.email(), "a@b.co");
    assert!(!form.success_dialog().is_open());
    assert_eq!(store.submissions().len(), 1);
}

#[tokio::test]
async fn form_rejects_bad_input_without_reaching_the_server() {
    let (app, store) = spawn_app().await;
    let client = app.waitlist_client();
    let mut form = EmailForm::new();

    form.on_input_change("not-an-email");
    form.submit(&client).await;

    assert_eq!(form.field_error(), Some(FieldError::InvalidFormat));
    assert!(store.submissions().is_empty());
}

#[tokio::test]
async fn unreachable_server_shows_a_retry_prompt() {
    // Nothing listens on the discard port.
    let client = WaitlistClient::new("http://127.0.0.1:9", std::time::Duration::from_secs(1))
        .unwrap();
    let mut form = EmailForm::new();

    form.on_input_change("a@b.co");
    form.submit(&client).await;

    assert_eq!(
        form.outcome(),
        Some(&Outcome::Error(SUBMISSION_FAILED_MESSAGE.into()))
    );
    assert_eq!(form.email(), "a@b.co");
    assert!(!form.is_submitting());
}
