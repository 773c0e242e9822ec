//! Integration tests for the auth flows and their notifications.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use showcase_gate::{
    auth::{
        first_message, AttemptStatus, AuthClient, AuthFlow, FlowOutcome, SignInForm, SignUpForm,
        GOOGLE_OAUTH_STRATEGY,
    },
    notify::{NotificationKind, NotificationStore},
    Error, IdentityError,
};

/// Scripted identity provider.
#[derive(Default)]
struct FakeClient {
    sign_in: Option<Result<AttemptStatus, IdentityError>>,
    sign_up_fails: Option<String>,
    verify: Option<Result<AttemptStatus, IdentityError>>,
    sign_out_fails: bool,
    oauth_fails: Option<String>,
    oauth_request: Mutex<Option<(String, String, String)>>,
    calls: AtomicUsize,
}

impl AuthClient for FakeClient {
    async fn sign_in(
        &self,
        _identifier: &str,
        _password: &str,
    ) -> Result<AttemptStatus, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sign_in.clone().unwrap_or(Ok(AttemptStatus::Complete))
    }

    async fn sign_in_with_oauth(
        &self,
        strategy: &str,
        redirect_url: &str,
        redirect_url_complete: &str,
    ) -> Result<(), IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.oauth_request.lock().unwrap() = Some((
            strategy.to_string(),
            redirect_url.to_string(),
            redirect_url_complete.to_string(),
        ));
        match &self.oauth_fails {
            Some(message) => Err(IdentityError::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> Result<(), IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.sign_up_fails {
            Some(message) => Err(IdentityError::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn prepare_email_verification(&self) -> Result<(), IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn verify_email(&self, _code: &str) -> Result<AttemptStatus, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verify.clone().unwrap_or(Ok(AttemptStatus::Complete))
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.sign_out_fails {
            Err(IdentityError::new("session already ended"))
        } else {
            Ok(())
        }
    }
}

fn sign_in_form() -> SignInForm {
    SignInForm {
        identifier: "alice@example.com".to_string(),
        password: "hunter22".to_string(),
    }
}

fn sign_up_form() -> SignUpForm {
    SignUpForm {
        email: "alice@example.com".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
    }
}

fn last(store: &NotificationStore) -> (NotificationKind, String) {
    let items = store.snapshot();
    let n = items.last().expect("a notification");
    (n.kind, n.message.clone())
}

#[tokio::test]
async fn completed_sign_in_notifies_and_navigates_home() {
    let store = NotificationStore::new();
    let flow = AuthFlow::new(FakeClient::default(), store.clone());

    let outcome = flow.sign_in(&sign_in_form()).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Navigate("/home".to_string()));
    assert_eq!(
        last(&store),
        (NotificationKind::Success, "Signed in successfully".to_string())
    );
}

#[tokio::test]
async fn incomplete_sign_in_stays_with_error() {
    let store = NotificationStore::new();
    let client = FakeClient {
        sign_in: Some(Ok(AttemptStatus::Incomplete)),
        ..FakeClient::default()
    };
    let flow = AuthFlow::new(client, store.clone());

    let outcome = flow.sign_in(&sign_in_form()).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Stay);
    assert_eq!(
        last(&store),
        (
            NotificationKind::Error,
            "Sign-in incomplete. Please try again.".to_string()
        )
    );
}

#[tokio::test]
async fn failed_sign_in_surfaces_provider_message() {
    let store = NotificationStore::new();
    let client = FakeClient {
        sign_in: Some(Err(IdentityError::new("Password is incorrect"))),
        ..FakeClient::default()
    };
    let flow = AuthFlow::new(client, store.clone());

    flow.sign_in(&sign_in_form()).await.unwrap();

    assert_eq!(
        last(&store),
        (
            NotificationKind::Error,
            "Sign-in error: Password is incorrect".to_string()
        )
    );
}

#[tokio::test]
async fn invalid_form_never_reaches_provider() {
    let store = NotificationStore::new();
    let flow = AuthFlow::new(FakeClient::default(), store.clone());

    let err = flow.sign_in(&SignInForm::default()).await.unwrap_err();

    let errors = err.validation_errors().expect("validation failure");
    assert_eq!(errors.field_errors().len(), 2);
    assert_eq!(flow.client().calls.load(Ordering::SeqCst), 0);
    assert!(store.is_empty());
}

#[tokio::test]
async fn sign_up_then_verify() {
    let store = NotificationStore::new();
    let flow = AuthFlow::new(FakeClient::default(), store.clone()).with_landing_path("/library");

    let outcome = flow.sign_up(&sign_up_form()).await.unwrap();
    assert_eq!(outcome, FlowOutcome::AwaitVerification);

    let outcome = flow.verify_email("424242").await;
    assert_eq!(outcome, FlowOutcome::Navigate("/library".to_string()));

    assert_eq!(
        store.messages(),
        [
            "Sign up successful. Please check your email for verification.",
            "Email verified successfully. Welcome!",
        ]
    );
}

#[tokio::test]
async fn failed_sign_up_skips_verification() {
    let store = NotificationStore::new();
    let client = FakeClient {
        sign_up_fails: Some("That email address is taken".to_string()),
        ..FakeClient::default()
    };
    let flow = AuthFlow::new(client, store.clone());

    let outcome = flow.sign_up(&sign_up_form()).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Stay);
    // sign_up only; prepare_email_verification was not called
    assert_eq!(flow.client().calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        last(&store).1,
        "Sign up failed: That email address is taken"
    );
}

#[tokio::test]
async fn rejected_verification_code() {
    let store = NotificationStore::new();
    let client = FakeClient {
        verify: Some(Ok(AttemptStatus::Incomplete)),
        ..FakeClient::default()
    };
    let flow = AuthFlow::new(client, store.clone());

    assert_eq!(flow.verify_email("000000").await, FlowOutcome::Stay);
    assert_eq!(
        last(&store),
        (
            NotificationKind::Error,
            "Verification failed. Please try again.".to_string()
        )
    );
}

#[tokio::test]
async fn sign_out_returns_to_sign_in() {
    let store = NotificationStore::new();
    let flow = AuthFlow::new(FakeClient::default(), store.clone());

    assert_eq!(
        flow.sign_out().await,
        FlowOutcome::Navigate("/signin".to_string())
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn failed_sign_out_reports_error() {
    let store = NotificationStore::new();
    let client = FakeClient {
        sign_out_fails: true,
        ..FakeClient::default()
    };
    let flow = AuthFlow::new(client, store.clone());

    assert_eq!(flow.sign_out().await, FlowOutcome::Stay);
    assert_eq!(last(&store).1, "Sign-out failed: session already ended");
}

#[tokio::test]
async fn invalid_sign_up_reports_every_field() {
    let store = NotificationStore::new();
    let flow = AuthFlow::new(FakeClient::default(), store.clone());
    let form = SignUpForm {
        email: "not-an-email".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret2".to_string(),
    };

    let err = flow.sign_up(&form).await.unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("expected validation error, got {:?}", err);
    };
    assert_eq!(first_message(&errors, "email").as_deref(), Some("Invalid email"));
    assert_eq!(
        first_message(&errors, "confirm_password").as_deref(),
        Some("Passwords do not match")
    );
    assert_eq!(flow.client().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn google_sign_in_hands_over_to_provider() {
    let store = NotificationStore::new();
    let flow = AuthFlow::new(FakeClient::default(), store.clone());

    assert_eq!(flow.sign_in_with_google().await, FlowOutcome::ProviderRedirect);

    let request = flow.client().oauth_request.lock().unwrap().clone();
    assert_eq!(
        request,
        Some((
            GOOGLE_OAUTH_STRATEGY.to_string(),
            "/sso-callback".to_string(),
            "/home".to_string(),
        ))
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn failed_google_sign_in_reports_error() {
    let store = NotificationStore::new();
    let client = FakeClient {
        oauth_fails: Some("popup blocked".to_string()),
        ..FakeClient::default()
    };
    let flow = AuthFlow::new(client, store.clone());

    assert_eq!(flow.sign_in_with_google().await, FlowOutcome::Stay);
    assert_eq!(
        last(&store),
        (
            NotificationKind::Error,
            "Google sign-in error: popup blocked".to_string()
        )
    );
}
