//! The signup workflow: owns the form state, runs the checks, and drives the
//! simulated submission.

use crate::checks::{CheckEmail, CheckPasswordLength, CheckPasswordMatch, CheckTermsAccepted};
use crate::config::FormsConfig;
use crate::error::SignupError;
use crate::fields::{FieldUpdate, SignupFields};
use crate::state::{FormPhase, SignupFormState};
use crate::submission::{
    DynSignupBackend, LiveState, MarkSubmitting, SignupReceipt, SignupResources, SubmitSignup,
};
use crate::view::SignupView;
use std::sync::Arc;
use tokio::sync::watch;
use vertex_core::prelude::*;
use vertex_runtime::Axon;

pub type SignupPipeline = Axon<SignupFields, SignupReceipt, SignupError, SignupResources>;

/// Checks in their required order, followed by the submission steps.
pub fn signup_pipeline() -> SignupPipeline {
    Axon::<SignupFields, SignupFields, SignupError, SignupResources>::start("SignupSubmission")
        .then(Traced::new(CheckEmail, "CheckEmail"))
        .then(Traced::new(CheckPasswordLength, "CheckPasswordLength"))
        .then(Traced::new(CheckPasswordMatch, "CheckPasswordMatch"))
        .then(Traced::new(CheckTermsAccepted, "CheckTermsAccepted"))
        .then(MarkSubmitting)
        .then(Traced::new(SubmitSignup, "SubmitSignup"))
}

/// One signup form instance.
///
/// State is published through a `watch` channel so a display surface can
/// follow `is_submitting` while [`SignupWorkflow::submit`] is awaiting.
pub struct SignupWorkflow {
    state: Arc<watch::Sender<SignupFormState>>,
    pipeline: SignupPipeline,
    resources: SignupResources,
}

impl SignupWorkflow {
    /// A form backed by the simulated, always-succeeding backend.
    pub fn new(config: FormsConfig) -> Self {
        Self::with_resources(SignupResources::simulated(config))
    }

    pub fn with_backend(config: FormsConfig, backend: Arc<DynSignupBackend>) -> Self {
        Self::with_resources(SignupResources::new(config, backend))
    }

    pub fn with_resources(resources: SignupResources) -> Self {
        let (state, _) = watch::channel(SignupFormState::default());
        Self {
            state: Arc::new(state),
            pipeline: signup_pipeline(),
            resources,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SignupFormState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.state.borrow().phase()
    }

    pub fn view(&self) -> SignupView {
        SignupView::from_state(&self.state.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<SignupFormState> {
        self.state.subscribe()
    }

    pub fn schematic(&self) -> &Schematic {
        self.pipeline.schematic()
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        tracing::trace!(field = update.field_name(), "Field updated");
        self.state.send_modify(|state| update.apply(&mut state.fields));
    }

    pub fn toggle_password_visibility(&mut self) {
        self.state
            .send_modify(|state| state.password_visible = !state.password_visible);
    }

    /// Validate and, if every check passes, submit.
    ///
    /// Validation failures and backend failures both land in
    /// `error_message`; on success the fields are reset.
    pub async fn submit(&mut self) -> Result<SignupReceipt, SignupError> {
        let fields = self.state.borrow().fields.clone();
        self.state.send_modify(SignupFormState::begin_attempt);

        let mut bus = Bus::new();
        bus.insert(LiveState(self.state.clone()));

        let outcome = self
            .pipeline
            .execute(fields, &self.resources, &mut bus)
            .await;

        let result = outcome.into_result();

        match &result {
            Ok(receipt) => {
                tracing::info!(email = %receipt.email, "Signup successful");
                self.state.send_modify(SignupFormState::succeed);
            }
            Err(e) if e.is_validation() => {
                tracing::debug!(error = %e, "Signup rejected by validation");
                self.state.send_modify(|state| state.fail(e.to_string()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Signup submission failed");
                self.state.send_modify(|state| state.fail(e.to_string()));
            }
        }

        result
    }
}

impl Default for SignupWorkflow {
    fn default() -> Self {
        Self::new(FormsConfig::default())
    }
}
