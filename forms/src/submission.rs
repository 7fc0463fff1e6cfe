//! Submission side of the signup flow: the backend seam and the transitions
//! that call it.

use crate::config::FormsConfig;
use crate::error::{BackendError, SignupError};
use crate::fields::SignupFields;
use crate::state::SignupFormState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use vertex_core::prelude::*;

/// What a backend hands back for an accepted signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupReceipt {
    pub name: String,
    pub email: String,
    pub accepted_at: DateTime<Utc>,
}

/// Any integration able to register a validated signup.
pub type DynSignupBackend =
    dyn Synapse<Input = SignupFields, Output = SignupReceipt, Error = BackendError>;

/// Stands in for a network call: waits a fixed latency, then accepts.
#[derive(Debug, Clone)]
pub struct SimulatedSignupBackend {
    latency: Duration,
}

impl SimulatedSignupBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Synapse for SimulatedSignupBackend {
    type Input = SignupFields;
    type Output = SignupReceipt;
    type Error = BackendError;

    async fn call(&self, fields: Self::Input) -> Result<Self::Output, Self::Error> {
        tracing::debug!(latency = ?self.latency, "Simulating signup request");
        tokio::time::sleep(self.latency).await;
        Ok(SignupReceipt {
            name: fields.name,
            email: fields.email,
            accepted_at: Utc::now(),
        })
    }
}

#[derive(Clone)]
pub struct SignupResources {
    pub config: FormsConfig,
    pub backend: Arc<DynSignupBackend>,
}

impl ResourceRequirement for SignupResources {}

impl SignupResources {
    pub fn new(config: FormsConfig, backend: Arc<DynSignupBackend>) -> Self {
        Self { config, backend }
    }

    /// Resources backed by [`SimulatedSignupBackend`] with the configured delay.
    pub fn simulated(config: FormsConfig) -> Self {
        let backend = Arc::new(SimulatedSignupBackend::new(config.submit_delay()));
        Self::new(config, backend)
    }
}

impl std::fmt::Debug for SignupResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupResources")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Handle to the live form state, placed on the Bus for the duration of one submission.
#[derive(Clone)]
pub(crate) struct LiveState(pub(crate) Arc<watch::Sender<SignupFormState>>);

/// Flips the form into its submitting state once every check has passed.
#[derive(Debug, Clone, Copy)]
pub struct MarkSubmitting;

#[async_trait]
impl Transition<SignupFields, SignupFields> for MarkSubmitting {
    type Error = SignupError;
    type Resources = SignupResources;

    async fn run(
        &self,
        fields: SignupFields,
        _resources: &Self::Resources,
        bus: &mut Bus,
    ) -> Outcome<SignupFields, Self::Error> {
        match bus.get::<LiveState>() {
            Some(LiveState(state)) => state.send_modify(SignupFormState::mark_submitting),
            None => tracing::debug!("No live form state on the bus; running detached"),
        }
        Outcome::next(fields)
    }
}

/// Hands the validated fields to the backend.
#[derive(Debug, Clone, Copy)]
pub struct SubmitSignup;

#[async_trait]
impl Transition<SignupFields, SignupReceipt> for SubmitSignup {
    type Error = SignupError;
    type Resources = SignupResources;

    async fn run(
        &self,
        fields: SignupFields,
        resources: &Self::Resources,
        _bus: &mut Bus,
    ) -> Outcome<SignupReceipt, Self::Error> {
        let result = resources.backend.call(fields).await;
        Outcome::from_result(result.map_err(SignupError::Backend))
    }
}
