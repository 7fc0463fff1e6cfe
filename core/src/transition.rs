use crate::bus::Bus;
use crate::outcome::Outcome;
use async_trait::async_trait;

/// Marker for the resource bundle a transition reads from.
///
/// Resources are shared, read-only dependencies (configuration, integration
/// handles). Per-execution data travels on the [`Bus`] instead.
pub trait ResourceRequirement: Send + Sync + 'static {}

impl ResourceRequirement for () {}

/// The contract for a Typed State Transition.
///
/// `Transition` converts state `From` to `Outcome<To, Error>`.
#[async_trait]
pub trait Transition<From, To>: Send + Sync + 'static
where
    From: Send + 'static,
    To: Send + 'static,
{
    /// Domain-specific error type (e.g., SignupError, LoginError)
    type Error: Send + Sync + 'static;

    /// Resource bundle required by this transition
    type Resources: ResourceRequirement;

    /// Execute the transition
    async fn run(
        &self,
        state: From,
        resources: &Self::Resources,
        bus: &mut Bus,
    ) -> Outcome<To, Self::Error>;
}
