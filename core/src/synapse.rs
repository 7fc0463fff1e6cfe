use async_trait::async_trait;

/// Synapse: The Integration Layer
///
/// A Synapse is the seam between a transition and anything outside the
/// process (a signup API, a mail service). Transitions hold it behind their
/// resources and map its error into their own fault type.
#[async_trait]
pub trait Synapse: Send + Sync {
    type Input: Send;
    type Output: Send;
    type Error: std::fmt::Debug + Send;

    /// Perform the external call
    async fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
