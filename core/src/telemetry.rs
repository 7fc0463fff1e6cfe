//! # Telemetry: Observability Decorators
//!
//! This module provides decorators for adding observability to Transitions.

use crate::bus::Bus;
use crate::outcome::Outcome;
use crate::transition::Transition;
use async_trait::async_trait;
use std::fmt::Debug;

/// A wrapper Transition that adds tracing to any inner Transition.
#[derive(Clone)]
pub struct Traced<T> {
    inner: T,
    name: String,
}

impl<T> Traced<T> {
    pub fn new(inner: T, name: &str) -> Self {
        Self {
            inner,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl<T, From, To> Transition<From, To> for Traced<T>
where
    T: Transition<From, To>,
    T::Error: Debug,
    From: Send + 'static + Debug,
    To: Send + 'static + Debug,
{
    type Error = T::Error;
    type Resources = T::Resources;

    async fn run(
        &self,
        input: From,
        resources: &Self::Resources,
        bus: &mut Bus,
    ) -> Outcome<To, Self::Error> {
        use tracing::{Instrument, info_span};

        let span = info_span!("Node", vertex.node = %self.name);

        async move {
            tracing::debug!(?input, "Entering node transition");
            let start = std::time::Instant::now();

            let result = self.inner.run(input, resources, bus).await;

            let duration = start.elapsed();
            match &result {
                Outcome::Next(_) => {
                    tracing::debug!(?duration, "Transition completed: Next");
                }
                Outcome::Fault(e) => {
                    tracing::warn!(error = ?e, ?duration, "Transition failed: Fault");
                }
            }
            result
        }
        .instrument(span)
        .await
    }
}
