//! # Axon: Executable Decision Path
//!
//! The `Axon` is the **runtime execution path** of a chain of typed transitions.
//! It functions as a reusable Pipeline<In, Out>.
//!
//! ## Design Philosophy
//!
//! * **Axon flows, Schematic shows**: Axon executes; Schematic describes
//! * **Builder pattern**: `Axon::start().then().then()`
//! * **First fault wins**: a `Fault` stops the chain immediately

use std::any::type_name;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::Instrument;
use vertex_core::bus::Bus;
use vertex_core::outcome::Outcome;
use vertex_core::schematic::{Edge, Node, NodeKind, Schematic};
use vertex_core::transition::{ResourceRequirement, Transition};

/// Type alias for async boxed futures used in Axon execution.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Executor type for Axon steps.
/// Takes an input state `In`, the shared resources, and the per-run Bus.
pub type Executor<In, Out, E, Res> = Arc<
    dyn for<'a> Fn(In, &'a Res, &'a mut Bus) -> BoxFuture<'a, Outcome<Out, E>> + Send + Sync,
>;

fn executor<In, Out, E, Res, F>(f: F) -> Executor<In, Out, E, Res>
where
    F: for<'a> Fn(In, &'a Res, &'a mut Bus) -> BoxFuture<'a, Outcome<Out, E>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Helper to extract a readable type name from a type.
///
/// Wrappers such as `Traced<CheckEmail>` are labelled by their innermost type.
fn type_name_of<T: ?Sized>() -> String {
    let full = type_name::<T>().trim_end_matches('>');
    let inner = full.rsplit('<').next().unwrap_or(full);
    inner.rsplit("::").next().unwrap_or(inner).to_string()
}

/// The Axon Builder and Runtime.
///
/// `Axon` is reusable and thread-safe: build it once, execute it per request.
///
/// ## Example
///
/// ```rust,ignore
/// let axon = Axon::<Fields, Fields, SignupError, SignupResources>::start("Signup")
///     .then(CheckEmail)
///     .then(CheckPasswordLength);
///
/// let outcome = axon.execute(fields, &resources, &mut Bus::new()).await;
/// ```
pub struct Axon<In, Out, E, Res = ()> {
    /// The static structure (for visualization/analysis)
    pub schematic: Schematic,
    /// The runtime executor
    executor: Executor<In, Out, E, Res>,
}

impl<In, Out, E, Res> Clone for Axon<In, Out, E, Res> {
    fn clone(&self) -> Self {
        Self {
            schematic: self.schematic.clone(),
            executor: self.executor.clone(),
        }
    }
}

impl<In, E, Res> Axon<In, In, E, Res>
where
    In: Send + Sync + 'static,
    E: Send + 'static,
    Res: ResourceRequirement,
{
    /// Start defining a new Axon flow.
    /// This creates an Identity Axon (In -> In).
    pub fn start(label: &str) -> Self {
        let node = Node {
            id: uuid::Uuid::new_v4().to_string(),
            kind: NodeKind::Ingress,
            label: label.to_string(),
            input_type: "void".to_string(),
            output_type: type_name_of::<In>(),
        };

        let mut schematic = Schematic::new(label);
        schematic.nodes.push(node);

        let executor = executor(|input: In, _res, _bus| {
            Box::pin(std::future::ready(Outcome::Next(input))) as BoxFuture<'_, _>
        });

        Self {
            schematic,
            executor,
        }
    }
}

impl<In, Out, E, Res> Axon<In, Out, E, Res>
where
    In: Send + Sync + 'static,
    Out: Send + Sync + 'static,
    E: Send + 'static,
    Res: ResourceRequirement,
{
    /// Chain a transition to this Axon.
    pub fn then<Next, Trans>(self, transition: Trans) -> Axon<In, Next, E, Res>
    where
        Next: Send + Sync + 'static,
        Trans: Transition<Out, Next, Error = E, Resources = Res> + Clone,
    {
        let trans_label = type_name_of::<Trans>();

        // Decompose self to avoid partial move issues
        let Axon {
            mut schematic,
            executor: prev_executor,
        } = self;

        let next_node_id = uuid::Uuid::new_v4().to_string();
        let last_node_id = schematic
            .nodes
            .last()
            .map(|n| n.id.clone())
            .unwrap_or_default();

        schematic.nodes.push(Node {
            id: next_node_id.clone(),
            kind: NodeKind::Atom,
            label: trans_label,
            input_type: type_name_of::<Out>(),
            output_type: type_name_of::<Next>(),
        });
        schematic.edges.push(Edge {
            from: last_node_id,
            to: next_node_id,
            label: Some("Next".to_string()),
        });

        let next_executor = executor(move |input: In, res, bus| {
            let prev = prev_executor.clone();
            let trans = transition.clone();

            Box::pin(async move {
                // Reborrow bus so it stays usable for this step
                match prev(input, res, &mut *bus).await {
                    Outcome::Next(state) => trans.run(state, res, bus).await,
                    Outcome::Fault(e) => Outcome::Fault(e),
                }
            }) as BoxFuture<'_, _>
        });

        Axon {
            schematic,
            executor: next_executor,
        }
    }

    /// Execute the Axon with the given input.
    pub async fn execute(&self, input: In, resources: &Res, bus: &mut Bus) -> Outcome<Out, E> {
        let label = self.schematic.name.clone();
        (self.executor)(input, resources, bus)
            .instrument(tracing::info_span!("Circuit", vertex.circuit = %label))
            .await
    }

    /// Get a reference to the Schematic (structural view).
    pub fn schematic(&self) -> &Schematic {
        &self.schematic
    }

    /// Consume and return the Schematic.
    pub fn into_schematic(self) -> Schematic {
        self.schematic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter {
        calls: AtomicUsize,
    }

    impl ResourceRequirement for Counter {}

    #[derive(Clone)]
    struct AddOne;

    #[async_trait]
    impl Transition<i32, i32> for AddOne {
        type Error = String;
        type Resources = Counter;

        async fn run(
            &self,
            input: i32,
            resources: &Self::Resources,
            _bus: &mut Bus,
        ) -> Outcome<i32, Self::Error> {
            resources.calls.fetch_add(1, Ordering::SeqCst);
            Outcome::next(input + 1)
        }
    }

    #[derive(Clone)]
    struct RejectNegative;

    #[async_trait]
    impl Transition<i32, i32> for RejectNegative {
        type Error = String;
        type Resources = Counter;

        async fn run(
            &self,
            input: i32,
            resources: &Self::Resources,
            bus: &mut Bus,
        ) -> Outcome<i32, Self::Error> {
            resources.calls.fetch_add(1, Ordering::SeqCst);
            bus.insert(input);
            if input < 0 {
                Outcome::fault(format!("{input} is negative"))
            } else {
                Outcome::next(input)
            }
        }
    }

    #[derive(Clone)]
    struct Stringify;

    #[async_trait]
    impl Transition<i32, String> for Stringify {
        type Error = String;
        type Resources = Counter;

        async fn run(
            &self,
            input: i32,
            _resources: &Self::Resources,
            _bus: &mut Bus,
        ) -> Outcome<String, Self::Error> {
            Outcome::next(input.to_string())
        }
    }

    fn pipeline() -> Axon<i32, String, String, Counter> {
        Axon::<i32, i32, String, Counter>::start("Numbers")
            .then(RejectNegative)
            .then(AddOne)
            .then(Stringify)
    }

    #[tokio::test]
    async fn test_linear_execution() {
        let counter = Counter::default();
        let mut bus = Bus::new();

        let outcome = pipeline().execute(41, &counter, &mut bus).await;

        assert_eq!(outcome, Outcome::Next("42".to_string()));
        assert_eq!(counter.calls.load(Ordering::SeqCst), 2);
        assert_eq!(bus.get::<i32>(), Some(&41));
    }

    #[tokio::test]
    async fn test_fault_short_circuits() {
        let counter = Counter::default();
        let mut bus = Bus::new();

        let outcome = pipeline().execute(-1, &counter, &mut bus).await;

        assert_eq!(outcome, Outcome::Fault("-1 is negative".to_string()));
        // AddOne never ran
        assert_eq!(counter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_axon_is_reusable() {
        let axon = pipeline();
        let counter = Counter::default();

        let first = axon.execute(1, &counter, &mut Bus::new()).await;
        let second = axon.clone().execute(2, &counter, &mut Bus::new()).await;

        assert_eq!(first, Outcome::Next("2".to_string()));
        assert_eq!(second, Outcome::Next("3".to_string()));
    }

    #[test]
    fn test_schematic_records_each_transition() {
        let schematic = pipeline().into_schematic();

        assert_eq!(schematic.name, "Numbers");
        assert_eq!(
            schematic.labels(),
            vec!["Numbers", "RejectNegative", "AddOne", "Stringify"]
        );
        assert_eq!(schematic.edges.len(), 3);
        assert_eq!(schematic.nodes[0].kind, NodeKind::Ingress);
        assert_eq!(schematic.nodes[3].output_type, "String");
    }
}
