/// The explicit result of a transition in an Axon.
///
/// `Outcome` represents "Control Flow as Data".
/// Instead of implicit returns or panics, every state transition returns an `Outcome`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    /// Proceed to the next node strictly (Linear flow)
    Next(T),

    /// A structural fault (Error path)
    Fault(E),
}

impl<T, E> Outcome<T, E> {
    pub fn next(value: T) -> Self {
        Outcome::Next(value)
    }

    pub fn fault(error: E) -> Self {
        Outcome::Fault(error)
    }

    pub fn is_next(&self) -> bool {
        matches!(self, Outcome::Next(_))
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault(_))
    }

    /// Lift a `Result` into the linear path: `Ok` continues, `Err` faults.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(t) => Outcome::Next(t),
            Err(e) => Outcome::Fault(e),
        }
    }

    /// Leave the engine at the edge of a call site.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Next(t) => Ok(t),
            Outcome::Fault(e) => Err(e),
        }
    }
}
