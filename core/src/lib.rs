pub mod bus;
pub mod outcome;
pub mod schematic;
pub mod synapse;
pub mod telemetry;
pub mod transition;

pub use bus::Bus;
pub use outcome::Outcome;
pub use schematic::Schematic;
pub use synapse::Synapse;
pub use transition::{ResourceRequirement, Transition};

pub mod prelude {
    pub use crate::bus::Bus;
    pub use crate::outcome::Outcome;
    pub use crate::schematic::{Edge, Node, NodeKind, Schematic};
    pub use crate::synapse::Synapse;
    pub use crate::telemetry::Traced;
    pub use crate::transition::{ResourceRequirement, Transition};
}
