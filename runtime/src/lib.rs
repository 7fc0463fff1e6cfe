pub mod axon;

pub mod prelude {
    pub use crate::axon::Axon;
    pub use vertex_core::prelude::*;
}

pub use axon::Axon;
