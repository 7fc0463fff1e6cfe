//! Vertex Services form screens.
//!
//! The centre of the crate is [`signup::SignupWorkflow`]: four client-side
//! checks chained as typed transitions, followed by a simulated submission.
//! Login, session, routing and dashboard are the peer screens it sits among.

pub mod checks;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fields;
pub mod login;
pub mod routes;
pub mod session;
pub mod signup;
pub mod state;
pub mod submission;
pub mod view;

pub use config::{ConfigError, FormsConfig};
pub use error::{BackendError, SignupError};
pub use fields::{FieldError, FieldUpdate, SignupFields};
pub use signup::SignupWorkflow;
pub use state::{FormPhase, SignupFormState};

pub mod prelude {
    pub use crate::config::FormsConfig;
    pub use crate::dashboard::DashboardData;
    pub use crate::error::{BackendError, SignupError};
    pub use crate::fields::{FieldUpdate, SignupFields};
    pub use crate::login::{LoginError, LoginField, LoginForm};
    pub use crate::routes::{NavLink, NavTarget, Navigation, Route, Router};
    pub use crate::session::{Credentials, Session};
    pub use crate::signup::SignupWorkflow;
    pub use crate::state::{FormPhase, SignupFormState};
    pub use crate::submission::{SignupReceipt, SimulatedSignupBackend};
    pub use crate::view::SignupView;
}
