//! Session lifecycle and tick scheduling
//!
//! [`SessionController`] turns logical [`Command`]s into state transitions and
//! ticks the game while it runs. Each transition tells the [`TickScheduler`]
//! whether to arm or cancel its single pending deadline.

pub mod command;
pub mod controller;
pub mod scheduler;

pub use command::Command;
pub use controller::{Schedule, SessionController, SessionState, Transition};
pub use scheduler::TickScheduler;
