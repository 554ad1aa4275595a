//! Runtime orchestration and lifecycle management.
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. This module is the conductor:
//!
//! - [`OrderSystem`] – creates all actors, injects dependencies at start
//!   (late binding via the context argument to `run()`), and coordinates
//!   graceful shutdown.
//! - [`setup_tracing`] – initializes the logging subscriber.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
