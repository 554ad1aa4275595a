//! Generic actor framework for resource management.
//!
//! The building blocks every store in this crate is made of: a trait for the
//! managed entity ([`ActorEntity`]), a generic actor that owns the keyed
//! store ([`ResourceActor`]), and a cloneable client ([`ResourceClient`]).
//!
//! See the [`mock`] module for testing clients without spawning actors.

pub mod core;
pub mod mock;

pub use core::{
    sequential_ids, ActorEntity, FrameworkError, ResourceActor, ResourceClient, ResourceRequest,
    Response,
};
