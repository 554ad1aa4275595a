//! Product-specific resource logic, including stock adjustment actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::{sequential_ids, ResourceActor};
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32, sequential_ids("product"));
    let client = ProductClient::new(generic_client);
    (actor, client)
}
