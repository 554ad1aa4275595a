//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Another order already carries this order number.
    #[error("Order number already in use: {0}")]
    DuplicateOrderNumber(String),

    /// An order must contain at least one line item.
    #[error("Order must contain at least one item")]
    EmptyOrder,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
