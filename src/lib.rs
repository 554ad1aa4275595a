//! # Storefront
//!
//! Backend core for a small e-commerce shop: products, users, and orders kept
//! in keyed stores, with an order lifecycle engine that keeps product stock
//! consistent with order state.
//!
//! Each record family is owned by a [`ResourceActor`](framework::ResourceActor)
//! that processes requests sequentially over a channel. Because an actor has
//! exclusive ownership of its store, read-modify-write operations on a stock
//! counter never interleave and need no locks.
//!
//! ## Module Tour
//!
//! - [`framework`] – the generic engine: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor),
//!   [`ResourceClient`](framework::ResourceClient), and a mock client for tests.
//! - [`model`] – the data types: [`Product`](model::Product),
//!   [`Order`](model::Order) (with its status state machine), [`User`](model::User).
//! - [`product_actor`], [`order_actor`], [`user_actor`] – the concrete
//!   `ActorEntity` implementations. The order entity's lifecycle hooks carry
//!   the inventory rules: stock is reserved on creation, restored on
//!   cancellation or deletion, and re-reserved when a cancelled order is
//!   reactivated.
//! - [`inventory`] – the [`InventoryAdjuster`](inventory::InventoryAdjuster),
//!   which replays an order's item snapshot against the product store.
//! - [`notify`] – the [`NotificationDispatcher`](notify::NotificationDispatcher)
//!   interface for post-creation emails/WhatsApp messages; dispatch is
//!   fire-and-forget and never affects the order.
//! - [`clients`] – typed wrappers ([`OrderClient`](clients::OrderClient),
//!   [`ProductClient`](clients::ProductClient), [`UserClient`](clients::UserClient))
//!   that hide message passing; this is the surface an HTTP layer would call.
//! - [`lifecycle`] – [`OrderSystem`](lifecycle::OrderSystem) wires the actors
//!   together and handles startup, tracing setup, and graceful shutdown.
//!
//! ## Running the demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;
