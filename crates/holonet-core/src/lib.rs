//! Ambient building blocks shared by Holonet services: tracing setup,
//! HTTP middleware layers and health handlers.

pub mod health;
pub mod middleware;
pub mod tracing;
