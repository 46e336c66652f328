//! Application layer containing business logic services.
//!
//! Services coordinate the validation-ordered sequencing of storage gateway
//! calls behind each HTTP operation.

pub mod services;
