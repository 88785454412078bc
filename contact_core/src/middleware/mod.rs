//! Middleware components for the contact service

pub mod cors;
pub mod logging;
