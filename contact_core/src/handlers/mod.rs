//! HTTP handlers for the contact service

pub mod contact;
pub mod routes;
