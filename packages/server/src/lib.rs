// Organization Directory - API Core
//
// This crate provides the backend API for resolving organizations by an
// arbitrary combination of filter dimensions and hydrating each match into
// a full aggregate (organization + building + activities + phones).

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
