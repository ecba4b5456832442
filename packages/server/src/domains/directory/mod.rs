//! Organization directory: multi-criteria resolution of organizations into
//! fully hydrated aggregates.

pub mod filters;
pub mod hydrator;
pub mod models;
pub mod resolution;
pub mod resolvers;
pub mod responses;
pub mod service;
