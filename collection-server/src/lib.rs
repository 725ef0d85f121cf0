//! Garbage-collection schedule server.
//!
//! Shows which streets each collection route visits on each day, with
//! day toggles, a street search box and a route selector.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod view;
pub mod web;
