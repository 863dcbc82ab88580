//! AHP Compare - Smartphone decision support with the Analytical Hierarchy Process
//!
//! This crate ranks up to three smartphones across four fixed criteria
//! (price, performance, battery, screen) from six pairwise criterion
//! judgments, and drives the three-step comparison wizard over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
