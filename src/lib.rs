//! Contact Flow - Three-Step Contact Inquiry Service
//!
//! This crate implements a contact form flow (input → confirm → complete)
//! with field validation, cascading service options, and a stub mail gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
