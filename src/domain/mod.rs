//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine)
//! - `catalog` - Services and the categories/plans each one offers
//! - `form` - Contact form aggregate, screens, fields, and errors
//! - `validation` - Pure field validation rules
//! - `view` - Screen view models rendered for clients

pub mod catalog;
pub mod form;
pub mod foundation;
pub mod validation;
pub mod view;
