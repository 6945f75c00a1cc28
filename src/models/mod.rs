//! Models module for the SDK
//!
//! Defines the core data structures shared across the SDK: the contact
//! record with its draft/patch companions, and the transient geo option
//! types sourced from the directory service.

pub mod contact;
pub mod geo;

pub use contact::{ContactDraft, ContactPatch, ContactRecord, Gender};
pub use geo::CallingCodeOption;
