//! Core logic of the navigation list model.
//!
//! This module provides:
//! - [`classify`] section classification
//! - [`MyFilesBuilder`] synthetic-root construction
//! - the merge/order engine (internal, driven by the list model)
//! - [`NavigationListModel`] the observable list facade
//! - [`NavigationFlags`] feature flags and display strings
//! - [`ModelError`] error catalogue

mod classifier;
pub mod error;
mod flags;
mod grouper;
mod list_model;
mod my_files;
mod reorder;

pub use classifier::classify;
pub use error::ModelError;
pub use flags::NavigationFlags;
pub use grouper::device_groups_contiguous;
pub use list_model::NavigationListModel;
pub use my_files::MyFilesBuilder;
