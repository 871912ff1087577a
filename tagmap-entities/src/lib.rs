//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # tagmap-entities
//!
//! Reusable, agnostic domain entities for TagMap.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod color;
pub mod id;
pub mod item;
pub mod percent;
pub mod tag;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
