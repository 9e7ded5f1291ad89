//! Code graph models
//!
//! The input side of the engine: a frozen snapshot of classes and the
//! directed, described dependencies between them. The engine only reads
//! this graph; it never mutates it.

mod models;
mod pattern;

pub use models::{CodeClass, CodeGraph, Dependency};
pub use pattern::{PackagePattern, PatternError};
