//! Module partitioning engine
//!
//! Groups the classes of a [`CodeGraph`](crate::graph::CodeGraph) into
//! disjoint modules via a pluggable [`Classifier`], derives per-module
//! metadata via a [`DescriptorDeriver`], and projects class-level
//! dependencies onto a module-level graph. Every cross-boundary class
//! dependency ends up either covered by a [`ModuleDependency`] or in the
//! origin module's undefined set.
//!
//! Construction is a single pure pass; the resulting [`Modules`] registry
//! and everything in it is immutable and safe to share across threads.

mod classify;
pub mod cycles;
mod dependency;
mod descriptor;
mod identifier;
mod module;
mod naming;
mod roots;
mod set;

pub use classify::{Classifier, PatternClassifier};
pub use dependency::ModuleDependency;
pub use descriptor::{
    Descriptor, DescriptorDeriver, NamedDescriptor, PayloadDescriptor, RootDescriptorDeriver,
};
pub use identifier::{Identifier, ModuleName};
pub use module::Module;
pub use naming::{substitute, NamePattern};
pub use roots::RootClassifier;
pub use set::Modules;

use crate::graph::PatternError;
use thiserror::Error;

/// Errors raised by module construction, lookup, and rendering.
///
/// None of these are transient: construction failures are caller bugs in
/// the classification or naming setup and abort the whole build; lookup
/// failures are local to the failing call.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("duplicate module identifier {identifier}")]
    DuplicateIdentifier { identifier: Identifier },

    #[error("duplicate module name '{name}'")]
    DuplicateName { name: ModuleName },

    #[error("identifier index {index} is out of bounds [1, {len}]")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("module name must not be empty or blank")]
    InvalidName,

    #[error("ambiguous module roots in package '{package}'")]
    AmbiguousRoot { package: String },

    #[error(
        "cannot derive descriptor for module {identifier}: \
         expected exactly one root class, found {found}"
    )]
    DescriptorDerivationFailed { identifier: Identifier, found: usize },

    #[error("no module matching {reference}")]
    NotFound { reference: String },

    #[error("render token '{token}' is produced by both module '{first}' and module '{second}'")]
    DuplicateRenderToken {
        token: String,
        first: ModuleName,
        second: ModuleName,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, ModuleError>;
