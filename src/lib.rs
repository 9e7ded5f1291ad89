//! modgraph - module partitioning for code dependency graphs
//!
//! Takes a frozen snapshot of classes and their dependencies, groups the
//! classes into disjoint modules (by package pattern, by root classes, or
//! by any function), and projects the class-level edges onto a module-level
//! graph. Every cross-boundary edge is either covered by a derived module
//! dependency or reported as undefined, which is what architecture
//! conformance checks and component diagrams are built on.
//!
//! # Example
//!
//! ```
//! use modgraph::{CodeClass, CodeGraph, Modules};
//!
//! let graph: CodeGraph = [
//!     CodeClass::new("com.app.billing.Invoice").depends_on("com.app.shared.Money"),
//!     CodeClass::new("com.app.shared.Money"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let modules = Modules::by_packages(&graph, "com.app.(*)")?;
//! let billing = modules.get_by_name("Module [billing]")?;
//! assert_eq!(billing.module_dependencies().len(), 1);
//! # Ok::<(), modgraph::ModuleError>(())
//! ```

pub mod graph;
pub mod modules;
pub mod render;

pub use graph::{CodeClass, CodeGraph, Dependency, PackagePattern, PatternError};
pub use modules::{
    Classifier, Descriptor, DescriptorDeriver, Identifier, Module, ModuleDependency, ModuleError,
    ModuleName, Modules, NamePattern, NamedDescriptor, PatternClassifier, PayloadDescriptor,
    Result, RootClassifier, RootDescriptorDeriver,
};
