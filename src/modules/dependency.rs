use super::{Descriptor, Identifier, Module, ModuleName};
use crate::graph::Dependency;
use std::collections::BTreeSet;
use std::fmt;

/// An aggregated, directed dependency between two modules, carrying the
/// class-level dependencies that justify it.
///
/// Never constructed with an empty edge set — a pair of modules without
/// cross edges simply has no `ModuleDependency`. Identity is the ordered
/// (origin, target) identifier pair; the carried edges do not participate
/// in equality.
#[derive(Debug, Clone)]
pub struct ModuleDependency {
    origin: Identifier,
    origin_name: ModuleName,
    target: Identifier,
    target_name: ModuleName,
    class_dependencies: BTreeSet<Dependency>,
}

impl ModuleDependency {
    pub(crate) fn try_create<D: Descriptor>(
        origin: &Module<D>,
        target: &Module<D>,
    ) -> Option<Self> {
        let class_dependencies: BTreeSet<Dependency> = origin
            .class_dependencies()
            .iter()
            .filter(|dependency| target.contains(&dependency.target))
            .cloned()
            .collect();
        if class_dependencies.is_empty() {
            return None;
        }
        Some(Self {
            origin: origin.identifier().clone(),
            origin_name: origin.name().clone(),
            target: target.identifier().clone(),
            target_name: target.name().clone(),
            class_dependencies,
        })
    }

    pub fn origin(&self) -> &Identifier {
        &self.origin
    }

    pub fn origin_name(&self) -> &ModuleName {
        &self.origin_name
    }

    pub fn target(&self) -> &Identifier {
        &self.target
    }

    pub fn target_name(&self) -> &ModuleName {
        &self.target_name
    }

    /// The class-level dependencies this module dependency aggregates.
    pub fn class_dependencies(&self) -> &BTreeSet<Dependency> {
        &self.class_dependencies
    }

    /// Multi-line description: the module pair, then one line per
    /// underlying class dependency.
    pub fn description(&self) -> String {
        let class_descriptions: Vec<&str> = self
            .class_dependencies
            .iter()
            .map(|dependency| dependency.description.as_str())
            .collect();
        format!(
            "Module dependency [{} -> {}]:\n{}",
            self.origin_name,
            self.target_name,
            class_descriptions.join("\n")
        )
    }
}

impl PartialEq for ModuleDependency {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.target == other.target
    }
}

impl Eq for ModuleDependency {}

impl std::hash::Hash for ModuleDependency {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Display for ModuleDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Module dependency [{} -> {}]",
            self.origin_name, self.target_name
        )
    }
}
