use super::{Descriptor, Identifier, ModuleDependency, ModuleName};
use crate::graph::{CodeClass, Dependency};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;

/// A module: the maximal set of classes sharing one identifier, plus the
/// edge sets derived from it.
///
/// Modules are only ever constructed by [`Modules`](super::Modules), which
/// fixes the module- and undefined-dependency sets before anything is
/// handed to a consumer. Identity is the identifier alone; membership does
/// not participate in equality.
pub struct Module<D> {
    identifier: Identifier,
    descriptor: D,
    classes: Vec<CodeClass>,
    member_names: FxHashSet<String>,
    class_dependencies: BTreeSet<Dependency>,
    module_dependencies: Vec<ModuleDependency>,
    undefined_dependencies: BTreeSet<Dependency>,
}

impl<D: Descriptor> Module<D> {
    pub(crate) fn new(identifier: Identifier, descriptor: D, mut classes: Vec<CodeClass>) -> Self {
        classes.sort_by(|a, b| a.qualified_name().cmp(b.qualified_name()));
        let member_names: FxHashSet<String> = classes
            .iter()
            .map(|class| class.qualified_name().to_string())
            .collect();
        let class_dependencies = classes
            .iter()
            .flat_map(|class| class.dependencies())
            .filter(|dependency| !member_names.contains(&dependency.target))
            .cloned()
            .collect();
        Self {
            identifier,
            descriptor,
            classes,
            member_names,
            class_dependencies,
            module_dependencies: Vec::new(),
            undefined_dependencies: BTreeSet::new(),
        }
    }

    pub(crate) fn set_module_dependencies(&mut self, module_dependencies: Vec<ModuleDependency>) {
        let covered: BTreeSet<&Dependency> = module_dependencies
            .iter()
            .flat_map(|dependency| dependency.class_dependencies())
            .collect();
        self.undefined_dependencies = self
            .class_dependencies
            .iter()
            .filter(|dependency| !covered.contains(dependency))
            .cloned()
            .collect();
        self.module_dependencies = module_dependencies;
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn name(&self) -> &ModuleName {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }

    /// Member classes, sorted by qualified name.
    pub fn classes(&self) -> &[CodeClass] {
        &self.classes
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.member_names.contains(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All dependencies from a member class to a non-member class.
    pub fn class_dependencies(&self) -> &BTreeSet<Dependency> {
        &self.class_dependencies
    }

    /// The module-level dependencies leaving this module.
    pub fn module_dependencies(&self) -> &[ModuleDependency] {
        &self.module_dependencies
    }

    /// Outgoing class dependencies not covered by any module dependency.
    pub fn undefined_dependencies(&self) -> &BTreeSet<Dependency> {
        &self.undefined_dependencies
    }
}

impl<D> PartialEq for Module<D> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<D> Eq for Module<D> {}

impl<D> std::hash::Hash for Module<D> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl<D: Descriptor> fmt::Debug for Module<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("identifier", &self.identifier)
            .field("name", &self.name().as_str())
            .field("classes", &self.classes.len())
            .finish()
    }
}

impl<'a, D> IntoIterator for &'a Module<D> {
    type Item = &'a CodeClass;
    type IntoIter = std::slice::Iter<'a, CodeClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
