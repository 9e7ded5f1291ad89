use super::{
    Classifier, Descriptor, DescriptorDeriver, Identifier, Module, ModuleDependency, ModuleError,
    ModuleName, NamePattern, NamedDescriptor, PatternClassifier, Result, RootClassifier,
};
use crate::graph::{CodeClass, CodeGraph};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::debug;

/// The complete, immutable module registry for one graph snapshot.
///
/// Built in a single pass: classify, group, derive descriptors, project
/// class dependencies onto module dependencies, compute undefined edges.
/// Any construction failure aborts the whole build; a partially-built
/// registry is never observable. Rebuild from scratch to change
/// classification, naming, or descriptor rules.
pub struct Modules<D> {
    modules: BTreeMap<Identifier, Module<D>>,
    by_name: BTreeMap<ModuleName, Identifier>,
}

impl<D: Descriptor> Modules<D> {
    /// Partition `graph` with an explicit classifier and descriptor deriver.
    pub fn define<C, V>(graph: &CodeGraph, classifier: &C, deriver: &V) -> Result<Self>
    where
        C: Classifier + ?Sized,
        V: DescriptorDeriver<D> + ?Sized,
    {
        let mut groups: BTreeMap<Identifier, Vec<CodeClass>> = BTreeMap::new();
        let mut ignored = 0usize;
        for class in graph {
            let identifier = classifier.classify(class)?;
            if identifier.is_ignore() {
                ignored += 1;
                continue;
            }
            groups.entry(identifier).or_default().push(class.clone());
        }
        debug!(
            "grouped {} classes into {} modules ({} ignored)",
            graph.len() - ignored,
            groups.len(),
            ignored
        );

        let mut modules: Vec<Module<D>> = Vec::with_capacity(groups.len());
        let mut by_name: BTreeMap<ModuleName, Identifier> = BTreeMap::new();
        for (identifier, members) in groups {
            let descriptor = deriver.derive(&identifier, &members)?;
            let name = descriptor.name().clone();
            if by_name.insert(name.clone(), identifier.clone()).is_some() {
                return Err(ModuleError::DuplicateName { name });
            }
            modules.push(Module::new(identifier, descriptor, members));
        }

        let mut outgoing_per_module: Vec<Vec<ModuleDependency>> =
            Vec::with_capacity(modules.len());
        for origin in &modules {
            let mut outgoing = Vec::new();
            for target in &modules {
                if origin.identifier() == target.identifier() {
                    continue;
                }
                if let Some(dependency) = ModuleDependency::try_create(origin, target) {
                    outgoing.push(dependency);
                }
            }
            outgoing_per_module.push(outgoing);
        }
        debug!(
            "derived {} module dependencies",
            outgoing_per_module.iter().map(Vec::len).sum::<usize>()
        );

        let mut registry = BTreeMap::new();
        for (mut module, outgoing) in modules.into_iter().zip(outgoing_per_module) {
            module.set_module_dependencies(outgoing);
            registry.insert(module.identifier().clone(), module);
        }
        Ok(Self {
            modules: registry,
            by_name,
        })
    }

    /// Partition by root classes: `extract` returns the descriptor for root
    /// classes and `None` for everything else. Each root's identifier is its
    /// descriptor name; all other classes inherit the nearest enclosing
    /// root's module.
    pub fn by_root_descriptors<F>(graph: &CodeGraph, extract: F) -> Result<Self>
    where
        D: Clone,
        F: Fn(&CodeClass) -> Option<D>,
    {
        let mut descriptors: FxHashMap<Identifier, D> = FxHashMap::default();
        let mut roots_by_package: FxHashMap<String, Vec<Identifier>> = FxHashMap::default();
        for class in graph {
            if let Some(descriptor) = extract(class) {
                let identifier = Identifier::from_parts([descriptor.name().as_str()]);
                if descriptors.insert(identifier.clone(), descriptor).is_some() {
                    return Err(ModuleError::DuplicateIdentifier { identifier });
                }
                let identifiers = roots_by_package
                    .entry(class.package().to_string())
                    .or_default();
                if !identifiers.contains(&identifier) {
                    identifiers.push(identifier);
                }
            }
        }
        debug!("discovered {} module roots", descriptors.len());

        let classifier = RootClassifier::from_packages(roots_by_package);
        let deriver = |identifier: &Identifier, _members: &[CodeClass]| {
            descriptors
                .get(identifier)
                .cloned()
                .ok_or_else(|| ModuleError::NotFound {
                    reference: format!("identifier {identifier}"),
                })
        };
        Self::define(graph, &classifier, &deriver)
    }

    pub fn get(&self, identifier: &Identifier) -> Result<&Module<D>> {
        self.modules
            .get(identifier)
            .ok_or_else(|| ModuleError::NotFound {
                reference: format!("identifier {identifier}"),
            })
    }

    pub fn get_by_identifier(&self, parts: &[&str]) -> Result<&Module<D>> {
        self.get(&Identifier::from_parts(parts.iter().copied()))
    }

    pub fn get_by_name(&self, name: &str) -> Result<&Module<D>> {
        let identifier = ModuleName::new(name)
            .ok()
            .and_then(|name| self.by_name.get(&name))
            .ok_or_else(|| ModuleError::NotFound {
                reference: format!("name '{name}'"),
            })?;
        self.get(identifier)
    }

    /// All module names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &ModuleName> {
        self.by_name.keys()
    }

    /// All modules, ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &Module<D>> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Modules<NamedDescriptor> {
    /// Partition by a package pattern with default naming.
    pub fn by_packages(graph: &CodeGraph, package_pattern: &str) -> Result<Self> {
        Self::define(
            graph,
            &PatternClassifier::new(package_pattern)?,
            &NamePattern::default(),
        )
    }

    /// Partition by a package pattern, naming modules via a `$i` template.
    pub fn by_packages_named(
        graph: &CodeGraph,
        package_pattern: &str,
        name_template: &str,
    ) -> Result<Self> {
        Self::define(
            graph,
            &PatternClassifier::new(package_pattern)?,
            &NamePattern::from_template(name_template),
        )
    }
}

impl<'a, D> IntoIterator for &'a Modules<D> {
    type Item = &'a Module<D>;
    type IntoIter = std::collections::btree_map::Values<'a, Identifier, Module<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.values()
    }
}
