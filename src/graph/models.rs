use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A directed, described dependency between two classes.
///
/// Dependencies are plain values: two dependencies are the same edge iff
/// origin, target, and description all match. No deduplication happens
/// beyond that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dependency {
    pub origin: String,
    pub target: String,
    pub description: String,
}

impl Dependency {
    /// Create a dependency with the default description.
    pub fn new(origin: &str, target: &str) -> Self {
        Self {
            origin: origin.to_string(),
            target: target.to_string(),
            description: format!("Class <{origin}> depends on class <{target}>"),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A class in the code graph.
///
/// Identity is the fully-qualified name; the package is the enclosing-scope
/// chain, derived from it. Outgoing dependencies hang off the class itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeClass {
    qualified_name: String,
    simple_name: String,
    package: String,
    dependencies: Vec<Dependency>,
}

impl CodeClass {
    pub fn new(qualified_name: &str) -> Self {
        let (package, simple_name) = match qualified_name.rsplit_once('.') {
            Some((package, simple)) => (package.to_string(), simple.to_string()),
            None => (String::new(), qualified_name.to_string()),
        };
        Self {
            qualified_name: qualified_name.to_string(),
            simple_name,
            package,
            dependencies: Vec::new(),
        }
    }

    /// Add an outgoing dependency with the default description.
    pub fn depends_on(mut self, target: &str) -> Self {
        self.dependencies
            .push(Dependency::new(&self.qualified_name, target));
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Outgoing dependencies of this class, members and non-members alike.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}

impl PartialEq for CodeClass {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for CodeClass {}

impl std::hash::Hash for CodeClass {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}

/// A read-only registry of classes keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct CodeGraph {
    classes: Vec<CodeClass>,
    by_name: FxHashMap<String, usize>,
}

impl CodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class; a class with the same qualified name replaces the
    /// earlier one.
    pub fn add(&mut self, class: CodeClass) {
        match self.by_name.get(class.qualified_name()) {
            Some(&index) => self.classes[index] = class,
            None => {
                self.by_name
                    .insert(class.qualified_name().to_string(), self.classes.len());
                self.classes.push(class);
            }
        }
    }

    pub fn get(&self, qualified_name: &str) -> Option<&CodeClass> {
        self.by_name
            .get(qualified_name)
            .map(|&index| &self.classes[index])
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.by_name.contains_key(qualified_name)
    }

    pub fn classes(&self) -> &[CodeClass] {
        &self.classes
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeClass> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<CodeClass> for CodeGraph {
    fn from_iter<I: IntoIterator<Item = CodeClass>>(iter: I) -> Self {
        let mut graph = CodeGraph::new();
        for class in iter {
            graph.add(class);
        }
        graph
    }
}

impl<'a> IntoIterator for &'a CodeGraph {
    type Item = &'a CodeClass;
    type IntoIter = std::slice::Iter<'a, CodeClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
