use super::{Classifier, Identifier, ModuleError, Result};
use crate::graph::{CodeClass, CodeGraph};
use rustc_hash::FxHashMap;

/// Classifies every class by the nearest enclosing package that contains a
/// root class.
///
/// Roots are discovered up front; classification walks a class's package
/// chain upward and assigns the identifier of the first package that
/// directly contains a root. A package containing roots with conflicting
/// identities makes every class at or below it unclassifiable — that is a
/// configuration error, not a tie to break.
pub struct RootClassifier {
    roots_by_package: FxHashMap<String, Vec<Identifier>>,
}

impl RootClassifier {
    /// Discover root classes in `graph`.
    ///
    /// `identify` fuses the root predicate and the root's identity: return
    /// `Some(identifier)` for root classes, `None` for everything else.
    pub fn discover<F>(graph: &CodeGraph, identify: F) -> Self
    where
        F: Fn(&CodeClass) -> Option<Identifier>,
    {
        let mut roots_by_package: FxHashMap<String, Vec<Identifier>> = FxHashMap::default();
        for class in graph {
            if let Some(identifier) = identify(class) {
                let identifiers = roots_by_package
                    .entry(class.package().to_string())
                    .or_default();
                if !identifiers.contains(&identifier) {
                    identifiers.push(identifier);
                }
            }
        }
        Self { roots_by_package }
    }

    pub(crate) fn from_packages(
        roots_by_package: FxHashMap<String, Vec<Identifier>>,
    ) -> Self {
        Self { roots_by_package }
    }
}

impl Classifier for RootClassifier {
    fn classify(&self, class: &CodeClass) -> Result<Identifier> {
        for package in enclosing_packages(class.package()) {
            if let Some(identifiers) = self.roots_by_package.get(package) {
                return match identifiers.as_slice() {
                    [identifier] => Ok(identifier.clone()),
                    _ => Err(ModuleError::AmbiguousRoot {
                        package: package.to_string(),
                    }),
                };
            }
        }
        Ok(Identifier::ignore())
    }
}

/// The package itself, then each parent package up to the top level.
fn enclosing_packages(package: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(package), |current| {
        current.rsplit_once('.').map(|(parent, _)| parent)
    })
}
