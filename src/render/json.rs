//! JSON summary reporter
//!
//! Serializes the module registry as pretty-printed JSON: per module its
//! name, identifier, class count, outgoing module dependencies with edge
//! counts, and the number of undefined dependencies.

use crate::modules::{Descriptor, Modules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesReport {
    pub modules: Vec<ModuleReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleReport {
    pub name: String,
    pub identifier: Vec<String>,
    pub classes: usize,
    pub dependencies: Vec<DependencyReport>,
    pub undefined_dependencies: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyReport {
    pub target: String,
    pub dependency_count: usize,
}

impl ModulesReport {
    pub fn from_modules<D: Descriptor>(modules: &Modules<D>) -> Self {
        let modules = modules
            .iter()
            .map(|module| ModuleReport {
                name: module.name().to_string(),
                identifier: module.identifier().parts().to_vec(),
                classes: module.len(),
                dependencies: module
                    .module_dependencies()
                    .iter()
                    .map(|dependency| DependencyReport {
                        target: dependency.target_name().to_string(),
                        dependency_count: dependency.class_dependencies().len(),
                    })
                    .collect(),
                undefined_dependencies: module.undefined_dependencies().len(),
            })
            .collect();
        Self { modules }
    }
}

/// Render the registry summary as pretty-printed JSON.
pub fn render<D: Descriptor>(modules: &Modules<D>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ModulesReport::from_modules(modules))
}

/// Render the summary as compact JSON (single line).
pub fn render_compact<D: Descriptor>(modules: &Modules<D>) -> serde_json::Result<String> {
    serde_json::to_string(&ModulesReport::from_modules(modules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CodeClass, CodeGraph};

    fn fixture_modules() -> Modules<crate::modules::NamedDescriptor> {
        let graph: CodeGraph = [
            CodeClass::new("p.core.Engine")
                .depends_on("p.io.Reader")
                .depends_on("java.lang.String"),
            CodeClass::new("p.io.Reader"),
        ]
        .into_iter()
        .collect();
        Modules::by_packages(&graph, "p.(*)").expect("builds")
    }

    #[test]
    fn test_json_render_valid() {
        let json = render(&fixture_modules()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse JSON");

        let modules = parsed["modules"].as_array().expect("modules array");
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0]["name"], "Module [core]");
        assert_eq!(modules[0]["dependencies"][0]["target"], "Module [io]");
        assert_eq!(modules[0]["undefined_dependencies"], 1);
    }

    #[test]
    fn test_json_render_compact() {
        let json = render_compact(&fixture_modules()).expect("render compact JSON");
        assert!(!json.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json).expect("parse JSON");
    }
}
