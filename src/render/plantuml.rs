//! PlantUML component-diagram rendering
//!
//! One `component` declaration per module and one arrow line per module
//! pair, annotated with the number of class-level dependencies it
//! aggregates. Arrow lines are sorted; declarations follow identifier
//! order, so output is deterministic.

use crate::modules::{Descriptor, Identifier, ModuleError, Modules, Result};
use std::collections::BTreeMap;

const DIAGRAM_TEMPLATE: &str = "@startuml\n${body}\n@enduml\n";

/// Render the full diagram text.
pub fn render<D: Descriptor>(modules: &Modules<D>) -> Result<String> {
    Ok(DIAGRAM_TEMPLATE.replace("${body}", &render_body(modules)?))
}

/// Render only the diagram body: declarations, a blank line, arrows.
pub fn render_body<D: Descriptor>(modules: &Modules<D>) -> Result<String> {
    let tokens = render_tokens(modules)?;

    let mut lines: Vec<String> = Vec::new();
    for module in modules {
        lines.push(format!(
            "component \"{}\" as {}",
            module.name(),
            tokens[module.identifier()]
        ));
    }
    lines.push(String::new());

    let mut counted: BTreeMap<String, usize> = BTreeMap::new();
    for module in modules {
        for dependency in module.module_dependencies() {
            let arrow = format!(
                "[{}] --> [{}]",
                tokens[dependency.origin()],
                tokens[dependency.target()]
            );
            *counted.entry(arrow).or_insert(0) += dependency.class_dependencies().len();
        }
    }
    for (arrow, count) in counted {
        lines.push(format!("{arrow}: {count}"));
    }

    Ok(lines.join("\n"))
}

/// Node identifier tokens per module: the display name stripped of all
/// non-word characters. Distinct modules collapsing to the same token make
/// the diagram ambiguous, so that fails instead of silently merging them.
fn render_tokens<D: Descriptor>(modules: &Modules<D>) -> Result<BTreeMap<Identifier, String>> {
    let mut tokens = BTreeMap::new();
    let mut owners: BTreeMap<String, &crate::modules::ModuleName> = BTreeMap::new();
    for module in modules {
        let token = sanitize(module.name().as_str());
        if let Some(first) = owners.insert(token.clone(), module.name()) {
            return Err(ModuleError::DuplicateRenderToken {
                token,
                first: first.clone(),
                second: module.name().clone(),
            });
        }
        tokens.insert(module.identifier().clone(), token);
    }
    Ok(tokens)
}

fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
