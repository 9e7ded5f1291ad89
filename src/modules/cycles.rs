//! Cycle detection on the module dependency graph
//!
//! Finds strongly connected components of the projected module graph via
//! Tarjan's algorithm (O(V+E)); every SCC with more than one module is a
//! dependency cycle.

use super::{Descriptor, ModuleName, Modules};
use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;
use rustc_hash::FxHashMap;
use tracing::debug;

/// All module dependency cycles, each rotated to start at its
/// lexicographically smallest module name and sorted for stable output.
pub fn find_cycles<D: Descriptor>(modules: &Modules<D>) -> Vec<Vec<ModuleName>> {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let mut names = Vec::with_capacity(modules.len());
    let mut indices = FxHashMap::default();

    for module in modules {
        let index = graph.add_node(());
        indices.insert(module.identifier().clone(), index);
        names.push(module.name().clone());
    }
    for module in modules {
        for dependency in module.module_dependencies() {
            if let (Some(&origin), Some(&target)) = (
                indices.get(dependency.origin()),
                indices.get(dependency.target()),
            ) {
                graph.add_edge(origin, target, ());
            }
        }
    }

    let mut cycles: Vec<Vec<ModuleName>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            normalize_cycle(
                scc.into_iter()
                    .map(|index| names[index.index()].clone())
                    .collect(),
            )
        })
        .collect();
    cycles.sort();
    debug!("found {} module cycles", cycles.len());
    cycles
}

/// Rotate a cycle to start with its smallest element so equal cycles
/// compare equal regardless of traversal order.
fn normalize_cycle(cycle: Vec<ModuleName>) -> Vec<ModuleName> {
    let min_index = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, name)| *name)
        .map(|(index, _)| index)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&cycle[min_index..]);
    normalized.extend_from_slice(&cycle[..min_index]);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CodeClass, CodeGraph};

    fn name(value: &str) -> ModuleName {
        ModuleName::new(value).expect("valid name")
    }

    #[test]
    fn test_two_module_cycle() {
        let graph: CodeGraph = [
            CodeClass::new("p.a.First").depends_on("p.b.Second"),
            CodeClass::new("p.b.Second").depends_on("p.a.First"),
            CodeClass::new("p.c.Third").depends_on("p.a.First"),
        ]
        .into_iter()
        .collect();
        let modules = Modules::by_packages(&graph, "p.(*)").expect("builds");

        let cycles = find_cycles(&modules);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0], vec![name("Module [a]"), name("Module [b]")]);
    }

    #[test]
    fn test_acyclic_module_graph() {
        let graph: CodeGraph = [
            CodeClass::new("p.a.First").depends_on("p.b.Second"),
            CodeClass::new("p.b.Second").depends_on("p.c.Third"),
            CodeClass::new("p.c.Third"),
        ]
        .into_iter()
        .collect();
        let modules = Modules::by_packages(&graph, "p.(*)").expect("builds");

        assert!(find_cycles(&modules).is_empty());
    }

    #[test]
    fn test_normalize_cycle_rotation() {
        let cycle = vec![name("C"), name("A"), name("B")];
        assert_eq!(
            normalize_cycle(cycle),
            vec![name("A"), name("B"), name("C")]
        );
    }
}
