//! Integration tests for the diagram and JSON projections

use anyhow::Result;
use modgraph::render::{json, plantuml};
use modgraph::{CodeClass, CodeGraph, Modules};

fn fixture() -> CodeGraph {
    [
        CodeClass::new("shop.orders.OrderService")
            .depends_on("shop.billing.InvoiceService")
            .depends_on("shop.billing.PaymentService")
            .depends_on("java.util.List"),
        CodeClass::new("shop.billing.InvoiceService").depends_on("shop.shipping.Dispatcher"),
        CodeClass::new("shop.billing.PaymentService"),
        CodeClass::new("shop.shipping.Dispatcher"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn renders_component_diagram() -> Result<()> {
    let graph = fixture();
    let modules = Modules::by_packages(&graph, "shop.(*)")?;

    let diagram = plantuml::render(&modules)?;
    let expected = "\
@startuml
component \"Module [billing]\" as Modulebilling
component \"Module [orders]\" as Moduleorders
component \"Module [shipping]\" as Moduleshipping

[Modulebilling] --> [Moduleshipping]: 1
[Moduleorders] --> [Modulebilling]: 2
@enduml
";
    assert_eq!(diagram, expected);
    Ok(())
}

#[test]
fn diagram_counts_collapse_to_rendered_pairs() -> Result<()> {
    let graph = fixture();
    let modules = Modules::by_packages(&graph, "shop.(*)")?;

    let body = plantuml::render_body(&modules)?;
    // Two class-level edges orders -> billing collapse into one arrow line.
    assert_eq!(
        body.lines()
            .filter(|line| line.starts_with("[Moduleorders]"))
            .count(),
        1
    );
    Ok(())
}

#[test]
fn json_summary_round_trips_through_serde() -> Result<()> {
    let graph = fixture();
    let modules = Modules::by_packages(&graph, "shop.(*)")?;

    let rendered = json::render(&modules)?;
    let report: json::ModulesReport = serde_json::from_str(&rendered)?;

    let names: Vec<&str> = report
        .modules
        .iter()
        .map(|module| module.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Module [billing]", "Module [orders]", "Module [shipping]"]
    );

    let orders = &report.modules[1];
    assert_eq!(orders.identifier, vec!["orders"]);
    assert_eq!(orders.dependencies.len(), 1);
    assert_eq!(orders.dependencies[0].dependency_count, 2);
    // The java.util.List edge is covered by no module.
    assert_eq!(orders.undefined_dependencies, 1);
    Ok(())
}
