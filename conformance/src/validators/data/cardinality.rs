//! Cardinality validator.
//!
//! Counts, for every `myOnto:Person` in the graph, the values of each property
//! restricted on the Person class and reports subjects outside the declared
//! bounds. The mapping never enforces these bounds, so violations are
//! warnings, one result per restriction.

use nobel_ontology::model::iris::PERSON;
use nobel_ontology::{Graph, Ontology, Restriction, Subject};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "data/cardinality";

/// Example subjects listed per violated restriction.
const MAX_EXAMPLES: usize = 5;

/// Checks every Person restriction against the graph's Person instances.
#[must_use]
pub fn validate(ontology: &Ontology, graph: &Graph) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let Some(person) = ontology.find_class(PERSON) else {
        report.push(TestResult::fail(VALIDATOR, "Person class is not declared"));
        return report;
    };

    let people: Vec<_> = graph.instances_of(PERSON).collect();
    for restriction in person.restrictions {
        report.push(check_restriction(restriction, graph, &people));
    }

    report
}

fn check_restriction(
    restriction: &Restriction,
    graph: &Graph,
    people: &[&Subject],
) -> TestResult {
    let property = local_name(restriction.on_property);
    let violations: Vec<String> = people
        .iter()
        .filter_map(|subject| {
            let count = graph.objects(*subject, restriction.on_property).count();
            (!restriction.cardinality.admits(count)).then(|| {
                let name = match *subject {
                    Subject::Iri(iri) => local_name(iri.as_str()).to_owned(),
                    Subject::Blank(node) => format!("_:{}", node.label()),
                };
                format!("{name} has {count}")
            })
        })
        .collect();

    if violations.is_empty() {
        return TestResult::pass(
            VALIDATOR,
            format!(
                "All {} Person instances have {} {property}",
                people.len(),
                restriction.cardinality
            ),
        );
    }

    let total = violations.len();
    let mut details: Vec<String> = violations.into_iter().take(MAX_EXAMPLES).collect();
    if total > MAX_EXAMPLES {
        details.push(format!("... and {} more", total - MAX_EXAMPLES));
    }
    TestResult::warn(
        VALIDATOR,
        format!(
            "{total} of {} Person instances do not have {} {property}",
            people.len(),
            restriction.cardinality
        ),
    )
    .with_details(details)
}

fn local_name(iri: &str) -> &str {
    iri.rsplit(['/', '#']).next().unwrap_or(iri)
}
