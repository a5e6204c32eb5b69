//! Ontology inventory validator.
//!
//! Verifies the static ontology and the schema part of a built graph:
//! - 2 classes, 11 properties, 6 restrictions on `myOnto:Person`
//! - 6 prize category individuals
//! - 15 `owl:differentFrom` triples, one per unordered pair of categories

use std::collections::BTreeSet;

use nobel_ontology::model::iris::{OWL_DIFFERENT_FROM, PERSON};
use nobel_ontology::{Graph, Ontology, Subject};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/inventory";

const EXPECTED_CLASSES: usize = 2;
const EXPECTED_PROPERTIES: usize = 11;
const EXPECTED_RESTRICTIONS: usize = 6;
const EXPECTED_CATEGORIES: usize = 6;

/// Validates inventory counts and category distinctness.
#[must_use]
pub fn validate(ontology: &Ontology, graph: &Graph) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_count(&mut report, "classes", ontology.class_count(), EXPECTED_CLASSES);
    check_count(&mut report, "properties", ontology.property_count(), EXPECTED_PROPERTIES);
    check_count(
        &mut report,
        "Person restrictions",
        ontology.find_class(PERSON).map_or(0, |c| c.restrictions.len()),
        EXPECTED_RESTRICTIONS,
    );
    check_count(
        &mut report,
        "categories",
        ontology.categories().count(),
        EXPECTED_CATEGORIES,
    );

    validate_category_distinctness(ontology, graph, &mut report);

    report
}

fn check_count(report: &mut ConformanceReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}

/// Every unordered pair of categories must be stated different exactly once.
fn validate_category_distinctness(
    ontology: &Ontology,
    graph: &Graph,
    report: &mut ConformanceReport,
) {
    let categories: Vec<&str> = ontology.categories().map(|c| c.id).collect();
    let mut seen: BTreeSet<(&str, &str)> = BTreeSet::new();
    let mut issues = Vec::new();
    let mut total = 0usize;

    for triple in graph.matching(None, Some(OWL_DIFFERENT_FROM), None) {
        total += 1;
        let (Subject::Iri(a), Some(b)) = (&triple.subject, triple.object.as_iri()) else {
            issues.push("owl:differentFrom between non-IRI terms".to_owned());
            continue;
        };
        let (a, b) = (a.as_str(), b.as_str());
        if a == b {
            issues.push(format!("{a} is stated different from itself"));
            continue;
        }
        let pair = if a < b { (a, b) } else { (b, a) };
        if !seen.insert(pair) {
            issues.push(format!("{} and {} are stated different twice", pair.0, pair.1));
        }
    }

    for (i, a) in categories.iter().enumerate() {
        for b in &categories[i + 1..] {
            let pair = if a < b { (*a, *b) } else { (*b, *a) };
            if !seen.contains(&pair) {
                issues.push(format!("{} and {} are never stated different", pair.0, pair.1));
            }
        }
    }

    let expected = categories.len() * categories.len().saturating_sub(1) / 2;
    if total != expected {
        issues.push(format!(
            "expected {expected} owl:differentFrom triples, found {total}"
        ));
    }

    if issues.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("All {expected} category pairs are stated different exactly once"),
        ));
    } else {
        report.push(
            TestResult::fail(VALIDATOR, "Category distinctness is incomplete").with_details(issues),
        );
    }
}
