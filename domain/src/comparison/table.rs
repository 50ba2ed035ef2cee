//! Comparison table builder
//!
//! Derives the side-by-side table shown in the comparison panel: one
//! fixed feature column plus one column per selected policy. Scalar rows
//! render a field per policy; list rows union the feature entries of all
//! selected policies (deduplicated, alphabetically sorted) and resolve
//! each cell against the owning policy's list.

use crate::policy::entities::{FeatureCategory, Policy};
use crate::policy::feature;
use std::collections::BTreeSet;

/// One scalar row: a fixed label and one rendered value per policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// Resolution of a list-row cell for one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Entry present with a "Label: Value" value part.
    Value(String),
    /// Entry present with no value part.
    Present,
    /// Entry absent from this policy's list.
    Absent,
}

impl CellValue {
    /// Display text: the value, a checkmark, or a placeholder dash.
    pub fn display(&self) -> &str {
        match self {
            CellValue::Value(v) => v,
            CellValue::Present => "\u{2713}",
            CellValue::Absent => "-",
        }
    }
}

/// One row of a list-valued feature group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Label shown in the feature column (value part stripped).
    pub label: String,
    pub cells: Vec<CellValue>,
}

/// One grouped section of list rows ("Must Have" etc.).
#[derive(Debug, Clone)]
pub struct ListSection {
    pub category: FeatureCategory,
    pub rows: Vec<ListRow>,
}

/// The full derived comparison table.
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    /// Column headers: policy name + company, in selection order.
    pub headers: Vec<(String, String)>,
    pub scalar_rows: Vec<ScalarRow>,
    pub sections: Vec<ListSection>,
}

impl ComparisonTable {
    /// Build the table for up to five policies (extras are ignored).
    pub fn build(policies: &[Policy]) -> ComparisonTable {
        let policies = &policies[..policies.len().min(5)];

        let headers = policies
            .iter()
            .map(|p| (p.name.clone(), p.company.clone()))
            .collect();

        let scalar_rows = vec![
            ScalarRow {
                label: "Type",
                values: policies.iter().map(|p| p.policy_type.to_string()).collect(),
            },
            ScalarRow {
                label: "Short Description",
                values: policies.iter().map(|p| p.short_description.clone()).collect(),
            },
            ScalarRow {
                label: "Price Range",
                values: policies.iter().map(|p| p.price_range.clone()).collect(),
            },
            ScalarRow {
                label: "Rating",
                values: policies
                    .iter()
                    .map(|p| format!("{} \u{2605}", p.rating))
                    .collect(),
            },
            ScalarRow {
                label: "Reviews",
                values: policies
                    .iter()
                    .map(|p| group_thousands(p.reviews_count))
                    .collect(),
            },
        ];

        let sections = FeatureCategory::all()
            .into_iter()
            .map(|category| ListSection {
                category,
                rows: list_rows(policies, category),
            })
            .collect();

        ComparisonTable {
            headers,
            scalar_rows,
            sections,
        }
    }

    /// Number of policy columns (the feature column is extra).
    pub fn policy_count(&self) -> usize {
        self.headers.len()
    }
}

/// Union the category's entries across all policies and resolve cells.
fn list_rows(policies: &[Policy], category: FeatureCategory) -> Vec<ListRow> {
    // BTreeSet gives dedup + alphabetical order in one pass
    let union: BTreeSet<&String> = policies
        .iter()
        .flat_map(|p| p.features(category).iter())
        .collect();

    union
        .into_iter()
        .map(|entry| ListRow {
            label: feature::label(entry).to_string(),
            cells: policies
                .iter()
                .map(|p| resolve_cell(p.features(category), entry))
                .collect(),
        })
        .collect()
}

fn resolve_cell(entries: &[String], row_entry: &str) -> CellValue {
    let Some(found) = entries.iter().find(|e| feature::matches(e, row_entry)) else {
        return CellValue::Absent;
    };
    match feature::value(found) {
        Some(v) => CellValue::Value(v.to_string()),
        None => CellValue::Present,
    }
}

/// Thousands-grouped review count, e.g. 1200 -> "1,200".
fn group_thousands(n: u32) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
