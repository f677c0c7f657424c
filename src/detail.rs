use serde::Serialize;

use crate::catalog::{self, MoleculeId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyItem {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub formula: String,
    pub description: String,
    pub model: String,
    pub properties: Vec<PropertyItem>,
    pub facts: Vec<String>,
}

/// Single-molecule layout for `id`, or `None` when `id` is not in the catalog.
pub fn render_detail(id: &str) -> Option<DetailView> {
    catalog::find(id).map(|record| render_detail_for(record.id))
}

pub fn render_detail_for(id: MoleculeId) -> DetailView {
    let record = catalog::lookup(id);
    DetailView {
        title: record.name.to_string(),
        formula: record.formula.to_string(),
        description: record.description.to_string(),
        model: record.model.to_string(),
        properties: record
            .properties
            .entries()
            .into_iter()
            .map(|(key, value)| PropertyItem {
                label: capitalize(key),
                value: value.to_string(),
            })
            .collect(),
        facts: record.facts.iter().map(|f| f.to_string()).collect(),
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
