use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoleculeId {
    Dna,
    Hemoglobin,
    Glucose,
    Caffeine,
}

impl MoleculeId {
    /// Selector order; also the order of the `1`-`4` shortcuts.
    pub const ALL: [MoleculeId; 4] = [
        MoleculeId::Dna,
        MoleculeId::Hemoglobin,
        MoleculeId::Glucose,
        MoleculeId::Caffeine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoleculeId::Dna => "dna",
            MoleculeId::Hemoglobin => "hemoglobin",
            MoleculeId::Glucose => "glucose",
            MoleculeId::Caffeine => "caffeine",
        }
    }
}

impl fmt::Display for MoleculeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoleculeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoleculeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownMolecule(s.to_string()))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Properties {
    pub weight: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: &'static str,
    pub location: &'static str,
}

impl Properties {
    /// Key/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("weight", self.weight),
            ("type", self.kind),
            ("function", self.function),
            ("location", self.location),
        ]
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MoleculeRecord {
    pub id: MoleculeId,
    pub name: &'static str,
    pub formula: &'static str,
    pub model: &'static str,
    pub description: &'static str,
    pub properties: Properties,
    pub facts: [&'static str; 4],
}

static CATALOG: Lazy<HashMap<MoleculeId, MoleculeRecord>> = Lazy::new(|| {
    build_records()
        .into_iter()
        .map(|record| (record.id, record))
        .collect()
});

pub fn lookup(id: MoleculeId) -> &'static MoleculeRecord {
    // every MoleculeId has a record, see `build_records`
    &CATALOG[&id]
}

/// Lookup by wire id. Returns `None` for anything outside the catalog.
pub fn find(id: &str) -> Option<&'static MoleculeRecord> {
    id.parse::<MoleculeId>().ok().map(lookup)
}

pub fn records() -> impl Iterator<Item = &'static MoleculeRecord> {
    MoleculeId::ALL.into_iter().map(lookup)
}

fn build_records() -> Vec<MoleculeRecord> {
    vec![
        MoleculeRecord {
            id: MoleculeId::Dna,
            name: "DNA Helix",
            formula: "Deoxyribonucleic Acid",
            model: "/models/dna.glb",
            description: "DNA (deoxyribonucleic acid) is the molecule that carries the genetic instructions for life. Its iconic double helix structure, discovered by Watson and Crick in 1953, consists of two strands wound around each other, connected by base pairs.",
            properties: Properties {
                weight: "~2 trillion Da (human genome)",
                kind: "Nucleic Acid",
                function: "Genetic Information Storage",
                location: "Cell Nucleus",
            },
            facts: [
                "If unwound, human DNA would stretch about 6 feet long",
                "Contains approximately 3 billion base pairs",
                "99.9% identical between all humans",
                "Takes about 8 hours to replicate fully",
            ],
        },
        MoleculeRecord {
            id: MoleculeId::Hemoglobin,
            name: "Hemoglobin",
            formula: "C₂₉₅₂H₄₆₆₄O₈₃₂S₈Fe₄",
            model: "/models/hemoglobin.glb",
            description: "Hemoglobin is the iron-containing protein in red blood cells that carries oxygen from the lungs to the rest of the body. Each hemoglobin molecule contains four iron atoms, each capable of binding one oxygen molecule.",
            properties: Properties {
                weight: "64,458 Da",
                kind: "Metalloprotein",
                function: "Oxygen Transport",
                location: "Red Blood Cells",
            },
            facts: [
                "Contains 4 iron atoms per molecule",
                "Each red blood cell contains ~270 million hemoglobin molecules",
                "Changes color when bound to oxygen (bright red vs dark red)",
                "Makes up about 96% of red blood cell dry content",
            ],
        },
        MoleculeRecord {
            id: MoleculeId::Glucose,
            name: "Glucose",
            formula: "C₆H₁₂O₆",
            model: "/models/glucose.glb",
            description: "Glucose is a simple sugar and the primary source of energy for cells. It's the most important carbohydrate in biology, serving as both a fuel and a building block for more complex molecules.",
            properties: Properties {
                weight: "180.16 Da",
                kind: "Monosaccharide",
                function: "Cellular Energy Source",
                location: "Blood, Cells",
            },
            facts: [
                "Blood glucose levels are tightly regulated around 70-100 mg/dL",
                "The brain uses about 120 grams of glucose per day",
                "Can exist in two forms: alpha and beta glucose",
                "Plants produce it through photosynthesis",
            ],
        },
        MoleculeRecord {
            id: MoleculeId::Caffeine,
            name: "Caffeine",
            formula: "C₈H₁₀N₄O₂",
            model: "/models/caffeine.glb",
            description: "Caffeine is the world's most widely consumed psychoactive substance. It works by blocking adenosine receptors in the brain, preventing the onset of drowsiness and promoting alertness.",
            properties: Properties {
                weight: "194.19 Da",
                kind: "Alkaloid",
                function: "Stimulant",
                location: "Coffee, Tea, Cacao",
            },
            facts: [
                "Discovered in 1819 by German chemist Friedlieb Runge",
                "Half-life in the body is about 5-6 hours",
                "Lethal dose is about 10 grams (150+ cups of coffee)",
                "Found in over 60 plant species worldwide",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_a_record() {
        for id in MoleculeId::ALL {
            assert_eq!(lookup(id).id, id);
        }
        assert_eq!(CATALOG.len(), MoleculeId::ALL.len());
    }

    #[test]
    fn wire_ids_parse() {
        assert_eq!("glucose".parse::<MoleculeId>().ok(), Some(MoleculeId::Glucose));
        assert!("water".parse::<MoleculeId>().is_err());
        assert!(find("DNA").is_none());
        assert_eq!(find("caffeine").map(|r| r.name), Some("Caffeine"));
    }

    #[test]
    fn records_follow_selector_order() {
        let names: Vec<&str> = records().map(|r| r.name).collect();
        assert_eq!(names, ["DNA Helix", "Hemoglobin", "Glucose", "Caffeine"]);
    }

    #[test]
    fn properties_serialize_with_type_key() {
        let json = serde_json::to_value(&lookup(MoleculeId::Caffeine).properties).unwrap();
        assert_eq!(json["type"], "Alkaloid");
        assert_eq!(json["weight"], "194.19 Da");
    }
}
