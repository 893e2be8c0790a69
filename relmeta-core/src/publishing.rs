//! Publishing data: trade labels and catalog numbers

use crate::ids::{LabelIds, PublishingIds};
use crate::similarity::similarity;
use serde::{Deserialize, Serialize};

/// A trade label and the release's number in that label's catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "label", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub catno: String,
    #[serde(default, skip_serializing_if = "LabelIds::is_empty")]
    pub ids: LabelIds,
}

impl Label {
    pub fn new(name: &str, catno: &str) -> Self {
        Self {
            name: name.to_string(),
            catno: catno.to_string(),
            ids: LabelIds::new(),
        }
    }

    /// Catalog number similarity; the label name does not take part
    ///
    /// A blank catalog number on either side scores 0.0.
    pub fn compare(&self, other: &Label) -> f64 {
        if self.catno.is_empty() || other.catno.is_empty() {
            return 0.0;
        }
        similarity(&self.catno, &other.catno)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.catno.is_empty() && self.ids.is_empty()
    }
}

/// Labels of a release plus publishing-level identifiers (barcode)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publishing {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "PublishingIds::is_empty")]
    pub ids: PublishingIds,
}

impl Publishing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Best pairwise catalog number comparison
    ///
    /// Only pairs with a catalog number on both sides take part; `None`
    /// when there is no such pair.
    pub fn compare(&self, other: &Publishing) -> Option<f64> {
        let mut best: Option<f64> = None;
        for label in self.labels.iter().filter(|label| !label.catno.is_empty()) {
            for other_label in other.labels.iter().filter(|label| !label.catno.is_empty()) {
                let score = label.compare(other_label);
                best = Some(best.map_or(score, |current| current.max(score)));
            }
        }
        best
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.ids.is_empty()
    }

    pub fn clean(&mut self) {
        self.labels.retain(|label| !label.is_empty());
    }
}
