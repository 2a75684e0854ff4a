//! Profile slot types.
//!
//! The orchestrator fills a fixed set of profile slots (age, sex, smoker,
//! children, region, height, weight, BMI) turn by turn and echoes the
//! current state on every response. The client only displays them; it
//! never edits or submits slots directly.

use serde::{Deserialize, Serialize};

use std::fmt;

/// A single extracted slot value.
///
/// Slot extraction is LLM-driven on the backend, so values arrive as
/// whatever JSON the extractor produced: numbers (age, BMI), strings
/// (sex, region, "yes"/"no"), occasionally booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Number(n) => write!(f, "{n}"),
            SlotValue::Text(s) => write!(f, "{s}"),
            SlotValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// The orchestrator's per-conversation profile state.
///
/// Field order matches the orchestrator's slot template and is the order
/// used for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSlots {
    #[serde(default)]
    pub age: Option<SlotValue>,
    #[serde(default)]
    pub sex: Option<SlotValue>,
    #[serde(default)]
    pub smoker: Option<SlotValue>,
    #[serde(default)]
    pub children: Option<SlotValue>,
    #[serde(default)]
    pub region: Option<SlotValue>,
    #[serde(default)]
    pub height: Option<SlotValue>,
    #[serde(default)]
    pub weight: Option<SlotValue>,
    #[serde(default)]
    pub bmi: Option<SlotValue>,
}

impl ProfileSlots {
    /// Display rows in slot-template order, labeled the way the advisor
    /// names them.
    pub fn rows(&self) -> [(&'static str, Option<&SlotValue>); 8] {
        [
            ("年齡", self.age.as_ref()),
            ("性別", self.sex.as_ref()),
            ("是否吸菸", self.smoker.as_ref()),
            ("孩子數量", self.children.as_ref()),
            ("居住地", self.region.as_ref()),
            ("身高", self.height.as_ref()),
            ("體重", self.weight.as_ref()),
            ("BMI", self.bmi.as_ref()),
        ]
    }

    /// How many slots have been filled so far.
    pub fn filled_count(&self) -> usize {
        self.rows().iter().filter(|(_, v)| v.is_some()).count()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }
}
