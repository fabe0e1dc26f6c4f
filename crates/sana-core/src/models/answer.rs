use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The value a patient gave for one question. A closed sum — the shape must
/// match the owning question's kind, which the engine validates before an
/// entry is accepted into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    /// A chosen option value, or a numeric answer entered as text.
    Text(String),
    /// Multi-select option values.
    MultiText(Vec<String>),
    /// A slider or numeric value.
    Number(f64),
}

impl AnswerValue {
    /// The value as a number, parsing `Text` if needed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse().ok(),
            AnswerValue::MultiText(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            AnswerValue::MultiText(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerEntry {
    pub question_id: String,
    pub value: AnswerValue,
}

/// Session-scoped mapping of question id to answer value. Insertion order is
/// preserved; re-answering a question overwrites in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerStore {
    entries: Vec<AnswerEntry>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        let question_id = question_id.into();
        match self.entries.iter_mut().find(|e| e.question_id == question_id) {
            Some(entry) => entry.value = value,
            None => self.entries.push(AnswerEntry { question_id, value }),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.entries
            .iter()
            .find(|e| e.question_id == question_id)
            .map(|e| &e.value)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    /// Numeric value for a question, if answered and numeric.
    pub fn number(&self, question_id: &str) -> Option<f64> {
        self.get(question_id).and_then(AnswerValue::as_number)
    }

    /// Text value for a question, if answered with text.
    pub fn text(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_text)
    }

    /// Multi-select values for a question, if answered multi.
    pub fn multi(&self, question_id: &str) -> Option<&[String]> {
        self.get(question_id).and_then(AnswerValue::as_multi)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnswerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerStore {
    fn from_iter<T: IntoIterator<Item = (String, AnswerValue)>>(iter: T) -> Self {
        let mut store = AnswerStore::new();
        for (id, value) in iter {
            store.insert(id, value);
        }
        store
    }
}
