use std::collections::HashMap;

use serde::Serialize;
use ts_rs::TS;

use sana_core::models::question::{Question, QuestionKind};

use crate::error::CatalogError;

/// A verified, immutable questionnaire catalog: the declared question order,
/// an id index, and the start question.
///
/// Construction checks referential integrity (no dangling successors or
/// branch targets) and per-question shape rules, so sessions can trust every
/// id they resolve. Cycle freedom along reachable paths is a property the
/// catalog author must ensure; it is not detected here.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    start_id: String,
    #[serde(skip)]
    #[ts(skip)]
    index: HashMap<String, usize>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>, start_id: impl Into<String>) -> Result<Self, CatalogError> {
        let start_id = start_id.into();

        let mut index = HashMap::with_capacity(questions.len());
        for (pos, q) in questions.iter().enumerate() {
            if index.insert(q.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateQuestion(q.id.clone()));
            }
        }

        if !index.contains_key(&start_id) {
            return Err(CatalogError::UnknownStart(start_id));
        }

        for q in &questions {
            if let Some(next) = &q.next_question_id
                && !index.contains_key(next)
            {
                return Err(CatalogError::DanglingNext {
                    from: q.id.clone(),
                    to: next.clone(),
                });
            }

            for (value, target) in &q.branches {
                if q.option_by_value(value).is_none() {
                    return Err(CatalogError::UnknownBranchValue {
                        from: q.id.clone(),
                        value: value.clone(),
                    });
                }
                if !index.contains_key(target) {
                    return Err(CatalogError::DanglingBranch {
                        from: q.id.clone(),
                        value: value.clone(),
                        to: target.clone(),
                    });
                }
            }

            if q.is_choice() && q.options.is_empty() {
                return Err(CatalogError::MissingOptions(q.id.clone()));
            }

            if q.kind == QuestionKind::Slider && (q.min.is_none() || q.max.is_none()) {
                return Err(CatalogError::MissingBounds(q.id.clone()));
            }

            if let (Some(min), Some(max)) = (q.min, q.max)
                && min > max
            {
                return Err(CatalogError::InvertedBounds {
                    id: q.id.clone(),
                    min,
                    max,
                });
            }
        }

        Ok(Self {
            questions,
            start_id,
            index,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&pos| &self.questions[pos])
    }

    /// Position of a question in the declared catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn start(&self) -> &Question {
        // Verified to exist in `new`.
        &self.questions[self.index[&self.start_id]]
    }

    pub fn start_id(&self) -> &str {
        &self.start_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sana_core::models::question::QuestionOption;

    fn question(id: &str, next: Option<&str>) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {id}"),
            description: None,
            kind: QuestionKind::Number,
            options: Vec::new(),
            min: Some(0.0),
            max: Some(10.0),
            unit: None,
            next_question_id: next.map(str::to_string),
            branches: HashMap::new(),
        }
    }

    #[test]
    fn accepts_well_formed_catalog() {
        let catalog =
            QuestionCatalog::new(vec![question("a", Some("b")), question("b", None)], "a").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.start().id, "a");
        assert_eq!(catalog.position("b"), Some(1));
    }

    #[test]
    fn rejects_dangling_next() {
        let err = QuestionCatalog::new(vec![question("a", Some("ghost"))], "a").unwrap_err();
        assert!(matches!(err, CatalogError::DanglingNext { .. }));
    }

    #[test]
    fn rejects_unknown_start() {
        let err = QuestionCatalog::new(vec![question("a", None)], "missing").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownStart(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err =
            QuestionCatalog::new(vec![question("a", None), question("a", None)], "a").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateQuestion(_)));
    }

    #[test]
    fn rejects_branch_on_undeclared_option() {
        let mut q = question("a", None);
        q.kind = QuestionKind::SingleChoice;
        q.min = None;
        q.max = None;
        q.options = vec![QuestionOption {
            id: "a-yes".into(),
            text: "Yes".into(),
            value: "yes".into(),
        }];
        q.branches.insert("maybe".into(), "a".into());

        let err = QuestionCatalog::new(vec![q], "a").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownBranchValue { .. }));
    }

    #[test]
    fn rejects_slider_without_bounds() {
        let mut q = question("a", None);
        q.kind = QuestionKind::Slider;
        q.max = None;

        let err = QuestionCatalog::new(vec![q], "a").unwrap_err();
        assert!(matches!(err, CatalogError::MissingBounds(_)));
    }
}
