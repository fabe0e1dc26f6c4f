use std::collections::HashMap;

use sana_catalog::questionnaires::diabetes::DiabetesRisk;
use sana_catalog::{QuestionCatalog, Questionnaire};
use sana_core::factors;
use sana_core::models::answer::{AnswerStore, AnswerValue};
use sana_core::models::question::{Question, QuestionKind, QuestionOption};
use sana_core::models::submission::SubmissionStatus;
use sana_engine::navigate::next_question;
use sana_engine::{EngineError, Session, SessionStep, ValidationFailure};

fn option(question_id: &str, value: &str) -> QuestionOption {
    QuestionOption {
        id: format!("{question_id}-{value}"),
        text: value.to_string(),
        value: value.to_string(),
    }
}

/// Q1 branches yes -> Q2, no -> Q3; `fallback` controls whether Q1 also has
/// a static successor (Q2) for unlisted options.
fn branching_catalog(fallback: bool) -> QuestionCatalog {
    let mut branches = HashMap::new();
    branches.insert("yes".to_string(), "q2".to_string());
    branches.insert("no".to_string(), "q3".to_string());

    let q1 = Question {
        id: "q1".to_string(),
        text: "Branch?".to_string(),
        description: None,
        kind: QuestionKind::SingleChoice,
        options: vec![option("q1", "yes"), option("q1", "no"), option("q1", "maybe")],
        min: None,
        max: None,
        unit: None,
        next_question_id: fallback.then(|| "q2".to_string()),
        branches,
    };
    let terminal = |id: &str| Question {
        id: id.to_string(),
        text: id.to_string(),
        description: None,
        kind: QuestionKind::Number,
        options: Vec::new(),
        min: None,
        max: None,
        unit: None,
        next_question_id: None,
        branches: HashMap::new(),
    };

    QuestionCatalog::new(vec![q1, terminal("q2"), terminal("q3")], "q1").unwrap()
}

#[test]
fn branches_route_by_selected_option() {
    let catalog = branching_catalog(true);
    let answers = AnswerStore::new();

    let yes = option("q1", "yes");
    let no = option("q1", "no");
    assert_eq!(
        next_question(&catalog, "q1", Some(&yes), &answers).map(|q| q.id.as_str()),
        Some("q2")
    );
    assert_eq!(
        next_question(&catalog, "q1", Some(&no), &answers).map(|q| q.id.as_str()),
        Some("q3")
    );
}

#[test]
fn unlisted_option_falls_back_to_static_successor() {
    let catalog = branching_catalog(true);
    let maybe = option("q1", "maybe");
    let next = next_question(&catalog, "q1", Some(&maybe), &AnswerStore::new());
    assert_eq!(next.map(|q| q.id.as_str()), Some("q2"));
}

#[test]
fn unlisted_option_without_successor_ends_the_questionnaire() {
    let catalog = branching_catalog(false);
    let maybe = option("q1", "maybe");
    assert!(next_question(&catalog, "q1", Some(&maybe), &AnswerStore::new()).is_none());
}

#[test]
fn stored_answer_drives_branching_when_no_option_is_supplied() {
    let catalog = branching_catalog(true);
    let mut answers = AnswerStore::new();
    answers.insert("q1", AnswerValue::Text("no".to_string()));

    let next = next_question(&catalog, "q1", None, &answers);
    assert_eq!(next.map(|q| q.id.as_str()), Some("q3"));
}

fn submit(session: &mut Session, value: AnswerValue) -> SessionStep {
    session.submit_answer(value).expect("answer should be accepted")
}

fn text(s: &str) -> AnswerValue {
    AnswerValue::Text(s.to_string())
}

#[test]
fn full_walk_through_the_diabetes_questionnaire() {
    let questionnaire = DiabetesRisk;
    let catalog = questionnaire.catalog();
    let mut session = Session::start(questionnaire.id(), catalog);

    assert_eq!(session.progress(), 0);
    assert_eq!(session.current_question().unwrap().id, factors::AGE);

    submit(&mut session, AnswerValue::Number(50.0));
    submit(&mut session, AnswerValue::Number(90.0));
    submit(&mut session, AnswerValue::Number(170.0));
    submit(&mut session, text(factors::YES));
    submit(&mut session, text(factors::activity::SEDENTARY));
    submit(&mut session, text(factors::diet::POOR));
    submit(
        &mut session,
        AnswerValue::MultiText(vec![factors::SYMPTOM_NONE.to_string()]),
    );

    // Current smoker takes the follow-up branch.
    assert_eq!(session.current_question().unwrap().id, factors::SMOKING);
    submit(&mut session, text(factors::smoking::CURRENT));
    assert_eq!(
        session.current_question().unwrap().id,
        factors::CIGARETTES_PER_DAY
    );
    submit(&mut session, AnswerValue::Number(10.0));

    let mid_progress = session.progress();
    assert!(mid_progress > 0 && mid_progress < 100);

    submit(&mut session, AnswerValue::Number(3.0));
    let step = submit(&mut session, text(factors::sleep::GOOD));
    assert_eq!(step, SessionStep::Completed);
    assert!(session.is_completed());
    assert_eq!(session.progress(), 100);

    let completed = session.finish("patient-123").unwrap();
    assert_eq!(completed.submission.patient_ref, "patient-123");
    assert_eq!(completed.submission.questionnaire_id, "diabetes-risk");
    assert_eq!(completed.submission.status, SubmissionStatus::Completed);
    assert_eq!(
        completed.prediction.submission_id,
        completed.submission.id
    );
    // 20 age + 25 BMI + 15 family + 15 sedentary + 15 diet + 10 smoker.
    assert_eq!(completed.prediction.score, 100);
    assert!(completed
        .recommendations
        .iter()
        .all(|r| r.submission_id == completed.submission.id));
}

#[test]
fn non_smokers_skip_the_follow_up_question() {
    let catalog = DiabetesRisk.catalog();
    let mut session = Session::start("diabetes-risk", catalog);

    submit(&mut session, AnswerValue::Number(25.0));
    submit(&mut session, AnswerValue::Number(60.0));
    submit(&mut session, AnswerValue::Number(165.0));
    submit(&mut session, text(factors::NO));
    submit(&mut session, text(factors::activity::ACTIVE));
    submit(&mut session, text(factors::diet::EXCELLENT));
    submit(
        &mut session,
        AnswerValue::MultiText(vec![factors::SYMPTOM_NONE.to_string()]),
    );
    submit(&mut session, text(factors::smoking::NEVER));

    assert_eq!(
        session.current_question().unwrap().id,
        factors::STRESS_LEVEL
    );
    assert!(!session.answers().contains(factors::CIGARETTES_PER_DAY));
}

#[test]
fn rejected_answer_leaves_the_session_unchanged() {
    let catalog = DiabetesRisk.catalog();
    let mut session = Session::start("diabetes-risk", catalog);

    let err = session
        .submit_answer(AnswerValue::Text("not an age".to_string()))
        .unwrap_err();
    match err {
        EngineError::InvalidAnswer {
            question_id,
            failure,
        } => {
            assert_eq!(question_id, factors::AGE);
            assert!(matches!(failure, ValidationFailure::NotANumber { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(session.current_question().unwrap().id, factors::AGE);
    assert!(session.answers().is_empty());
}

#[test]
fn finish_before_completion_is_an_error() {
    let catalog = DiabetesRisk.catalog();
    let session = Session::start("diabetes-risk", catalog);
    assert!(matches!(
        session.finish("patient-123"),
        Err(EngineError::NotCompleted(_))
    ));
}

#[test]
fn answers_after_completion_are_rejected() {
    let catalog = branching_catalog(false);
    let mut session = Session::start("branching", &catalog);

    let step = session
        .submit_answer(AnswerValue::Text("maybe".to_string()))
        .unwrap();
    assert_eq!(step, SessionStep::Completed);

    assert!(matches!(
        session.submit_answer(AnswerValue::Number(1.0)),
        Err(EngineError::AlreadyCompleted)
    ));
}
