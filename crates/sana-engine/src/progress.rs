use sana_catalog::QuestionCatalog;

/// Estimate completion as a 0–100 percentage from the current question's
/// position in the declared catalog order. Branching can skip questions, so
/// this is an estimate of forward progress, not an exact fraction; sessions
/// report 100 themselves once completed.
pub fn progress(catalog: &QuestionCatalog, current_id: &str) -> u8 {
    let total = catalog.len();
    if total == 0 {
        return 100;
    }

    match catalog.position(current_id) {
        Some(pos) => ((pos * 100 / total) as u8).min(100),
        None => 0,
    }
}
