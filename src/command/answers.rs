// src/command/answers.rs

use crate::command_state::lock_answers;
use crate::error::AppResult;
use crate::store::{Answer, AnswerStore, QuestionId};
use crate::types::AppState;

pub fn set_answer(state: &AppState, id: QuestionId, answer: Answer) -> AppResult<()> {
    lock_answers(state)?.set(id, answer);
    Ok(())
}

pub fn toggle_multi_answer(
    state: &AppState,
    id: QuestionId,
    option: &str,
    included: bool,
) -> AppResult<()> {
    lock_answers(state)?.toggle(id, option, included);
    Ok(())
}

pub fn clear_answers(state: &AppState) -> AppResult<()> {
    lock_answers(state)?.reset();
    Ok(())
}

/// Store copy for one frame of rendering. Widgets report changes through
/// the setters above rather than mutating the copy, so the lock is never
/// held across widget code.
pub fn answers_view(state: &AppState) -> AppResult<AnswerStore> {
    Ok(lock_answers(state)?.clone())
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity_log::ActivityLog;
    use crate::types::{CsvFileState, SubmissionState};
    use tempfile::tempdir;

    fn mk_state() -> AppState {
        let td = tempdir().expect("tempdir");

        AppState {
            answers: std::sync::Mutex::new(AnswerStore::default()),
            submission: std::sync::Mutex::new(SubmissionState::default()),
            csv_file: std::sync::Mutex::new(CsvFileState::default()),
            activity_log: std::sync::Mutex::new(
                ActivityLog::init(td.path()).expect("activity log init"),
            ),
        }
    }

    #[test]
    fn set_and_toggle_flow_through_to_the_store() {
        let state = mk_state();

        set_answer(
            &state,
            QuestionId::Industry,
            Answer::Single("Finance".into()),
        )
        .expect("set");
        toggle_multi_answer(&state, QuestionId::OperatingCountries, "Canada", true)
            .expect("toggle");

        let view = answers_view(&state).expect("view");
        assert_eq!(view.single_value(QuestionId::Industry), Some("Finance"));
        assert!(view.multi_contains(QuestionId::OperatingCountries, "Canada"));
    }

    #[test]
    fn view_is_detached_from_live_state() {
        let state = mk_state();
        set_answer(&state, QuestionId::EsgConfidence, Answer::Scale(3)).expect("set");

        let mut view = answers_view(&state).expect("view");
        view.reset();

        let fresh = answers_view(&state).expect("view");
        assert_eq!(fresh.scale_value(QuestionId::EsgConfidence), Some(3));
    }

    #[test]
    fn clear_answers_resets_the_session() {
        let state = mk_state();
        set_answer(&state, QuestionId::Industry, Answer::Single("Other".into())).expect("set");

        clear_answers(&state).expect("clear");

        assert!(answers_view(&state).expect("view").is_empty());
    }
}
