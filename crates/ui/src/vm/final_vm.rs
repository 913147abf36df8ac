use services::{FinalChallengeRun, FinalSummary, REFLECTION_PROMPTS, SessionController};

use crate::vm::number_fmt::{bar_style, position_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReflectionVm {
    pub index: usize,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalSummaryVm {
    pub score_label: String,
    pub modules_label: String,
    pub badge_count: usize,
    pub badges: Vec<String>,
    pub reflections: Vec<ReflectionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinalVm {
    Running {
        position_label: String,
        bar_style: String,
    },
    Finished(FinalSummaryVm),
}

#[must_use]
pub fn map_final(run: &FinalChallengeRun, session: &SessionController) -> FinalVm {
    if !run.is_finished() {
        return FinalVm::Running {
            position_label: position_label("Aufgabe", run.current_index(), run.total()),
            bar_style: bar_style(run.current_index(), run.total()),
        };
    }

    let summary = FinalSummary::from_profile(run, session.profile());
    let reflections = REFLECTION_PROMPTS
        .into_iter()
        .enumerate()
        .map(|(index, label)| ReflectionVm {
            index,
            label,
            checked: run.is_reflected(index),
        })
        .collect();

    FinalVm::Finished(FinalSummaryVm {
        score_label: format!("{}/{}", summary.score, summary.total),
        modules_label: format!("{}/{}", summary.modules_mastered, summary.module_total),
        badge_count: summary.badges.len(),
        badges: summary.badges,
        reflections,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use quiz_core::Content;

    fn session() -> SessionController {
        SessionController::new(Arc::new(Content::bundled().unwrap()))
    }

    #[test]
    fn running_challenge_shows_position() {
        let run = FinalChallengeRun::new(5);
        assert_eq!(
            map_final(&run, &session()),
            FinalVm::Running {
                position_label: "Aufgabe 1 von 5".into(),
                bar_style: "width: 20.0%".into(),
            }
        );
    }

    #[test]
    fn finished_challenge_lists_reflections() {
        let mut run = FinalChallengeRun::new(2);
        run.solve().unwrap();
        run.solve().unwrap();
        run.toggle_reflection(3).unwrap();

        let FinalVm::Finished(summary) = map_final(&run, &session()) else {
            panic!("expected summary");
        };
        assert_eq!(summary.score_label, "2/2");
        assert_eq!(summary.modules_label, "0/4");
        assert_eq!(summary.reflections.len(), 5);
        assert!(summary.reflections[3].checked);
        assert!(!summary.reflections[0].checked);
    }
}
