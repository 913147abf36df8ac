//! Per-kind answer validation.
//!
//! Every kind answers two questions: can the answer be checked yet, and is it
//! correct. A wrong answer is not an error; the learner edits and re-checks.

use crate::model::{
    ChoiceTask, CompletionTask, RecognitionTask, SituationTask, Task, TaskAnswer, TrapTask,
};
use crate::scoring::{numeric_matches, parse_numeric};

impl Task {
    /// True when the answer holds everything the check needs.
    ///
    /// Numeric kinds require parseable input; a completion table requires
    /// every blank cell to parse.
    #[must_use]
    pub fn can_check(&self, answer: &TaskAnswer) -> bool {
        match self {
            Task::TableCompletion(task) => task
                .blank_cells()
                .all(|cell| answer.cell(cell).and_then(parse_numeric).is_some()),
            Task::Strategy(_, _) | Task::TextProblem(_) => parse_numeric(answer.input()).is_some(),
            Task::TableRecognition(_)
            | Task::SituationAssessment(_)
            | Task::OverlinearizationTrap(_)
            | Task::Choice(_, _) => answer.selection().is_some(),
        }
    }

    /// Compare the answer with the stored solution.
    #[must_use]
    pub fn check(&self, answer: &TaskAnswer) -> bool {
        if !self.can_check(answer) {
            return false;
        }
        match self {
            Task::TableRecognition(task) => check_recognition(task, answer),
            Task::TableCompletion(task) => check_completion(task, answer),
            Task::Strategy(_, task) => numeric_matches(answer.input(), task.solution),
            Task::TextProblem(task) => numeric_matches(answer.input(), task.solution),
            Task::SituationAssessment(task) => check_situation(task, answer),
            Task::OverlinearizationTrap(task) => check_trap(task, answer),
            Task::Choice(_, task) => check_choice(task, answer),
        }
    }

    /// Identifying value of the correct option, for selection kinds.
    #[must_use]
    pub fn correct_selection(&self) -> Option<String> {
        match self {
            Task::TableRecognition(task) => Some(task.correct.value().to_string()),
            Task::SituationAssessment(task) => Some(task.correct.value().to_string()),
            Task::OverlinearizationTrap(task) => task.correct_value().map(|v| v.to_string()),
            Task::Choice(_, task) => Some(task.correct.clone()),
            Task::TableCompletion(_) | Task::Strategy(_, _) | Task::TextProblem(_) => None,
        }
    }

    /// Feedback line shown once the task was answered correctly.
    #[must_use]
    pub fn success_feedback(&self, answer: &TaskAnswer) -> String {
        match self {
            Task::TableRecognition(task) => task
                .feedback
                .get("correct")
                .cloned()
                .unwrap_or_else(|| "✓ Richtig erkannt!".to_string()),
            Task::TableCompletion(_) => "✓ Sehr gut! Alle Werte sind korrekt.".to_string(),
            Task::Strategy(_, _) => "✓ Richtig! Deine Strategie funktioniert!".to_string(),
            Task::TextProblem(_) => "✓ Perfekt gelöst!".to_string(),
            Task::SituationAssessment(task) => task.explanation.clone(),
            Task::OverlinearizationTrap(task) => answer
                .selection()
                .and_then(|value| task.feedback.get(value))
                .cloned()
                .unwrap_or_else(|| "✓ Richtig!".to_string()),
            Task::Choice(_, task) => task
                .explanation
                .clone()
                .unwrap_or_else(|| "✓ Richtig!".to_string()),
        }
    }
}

fn check_recognition(task: &RecognitionTask, answer: &TaskAnswer) -> bool {
    answer.selection() == Some(task.correct.value())
}

fn check_situation(task: &SituationTask, answer: &TaskAnswer) -> bool {
    answer.selection() == Some(task.correct.value())
}

fn check_trap(task: &TrapTask, answer: &TaskAnswer) -> bool {
    let Some(selected) = answer.selection().and_then(|raw| raw.parse::<i64>().ok()) else {
        return false;
    };
    task.options
        .iter()
        .find(|opt| opt.value == selected)
        .is_some_and(|opt| opt.correct)
}

fn check_choice(task: &ChoiceTask, answer: &TaskAnswer) -> bool {
    answer.selection() == Some(task.correct.as_str())
}

// All-or-nothing: one blank cell out of tolerance rejects the grid.
fn check_completion(task: &CompletionTask, answer: &TaskAnswer) -> bool {
    task.blank_cells().all(|cell| {
        match (answer.cell(cell), task.expected(cell)) {
            (Some(raw), Some(expected)) => numeric_matches(raw, expected),
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{
        CellKey, ChoiceKind, ChoiceOption, Relation, StrategyKind, StrategyTask, TextProblemTask,
        TrapOption,
    };

    fn completion() -> Task {
        Task::TableCompletion(CompletionTask {
            id: "c1".into(),
            description: "Ergänze die Tabelle.".into(),
            data: vec![vec![None, Some(4.0)], vec![Some(2.0), None]],
            solution: vec![vec![2.0, 4.0], vec![2.0, 2.0]],
        })
    }

    fn strategy(solution: f64) -> Task {
        Task::Strategy(
            StrategyKind::Choice,
            StrategyTask {
                id: "s1".into(),
                question: "?".into(),
                solution,
                hints: vec![],
            },
        )
    }

    fn recognition() -> Task {
        Task::TableRecognition(RecognitionTask {
            id: "r1".into(),
            data: vec![[1.0, 3.0], [2.0, 6.0]],
            correct: Relation::Proportional,
            hints: vec!["Quotient?".into()],
            feedback: BTreeMap::from([("correct".to_string(), "Genau!".to_string())]),
        })
    }

    fn trap() -> Task {
        Task::OverlinearizationTrap(TrapTask {
            id: "t1".into(),
            text: "Ein Ei kocht 5 Minuten. Wie lange kochen 3 Eier?".into(),
            options: vec![
                TrapOption { value: 15, correct: false },
                TrapOption { value: 5, correct: true },
            ],
            feedback: BTreeMap::from([("5".to_string(), "Genau, gleichzeitig!".to_string())]),
        })
    }

    #[test]
    fn completion_accepts_values_within_tolerance() {
        let answer = TaskAnswer::new()
            .with_cell(CellKey::new(0, 0), "2.005")
            .with_cell(CellKey::new(1, 1), "1.995");
        assert!(completion().check(&answer));
    }

    #[test]
    fn completion_rejects_grid_when_one_cell_is_off() {
        let answer = TaskAnswer::new()
            .with_cell(CellKey::new(0, 0), "2")
            .with_cell(CellKey::new(1, 1), "2.5");
        assert!(!completion().check(&answer));
    }

    #[test]
    fn completion_requires_every_blank_before_check() {
        let partial = TaskAnswer::new().with_cell(CellKey::new(0, 0), "2");
        assert!(!completion().can_check(&partial));
        assert!(!completion().check(&partial));

        let garbage = partial.with_cell(CellKey::new(1, 1), "zwei");
        assert!(!completion().can_check(&garbage));
    }

    #[test]
    fn strategy_uses_strict_tolerance() {
        let task = strategy(7.5);
        assert!(!task.check(&TaskAnswer::new().with_input("7.49")));
        assert!(task.check(&TaskAnswer::new().with_input("7.495")));
        assert!(!task.can_check(&TaskAnswer::new()));
    }

    #[test]
    fn text_problem_compares_solution() {
        let task = Task::TextProblem(TextProblemTask {
            id: "p1".into(),
            text: "4 kg kosten 10 €. Was kostet 1 kg?".into(),
            solution: 2.5,
            unit: Some("€".into()),
            hints: vec![],
        });
        assert!(task.check(&TaskAnswer::new().with_input("2,5")));
        assert!(!task.check(&TaskAnswer::new().with_input("2.6")));
    }

    #[test]
    fn recognition_matches_exact_value() {
        let task = recognition();
        assert!(task.check(&TaskAnswer::new().with_selection("proportional")));
        assert!(!task.check(&TaskAnswer::new().with_selection("antiproportional")));
        assert!(!task.can_check(&TaskAnswer::new()));
        let feedback = task.success_feedback(&TaskAnswer::new());
        assert_eq!(feedback, "Genau!");
    }

    #[test]
    fn trap_matches_option_by_value() {
        let task = trap();
        let right = TaskAnswer::new().with_selection("5");
        assert!(task.check(&right));
        assert!(!task.check(&TaskAnswer::new().with_selection("15")));
        assert!(!task.check(&TaskAnswer::new().with_selection("7")));
        assert_eq!(task.success_feedback(&right), "Genau, gleichzeitig!");
        assert_eq!(task.correct_selection().as_deref(), Some("5"));
    }

    #[test]
    fn choice_matches_correct_value() {
        let task = Task::Choice(
            ChoiceKind::GraphComparison,
            ChoiceTask {
                id: "g1".into(),
                question: "Welcher Graph ist steiler?".into(),
                options: vec![
                    ChoiceOption { value: "a".into(), label: "A".into() },
                    ChoiceOption { value: "b".into(), label: "B".into() },
                ],
                correct: "b".into(),
                explanation: None,
                hints: vec![],
            },
        );
        assert!(task.check(&TaskAnswer::new().with_selection("b")));
        assert!(!task.check(&TaskAnswer::new().with_selection("a")));
        assert_eq!(task.success_feedback(&TaskAnswer::new()), "✓ Richtig!");
    }
}
