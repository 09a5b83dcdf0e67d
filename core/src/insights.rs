use cozy_chess::Board;
use evaluation::{AdvantageVerdict, EvaluationError, Evaluator};
use heuristics::{Heuristic, PieceSquareTables, PinnedPieces, TrappedPieces};
use log::info;
use thiserror::Error;
use utils::{load_position, PositionError, Snapshot};

use crate::config::InsightConfig;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error(transparent)]
    InvalidPosition(#[from] PositionError),
    #[error("evaluation unavailable: {0}")]
    EvaluationUnavailable(#[from] EvaluationError),
}

/// Findings of one heuristic, listed without a favored side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub lines: Vec<String>,
}

/// Headline from the engine score followed by the findings that support it.
///
/// The evaluator is called exactly once. When neither side is ahead every
/// finding is listed; otherwise only those favoring the better side.
pub fn build_insights(
    board: &Board,
    evaluator: &mut dyn Evaluator,
    config: &InsightConfig,
) -> Result<Vec<String>, InsightError> {
    let score = evaluator.evaluate(board, config.move_time)?;
    let verdict = AdvantageVerdict::from_score(score, &config.thresholds);
    info!("{} scored {} cp: {}", evaluator.name(), score, verdict);

    let snapshot = Snapshot::new(board);
    let pst = PieceSquareTables::new(snapshot);
    let pins = PinnedPieces::new(snapshot);
    let trapped = TrappedPieces::new(snapshot);
    let detectors: [&dyn Heuristic; 3] = [&pst, &pins, &trapped];

    let mut insights = vec![verdict.to_string()];
    for detector in detectors {
        insights.extend(detector.explanations(verdict.favored));
    }

    Ok(insights)
}

/// Same as `build_insights`, starting from a FEN. Nothing is evaluated when the
/// FEN does not parse.
pub fn explain_fen(
    fen: &str,
    evaluator: &mut dyn Evaluator,
    config: &InsightConfig,
) -> Result<Vec<String>, InsightError> {
    let board = load_position(fen)?;
    build_insights(&board, evaluator, config)
}

/// Every heuristic finding, grouped by heuristic, without consulting an engine.
pub fn analyze_heuristics(board: &Board) -> Vec<Section> {
    let snapshot = Snapshot::new(board);
    let pst = PieceSquareTables::new(snapshot);
    let trapped = TrappedPieces::new(snapshot);
    let pins = PinnedPieces::new(snapshot);
    let detectors: [&dyn Heuristic; 3] = [&pst, &trapped, &pins];

    detectors
        .into_iter()
        .map(|detector| Section {
            name: detector.name(),
            lines: detector.explanations(None),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const PLACEMENT_FEN: &str = "rn2kb1r/pp2qppp/2p2n2/4p1B1/2B1P3/1QN5/PPP2PPP/R3K2R b KQkq - 1 9";
    const TRAPPED_FEN: &str = "r5k1/p4p1p/2p3pb/2N1n2n/1p2PP2/1B2B1PP/PP4K1/3R4 b - - 0 24";
    const PIN_FEN: &str = "1rk5/8/4n3/5B2/1N6/8/8/1Q1K4 b - - 0 1";

    struct FixedScore {
        score: i32,
        calls: usize,
        budget: Option<Duration>,
    }

    impl FixedScore {
        fn new(score: i32) -> Self {
            Self {
                score,
                calls: 0,
                budget: None,
            }
        }
    }

    impl Evaluator for FixedScore {
        fn name(&self) -> String {
            "Fixed".to_string()
        }

        fn evaluate(&mut self, _: &Board, budget: Duration) -> Result<i32, EvaluationError> {
            self.calls += 1;
            self.budget = Some(budget);
            Ok(self.score)
        }
    }

    struct Unavailable;

    impl Evaluator for Unavailable {
        fn name(&self) -> String {
            "Unavailable".to_string()
        }

        fn evaluate(&mut self, _: &Board, budget: Duration) -> Result<i32, EvaluationError> {
            Err(EvaluationError::Timeout(budget))
        }
    }

    fn insights(fen: &str, score: i32) -> Vec<String> {
        let board: Board = fen.parse().unwrap();
        build_insights(&board, &mut FixedScore::new(score), &InsightConfig::default()).unwrap()
    }

    #[test]
    fn test_equal_position_lists_everything() {
        let lines = insights(PLACEMENT_FEN, 0);
        assert_eq!(lines[0], "Position is equal");
        assert_eq!(
            &lines[1..5],
            &[
                "White's Pawn(s) is/are placed at better square(s) than Black",
                "White's Bishop(s) is/are placed at better square(s) than Black",
                "White's Knight(s) is/are placed at better square(s) than Black",
                "White's Queen is/are placed at better square(s) than Black",
            ]
        );
    }

    #[test]
    fn test_headline_buckets() {
        assert_eq!(insights(PLACEMENT_FEN, 59)[0], "Position is equal");
        assert_eq!(insights(PLACEMENT_FEN, 80)[0], "White is slightly better because:");
        assert_eq!(insights(PLACEMENT_FEN, -130)[0], "Black is much better because:");
        assert_eq!(insights(PLACEMENT_FEN, 400)[0], "White is winning because:");
    }

    #[test]
    fn test_exactly_one_headline() {
        for score in [0, 80, -200, 100_000] {
            let lines = insights(PIN_FEN, score);
            let headlines = lines
                .iter()
                .filter(|l| l.ends_with("because:") || *l == "Position is equal")
                .count();
            assert_eq!(headlines, 1);
        }
    }

    #[test]
    fn test_favored_side_filters_findings() {
        let lines = insights(PLACEMENT_FEN, -300);
        assert_eq!(lines, vec!["Black is winning because:"]);

        let lines = insights(PIN_FEN, 200);
        assert!(lines.contains(
            &"Black Knight at e6 is pinned to its King at c8 by the opponent's Bishop at f5."
                .to_string()
        ));
        assert!(!lines.iter().any(|l| l.starts_with("White Knight at b4")));
    }

    #[test]
    fn test_pins_come_before_trapped_pieces() {
        let lines = insights(TRAPPED_FEN, 500);
        let trapped = lines
            .iter()
            .position(|l| l == "Black Knight(s) at e5 is trapped")
            .unwrap();
        assert!(lines[trapped..].iter().all(|l| l.ends_with("is trapped")));
    }

    #[test]
    fn test_budget_is_passed_once() {
        let board: Board = PIN_FEN.parse().unwrap();
        let config = InsightConfig {
            move_time: Duration::from_millis(250),
            ..InsightConfig::default()
        };
        let mut evaluator = FixedScore::new(0);
        build_insights(&board, &mut evaluator, &config).unwrap();
        assert_eq!(evaluator.calls, 1);
        assert_eq!(evaluator.budget, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_evaluation_errors_propagate() {
        let board: Board = PIN_FEN.parse().unwrap();
        let result = build_insights(&board, &mut Unavailable, &InsightConfig::default());
        assert!(matches!(
            result,
            Err(InsightError::EvaluationUnavailable(EvaluationError::Timeout(_)))
        ));
    }

    #[test]
    fn test_invalid_fen_skips_evaluation() {
        let mut evaluator = FixedScore::new(0);
        let result = explain_fen("not a position", &mut evaluator, &InsightConfig::default());
        assert!(matches!(result, Err(InsightError::InvalidPosition(_))));
        assert_eq!(evaluator.calls, 0);
    }

    #[test]
    fn test_analyze_heuristics_sections() {
        let board: Board = PIN_FEN.parse().unwrap();
        let sections = analyze_heuristics(&board);
        let names: Vec<_> = sections.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Piece placement", "Trapped pieces", "Pinned pieces"]);
        assert_eq!(sections[2].lines.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(insights(TRAPPED_FEN, 90), insights(TRAPPED_FEN, 90));
    }
}
