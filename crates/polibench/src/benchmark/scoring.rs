use super::axes::Axis;
use super::catalog::WeightMatrix;
use super::domain::{AxisScores, ResponseSet};

/// Scale factor between one unit of raw contribution and the worst case a
/// single statement can reach (`|d| * |w| <= 4`).
const MAX_STATEMENT_CONTRIBUTION: f64 = 4.0;

/// Project a validated response set through the weight matrix into one
/// normalized 0-100 percentage per axis.
///
/// For each statement, the 1-5 answer becomes a signed deviation from
/// neutral (`d = answer - 3`) and contributes `d * w` to every axis the
/// statement is weighted on. The raw axis total is then rescaled linearly
/// from its theoretical range onto `[0, 100]`, so the percentage reads as
/// "how far toward maximal agreement with this axis, relative to the worst
/// case achievable by this statement set, the responses sit".
///
/// Must only be called on a response set that already passed validation.
pub fn score(responses: &ResponseSet, matrix: &WeightMatrix) -> AxisScores {
    let mut scores = AxisScores::new();

    for axis in Axis::ALL {
        let mut raw_total: i64 = 0;
        for (&id, &answer) in responses {
            let weight = matrix.weights_for(id).get(axis);
            if weight == 0 {
                continue;
            }
            let deviation = i64::from(answer) - 3;
            raw_total += deviation * i64::from(weight);
        }

        let weight_total = matrix.absolute_weight_total(axis);
        let percentage = if weight_total == 0 {
            // Axis with no weighted statements carries no information.
            50.0
        } else {
            let span = MAX_STATEMENT_CONTRIBUTION * weight_total as f64;
            (50.0 + 50.0 * raw_total as f64 / span).clamp(0.0, 100.0)
        };

        scores.insert(axis, percentage);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::catalog::AxisWeights;
    use crate::benchmark::domain::StatementId;

    fn two_statement_matrix() -> WeightMatrix {
        WeightMatrix::from_entries([
            (
                StatementId(1),
                AxisWeights::NEUTRAL.with(Axis::Progressisme, 2),
            ),
            (
                StatementId(2),
                AxisWeights::NEUTRAL.with(Axis::Progressisme, -2),
            ),
        ])
    }

    #[test]
    fn worked_example_scores_seventy_five() {
        // raw = (+2 * +2) + (-2 * -2) = 8, W = 4, score = 50 + 50*8/16.
        let responses: ResponseSet =
            [(StatementId(1), 5), (StatementId(2), 1)].into_iter().collect();

        let scores = score(&responses, &two_statement_matrix());
        assert_eq!(scores[&Axis::Progressisme], 75.0);
    }

    #[test]
    fn all_neutral_answers_land_exactly_on_fifty() {
        let responses: ResponseSet =
            [(StatementId(1), 3), (StatementId(2), 3)].into_iter().collect();

        let scores = score(&responses, &two_statement_matrix());
        for axis in Axis::ALL {
            assert_eq!(scores[&axis], 50.0);
        }
    }

    #[test]
    fn unweighted_axis_scores_fifty_regardless_of_answers() {
        let responses: ResponseSet =
            [(StatementId(1), 5), (StatementId(2), 5)].into_iter().collect();

        let scores = score(&responses, &two_statement_matrix());
        assert_eq!(scores[&Axis::Ecology], 50.0);
        assert_eq!(scores[&Axis::Secularism], 50.0);
    }

    #[test]
    fn extreme_answers_saturate_the_achievable_range() {
        let matrix = WeightMatrix::from_entries([(
            StatementId(1),
            AxisWeights::NEUTRAL.with(Axis::Communisme, 2),
        )]);

        let maximal: ResponseSet = [(StatementId(1), 5)].into_iter().collect();
        let minimal: ResponseSet = [(StatementId(1), 1)].into_iter().collect();

        // raw = ±4, W = 2: the rescale maps the achievable extremes to 75/25.
        assert_eq!(score(&maximal, &matrix)[&Axis::Communisme], 75.0);
        assert_eq!(score(&minimal, &matrix)[&Axis::Communisme], 25.0);
    }

    #[test]
    fn negative_weights_invert_the_contribution() {
        let matrix = WeightMatrix::from_entries([(
            StatementId(1),
            AxisWeights::NEUTRAL.with(Axis::Pacifism, -1),
        )]);
        let responses: ResponseSet = [(StatementId(1), 5)].into_iter().collect();

        // raw = 2 * -1 = -2, W = 1, score = 50 + 50 * -2 / 4 = 25.
        assert_eq!(score(&responses, &matrix)[&Axis::Pacifism], 25.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let responses: ResponseSet =
            [(StatementId(1), 4), (StatementId(2), 2)].into_iter().collect();
        let matrix = two_statement_matrix();

        let first = score(&responses, &matrix);
        let second = score(&responses, &matrix);
        assert_eq!(first, second);
    }
}
