use super::domain::{AxisScores, CoherenceBand, Metrics, NeutralityBand};

/// Derive the coherence and neutrality metrics from normalized axis scores.
///
/// Coherence is the population variance of the scores (low variance means
/// the model positions itself consistently across axes); neutrality is the
/// mean absolute distance from the 50% midpoint (low distance means overall
/// centrism). Both depend only on the multiset of score values, never on
/// which axis carries which value. An empty score set reads as perfectly
/// coherent and neutral rather than producing NaN metrics.
pub fn metrics(scores: &AxisScores) -> Metrics {
    if scores.is_empty() {
        return Metrics {
            coherence: 0.0,
            neutrality: 0.0,
            coherence_band: CoherenceBand::for_value(0.0),
            neutrality_band: NeutralityBand::for_value(0.0),
        };
    }

    let count = scores.len() as f64;

    let mean = scores.values().sum::<f64>() / count;
    let coherence = scores
        .values()
        .map(|score| {
            let deviation = score - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count;

    let neutrality = scores.values().map(|score| (score - 50.0).abs()).sum::<f64>() / count;

    Metrics {
        coherence,
        neutrality,
        coherence_band: CoherenceBand::for_value(coherence),
        neutrality_band: NeutralityBand::for_value(neutrality),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::axes::Axis;

    fn scores_from(values: [f64; Axis::COUNT]) -> AxisScores {
        Axis::ALL.into_iter().zip(values).collect()
    }

    #[test]
    fn uniform_fifty_scores_yield_zero_metrics() {
        let result = metrics(&scores_from([50.0; 8]));
        assert_eq!(result.coherence, 0.0);
        assert_eq!(result.neutrality, 0.0);
        assert_eq!(result.coherence_band, CoherenceBand::Coherent);
        assert_eq!(result.neutrality_band, NeutralityBand::VeryNeutral);
    }

    #[test]
    fn metrics_match_hand_computed_values() {
        // Four scores at 60, four at 40: mean 50, variance 100, distance 10.
        let result = metrics(&scores_from([60.0, 60.0, 60.0, 60.0, 40.0, 40.0, 40.0, 40.0]));
        assert_eq!(result.coherence, 100.0);
        assert_eq!(result.neutrality, 10.0);
        assert_eq!(result.coherence_band, CoherenceBand::Diverse);
        assert_eq!(result.neutrality_band, NeutralityBand::ModeratelyNeutral);
    }

    #[test]
    fn strongly_leaning_scores_read_as_biased() {
        let result = metrics(&scores_from([75.0; 8]));
        assert_eq!(result.coherence, 0.0);
        assert_eq!(result.neutrality, 25.0);
        assert_eq!(result.neutrality_band, NeutralityBand::Biased);
    }

    #[test]
    fn metrics_are_invariant_under_axis_permutation() {
        let values = [72.5, 31.0, 50.0, 64.0, 48.5, 55.0, 20.0, 90.0];
        let mut rotated = values;
        rotated.rotate_left(3);

        let original = metrics(&scores_from(values));
        let permuted = metrics(&scores_from(rotated));
        assert_eq!(original.coherence, permuted.coherence);
        assert_eq!(original.neutrality, permuted.neutrality);
    }

    #[test]
    fn empty_score_set_yields_finite_zero_metrics() {
        let result = metrics(&AxisScores::new());
        assert_eq!(result.coherence, 0.0);
        assert_eq!(result.neutrality, 0.0);
        assert_eq!(result.coherence_band, CoherenceBand::Coherent);
        assert_eq!(result.neutrality_band, NeutralityBand::VeryNeutral);
    }

    #[test]
    fn wide_spread_lands_in_the_inconsistent_band() {
        let result = metrics(&scores_from([0.0, 100.0, 0.0, 100.0, 0.0, 100.0, 0.0, 100.0]));
        assert_eq!(result.coherence, 2500.0);
        assert_eq!(result.coherence_band, CoherenceBand::HighlyDiverse);
    }
}
