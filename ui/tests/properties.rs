//! Property tests for the shaping invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use ui::charts::{pie_slices, PieConfig};
use ui::core::{CategoryIndex, ColorScale, Observation, PivotMatrix, ScaleDomain};

fn observations() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec(
        ("[a-e]", "[p-t]", -1_000.0f64..1_000.0),
        0..40,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(row, col, value)| Observation::new(row, col, value))
            .collect()
    })
}

fn first_occurrences<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.filter(|k| seen.insert(*k)).map(str::to_string).collect()
}

proptest! {
    #[test]
    fn keys_are_unique_in_first_occurrence_order(obs in observations()) {
        let index = CategoryIndex::from_observations(&obs);
        prop_assert_eq!(
            index.rows.to_vec(),
            first_occurrences(obs.iter().map(|o| o.row.as_str()))
        );
        prop_assert_eq!(
            index.cols.to_vec(),
            first_occurrences(obs.iter().map(|o| o.col.as_str()))
        );
    }

    #[test]
    fn absent_cells_never_shape_the_domain(obs in observations()) {
        let matrix = PivotMatrix::from_observations(&obs);
        let pairs: HashSet<(&str, &str)> =
            obs.iter().map(|o| (o.row.as_str(), o.col.as_str())).collect();

        for (r, row) in matrix.rows().iter().enumerate() {
            for (c, col) in matrix.cols().iter().enumerate() {
                prop_assert_eq!(matrix.get(r, c).is_some(), pairs.contains(&(row, col)));
            }
        }

        let domain = ScaleDomain::from_values(matrix.present_values());
        prop_assert_eq!(domain.samples, matrix.present_count());
        for value in matrix.present_values() {
            prop_assert!(domain.min <= value && value <= domain.max);
        }
    }

    #[test]
    fn normalize_is_monotone_and_bounded(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        lo in -1e3f64..1e3,
        width in 0.0f64..1e3,
    ) {
        let domain = ScaleDomain::fixed(lo, lo + width);
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let (ns, nl) = (domain.normalize(small), domain.normalize(large));
        prop_assert!((0.0..=1.0).contains(&ns));
        prop_assert!((0.0..=1.0).contains(&nl));
        prop_assert!(ns <= nl);
    }

    #[test]
    fn color_for_is_deterministic(ratio in -0.5f64..1.5) {
        for scale in [ColorScale::heat(), ColorScale::cool_to_warm()] {
            prop_assert_eq!(scale.color_for(ratio), scale.color_for(ratio));
            let (low, high) = scale.endpoints();
            prop_assert_eq!(scale.color_for(0.0), low);
            prop_assert_eq!(scale.color_for(1.0), high);
        }
    }

    #[test]
    fn color_for_moves_monotonically_along_the_ramp(
        a in -0.5f64..1.5,
        b in -0.5f64..1.5,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for scale in [ColorScale::heat(), ColorScale::cool_to_warm()] {
            let (start, end) = scale.endpoints();
            let (first, second) = (scale.color_for(lo), scale.color_for(hi));
            for (from, to, x, y) in [
                (start.r, end.r, first.r, second.r),
                (start.g, end.g, first.g, second.g),
                (start.b, end.b, first.b, second.b),
            ] {
                if from <= to {
                    prop_assert!(x <= y, "channel fell from {} to {} between {} and {}", x, y, lo, hi);
                } else {
                    prop_assert!(x >= y, "channel rose from {} to {} between {} and {}", x, y, lo, hi);
                }
            }
        }
    }

    #[test]
    fn pie_shares_sum_to_one_or_zero(values in prop::collection::vec(-500.0f64..500.0, 0..12)) {
        let items = values.iter().enumerate().map(|(i, v)| (format!("item-{i}"), *v));
        let slices = pie_slices(items, &PieConfig::default());
        let total: f64 = values.iter().sum();
        let shares: f64 = slices.iter().map(|s| s.share).sum();
        if total == 0.0 {
            prop_assert!(slices.iter().all(|s| s.share == 0.0));
        } else if total.abs() > 1.0 {
            prop_assert!((shares - 1.0).abs() < 1e-9, "shares summed to {}", shares);
        }
    }

    #[test]
    fn cancelling_values_give_zero_shares(value in 0.001f64..500.0) {
        let slices = pie_slices([("up", value), ("down", -value)], &PieConfig::default());
        prop_assert!(slices.iter().all(|s| s.share == 0.0));
    }
}
