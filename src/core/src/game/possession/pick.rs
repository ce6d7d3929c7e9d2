use crate::utils::random_unit;
use rand::Rng;

/// Weighted choice over the five on-court slots. Returns the first slot whose
/// cumulative weight exceeds a uniform draw over the total. `exempt` is treated
/// as weight zero and is never returned while any other slot has positive weight.
pub fn pick_player<R: Rng + ?Sized>(rng: &mut R, ratios: &[f64; 5], exempt: Option<usize>) -> usize {
    let weights: [f64; 5] = std::array::from_fn(|i| {
        if Some(i) == exempt || !(ratios[i] > 0.0) {
            0.0
        } else {
            ratios[i]
        }
    });

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return (0..5).find(|&i| Some(i) != exempt).unwrap_or(0);
    }

    let draw = random_unit(rng) * total;
    let mut cumulative = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if draw < cumulative {
            return i;
        }
    }

    // Rounding can leave the draw at the total, fall back to the last positive slot
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_single_candidate() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..100 {
            assert_eq!(pick_player(&mut rng, &[0.0, 0.0, 3.0, 0.0, 0.0], None), 2);
        }
    }

    #[test]
    fn test_all_zero_returns_first_non_exempt() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        assert_eq!(pick_player(&mut rng, &[0.0; 5], None), 0);
        assert_eq!(pick_player(&mut rng, &[0.0; 5], Some(0)), 1);
    }

    #[test]
    fn test_distribution_follows_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut counts = [0u32; 5];

        for _ in 0..20_000 {
            counts[pick_player(&mut rng, &[1.0, 1.0, 2.0, 0.0, 4.0], None)] += 1;
        }

        assert_eq!(counts[3], 0);
        assert!(counts[4] > counts[2] && counts[2] > counts[0]);
        let share = counts[4] as f64 / 20_000.0;
        assert!((share - 0.5).abs() < 0.03, "share {}", share);
    }

    proptest! {
        #[test]
        fn exempt_slot_is_never_picked(
            ratios in prop::array::uniform5(0.0f64..2.0),
            exempt in 0usize..5,
            seed in any::<u64>(),
        ) {
            let others_positive = (0..5).any(|i| i != exempt && ratios[i] > 0.0);
            prop_assume!(others_positive);

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..20 {
                let pick = pick_player(&mut rng, &ratios, Some(exempt));
                prop_assert_ne!(pick, exempt);
                prop_assert!(ratios[pick] > 0.0);
            }
        }
    }
}
