use super::*;

#[test]
fn generated_sets_respect_bounds_and_special_value() {
    let mut generator = RandomSetGenerator::seeded(7);
    for count in [1, 2, 5, 30, 250, MAX_COUNT] {
        let values = generator.generate(count);
        assert_eq!(values.len(), count);
        assert!(values.iter().all(|v| (1..=MAX_VALUE).contains(v)));
        assert!(values.iter().any(|v| *v <= SPECIAL_THRESHOLD));
    }
}

#[test]
fn same_seed_yields_same_set() {
    let first = RandomSetGenerator::seeded(42).generate(64);
    let second = RandomSetGenerator::seeded(42).generate(64);
    assert_eq!(first, second);
}

#[test]
fn tight_threshold_still_guarantees_a_small_value() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let values = generate(&mut rng, 8, 1000, 1);
        assert_eq!(values.len(), 8);
        assert!(values.contains(&1));
    }
}

#[test]
fn parse_count_accepts_trimmed_numbers_in_range() {
    assert_eq!(parse_count(" 25 "), Ok(25));
    assert_eq!(parse_count("1"), Ok(1));
    assert_eq!(parse_count("1000"), Ok(1000));
}

#[test]
fn parse_count_rejects_garbage_and_out_of_range() {
    for raw in ["", "abc", "-3", "0", "1001", "2.5"] {
        let err = parse_count(raw).expect_err(raw);
        assert_eq!(
            err,
            SessionError::InvalidCountInput {
                input: raw.trim().to_string(),
                min: MIN_COUNT,
                max: MAX_COUNT,
            }
        );
    }
}
