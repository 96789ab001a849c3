//! Random value sets with a guaranteed small value.

use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::{
    domain::{MAX_COUNT, MAX_VALUE, MIN_COUNT, SPECIAL_THRESHOLD},
    error::SessionError,
};

/// Draws `count` uniform values in `[1, max_value]`. When none of them is at
/// or below `special_threshold`, one uniformly chosen position is overwritten
/// with a uniform value in `[1, special_threshold]`.
pub fn generate<R: Rng>(
    rng: &mut R,
    count: usize,
    max_value: u32,
    special_threshold: u32,
) -> Vec<u32> {
    let mut values: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=max_value)).collect();

    if count > 0 && !values.iter().any(|v| *v <= special_threshold) {
        let position = rng.gen_range(0..count);
        values[position] = rng.gen_range(1..=special_threshold);
    }

    values
}

pub fn validate_count(count: usize) -> Result<usize, SessionError> {
    if (MIN_COUNT..=MAX_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(invalid_count(count.to_string()))
    }
}

/// Parses the entry-screen text field.
pub fn parse_count(raw: &str) -> Result<usize, SessionError> {
    let trimmed = raw.trim();
    let count = trimmed
        .parse::<usize>()
        .map_err(|_| invalid_count(trimmed))?;
    validate_count(count)
}

fn invalid_count(input: impl Into<String>) -> SessionError {
    SessionError::InvalidCountInput {
        input: input.into(),
        min: MIN_COUNT,
        max: MAX_COUNT,
    }
}

pub struct RandomSetGenerator {
    rng: StdRng,
    max_value: u32,
    special_threshold: u32,
}

impl RandomSetGenerator {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            max_value: MAX_VALUE,
            special_threshold: SPECIAL_THRESHOLD,
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<u32> {
        generate(
            &mut self.rng,
            count,
            self.max_value,
            self.special_threshold,
        )
    }
}

impl Default for RandomSetGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
