use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Produces random, well-formed arithmetic expressions by walking the grammar top-down.
///
/// Every rule call goes one level deeper. Past `max_depth` each rule bottoms out in a
/// single digit, so the output is always finite.
#[derive(Debug, Clone)]
pub struct Generator<R> {
    rng: R,
    max_depth: usize,
}

impl Generator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn expression(&mut self) -> String {
        let expression = self.expression_at(0);
        log::trace!("Generated {expression:?}");
        expression
    }

    fn expression_at(&mut self, depth: usize) -> String {
        if depth > self.max_depth {
            return self.number();
        }
        let left = self.term_at(depth + 1);
        let operator = self.pick(&[" + ", " - "]);
        let right = self.term_at(depth + 1);
        format!("{left}{operator}{right}")
    }

    fn term_at(&mut self, depth: usize) -> String {
        if depth > self.max_depth {
            return self.number();
        }
        let left = self.factor_at(depth + 1);
        let operator = self.pick(&[" * ", " / "]);
        let right = self.factor_at(depth + 1);
        format!("{left}{operator}{right}")
    }

    fn factor_at(&mut self, depth: usize) -> String {
        if depth > self.max_depth || self.rng.gen_bool(0.5) {
            self.number()
        } else {
            format!("({})", self.expression_at(depth + 1))
        }
    }

    fn number(&mut self) -> String {
        self.rng.gen_range(0..=9).to_string()
    }

    fn pick(&mut self, choices: &[&'static str]) -> &'static str {
        choices.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.expression())
    }
}
