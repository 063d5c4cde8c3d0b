use crate::engine::RandomSource;

/// Системный RNG поверх thread_rng.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn roll(&mut self, sides: u32) -> u32 {
        use rand::Rng;

        rand::thread_rng().gen_range(1..=sides)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed — одинаковая последовательность бросков.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;

        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn roll(&mut self, sides: u32) -> u32 {
        use rand::Rng;

        self.inner.gen_range(1..=sides)
    }
}
