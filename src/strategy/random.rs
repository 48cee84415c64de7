use super::*;
use crate::Seed;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Flips a fair coin every round, blind to history.
///
/// The generator is owned and injected, so a pinned seed (or any other
/// [`Rng`]) makes the stream reproducible. `SmallRng` output is only
/// guaranteed for a given `rand` version.
#[derive(Debug, Clone)]
pub struct Random<R = SmallRng>(R);

impl<R: Rng> Random<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl Random {
    pub fn seeded(seed: Seed) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Strategy for Random<R> {
    fn choose(&mut self, _: &[Action], _: &[Action]) -> Action {
        if self.0.random_bool(0.5) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
    fn label(&self) -> &'static str {
        "R"
    }
    fn description(&self) -> &'static str {
        "Randomly chooses to cooperate or defect."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(strategy: &mut impl Strategy, n: usize) -> Vec<Action> {
        (0..n).map(|_| strategy.choose(&[], &[])).collect()
    }

    #[test]
    fn roughly_fair() {
        let n = 10_000;
        let ref mut random = Random::seeded(7);
        let cooperations = draw(random, n).iter().filter(|a| a.is_cooperate()).count();
        let rate = cooperations as f32 / n as f32;
        assert!(rate > 0.45 && rate < 0.55, "cooperation rate {}", rate);
    }

    #[test]
    fn pinned_seed_reproduces() {
        assert_eq!(draw(&mut Random::seeded(42), 64), draw(&mut Random::seeded(42), 64));
        assert_ne!(draw(&mut Random::seeded(42), 64), draw(&mut Random::seeded(43), 64));
    }

    /// Replays a fixed cycle of raw words.
    struct Scripted(Vec<u64>, usize);

    impl rand::RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }
        fn next_u64(&mut self) -> u64 {
            let word = self.0[self.1 % self.0.len()];
            self.1 += 1;
            word
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst.iter_mut() {
                *byte = self.next_u64() as u8;
            }
        }
    }

    #[test]
    fn follows_injected_source() {
        let ref mut random = Random::new(Scripted(vec![0, u64::MAX, u64::MAX, 0], 0));
        assert_eq!(
            draw(random, 4),
            vec![
                Action::Cooperate,
                Action::Defect,
                Action::Defect,
                Action::Cooperate
            ]
        );
    }
}
