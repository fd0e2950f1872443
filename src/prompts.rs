use rand::Rng;

use crate::constants::{DAY_MILLIS, PROMPTS};

/// Rotating "marginalia" prompt; starts on the prompt of the day.
#[derive(Debug, Clone)]
pub struct PromptDeck {
    index: usize,
}

impl PromptDeck {
    pub fn for_day(now_millis: i64) -> Self {
        let day = now_millis.div_euclid(DAY_MILLIS);
        Self {
            index: day.rem_euclid(PROMPTS.len() as i64) as usize,
        }
    }

    pub fn today() -> Self {
        Self::for_day(chrono::Utc::now().timestamp_millis())
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        PROMPTS[self.index % PROMPTS.len()]
    }

    /// Skips ahead by one to three prompts.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) -> &'static str {
        let step = 1 + rng.gen_range(0..3);
        self.index = (self.index + step) % PROMPTS.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn day_seed_selects_prompt() {
        assert_eq!(PromptDeck::for_day(0).index(), 0);
        assert_eq!(PromptDeck::for_day(DAY_MILLIS * 25).index(), 1);
        assert_eq!(PromptDeck::for_day(DAY_MILLIS * 3 + 5).current(), PROMPTS[3]);
    }

    #[test]
    fn shuffle_moves_one_to_three_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = PromptDeck::for_day(DAY_MILLIS * 22);
        for _ in 0..100 {
            let before = deck.index();
            deck.shuffle(&mut rng);
            let step = (deck.index() + PROMPTS.len() - before) % PROMPTS.len();
            assert!((1..=3).contains(&step), "step {step}");
        }
    }
}
