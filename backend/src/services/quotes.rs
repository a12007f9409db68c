//! Motivational quotes
//!
//! A small curated list served at random; no upstream involved.

use rand::seq::SliceRandom;

pub const QUOTES: [&str; 10] = [
    "The only bad workout is the one that didn't happen.",
    "Your body can stand almost anything. It's your mind you have to convince.",
    "The difference between try and triumph is just a little umph!",
    "Take care of your body. It's the only place you have to live.",
    "Fitness is not about being better than someone else. It's about being better than you used to be.",
    "The only person you are destined to become is the person you decide to be.",
    "Strength does not come from the physical capacity. It comes from an indomitable will.",
    "Every day is a new beginning. Take a deep breath and start again.",
    "The mind is everything. What you think you become.",
    "Yoga is the journey of the self, through the self, to the self.",
];

/// One quote picked uniformly at random
pub fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}
