//! Building the answer choices shown for a question.
//!
//! Choices are the decoded incorrect answers plus the decoded correct answer
//! in a uniformly random order. Callers cache the result for as long as the
//! question is on screen; recomputing per render would reshuffle it.

use rand::Rng;

use crate::model::Question;
use crate::text::decode_entities;

/// Unbiased in-place Fisher–Yates shuffle.
///
/// Walks from the last index down, swapping each element with a uniformly
/// chosen index at or below it. Every permutation is equally likely given a
/// uniform random source.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns the decoded answer choices for a question in random order,
/// using the thread-local RNG.
#[must_use]
pub fn shuffled_choices(question: &Question) -> Vec<String> {
    shuffled_choices_with(question, &mut rand::rng())
}

/// Returns the decoded answer choices for a question in random order,
/// drawing from the given RNG.
pub fn shuffled_choices_with<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut choices: Vec<String> = question
        .incorrect_answers
        .iter()
        .map(|answer| decode_entities(answer))
        .collect();
    choices.push(decode_entities(&question.correct_answer));
    fisher_yates(&mut choices, rng);
    choices
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question() -> Question {
        Question {
            category: "General Knowledge".to_string(),
            kind: "multiple".to_string(),
            difficulty: Difficulty::Easy,
            prompt: "What does &quot;btw&quot; stand for?".to_string(),
            correct_answer: "By the way".to_string(),
            incorrect_answers: vec![
                "Bring the wine".to_string(),
                "Behind the wall".to_string(),
                "Below the water".to_string(),
            ],
        }
    }

    #[test]
    fn choices_preserve_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut choices = shuffled_choices_with(&question(), &mut rng);
        choices.sort();

        let mut expected = vec![
            "Behind the wall".to_string(),
            "Below the water".to_string(),
            "Bring the wine".to_string(),
            "By the way".to_string(),
        ];
        expected.sort();
        assert_eq!(choices, expected);
    }

    #[test]
    fn choices_are_decoded() {
        let mut q = question();
        q.correct_answer = "&quot;42&quot;".to_string();
        q.incorrect_answers = vec!["it&#039;s 41".to_string()];

        let mut rng = StdRng::seed_from_u64(0);
        let mut choices = shuffled_choices_with(&q, &mut rng);
        choices.sort();
        assert_eq!(choices, vec!["\"42\"".to_string(), "it's 41".to_string()]);
    }

    #[test]
    fn shuffle_handles_degenerate_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);

        let mut single = [42];
        fisher_yates(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // 3 elements have 6 permutations; over 6000 runs each should land
        // near 1000. A generous tolerance keeps this robust to seed choice.
        const RUNS: usize = 6_000;
        let mut rng = StdRng::seed_from_u64(0xDEC0DE);
        let mut counts = std::collections::HashMap::<[u8; 3], usize>::new();

        for _ in 0..RUNS {
            let mut items = [0u8, 1, 2];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (&perm, &count) in &counts {
            assert!(
                (700..=1300).contains(&count),
                "permutation {perm:?} appeared {count} times"
            );
        }
    }
}
