//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Alphabet, Configuration, Password};

/// Generate a password for the given configuration: `config.length` characters, each drawn
/// independently and uniformly from the configuration's alphabet.
///
/// A length of zero or less gives an empty password. There is no guarantee that every enabled
/// character class shows up in the result.
pub fn generate<R>(config: &Configuration, rng: &mut R) -> Password
where
    R: Rng + ?Sized,
{
    let alphabet = Alphabet::for_config(config);
    let len = usize::try_from(config.length).unwrap_or(0);
    generate_random_password(rng, &alphabet, len)
}

/// Like [`generate`], using the thread-local random source.
pub fn generate_with_thread_rng(config: &Configuration) -> Password {
    generate(config, &mut rand::thread_rng())
}

/// Randomly sample `len` characters, with replacement, from the given alphabet.
///
/// `rand`'s uniform sampler re-samples rather than taking a biased modulo, so every position in
/// the alphabet is equally likely.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &Alphabet, len: usize) -> Password
where
    R: Rng + ?Sized,
{
    let mut password = String::with_capacity(len);
    for _ in 0..len {
        // `Alphabet` is never empty.
        if let Some(ch) = alphabet.as_slice().choose(rng) {
            password.push(*ch);
        }
    }
    Password::from(password)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn config(length: i32, include_number: bool, include_character: bool) -> Configuration {
        Configuration {
            length,
            include_number,
            include_character,
        }
    }

    #[test]
    fn default_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = config(12, true, true);
        let alphabet = Alphabet::for_config(&config);
        assert_eq!(alphabet.len(), 91);
        let password = generate(&config, &mut rng);
        assert_eq!(password.char_count(), 12);
        assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn letters_only() {
        let mut rng = StdRng::seed_from_u64(2);
        let password = generate(&config(6, false, false), &mut rng);
        assert_eq!(password.char_count(), 6);
        assert!(password.as_str().chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn non_positive_lengths_are_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        for length in [0, -1, i32::MIN] {
            assert!(generate(&config(length, true, true), &mut rng).is_empty());
        }
    }

    #[test]
    fn lengths_outside_the_slider_range_are_honoured() {
        let mut rng = StdRng::seed_from_u64(4);
        for length in [1, 5, 31, 200] {
            let password = generate(&config(length, true, false), &mut rng);
            assert_eq!(password.char_count(), length as usize);
        }
    }

    #[test]
    fn every_alphabet_position_is_reachable() {
        let mut rng = StdRng::seed_from_u64(5);
        let alphabet = Alphabet::for_config(&config(0, true, true));
        let password = generate_random_password(&mut rng, &alphabet, 20_000);
        for ch in alphabet.as_slice() {
            assert!(password.as_str().contains(*ch), "never drew {:?}", ch);
        }
    }

    #[test]
    fn same_seed_same_password() {
        let config = config(16, true, true);
        let a = generate(&config, &mut StdRng::seed_from_u64(42));
        let b = generate(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn thread_rng() {
        let password = generate_with_thread_rng(&config(20, true, true));
        assert_eq!(password.char_count(), 20);
    }
}
