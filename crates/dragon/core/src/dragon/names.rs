//! Offspring name synthesis.

use crate::env::{NameFormatter, RandomSource};

/// Fuses two parent names.
///
/// If either name contains a space, one token is drawn from each parent,
/// both are normalized, and they are joined with a space in random order.
/// Otherwise each parent contributes the front or back half of its name (cut
/// at `(len - 1) / 2` characters); only the second parent's half is
/// normalized, and the halves are concatenated in random order.
///
/// Draw order: token A, token B, order; or half A, half B, order.
pub fn synthesize_name<R: RandomSource + ?Sized>(
    first: &str,
    second: &str,
    rng: &mut R,
    formatter: &dyn NameFormatter,
) -> String {
    if first.contains(' ') || second.contains(' ') {
        let first_token = pick_token(first, rng);
        let second_token = pick_token(second, rng);
        let first_token = formatter.format(first_token);
        let second_token = formatter.format(second_token);
        if rng.next_bool() {
            format!("{first_token} {second_token}")
        } else {
            format!("{second_token} {first_token}")
        }
    } else {
        let first_half = pick_half(first, rng);
        let second_half = formatter.format(&pick_half(second, rng));
        if rng.next_bool() {
            first_half + &second_half
        } else {
            second_half + &first_half
        }
    }
}

fn pick_token<'a, R: RandomSource + ?Sized>(name: &'a str, rng: &mut R) -> &'a str {
    let tokens: Vec<&str> = name.split(' ').filter(|token| !token.is_empty()).collect();
    if tokens.is_empty() {
        return name;
    }
    tokens[rng.next_index(tokens.len())]
}

fn pick_half<R: RandomSource + ?Sized>(name: &str, rng: &mut R) -> String {
    let len = name.chars().count();
    let cut = len.saturating_sub(1) / 2;
    if rng.next_bool() {
        name.chars().take(cut).collect()
    } else {
        name.chars().skip(cut).collect()
    }
}
