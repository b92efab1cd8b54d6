//! Cardinal words: `SafeInt` → "one thousand, two hundred thirty-four".
//!
//! Contract:
//! - Groups are emitted most significant first into an accumulator owned by
//!   one conversion; a tier's multiplier (`n / divisor`) is spelled by a
//!   nested conversion with its own accumulator.
//! - Below 100 the fragment consumes the whole remainder ("forty-two").
//! - Thousand-scale groups carry a trailing "," when `use_commas` is set; the
//!   comma left on the final fragment is stripped when joining.
//! - The loop runs at most once per tier, so depth and work are bounded.

use nw_core::{vocab, FormattingOptions, SafeInt, Tier};

/// Spell `number` in cardinal form.
pub fn cardinal(number: SafeInt, opts: &FormattingOptions) -> String {
    if number.is_zero() {
        return vocab::ones(0).to_string();
    }

    let mut words: Vec<String> = Vec::with_capacity(8);
    if number.is_negative() && !opts.negative_prefix.is_empty() {
        words.push(opts.negative_prefix.clone());
    }
    push_groups(number.magnitude(), opts, &mut words);
    join(words, opts)
}

/// Spell a positive magnitude (tier multipliers).
fn spell(n: u64, opts: &FormattingOptions) -> String {
    let mut words = Vec::with_capacity(4);
    push_groups(n, opts, &mut words);
    join(words, opts)
}

fn push_groups(mut n: u64, opts: &FormattingOptions, words: &mut Vec<String>) {
    while n > 0 {
        let (fragment, rest) = fragment(n, opts);
        words.push(fragment);
        n = rest;
    }
}

/// One fragment for `n` plus the remainder still to be spelled.
fn fragment(n: u64, opts: &FormattingOptions) -> (String, u64) {
    match Tier::for_value(n) {
        None if n < 20 => (vocab::ones(n).to_string(), 0),
        None => {
            let (t, u) = (n / 10, n % 10);
            let word = if u == 0 {
                vocab::tens(t).to_string()
            } else {
                format!("{}-{}", vocab::tens(t), vocab::ones(u))
            };
            (word, 0)
        }
        Some(tier) => {
            let (head, rest) = tier.split(n);
            let sep = if tier.is_group() { opts.group_separator() } else { "" };
            tracing::trace!(n, tier = tier.name(), head, rest, "tier dispatch");
            (format!("{} {}{}", spell(head, opts), tier.name(), sep), rest)
        }
    }
}

fn join(words: Vec<String>, opts: &FormattingOptions) -> String {
    let mut out = words.join(" ");
    if opts.use_commas && out.ends_with(',') {
        out.pop();
    }
    out
}
