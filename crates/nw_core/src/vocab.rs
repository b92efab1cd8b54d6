//! Fixed English vocabulary.

/// zero…nineteen, indexed by value.
pub const LESS_THAN_TWENTY: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

/// Tens words indexed by the tens digit (index 0 and 1 are never emitted for 20..=99).
pub const TENS: [&str; 10] = [
    "zero", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Cardinal → ordinal words that don't follow the suffix rules.
pub const IRREGULAR_ORDINALS: [(&str, &str); 7] = [
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];

#[inline]
pub fn ones(n: u64) -> &'static str {
    LESS_THAN_TWENTY[n as usize]
}

#[inline]
pub fn tens(digit: u64) -> &'static str {
    TENS[digit as usize]
}

pub fn irregular_ordinal(word: &str) -> Option<&'static str> {
    IRREGULAR_ORDINALS
        .iter()
        .find(|(cardinal, _)| *cardinal == word)
        .map(|(_, ordinal)| *ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_indexed_by_value() {
        assert_eq!(ones(0), "zero");
        assert_eq!(ones(13), "thirteen");
        assert_eq!(ones(19), "nineteen");
        assert_eq!(tens(2), "twenty");
        assert_eq!(tens(9), "ninety");
    }

    #[test]
    fn irregulars() {
        assert_eq!(irregular_ordinal("twelve"), Some("twelfth"));
        assert_eq!(irregular_ordinal("four"), None);
    }
}
