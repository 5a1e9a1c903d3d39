use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::lookup::WordLookup;
use crate::scale::ScaleTable;
use crate::Error;

/// Returned for numbers that are too large for the scale table.
pub const UNKNOWN: &str = "unknown";

/// Writes numbers out in English words, e.g. `1001` becomes `one thousand one`.
///
/// Numbers at or above [`ScaleTable::upper_bound`] are not approximated, they are converted to
/// [`UNKNOWN`] instead.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    scales: ScaleTable,
    words: WordLookup,
}

impl Converter {
    pub fn new(scales: ScaleTable) -> Self {
        log::debug!(
            "Creating converter with {} scales (upper bound 10^{})",
            scales.len(),
            3 * (scales.len() + 1)
        );

        Converter {
            scales,
            words: WordLookup,
        }
    }

    pub fn scales(&self) -> &ScaleTable {
        &self.scales
    }

    pub fn to_words(&self, n: &BigUint) -> String {
        if n >= self.scales.upper_bound() {
            log::trace!("{} is out of range", n);
            return UNKNOWN.to_string();
        }

        if let Some(small) = n.to_u32().filter(|small| *small < 1_000) {
            return self.small_to_words(small);
        }

        match self.scales.select(n) {
            Some(scale) => self.place_to_words(n, scale.name, &scale.magnitude),
            None => UNKNOWN.to_string(),
        }
    }

    pub fn to_words_signed(&self, n: &BigInt) -> Result<String, Error> {
        match n.to_biguint() {
            Some(n) => Ok(self.to_words(&n)),
            None => Err(Error::Negative(n.clone())),
        }
    }

    fn small_to_words(&self, n: u32) -> String {
        if let Some(word) = self.words.get(n) {
            return word.to_string();
        }

        match n {
            10..=19 => format!("{}teen", self.word(n - 10)),
            20..=99 => {
                let tens = n / 10 * 10;
                format!("{}-{}", self.word(tens), self.word(n - tens))
            }
            _ => {
                let (hundreds, remainder) = n.div_rem(&100);
                join_place(
                    self.small_to_words(hundreds),
                    "hundred",
                    (remainder > 0).then(|| self.small_to_words(remainder)),
                )
            }
        }
    }

    fn place_to_words(&self, n: &BigUint, place_name: &str, place_value: &BigUint) -> String {
        let (quotient, remainder) = n.div_rem(place_value);
        let remainder = if remainder.is_zero() {
            None
        } else {
            Some(self.to_words(&remainder))
        };

        join_place(self.to_words(&quotient), place_name, remainder)
    }

    fn word(&self, n: u32) -> &'static str {
        let word = self.words.get(n);
        debug_assert!(word.is_some(), "{} is missing from the word lookup", n);
        word.unwrap_or(UNKNOWN)
    }
}

fn join_place(quotient: String, place_name: &str, remainder: Option<String>) -> String {
    match remainder {
        Some(remainder) => format!("{} {} {}", quotient, place_name, remainder),
        None => format!("{} {}", quotient, place_name),
    }
}
