use std::slice;

use num_bigint::BigUint;

use crate::Error;

/// Short-scale names, each one a thousand times the previous.
pub static ENGLISH_SCALE_NAMES: &[&str] = &[
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "trevigintillion",
    "quattuorvigintillion",
    "quinvigintillion",
    "sexvigintillion",
    "septenvigintillion",
    "octovigintillion",
    "novemvigintillion",
    "trigintillion",
    "untrigintillion",
    "duotrigintillion",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pub name: &'static str,
    pub magnitude: BigUint,
}

/// Scale names ordered by ascending magnitude, starting at one thousand.
///
/// `magnitude[i + 1] == magnitude[i] * 1000` always holds, so the table length alone decides which
/// numbers can be converted: everything below [`ScaleTable::upper_bound`].
#[derive(Debug, Clone)]
pub struct ScaleTable {
    scales: Vec<Scale>,
    upper_bound: BigUint,
}

impl ScaleTable {
    pub fn english() -> Self {
        Self::build(ENGLISH_SCALE_NAMES)
    }

    pub fn from_names(names: &[&'static str]) -> Result<Self, Error> {
        if names.is_empty() {
            return Err(Error::EmptyScaleTable);
        }

        Ok(Self::build(names))
    }

    fn build(names: &[&'static str]) -> Self {
        let thousand = BigUint::from(1_000u32);
        let mut magnitude = thousand.clone();
        let mut scales = Vec::with_capacity(names.len());

        for &name in names {
            let next = &magnitude * &thousand;
            scales.push(Scale { name, magnitude });
            magnitude = next;
        }

        ScaleTable {
            scales,
            upper_bound: magnitude,
        }
    }

    /// Exclusive upper bound of the numbers this table can name (largest magnitude * 1000).
    pub fn upper_bound(&self) -> &BigUint {
        &self.upper_bound
    }

    /// Finds the largest scale whose magnitude is `<= n`. Returns `None` for numbers below one
    /// thousand and for numbers at or above [`ScaleTable::upper_bound`].
    pub fn select(&self, n: &BigUint) -> Option<&Scale> {
        if n >= &self.upper_bound {
            return None;
        }

        let count = self.scales.partition_point(|scale| &scale.magnitude <= n);
        count.checked_sub(1).map(|i| &self.scales[i])
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Scale> {
        self.scales.iter()
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        ScaleTable::english()
    }
}

impl<'a> IntoIterator for &'a ScaleTable {
    type Item = &'a Scale;
    type IntoIter = slice::Iter<'a, Scale>;

    fn into_iter(self) -> Self::IntoIter {
        self.scales.iter()
    }
}
