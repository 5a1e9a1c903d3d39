pub mod config;
pub mod converter;
mod error;
pub mod lookup;
pub mod scale;

pub use config::Config;
pub use converter::{Converter, UNKNOWN};
pub use error::Error;
pub use lookup::WordLookup;
pub use scale::{Scale, ScaleTable};

use num_bigint::BigUint;
use once_cell::sync::Lazy;

static ENGLISH: Lazy<Converter> = Lazy::new(|| Converter::new(ScaleTable::english()));

/// Converts `n` using the English short-scale table, see [`Converter::to_words`].
pub fn to_words<N>(n: N) -> String
where
    N: Into<BigUint>,
{
    ENGLISH.to_words(&n.into())
}
