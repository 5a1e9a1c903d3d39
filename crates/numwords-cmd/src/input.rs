use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use numwords_core::{Converter, Error, UNKNOWN};

/// Parses a decimal integer as typed by a user: surrounding whitespace is ignored, a leading `+` is
/// allowed and single underscores may separate digits (`1_000_000`).
pub fn parse_number(text: &str) -> Result<BigUint, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let (negative, digits) = if let Some(digits) = text.strip_prefix('-') {
        (true, digits)
    } else if let Some(digits) = text.strip_prefix('+') {
        (false, digits)
    } else {
        (false, text)
    };

    if !is_digit_group(digits) {
        return Err(Error::InvalidNumber(text.to_string()));
    }

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    let n = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| Error::InvalidNumber(text.to_string()))?;

    if negative && !n.is_zero() {
        return Err(Error::Negative(BigInt::from_biguint(Sign::Minus, n)));
    }

    Ok(n)
}

/// Parses `text` and writes it out in words. In strict mode numbers beyond the largest scale are an
/// error instead of `unknown`.
pub fn words_for(converter: &Converter, text: &str, strict: bool) -> Result<String, anyhow::Error> {
    let n = parse_number(text)?;
    let words = converter.to_words(&n);
    if words == UNKNOWN && strict {
        anyhow::bail!(
            "{} is too large, only numbers below {} can be written out",
            n,
            converter.scales().upper_bound()
        );
    }

    Ok(words)
}

fn is_digit_group(s: &str) -> bool {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) if first.is_ascii_digit() && last.is_ascii_digit() => {
            bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_') && !s.contains("__")
        }
        _ => false,
    }
}
