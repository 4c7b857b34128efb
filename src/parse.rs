use std::{fmt::Display, str::FromStr, sync::OnceLock};

use num::Num;
use regex::Regex;

use crate::error::{Error, Result};

/// Result is only correct if bytes represents a valid positive number without any additional
/// characters!
pub fn parse_u32_from_bytes(bytes: &[u8]) -> u32 {
    let mut ret = 0;
    for b in bytes {
        ret = ret * 10 + (b - b'0') as u32;
    }
    ret
}

/// Same caveats as [`parse_u32_from_bytes`].
pub fn parse_u64_from_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |acc, b| acc * 10 + (b - b'0') as u64)
}

/// Parses every item, failing on the first one that doesn't parse.
pub fn parse_all<T, S>(items: impl IntoIterator<Item = S>) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.parse().map_err(|e| Error::parse(s, e))
        })
        .collect()
}

// ascii only, the unicode classes are compiled out
const NUMBER_PATTERN: &str = r"-?[0-9]+";

fn number_regex() -> Result<&'static Regex> {
    static RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUMBER_PATTERN))
        .as_ref()
        .map_err(|e| Error::parse(NUMBER_PATTERN, e))
}

/// Every (optionally negative) integer embedded in `line`, in order.
pub fn numbers_in<T>(line: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    number_regex()?
        .find_iter(line)
        .map(|m| m.as_str().parse().map_err(|e| Error::parse(m.as_str(), e)))
        .collect()
}

fn from_radix<T>(s: &str, radix: u32) -> Result<T>
where
    T: Num,
    T::FromStrRadixErr: Display,
{
    T::from_str_radix(s.trim(), radix).map_err(|e| Error::parse(s, e))
}

pub fn binary_to_int<T>(s: &str) -> Result<T>
where
    T: Num,
    T::FromStrRadixErr: Display,
{
    from_radix(s, 2)
}

pub fn hex_to_int<T>(s: &str) -> Result<T>
where
    T: Num,
    T::FromStrRadixErr: Display,
{
    from_radix(s, 16)
}

/// The four bits of a hexadecimal digit, most significant first.
pub fn hex_to_binary(digit: char) -> Result<&'static str> {
    const NIBBLES: [&str; 16] = [
        "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010",
        "1011", "1100", "1101", "1110", "1111",
    ];
    digit
        .to_digit(16)
        .map(|d| NIBBLES[d as usize])
        .ok_or(Error::InvalidHexDigit(digit))
}
