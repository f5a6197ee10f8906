//! IPv4 octet and bit conversions.
//!
//! Converts between the 32-bit form of an address and its dotted-quad,
//! bit-string and dotted-binary renderings, and derives subnet masks from
//! prefix lengths.

use crate::error::CidrError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref OCTET: Regex = Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex?");
    static ref BITS: Regex = Regex::new(r"^[01]{32}$").expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefixLength(len.to_string()))
    } else {
        Ok(prefix_mask(len))
    }
}

/// Mask for a prefix already known to be in range.
pub(crate) fn prefix_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Parse `A.B.C.D` into its 32-bit big-endian value.
///
/// Each octet must be one to three decimal digits with a value up to 255.
pub fn parse_dotted_quad(address: &str) -> Result<u32, CidrError> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return Err(CidrError::malformed(
            address,
            format!("expected 4 octets, found {}", parts.len()),
        ));
    }

    let mut bits = 0u32;
    for part in parts {
        if !OCTET.is_match(part) {
            return Err(CidrError::malformed(
                address,
                format!("octet '{part}' is not a decimal number"),
            ));
        }
        let octet: u8 = part
            .parse()
            .map_err(|_| CidrError::malformed(address, format!("octet '{part}' is above 255")))?;
        bits = (bits << 8) | u32::from(octet);
    }
    Ok(bits)
}

pub fn to_dotted_quad(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

/// Render as 32 `0`/`1` characters, most significant bit first.
pub fn to_binary_string(bits: u32) -> String {
    format!("{bits:032b}")
}

/// Inverse of [`to_binary_string`].
pub fn from_binary_string(binary: &str) -> Result<u32, CidrError> {
    if !BITS.is_match(binary) {
        return Err(CidrError::malformed(binary, "expected exactly 32 binary digits"));
    }
    u32::from_str_radix(binary, 2)
        .map_err(|e| CidrError::malformed(binary, format!("not a binary number: {e}")))
}

/// Render as four 8-bit groups, e.g. `11111111.11111111.11111111.11111100`.
pub fn to_dotted_binary(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(30).unwrap(), 0xFFFFFFFC);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(
            get_cidr_mask(33),
            Err(CidrError::InvalidPrefixLength("33".to_string()))
        );
    }

    #[test]
    fn test_mask_has_prefix_leading_ones() {
        for len in 0..=MAX_LENGTH {
            let mask = get_cidr_mask(len).unwrap();
            assert_eq!(mask.leading_ones(), u32::from(len), "/{len}");
            assert_eq!(mask.count_ones(), u32::from(len), "/{len}");
        }
    }

    #[test]
    fn test_parse_dotted_quad() {
        assert_eq!(parse_dotted_quad("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_dotted_quad("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_dotted_quad("91.124.230.205").unwrap(), 0x5B7CE6CD);
        assert_eq!(parse_dotted_quad("1.0.0.0").unwrap(), 1 << 24);
    }

    #[test]
    fn test_parse_dotted_quad_rejects() {
        let inputs = [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "1..3.4",
            "1.2.3.256",
            "a.b.c.d",
            "+1.2.3.4",
            " 1.2.3.4",
            "1.2.3.1000",
        ];
        for bad in inputs {
            let err = parse_dotted_quad(bad).unwrap_err();
            assert!(
                matches!(err, CidrError::MalformedAddress { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    /// Every octet value in every position, the other octets held at a
    /// non-trivial background.
    fn octet_sweep() -> impl Iterator<Item = [u8; 4]> {
        (0..4).flat_map(|pos| {
            (0..=255u8).map(move |value| {
                let mut octets = [91, 124, 230, 205];
                octets[pos] = value;
                octets
            })
        })
    }

    #[test]
    fn test_dotted_quad_round_trip() {
        for octets in octet_sweep() {
            let s = octets.iter().join(".");
            let bits = parse_dotted_quad(&s).unwrap();
            assert_eq!(bits, u32::from_be_bytes(octets), "{s}");
            assert_eq!(to_dotted_quad(bits), s);
        }
    }

    #[test]
    fn test_binary_string_round_trip() {
        for octets in octet_sweep() {
            let bits = u32::from_be_bytes(octets);
            let binary = to_binary_string(bits);
            assert_eq!(binary.len(), 32);
            assert_eq!(from_binary_string(&binary).unwrap(), bits);
            assert_eq!(binary, to_dotted_binary(bits).replace('.', ""));
        }
    }

    #[test]
    fn test_binary_string() {
        assert_eq!(
            to_binary_string(0x5B7CE6CD),
            "01011011011111001110011011001101"
        );
        assert_eq!(to_binary_string(0).len(), 32);
        for bits in [0, 1, 0x80000000, 0x5B7CE6CD, u32::MAX] {
            assert_eq!(from_binary_string(&to_binary_string(bits)).unwrap(), bits);
        }
        assert!(from_binary_string("0101").is_err());
        assert!(from_binary_string("0101101101111100111001101100110x").is_err());
    }

    #[test]
    fn test_dotted_binary() {
        assert_eq!(
            to_dotted_binary(get_cidr_mask(30).unwrap()),
            "11111111.11111111.11111111.11111100"
        );
        assert_eq!(to_dotted_binary(0), "00000000.00000000.00000000.00000000");
    }
}
