//! The validated `address/prefix` pair and everything derived from it.

use super::class::AddressClass;
use super::ipv4::{parse_dotted_quad, prefix_mask, to_dotted_binary, MAX_LENGTH};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 address with a prefix length in `0..=32`.
///
/// The fields are private: a `CidrBlock` only comes out of a validating
/// constructor, so the derived values below never fail.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl CidrBlock {
    /// Create a block from an already parsed address.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<CidrBlock, CidrError> {
        if prefix > MAX_LENGTH {
            return Err(CidrError::InvalidPrefixLength(prefix.to_string()));
        }
        Ok(CidrBlock { addr, prefix })
    }

    /// Parse `A.B.C.D/N`. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<CidrBlock, CidrError> {
        let raw = raw.trim();
        let result = Self::parse_trimmed(raw);
        match &result {
            Ok(block) => log::debug!("parsed {raw:?} as {block}"),
            Err(e) => log::warn!("rejected {raw:?}: {e}"),
        }
        result
    }

    fn parse_trimmed(raw: &str) -> Result<CidrBlock, CidrError> {
        let parts: Vec<&str> = raw.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrError::MissingPrefix(raw.to_string()));
        }
        let bits = parse_dotted_quad(parts[0])?;
        let prefix = parse_prefix(parts[1])?;
        Ok(CidrBlock {
            addr: Ipv4Addr::from(bits),
            prefix,
        })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask_bits(&self) -> u32 {
        prefix_mask(self.prefix)
    }

    /// Dotted-decimal subnet mask, e.g. `255.255.255.0`.
    pub fn subnet_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    pub fn subnet_mask_binary(&self) -> String {
        to_dotted_binary(self.mask_bits())
    }

    pub fn address_binary(&self) -> String {
        to_dotted_binary(u32::from(self.addr))
    }

    /// Lowest address of the block: all host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Highest address of the block: all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    pub fn total_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Addresses left after removing network and broadcast.
    ///
    /// `/31` and `/32` have no such range and report `0`.
    pub fn usable_host_count(&self) -> u64 {
        if self.prefix >= MAX_LENGTH - 1 {
            0
        } else {
            self.total_addresses() - 2
        }
    }

    pub fn first_usable_host(&self) -> Option<Ipv4Addr> {
        self.host_offset_from_network(1)
    }

    pub fn last_usable_host(&self) -> Option<Ipv4Addr> {
        self.host_offset_from_broadcast(1)
    }

    /// The address two below broadcast, i.e. the one before the last usable host.
    pub fn penultimate_usable_host(&self) -> Option<Ipv4Addr> {
        self.host_offset_from_broadcast(2)
    }

    fn host_offset_from_network(&self, offset: u32) -> Option<Ipv4Addr> {
        if u64::from(offset) > self.usable_host_count() {
            return None;
        }
        u32::from(self.network())
            .checked_add(offset)
            .map(Ipv4Addr::from)
    }

    fn host_offset_from_broadcast(&self, offset: u32) -> Option<Ipv4Addr> {
        if u64::from(offset) > self.usable_host_count() {
            return None;
        }
        u32::from(self.broadcast())
            .checked_sub(offset)
            .map(Ipv4Addr::from)
    }

    pub fn address_class(&self) -> AddressClass {
        AddressClass::from_first_octet(self.addr.octets()[0])
    }

    /// True inside `10.0.0.0/8`, `172.16.0.0/12` or `192.168.0.0/16`.
    pub fn is_private(&self) -> bool {
        match self.addr.octets() {
            [10, ..] => true,
            [172, second, ..] => (16..=31).contains(&second),
            [192, 168, ..] => true,
            _ => false,
        }
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & self.mask_bits() == u32::from(self.network())
    }
}

fn parse_prefix(prefix: &str) -> Result<u8, CidrError> {
    if prefix.is_empty() || prefix.len() > 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrError::InvalidPrefixLength(prefix.to_string()));
    }
    match prefix.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(CidrError::InvalidPrefixLength(prefix.to_string())),
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::parse(s)
    }
}

impl TryFrom<&serde_json::Value> for CidrBlock {
    type Error = CidrError;

    /// Accept only JSON strings; any other JSON type is an [`CidrError::InvalidType`].
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let found = match value {
            Value::String(raw) => return CidrBlock::parse(raw),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        log::warn!("rejected non-string input {value}");
        Err(CidrError::InvalidType(found.to_string()))
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::parse(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
