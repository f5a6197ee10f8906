//! IPv4 CIDR calculator.
//!
//! Parse `A.B.C.D/N` once into a [`CidrBlock`], then ask it for anything
//! derived from the address and prefix: network and broadcast addresses,
//! subnet mask, usable host range and count, address class, private range.
//!
//! ```
//! let block = cidr_calc::parse("91.124.230.205/30").unwrap();
//! assert_eq!(cidr_calc::network_address(&block), "91.124.230.204");
//! assert_eq!(cidr_calc::usable_host_count(&block), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{AppError, CidrError};
pub use models::{AddressClass, CidrBlock};
pub use processing::CidrReport;

/// Validate raw `A.B.C.D/N` input.
pub fn parse(raw: &str) -> Result<CidrBlock, CidrError> {
    CidrBlock::parse(raw)
}

/// Address part of the block as entered.
pub fn address_part(block: &CidrBlock) -> String {
    block.addr().to_string()
}

pub fn network_address(block: &CidrBlock) -> String {
    block.network().to_string()
}

pub fn broadcast_address(block: &CidrBlock) -> String {
    block.broadcast().to_string()
}

/// Mask as dotted binary octets, e.g. `11111111.11111111.11111111.11111100`.
pub fn subnet_mask_binary(block: &CidrBlock) -> String {
    block.subnet_mask_binary()
}

pub fn address_class(block: &CidrBlock) -> AddressClass {
    block.address_class()
}

/// `None` for `/31` and `/32`, which have no usable range.
pub fn first_usable_host(block: &CidrBlock) -> Option<String> {
    block.first_usable_host().map(|a| a.to_string())
}

/// Broadcast minus one; `None` for `/31` and `/32`.
pub fn last_usable_host(block: &CidrBlock) -> Option<String> {
    block.last_usable_host().map(|a| a.to_string())
}

/// Broadcast minus two; `None` for `/31` and `/32`.
pub fn penultimate_usable_host(block: &CidrBlock) -> Option<String> {
    block.penultimate_usable_host().map(|a| a.to_string())
}

pub fn usable_host_count(block: &CidrBlock) -> u64 {
    block.usable_host_count()
}

pub fn is_private(block: &CidrBlock) -> bool {
    block.is_private()
}
