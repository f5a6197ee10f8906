//! Domain models for the CIDR calculator.
//!
//! - [`ipv4`] - octet/bit conversions and mask derivation
//! - [`CidrBlock`] - validated address/prefix pair and its derived values
//! - [`AddressClass`] - legacy A-E classification

mod cidr_block;
mod class;
mod ipv4;

// Re-export public types
pub use cidr_block::CidrBlock;
pub use class::AddressClass;
pub use ipv4::{
    from_binary_string, get_cidr_mask, parse_dotted_quad, to_binary_string, to_dotted_binary,
    to_dotted_quad, MAX_LENGTH,
};
