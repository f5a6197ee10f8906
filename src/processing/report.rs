//! All derived facts of one block, ready for output.

use crate::models::{AddressClass, CidrBlock};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Placeholder for a host address the block does not have.
pub const NO_HOST: &str = "-";

/// Represents one calculated block for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CidrReport {
    /// Input in canonical `A.B.C.D/N` form.
    pub cidr: String,
    /// Address part of the input.
    pub address: String,
    pub prefix: u8,
    pub network: String,
    pub broadcast: String,
    /// Dotted-decimal mask.
    pub subnet_mask: String,
    /// Dotted binary mask.
    pub subnet_mask_binary: String,
    pub address_binary: String,
    pub first_usable: String,
    pub last_usable: String,
    pub penultimate_usable: String,
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub class: AddressClass,
    pub private: bool,
}

impl CidrReport {
    pub fn from_block(block: &CidrBlock) -> CidrReport {
        log::debug!("building report for {block}");
        CidrReport {
            cidr: block.to_string(),
            address: block.addr().to_string(),
            prefix: block.prefix(),
            network: block.network().to_string(),
            broadcast: block.broadcast().to_string(),
            subnet_mask: block.subnet_mask().to_string(),
            subnet_mask_binary: block.subnet_mask_binary(),
            address_binary: block.address_binary(),
            first_usable: host_or_placeholder(block.first_usable_host()),
            last_usable: host_or_placeholder(block.last_usable_host()),
            penultimate_usable: host_or_placeholder(block.penultimate_usable_host()),
            total_addresses: block.total_addresses(),
            usable_hosts: block.usable_host_count(),
            class: block.address_class(),
            private: block.is_private(),
        }
    }

    /// Label/value pairs in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cidr", self.cidr.clone()),
            ("address", self.address.clone()),
            ("network", self.network.clone()),
            ("broadcast", self.broadcast.clone()),
            ("subnet_mask", self.subnet_mask.clone()),
            ("subnet_mask_binary", self.subnet_mask_binary.clone()),
            ("address_binary", self.address_binary.clone()),
            ("first_usable", self.first_usable.clone()),
            ("last_usable", self.last_usable.clone()),
            ("penultimate_usable", self.penultimate_usable.clone()),
            ("total_addresses", self.total_addresses.to_string()),
            ("usable_hosts", self.usable_hosts.to_string()),
            ("class", self.class.to_string()),
            ("private", self.private.to_string()),
        ]
    }
}

pub(crate) fn host_or_placeholder(host: Option<Ipv4Addr>) -> String {
    host.map(|h| h.to_string())
        .unwrap_or_else(|| NO_HOST.to_string())
}
