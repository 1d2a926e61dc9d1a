//! IPv6 address generation and validation helpers.

pub mod generator;

pub use generator::{generate_addresses, random_ipv6};

/// Check if a string is a valid IPv6 address
pub fn is_valid_ipv6(ip: &str) -> bool {
    ip.parse::<std::net::Ipv6Addr>().is_ok()
}
