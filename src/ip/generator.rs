//! Random IPv6 address generation.
//!
//! Every server gets an address drawn uniformly from the full 128-bit space.
//! No prefix is reserved and no uniqueness is enforced.

use rand::Rng;
use std::net::Ipv6Addr;

/// Draw a uniformly random IPv6 address
pub fn random_ipv6<R: Rng + ?Sized>(rng: &mut R) -> Ipv6Addr {
    Ipv6Addr::from(rng.gen::<u128>())
}

/// Generate `count` random addresses in their canonical textual form
pub fn generate_addresses<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|i| {
            let addr = random_ipv6(rng).to_string();
            log::debug!("Generated IPv6 address {} for S{}", addr, i);
            addr
        })
        .collect()
}
