//! Rendering of integer-encoded IPv4 endpoints.

use std::fmt;
use std::net::Ipv4Addr;

/// Split a 32-bit address into its four octets, most significant first.
pub fn decode_ip_to_octets(ipv4: u32) -> [u8; 4] {
    Ipv4Addr::from(ipv4).octets()
}

/// Render an integer-encoded IPv4 address and port as `a.b.c.d:port`.
///
/// The port is printed as given; range checking is the caller's concern.
///
/// ```
/// use dashfmt::public_address_to_string;
///
/// assert_eq!(public_address_to_string(0x7F00_0001, 8080), "127.0.0.1:8080");
/// ```
pub fn public_address_to_string(ipv4: u32, port: impl fmt::Display) -> String {
    let [a, b, c, d] = decode_ip_to_octets(ipv4);
    format!("{a}.{b}.{c}.{d}:{port}")
}
