//! Sticky port assignment.
//!
//! A microservice name maps to a port in `4000..=4999` via
//! `4000 + crc32(name) % 1000`, where crc32 is the IEEE/zlib polynomial over
//! the UTF-8 bytes of the name. Port-forwarding tooling written in other
//! languages depends on this exact formula; changing it requires bumping
//! [`STICKY_PORT_HASH`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const STICKY_PORT_BASE: u16 = 4000;
pub const STICKY_PORT_SPAN: u16 = 1000;
pub const STICKY_PORT_RANGE: RangeInclusive<u16> =
    STICKY_PORT_BASE..=STICKY_PORT_BASE + STICKY_PORT_SPAN - 1;

/// Identifier of the hash contract used by [`assign_sticky_port`].
pub const STICKY_PORT_HASH: &str = "crc32-ieee/v1";

/// Deterministic port for `name`. Callers must not pass an empty name; use
/// [`PortMode::resolve`] to get the dynamic fallback instead.
pub fn assign_sticky_port(name: &str) -> u16 {
    let offset = crc32fast::hash(name.as_bytes()) % u32::from(STICKY_PORT_SPAN);
    // offset < 1000, fits in u16
    STICKY_PORT_BASE + offset as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "port", rename_all = "snake_case")]
pub enum PortMode {
    Sticky(u16),
    Dynamic,
}

impl PortMode {
    /// Dynamic when requested or when there is no name to hash.
    pub fn resolve(name: &str, dynamic_ports: bool) -> Self {
        if dynamic_ports || name.is_empty() {
            PortMode::Dynamic
        } else {
            PortMode::Sticky(assign_sticky_port(name))
        }
    }

    pub fn sticky_port(&self) -> Option<u16> {
        match self {
            PortMode::Sticky(port) => Some(*port),
            PortMode::Dynamic => None,
        }
    }
}

impl fmt::Display for PortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortMode::Sticky(port) => write!(f, "sticky port {port}"),
            PortMode::Dynamic => write!(f, "dynamic ports"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_values_match_zlib_crc32() {
        assert_eq!(assign_sticky_port("orders-service"), 4340);
        assert_eq!(assign_sticky_port("billing"), 4826);
        assert_eq!(assign_sticky_port("api-gateway"), 4357);
        assert_eq!(assign_sticky_port("users-service"), 4397);
    }

    #[test]
    fn deterministic_and_in_range() {
        let long = "x".repeat(300);
        for name in ["a", "orders-service", long.as_str(), "żółw", "svc_42"] {
            let first = assign_sticky_port(name);
            assert_eq!(first, assign_sticky_port(name), "unstable for {name}");
            assert!(STICKY_PORT_RANGE.contains(&first), "{name} -> {first}");
        }
    }

    #[test]
    fn range_bounds() {
        assert_eq!(*STICKY_PORT_RANGE.start(), 4000);
        assert_eq!(*STICKY_PORT_RANGE.end(), 4999);
    }

    #[test]
    fn resolve_prefers_dynamic_when_requested() {
        assert_eq!(PortMode::resolve("billing", true), PortMode::Dynamic);
        assert_eq!(PortMode::resolve("billing", false), PortMode::Sticky(4826));
    }

    #[test]
    fn empty_name_falls_back_to_dynamic() {
        assert_eq!(PortMode::resolve("", false), PortMode::Dynamic);
        assert_eq!(PortMode::resolve("", false).sticky_port(), None);
    }

    #[test]
    fn serializes_with_mode_tag() {
        let json = serde_json::to_value(PortMode::Sticky(4340)).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "sticky", "port": 4340}));
        let json = serde_json::to_value(PortMode::Dynamic).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "dynamic"}));
    }
}
