//! Scanned QR payload → campus node resolution.
//!
//! Validation is deliberately thin: a prefix check rejects foreign QR codes
//! cheaply, then the payload must exactly match a node's authored `qr_code`.
//! A failed match is a normal `None` — the presentation layer owns the
//! "unrecognized code, try again" affordance.

use crate::model::{CampusMap, CampusNode};

/// Every campus QR anchor payload starts with this prefix.
pub const QR_CODE_PREFIX: &str = "CAMPUS_";

/// Resolve a scanned payload to the node it is anchored to.
///
/// Returns `None` for payloads without the campus prefix and for codes that
/// match no node.
pub fn resolve_qr<'m>(map: &'m CampusMap, data: &str) -> Option<&'m CampusNode> {
    if !data.starts_with(QR_CODE_PREFIX) {
        return None;
    }
    map.nodes().find(|node| node.qr_code == data)
}
