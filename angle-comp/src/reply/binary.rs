//! Binary reply normalization
//!
//! Binary replies carry an ASCII header followed by 12 payload bytes. The
//! payload is rendered as hex text so both framings share the ASCII parser:
//!
//! ```text
//! "sRA MCAngleCompSin " 00 00 07 65 FF FC C9 B9 FF FF FF 0B
//!   -> "sRA MCAngleCompSin 00000765 FFFCC9B9 FFFFFF0B"
//! ```

use super::RawCorrection;
use crate::constants::{BINARY_GROUP_LEN, BINARY_PAYLOAD_LEN};
use std::fmt::Write;

/// Convert a binary reply into the textual shape of an ASCII reply.
///
/// Bytes before the payload are copied as Latin-1 characters. A reply shorter
/// than the payload is rendered entirely as hex.
pub fn normalize_binary_reply(reply: &[u8]) -> String {
    let header_len = reply.len().saturating_sub(BINARY_PAYLOAD_LEN);
    let (header, payload) = reply.split_at(header_len);

    let mut text = String::with_capacity(header.len() + payload.len() * 2 + 2);
    text.extend(header.iter().map(|&b| char::from(b)));

    for (i, byte) in payload.iter().enumerate() {
        let rendered = i + 1;
        // Writing into a String cannot fail
        let _ = write!(text, "{:02X}", byte);
        if rendered < BINARY_PAYLOAD_LEN && rendered % BINARY_GROUP_LEN == 0 {
            text.push(' ');
        }
    }

    text
}

/// Encode raw corrections as the 12-byte binary payload.
///
/// Each field is sign-extended to a big-endian 4-byte group, which is how the
/// device transmits them.
pub fn encode_binary_payload(raw: &RawCorrection) -> [u8; BINARY_PAYLOAD_LEN] {
    let mut payload = [0u8; BINARY_PAYLOAD_LEN];
    payload[0..4].copy_from_slice(&i32::from(raw.amplitude).to_be_bytes());
    payload[4..8].copy_from_slice(&raw.phase.to_be_bytes());
    payload[8..12].copy_from_slice(&i32::from(raw.offset).to_be_bytes());
    payload
}

/// Build a complete binary reply from an ASCII header and raw corrections.
pub fn build_binary_reply(header: &str, raw: &RawCorrection) -> Vec<u8> {
    let mut reply = Vec::with_capacity(header.len() + BINARY_PAYLOAD_LEN);
    reply.extend_from_slice(header.as_bytes());
    reply.extend_from_slice(&encode_binary_payload(raw));
    reply
}
