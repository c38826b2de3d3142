//! MCAngleCompSin reply decoding
//!
//! Replies arrive either as ASCII text or as an ASCII header followed by a
//! binary payload. Binary replies are normalized into ASCII text first, so
//! both framings go through [`decode_ascii_reply`].

pub mod ascii;
pub mod binary;

pub use ascii::{decode_ascii_reply, parse_field, reinterpret_i16, reinterpret_i32, tokenize};
pub use binary::{build_binary_reply, encode_binary_payload, normalize_binary_reply};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Framing of a device reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyFormat {
    #[default]
    Ascii,
    Binary,
}

impl ReplyFormat {
    pub fn from_binary_flag(is_binary: bool) -> Self {
        if is_binary {
            ReplyFormat::Binary
        } else {
            ReplyFormat::Ascii
        }
    }
}

/// Correction fields as transmitted, in 1/10000 units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCorrection {
    /// Sine amplitude (1/10000 deg)
    pub amplitude: i16,
    /// Phase shift (1/10000 deg)
    pub phase: i32,
    /// Constant offset (1/10000 deg)
    pub offset: i16,
}

/// Decode a reply in the given framing.
pub fn decode_reply(format: ReplyFormat, reply: &[u8]) -> Result<RawCorrection> {
    match format {
        ReplyFormat::Binary => {
            let text = normalize_binary_reply(reply);
            log::trace!("Normalized binary reply: {:?}", text);
            decode_ascii_reply(&text)
        }
        ReplyFormat::Ascii => {
            let text: String = reply.iter().map(|&b| char::from(b)).collect();
            decode_ascii_reply(&text)
        }
    }
}
