//! angle-comp - Sinusoidal angle compensation for lidar scanners
//!
//! Decodes the `MCAngleCompSin` calibration reply (ASCII or binary framing)
//! and corrects raw rotation angles with
//! `comp = raw + ampl * sin(raw + phase) + offset`.
//!
//! ```
//! use angle_comp::{AngleCompensator, ReplyFormat};
//!
//! let mut comp = AngleCompensator::new();
//! comp.parse_reply(ReplyFormat::Ascii, b"sRA MCAngleCompSin +1893 -210503 -245")?;
//! let corrected = comp.compensate_angle_in_deg(90.0);
//! # assert!((corrected - 90.0).abs() < 1.0);
//! # Ok::<(), angle_comp::Error>(())
//! ```

pub mod compensator;
pub mod config;
pub mod constants;
pub mod error;
pub mod reply;
pub mod report;

// Re-export commonly used types
pub use compensator::{AngleCompensator, CorrectionParameters, SharedCompensator};
pub use config::{Config, TableRange};
pub use error::{Error, Field, Result};
pub use reply::{RawCorrection, ReplyFormat};
