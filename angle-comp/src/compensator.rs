//! Sinusoidal angle compensation
//!
//! The compensated angle is
//!
//! ```text
//! comp = raw + ampl * sin(raw + phase) + offset
//! ```
//!
//! `offset` removes a constant deviation, the sine term removes a deviation
//! that swings once per revolution. All three values come from the device's
//! `MCAngleCompSin` reply.

use crate::constants::FIXED_POINT_SCALE;
use crate::error::Result;
use crate::reply::{RawCorrection, ReplyFormat, decode_ascii_reply, decode_reply};
use parking_lot::RwLock;
use std::sync::Arc;

/// Decoded calibration state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CorrectionParameters {
    /// Sine amplitude (unitless multiplier, degree swing)
    pub amplitude: f64,
    pub phase_deg: f64,
    pub phase_rad: f64,
    pub offset_deg: f64,
    pub offset_rad: f64,
}

impl CorrectionParameters {
    /// Scale raw wire values into engineering units.
    pub fn from_raw(raw: &RawCorrection) -> Self {
        let phase_deg = f64::from(raw.phase) * FIXED_POINT_SCALE;
        let offset_deg = f64::from(raw.offset) * FIXED_POINT_SCALE;
        Self {
            amplitude: f64::from(raw.amplitude) * FIXED_POINT_SCALE,
            phase_deg,
            phase_rad: phase_deg.to_radians(),
            offset_deg,
            offset_rad: offset_deg.to_radians(),
        }
    }

    /// True when compensation leaves every angle unchanged.
    pub fn is_identity(&self) -> bool {
        self.amplitude == 0.0 && self.offset_deg == 0.0
    }
}

/// Applies the stored correction parameters to raw angles
#[derive(Debug, Clone, Default)]
pub struct AngleCompensator {
    params: CorrectionParameters,
}

impl AngleCompensator {
    /// Create a compensator with zero corrections (identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compensator from already known raw values.
    pub fn with_raw(raw: &RawCorrection) -> Self {
        Self {
            params: CorrectionParameters::from_raw(raw),
        }
    }

    pub fn parameters(&self) -> &CorrectionParameters {
        &self.params
    }

    /// Drop the calibration and fall back to identity.
    pub fn reset(&mut self) {
        self.params = CorrectionParameters::default();
    }

    /// Decode a device reply and adopt its parameters.
    ///
    /// On error the previous parameters stay in effect.
    pub fn parse_reply(&mut self, format: ReplyFormat, reply: &[u8]) -> Result<()> {
        let raw = decode_reply(format, reply)?;
        self.apply(&raw);
        Ok(())
    }

    /// Decode an ASCII reply and adopt its parameters.
    ///
    /// On error the previous parameters stay in effect.
    pub fn parse_ascii_reply(&mut self, reply: &str) -> Result<()> {
        let raw = decode_ascii_reply(reply)?;
        self.apply(&raw);
        Ok(())
    }

    fn apply(&mut self, raw: &RawCorrection) {
        self.params = CorrectionParameters::from_raw(raw);
        log::debug!(
            "Angle compensation: ampl={:.4} phase={:.4}deg offset={:.4}deg",
            self.params.amplitude,
            self.params.phase_deg,
            self.params.offset_deg
        );
    }

    /// Compensate a raw angle given in radians.
    ///
    /// The amplitude is a degree swing, so it is scaled to radians here.
    pub fn compensate_angle_in_rad(&self, angle_rad: f64) -> f64 {
        let p = &self.params;
        angle_rad
            + 1.0_f64.to_radians() * p.amplitude * (angle_rad + p.phase_rad).sin()
            + p.offset_rad
    }

    /// Compensate a raw angle given in degrees.
    pub fn compensate_angle_in_deg(&self, angle_deg: f64) -> f64 {
        let p = &self.params;
        angle_deg + p.amplitude * (angle_deg.to_radians() + p.phase_rad).sin() + p.offset_deg
    }
}

/// Compensator handle for drivers that decode and compensate on different threads
///
/// Decoding holds the write lock for the whole parameter swap, so readers
/// never see a partially updated set.
#[derive(Debug, Clone, Default)]
pub struct SharedCompensator {
    inner: Arc<RwLock<AngleCompensator>>,
}

impl SharedCompensator {
    pub fn new(compensator: AngleCompensator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(compensator)),
        }
    }

    pub fn parse_reply(&self, format: ReplyFormat, reply: &[u8]) -> Result<()> {
        // Decode outside the lock
        let raw = decode_reply(format, reply).inspect_err(|e| {
            log::warn!("Rejected angle compensation reply: {}", e);
        })?;
        self.inner.write().apply(&raw);
        Ok(())
    }

    pub fn parameters(&self) -> CorrectionParameters {
        *self.inner.read().parameters()
    }

    pub fn compensate_angle_in_rad(&self, angle_rad: f64) -> f64 {
        self.inner.read().compensate_angle_in_rad(angle_rad)
    }

    pub fn compensate_angle_in_deg(&self, angle_deg: f64) -> f64 {
        self.inner.read().compensate_angle_in_deg(angle_deg)
    }
}
