//! Constants for the MCAngleCompSin calibration reply

// Reply framing
pub const DEFAULT_BINARY_HEADER: &str = "sRA MCAngleCompSin "; // read answer + command name
pub const TOKEN_DELIMITER: char = ' ';
pub const REPLY_TOKEN_COUNT: usize = 5; // marker + command + 3 fields
pub const FIRST_FIELD_TOKEN: usize = 2;

// Binary payload: three big-endian 4-byte groups (amplitude, phase, offset)
pub const BINARY_PAYLOAD_LEN: usize = 12;
pub const BINARY_GROUP_LEN: usize = 4;

// Wire values carry four implied decimal digits
pub const FIXED_POINT_SCALE: f64 = 1.0 / 10000.0;

// Upper bound on compensation table rows
pub const MAX_TABLE_ROWS: usize = 1_000_000;
