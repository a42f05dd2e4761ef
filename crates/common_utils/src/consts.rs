//! Commonly used constants

/// Base64 engine used for encoding credentials into headers
pub const BASE64_ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

/// Default timeout for outgoing requests, in seconds
pub const REQUEST_TIME_OUT: u64 = 30;

/// Number of minor units in one major unit for two-decimal currencies
pub const MINOR_UNITS_PER_MAJOR_UNIT: i64 = 100;
