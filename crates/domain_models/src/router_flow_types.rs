//! Marker types naming each connector flow

#[derive(Debug, Clone)]
pub struct Session;

#[derive(Debug, Clone)]
pub struct PSync;

#[derive(Debug, Clone)]
pub struct Capture;

#[derive(Debug, Clone)]
pub struct Void;

/// Refund execution
#[derive(Debug, Clone)]
pub struct Execute;
