//! Core types for the audio-reactive orb.
//!
//! This crate holds everything that is independent of the rendering
//! framework: the telemetry record delivered by the audio pipeline, the
//! fixed palette/coefficient tables, and the mapping from telemetry to
//! visual parameters. The rendering crate consumes `OrbParameters` as a
//! fully-formed snapshot; no smoothing or easing happens here.

pub mod color;
pub mod mapper;
pub mod palette;
pub mod telemetry;

pub use color::Rgb;
pub use mapper::{ActivityState, OrbParameters};
pub use telemetry::{AudioTelemetry, BandLevels};
