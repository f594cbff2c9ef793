//! Reelhost Probe Library
//!
//! Media inspection via an external `ffprobe` subprocess and aspect-ratio
//! classification of the reported dimensions. The `Prober` trait is the
//! seam that lets tests run the pipeline with canned dimensions instead of
//! a real subprocess.

pub mod aspect;
pub mod ffprobe;

pub use aspect::{classify_aspect, AspectRatio};
pub use ffprobe::{FfprobeProber, ProbeError, ProbeReport, Prober, StaticProber};
