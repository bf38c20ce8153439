//! Audio decoding: OGG/Opus voice payloads to model-ready samples.

pub mod convert;
pub mod wav;
