//! Front-loaded I/O: fonts, images and audio probing/decoding.
//!
//! Everything here runs before slide rendering and composition, so those stages only deal with
//! already-resolved inputs.

/// Image decoding and aspect-preserving scaling.
pub mod decode;
/// Font resource loading.
pub mod font;
/// Audio probing and decoding through the system `ffmpeg`/`ffprobe`.
pub mod media;
