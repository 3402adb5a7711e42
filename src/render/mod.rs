//! Rendering: CPU framebuffer, ray casting and the perspective sweep.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer and texture upload
//! - `caster`: Fixed-step ray march
//! - `renderer`: Wall-strip sweep with fisheye correction and depth shading

pub mod caster;
pub mod framebuffer;
pub mod renderer;
