//! DEV_CORE portfolio page.
//!
//! - `effects`: browser-independent state behind every animation
//! - `content`: page copy decoded from the embedded manifest
//! - `config`: effect tunables and their bounds
//! - `frontend`: Yew components (wasm32 only)

pub mod config;
pub mod content;
pub mod effects;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod frontend;
pub mod icons;
