//! Browser-independent state machines behind the page's visual effects.
//!
//! Nothing in here touches `web-sys`; the Yew components in `frontend` feed
//! pointer, scroll, timer and frame events in and read styles back out.

pub mod frame_loop;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod scramble;
pub mod spotlight;
pub mod tilt;
pub mod typewriter;
