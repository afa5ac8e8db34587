//! WebGPU client for browser Pong
//!
//! The simulation lives in `game_core`; this crate turns key presses and
//! animation frames into game input and draws the field with wgpu.
//!
//! Everything except `renderer` and the JS bindings builds natively, so the
//! screen flow and drawing layout are covered by `cargo test`.

pub mod camera;
pub mod fsm;
pub mod input;
pub mod mesh;
pub mod scene;
pub mod session;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::*;
