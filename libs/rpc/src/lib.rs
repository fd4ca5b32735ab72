//! Protobuf messages and tonic stubs for the laptop catalog.
//!
//! Sources live in `proto/laptop/v1/laptop.proto`; the Rust side is checked in under `src/gen`
//! so that builds do not need `protoc`.

#[allow(clippy::all)]
mod r#gen;

pub mod laptop {
    pub use crate::r#gen::laptop::*;
}
