// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod laptop {
    include!("laptop.v1.rs");
    // laptop.v1.tonic.rs is auto-included by laptop.v1.rs
}
