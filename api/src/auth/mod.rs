//! Authentication

pub mod ingress;

pub use ingress::ingress_middleware;
