pub mod rest;

pub use rest::{configure, ApiState, RestApi, MAX_BODY_BYTES};
