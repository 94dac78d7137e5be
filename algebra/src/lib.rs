//! The algebra crate of the pinocchio toolkit: wrappers over the BLS12-381
//! curve exposing the scalar-field, group, and pairing operations that the
//! proof system consumes.
#![deny(missing_docs, trivial_casts, bare_trait_objects)]
#![warn(unused, future_incompatible, nonstandard_style, rust_2018_idioms)]
#![allow(
    clippy::op_ref,
    clippy::suspicious_op_assign_impl,
    clippy::upper_case_acronyms
)]
#![forbid(unsafe_code)]

/// Module for the BLS12-381 curve
pub mod bls12_381;

/// Module for error handling
pub mod errors;

/// Module for traits
pub mod traits;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for prelude
#[doc(hidden)]
pub mod prelude;

/// Module for test rng
pub mod rand_helper;

#[doc(hidden)]
pub use ark_std::{borrow, cmp, fmt, iter, ops, rand, result, str, One, UniformRand, Zero};
