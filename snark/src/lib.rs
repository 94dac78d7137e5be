//! The proof-system crate of the pinocchio toolkit: dense polynomials over
//! the scalar field, flat-code circuits and their rank-1 constraint systems,
//! the R1CS-to-QAP transform, and the Pinocchio-style trusted setup, prover,
//! and verifier.
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

pub mod circuit;
pub mod errors;
pub mod field_polynomial;
pub mod matrix;
pub mod pinocchio;
pub mod qap;
