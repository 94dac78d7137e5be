//! The Pinocchio-style proof system: per-circuit trusted setup, prover, and
//! pairing-based verifier.

/// Module for the trusted setup.
pub mod setup;

/// Module for the prover.
pub mod prover;

/// Module for the verifier.
pub mod verifier;
