//! End-to-end tests of the arithmetization-to-proof pipeline, from flat-code
//! circuits through the trusted setup, prover, and verifier.

use pinocchio_algebra::bls12_381::{BLSPairingEngine, BLSScalar, BLSG1, BLSG2};
use pinocchio_algebra::prelude::*;
use pinocchio_snark::circuit::{
    r1cs_satisfied, Circuit, CircuitMeta, Constraint, GateOp, Term,
};
use pinocchio_snark::matrix::Matrix;
use pinocchio_snark::pinocchio::prover::{generate_proof, PinocchioPf};
use pinocchio_snark::pinocchio::setup::{generate_trusted_setup, PinocchioSetup};
use pinocchio_snark::pinocchio::verifier::verify_proof;
use pinocchio_snark::qap::{combine_polynomials, divisor_polynomial, r1cs_to_qap};

type Engine = BLSPairingEngine;

fn signal_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn scalars_from_u64(values: &[u64]) -> Vec<BLSScalar> {
    values.iter().map(|v| BLSScalar::from(*v)).collect()
}

fn matrix_from_u64(rows: &[&[u64]]) -> Matrix<BLSScalar> {
    Matrix::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|v| BLSScalar::from(*v)).collect())
            .collect(),
    )
}

/// `aux = x*x; y = aux*x; z = x + y; out = z + 5`
fn cubic_circuit() -> Circuit<BLSScalar> {
    let signals = signal_names(&["one", "out", "x", "aux", "y", "z"]);
    let (out, x, aux, y, z) = (1, 2, 3, 4, 5);
    Circuit::new(
        signals,
        1,
        vec![x],
        vec![
            Constraint::In { signals: vec![x] },
            Constraint::Gate {
                op: GateOp::Mul,
                v1: Term::Signal(x),
                v2: Term::Signal(x),
                out: aux,
            },
            Constraint::Gate {
                op: GateOp::Mul,
                v1: Term::Signal(aux),
                v2: Term::Signal(x),
                out: y,
            },
            Constraint::Gate {
                op: GateOp::Add,
                v1: Term::Signal(x),
                v2: Term::Signal(y),
                out: z,
            },
            Constraint::Gate {
                op: GateOp::Add,
                v1: Term::Signal(z),
                v2: Term::Const(BLSScalar::from(5u64)),
                out,
            },
        ],
    )
}

/// `out = a * b`
fn multiplication_circuit() -> Circuit<BLSScalar> {
    let signals = signal_names(&["one", "out", "a", "b"]);
    Circuit::new(
        signals,
        1,
        vec![2, 3],
        vec![
            Constraint::In {
                signals: vec![2, 3],
            },
            Constraint::Gate {
                op: GateOp::Mul,
                v1: Term::Signal(2),
                v2: Term::Signal(3),
                out: 1,
            },
        ],
    )
}

fn prove_circuit(
    circuit: &Circuit<BLSScalar>,
    inputs: &[BLSScalar],
) -> (CircuitMeta, PinocchioSetup<Engine>, PinocchioPf<Engine>) {
    let mut prng = test_rng();
    let witness = circuit.calculate_witness(inputs).unwrap();
    let (a, b, c) = circuit.build_r1cs().unwrap();
    assert!(r1cs_satisfied(&a, &b, &c, &witness));

    let (a_polys, b_polys, c_polys, z) = r1cs_to_qap(&a, &b, &c).unwrap();
    let (ax, bx, cx, px) = combine_polynomials(&witness, &a_polys, &b_polys, &c_polys);
    let hx = divisor_polynomial(&px, &z).unwrap();

    // p(x) = a(x) * b(x) - c(x) == h(x) * z(x)
    assert_eq!(ax.mul(&bx).sub(&cx), px);
    assert_eq!(hx.mul(&z), px);

    let meta = CircuitMeta::from(circuit);
    let setup = generate_trusted_setup::<Engine, _>(
        &mut prng,
        witness.len(),
        &meta,
        &a_polys,
        &b_polys,
        &c_polys,
        &z,
    )
    .unwrap();
    let proof = generate_proof::<Engine>(&meta, &setup, &hx, &witness).unwrap();
    (meta, setup, proof)
}

#[test]
fn zk_from_flat_circuit_code() {
    let circuit = cubic_circuit();
    let witness = circuit.calculate_witness(&[BLSScalar::from(3u64)]).unwrap();
    assert_eq!(witness, scalars_from_u64(&[1, 35, 3, 9, 27, 30]));

    let (meta, setup, proof) = prove_circuit(&circuit, &[BLSScalar::from(3u64)]);
    assert_eq!(proof.public_signals, scalars_from_u64(&[35]));
    assert!(verify_proof::<Engine>(&meta, &setup, &proof));
}

#[test]
fn zk_multiplication() {
    let circuit = multiplication_circuit();
    let witness = circuit
        .calculate_witness(&scalars_from_u64(&[3, 4]))
        .unwrap();
    assert_eq!(witness, scalars_from_u64(&[1, 12, 3, 4]));

    let (meta, setup, proof) = prove_circuit(&circuit, &scalars_from_u64(&[3, 4]));
    assert!(verify_proof::<Engine>(&meta, &setup, &proof));
}

#[test]
fn zk_from_hardcoded_r1cs() {
    let mut prng = test_rng();
    let a = matrix_from_u64(&[
        &[0, 0, 1, 0, 0, 0],
        &[0, 0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 1, 0],
        &[5, 0, 0, 0, 0, 1],
    ]);
    let b = matrix_from_u64(&[
        &[0, 0, 1, 0, 0, 0],
        &[0, 0, 1, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0],
    ]);
    let c = matrix_from_u64(&[
        &[0, 0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 1, 0],
        &[0, 0, 0, 0, 0, 1],
        &[0, 1, 0, 0, 0, 0],
    ]);
    let witness = scalars_from_u64(&[1, 35, 3, 9, 27, 30]);
    let meta = CircuitMeta {
        n_vars: 6,
        n_public: 1,
    };

    let (a_polys, b_polys, c_polys, z) = r1cs_to_qap(&a, &b, &c).unwrap();
    let (ax, bx, cx, px) = combine_polynomials(&witness, &a_polys, &b_polys, &c_polys);
    let hx = divisor_polynomial(&px, &z).unwrap();
    assert_eq!(ax.mul(&bx).sub(&cx), px);
    assert_eq!(hx.mul(&z), px);

    let setup = generate_trusted_setup::<Engine, _>(
        &mut prng,
        witness.len(),
        &meta,
        &a_polys,
        &b_polys,
        &c_polys,
        &z,
    )
    .unwrap();
    let proof = generate_proof::<Engine>(&meta, &setup, &hx, &witness).unwrap();
    assert!(verify_proof::<Engine>(&meta, &setup, &proof));
}

#[test]
fn tampered_public_signal_is_rejected() {
    let circuit = cubic_circuit();
    let (meta, setup, mut proof) = prove_circuit(&circuit, &[BLSScalar::from(3u64)]);
    assert!(verify_proof::<Engine>(&meta, &setup, &proof));

    proof.public_signals[0] = BLSScalar::from(36u64);
    assert!(!verify_proof::<Engine>(&meta, &setup, &proof));
}

#[test]
fn tampered_proof_elements_are_rejected() {
    let circuit = cubic_circuit();
    let (meta, setup, proof) = prove_circuit(&circuit, &[BLSScalar::from(3u64)]);

    let mut tampered = proof.clone();
    tampered.pi_a = tampered.pi_a.add(&BLSG1::get_base());
    assert!(!verify_proof::<Engine>(&meta, &setup, &tampered));

    let mut tampered = proof.clone();
    tampered.pi_b = tampered.pi_b.add(&BLSG2::get_base());
    assert!(!verify_proof::<Engine>(&meta, &setup, &tampered));

    let mut tampered = proof.clone();
    tampered.pi_h = tampered.pi_h.add(&BLSG1::get_base());
    assert!(!verify_proof::<Engine>(&meta, &setup, &tampered));

    let mut tampered = proof;
    tampered.pi_kp = tampered.pi_kp.add(&BLSG1::get_base());
    assert!(!verify_proof::<Engine>(&meta, &setup, &tampered));
}

#[test]
fn corrupted_proof_bytes_are_rejected() {
    let circuit = cubic_circuit();
    let (meta, setup, proof) = prove_circuit(&circuit, &[BLSScalar::from(3u64)]);

    let mut bytes = bincode::serialize(&proof).unwrap();
    // flip one byte inside the first serialized group element
    let target = bytes.len() / 2;
    bytes[target] ^= 0x01;

    // the corruption either breaks point decoding or yields a proof that
    // no longer verifies
    if let Ok(corrupted) = bincode::deserialize::<PinocchioPf<Engine>>(&bytes) {
        assert!(!verify_proof::<Engine>(&meta, &setup, &corrupted));
    }
}

#[test]
fn proof_and_setup_serde_round_trip() {
    let circuit = multiplication_circuit();
    let (meta, setup, proof) = prove_circuit(&circuit, &scalars_from_u64(&[3, 4]));

    let proof_bytes = bincode::serialize(&proof).unwrap();
    let proof_back: PinocchioPf<Engine> = bincode::deserialize(&proof_bytes).unwrap();
    assert_eq!(proof, proof_back);

    let setup_bytes = bincode::serialize(&setup).unwrap();
    let setup_back: PinocchioSetup<Engine> = bincode::deserialize(&setup_bytes).unwrap();
    assert_eq!(setup, setup_back);

    assert!(verify_proof::<Engine>(&meta, &setup_back, &proof_back));
}

#[test]
fn wrong_witness_cannot_reach_a_proof() {
    let circuit = multiplication_circuit();
    let (a, b, c) = circuit.build_r1cs().unwrap();
    let bad_witness = scalars_from_u64(&[1, 13, 3, 4]);
    assert!(!r1cs_satisfied(&a, &b, &c, &bad_witness));

    let (a_polys, b_polys, c_polys, z) = r1cs_to_qap(&a, &b, &c).unwrap();
    let (_, _, _, px) = combine_polynomials(&bad_witness, &a_polys, &b_polys, &c_polys);
    assert!(divisor_polynomial(&px, &z).is_err());
}
