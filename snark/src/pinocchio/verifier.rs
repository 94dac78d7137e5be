use crate::circuit::CircuitMeta;
use crate::pinocchio::prover::PinocchioPf;
use crate::pinocchio::setup::PinocchioSetup;
use pinocchio_algebra::prelude::*;
use pinocchio_algebra::traits::Pairing;

/// Verify a proof against the setup and its public signals by checking the
/// five pairing equations: the three knowledge commitments, the QAP
/// divisibility, and the linearity of the `K` commitment. A failed
/// equation yields `false`, never an error.
pub fn verify_proof<P: Pairing>(
    meta: &CircuitMeta,
    setup: &PinocchioSetup<P>,
    proof: &PinocchioPf<P>,
) -> bool {
    if proof.public_signals.len() != meta.n_public
        || setup.vk.a.len() != meta.n_public + 1
    {
        return false;
    }

    let g2 = P::G2::get_base();

    // e(piA, Vka) == e(piA', g2), the knowledge commitment for A
    let lhs = P::pairing(&proof.pi_a, &setup.vk.vka);
    let rhs = P::pairing(&proof.pi_ap, &g2);
    if lhs != rhs {
        return false;
    }

    // e(Vkb, piB) == e(piB', g2), the knowledge commitment for B
    let lhs = P::pairing(&setup.vk.vkb, &proof.pi_b);
    let rhs = P::pairing(&proof.pi_bp, &g2);
    if lhs != rhs {
        return false;
    }

    // e(piC, Vkc) == e(piC', g2), the knowledge commitment for C
    let lhs = P::pairing(&proof.pi_c, &setup.vk.vkc);
    let rhs = P::pairing(&proof.pi_cp, &g2);
    if lhs != rhs {
        return false;
    }

    // vkx = vkA_0 + sum_j publicSignals[j] * vkA_{j+1}
    let mut vkx = setup.vk.a[0];
    for (j, signal) in proof.public_signals.iter().enumerate() {
        vkx.add_assign(&setup.vk.a[j + 1].mul(signal));
    }

    // e(vkx + piA, piB) == e(piH, Vkz) * e(piC, g2), the QAP divisibility
    let lhs = P::pairing(&vkx.add(&proof.pi_a), &proof.pi_b);
    let rhs = P::pairing(&proof.pi_h, &setup.vk.vkz).add(&P::pairing(&proof.pi_c, &g2));
    if lhs != rhs {
        return false;
    }

    // e(vkx + piA + piC, g2 * KbKg) * e(g1 * KbKg, piB) == e(piK, g2 * Kg),
    // the linearity of the K commitment
    let sum = vkx.add(&proof.pi_a).add(&proof.pi_c);
    let lhs = P::product_of_pairings(
        &[sum, setup.vk.g1_kbg],
        &[setup.vk.g2_kbg, proof.pi_b],
    );
    let rhs = P::pairing(&proof.pi_kp, &setup.vk.g2_kg);
    lhs == rhs
}
