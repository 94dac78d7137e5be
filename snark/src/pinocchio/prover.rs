use crate::circuit::CircuitMeta;
use crate::errors::{Result, SnarkError};
use crate::field_polynomial::FpPolynomial;
use crate::pinocchio::setup::PinocchioSetup;
use pinocchio_algebra::prelude::*;
use pinocchio_algebra::traits::Pairing;

/// A Pinocchio proof: seven group elements plus the public slice of the
/// witness. `pi_b` lives in the second source group, the rest in the
/// first. A proof is generic in the group element and scalar types.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proof<G1, G2, F> {
    /// `sum_{i > n_public} w_i * pkA_i`
    pub pi_a: G1,
    /// `sum_{i > n_public} w_i * pkA'_i`
    pub pi_ap: G1,
    /// `sum_i w_i * pkB_i`
    pub pi_b: G2,
    /// `sum_i w_i * pkB'_i`
    pub pi_bp: G1,
    /// `sum_i w_i * pkC_i`
    pub pi_c: G1,
    /// `sum_i w_i * pkC'_i`
    pub pi_cp: G1,
    /// `sum_i h_i * (g1 * t^i)`
    pub pi_h: G1,
    /// `sum_i w_i * pkK_i`
    pub pi_kp: G1,
    /// The public slice of the witness, `w[1..=n_public]`.
    pub public_signals: Vec<F>,
}

/// Define the proof by the given pairing engine.
pub type PinocchioPf<P> =
    Proof<<P as Pairing>::G1, <P as Pairing>::G2, <P as Pairing>::ScalarField>;

/// Generate a proof from the setup, the quotient polynomial `H(x)`, and a
/// satisfying witness. Only the private wires contribute to `pi_a`; the
/// verifier reconstructs the public part from the verifier key.
pub fn generate_proof<P: Pairing>(
    meta: &CircuitMeta,
    setup: &PinocchioSetup<P>,
    h: &FpPolynomial<P::ScalarField>,
    witness: &[P::ScalarField],
) -> Result<PinocchioPf<P>> {
    if witness.len() != meta.n_vars || h.coefs.len() > setup.g1t.len() {
        return Err(SnarkError::Algebra(AlgebraError::ParameterError));
    }

    let private_scalars: Vec<&P::ScalarField> = witness[meta.n_public + 1..].iter().collect();
    let all_scalars: Vec<&P::ScalarField> = witness.iter().collect();

    let pi_a = P::G1::multi_exp(
        &private_scalars,
        &setup.pk.a[meta.n_public + 1..].iter().collect_vec(),
    );
    let pi_ap = P::G1::multi_exp(
        &private_scalars,
        &setup.pk.ap[meta.n_public + 1..].iter().collect_vec(),
    );

    let pi_b = P::G2::multi_exp(&all_scalars, &setup.pk.b.iter().collect_vec());
    let pi_bp = P::G1::multi_exp(&all_scalars, &setup.pk.bp.iter().collect_vec());
    let pi_c = P::G1::multi_exp(&all_scalars, &setup.pk.c.iter().collect_vec());
    let pi_cp = P::G1::multi_exp(&all_scalars, &setup.pk.cp.iter().collect_vec());
    let pi_kp = P::G1::multi_exp(&all_scalars, &setup.pk.kp.iter().collect_vec());

    let h_scalars: Vec<&P::ScalarField> = h.coefs.iter().collect();
    let pi_h = P::G1::multi_exp(&h_scalars, &setup.g1t[..h.coefs.len()].iter().collect_vec());

    Ok(Proof {
        pi_a,
        pi_ap,
        pi_b,
        pi_bp,
        pi_c,
        pi_cp,
        pi_h,
        pi_kp,
        public_signals: witness[1..=meta.n_public].to_vec(),
    })
}
