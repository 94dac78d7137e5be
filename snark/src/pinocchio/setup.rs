use crate::circuit::CircuitMeta;
use crate::errors::{Result, SnarkError};
use crate::field_polynomial::FpPolynomial;
use pinocchio_algebra::prelude::*;
use pinocchio_algebra::traits::Pairing;
use zeroize::Zeroize;

/// The secret scalars sampled by the trusted setup. Knowledge of any of
/// them breaks soundness, so the record is overwritten before the setup
/// returns and must never be copied out.
pub struct ToxicWaste<F: Scalar> {
    pub(crate) t: F,
    pub(crate) ka: F,
    pub(crate) kb: F,
    pub(crate) kc: F,
    pub(crate) kbeta: F,
    pub(crate) kgamma: F,
    // The rho scalars are sampled for interface compatibility with a
    // rho-blinded variant of the protocol; this variant does not multiply
    // them into the reference string.
    pub(crate) rho_a: F,
    pub(crate) rho_b: F,
    pub(crate) rho_c: F,
}

impl<F: Scalar> ToxicWaste<F> {
    fn sample<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        let rho_a = F::random(prng);
        let rho_b = F::random(prng);
        let rho_c = rho_a.mul(&rho_b);
        Self {
            t: F::random(prng),
            ka: F::random(prng),
            kb: F::random(prng),
            kc: F::random(prng),
            kbeta: F::random(prng),
            kgamma: F::random(prng),
            rho_a,
            rho_b,
            rho_c,
        }
    }
}

impl<F: Scalar> Zeroize for ToxicWaste<F> {
    fn zeroize(&mut self) {
        // the scalar type wraps a foreign field element, so overwrite
        // field by field
        self.t = F::zero();
        self.ka = F::zero();
        self.kb = F::zero();
        self.kc = F::zero();
        self.kbeta = F::zero();
        self.kgamma = F::zero();
        self.rho_a = F::zero();
        self.rho_b = F::zero();
        self.rho_c = F::zero();
    }
}

impl<F: Scalar> Drop for ToxicWaste<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Proving key: the per-wire reference-string elements
/// `(pkA, pkB, pkC)` and their knowledge-commitment shifts. A proving key
/// is generic in the two source-group element types.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvingKey<G1, G2> {
    /// `g1 * A_i(t)`
    pub a: Vec<G1>,
    /// `g2 * B_i(t)`
    pub b: Vec<G2>,
    /// `g1 * C_i(t)`
    pub c: Vec<G1>,
    /// `g1 * A_i(t) * k_a`
    pub ap: Vec<G1>,
    /// `g1 * B_i(t) * k_b`
    pub bp: Vec<G1>,
    /// `g1 * C_i(t) * k_c`
    pub cp: Vec<G1>,
    /// `g1 * (A_i(t) + B_i(t) + C_i(t)) * k_beta`
    pub kp: Vec<G1>,
}

/// Define the proving key by the given pairing engine.
pub type PinocchioPK<P> = ProvingKey<<P as Pairing>::G1, <P as Pairing>::G2>;

/// Verifier key: the verification scalars encoded as curve points, plus
/// the public slice of the `A` family.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifierKey<G1, G2> {
    /// `g2 * k_a`
    pub vka: G2,
    /// `g1 * k_b`
    pub vkb: G1,
    /// `g2 * k_c`
    pub vkc: G2,
    /// `g1 * A_i(t)` for the constant wire and the public wires.
    pub a: Vec<G1>,
    /// `g1 * k_beta * k_gamma`
    pub g1_kbg: G1,
    /// `g2 * k_beta * k_gamma`
    pub g2_kbg: G2,
    /// `g2 * k_gamma`
    pub g2_kg: G2,
    /// `g2 * Z(t)`
    pub vkz: G2,
}

/// Define the verifier key by the given pairing engine.
pub type PinocchioVK<P> = VerifierKey<<P as Pairing>::G1, <P as Pairing>::G2>;

/// The public output of the trusted setup: the encrypted powers of `t` in
/// both groups, the proving key, and the verifier key. The toxic waste is
/// zeroized before this value is released.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Setup<G1, G2> {
    /// `g1 * t^i` for `i` below the witness length.
    pub g1t: Vec<G1>,
    /// `g2 * t^i` for `i` below the witness length.
    pub g2t: Vec<G2>,
    /// The proving key.
    pub pk: ProvingKey<G1, G2>,
    /// The verifier key.
    pub vk: VerifierKey<G1, G2>,
}

/// Define the setup by the given pairing engine.
pub type PinocchioSetup<P> = Setup<<P as Pairing>::G1, <P as Pairing>::G2>;

/// Generate the trusted setup from the QAP of a compiled circuit. The
/// `K_i` consistency self-check guards against scalar or curve arithmetic
/// bugs; its failure is never caused by a malformed circuit.
pub fn generate_trusted_setup<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    witness_len: usize,
    meta: &CircuitMeta,
    a_polys: &[FpPolynomial<P::ScalarField>],
    b_polys: &[FpPolynomial<P::ScalarField>],
    c_polys: &[FpPolynomial<P::ScalarField>],
    z: &FpPolynomial<P::ScalarField>,
) -> Result<PinocchioSetup<P>> {
    if a_polys.len() < meta.n_vars || b_polys.len() < meta.n_vars || c_polys.len() < meta.n_vars
    {
        return Err(SnarkError::Algebra(AlgebraError::ParameterError));
    }

    let toxic = ToxicWaste::<P::ScalarField>::sample(prng);

    let g1 = P::G1::get_base();
    let g2 = P::G2::get_base();

    // encrypt the powers of t with both generators:
    // g1t: g1, g1*t, g1*t^2, ...  g2t: g2, g2*t, g2*t^2, ...
    let mut g1t = Vec::with_capacity(witness_len);
    let mut g2t = Vec::with_capacity(witness_len);
    for i in 0..witness_len {
        let t_pow = toxic.t.pow(&[i as u64]);
        g1t.push(g1.mul(&t_pow));
        g2t.push(g2.mul(&t_pow));
    }

    let kbg = toxic.kbeta.mul(&toxic.kgamma);
    let mut vk = VerifierKey {
        vka: g2.mul(&toxic.ka),
        vkb: g1.mul(&toxic.kb),
        vkc: g2.mul(&toxic.kc),
        a: Vec::with_capacity(meta.n_public + 1),
        g1_kbg: g1.mul(&kbg),
        g2_kbg: g2.mul(&kbg),
        g2_kg: g2.mul(&toxic.kgamma),
        vkz: g2.mul(&z.eval(&toxic.t)),
    };

    let mut pk = ProvingKey {
        a: Vec::with_capacity(meta.n_vars),
        b: Vec::with_capacity(meta.n_vars),
        c: Vec::with_capacity(meta.n_vars),
        ap: Vec::with_capacity(meta.n_vars),
        bp: Vec::with_capacity(meta.n_vars),
        cp: Vec::with_capacity(meta.n_vars),
        kp: Vec::with_capacity(meta.n_vars),
    };

    for i in 0..meta.n_vars {
        let a_t = a_polys[i].eval(&toxic.t);
        let b_t = b_polys[i].eval(&toxic.t);
        let c_t = c_polys[i].eval(&toxic.t);

        let a_point = g1.mul(&a_t);
        let b_g1 = g1.mul(&b_t);
        let b_g2 = g2.mul(&b_t);
        let c_point = g1.mul(&c_t);

        if i <= meta.n_public {
            vk.a.push(a_point);
        }

        let k_t = a_t.add(&b_t).add(&c_t);
        let k_point = g1.mul(&k_t);
        // comparison is affine-invariant
        if k_point != a_point.add(&b_g1).add(&c_point) {
            return Err(SnarkError::SetupInternalError);
        }

        pk.ap.push(a_point.mul(&toxic.ka));
        pk.bp.push(b_g1.mul(&toxic.kb));
        pk.cp.push(c_point.mul(&toxic.kc));
        pk.kp.push(k_point.mul(&toxic.kbeta));

        pk.a.push(a_point);
        pk.b.push(b_g2);
        pk.c.push(c_point);
    }

    let setup = Setup { g1t, g2t, pk, vk };
    // destroy the secrets before releasing any setup output
    drop(toxic);
    Ok(setup)
}
