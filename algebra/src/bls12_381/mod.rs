/// The number of bytes for a scalar value over BLS12-381.
pub const BLS12_381_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

#[cfg(test)]
mod bls12_381_groups_test {
    use crate::bls12_381::{BLSPairingEngine, BLSScalar, BLSGt, BLSG1, BLSG2};
    use crate::prelude::*;
    use crate::traits::group_tests::{
        run_multiexp_test, test_scalar_operations, test_scalar_serialization,
    };
    use crate::traits::Pairing;

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BLSScalar>();
    }

    #[test]
    fn scalar_bytes_round_trip() {
        test_scalar_serialization::<BLSScalar>();
    }

    #[test]
    fn test_multiexp() {
        run_multiexp_test::<BLSG1>();
        run_multiexp_test::<BLSG2>();
        run_multiexp_test::<BLSGt>();
    }

    #[test]
    fn group_compressed_bytes_round_trip() {
        let mut prng = test_rng();
        let p = BLSG1::random(&mut prng);
        let q = BLSG1::from_compressed_bytes(&p.to_compressed_bytes()).unwrap();
        assert_eq!(p, q);

        let p = BLSG2::random(&mut prng);
        let q = BLSG2::from_compressed_bytes(&p.to_compressed_bytes()).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn test_pairing_bilinearity() {
        let mut prng = test_rng();
        let a = BLSScalar::random(&mut prng);
        let b = BLSScalar::random(&mut prng);

        let pa = BLSG1::get_base().mul(&a);
        let qb = BLSG2::get_base().mul(&b);

        // e(aP, bQ) == e(P, Q)^{ab}
        let lhs = BLSPairingEngine::pairing(&pa, &qb);
        let rhs = BLSPairingEngine::pairing(&BLSG1::get_base(), &BLSG2::get_base()).mul(&a.mul(&b));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_product_of_pairings() {
        let mut prng = test_rng();
        let p1 = BLSG1::random(&mut prng);
        let p2 = BLSG1::random(&mut prng);
        let q1 = BLSG2::random(&mut prng);
        let q2 = BLSG2::random(&mut prng);

        let product = BLSPairingEngine::product_of_pairings(&[p1, p2], &[q1, q2]);
        let expected =
            BLSPairingEngine::pairing(&p1, &q1).add(&BLSPairingEngine::pairing(&p2, &q2));
        assert_eq!(product, expected);
    }
}
