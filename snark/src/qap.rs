use crate::errors::{Result, SnarkError};
use crate::field_polynomial::FpPolynomial;
use crate::matrix::Matrix;
use pinocchio_algebra::prelude::*;

/// The polynomial families of a quadratic arithmetic program, one
/// polynomial per wire for each of the three matrices, plus the target
/// polynomial with roots at the constraint indices.
pub type Qap<F> = (
    Vec<FpPolynomial<F>>,
    Vec<FpPolynomial<F>>,
    Vec<FpPolynomial<F>>,
    FpPolynomial<F>,
);

fn interpolate_columns<F: Scalar>(matrix: &Matrix<F>) -> Result<Vec<FpPolynomial<F>>> {
    let transposed = matrix.transpose();
    (0..transposed.n_rows())
        .map(|i| FpPolynomial::lagrange_interpolate(transposed.row(i)))
        .collect()
}

/// Convert the three R1CS matrices into a QAP: each matrix column becomes
/// the polynomial of degree below `m` interpolating its values over the
/// integer points `1..=m`, and the target polynomial is
/// `Z(x) = (x - 1)(x - 2)...(x - m)`.
pub fn r1cs_to_qap<F: Scalar>(a: &Matrix<F>, b: &Matrix<F>, c: &Matrix<F>) -> Result<Qap<F>> {
    let a_polys = interpolate_columns(a)?;
    let b_polys = interpolate_columns(b)?;
    let c_polys = interpolate_columns(c)?;

    let roots: Vec<F> = (1..=a.n_rows()).map(|k| F::from(k as u64)).collect();
    let z = FpPolynomial::from_zeroes(&roots);

    Ok((a_polys, b_polys, c_polys, z))
}

/// Combine the QAP polynomial families with the witness into the three
/// witness-weighted sums `A(x)`, `B(x)`, `C(x)` and the program polynomial
/// `P(x) = A(x) * B(x) - C(x)`.
pub fn combine_polynomials<F: Scalar>(
    witness: &[F],
    a_polys: &[FpPolynomial<F>],
    b_polys: &[FpPolynomial<F>],
    c_polys: &[FpPolynomial<F>],
) -> (
    FpPolynomial<F>,
    FpPolynomial<F>,
    FpPolynomial<F>,
    FpPolynomial<F>,
) {
    let mut ax = FpPolynomial::zero();
    for (w, poly) in witness.iter().zip(a_polys.iter()) {
        ax.add_assign(&poly.mul_scalar(w));
    }
    let mut bx = FpPolynomial::zero();
    for (w, poly) in witness.iter().zip(b_polys.iter()) {
        bx.add_assign(&poly.mul_scalar(w));
    }
    let mut cx = FpPolynomial::zero();
    for (w, poly) in witness.iter().zip(c_polys.iter()) {
        cx.add_assign(&poly.mul_scalar(w));
    }

    let px = ax.mul(&bx).sub(&cx);
    (ax, bx, cx, px)
}

/// Divide the program polynomial by the target polynomial. The QAP property
/// guarantees a zero remainder for a satisfying witness; a non-zero
/// remainder means the witness does not satisfy the constraint system.
pub fn divisor_polynomial<F: Scalar>(
    px: &FpPolynomial<F>,
    z: &FpPolynomial<F>,
) -> Result<FpPolynomial<F>> {
    let (quotient, remainder) = px.div_rem(z)?;
    if !remainder.is_zero() {
        return Err(SnarkError::UnsatisfiedWitness);
    }
    Ok(quotient)
}

#[cfg(test)]
mod tests {
    use crate::circuit::test_utils::cubic_circuit;
    use crate::field_polynomial::FpPolynomial;
    use crate::qap::{combine_polynomials, divisor_polynomial, r1cs_to_qap};
    use pinocchio_algebra::{bls12_381::BLSScalar, prelude::*};

    #[test]
    fn qap_interpolates_r1cs_columns() {
        let circuit = cubic_circuit();
        let (a, b, c) = circuit.build_r1cs().unwrap();
        let (a_polys, b_polys, c_polys, z) = r1cs_to_qap(&a, &b, &c).unwrap();

        let m = a.n_rows();
        for (matrix, polys) in [(&a, &a_polys), (&b, &b_polys), (&c, &c_polys)] {
            assert_eq!(polys.len(), matrix.n_cols());
            for (i, poly) in polys.iter().enumerate() {
                assert!(poly.is_zero() || poly.degree() < m);
                for k in 0..m {
                    let point = BLSScalar::from(k as u64 + 1);
                    assert_eq!(poly.eval(&point), *matrix.entry(k, i));
                }
            }
        }

        assert_eq!(z.degree(), m);
        for k in 1..=m {
            assert_eq!(z.eval(&BLSScalar::from(k as u64)), BLSScalar::zero());
        }
    }

    #[test]
    fn satisfying_witness_divides_evenly() {
        let circuit = cubic_circuit();
        let witness = circuit.calculate_witness(&[BLSScalar::from(3u64)]).unwrap();
        let (a, b, c) = circuit.build_r1cs().unwrap();
        let (a_polys, b_polys, c_polys, z) = r1cs_to_qap(&a, &b, &c).unwrap();

        let (ax, bx, cx, px) = combine_polynomials(&witness, &a_polys, &b_polys, &c_polys);
        let hx = divisor_polynomial(&px, &z).unwrap();

        // p(x) = a(x) * b(x) - c(x) == h(x) * z(x)
        let abc = ax.mul(&bx).sub(&cx);
        assert_eq!(abc, px);
        assert_eq!(px, hx.mul(&z));

        let (div, rem) = px.div_rem(&z).unwrap();
        assert_eq!(hx, div);
        assert!(rem.is_zero());
    }

    #[test]
    fn corrupted_witness_is_rejected() {
        let circuit = cubic_circuit();
        let mut witness = circuit.calculate_witness(&[BLSScalar::from(3u64)]).unwrap();
        witness[4] = witness[4].add(&BLSScalar::one());

        let (a, b, c) = circuit.build_r1cs().unwrap();
        let (a_polys, b_polys, c_polys, z) = r1cs_to_qap(&a, &b, &c).unwrap();
        let (_, _, _, px) = combine_polynomials(&witness, &a_polys, &b_polys, &c_polys);
        assert!(divisor_polynomial(&px, &z).is_err());
    }

    #[test]
    fn zero_program_polynomial_divides() {
        // a circuit whose program polynomial vanishes identically still
        // yields a (zero) quotient
        let zero = FpPolynomial::<BLSScalar>::zero();
        let z = FpPolynomial::from_zeroes(&[BLSScalar::one()]);
        let h = divisor_polynomial(&zero, &z).unwrap();
        assert!(h.is_zero());
    }
}
