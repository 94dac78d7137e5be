use crate::errors::{Result, SnarkError};
use pinocchio_algebra::prelude::*;

/// Dense polynomial over a scalar field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, lowest order first.
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial.
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial.
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient
    /// first. High-order zero coefficients are trimmed.
    /// # Example
    /// ```
    /// use pinocchio_snark::field_polynomial::FpPolynomial;
    /// use pinocchio_algebra::bls12_381::BLSScalar;
    /// use pinocchio_algebra::{Zero, One};
    /// let zero = BLSScalar::zero();
    /// let one = BLSScalar::one();
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), 2);
    /// let poly2 = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero]);
    /// assert_eq!(poly2.degree(), 2);
    /// assert_eq!(poly, poly2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build a monic polynomial from its zeroes/roots.
    /// # Example
    /// ```
    /// use pinocchio_snark::field_polynomial::FpPolynomial;
    /// use pinocchio_algebra::bls12_381::BLSScalar;
    /// use pinocchio_algebra::Zero;
    /// let roots: Vec<BLSScalar> = (1u64..=4).map(BLSScalar::from).collect();
    /// let poly = FpPolynomial::from_zeroes(&roots);
    /// assert_eq!(poly.degree(), 4);
    /// for root in roots.iter() {
    ///     assert_eq!(poly.eval(root), BLSScalar::zero());
    /// }
    /// ```
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            let mut p = r.clone();
            r.coefs.insert(0, F::zero()); // multiply by X
            p.mul_scalar_assign(root); // x_0 * r
            r.sub_assign(&p); // r = r * (X - x_0)
        }
        r.trim_coefs();
        r
    }

    /// Return a polynomial of `degree` + 1 uniformly random coefficients.
    /// Note that each coefficient is zero with probability 1/q, so the degree
    /// can end up below `degree`.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let mut coefs = Vec::with_capacity(degree + 1);
        for _ in 0..degree + 1 {
            coefs.push(F::random(prng));
        }
        Self::from_coefs(coefs)
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().unwrap().is_zero() {
            // safe unwrap
            self.coefs.pop().unwrap(); // safe unwrap
        }
    }

    /// Return degree of the polynomial; the zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        if self.coefs.is_empty() {
            0
        } else {
            self.coefs.len() - 1
        }
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate a polynomial on a point, accumulating the running powers of
    /// the point. Equivalent to Horner's rule.
    pub fn eval(&self, point: &F) -> F {
        let mut result = F::zero();
        let mut variable = F::one();
        for coef in self.coefs.iter() {
            let mut a = variable;
            a.mul_assign(coef);
            result.add_assign(&a);
            variable.mul_assign(point);
        }
        result
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(*other_coef);
            }
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    /// # Example
    /// ```
    /// use pinocchio_snark::field_polynomial::FpPolynomial;
    /// use pinocchio_algebra::bls12_381::BLSScalar;
    /// let poly1 = FpPolynomial::from_coefs(vec![1u64, 0, 5].into_iter().map(BLSScalar::from).collect());
    /// let poly2 = FpPolynomial::from_coefs(vec![3u64, 0, 1].into_iter().map(BLSScalar::from).collect());
    /// let expected = FpPolynomial::from_coefs(vec![4u64, 0, 6].into_iter().map(BLSScalar::from).collect());
    /// assert_eq!(poly1.add(&poly2), expected);
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtract another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(other_coef.neg());
            }
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Negate the coefficients.
    pub fn neg_assign(&mut self) {
        let minus_one = F::one().neg();
        self.mul_scalar_assign(&minus_one);
    }

    /// Negate the coefficients into a new polynomial.
    pub fn neg(&self) -> Self {
        let mut new = self.clone();
        new.neg_assign();
        new
    }

    /// Multiply polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Multiply with another polynomial by schoolbook convolution.
    /// # Example
    /// ```
    /// use pinocchio_snark::field_polynomial::FpPolynomial;
    /// use pinocchio_algebra::bls12_381::BLSScalar;
    /// let poly1 = FpPolynomial::from_coefs(vec![1u64, 0, 5].into_iter().map(BLSScalar::from).collect());
    /// let poly2 = FpPolynomial::from_coefs(vec![3u64, 0, 1].into_iter().map(BLSScalar::from).collect());
    /// let expected = FpPolynomial::from_coefs(vec![3u64, 0, 16, 0, 5].into_iter().map(BLSScalar::from).collect());
    /// assert_eq!(poly1.mul(&poly2), expected);
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, self_coef) in self.coefs.iter().enumerate() {
            for (j, other_coef) in other.coefs.iter().enumerate() {
                let mut a = *self_coef;
                a.mul_assign(other_coef);
                coefs[i + j].add_assign(&a);
            }
        }
        Self::from_coefs(coefs)
    }

    /// Divide by another polynomial, producing the quotient and remainder
    /// polynomials such that `self = quotient * divisor + remainder` with
    /// `deg(remainder) < deg(divisor)`. The divisor's leading coefficient
    /// must be non-zero.
    /// # Example
    /// ```
    /// use pinocchio_snark::field_polynomial::FpPolynomial;
    /// use pinocchio_algebra::bls12_381::BLSScalar;
    /// use pinocchio_algebra::{Zero, One};
    /// let one = BLSScalar::one();
    /// let zero = BLSScalar::zero();
    /// let poly = FpPolynomial::from_coefs(vec![one, one, one]);
    /// let divisor = FpPolynomial::from_coefs(vec![one, one]);
    /// let (q, r) = poly.div_rem(&divisor).unwrap();
    /// assert_eq!(q, FpPolynomial::from_coefs(vec![zero, one]));
    /// assert_eq!(r, FpPolynomial::from_coefs(vec![one]));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let divisor_coefs = &divisor.coefs[..];
        match divisor_coefs.last() {
            None => return Err(SnarkError::IllFormedDivisor),
            Some(top) if top.is_zero() => return Err(SnarkError::IllFormedDivisor),
            _ => {}
        }

        let k = self.coefs.len();
        let l = divisor_coefs.len();
        if l > k {
            return Ok((Self::zero(), self.clone()));
        }

        let bl_inv = divisor_coefs.last().unwrap().inv()?; // safe unwrap
        let mut rem = self.coefs.clone();
        let mut quo: Vec<F> = (0..k - l + 1).map(|_| F::zero()).collect();
        for i in (0..(k - l + 1)).rev() {
            let mut qi = bl_inv;
            qi.mul_assign(&rem[i + l - 1]);
            for j in 0..l {
                let mut a = qi;
                a.mul_assign(&divisor_coefs[j]);
                rem[i + j].sub_assign(&a);
            }
            quo[i] = qi;
        }
        for _ in 0..k - l + 1 {
            rem.pop();
        }
        if rem.is_empty() {
            rem.push(F::zero());
        }
        Ok((FpPolynomial::from_coefs(quo), FpPolynomial::from_coefs(rem)))
    }

    /// Build the Lagrange basis polynomial of degree `n_points - 1` whose
    /// value is `height` at the integer point `point_pos` and zero at every
    /// other integer point in `[1, n_points]`.
    /// # Example
    /// ```
    /// use pinocchio_snark::field_polynomial::FpPolynomial;
    /// use pinocchio_algebra::bls12_381::BLSScalar;
    /// use pinocchio_algebra::Zero;
    /// let four = BLSScalar::from(4u64);
    /// let basis = FpPolynomial::lagrange_basis(3, 4, &four).unwrap();
    /// assert_eq!(basis.eval(&BLSScalar::from(3u64)), four);
    /// for j in [1u64, 2, 4] {
    ///     assert_eq!(basis.eval(&BLSScalar::from(j)), BLSScalar::zero());
    /// }
    /// ```
    pub fn lagrange_basis(point_pos: usize, n_points: usize, height: &F) -> Result<Self> {
        let point = F::from(point_pos as u64);
        let mut fac = F::one();
        for j in 1..=n_points {
            if j != point_pos {
                fac.mul_assign(&point.sub(&F::from(j as u64)));
            }
        }
        // fac is a product of non-zero differences, hence invertible
        let lead = height.mul(&fac.inv()?);

        let mut r = Self::from_coefs(vec![lead]);
        for j in 1..=n_points {
            if j != point_pos {
                let factor = Self::from_coefs(vec![F::from(j as u64).neg(), F::one()]);
                r = r.mul(&factor);
            }
        }
        Ok(r)
    }

    /// Lagrange-interpolate the unique polynomial of degree below
    /// `values.len()` that takes the value `values[k - 1]` at the integer
    /// point `k` for every `k` in `[1, values.len()]`.
    pub fn lagrange_interpolate(values: &[F]) -> Result<Self> {
        let mut r = Self::zero();
        for (i, value) in values.iter().enumerate() {
            r.add_assign(&Self::lagrange_basis(i + 1, values.len(), value)?);
        }
        Ok(r)
    }
}
