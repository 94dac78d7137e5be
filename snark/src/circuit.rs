use crate::errors::{Result, SnarkError};
use crate::matrix::Matrix;
use pinocchio_algebra::prelude::*;

/// Index of a wire in the circuit's signal list.
pub type SignalId = usize;

/// An operand of a flat-code gate: either a field constant parsed from a
/// literal, or a reference to a wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term<F> {
    /// A literal value.
    Const(F),
    /// A wire reference.
    Signal(SignalId),
}

/// The arithmetic operation of a gate constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOp {
    /// `out = v1 + v2`
    Add,
    /// `out = v1 - v2`
    Sub,
    /// `out = v1 * v2`
    Mul,
    /// `out = v1 / v2`; the witness assigns `v1 * inv(v2)`
    Div,
}

/// A three-address constraint of the flattened program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint<F> {
    /// Declares the circuit inputs; contributes no matrix row.
    In {
        /// The wires holding the declared inputs.
        signals: Vec<SignalId>,
    },
    /// A gate `v1 op v2 = out`.
    Gate {
        /// The gate operation.
        op: GateOp,
        /// The left operand.
        v1: Term<F>,
        /// The right operand.
        v2: Term<F>,
        /// The wire assigned by the gate.
        out: SignalId,
    },
}

/// A compiled flat-code circuit. Wire 0 is the constant one, wires
/// `1..=n_public` are the public signals, the input wires follow in
/// declaration order, and the remaining wires are internal signals in
/// constraint order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit<F> {
    /// Total number of wires, including the constant-one wire.
    pub n_vars: usize,
    /// Number of public signals.
    pub n_public: usize,
    /// Wire names in index order, a build-time artifact; they never enter
    /// the reference string.
    pub signals: Vec<String>,
    /// The wires holding the declared inputs, in declaration order.
    pub inputs: Vec<SignalId>,
    /// The flattened constraints in program order.
    pub constraints: Vec<Constraint<F>>,
}

/// The slice of circuit metadata consumed by the protocol layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitMeta {
    /// Total number of wires.
    pub n_vars: usize,
    /// Number of public signals.
    pub n_public: usize,
}

impl<F> From<&Circuit<F>> for CircuitMeta {
    fn from(circuit: &Circuit<F>) -> Self {
        Self {
            n_vars: circuit.n_vars,
            n_public: circuit.n_public,
        }
    }
}

impl<F: Scalar> Circuit<F> {
    /// Build a circuit from its signal list, public-signal count, input
    /// wires, and constraints.
    pub fn new(
        signals: Vec<String>,
        n_public: usize,
        inputs: Vec<SignalId>,
        constraints: Vec<Constraint<F>>,
    ) -> Self {
        Self {
            n_vars: signals.len(),
            n_public,
            signals,
            inputs,
            constraints,
        }
    }

    /// Look up a wire index by its name.
    pub fn signal_index(&self, name: &str) -> Option<SignalId> {
        self.signals.iter().position(|s| s == name)
    }

    /// Return the number of gate constraints, i.e. the number of R1CS rows.
    pub fn n_gates(&self) -> usize {
        self.constraints
            .iter()
            .filter(|c| matches!(c, Constraint::Gate { .. }))
            .count()
    }

    /// Walk the constraints and produce the three R1CS matrices, each with
    /// one row per gate constraint and one column per wire.
    ///
    /// A literal operand contributes to column 0, the constant-one column.
    /// The subtraction gate negates both symbolic operands while a literal
    /// still contributes positively; changing this convention would change
    /// witness semantics.
    pub fn build_r1cs(&self) -> Result<(Matrix<F>, Matrix<F>, Matrix<F>)> {
        let m = self.n_gates();
        let n = self.n_vars;
        let mut a = Matrix::zeroed(m, n);
        let mut b = Matrix::zeroed(m, n);
        let mut c = Matrix::zeroed(m, n);

        let mut assigned = vec![false; n];
        assigned[0] = true; // the constant-one wire

        let mut row = 0;
        for constraint in self.constraints.iter() {
            match constraint {
                Constraint::In { signals } => {
                    for signal in signals.iter() {
                        if assigned[*signal] {
                            return Err(SnarkError::DoubleAssign(*signal));
                        }
                        assigned[*signal] = true;
                    }
                }
                Constraint::Gate { op, v1, v2, out } => {
                    if assigned[*out] {
                        return Err(SnarkError::DoubleAssign(*out));
                    }
                    match op {
                        GateOp::Add => {
                            insert_term(&mut a, row, v1, &assigned, false)?;
                            insert_term(&mut a, row, v2, &assigned, false)?;
                            b.set_entry(row, 0, F::one());
                            c.set_entry(row, *out, F::one());
                        }
                        GateOp::Sub => {
                            insert_term(&mut a, row, v1, &assigned, true)?;
                            insert_term(&mut a, row, v2, &assigned, true)?;
                            b.set_entry(row, 0, F::one());
                            c.set_entry(row, *out, F::one());
                        }
                        GateOp::Mul => {
                            insert_term(&mut a, row, v1, &assigned, false)?;
                            insert_term(&mut b, row, v2, &assigned, false)?;
                            c.set_entry(row, *out, F::one());
                        }
                        GateOp::Div => {
                            insert_term(&mut c, row, v1, &assigned, false)?;
                            insert_term(&mut b, row, v2, &assigned, false)?;
                            c.set_entry(row, *out, F::one());
                        }
                    }
                    assigned[*out] = true;
                    row += 1;
                }
            }
        }
        Ok((a, b, c))
    }

    /// Calculate the witness of the circuit for the given inputs: the
    /// constant one, the inputs at their wires, and then every gate output
    /// evaluated over the field in constraint order.
    pub fn calculate_witness(&self, inputs: &[F]) -> Result<Vec<F>> {
        if inputs.len() != self.inputs.len() {
            return Err(SnarkError::InputsLengthMismatch);
        }
        let mut witness = vec![F::zero(); self.n_vars];
        witness[0] = F::one();
        for (wire, input) in self.inputs.iter().zip(inputs.iter()) {
            witness[*wire] = *input;
        }
        for constraint in self.constraints.iter() {
            if let Constraint::Gate { op, v1, v2, out } = constraint {
                let x1 = term_value(&witness, v1);
                let x2 = term_value(&witness, v2);
                witness[*out] = match op {
                    GateOp::Add => x1.add(&x2),
                    GateOp::Sub => x1.sub(&x2),
                    GateOp::Mul => x1.mul(&x2),
                    GateOp::Div => {
                        if x2.is_zero() {
                            return Err(SnarkError::DivisionByZero);
                        }
                        x1.div(&x2)?
                    }
                };
            }
        }
        Ok(witness)
    }
}

fn term_value<F: Scalar>(witness: &[F], term: &Term<F>) -> F {
    match term {
        Term::Const(value) => *value,
        Term::Signal(signal) => witness[*signal],
    }
}

fn insert_term<F: Scalar>(
    matrix: &mut Matrix<F>,
    row: usize,
    term: &Term<F>,
    assigned: &[bool],
    negate: bool,
) -> Result<()> {
    match term {
        // literals land in the constant-one column, always positively
        Term::Const(value) => matrix.add_to_entry(row, 0, value),
        Term::Signal(signal) => {
            if !assigned[*signal] {
                return Err(SnarkError::UseBeforeSet(*signal));
            }
            let delta = if negate { F::one().neg() } else { F::one() };
            matrix.add_to_entry(row, *signal, &delta);
        }
    }
    Ok(())
}

/// Check the R1CS invariant `(A w) ⊙ (B w) = C w` for the given witness.
pub fn r1cs_satisfied<F: Scalar>(
    a: &Matrix<F>,
    b: &Matrix<F>,
    c: &Matrix<F>,
    witness: &[F],
) -> bool {
    let aw = a.mul_vec(witness);
    let bw = b.mul_vec(witness);
    let cw = c.mul_vec(witness);
    aw.iter()
        .zip(bw.iter())
        .zip(cw.iter())
        .all(|((x, y), z)| x.mul(y) == *z)
}
