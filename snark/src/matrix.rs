use pinocchio_algebra::prelude::*;

/// Dense row-major matrix over a scalar field, used for the `A`, `B`, `C`
/// constraint matrices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix<F> {
    n_rows: usize,
    n_cols: usize,
    entries: Vec<F>,
}

impl<F: Scalar> Matrix<F> {
    /// Return the all-zero matrix of the given shape.
    pub fn zeroed(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: vec![F::zero(); n_rows * n_cols],
        }
    }

    /// Build a matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        let mut entries = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            assert_eq!(row.len(), n_cols);
            entries.extend(row);
        }
        Self {
            n_rows,
            n_cols,
            entries,
        }
    }

    /// Return the number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Return the number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Return the row at the given index.
    pub fn row(&self, i: usize) -> &[F] {
        &self.entries[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Return the entry at the given row and column.
    pub fn entry(&self, i: usize, j: usize) -> &F {
        &self.entries[i * self.n_cols + j]
    }

    /// Overwrite the entry at the given row and column.
    pub fn set_entry(&mut self, i: usize, j: usize, value: F) {
        self.entries[i * self.n_cols + j] = value;
    }

    /// Add a value into the entry at the given row and column.
    pub fn add_to_entry(&mut self, i: usize, j: usize, value: &F) {
        self.entries[i * self.n_cols + j].add_assign(value);
    }

    /// Return the transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeroed(self.n_cols, self.n_rows);
        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                transposed.set_entry(j, i, *self.entry(i, j));
            }
        }
        transposed
    }

    /// Multiply the matrix with a column vector.
    pub fn mul_vec(&self, vector: &[F]) -> Vec<F> {
        assert_eq!(vector.len(), self.n_cols);
        (0..self.n_rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(vector.iter())
                    .map(|(entry, v)| entry.mul(v))
                    .sum()
            })
            .collect()
    }
}
