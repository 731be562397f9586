//! Dense simplex tableau for `n = 2` structural variables plus one slack per row.
//!
//! Layout (`m` constraint rows, objective row last):
//!
//! ```text
//!   col:  0   1   2 .. 2+m-1   2+m
//!         x   y   slacks       rhs
//! ```

use nalgebra::DMatrix;

use crate::geom2::{Constraint, Objective, Point};

/// Number of structural variables (x, y).
pub const N_STRUCT: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    pub cells: DMatrix<f64>,
}

impl Tableau {
    /// All-slack starting tableau. The objective row holds `sign·[objA, objB, 0…0 | 0]`
    /// with `sign = −1` to maximize and `+1` to minimize.
    pub fn initial(constraints: &[Constraint], objective: Objective, maximize: bool) -> Self {
        let m = constraints.len();
        let cols = N_STRUCT + m + 1;
        let mut cells = DMatrix::zeros(m + 1, cols);
        for (i, c) in constraints.iter().enumerate() {
            cells[(i, 0)] = c.a;
            cells[(i, 1)] = c.b;
            cells[(i, N_STRUCT + i)] = 1.0;
            cells[(i, cols - 1)] = c.c;
        }
        let sign = if maximize { -1.0 } else { 1.0 };
        cells[(m, 0)] = sign * objective.a;
        cells[(m, 1)] = sign * objective.b;
        Self { cells }
    }

    /// Constraint rows `m`.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.cells.nrows() - 1
    }
    /// Variable columns `n + m` (rhs excluded).
    #[inline]
    pub fn n_vars(&self) -> usize {
        self.cells.ncols() - 1
    }
    #[inline]
    pub fn rhs(&self, row: usize) -> f64 {
        self.cells[(row, self.n_vars())]
    }
    #[inline]
    pub fn objective_entry(&self, col: usize) -> f64 {
        self.cells[(self.n_rows(), col)]
    }

    /// Column with the most negative reduced cost below `-eps`; leftmost wins ties.
    pub fn entering(&self, eps: f64) -> Option<usize> {
        let mut best = -eps;
        let mut enter = None;
        for j in 0..self.n_vars() {
            let v = self.objective_entry(j);
            if v < best {
                best = v;
                enter = Some(j);
            }
        }
        enter
    }

    /// Minimum-ratio row among entries `> eps` in column `enter`; topmost wins ties.
    /// None means the column can grow without bound.
    pub fn leaving(&self, enter: usize, eps: f64) -> Option<usize> {
        let mut min_ratio = f64::INFINITY;
        let mut leave = None;
        for i in 0..self.n_rows() {
            let aij = self.cells[(i, enter)];
            if aij > eps {
                let ratio = self.rhs(i) / aij;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    leave = Some(i);
                }
            }
        }
        leave
    }

    /// Normalize row `leave` by the pivot element and clear column `enter`
    /// from every other row, objective row included.
    ///
    /// Returns false (tableau untouched) if the pivot is smaller than `eps`.
    pub fn pivot(&mut self, leave: usize, enter: usize, eps: f64) -> bool {
        let pivot = self.cells[(leave, enter)];
        if pivot.abs() < eps {
            return false;
        }
        let cols = self.cells.ncols();
        for j in 0..cols {
            self.cells[(leave, j)] /= pivot;
        }
        for i in 0..self.cells.nrows() {
            if i == leave {
                continue;
            }
            let factor = self.cells[(i, enter)];
            if factor == 0.0 {
                continue;
            }
            for j in 0..cols {
                self.cells[(i, j)] -= factor * self.cells[(leave, j)];
            }
        }
        true
    }

    /// Current (x, y): rhs of the rows whose basic variable is structural, 0 otherwise.
    pub fn solution(&self, basis: &[usize]) -> Point {
        let mut sol = Point::default();
        for (i, &b) in basis.iter().enumerate() {
            match b {
                0 => sol.x = self.rhs(i),
                1 => sol.y = self.rhs(i),
                _ => {}
            }
        }
        sol
    }

    /// Row-major copy, objective row last.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .row_iter()
            .map(|r| r.iter().copied().collect())
            .collect()
    }
}
