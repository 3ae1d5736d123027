//! Arithmetic, structural, and scalar operations on [`Matrix`].
//!
//! The fallible contract lives in the `checked_*` methods, which
//! return [`MatrixError`] and leave both operands untouched on
//! failure.  The operator impls are sugar over the checked forms and
//! panic with the error's display text, matching how std operators
//! treat domain errors.  All element arithmetic wraps on overflow.

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    fn validate_same_dim(&self, other: &Self) -> Result<(), MatrixError> {
        if self.dim != other.dim {
            let msg = format!(
                "dimension mismatch: {} versus {}",
                self.dim, other.dim
            );
            Err(MatrixError::DimensionMismatch(msg))
        } else {
            Ok(())
        }
    }

    fn checked_zip<F>(&self, other: &Self, f: F) -> Result<Self, MatrixError>
    where
        F: Fn(i32, i32) -> i32,
    {
        self.validate_same_dim(other)?;
        let elements = self
            .elements
            .iter()
            .zip(other.elements.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            dim: self.dim,
            elements,
        })
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: Fn(i32) -> i32,
    {
        Self {
            dim: self.dim,
            elements: self.elements.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Pairwise sum of two matrices of equal dimension.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if dimensions differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_zip(other, i32::wrapping_add)
    }

    /// Pairwise difference of two matrices of equal dimension.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if dimensions differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_zip(other, i32::wrapping_sub)
    }

    /// Element-wise (Hadamard) product of two matrices of equal
    /// dimension.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if dimensions differ.
    pub fn checked_component_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_zip(other, i32::wrapping_mul)
    }

    /// Element-wise product, panicking on dimension mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// let x = squaremat::Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let y = squaremat::Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    /// assert_eq!(x.component_mul(&y)[(0, 1)], 12);
    /// ```
    pub fn component_mul(&self, other: &Self) -> Self {
        match self.checked_component_mul(other) {
            Ok(result) => result,
            Err(error) => panic!("{}", error),
        }
    }

    // Triple-loop product for operands already known to share a
    // dimension.
    fn product(&self, other: &Self) -> Self {
        let n = self.dim;
        let mut elements = vec![0; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0i32;
                for k in 0..n {
                    sum = sum
                        .wrapping_add(self.elements[i * n + k].wrapping_mul(other.elements[k * n + j]));
                }
                elements[i * n + j] = sum;
            }
        }
        Self { dim: n, elements }
    }

    /// Standard matrix product.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if dimensions differ.
    ///
    /// # Examples
    ///
    /// ```
    /// let a = squaremat::Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = squaremat::Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    /// assert_eq!(a.checked_mul(&b).unwrap()[(0, 0)], 1 * 5 + 2 * 7);
    /// ```
    pub fn checked_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.validate_same_dim(other)?;
        Ok(self.product(other))
    }

    /// Multiply every element by `scalar`.
    ///
    /// The operator forms accept the scalar on either side:
    /// `2 * &m` is defined as `&m * 2`.
    pub fn scalar_mul(&self, scalar: i32) -> Self {
        self.map_elements(|v| v.wrapping_mul(scalar))
    }

    /// Reduce every element modulo `modulus` with truncating
    /// (sign-of-dividend) semantics.
    ///
    /// Truncating remainder is a deliberate choice over
    /// Euclidean/floor modulo: `3 % -2 == 1` and `-3 % 2 == -1`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ModuloByZero`] if `modulus` is zero.
    pub fn checked_rem(&self, modulus: i32) -> Result<Self, MatrixError> {
        if modulus == 0 {
            return Err(MatrixError::ModuloByZero);
        }
        Ok(self.map_elements(|v| v.wrapping_rem(modulus)))
    }

    /// Divide every element by `divisor`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: i32) -> Result<Self, MatrixError> {
        if divisor == 0 {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.map_elements(|v| v.wrapping_div(divisor)))
    }

    /// Raise the matrix to a non-negative integer power by repeated
    /// squaring.
    ///
    /// `pow(0)` is the identity matrix regardless of contents.
    ///
    /// # Examples
    ///
    /// ```
    /// // Fibonacci numbers from powers of [[1, 1], [1, 0]]
    /// let p = squaremat::Matrix::from_rows(vec![vec![1, 1], vec![1, 0]]).unwrap();
    /// let p5 = p.pow(5);
    /// assert_eq!(p5[(0, 0)], 8);
    /// assert_eq!(p5[(0, 1)], 5);
    /// ```
    pub fn pow(&self, mut exponent: u32) -> Self {
        let mut result = self.identity_like();
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.product(&base);
            }
            base = base.product(&base);
            exponent >>= 1;
        }
        result
    }

    /// New matrix with rows and columns exchanged.
    pub fn transpose(&self) -> Self {
        let n = self.dim;
        let mut elements = vec![0; n * n];
        for i in 0..n {
            for j in 0..n {
                elements[j * n + i] = self.elements[i * n + j];
            }
        }
        Self { dim: n, elements }
    }

    /// The determinant, by recursive cofactor expansion along the
    /// first row.
    ///
    /// This is O(n!) and intended for the small dimensions this type
    /// targets; it trades performance for simplicity on purpose.
    ///
    /// # Examples
    ///
    /// ```
    /// let m = squaremat::Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.det(), -2);
    /// ```
    pub fn det(&self) -> i32 {
        det_recursive(&self.elements, self.dim)
    }
}

// The minor of `buf` (k x k, row-major) with row 0 and column `skip`
// deleted, copied into a fresh (k-1) x (k-1) buffer.
fn minor(buf: &[i32], k: usize, skip: usize) -> Vec<i32> {
    let mut rv = Vec::with_capacity((k - 1) * (k - 1));
    for i in 1..k {
        for j in 0..k {
            if j != skip {
                rv.push(buf[i * k + j]);
            }
        }
    }
    rv
}

fn det_recursive(buf: &[i32], k: usize) -> i32 {
    if k == 1 {
        return buf[0];
    }
    if k == 2 {
        return buf[0]
            .wrapping_mul(buf[3])
            .wrapping_sub(buf[1].wrapping_mul(buf[2]));
    }
    let mut det = 0i32;
    for c in 0..k {
        let sub = minor(buf, k, c);
        let mut cofactor = buf[c].wrapping_mul(det_recursive(&sub, k - 1));
        if c % 2 == 1 {
            cofactor = cofactor.wrapping_neg();
        }
        det = det.wrapping_add(cofactor);
    }
    det
}

impl_matrix_binop!(Matrix, Add, add, checked_add);
impl_matrix_binop!(Matrix, Sub, sub, checked_sub);
impl_matrix_binop!(Matrix, Mul, mul, checked_mul);

impl_matrix_binop_assign!(Matrix, AddAssign, add_assign, checked_add);
impl_matrix_binop_assign!(Matrix, SubAssign, sub_assign, checked_sub);
impl_matrix_binop_assign!(Matrix, MulAssign, mul_assign, checked_mul);

impl_matrix_scalar_op!(Matrix, Rem, rem, checked_rem);
impl_matrix_scalar_op!(Matrix, Div, div, checked_div);

impl_matrix_scalar_op_assign!(Matrix, RemAssign, rem_assign, checked_rem);
impl_matrix_scalar_op_assign!(Matrix, DivAssign, div_assign, checked_div);

impl std::ops::Mul<i32> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: i32) -> Matrix {
        self.scalar_mul(scalar)
    }
}

impl std::ops::Mul<i32> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: i32) -> Matrix {
        self.scalar_mul(scalar)
    }
}

impl std::ops::Mul<&Matrix> for i32 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scalar_mul(self)
    }
}

impl std::ops::Mul<Matrix> for i32 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        matrix.scalar_mul(self)
    }
}

impl std::ops::MulAssign<i32> for Matrix {
    fn mul_assign(&mut self, scalar: i32) {
        *self = self.scalar_mul(scalar);
    }
}

impl std::ops::Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map_elements(i32::wrapping_neg)
    }
}

impl std::ops::Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}
