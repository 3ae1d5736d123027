#![macro_use]

// Fan a fallible matrix-matrix operator out over the owned/borrowed
// operand combinations.  The reference form is canonical; the others
// forward to it.  Failures surface as panics carrying the error's
// display text, in the std convention for operators.
macro_rules! impl_matrix_binop {
    ($type: ty, $op: ident, $fn: ident, $checked: ident) => {
        impl std::ops::$op<&$type> for &$type {
            type Output = $type;
            fn $fn(self, rhs: &$type) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl std::ops::$op<$type> for &$type {
            type Output = $type;
            fn $fn(self, rhs: $type) -> Self::Output {
                self.$fn(&rhs)
            }
        }

        impl std::ops::$op<&$type> for $type {
            type Output = $type;
            fn $fn(self, rhs: &$type) -> Self::Output {
                (&self).$fn(rhs)
            }
        }

        impl std::ops::$op<$type> for $type {
            type Output = $type;
            fn $fn(self, rhs: $type) -> Self::Output {
                (&self).$fn(&rhs)
            }
        }
    };
}

macro_rules! impl_matrix_binop_assign {
    ($type: ty, $op: ident, $fn: ident, $checked: ident) => {
        impl std::ops::$op<&$type> for $type {
            fn $fn(&mut self, rhs: &$type) {
                match self.$checked(rhs) {
                    Ok(result) => *self = result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl std::ops::$op<$type> for $type {
            fn $fn(&mut self, rhs: $type) {
                self.$fn(&rhs)
            }
        }
    };
}

macro_rules! impl_matrix_scalar_op {
    ($type: ty, $op: ident, $fn: ident, $checked: ident) => {
        impl std::ops::$op<i32> for &$type {
            type Output = $type;
            fn $fn(self, rhs: i32) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl std::ops::$op<i32> for $type {
            type Output = $type;
            fn $fn(self, rhs: i32) -> Self::Output {
                (&self).$fn(rhs)
            }
        }
    };
}

macro_rules! impl_matrix_scalar_op_assign {
    ($type: ty, $op: ident, $fn: ident, $checked: ident) => {
        impl std::ops::$op<i32> for $type {
            fn $fn(&mut self, rhs: i32) {
                match self.$checked(rhs) {
                    Ok(result) => *self = result,
                    Err(error) => panic!("{}", error),
                }
            }
        }
    };
}
