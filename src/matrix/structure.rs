use std::fmt;

use bitflags::bitflags;

use super::Matrix;
use crate::config::LinalgOptions;
use crate::core::scalar::Scalar;

bitflags! {
    /// Structural properties detected by [`Matrix::structure`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Structure: u32 {
        const SQUARE          = 0b0000_0001;
        const SYMMETRIC       = 0b0000_0010;
        const UPPER           = 0b0000_0100; // zeros below the diagonal
        const LOWER           = 0b0000_1000; // zeros above the diagonal
        const DIAGONAL        = Self::UPPER.bits() | Self::LOWER.bits();
        const UNIT_DIAGONAL   = 0b0001_0000;
        const IDENTITY        = Self::DIAGONAL.bits() | Self::UNIT_DIAGONAL.bits();
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl<D: Scalar> Matrix<D> {
    pub fn structure(&self) -> Structure {
        self.structure_with(&LinalgOptions::default())
    }

    /// Classify the matrix; non-square matrices only ever report no flags.
    pub fn structure_with(&self, options: &LinalgOptions) -> Structure {
        if !self.is_square() {
            return Structure::empty();
        }
        let eps = options.epsilon;
        let n = self.rows();
        let a = self.as_slice();
        let mut flags = Structure::SQUARE | Structure::SYMMETRIC | Structure::DIAGONAL | Structure::UNIT_DIAGONAL;
        for i in 0..n {
            if !a[i * n + i].near(D::one(), eps) {
                flags.remove(Structure::UNIT_DIAGONAL);
            }
            for j in 0..n {
                let v = a[i * n + j];
                if j < i && !v.near_zero(eps) {
                    flags.remove(Structure::UPPER);
                }
                if j > i && !v.near_zero(eps) {
                    flags.remove(Structure::LOWER);
                }
                if !v.near(a[j * n + i], eps) {
                    flags.remove(Structure::SYMMETRIC);
                }
            }
        }
        flags
    }
}
