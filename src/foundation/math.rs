//! 3-D layer transform math.
//!
//! Layer effects animate full 3-D transforms (flips rotate out of the
//! plane), which 2-D `kurbo::Affine` cannot express. `Transform3D` is a
//! row-major 4x4 matrix in the row-vector convention: `p' = p * M`, so
//! `a.then(b)` applies `a` first.

/// A 4x4 transform matrix, row-vector convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    /// Matrix entries, `m[row][column]`; translation lives in row 3.
    pub m: [[f64; 4]; 4],
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Transform3D = Transform3D {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// A pure translation.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[3][0] = x;
        t.m[3][1] = y;
        t.m[3][2] = z;
        t
    }

    /// A pure scale about the origin.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[0][0] = sx;
        t.m[1][1] = sy;
        t.m[2][2] = sz;
        t
    }

    /// A rotation of `radians` about the given axis.
    ///
    /// A zero axis yields the identity.
    pub fn rotation(radians: f64, axis: (f64, f64, f64)) -> Self {
        let (x, y, z) = axis;
        let len = (x * x + y * y + z * z).sqrt();
        if len == 0.0 {
            return Self::IDENTITY;
        }
        let (x, y, z) = (x / len, y / len, z / len);
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;

        let mut r = Self::IDENTITY;
        r.m[0][0] = c + x * x * t;
        r.m[0][1] = y * x * t + z * s;
        r.m[0][2] = z * x * t - y * s;
        r.m[1][0] = x * y * t - z * s;
        r.m[1][1] = c + y * y * t;
        r.m[1][2] = z * y * t + x * s;
        r.m[2][0] = x * z * t + y * s;
        r.m[2][1] = y * z * t - x * s;
        r.m[2][2] = c + z * z * t;
        r
    }

    /// Concatenation applying `self` first, then `other`.
    pub fn then(self, other: Transform3D) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Transform3D { m: out }
    }

    /// Whether any of the diagonal scale entries differs from 1.
    ///
    /// Note that this classifies a rotation as carrying a scale component
    /// (its diagonal holds cosines); the reducer only uses this to order
    /// pure-scale against pure-translate operands, where it is exact.
    pub fn has_scale_component(&self) -> bool {
        (self.m[0][0] - 1.0).abs() > 1e-12
            || (self.m[1][1] - 1.0).abs() > 1e-12
            || (self.m[2][2] - 1.0).abs() > 1e-12
    }

    /// The translation components `(x, y, z)` of this transform.
    pub fn translation_components(&self) -> (f64, f64, f64) {
        (self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// Entry-wise approximate equality.
    pub fn approx_eq(&self, other: &Transform3D, eps: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

/// Concatenate two transforms so that a pure-scale operand is always
/// applied first, regardless of operand order.
///
/// Translate-then-scale traces a different visual trajectory than
/// scale-then-translate; fixing the order keeps merged transform effects
/// on a consistent path.
pub(crate) fn concat_scale_first(t1: Transform3D, t2: Transform3D) -> Transform3D {
    if t2.has_scale_component() {
        return t2.then(t1);
    }
    t1.then(t2)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
