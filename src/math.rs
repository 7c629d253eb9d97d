//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::{
    color::{Component, Components},
    error::{InvalidColorValue, Result},
};

/// A 3x3 matrix, stored in the upper left corner of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Determinants smaller than this are treated as zero.
const SINGULAR_EPSILON: Component = 1.0e-12;

/// Create a 3x3 transform from its entries in row-major order, the way the
/// matrices are written on paper: `x' = m11 * x + m12 * y + m13 * z`.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn matrix_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    // euclid multiplies row vectors, so the columns of the written matrix
    // become its rows.
    Transform::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Return the entries of the 3x3 part of `transform` in row-major order.
pub fn rows(transform: &Transform) -> [[Component; 3]; 3] {
    let t = transform;
    [
        [t.m11, t.m21, t.m31],
        [t.m12, t.m22, t.m32],
        [t.m13, t.m23, t.m33],
    ]
}

/// Build a transform from rows as returned by [`rows`].
pub fn from_rows(m: [[Component; 3]; 3]) -> Transform {
    matrix_3x3(
        m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
    )
}

/// A diagonal matrix scaling each axis independently.
pub const fn diagonal(x: Component, y: Component, z: Component) -> Transform {
    matrix_3x3(x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, z)
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Invert a 3x3 matrix with the cofactor method: the adjugate (transposed
/// matrix of cofactors) divided by the determinant.
pub fn invert_3x3(transform: &Transform) -> Result<Transform> {
    let m = rows(transform);

    // Cyclic indices give each cofactor its sign without a checkerboard.
    let cofactor = |row: usize, col: usize| {
        let (r1, r2) = ((row + 1) % 3, (row + 2) % 3);
        let (c1, c2) = ((col + 1) % 3, (col + 2) % 3);
        m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]
    };

    let mut cofactors = [[0.0; 3]; 3];
    for (row, cofactor_row) in cofactors.iter_mut().enumerate() {
        for (col, value) in cofactor_row.iter_mut().enumerate() {
            *value = cofactor(row, col);
        }
    }

    let determinant =
        m[0][0] * cofactors[0][0] + m[0][1] * cofactors[0][1] + m[0][2] * cofactors[0][2];
    if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
        return Err(InvalidColorValue::SingularMatrix);
    }

    let mut inverse = [[0.0; 3]; 3];
    for (row, inverse_row) in inverse.iter_mut().enumerate() {
        for (col, value) in inverse_row.iter_mut().enumerate() {
            // Adjugate is the transpose of the cofactors.
            *value = cofactors[col][row] / determinant;
        }
    }

    Ok(from_rows(inverse))
}

/// Wrap a hue angle into `[0, 360)`.
///
/// The remainder bounds the number of steps, the loop guarantees the result
/// never lands on 360 or below zero due to rounding.
pub fn normalize_hue(hue: Component) -> Component {
    let mut hue = hue % 360.0;
    loop {
        if hue >= 360.0 {
            hue -= 360.0;
        } else if hue < 0.0 {
            hue += 360.0;
        } else {
            return hue;
        }
    }
}

/// Interpolate between `a` and `b`. Exact at both ends: `t = 0` returns `a`
/// and `t = 1` returns `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    const EXAMPLE: Transform = matrix_3x3(2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0);

    #[test]
    fn transform_uses_row_major_layout() {
        let c = transform(&EXAMPLE, Components(1.0, 2.0, 3.0));
        assert_eq!(c, Components(5.0, 13.0, 9.0));
    }

    #[test]
    fn rows_round_trip() {
        assert_eq!(from_rows(rows(&EXAMPLE)), EXAMPLE);
        assert_eq!(rows(&EXAMPLE)[1], [1.0, 3.0, 2.0]);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let inverse = invert_3x3(&EXAMPLE).unwrap();
        let identity = rows(&EXAMPLE.then(&inverse));
        for (r, row) in identity.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                assert_component_eq!(*value, if r == c { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn known_inverse() {
        // det = 1, so the inverse is the adjugate.
        let m = matrix_3x3(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
        let inverse = rows(&invert_3x3(&m).unwrap());
        let expected = [[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]];
        for r in 0..3 {
            for c in 0..3 {
                assert_component_eq!(inverse[r][c], expected[r][c]);
            }
        }
    }

    #[test]
    fn singular_matrix_fails() {
        let m = matrix_3x3(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 1.0, 1.0);
        assert_eq!(invert_3x3(&m), Err(InvalidColorValue::SingularMatrix));
        // No two rows are parallel, but the third row is a mix of the others.
        let m = matrix_3x3(2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0);
        assert_eq!(invert_3x3(&m), Err(InvalidColorValue::SingularMatrix));
    }

    #[test]
    fn diagonal_scales_each_axis() {
        let c = transform(&diagonal(2.0, 3.0, 4.0), Components(1.0, 1.0, 1.0));
        assert_eq!(c, Components(2.0, 3.0, 4.0));
    }

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-10.0), 350.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-720.0), 0.0);
        assert_eq!(normalize_hue(1090.0), 10.0);
        let tiny = normalize_hue(-1.0e-17);
        assert!((0.0..360.0).contains(&tiny), "{tiny}");
    }

    #[test]
    fn lerp_is_exact_at_the_ends() {
        assert_eq!(lerp(0.1, 0.7, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
        assert_eq!(lerp(0.0_f32, 10.0, 0.5), 5.0);
    }
}
