use ndarray::{Array2, Axis, concatenate, s};

use crate::errors::{MosaicError, MosaicResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAxis {
    /// axis 0
    Rows,
    /// axis 1
    Columns,
}

impl SyncAxis {
    pub fn index(&self) -> usize {
        match self {
            SyncAxis::Rows => 0,
            SyncAxis::Columns => 1,
        }
    }

    pub fn axis(&self) -> Axis {
        Axis(self.index())
    }
}

impl TryFrom<usize> for SyncAxis {
    type Error = MosaicError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SyncAxis::Rows),
            1 => Ok(SyncAxis::Columns),
            other => Err(MosaicError::InvalidAxis(other)),
        }
    }
}

///
/// Extend `arr` along `axis` to `extent` with NaN. Padding is appended after the
/// existing data, so real values stay anchored at the top-left.
///
fn pad_to(arr: Array2<f64>, axis: SyncAxis, extent: usize) -> Array2<f64> {
    let (rows, cols) = arr.dim();
    let shape = match axis {
        SyncAxis::Rows if rows < extent => (extent, cols),
        SyncAxis::Columns if cols < extent => (rows, extent),
        _ => return arr,
    };

    let mut padded = Array2::from_elem(shape, f64::NAN);
    padded.slice_mut(s![..rows, ..cols]).assign(&arr);
    padded
}

///
/// Pad the shorter of two arrays along `axis` with NaN so both have the same
/// extent on that axis. The other axis is left alone.
///
/// # Arguments:
/// - a: first array
/// - b: second array
/// - axis: the axis to synchronize
///
/// # Returns:
/// - both arrays, unchanged if they already agree on `axis`
pub fn sync(a: Array2<f64>, b: Array2<f64>, axis: SyncAxis) -> (Array2<f64>, Array2<f64>) {
    let extent = a.len_of(axis.axis()).max(b.len_of(axis.axis()));
    (pad_to(a, axis, extent), pad_to(b, axis, extent))
}

///
/// Append `b` to `a` along `axis`.
///
/// Fails with [MosaicError::ShapeMismatch] if the arrays disagree on the other axis.
pub fn concat(a: Array2<f64>, b: Array2<f64>, axis: SyncAxis) -> MosaicResult<Array2<f64>> {
    let mismatch = || MosaicError::ShapeMismatch {
        axis: axis.index(),
        left_rows: a.nrows(),
        left_cols: a.ncols(),
        right_rows: b.nrows(),
        right_cols: b.ncols(),
    };

    let orthogonal_ok = match axis {
        SyncAxis::Rows => a.ncols() == b.ncols(),
        SyncAxis::Columns => a.nrows() == b.nrows(),
    };
    if !orthogonal_ok {
        return Err(mismatch());
    }

    concatenate(axis.axis(), &[a.view(), b.view()]).map_err(|_| mismatch())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn same(a: &Array2<f64>, b: &Array2<f64>) -> bool {
        a.dim() == b.dim()
            && a.iter()
                .zip(b.iter())
                .all(|(x, y)| (x.is_nan() && y.is_nan()) || x == y)
    }

    #[rstest]
    fn test_sync_rows_pads_shorter_second_array() {
        let a = array![[1.0, 1.0], [1.0, 1.0], [1.0, 1.0]];
        let b = array![[2.0], [2.0]];

        let (a2, b2) = sync(a.clone(), b, SyncAxis::Rows);

        assert!(same(&a2, &a));
        assert_eq!(b2.dim(), (3, 1));
        assert_eq!(b2[[1, 0]], 2.0);
        assert!(b2[[2, 0]].is_nan());
    }

    #[rstest]
    fn test_sync_rows_pads_shorter_first_array() {
        let a = array![[1.0, 1.0]];
        let b = array![[2.0], [2.0], [2.0]];

        let (a2, b2) = sync(a, b, SyncAxis::Rows);

        assert_eq!(a2.dim(), (3, 2));
        assert_eq!(a2[[0, 1]], 1.0);
        assert!(a2.slice(s![1.., ..]).iter().all(|v| v.is_nan()));
        assert_eq!(b2.dim(), (3, 1));
    }

    #[rstest]
    fn test_sync_columns() {
        let a = array![[1.0], [1.0]];
        let b = array![[2.0, 2.0, 2.0]];

        let (a2, b2) = sync(a, b, SyncAxis::Columns);

        assert_eq!(a2.dim(), (2, 3));
        assert!(a2[[0, 2]].is_nan());
        // other axis untouched
        assert_eq!(b2.dim(), (1, 3));
    }

    #[rstest]
    fn test_sync_is_idempotent() {
        let a = array![[1.0, f64::NAN], [3.0, 4.0]];
        let b = array![[5.0]];

        let (a1, b1) = sync(a, b, SyncAxis::Rows);
        let (a2, b2) = sync(a1.clone(), b1.clone(), SyncAxis::Rows);

        assert!(same(&a1, &a2));
        assert!(same(&b1, &b2));
    }

    #[rstest]
    fn test_sync_with_empty_array() {
        let a = Array2::<f64>::zeros((0, 0));
        let b = array![[1.0, 2.0], [3.0, 4.0]];

        let (a2, b2) = sync(a, b, SyncAxis::Rows);
        assert_eq!(a2.dim(), (2, 0));
        assert_eq!(b2.dim(), (2, 2));
    }

    #[rstest]
    fn test_concat_columns() {
        let a = array![[1.0], [1.0]];
        let b = array![[2.0, 2.0], [2.0, 2.0]];

        let merged = concat(a, b, SyncAxis::Columns).unwrap();
        assert_eq!(merged, array![[1.0, 2.0, 2.0], [1.0, 2.0, 2.0]]);
    }

    #[rstest]
    fn test_concat_shape_mismatch() {
        let a = array![[1.0], [1.0]];
        let b = array![[2.0, 2.0]];

        let result = concat(a, b, SyncAxis::Columns);
        assert!(matches!(
            result,
            Err(MosaicError::ShapeMismatch {
                axis: 1,
                left_rows: 2,
                right_rows: 1,
                ..
            })
        ));
    }

    #[rstest]
    #[case(0, SyncAxis::Rows)]
    #[case(1, SyncAxis::Columns)]
    fn test_axis_from_index(#[case] index: usize, #[case] expected: SyncAxis) {
        assert_eq!(SyncAxis::try_from(index).unwrap(), expected);
        assert_eq!(expected.index(), index);
    }

    #[rstest]
    fn test_invalid_axis() {
        assert!(matches!(
            SyncAxis::try_from(2),
            Err(MosaicError::InvalidAxis(2))
        ));
    }
}
