use ndarray::Array2;

///
/// Hide low quality cells: every cell below `lower` becomes NaN. Cells that are already
/// NaN (not available) stay NaN.
///
pub fn mask_low_quality(matrix: &mut Array2<f64>, lower: f64) {
    matrix.mapv_inplace(|v| if v.is_nan() || v < lower { f64::NAN } else { v });
}
