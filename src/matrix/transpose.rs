use crate::element::Element;

/// Transpose a square matrix: dst = src^T
///
/// After transpose, what was column j of src becomes row j of dst.
///
/// # Arguments
///
/// * `src` - Source matrix (n × n), row-major
/// * `dst` - Destination matrix (n × n), row-major
/// * `n` - Side length
///
/// # Example
///
/// ```
/// use tiled_matmul::matrix::transpose::transpose;
///
/// let src = vec![1, 2, 3,
///                4, 5, 6,
///                7, 8, 9];
/// let mut dst = vec![0; 9];
///
/// transpose(&src, &mut dst, 3);
///
/// assert_eq!(dst, vec![1, 4, 7,
///                      2, 5, 8,
///                      3, 6, 9]);
/// ```
pub fn transpose<T: Element>(src: &[T], dst: &mut [T], n: usize) {
    for i in 0..n {
        for j in 0..n {
            dst[j * n + i] = src[i * n + j];
        }
    }
}

/// i-j-k multiplication against a transposed copy of B.
///
/// B is transposed into a scratch buffer first, so `bt[j * n + k]` walks
/// along a row in the inner loop just like `a[i * n + k]` does. Needs n²
/// scratch elements, freed on return.
pub fn multiply_transposed<T: Element>(a: &[T], b: &[T], r: &mut [T], n: usize) {
    let mut bt = vec![T::default(); n * n];
    transpose(b, &mut bt, n);

    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let bt_row = &bt[j * n..(j + 1) * n];
            let mut acc = r[i * n + j];
            for (&x, &y) in a_row.iter().zip(bt_row) {
                acc = acc.mul_add_wrapping(x, y);
            }
            r[i * n + j] = acc;
        }
    }
}
