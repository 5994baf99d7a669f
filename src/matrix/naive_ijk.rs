use crate::element::Element;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. It's slow because
/// the innermost loop accesses B with stride `n` (column-wise), causing
/// cache misses on every iteration.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `r` - Result (n × n), row-major, accumulated into (R += A * B)
/// * `n` - Side length shared by all three
pub fn multiply_naive_ijk<T: Element>(a: &[T], b: &[T], r: &mut [T], n: usize) {
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                r[i * n + j] = r[i * n + j].mul_add_wrapping(a[i * n + k], b[k * n + j]);
            }
        }
    }
}
