/// Calculates the normalized insertion/deletion similarity of two strings, in the range `0..=100`.
///
/// The ratio is `100 * (1 - indel_distance / (len(a) + len(b)))`, where the indel distance is the
/// minimum number of single-character insertions and deletions turning `a` into `b`. Equivalently,
/// `200 * lcs(a, b) / (len(a) + len(b))`. Lengths are measured in `char`s.
///
/// Two empty strings are considered identical.
///
/// # Example
/// ```
/// use transcript_sniffer::utils::indel_similarity_ratio;
///
/// assert_eq!(indel_similarity_ratio("abc", "abc"), 100.0);
/// assert_eq!(indel_similarity_ratio("abc", "xyz"), 0.0);
/// ```
pub fn indel_similarity_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let total_length = a_chars.len() + b_chars.len();
    if total_length == 0 {
        return 100.0;
    }

    let lcs_length = longest_common_subsequence_length(&a_chars, &b_chars);

    200.0 * lcs_length as f64 / total_length as f64
}

/// Two-row dynamic programming table; memory is linear in the shorter input.
fn longest_common_subsequence_length(a: &[char], b: &[char]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut previous_row = vec![0usize; inner.len() + 1];
    let mut current_row = vec![0usize; inner.len() + 1];

    for outer_char in outer {
        for (inner_idx, inner_char) in inner.iter().enumerate() {
            current_row[inner_idx + 1] = if outer_char == inner_char {
                previous_row[inner_idx] + 1
            } else {
                previous_row[inner_idx + 1].max(current_row[inner_idx])
            };
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[inner.len()]
}
