//! Set-membership toggling for array-valued fields.

/// Flips the membership of `value` in `sequence`.
///
/// If any element is `equals` to `value`, every such element is dropped.
/// Otherwise `value` is appended. The input slice is left untouched.
///
/// # Examples
///
/// ```
/// use dashboard_rs_forms::toggle;
///
/// let once = toggle("a", &["a", "b"], |x, y| x == y);
/// assert_eq!(once, vec!["b"]);
/// let twice = toggle("a", &once, |x, y| x == y);
/// assert_eq!(twice, vec!["b", "a"]);
/// ```
pub fn toggle<T, F>(value: T, sequence: &[T], equals: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if sequence.iter().any(|item| equals(item, &value)) {
        sequence
            .iter()
            .filter(|item| !equals(item, &value))
            .cloned()
            .collect()
    } else {
        let mut toggled = sequence.to_vec();
        toggled.push(value);
        toggled
    }
}
