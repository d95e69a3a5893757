/// Values selected by `step` between `min` and `max`.
///
/// Yields every multiple of `step` in `[max(min, 1), max]`, ascending. A
/// leading `0` is added only when `min` is 0 and `step` divides `max + 1`,
/// so `*/18` over minutes gives `18 36 54` while `*/15` gives
/// `0 15 30 45`. A zero `step` selects nothing.
pub fn step_range(min: u32, max: u32, step: u32) -> Vec<u32> {
    if step == 0 {
        return Vec::new();
    }

    let mut values = Vec::new();
    if min == 0 && (u64::from(max) + 1) % u64::from(step) == 0 {
        values.push(0);
    }
    values.extend((min.max(1)..=max).filter(|i| i % step == 0));
    values
}

/// Space-separated rendering; an empty slice renders as "".
pub fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_when_step_divides_field_size() {
        assert_eq!(step_range(0, 59, 15), vec![0, 15, 30, 45]);
        assert_eq!(step_range(0, 23, 3), vec![0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn no_leading_zero_when_step_does_not_divide() {
        assert_eq!(step_range(0, 59, 18), vec![18, 36, 54]);
        assert_eq!(step_range(0, 6, 4), vec![4]);
    }

    #[test]
    fn one_based_fields_never_gain_zero() {
        assert_eq!(step_range(1, 12, 4), vec![4, 8, 12]);
        assert_eq!(step_range(1, 12, 13), Vec::<u32>::new());
        assert_eq!(step_range(1, 31, 1).len(), 31);
    }

    #[test]
    fn unit_step_is_plain_enumeration() {
        assert_eq!(step_range(0, 6, 1), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(step_range(3, 5, 1), vec![3, 4, 5]);
        assert_eq!(step_range(7, 7, 1), vec![7]);
    }

    #[test]
    fn step_larger_than_field_selects_nothing_but_maybe_zero() {
        assert_eq!(step_range(0, 59, 60), vec![0]);
        assert_eq!(step_range(0, 59, 61), Vec::<u32>::new());
    }

    #[test]
    fn zero_step_selects_nothing() {
        assert!(step_range(0, 59, 0).is_empty());
    }

    #[test]
    fn join() {
        assert_eq!(join_values(&[0, 15, 30, 45]), "0 15 30 45");
        assert_eq!(join_values(&[]), "");
    }
}
