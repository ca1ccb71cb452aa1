/// Arithmetic mean, 0.0 for an empty input.
pub fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Largest value, 0.0 for an empty input. Values are nonnegative so 0.0 is
/// also the floor.
pub fn max_or_zero(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Human friendly rendering for chart tick labels: 1234.5 -> "1.2K".
pub fn compact_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if abs >= 10.0 || abs == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean_or_zero(&[]), 0.0);
        assert_eq!(mean_or_zero(&[10.0, 5.0]), 7.5);
    }

    #[test]
    fn max_of_empty_is_zero() {
        assert_eq!(max_or_zero(&[]), 0.0);
        assert_eq!(max_or_zero(&[3.0, 10.0, 5.0]), 10.0);
    }

    #[test]
    fn compact_number_scales() {
        assert_eq!(compact_number(0.0), "0");
        assert_eq!(compact_number(2.5), "2.50");
        assert_eq!(compact_number(42.0), "42");
        assert_eq!(compact_number(1_240.0), "1.2K");
        assert_eq!(compact_number(3_400_000.0), "3.4M");
    }
}
