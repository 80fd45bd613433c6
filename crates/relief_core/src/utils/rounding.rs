/// Rounds half away from zero to the given number of decimal places.
pub(crate) fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(0.61333, 3), 0.613);
        assert_eq!(round_to_decimals(0.6866666, 3), 0.687);
        assert_eq!(round_to_decimals(9.2000000001, 2), 9.2);
        assert_eq!(round_to_decimals(1.0, 3), 1.0);
    }
}
