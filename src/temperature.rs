/// Converts a whole degree Celsius temperature to Fahrenheit.
///
/// The division by 0.5556 is truncated toward zero before the offset is added,
/// so the result is always a whole degree as well.
///
/// # Arguments
///
/// * 'temp' - temperature in Celsius
pub fn celsius_to_fahrenheit(temp: i32) -> i32 {
    32 + (temp as f64 / 0.5556) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
    }

    #[test]
    fn positive_temperatures_truncate() {
        // 25 / 0.5556 = 44.996...
        assert_eq!(celsius_to_fahrenheit(25), 76);
        assert_eq!(celsius_to_fahrenheit(100), 211);
    }

    #[test]
    fn negative_temperatures_truncate_toward_zero() {
        // -20 / 0.5556 = -35.997...
        assert_eq!(celsius_to_fahrenheit(-20), -3);
        assert_eq!(celsius_to_fahrenheit(-1), 31);
    }

    #[test]
    fn close_to_exact_conversion() {
        for c in -20..55 {
            let exact = c as f64 * 1.8 + 32.0;
            assert!((celsius_to_fahrenheit(c) as f64 - exact).abs() < 1.01, "{} C", c);
        }
    }
}
