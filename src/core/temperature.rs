/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Convert Celsius to Kelvin
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(celsius_to_kelvin(25.0), 298.15);
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_eq!(celsius_to_kelvin(-273.15), 0.0);
    }

    #[test]
    fn test_kelvin_is_exact_sum() {
        for celsius in [-40.0, -12.3, 0.1, 17.8, 36.6, 48.9] {
            assert_eq!(celsius_to_kelvin(celsius), celsius + 273.15);
        }
    }
}
