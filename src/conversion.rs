use crate::constants::{Degree, DEG_PER_HOUR};
use crate::errors::DeepskyError;

/// Split a raw coordinate string on colons and whitespace.
///
/// Upstream catalogs mix `HH:MM:SS`, `HH MM SS.S` and `HH MM.M` notations,
/// sometimes with both separators in the same file.
fn components(raw: &str) -> Vec<&str> {
    raw.split([':', ' ', '\t'])
        .filter(|part| !part.is_empty())
        .collect()
}

/// Parse a right ascension string to degrees.
///
/// Accepted forms:
/// - a single decimal number, already in degrees
/// - `HH MM` or `HH:MM` (missing seconds default to 0)
/// - `HH MM SS.S` or `HH:MM:SS.S`
///
/// Arguments
/// ---------
/// * `ra`: the raw right ascension text from a catalog row
///
/// Returns
/// -------
/// * The right ascension in degrees (hours × 15), not yet range-validated,
///   or [`DeepskyError::InvalidRa`] when neither decimal nor sexagesimal
///   parsing succeeds.
pub fn parse_ra_to_deg(ra: &str) -> Result<Degree, DeepskyError> {
    let invalid = || DeepskyError::InvalidRa(ra.to_string());

    let parts = components(ra);
    match parts.len() {
        1 => parts[0].parse::<f64>().map_err(|_| invalid()),
        2 | 3 => {
            let h: f64 = parts[0].parse().map_err(|_| invalid())?;
            let m: f64 = parts[1].parse().map_err(|_| invalid())?;
            let s: f64 = match parts.get(2) {
                Some(raw) => raw.parse().map_err(|_| invalid())?,
                None => 0.0,
            };
            Ok((h + m / 60.0 + s / 3600.0) * DEG_PER_HOUR)
        }
        _ => Err(invalid()),
    }
}

/// Parse a declination string to degrees.
///
/// Accepted forms mirror [`parse_ra_to_deg`], in degrees instead of hours:
/// a single decimal number, or `±DD MM [SS.S]` with `:` or space separators.
/// The sign is taken from the leading character of the string (default
/// positive), and the magnitude is reconstructed component-wise so that
/// `-00 30` parses as −0.5°.
///
/// Arguments
/// ---------
/// * `dec`: the raw declination text from a catalog row
///
/// Returns
/// -------
/// * The declination in degrees, not yet range-validated, or
///   [`DeepskyError::InvalidDec`] on malformed input.
pub fn parse_dec_to_deg(dec: &str) -> Result<Degree, DeepskyError> {
    let invalid = || DeepskyError::InvalidDec(dec.to_string());

    let sign = if dec.trim_start().starts_with('-') {
        -1.0
    } else {
        1.0
    };

    let parts = components(dec);
    match parts.len() {
        1 => parts[0].parse::<f64>().map_err(|_| invalid()),
        2 | 3 => {
            let d: f64 = parts[0]
                .trim_start_matches(['-', '+'])
                .parse()
                .map_err(|_| invalid())?;
            let m: f64 = parts[1].parse().map_err(|_| invalid())?;
            let s: f64 = match parts.get(2) {
                Some(raw) => raw.parse().map_err(|_| invalid())?,
                None => 0.0,
            };
            Ok(sign * (d.abs() + m / 60.0 + s / 3600.0))
        }
        _ => Err(invalid()),
    }
}

/// Parse an RA/Dec pair of raw catalog strings to decimal degrees.
///
/// When both strings parse directly as floating-point numbers they are taken
/// as already-decimal degrees; otherwise each side goes through sexagesimal
/// parsing. The result is **not** epoch-converted and **not** range-validated.
pub fn parse_coordinates(ra: &str, dec: &str) -> Result<(Degree, Degree), DeepskyError> {
    if let (Ok(ra_deg), Ok(dec_deg)) = (ra.trim().parse::<f64>(), dec.trim().parse::<f64>()) {
        return Ok((ra_deg, dec_deg));
    }
    Ok((parse_ra_to_deg(ra)?, parse_dec_to_deg(dec)?))
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ra_to_deg() {
        assert_relative_eq!(
            parse_ra_to_deg("22:52:23.37").unwrap(),
            22.0 * 15.0 + 52.0 * 15.0 / 60.0 + 23.37 * 15.0 / 3600.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            parse_ra_to_deg("00 42 44.3").unwrap(),
            10.684583333333334,
            epsilon = 1e-9
        );
        // HH MM.M with missing seconds
        assert_relative_eq!(parse_ra_to_deg("20 58.8").unwrap(), 314.7, epsilon = 1e-9);
        // Already-decimal degrees
        assert_relative_eq!(parse_ra_to_deg("314.75").unwrap(), 314.75, epsilon = 1e-12);

        assert!(parse_ra_to_deg("1 2 3 4").is_err());
        assert!(parse_ra_to_deg("XX YY ZZ.Z").is_err());
        assert!(parse_ra_to_deg("").is_err());
    }

    #[test]
    fn test_dec_to_deg() {
        assert_relative_eq!(
            parse_dec_to_deg("-00 30 14.2").unwrap(),
            -0.5039444444444444,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            parse_dec_to_deg("+41:16:09").unwrap(),
            41.269166666666667,
            epsilon = 1e-9
        );
        assert_relative_eq!(parse_dec_to_deg("44 20").unwrap(), 44.333333333333336);
        assert_relative_eq!(parse_dec_to_deg("-27 50").unwrap(), -27.833333333333332);
        assert_relative_eq!(parse_dec_to_deg("-12.51").unwrap(), -12.51);

        assert!(parse_dec_to_deg("89 15 50.2.3").is_err());
        assert!(parse_dec_to_deg("").is_err());
    }

    #[test]
    fn test_dec_sign_convention() {
        // Leading '-' always yields a negative value, '+' or no sign non-negative.
        assert!(parse_dec_to_deg("-0 30").unwrap() < 0.0);
        assert!(parse_dec_to_deg("+0 30").unwrap() >= 0.0);
        assert!(parse_dec_to_deg("0 30").unwrap() >= 0.0);
    }

    #[test]
    fn test_parse_coordinates_decimal_passthrough() {
        let (ra, dec) = parse_coordinates("10.68458", "41.26917").unwrap();
        assert_relative_eq!(ra, 10.68458);
        assert_relative_eq!(dec, 41.26917);

        let (ra, dec) = parse_coordinates("00 40 00.1", "+41 00 00").unwrap();
        assert_relative_eq!(ra, 10.000416666666666, epsilon = 1e-9);
        assert_relative_eq!(dec, 41.0, epsilon = 1e-12);
    }
}
