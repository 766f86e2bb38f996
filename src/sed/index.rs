use super::flux::SedPoint;

/// Infrared spectral index α: slope of `log(λF_λ)` against `log(λ)` between
/// the first (shortest) and last (longest) SED points.
///
/// Points in between are ignored. Returns `None` when either endpoint has no
/// defined flux, or when the two endpoints share a wavelength.
pub fn spectral_index(sed: &[SedPoint]) -> Option<f64> {
    let (first, last) = match sed {
        [first, .., last] => (first, last),
        _ => return None,
    };

    let y0 = first.log_lambda_f_lambda?;
    let y1 = last.log_lambda_f_lambda?;

    let baseline = last.log_wavelength_cm - first.log_wavelength_cm;
    if baseline == 0.0 || !baseline.is_finite() {
        return None;
    }

    Some((y1 - y0) / baseline).filter(|alpha| alpha.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sed::band::Band;
    use approx::assert_relative_eq;

    fn point(band: Band, x: f64, y: Option<f64>) -> SedPoint {
        SedPoint {
            band,
            log_wavelength_cm: x,
            log_lambda_f_lambda: y,
        }
    }

    #[test]
    fn slope_between_endpoints() {
        let sed = [
            point(Band::W1, -3.5, Some(-10.0)),
            point(Band::W2, -3.3, Some(-50.0)),
            point(Band::W3, -3.0, None),
            point(Band::W4, -2.5, Some(-11.0)),
        ];
        assert_relative_eq!(spectral_index(&sed).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn undefined_endpoint_propagates() {
        let first_missing = [
            point(Band::W1, -3.5, None),
            point(Band::W2, -3.3, Some(-10.0)),
            point(Band::W3, -3.0, Some(-10.0)),
            point(Band::W4, -2.5, Some(-11.0)),
        ];
        assert_eq!(spectral_index(&first_missing), None);

        let last_missing = [
            point(Band::W1, -3.5, Some(-10.0)),
            point(Band::W2, -3.3, Some(-10.0)),
            point(Band::W3, -3.0, Some(-10.0)),
            point(Band::W4, -2.5, None),
        ];
        assert_eq!(spectral_index(&last_missing), None);
    }

    #[test]
    fn degenerate_baseline() {
        let sed = [
            point(Band::W1, -3.0, Some(-10.0)),
            point(Band::W4, -3.0, Some(-11.0)),
        ];
        assert_eq!(spectral_index(&sed), None);
        assert_eq!(spectral_index(&sed[..1]), None);
        assert_eq!(spectral_index(&[]), None);
    }
}
