//! Vincenty's direct and inverse geodesic formulae.

use crate::ellipsoid::{Ellipsoid, WGS84};
use mgrid_core::{ConfigError, GeodesyProvider, Inverse, LatLon};
use std::f64::consts::PI;
use tracing::warn;

/// Iteration controls for [`Vincenty`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VincentyConfig {
    /// Convergence threshold on the auxiliary longitude / arc length,
    /// radians. Default: 1e-12 (well under a millimetre).
    pub tolerance: f64,
    /// Upper bound on iterations before giving up. Default: 200.
    pub max_iterations: u32,
}

impl Default for VincentyConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}

impl VincentyConfig {
    /// Check that the tolerance is usable and the budget non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

/// Geodesy provider using Vincenty's iterative solutions.
///
/// Accurate to well under a millimetre on the ellipsoid. The inverse
/// problem may fail to converge for nearly antipodal points; in that case
/// the last iterate is used and a warning is logged.
///
/// # Examples
///
/// ```
/// use mgrid_core::{GeodesyProvider, LatLon};
/// use mgrid_geodesy::Vincenty;
///
/// let v = Vincenty::wgs84();
/// let origin = LatLon::new(0.0, 0.0).unwrap();
/// let east = v.project(origin, 1000.0, 90.0);
/// let inv = v.inverse(origin, east);
/// assert!((inv.distance_m - 1000.0).abs() < 1e-6);
/// assert!((inv.azimuth_fwd - 90.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Vincenty {
    ellipsoid: Ellipsoid,
    config: VincentyConfig,
}

impl Vincenty {
    /// Vincenty on WGS84 with default iteration controls.
    pub fn wgs84() -> Self {
        Self {
            ellipsoid: WGS84,
            config: VincentyConfig::default(),
        }
    }

    /// Vincenty on WGS84 with the given iteration controls.
    pub fn with_config(config: VincentyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ellipsoid: WGS84,
            config,
        })
    }

    /// The iteration controls in effect.
    pub fn config(&self) -> &VincentyConfig {
        &self.config
    }

    /// Reduced latitude `(sin U, cos U)`.
    fn reduced(&self, lat: f64) -> (f64, f64) {
        let u = ((1.0 - self.ellipsoid.f) * lat.to_radians().tan()).atan();
        u.sin_cos()
    }

    /// Series coefficients `A` and `B` for a given `cos² α`.
    fn series(&self, cos_sq_alpha: f64) -> (f64, f64) {
        let Ellipsoid { a, .. } = self.ellipsoid;
        let b = self.ellipsoid.b();
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        (big_a, big_b)
    }
}

impl Default for Vincenty {
    fn default() -> Self {
        Self::wgs84()
    }
}

fn delta_sigma(big_b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sm: f64) -> f64 {
    big_b
        * sin_sigma
        * (cos_2sm
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sm * cos_2sm)
                    - big_b / 6.0
                        * cos_2sm
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sm * cos_2sm)))
}

/// Wrap degrees into `[-180, 180)`, keeping +180 as +180.
fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Wrap degrees into `[0, 360)`.
fn wrap_azimuth(az: f64) -> f64 {
    let w = az.rem_euclid(360.0);
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

impl GeodesyProvider for Vincenty {
    fn project(&self, origin: LatLon, distance_m: f64, azimuth_deg: f64) -> LatLon {
        let f = self.ellipsoid.f;
        let b = self.ellipsoid.b();
        let (sin_a1, cos_a1) = azimuth_deg.to_radians().sin_cos();
        let (sin_u1, cos_u1) = self.reduced(origin.latitude);

        let sigma1 = sin_u1.atan2(cos_u1 * cos_a1);
        let sin_alpha = cos_u1 * sin_a1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let (big_a, big_b) = self.series(cos_sq_alpha);

        let s_over_ba = distance_m / (b * big_a);
        let mut sigma = s_over_ba;
        for _ in 0..self.config.max_iterations {
            let cos_2sm = (2.0 * sigma1 + sigma).cos();
            let (sin_s, cos_s) = sigma.sin_cos();
            let next = s_over_ba + delta_sigma(big_b, sin_s, cos_s, cos_2sm);
            let done = (next - sigma).abs() <= self.config.tolerance;
            sigma = next;
            if done {
                break;
            }
        }

        let cos_2sm = (2.0 * sigma1 + sigma).cos();
        let (sin_s, cos_s) = sigma.sin_cos();
        let x = sin_u1 * sin_s - cos_u1 * cos_s * cos_a1;
        let lat2 = (sin_u1 * cos_s + cos_u1 * sin_s * cos_a1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + x * x).sqrt());
        let lambda = (sin_s * sin_a1).atan2(cos_u1 * cos_s - sin_u1 * sin_s * cos_a1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma + c * sin_s * (cos_2sm + c * cos_s * (-1.0 + 2.0 * cos_2sm * cos_2sm)));

        LatLon {
            latitude: lat2.to_degrees(),
            longitude: wrap_longitude(origin.longitude + l.to_degrees()),
        }
    }

    fn inverse(&self, from: LatLon, to: LatLon) -> Inverse {
        let f = self.ellipsoid.f;
        let b = self.ellipsoid.b();
        let l = {
            let raw = (to.longitude - from.longitude).to_radians();
            (raw + PI).rem_euclid(2.0 * PI) - PI
        };
        let (sin_u1, cos_u1) = self.reduced(from.latitude);
        let (sin_u2, cos_u2) = self.reduced(to.latitude);

        let mut lambda = l;
        let mut converged = false;
        let (mut sin_s, mut cos_s, mut sigma) = (0.0, 1.0, 0.0);
        let (mut cos_sq_alpha, mut cos_2sm) = (1.0, 0.0);
        let (mut sin_l, mut cos_l) = lambda.sin_cos();

        for _ in 0..self.config.max_iterations {
            (sin_l, cos_l) = lambda.sin_cos();
            let t = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_l;
            let sin_sq_sigma = (cos_u2 * sin_l).powi(2) + t * t;
            if sin_sq_sigma < 1e-24 {
                // Coincident points.
                return Inverse {
                    distance_m: 0.0,
                    azimuth_fwd: 0.0,
                    azimuth_back: 180.0,
                };
            }
            sin_s = sin_sq_sigma.sqrt();
            cos_s = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_l;
            sigma = sin_s.atan2(cos_s);
            let sin_alpha = cos_u1 * cos_u2 * sin_l / sin_s;
            cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // Equatorial lines have cos² α = 0.
            cos_2sm = if cos_sq_alpha != 0.0 {
                cos_s - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                0.0
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_s * (cos_2sm + c * cos_s * (-1.0 + 2.0 * cos_2sm * cos_2sm)));
            if (lambda - prev).abs() <= self.config.tolerance {
                converged = true;
                (sin_l, cos_l) = lambda.sin_cos();
                break;
            }
        }
        if !converged {
            warn!(
                from = %from,
                to = %to,
                max_iterations = self.config.max_iterations,
                "vincenty inverse did not converge, using last iterate"
            );
        }

        let (big_a, big_b) = self.series(cos_sq_alpha);
        let distance_m = b * big_a * (sigma - delta_sigma(big_b, sin_s, cos_s, cos_2sm));
        let az1 = (cos_u2 * sin_l).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_l);
        let az2 = (cos_u1 * sin_l).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_l);

        Inverse {
            distance_m,
            azimuth_fwd: wrap_azimuth(az1.to_degrees()),
            azimuth_back: wrap_azimuth(az2.to_degrees() + 180.0),
        }
    }
}
