//! Perifocal (PQW) to reference-frame transform.
//!
//! Reference frame: right-handed, Z along the orbit normal at zero
//! inclination. Renderers with a Y-up convention remap once at their side.

use nalgebra::{Rotation3, Vector3};

use super::elements::OrbitalElements;

/// Position in the perifocal frame (x toward periapsis, z = 0).
pub fn perifocal_position(e_anom: f64, sma: f64, ecc: f64) -> Vector3<f64> {
    Vector3::new(
        sma * (e_anom.cos() - ecc),
        sma * (1.0 - ecc * ecc).sqrt() * e_anom.sin(),
        0.0,
    )
}

/// Rotation from perifocal to reference frame: Rz(Ω) · Rx(i) · Rz(ω).
///
/// Applied right to left: ω orients periapsis in the orbital plane, i tilts
/// the plane about the reference X axis, Ω swings the node about Z. The order
/// is part of the contract.
pub fn perifocal_to_reference(el: &OrbitalElements) -> Rotation3<f64> {
    let argp = Rotation3::from_axis_angle(&Vector3::z_axis(), el.argp.to_radians());
    let inc = Rotation3::from_axis_angle(&Vector3::x_axis(), el.inc.to_radians());
    let raan = Rotation3::from_axis_angle(&Vector3::z_axis(), el.raan.to_radians());
    raan * inc * argp
}

/// Eccentric anomaly plus elements → reference-frame position, same units as `sma`.
pub fn to_reference(e_anom: f64, el: &OrbitalElements) -> Vector3<f64> {
    perifocal_to_reference(el) * perifocal_position(e_anom, el.sma, el.ecc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn flat(sma: f64, ecc: f64) -> OrbitalElements {
        OrbitalElements { sma, ecc, inc: 0.0, argp: 0.0, raan: 0.0 }
    }

    #[test]
    fn periapsis_on_x_axis() {
        let p = to_reference(0.0, &flat(12.0, 0.3));
        assert_relative_eq!(p, Vector3::new(8.4, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn apoapsis_on_negative_x() {
        let p = to_reference(PI, &flat(12.0, 0.3));
        assert_relative_eq!(p, Vector3::new(-15.6, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn semi_minor_axis_at_quarter() {
        let el = flat(10.0, 0.6);
        let p = perifocal_position(FRAC_PI_2, el.sma, el.ecc);
        // b = a·sqrt(1 - e²) = 8
        assert_relative_eq!(p, Vector3::new(-6.0, 8.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_angles_are_identity() {
        let r = perifocal_to_reference(&flat(12.0, 0.3));
        assert_relative_eq!(r.matrix(), Rotation3::<f64>::identity().matrix(), epsilon = 1e-15);
    }

    #[test]
    fn inclination_tilts_about_x() {
        let el = OrbitalElements { inc: 90.0, ..flat(10.0, 0.0) };
        // Periapsis on X is unaffected, the +Y point of the orbit goes to +Z
        assert_relative_eq!(to_reference(0.0, &el), Vector3::new(10.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(
            to_reference(FRAC_PI_2, &el),
            Vector3::new(0.0, 0.0, 10.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn argument_of_periapsis_rotates_in_plane() {
        let el = OrbitalElements { argp: 90.0, ..flat(12.0, 0.3) };
        assert_relative_eq!(to_reference(0.0, &el), Vector3::new(0.0, 8.4, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotation_order_matters() {
        // argp = 90 then inc = 90: periapsis lifted out of plane to +Z.
        let el = OrbitalElements { argp: 90.0, inc: 90.0, ..flat(12.0, 0.3) };
        assert_relative_eq!(to_reference(0.0, &el), Vector3::new(0.0, 0.0, 8.4), epsilon = 1e-12);

        // Same rotations in the wrong order leave periapsis in the XY plane.
        let wrong = Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2)
            * Vector3::new(8.4, 0.0, 0.0);
        assert!(wrong.z.abs() < 1e-12);
    }

    #[test]
    fn node_rotates_about_z() {
        let el = OrbitalElements { raan: 90.0, inc: 45.0, ..flat(12.0, 0.3) };
        // Periapsis sits on the line of nodes when argp = 0
        assert_relative_eq!(to_reference(0.0, &el), Vector3::new(0.0, 8.4, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_distance() {
        let el = OrbitalElements { sma: 12.0, ecc: 0.3, inc: 63.4, argp: 270.0, raan: 123.0 };
        for e_anom in [0.0, 0.7, 2.1, 4.0, 5.9] {
            let p = to_reference(e_anom, &el);
            let r = el.sma * (1.0 - el.ecc * e_anom.cos());
            assert_relative_eq!(p.norm(), r, epsilon = 1e-12);
        }
    }
}
