use std::f64::consts::FRAC_PI_2;

/// Projects a polar coordinate onto the x axis.
///
/// The standard trigonometric circle is rotated by -90 degrees so that
/// angle 0 points straight up from the chart center, matching conventional
/// radar-chart orientation.
#[must_use]
pub fn polar_to_x(angle: f64, distance: f64) -> f64 {
    (angle - FRAC_PI_2).cos() * distance
}

/// Projects a polar coordinate onto the y axis. See [`polar_to_x`].
#[must_use]
pub fn polar_to_y(angle: f64, distance: f64) -> f64 {
    (angle - FRAC_PI_2).sin() * distance
}

#[cfg(test)]
mod tests {
    use super::{polar_to_x, polar_to_y};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn angle_zero_points_north() {
        assert_relative_eq!(polar_to_x(0.0, 50.0), 0.0, epsilon = 1e-9);
        assert_relative_eq!(polar_to_y(0.0, 50.0), -50.0, epsilon = 1e-9);
    }

    #[test]
    fn quarter_turn_points_east() {
        assert_relative_eq!(polar_to_x(PI / 2.0, 10.0), 10.0, epsilon = 1e-9);
        assert_relative_eq!(polar_to_y(PI / 2.0, 10.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_distance_collapses_to_origin() {
        for i in 0..16 {
            let angle = 2.0 * PI * f64::from(i) / 16.0;
            assert_eq!(polar_to_x(angle, 0.0), 0.0);
            assert_eq!(polar_to_y(angle, 0.0), 0.0);
        }
    }
}
