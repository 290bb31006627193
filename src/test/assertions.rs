/// Asserts that two floating-point values are approximately equal.
///
/// # Parameters
/// - `$a`, `$b`: Values to compare (coerced to `f64`).
/// - `tol = $tol`: *(optional)* Absolute tolerance. Defaults to
///   [`crate::test::DEFAULT_TOLERANCE`].
/// - `$msg`: *(optional)* Custom failure message, with `format!` arguments.
///
/// # Panics
/// If `|a - b| > tol`, or either value is NaN.
///
/// # Examples
/// ```
/// # use polarplot::assert_close;
/// assert_close!(0.1 + 0.2, 0.3);
/// assert_close!(2.0_f64.sqrt() * 2.0, 2.828, tol = 1e-3, "2√2 to {} places", 3);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr, tol = $tol:expr $(, $msg:literal $(, $args:expr)* )? $(,)?) => { #[allow(clippy::float_cmp)] {
        #[allow(unused_mut, unused_assignments)] let mut msg = "Values not close".to_string();
        $( msg = format!($msg $(, $args)*); )?

        let (a, b, tol): (f64, f64, f64) = ($a, $b, $tol);
        assert!(
            a == b || (a - b).abs() <= tol,
            "{msg}: {a} != {b} (tolerance {tol})"
        );
    }};

    ($a:expr, $b:expr $(, $msg:literal $(, $args:expr)* )? $(,)?) => {
        $crate::assert_close!($a, $b, tol = $crate::test::DEFAULT_TOLERANCE $(, $msg $(, $args)* )?)
    };
}

/// Asserts that two slices of floating-point values are approximately equal element-wise.
///
/// - Element-wise [`crate::assert_close`].
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements differ by more than the tolerance.
///
/// # Examples
/// ```
/// # use polarplot::assert_all_close;
/// let a = [1.0, 2.0, 3.0];
/// let b = [1.0, 2.0 + 1e-12, 3.0];
/// assert_all_close!(a, b);
/// assert_all_close!(a, [1.01, 2.0, 2.99], tol = 0.1);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr, tol = $tol:expr $(,)?) => {{
        let (src, dst) = (&$src, &$dst);
        assert_eq!(src.len(), dst.len(), "{} elements - length mismatch", src.len());

        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            $crate::assert_close!(*s, *d, tol = $tol, "src[{}]", i);
        }
    }};

    ($src:expr, $dst:expr $(,)?) => {
        $crate::assert_all_close!($src, $dst, tol = $crate::test::DEFAULT_TOLERANCE)
    };
}

/// Asserts that a display-space point lies on a polar curve.
///
/// The point is mapped back to math space through the coordinate map, then checked
/// against the curve's implicit Cartesian equation.
///
/// If the test fails and the `plotting` feature is enabled, a plot of the curve with the
/// offending point marked is written to `target/plot_output`.
///
/// # Syntax
///
/// `assert_on_curve!(<curve>, <coord map>, <point> [, tol = <tolerance>])`
///
/// # Panics
/// If the implicit residual exceeds the tolerance (default `1e-6`).
#[macro_export]
macro_rules! assert_on_curve {
    ($curve:expr, $map:expr, $point:expr $(, tol = $tol:expr)? $(,)?) => {{
        #[allow(unused_imports)] use $crate::curve::PolarCurve;

        let curve = &$curve;
        let map = &$map;
        let point: $crate::value::Point = $point;
        #[allow(unused_mut)] let mut tol: f64 = 1e-6; $( tol = $tol; )?

        let math = map.invert(&point);
        let residual = curve.implicit_residual(&math);

        if !(residual.abs() <= tol) {
            #[allow(unused_mut)] let mut msg = format!(
                "Point ({:.6}, {:.6}) is not on {} (residual {residual:e} > {tol:e})",
                math.x, math.y, curve.equation()
            );

            #[cfg(feature = "plotting")]
            {
                let mut figure = $crate::figure::Figure::new(curve.equation(), None);
                let curve_points = $crate::sampler::sample(
                    curve, 0.0, 2.0 * ::std::f64::consts::PI, 720, map,
                );
                figure.push_polyline(
                    curve_points.points(),
                    $crate::figure::Style::stroke($crate::figure::Color::Blue, 2.0),
                );
                figure.push_marker($crate::figure::Marker::new(point, $crate::figure::Color::Red));
                if let Ok(path) = $crate::render!(figure, prefix = "assert_on_curve") {
                    msg = format!("{msg}\nFailure plot saved to: {}", path.display());
                }
            }

            panic!("{msg}");
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{coords::CoordMap, curve::Lemniscate, value::Point};

    #[test]
    fn test_assert_close_macro() {
        assert_close!(1.0, 1.0 + 1e-12);
        assert_close!(1.0, 1.0005, tol = 1e-3);
        assert_close!(2.0, 2.0, "with message {}", 1);
    }

    #[test]
    #[should_panic(expected = "Values not close")]
    fn test_assert_close_fails() {
        assert_close!(1.0, 1.1);
    }

    #[test]
    #[should_panic(expected = "custom 7")]
    fn test_assert_close_custom_message() {
        assert_close!(1.0, 2.0, tol = 0.5, "custom {}", 7);
    }

    #[test]
    fn test_assert_all_close_macro() {
        let a = vec![1.0, 2.0];
        assert_all_close!(a, [1.0, 2.0]);
        assert_all_close!(a, [1.05, 1.95], tol = 0.1);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_assert_all_close_length() {
        assert_all_close!([1.0, 2.0], [1.0]);
    }

    #[test]
    fn test_assert_on_curve_macro() {
        // (2, 0) is the tip of the right lobe of r² = 4cos(2θ)
        assert_on_curve!(Lemniscate::default(), CoordMap::identity(), Point::new(2.0, 0.0));
    }

    #[test]
    #[cfg(not(feature = "plotting"))]
    #[should_panic(expected = "is not on")]
    fn test_assert_on_curve_fails() {
        assert_on_curve!(Lemniscate::default(), CoordMap::identity(), Point::new(1.0, 1.0));
    }

    #[test]
    #[cfg(feature = "plotting")]
    fn test_assert_on_curve_fails_with_plot() {
        let result = std::panic::catch_unwind(|| {
            assert_on_curve!(Lemniscate::default(), CoordMap::identity(), Point::new(1.0, 1.0));
        });

        let payload = result.unwrap_err();
        let msg = payload.downcast_ref::<String>().unwrap();
        assert!(msg.contains("is not on"), "{msg}");
        assert!(msg.contains("Failure plot saved to"), "{msg}");

        let path = msg.rsplit("Failure plot saved to: ").next().unwrap();
        assert!(std::path::Path::new(path.trim()).exists(), "{path}");
    }
}
