use crate::Rotation2d;
use nalgebra::Vector2;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

/// A position in the plane, or a displacement between two positions.
///
/// Components are plain `f64`s in whatever length unit the caller works in; the type does not
/// attach or check a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation2d {
    pub(crate) inner: Vector2<f64>,
}

impl Translation2d {
    /// The origin.
    pub const ZERO: Self = Self::new(0., 0.);

    /// Constructs a translation of `x` along the x axis and `y` along the y axis.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            inner: Vector2::new(x, y),
        }
    }

    /// Constructs a translation from the components of an `nalgebra` vector.
    #[must_use]
    pub fn from_nalgebra_vector(vector: Vector2<f64>) -> Self {
        Self { inner: vector }
    }

    /// Returns the components of this translation as an `nalgebra` vector.
    #[must_use]
    pub fn to_nalgebra_vector(&self) -> Vector2<f64> {
        self.inner
    }

    /// Returns the component along the x axis.
    #[doc(alias = "get_x")]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Returns the component along the y axis.
    #[doc(alias = "get_y")]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Computes the distance from the origin to this translation.
    #[doc(alias = "magnitude")]
    #[doc(alias = "length")]
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.inner.norm()
    }

    /// Computes the distance between this translation and `other`.
    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        (other.inner - self.inner).norm()
    }

    /// Returns the direction of this translation as seen from the origin.
    ///
    /// The zero vector has no direction and yields [`Rotation2d::ZERO`], whatever the signs of
    /// its zero components. Use [`Rotation2d::from_components`] to detect that case instead.
    #[must_use]
    pub fn angle(&self) -> Rotation2d {
        // atan2 maps (-0, ±0) to ±π
        if self.inner.x == 0. && self.inner.y == 0. {
            return Rotation2d::ZERO;
        }
        Rotation2d::from_radians(self.inner.y.atan2(self.inner.x))
    }

    /// Rotates this translation counter-clockwise about the origin.
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use planar::{Rotation2d, Translation2d};
    ///
    /// assert_relative_eq!(
    ///     Translation2d::new(2., 0.).rotate_by(Rotation2d::CCW_90_DEG),
    ///     Translation2d::new(0., 2.),
    ///     epsilon = 1e-12,
    /// );
    /// ```
    #[must_use]
    pub fn rotate_by(&self, rotation: Rotation2d) -> Self {
        Self {
            inner: rotation.to_unit_complex() * self.inner,
        }
    }

    /// Rotates this translation counter-clockwise about `point`.
    ///
    /// That is, the translation is first moved so that `point` is the origin, then rotated about
    /// the origin, and finally moved back.
    #[must_use]
    pub fn rotate_around(&self, point: Self, rotation: Rotation2d) -> Self {
        (*self - point).rotate_by(rotation) + point
    }
}

impl From<(f64, f64)> for Translation2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Neg for Translation2d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { inner: -self.inner }
    }
}

impl Add<Self> for Translation2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            inner: self.inner + rhs.inner,
        }
    }
}

impl Sub<Self> for Translation2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            inner: self.inner - rhs.inner,
        }
    }
}

impl Mul<f64> for Translation2d {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            inner: self.inner * scalar,
        }
    }
}

impl Div<f64> for Translation2d {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        Self {
            inner: self.inner / scalar,
        }
    }
}

impl Display for Translation2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Translation2d(x: {}, y: {})", self.inner.x, self.inner.y)
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Translation2d {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Vector2::<f64>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Translation2d {
    fn default_max_relative() -> Self::Epsilon {
        Vector2::<f64>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.inner.relative_eq(&other.inner, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::Translation2d;
    use crate::Rotation2d;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;
    use quickcheck::{quickcheck, Arbitrary};
    use rstest::rstest;
    use std::f64::consts::SQRT_2;

    fn d(degrees: f64) -> Rotation2d {
        Rotation2d::from_degrees(degrees)
    }

    impl quickcheck::Arbitrary for Translation2d {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            // quickcheck will give us awkward f64 values -- we ignore those
            let mut component = || loop {
                match f64::arbitrary(g) {
                    0. => break 0.,
                    f if f.is_normal() => break f % 1e6,
                    _ => {}
                }
            };
            let x = component();
            let y = component();
            Self::new(x, y)
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let Self { inner } = *self;
            if inner.y == 0. {
                Box::new(inner.x.shrink().map(|x| Self::new(x, 0.)))
            } else {
                Box::new(inner.y.shrink().map(move |y| Self::new(inner.x, y)))
            }
        }
    }

    #[test]
    fn accessors_return_components() {
        let t = Translation2d::new(3., -4.);
        assert_eq!(t.x(), 3.);
        assert_eq!(t.y(), -4.);
        assert_eq!(t.norm(), 5.);
        assert_eq!(t.to_nalgebra_vector(), Vector2::new(3., -4.));
        assert_eq!(Translation2d::from_nalgebra_vector(Vector2::new(3., -4.)), t);
        assert_eq!(Translation2d::from((3., -4.)), t);
    }

    #[test]
    fn zero_is_the_default() {
        assert_eq!(Translation2d::default(), Translation2d::ZERO);
        assert_eq!(Translation2d::ZERO.norm(), 0.);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Translation2d::new(1., 1.);
        let b = Translation2d::new(4., 5.);
        assert_eq!(a.distance(b), 5.);
        assert_eq!(b.distance(a), 5.);
        assert_eq!(a.distance(a), 0.);
    }

    #[rstest]
    #[case(Translation2d::new(1., 0.), 0.)]
    #[case(Translation2d::new(0., 2.), 90.)]
    #[case(Translation2d::new(-3., 0.), 180.)]
    #[case(Translation2d::new(1., -1.), -45.)]
    #[case(Translation2d::ZERO, 0.)]
    #[case(Translation2d::new(-0., 0.), 0.)]
    #[case(Translation2d::new(-0., -0.), 0.)]
    #[case(-Translation2d::ZERO, 0.)]
    fn angle_points_along_the_vector(#[case] t: Translation2d, #[case] degrees: f64) {
        assert_relative_eq!(t.angle(), d(degrees));
    }

    #[rstest]
    #[case(Translation2d::ZERO)]
    #[case(Translation2d::new(-0., 0.))]
    #[case(Translation2d::new(0., -0.))]
    #[case(Translation2d::new(-0., -0.))]
    #[case(-Translation2d::ZERO)]
    #[case(Translation2d::ZERO * -1.)]
    fn angle_of_any_signed_zero_is_zero(#[case] t: Translation2d) {
        assert_eq!(t.angle(), Rotation2d::ZERO);
    }

    #[rstest]
    #[case(Translation2d::new(1., 1.), d(90.), Translation2d::new(-1., 1.))]
    #[case(Translation2d::new(1., 0.), d(90.), Translation2d::new(0., 1.))]
    #[case(Translation2d::new(1., 0.), d(-90.), Translation2d::new(0., -1.))]
    #[case(Translation2d::new(2., 3.), d(180.), Translation2d::new(-2., -3.))]
    #[case(Translation2d::new(2., 3.), d(360.), Translation2d::new(2., 3.))]
    #[case(Translation2d::new(1., 0.), d(45.), Translation2d::new(SQRT_2 / 2., SQRT_2 / 2.))]
    #[case(Translation2d::ZERO, d(123.), Translation2d::ZERO)]
    fn rotate_by_rotates_about_the_origin(
        #[case] t: Translation2d,
        #[case] rotation: Rotation2d,
        #[case] expected: Translation2d,
    ) {
        assert_relative_eq!(t.rotate_by(rotation), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(Translation2d::new(2., 1.), Translation2d::new(1., 1.), d(90.), Translation2d::new(1., 2.))]
    #[case(Translation2d::new(2., 1.), Translation2d::new(1., 1.), d(180.), Translation2d::new(0., 1.))]
    #[case(Translation2d::new(5., 5.), Translation2d::new(5., 5.), d(77.), Translation2d::new(5., 5.))]
    #[case(Translation2d::new(1., 1.), Translation2d::ZERO, d(90.), Translation2d::new(-1., 1.))]
    fn rotate_around_rotates_about_the_pivot(
        #[case] t: Translation2d,
        #[case] pivot: Translation2d,
        #[case] rotation: Rotation2d,
        #[case] expected: Translation2d,
    ) {
        assert_relative_eq!(t.rotate_around(pivot, rotation), expected, epsilon = 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = Translation2d::new(1., 2.);
        let b = Translation2d::new(-3., 0.5);
        assert_eq!(a + b, Translation2d::new(-2., 2.5));
        assert_eq!(a - b, Translation2d::new(4., 1.5));
        assert_eq!(-a, Translation2d::new(-1., -2.));
        assert_eq!(a * 2., Translation2d::new(2., 4.));
        assert_eq!(a / 2., Translation2d::new(0.5, 1.));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let t = Translation2d::new(1., -1.) / 0.;
        assert_eq!(t.x(), f64::INFINITY);
        assert_eq!(t.y(), f64::NEG_INFINITY);

        let t = Translation2d::ZERO / 0.;
        assert!(t.x().is_nan());
        assert!(t.y().is_nan());
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(Translation2d::new(1., -2.5), @"Translation2d(x: 1, y: -2.5)");
        insta::assert_snapshot!(Translation2d::ZERO, @"Translation2d(x: 0, y: 0)");
    }

    quickcheck! {
        fn rotate_by_preserves_norm(t: Translation2d, rotation: Rotation2d) -> () {
            assert_relative_eq!(
                t.rotate_by(rotation).norm(),
                t.norm(),
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        }

        fn rotate_by_inverse_roundtrips(t: Translation2d, rotation: Rotation2d) -> () {
            assert_relative_eq!(
                t.rotate_by(rotation).rotate_by(rotation.inverse()),
                t,
                epsilon = 1e-6,
                max_relative = 1e-12
            );
        }

        fn rotate_around_self_is_identity(t: Translation2d, rotation: Rotation2d) -> () {
            assert_eq!(t.rotate_around(t, rotation), t);
        }
    }
}
