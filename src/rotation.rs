use crate::util;
use nalgebra::UnitComplex;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};
use uom::si::angle::radian;
use uom::si::f64::Angle;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

/// An orientation (or a change in orientation) in the plane.
///
/// Positive angles are counter-clockwise, so that rotating the x axis by a quarter turn yields the
/// y axis.
///
/// The angle is stored exactly as given and is never wrapped into a canonical range. As a
/// consequence, `==` compares the raw stored angles: a rotation of 0° is _not_ equal to a
/// rotation of 360°, even though both describe the same orientation. Use
/// [`Rotation2d::normalized`] before comparing if that matters, or compare with the `approx`
/// macros, which treat whole turns as equal:
///
/// ```
/// use approx::assert_relative_eq;
/// use planar::Rotation2d;
///
/// let none = Rotation2d::from_degrees(0.);
/// let full = Rotation2d::from_degrees(360.);
///
/// assert_ne!(none, full);
/// assert_relative_eq!(none, full);
/// assert_eq!(none, full.normalized());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation2d {
    radians: f64,
}

impl Rotation2d {
    /// No rotation at all.
    pub const ZERO: Self = Self::from_radians(0.);

    /// A quarter turn clockwise (-π/2).
    pub const CW_PI_2: Self = Self::from_radians(-FRAC_PI_2);
    /// A quarter turn clockwise (-90°).
    pub const CW_90_DEG: Self = Self::CW_PI_2;

    /// A quarter turn counter-clockwise (π/2).
    pub const CCW_PI_2: Self = Self::from_radians(FRAC_PI_2);
    /// A quarter turn counter-clockwise (90°).
    pub const CCW_90_DEG: Self = Self::CCW_PI_2;

    /// A half turn (π).
    pub const PI: Self = Self::from_radians(PI);
    /// A half turn (180°).
    pub const HALF_TURN_180_DEG: Self = Self::PI;

    /// A full turn (2π).
    ///
    /// Note that this is _not_ `==` to [`Rotation2d::ZERO`]; see the type-level docs.
    pub const TAU: Self = Self::from_radians(TAU);
    /// A full turn (360°).
    pub const FULL_TURN: Self = Self::TAU;

    /// Constructs a rotation of `radians`, taken as-is.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Constructs a rotation of `degrees`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Constructs a rotation of `rotations` whole turns, so `1.0` is 360°.
    #[must_use]
    pub fn from_rotations(rotations: f64) -> Self {
        Self::from_radians(rotations * TAU)
    }

    /// Constructs a rotation from a unit-checked [`Angle`].
    ///
    /// ```
    /// use planar::Rotation2d;
    /// use uom::si::{angle::degree, f64::Angle};
    ///
    /// let rotation = Rotation2d::from_angle(Angle::new::<degree>(90.));
    /// assert_eq!(rotation, Rotation2d::from_radians(Angle::new::<degree>(90.).value));
    /// ```
    #[must_use]
    pub fn from_angle(angle: impl Into<Angle>) -> Self {
        Self::from_radians(angle.into().get::<radian>())
    }

    /// Constructs the rotation that turns the positive x axis onto the direction of `(x, y)`.
    ///
    /// The vector need not be of unit length. Returns `None` if it has no direction, that is, if
    /// it is the zero vector or if either component is not finite.
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use planar::Rotation2d;
    ///
    /// assert_relative_eq!(
    ///     Rotation2d::from_components(0., 3.).expect("(0, 3) has a direction"),
    ///     Rotation2d::CCW_90_DEG,
    /// );
    /// assert_eq!(Rotation2d::from_components(0., 0.), None);
    /// ```
    #[must_use]
    pub fn from_components(x: f64, y: f64) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() || (x == 0. && y == 0.) {
            return None;
        }
        Some(Self::from_radians(y.atan2(x)))
    }

    /// Returns the angle of this rotation in radians, exactly as it was constructed.
    #[doc(alias = "get_radians")]
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.radians
    }

    /// Returns the angle of this rotation in radians.
    ///
    /// This is the same as [`Rotation2d::heading`].
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the angle of this rotation in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Returns the angle of this rotation in whole turns.
    #[must_use]
    pub fn rotations(&self) -> f64 {
        self.radians / TAU
    }

    /// Returns the angle of this rotation as a unit-checked [`Angle`].
    #[must_use]
    pub fn angle(&self) -> Angle {
        Angle::new::<radian>(self.radians)
    }

    /// Returns the sine of the angle of this rotation.
    #[must_use]
    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    /// Returns the cosine of the angle of this rotation.
    #[must_use]
    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    /// Returns the tangent of the angle of this rotation.
    #[must_use]
    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }

    /// Scales the angle of this rotation by `scalar`.
    ///
    /// This is the same as `self * scalar`.
    #[must_use]
    pub fn times(&self, scalar: f64) -> Self {
        Self::from_radians(self.radians * scalar)
    }

    /// Applies `other` on top of this rotation.
    ///
    /// Planar rotations commute, so this is simply the sum of the two angles, and it is the same
    /// as `self + other`.
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use planar::Rotation2d;
    ///
    /// let a = Rotation2d::from_degrees(30.);
    /// let b = Rotation2d::from_degrees(60.);
    ///
    /// assert_relative_eq!(a.rotate_by(b), Rotation2d::CCW_90_DEG);
    /// assert_eq!(a.rotate_by(b), b.rotate_by(a));
    /// ```
    #[must_use]
    pub fn rotate_by(&self, other: Self) -> Self {
        Self::from_radians(self.radians + other.radians)
    }

    /// Returns the equal-but-opposite rotation to this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from_radians(-self.radians)
    }

    /// Returns the equivalent rotation with its angle in [-π, π).
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::from_radians(util::to_signed_range(self.radians))
    }

    /// Interpolates between this rotation and `end` along the shorter arc between them.
    ///
    /// `t = 0` yields `self` and `t = 1` yields a rotation equivalent to `end` (though not
    /// necessarily `==` to it, since the result may differ by whole turns).
    ///
    /// The value for `t` is not restricted to the range [0, 1].
    #[must_use]
    pub fn interpolate(&self, end: Self, t: f64) -> Self {
        *self + (end - *self).normalized() * t
    }

    /// Returns the equivalent [`UnitComplex`] for rotating `nalgebra` vectors.
    pub(crate) fn to_unit_complex(self) -> UnitComplex<f64> {
        UnitComplex::new(self.radians)
    }
}

impl From<Angle> for Rotation2d {
    fn from(angle: Angle) -> Self {
        Self::from_angle(angle)
    }
}

impl Display for Rotation2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation2d({} rad, {}°)", self.radians, self.degrees())
    }
}

impl Neg for Rotation2d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

impl Add<Self> for Rotation2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.rotate_by(rhs)
    }
}

impl Sub<Self> for Rotation2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.rotate_by(-rhs)
    }
}

impl Mul<f64> for Rotation2d {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        self.times(scalar)
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Rotation2d {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        // this is very accurate in radians
        0.000_000_001
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        util::angle_abs_diff_eq(self.radians, other.radians, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Rotation2d {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        util::angle_relative_eq(self.radians, other.radians, epsilon, max_relative)
    }
}
