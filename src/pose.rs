use crate::{Rotation2d, Translation2d};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Div, Mul};

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

/// The pose (ie, position and orientation) of an object in the plane.
///
/// A pose is made up of a [`Translation2d`] giving the object's position and a [`Rotation2d`]
/// giving the direction the object is facing, measured counter-clockwise from the positive x
/// axis. Both parts are always present; the pose at the origin facing along the x axis is
/// [`Pose2d::ZERO`] (which is also what [`Default`] gives you).
///
/// Poses are plain values. Every operation returns a new pose rather than modifying the one it
/// was called on.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use planar::{Pose2d, Rotation2d, Translation2d};
///
/// // a robot at (1, 1), facing along the x axis
/// let pose = Pose2d::new(1., 1., Rotation2d::ZERO);
///
/// // a quarter turn of the whole field about the origin moves and turns the robot
/// let turned = pose.rotate_by(Rotation2d::from_degrees(90.));
/// assert_relative_eq!(turned.translation(), Translation2d::new(-1., 1.), epsilon = 1e-12);
/// assert_relative_eq!(turned.rotation(), Rotation2d::CCW_90_DEG);
///
/// // turning about the robot's own position only changes where it faces
/// let spun = pose.rotate_around(pose.translation(), Rotation2d::PI);
/// assert_eq!(spun.translation(), pose.translation());
/// assert_eq!(spun.rotation(), Rotation2d::PI);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2d {
    translation: Translation2d,
    rotation: Rotation2d,
}

impl Pose2d {
    /// The pose at the origin, facing along the positive x axis.
    pub const ZERO: Self = Self::from_parts(Translation2d::ZERO, Rotation2d::ZERO);

    /// Constructs a pose at `(x, y)` facing in the direction of `rotation`.
    #[must_use]
    pub const fn new(x: f64, y: f64, rotation: Rotation2d) -> Self {
        Self::from_parts(Translation2d::new(x, y), rotation)
    }

    /// Constructs a pose from a position and orientation.
    #[must_use]
    pub const fn from_parts(translation: Translation2d, rotation: Rotation2d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Returns the position of the object with this pose.
    #[must_use]
    pub fn translation(&self) -> Translation2d {
        self.translation
    }

    /// Returns the x component of the position of the object with this pose.
    #[doc(alias = "get_x")]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.translation.x()
    }

    /// Returns the y component of the position of the object with this pose.
    #[doc(alias = "get_y")]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.translation.y()
    }

    /// Returns the orientation of the object with this pose.
    #[doc(alias = "heading")]
    #[must_use]
    pub fn rotation(&self) -> Rotation2d {
        self.rotation
    }

    /// Scales both parts of this pose by `scalar`.
    ///
    /// The position is scaled component-wise and the orientation has its angle scaled (see
    /// [`Rotation2d::times`]). This is the same as `self * scalar`.
    #[must_use]
    pub fn times(&self, scalar: f64) -> Self {
        Self::from_parts(self.translation * scalar, self.rotation.times(scalar))
    }

    /// Rotates this pose counter-clockwise about the origin.
    ///
    /// The position is rotated about `(0, 0)` and `rotation` is applied on top of the
    /// orientation.
    #[must_use]
    pub fn rotate_by(&self, rotation: Rotation2d) -> Self {
        Self::from_parts(
            self.translation.rotate_by(rotation),
            self.rotation.rotate_by(rotation),
        )
    }

    /// Rotates this pose counter-clockwise about `point`.
    ///
    /// The position is rotated about `point` (see [`Translation2d::rotate_around`]) and
    /// `rotation` is applied on top of the orientation. Rotating about the pose's own position
    /// therefore leaves the position untouched.
    #[must_use]
    pub fn rotate_around(&self, point: Translation2d, rotation: Rotation2d) -> Self {
        Self::from_parts(
            self.translation.rotate_around(point, rotation),
            self.rotation.rotate_by(rotation),
        )
    }
}

impl From<(Translation2d, Rotation2d)> for Pose2d {
    fn from((translation, rotation): (Translation2d, Rotation2d)) -> Self {
        Self::from_parts(translation, rotation)
    }
}

impl Mul<f64> for Pose2d {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        self.times(scalar)
    }
}

// dividing is scaling by the reciprocal, so dividing by zero gives infinities (or NaN for zero
// components) rather than an error
impl Div<f64> for Pose2d {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        self.times(1. / scalar)
    }
}

impl Display for Pose2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Pose2d({}, {})", self.translation, self.rotation)
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Pose2d {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Translation2d::default_epsilon().min(Rotation2d::default_epsilon())
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.translation.abs_diff_eq(&other.translation, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Pose2d {
    fn default_max_relative() -> Self::Epsilon {
        Translation2d::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.translation
            .relative_eq(&other.translation, epsilon, max_relative)
            && self
                .rotation
                .relative_eq(&other.rotation, epsilon, max_relative)
    }
}
