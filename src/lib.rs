//! This library provides small, hard-to-misuse rigid body transforms in the plane.
//!
//! There are three types, all of them plain `Copy` values that are never modified once
//! constructed:
//!
//! - [`Rotation2d`] is an orientation (or a change in orientation), ie, an angle;
//! - [`Translation2d`] is a position (or a displacement), ie, an `(x, y)` pair; and
//! - [`Pose2d`] combines the two into the position and facing direction of an object.
//!
//! Angles are counter-clockwise and measured from the positive x axis. Operations compose the
//! usual way for planar rigid bodies: rotations add, translations rotate about the origin (or
//! about any pivot point), and poses carry both parts along.
//!
//! None of the operations can fail. Non-finite inputs (and division by zero) follow the usual
//! IEEE-754 rules and propagate into the results rather than being reported as errors.
//!
//! # Examples
//!
//! A robot sits at `(1, 1)`, facing along the x axis. The field it is on is turned a quarter
//! turn counter-clockwise about the origin, and then the robot spins around on the spot:
//!
//! ```
//! use approx::assert_relative_eq;
//! use planar::{Pose2d, Rotation2d, Translation2d};
//!
//! let robot = Pose2d::new(1., 1., Rotation2d::ZERO);
//!
//! let after_field_turn = robot.rotate_by(Rotation2d::from_degrees(90.));
//! assert_relative_eq!(
//!     after_field_turn.translation(),
//!     Translation2d::new(-1., 1.),
//!     epsilon = 1e-12
//! );
//!
//! let after_spin = after_field_turn.rotate_around(
//!     after_field_turn.translation(),
//!     Rotation2d::from_rotations(0.5),
//! );
//! assert_eq!(after_spin.translation(), after_field_turn.translation());
//! assert_relative_eq!(after_spin.rotation(), Rotation2d::from_degrees(270.));
//! ```
//!
//! # Comparing values
//!
//! `==` is exact: two values are equal only if every stored `f64` is equal. In particular,
//! rotations are compared by their stored angle, so a rotation of 0° is not `==` to one of 360°.
//! With the `approx` feature (enabled by default), all types also implement
//! `approx::AbsDiffEq` and `approx::RelativeEq`; those comparisons allow for rounding and
//! treat rotations that differ by whole turns as equal.

mod pose;
mod rotation;
mod translation;
mod util;

pub use pose::Pose2d;
pub use rotation::Rotation2d;
pub use translation::Translation2d;
