//! Lesson-1 warm-up drills: small, stateless string and array exercises.
//!
//! Each drill is a pure function; the `p1_homework` binary walks through
//! them with the lesson's original inputs.

pub mod arrays;
pub mod strings;
