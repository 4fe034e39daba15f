//! Kinematics integrator
//!
//! Semi-implicit Euler: velocity is updated from acceleration first, then
//! position from the new velocity. Position is advanced one axis at a time so
//! the collision pass can resolve Y before X moves.
//!
//! Control input never touches velocity directly; it is folded into
//! acceleration beforehand (see `control`), giving inertial thruster motion.

use super::body::{Body, BodyKind};

/// `velocity += acceleration * dt`
#[inline]
pub fn integrate_velocity(body: &mut Body, dt: f32) {
    body.velocity += body.acceleration * dt;
}

/// `position.y += velocity.y * dt`
#[inline]
pub fn advance_y(body: &mut Body, dt: f32) {
    body.position.y += body.velocity.y * dt;
}

/// `position.x += velocity.x * dt`
#[inline]
pub fn advance_x(body: &mut Body, dt: f32) {
    body.position.x += body.velocity.x * dt;
}

/// Full collision-free update: velocity, then Y, then X
pub fn integrate(body: &mut Body, dt: f32) {
    integrate_velocity(body, dt);
    advance_y(body, dt);
    advance_x(body, dt);
}

/// Move a kinematic obstacle along its scripted direction.
///
/// The movement vector is direction only; a zero vector leaves the body in place.
pub fn advance_kinematic(body: &mut Body, dt: f32) {
    if body.kind != BodyKind::KinematicObstacle || !body.active {
        return;
    }
    let direction = body.movement.normalize_or_zero();
    body.position += direction * body.speed * dt;
}
