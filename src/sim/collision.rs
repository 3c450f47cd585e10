//! Collision detection and response for the three bounce surfaces
//!
//! All checks are discrete, run once per tick after integration. Wall
//! resolution clamps the ball back into bounds so the horizontal-bounds
//! invariant holds after every tick. The obstacle is solid only from below
//! and the paddle only from above; the velocity-sign gates enforce that.

use glam::Vec2;

use super::rect::Rect;

/// Reflect off the side and top walls, clamping position back into bounds.
/// Returns true if any wall was touched.
pub fn resolve_walls(pos: &mut Vec2, vel: &mut Vec2, ball_size: f32, screen_width: f32) -> bool {
    let mut hit = false;

    if pos.x <= 0.0 {
        pos.x = 0.0;
        vel.x = vel.x.abs();
        hit = true;
    } else if pos.x + ball_size >= screen_width {
        pos.x = screen_width - ball_size;
        vel.x = -vel.x.abs();
        hit = true;
    }

    if pos.y <= 0.0 {
        pos.y = 0.0;
        vel.y = vel.y.abs();
        hit = true;
    }

    hit
}

/// Obstacle check: the notch is only solid to a ball moving upward
#[inline]
pub fn hits_obstacle(ball: &Rect, vel: Vec2, obstacle: &Rect) -> bool {
    vel.y < 0.0 && ball.overlaps(obstacle)
}

/// Paddle check: catches a downward ball whose bottom edge is inside the
/// paddle's vertical band and whose horizontal span overlaps the paddle
#[inline]
pub fn hits_paddle(ball: &Rect, vel: Vec2, paddle: &Rect) -> bool {
    vel.y > 0.0
        && ball.bottom() >= paddle.y
        && ball.bottom() <= paddle.bottom()
        && ball.right() >= paddle.x
        && ball.x <= paddle.right()
}

/// Rescale speed by `growth` up to `cap`, preserving direction
#[inline]
pub fn scale_speed(vel: Vec2, growth: f32, cap: f32) -> Vec2 {
    let speed = (vel.length() * growth).min(cap);
    vel.normalize_or_zero() * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_bounce_left() {
        let mut pos = Vec2::new(-3.0, 100.0);
        let mut vel = Vec2::new(-6.0, 4.0);
        assert!(resolve_walls(&mut pos, &mut vel, 64.0, 430.0));
        assert_eq!(pos.x, 0.0);
        assert!(vel.x > 0.0);
        // Vertical velocity untouched
        assert_eq!(vel.y, 4.0);
    }

    #[test]
    fn test_wall_bounce_right() {
        let mut pos = Vec2::new(370.0, 100.0);
        let mut vel = Vec2::new(6.0, 4.0);
        assert!(resolve_walls(&mut pos, &mut vel, 64.0, 430.0));
        assert_eq!(pos.x, 430.0 - 64.0);
        assert!(vel.x < 0.0);
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut pos = Vec2::new(100.0, -2.0);
        let mut vel = Vec2::new(6.0, -6.0);
        assert!(resolve_walls(&mut pos, &mut vel, 64.0, 430.0));
        assert_eq!(pos.y, 0.0);
        assert!(vel.y > 0.0);
    }

    #[test]
    fn test_wall_no_bounce_inside() {
        let mut pos = Vec2::new(100.0, 100.0);
        let mut vel = Vec2::new(6.0, -6.0);
        assert!(!resolve_walls(&mut pos, &mut vel, 64.0, 430.0));
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert_eq!(vel, Vec2::new(6.0, -6.0));
    }

    #[test]
    fn test_obstacle_requires_upward_motion() {
        let obstacle = Rect::new(150.0, 14.0, 100.0, 32.0);
        let ball = Rect::new(160.0, 30.0, 64.0, 64.0);

        assert!(hits_obstacle(&ball, Vec2::new(0.0, -6.0), &obstacle));
        // Same overlap, downward motion: pass-through
        assert!(!hits_obstacle(&ball, Vec2::new(0.0, 6.0), &obstacle));
    }

    #[test]
    fn test_obstacle_requires_overlap() {
        let obstacle = Rect::new(150.0, 14.0, 100.0, 32.0);
        let beside = Rect::new(300.0, 30.0, 64.0, 64.0);
        let below = Rect::new(160.0, 200.0, 64.0, 64.0);

        assert!(!hits_obstacle(&beside, Vec2::new(0.0, -6.0), &obstacle));
        assert!(!hits_obstacle(&below, Vec2::new(0.0, -6.0), &obstacle));
    }

    #[test]
    fn test_paddle_band() {
        let paddle = Rect::new(146.0, 812.0, 137.6, 32.0);
        let down = Vec2::new(0.0, 6.0);

        // Bottom edge inside the band
        let caught = Rect::new(160.0, 760.0, 64.0, 64.0);
        assert!(hits_paddle(&caught, down, &paddle));

        // Bottom edge above the band
        let above = Rect::new(160.0, 700.0, 64.0, 64.0);
        assert!(!hits_paddle(&above, down, &paddle));

        // Bottom edge past the band: the ball slipped through
        let past = Rect::new(160.0, 790.0, 64.0, 64.0);
        assert!(!hits_paddle(&past, down, &paddle));

        // Upward ball never catches
        assert!(!hits_paddle(&caught, Vec2::new(0.0, -6.0), &paddle));
    }

    #[test]
    fn test_scale_speed_growth_and_cap() {
        let vel = Vec2::new(6.0, -6.0);
        let grown = scale_speed(vel, 1.08, 18.0);
        assert!((grown.length() - vel.length() * 1.08).abs() < 1e-4);

        let fast = Vec2::new(13.0, -13.0);
        let capped = scale_speed(fast, 1.08, 18.0);
        assert!((capped.length() - 18.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_speed_preserves_direction() {
        let vel = Vec2::new(3.0, -4.0);
        let scaled = scale_speed(vel, 1.08, 18.0);
        let before = vel.normalize();
        let after = scaled.normalize();
        assert!((before - after).length() < 1e-5);
    }
}
