//! Axis-aligned overlap tests between the player and each entity kind
//!
//! The player's box is asymmetric: it reaches 50 units right of its x but
//! only counts from 20 units in, and only the feet line (y + 70) is tested
//! vertically. The platform band is 14 units tall, so a bounce only happens
//! on contact with the top surface.

use glam::Vec2;

use super::entity::{Entity, EntityKind};
use super::state::Player;

/// Overlap constants for one player × entity pairing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    /// Offset of the player's leading (right) edge
    pub lead: f32,
    /// Offset of the player's trailing (left) edge
    pub trail: f32,
    /// Offset of the player's feet line
    pub feet: f32,
    /// Entity width
    pub width: f32,
    /// Entity height
    pub height: f32,
}

pub const PLATFORM_HITBOX: Hitbox = Hitbox {
    lead: 50.0,
    trail: 20.0,
    feet: 70.0,
    width: 68.0,
    height: 14.0,
};

pub const POWER_UP_HITBOX: Hitbox = Hitbox {
    lead: 50.0,
    trail: 20.0,
    feet: 70.0,
    width: 32.0,
    height: 32.0,
};

pub const ENEMY_HITBOX: Hitbox = Hitbox {
    lead: 50.0,
    trail: 20.0,
    feet: 70.0,
    width: 32.0,
    height: 32.0,
};

impl Hitbox {
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Platform => PLATFORM_HITBOX,
            EntityKind::PowerUp => POWER_UP_HITBOX,
            EntityKind::Enemy => ENEMY_HITBOX,
        }
    }

    /// Strict overlap test (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, player: Vec2, other: Vec2) -> bool {
        player.x + self.lead > other.x
            && player.x + self.trail < other.x + self.width
            && player.y + self.feet > other.y
            && player.y + self.feet < other.y + self.height
    }

    /// Player x that centres the landing window on an entity at `other_x`
    pub fn centred_player_x(&self, other_x: f32) -> f32 {
        other_x + (self.width - self.lead - self.trail) / 2.0
    }
}

/// Bounce off a platform. Only lands while falling, so a player still in
/// contact after bouncing (vy now negative) is not bounced again.
pub fn platform_bounce(player: &mut Player, platform: &Entity) -> bool {
    if player.vy > 0.0 && PLATFORM_HITBOX.overlaps(player.pos, platform.pos) {
        player.bounce();
        return true;
    }
    false
}

/// Pick up a power-up, parking it above the screen until it next scrolls
/// past the bottom and is recycled.
pub fn collect_power_up(player: &Player, power_up: &mut Entity) -> bool {
    if POWER_UP_HITBOX.overlaps(player.pos, power_up.pos) {
        power_up.pos.y = crate::consts::POWER_UP_PARKED_Y;
        return true;
    }
    false
}

/// Lethal contact with an enemy
#[inline]
pub fn enemy_hit(player: &Player, enemy: &Entity) -> bool {
    ENEMY_HITBOX.overlaps(player.pos, enemy.pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32, vy: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            vy,
        }
    }

    fn entity_at(x: f32, y: f32) -> Entity {
        Entity {
            pos: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_platform_bounce_while_falling() {
        // Feet at 275, platform top band 270..284
        let mut player = player_at(100.0, 205.0, 3.0);
        let platform = entity_at(100.0, 270.0);
        assert!(platform_bounce(&mut player, &platform));
        assert_eq!(player.vy, -10.0);

        // Still overlapping, but rising: no second bounce
        assert!(!platform_bounce(&mut player, &platform));
        assert_eq!(player.vy, -10.0);
    }

    #[test]
    fn test_platform_no_bounce_while_rising() {
        let mut player = player_at(100.0, 205.0, -2.0);
        let platform = entity_at(100.0, 270.0);
        assert!(!platform_bounce(&mut player, &platform));
        assert_eq!(player.vy, -2.0);
    }

    #[test]
    fn test_platform_band_is_thin() {
        // Feet 20 units below the platform top: outside the 14 unit band
        let mut player = player_at(100.0, 220.0, 3.0);
        let platform = entity_at(100.0, 270.0);
        assert!(!platform_bounce(&mut player, &platform));
    }

    #[test]
    fn test_horizontal_margins_are_asymmetric() {
        let platform = Vec2::new(100.0, 270.0);
        // Leading edge: player.x + 50 must exceed platform.x
        assert!(!PLATFORM_HITBOX.overlaps(Vec2::new(50.0, 205.0), platform));
        assert!(PLATFORM_HITBOX.overlaps(Vec2::new(51.0, 205.0), platform));
        // Trailing edge: player.x + 20 must be below platform.x + 68
        assert!(PLATFORM_HITBOX.overlaps(Vec2::new(147.0, 205.0), platform));
        assert!(!PLATFORM_HITBOX.overlaps(Vec2::new(148.0, 205.0), platform));
    }

    #[test]
    fn test_collect_power_up_parks_it() {
        let player = player_at(100.0, 200.0, 1.0);
        let mut power_up = entity_at(110.0, 260.0);
        assert!(collect_power_up(&player, &mut power_up));
        assert_eq!(power_up.pos.y, -50.0);
        // Parked above the screen, no longer reachable
        assert!(!collect_power_up(&player, &mut power_up));
    }

    #[test]
    fn test_enemy_hit() {
        let player = player_at(100.0, 200.0, 1.0);
        assert!(enemy_hit(&player, &entity_at(110.0, 260.0)));
        assert!(!enemy_hit(&player, &entity_at(300.0, 260.0)));
        assert!(!enemy_hit(&player, &entity_at(110.0, 100.0)));
    }

    #[test]
    fn test_hitbox_for_kind() {
        assert_eq!(Hitbox::for_kind(EntityKind::Platform), PLATFORM_HITBOX);
        assert_eq!(Hitbox::for_kind(EntityKind::PowerUp), POWER_UP_HITBOX);
        assert_eq!(Hitbox::for_kind(EntityKind::Enemy), ENEMY_HITBOX);
        assert_eq!(Hitbox::for_kind(EntityKind::Platform).height, 14.0);
    }

    #[test]
    fn test_centred_player_x_lands() {
        let platform = Vec2::new(200.0, 270.0);
        let x = PLATFORM_HITBOX.centred_player_x(platform.x);
        assert_eq!(x, 199.0);
        assert!(PLATFORM_HITBOX.overlaps(Vec2::new(x, 205.0), platform));
    }
}
