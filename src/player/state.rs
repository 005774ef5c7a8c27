//! Player resources and position.
//!
//! Every resource is bounded by `[0, max]` from [`ResourceLimits`]. The
//! mutators saturate instead of failing and report how much actually
//! changed, so callers can tell a capped refuel from a full one.

use serde::{Deserialize, Serialize};

use crate::core::{BoardPosition, ResourceLimits};

/// The explorer: where it stands and what it has left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    position: BoardPosition,
    fuel: u32,
    probes: u32,
    health: u32,
    limits: ResourceLimits,
}

impl PlayerState {
    /// Create a player at `start` with every resource at its cap.
    #[must_use]
    pub fn new(start: BoardPosition, limits: ResourceLimits) -> Self {
        Self {
            position: start,
            fuel: limits.max_fuel,
            probes: limits.max_probes,
            health: limits.max_health,
            limits,
        }
    }

    #[must_use]
    pub fn position(&self) -> BoardPosition {
        self.position
    }

    #[must_use]
    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    #[must_use]
    pub fn probes(&self) -> u32 {
        self.probes
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn limits(&self) -> ResourceLimits {
        self.limits
    }

    /// Health reached zero. Terminal, but only reported.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Place the player on a tile.
    pub fn move_to(&mut self, position: BoardPosition) {
        self.position = position;
    }

    /// Spend one unit of fuel. Returns `false` (and changes nothing) when empty.
    pub fn spend_fuel(&mut self) -> bool {
        if self.fuel == 0 {
            return false;
        }
        self.fuel -= 1;
        true
    }

    /// Spend one probe charge. Returns `false` (and changes nothing) when empty.
    pub fn spend_probe(&mut self) -> bool {
        if self.probes == 0 {
            return false;
        }
        self.probes -= 1;
        true
    }

    /// Add fuel up to the cap. Returns the amount gained.
    pub fn refuel(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.limits.max_fuel.saturating_sub(self.fuel));
        self.fuel += gained;
        gained
    }

    /// Add probe charges up to the cap. Returns the amount gained.
    pub fn add_probes(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.limits.max_probes.saturating_sub(self.probes));
        self.probes += gained;
        gained
    }

    /// Heal up to the cap. Returns the amount healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.limits.max_health.saturating_sub(self.health));
        self.health += gained;
        gained
    }

    /// Take damage, stopping at zero. Returns the amount lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerState {
        PlayerState::new(BoardPosition::new(0, 0), ResourceLimits::new(3, 2, 4))
    }

    #[test]
    fn test_starts_full() {
        let p = player();
        assert_eq!(p.fuel(), 3);
        assert_eq!(p.probes(), 2);
        assert_eq!(p.health(), 4);
        assert_eq!(p.position(), BoardPosition::new(0, 0));
        assert!(!p.is_dead());
    }

    #[test]
    fn test_spend_fuel_stops_at_zero() {
        let mut p = player();
        assert!(p.spend_fuel());
        assert!(p.spend_fuel());
        assert!(p.spend_fuel());
        assert!(!p.spend_fuel());
        assert_eq!(p.fuel(), 0);
    }

    #[test]
    fn test_spend_probe_stops_at_zero() {
        let mut p = player();
        assert!(p.spend_probe());
        assert!(p.spend_probe());
        assert!(!p.spend_probe());
        assert_eq!(p.probes(), 0);
    }

    #[test]
    fn test_refills_are_capped() {
        let mut p = player();
        p.spend_fuel();
        assert_eq!(p.refuel(5), 1);
        assert_eq!(p.fuel(), 3);

        p.spend_probe();
        assert_eq!(p.add_probes(1), 1);
        assert_eq!(p.add_probes(1), 0);
        assert_eq!(p.probes(), 2);
    }

    #[test]
    fn test_damage_and_heal() {
        let mut p = player();
        assert_eq!(p.damage(1), 1);
        assert_eq!(p.health(), 3);
        assert_eq!(p.heal(10), 1);
        assert_eq!(p.health(), 4);

        assert_eq!(p.damage(9), 4);
        assert_eq!(p.health(), 0);
        assert!(p.is_dead());
        assert_eq!(p.damage(1), 0);
    }
}
