// Owns the live simulation state and advances it one tick at a time. The
// explosion collection is touched from exactly two places: insertion through
// add_explosion and removal inside update.

use crate::config::Config;
use crate::explosion::Explosion;

pub struct Model {
    config: Config,
    explosions: Vec<Explosion>,
}

impl Model {
    pub fn new(config: Config) -> Model {
        Model {
            config,
            explosions: Vec::new(),
        }
    }

    pub fn create_explosion(&self, x: f64, y: f64) -> Explosion {
        Explosion::new(x, y, &self.config.particles)
    }

    pub fn add_explosion(&mut self, explosion: Explosion) {
        self.explosions.push(explosion);
    }

    // Advance every particle, then drop empty explosions. Removal goes
    // through retain passes so no element is skipped or visited twice.
    pub fn update(&mut self) {
        for explosion in &mut self.explosions {
            explosion.advance();
        }
        self.explosions.retain(|explosion| !explosion.is_done());
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn explosion_count(&self) -> usize {
        self.explosions.len()
    }

    pub fn particle_count(&self) -> usize {
        self.explosions.iter().map(|e| e.particles.len()).sum()
    }
}
