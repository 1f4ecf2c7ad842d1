// A burst of particles spawned together at one point. The whole burst shares
// a single randomly drawn color; the burst is done once every particle has
// shrunk away.

use crate::color::Color;
use crate::config::ParticleConfig;
use crate::particle::Particle;
use rand::Rng;

pub struct Explosion {
    pub origin: [f64; 2],
    pub particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(x: f64, y: f64, config: &ParticleConfig) -> Explosion {
        let mut rng = rand::thread_rng();
        let color = Color::random(&mut rng);
        let mut particles = Vec::with_capacity(config.per_explosion);
        for _ in 0..config.per_explosion {
            let vel_x = sample(&mut rng, config.min_speed, config.max_speed);
            let vel_y = sample(&mut rng, config.min_speed, config.max_speed);
            let size = sample(&mut rng, config.min_size, config.max_size);
            particles.push(Particle::new(x, y, vel_x, vel_y, size, color));
        }
        Explosion {
            origin: [x, y],
            particles,
        }
    }

    // One tick for every particle, then drop the ones that shrank to nothing.
    pub fn advance(&mut self) {
        self.particles.retain_mut(|particle| {
            particle.advance();
            particle.is_alive()
        });
    }

    pub fn is_done(&self) -> bool {
        self.particles.is_empty()
    }
}

// Uniform draw over [min, max); returns min when the range is empty.
fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burst_config() -> ParticleConfig {
        ParticleConfig {
            per_explosion: 64,
            min_speed: -5.0,
            max_speed: 5.0,
            min_size: 2.0,
            max_size: 5.0,
        }
    }

    #[test]
    fn burst_has_exactly_the_configured_particle_count() {
        let explosion = Explosion::new(0.0, 0.0, &burst_config());
        assert_eq!(explosion.particles.len(), 64);
        assert_eq!(explosion.origin, [0.0, 0.0]);
    }

    #[test]
    fn draws_stay_within_the_configured_ranges() {
        let config = burst_config();
        let explosion = Explosion::new(0.0, 0.0, &config);
        for particle in &explosion.particles {
            assert!(particle.vel[0] >= config.min_speed && particle.vel[0] < config.max_speed);
            assert!(particle.vel[1] >= config.min_speed && particle.vel[1] < config.max_speed);
            assert!(particle.size >= config.min_size && particle.size <= config.max_size);
        }
    }

    #[test]
    fn every_particle_of_a_burst_shares_one_color() {
        let explosion = Explosion::new(0.0, 0.0, &burst_config());
        let first = explosion.particles[0].color;
        assert!(explosion.particles.iter().all(|p| p.color == first));
    }

    #[test]
    fn advance_drops_expired_particles() {
        let config = ParticleConfig {
            per_explosion: 4,
            min_speed: 0.0,
            max_speed: 0.0,
            min_size: 0.1,
            max_size: 0.1,
        };
        let mut explosion = Explosion::new(0.0, 0.0, &config);
        assert!(!explosion.is_done());
        explosion.advance();
        assert!(explosion.is_done());
    }
}
