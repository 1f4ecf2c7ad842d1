// Redraws the whole frame from model state; read-only consumer of the
// explosion collection. Drawing goes through the Surface trait so the frame
// logic runs against a recording double in tests.

use crate::color::Color;
use crate::explosion::Explosion;

pub trait Surface {
    // Fill the entire surface with one color.
    fn clear(&mut self, background: Color);
    // Filled circle centered at (x, y).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

pub struct View<S: Surface> {
    pub surface: S,
    pub background: Color,
}

impl<S: Surface> View<S> {
    pub fn new(surface: S, background: Color) -> View<S> {
        View {
            surface,
            background,
        }
    }

    // Dead particles are already gone by the time this runs; the model's
    // update step filters, render does not.
    pub fn render(&mut self, explosions: &[Explosion]) {
        self.surface.clear(self.background);
        for explosion in explosions {
            for particle in &explosion.particles {
                self.surface.fill_circle(
                    particle.pos[0],
                    particle.pos[1],
                    particle.size,
                    particle.color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParticleConfig;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Color),
        Circle {
            x: f64,
            y: f64,
            radius: f64,
            color: Color,
        },
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, background: Color) {
            self.ops.push(Op::Clear(background));
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
            self.ops.push(Op::Circle {
                x,
                y,
                radius,
                color,
            });
        }
    }

    #[test]
    fn empty_model_renders_background_only() {
        let mut view = View::new(RecordingSurface::default(), Color::BLACK);
        view.render(&[]);
        assert_eq!(view.surface.ops, vec![Op::Clear(Color::BLACK)]);
    }

    #[test]
    fn one_circle_per_particle_after_the_clear() {
        let config = ParticleConfig {
            per_explosion: 5,
            min_speed: 0.0,
            max_speed: 0.0,
            min_size: 3.0,
            max_size: 3.0,
        };
        let explosion = Explosion::new(12.0, 34.0, &config);
        let expected_color = explosion.particles[0].color;

        let mut view = View::new(RecordingSurface::default(), Color::BLACK);
        view.render(std::slice::from_ref(&explosion));

        assert_eq!(view.surface.ops.len(), 6);
        assert_eq!(view.surface.ops[0], Op::Clear(Color::BLACK));
        for op in &view.surface.ops[1..] {
            assert_eq!(
                *op,
                Op::Circle {
                    x: 12.0,
                    y: 34.0,
                    radius: 3.0,
                    color: expected_color,
                }
            );
        }
    }
}
