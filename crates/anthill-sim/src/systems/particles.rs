//! Cosmetic particle drift and ageing.

use hecs::World;

use anthill_core::components::Particle;
use anthill_core::types::Position;

/// Age every particle; live ones drift along their velocity.
pub fn run(world: &mut World, dt_ms: f64) {
    for (_entity, (particle, pos)) in world.query_mut::<(&mut Particle, &mut Position)>() {
        particle.age_ms += dt_ms;
        if particle.is_expired() {
            continue;
        }
        *pos = Position::from(pos.to_vec() + particle.velocity * dt_ms);
    }
}
