//! `RoleAssigner` — advisory tactical roles for the current rally.
//!
//! Roles never affect legality.  They select the shaping row and feed the
//! agents' observations.
//!
//! - **Static**: by join order within the team, stable for the match.
//! - **Dynamic**: only the team the ball is falling towards gets roles,
//!   ranked by horizontal distance to the predicted landing point.

use vb_agent::AgentRegistry;
use vb_core::{AgentId, ArenaRng, Role, RoleStrategy, Team, Vec3};

use crate::court_side;

/// Role for the `join_order`-th member of a team (0-based).
pub fn static_role(join_order: u16) -> Role {
    match join_order {
        0 | 3 => Role::Hitter,
        1 => Role::Setter,
        2 | 4 | 5 => Role::Passer,
        _ => Role::Generic,
    }
}

/// Closed-form landing point of a projectile on the `y = 0` floor.
///
/// Solves `y0 + vy·t − g·t²/2 = 0` for the positive root and advances the
/// horizontal position by that time.  A ball already at or below the floor,
/// or a non-positive gravity, lands where it is.
pub fn predict_landing(position: Vec3, velocity: Vec3, gravity: f32) -> Vec3 {
    let here = Vec3::new(position.x, 0.0, position.z);
    if gravity <= 0.0 || !gravity.is_finite() {
        return here;
    }
    let disc = velocity.y * velocity.y + 2.0 * gravity * position.y;
    if disc < 0.0 {
        return here;
    }
    let t = ((velocity.y + disc.sqrt()) / gravity).max(0.0);
    Vec3::new(position.x + velocity.x * t, 0.0, position.z + velocity.z * t)
}

/// The team whose floor the ball will land on.
#[inline]
pub fn receiving_team(landing: Vec3, net_z: f32) -> Team {
    court_side(landing.z, net_z)
}

/// Host snapshot needed by the dynamic strategy.
pub struct RoleContext<'a> {
    pub ball_position: Option<Vec3>,
    pub ball_velocity: Option<Vec3>,
    pub gravity:       f32,
    pub net_z:         f32,
    /// Agent positions indexed by `AgentId`; `None` where unknown.
    pub positions:     &'a [Option<Vec3>],
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoleAssigner {
    pub strategy:    RoleStrategy,
    pub tie_epsilon: f32,
}

impl RoleAssigner {
    pub fn new(strategy: RoleStrategy, tie_epsilon: f32) -> Self {
        Self { strategy, tie_epsilon }
    }

    /// Rewrite every agent's role.  The dynamic strategy falls back to the
    /// static one when the host cannot report the ball.
    pub fn assign(&self, registry: &mut AgentRegistry, ctx: &RoleContext<'_>, rng: &mut ArenaRng) {
        match self.strategy {
            RoleStrategy::Static => assign_static(registry),
            RoleStrategy::Dynamic => match (ctx.ball_position, ctx.ball_velocity) {
                (Some(pos), Some(vel)) if pos.is_finite() && vel.is_finite() => {
                    let landing = predict_landing(pos, vel, ctx.gravity);
                    self.assign_dynamic(registry, ctx, landing, rng);
                }
                _ => assign_static(registry),
            },
        }
    }

    fn assign_dynamic(
        &self,
        registry: &mut AgentRegistry,
        ctx:      &RoleContext<'_>,
        landing:  Vec3,
        rng:      &mut ArenaRng,
    ) {
        let receiving = receiving_team(landing, ctx.net_z);

        // (distance², id); agents the host cannot place rank last.
        let mut ranked: Vec<(f32, AgentId)> = registry
            .members(receiving)
            .map(|id| {
                let d = ctx
                    .positions
                    .get(id.index())
                    .copied()
                    .flatten()
                    .map_or(f32::INFINITY, |p| p.horizontal_distance_sq(landing));
                (d, id)
            })
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        if ranked.len() >= 2
            && (ranked[1].0 - ranked[0].0).abs() < self.tie_epsilon
            && rng.coin_flip()
        {
            ranked.swap(0, 1);
        }

        for id in registry.agent_ids() {
            registry.set_role(id, Role::Generic);
        }
        for (rank, &(_, id)) in ranked.iter().enumerate() {
            let role = match rank {
                0 => Role::Hitter,
                1 => Role::Setter,
                _ => Role::Passer,
            };
            registry.set_role(id, role);
        }
    }
}

fn assign_static(registry: &mut AgentRegistry) {
    for i in 0..registry.count {
        registry.role[i] = if registry.team[i].is_set() {
            static_role(registry.join_order[i])
        } else {
            Role::Generic
        };
    }
}
