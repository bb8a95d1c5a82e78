//! rally_demo — scripted 2v2 rallies on a toy court.
//!
//! Drives one `Arena` with a kinematic stand-in for the physics engine and
//! a scripted policy in place of learned agents.  Every rally lands in
//! `output/rally_demo/rallies.csv`, per-rally reward sums by team and role
//! in `output/rally_demo/reward_stats.csv`.
//!
//! Usage: `rally_demo [config.json]`.  The JSON file may override any
//! subset of `RallyConfig`; `RUST_LOG=debug` prints every ruling.

mod court;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use vb_agent::{AgentRegistry, load_roster_reader};
use vb_core::{AgentId, ArenaRng, RallyConfig, Team, Tick, TouchType, Vec3};
use vb_host::NoopRewards;
use vb_output::{CsvWriter, OutputWriter, RallyOutputObserver, RewardTally, TeamRewardStats};
use vb_rules::{RallyState, TouchOutcome, court_side, predict_landing};
use vb_sim::{ArenaBuilder, RallyCause, RallyObserver, RallyRecord, TouchRecord};

use court::{HALF_WIDTH, ToyCourt};

// ── Constants ─────────────────────────────────────────────────────────────────

const RALLIES:      u64 = 200;
const MAX_TICKS:    u64 = 1_000_000;
const POLICY_SEED:  u64 = 7;
const AGENT_SPEED:  f32 = 5.0; // m/s
const REACH:        f32 = 0.9; // horizontal, m
const REACH_HEIGHT: f32 = 3.2;
const MISPLAY:      f64 = 0.08;

/// Closest an agent may walk up to the net.
const NET_CLEARANCE: f32 = 0.5;

// ── Roster CSV ────────────────────────────────────────────────────────────────

// Blue plays z < 0, Red z > 0.  Join order inside each team follows row order.
const ROSTER_CSV: &str = "\
team,x,y,z,yaw\n\
blue,-1.5,0.0,-4.0,0\n\
red,-1.5,0.0,4.0,180\n\
blue,1.5,0.0,-6.0,0\n\
red,1.5,0.0,6.0,180\n\
";

// ── Scripted policy ───────────────────────────────────────────────────────────

/// Where a struck ball is sent.
#[derive(Copy, Clone)]
enum Shot {
    /// Up and toward the front of the striker's own half.
    Pass,
    /// Over the net into the opponent's half.
    Attack,
}

struct Contact {
    agent:    AgentId,
    touch:    TouchType,
    velocity: Vec3,
}

struct Plan {
    moves:   Vec<(AgentId, Vec3)>,
    contact: Option<Contact>,
}

/// Bump, set, spike, with the occasional misplay so every fault shows up.
struct ScriptedPolicy {
    rng:     ArenaRng,
    net_z:   f32,
    gravity: f32,
}

impl ScriptedPolicy {
    fn new(seed: u64, config: &RallyConfig) -> Self {
        Self {
            rng:     ArenaRng::new(seed),
            net_z:   config.court.net_z,
            gravity: config.court.gravity,
        }
    }

    fn plan(&mut self, court: &ToyCourt, registry: &AgentRegistry, state: &RallyState, dt: f32) -> Plan {
        let ball = court.ball();
        let velocity = court.ball_velocity();
        let frozen = state.ball_frozen();

        let (team, target) = if frozen {
            (state.next_server, ball)
        } else {
            let landing = predict_landing(ball, velocity, self.gravity);
            (court_side(landing.z, self.net_z), landing)
        };

        // Teammates alternate unless someone misplays into a double touch.
        let excluded = match state.last_hitter_agent {
            Some(a) if state.last_hitter_team == team && !self.rng.gen_bool(MISPLAY / 2.0) => Some(a),
            _ => None,
        };
        let chaser = registry
            .members(team)
            .filter(|&id| Some(id) != excluded)
            .filter_map(|id| court.agent(id).map(|p| (id, p.horizontal_distance_sq(target))))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id);

        let step = AGENT_SPEED * dt;
        let mut moves = Vec::with_capacity(registry.count);
        for id in registry.agent_ids() {
            let (Some(here), Some(team_of)) = (court.agent(id), registry.team(id)) else {
                continue;
            };
            let goal = if Some(id) == chaser {
                target
            } else {
                registry.spawn(id).map_or(here, |s| s.position)
            };
            let goal = self.own_half(goal, team_of);
            moves.push((id, toward(here, goal, step)));
        }

        let contact = chaser.and_then(|agent| {
            let at = court.agent(agent)?;
            let in_reach = at.horizontal_distance_sq(ball) <= REACH * REACH
                && ball.y <= REACH_HEIGHT
                && (frozen || velocity.y <= 0.0);
            in_reach.then(|| self.strike(agent, team, ball, frozen, state))
        });

        Plan { moves, contact }
    }

    fn strike(&mut self, agent: AgentId, team: Team, ball: Vec3, frozen: bool, state: &RallyState) -> Contact {
        let used = if state.last_hitter_team == team { state.touches(team) } else { 0 };
        let (mut touch, mut shot) = match (frozen, used) {
            (true, _) => (TouchType::Bump, Shot::Attack),
            (false, 0) => (TouchType::Bump, Shot::Pass),
            (false, 1) => (TouchType::Set, Shot::Pass),
            _ => (TouchType::Spike, Shot::Attack),
        };
        if !frozen && self.rng.gen_bool(MISPLAY) {
            (touch, shot) = match shot {
                Shot::Pass => (TouchType::Spike, Shot::Attack),
                Shot::Attack => (TouchType::Set, Shot::Pass),
            };
        }

        let side = team.side_sign();
        let (mut landing, up) = match shot {
            Shot::Pass => (
                Vec3::new(self.rng.jitter(1.5), 0.0, self.net_z + side * 2.0),
                6.5,
            ),
            Shot::Attack => (
                Vec3::new(
                    self.rng.jitter(3.5),
                    0.0,
                    self.net_z - side * self.rng.gen_range(2.0f32..8.0),
                ),
                5.0,
            ),
        };
        if self.rng.gen_bool(MISPLAY / 2.0) {
            landing.x = if self.rng.coin_flip() { HALF_WIDTH + 1.5 } else { -HALF_WIDTH - 1.5 };
        }

        Contact { agent, touch, velocity: aim(ball, landing, up, self.gravity) }
    }

    /// Clamp `goal` so agents never walk under the net.
    fn own_half(&self, mut goal: Vec3, team: Team) -> Vec3 {
        let side = team.side_sign();
        if side * (goal.z - self.net_z) < NET_CLEARANCE {
            goal.z = self.net_z + side * NET_CLEARANCE;
        }
        goal
    }
}

/// Floor displacement of at most `max_step` from `here` toward `goal`.
fn toward(here: Vec3, goal: Vec3, max_step: f32) -> Vec3 {
    let delta = Vec3::new(goal.x - here.x, 0.0, goal.z - here.z);
    let dist = delta.length();
    if dist <= max_step { delta } else { delta * (max_step / dist) }
}

/// Launch velocity with vertical speed `up` that lands on `landing`.
fn aim(from: Vec3, landing: Vec3, up: f32, gravity: f32) -> Vec3 {
    let flight = (up + (up * up + 2.0 * gravity * from.y.max(0.0)).sqrt()) / gravity;
    Vec3::new((landing.x - from.x) / flight, up, (landing.z - from.z) / flight)
}

// ── Observer wrapper to keep score ───────────────────────────────────────────

struct Scoreboard<W: OutputWriter> {
    inner:       RallyOutputObserver<W>,
    wins:        [u64; 2],
    faults:      u64,
    spike_kills: u64,
    interrupted: u64,
    touches:     u64,
    crossings:   u64,
}

impl<W: OutputWriter> Scoreboard<W> {
    fn new(inner: RallyOutputObserver<W>) -> Self {
        Self {
            inner,
            wins:        [0; 2],
            faults:      0,
            spike_kills: 0,
            interrupted: 0,
            touches:     0,
            crossings:   0,
        }
    }
}

impl<W: OutputWriter> RallyObserver for Scoreboard<W> {
    fn on_touch(&mut self, _touch: &TouchRecord) {
        self.touches += 1;
    }

    fn on_net_crossing(&mut self, _tick: Tick, _team: Team, _bonus: f32) {
        self.crossings += 1;
    }

    fn on_rally_end(&mut self, rally: &RallyRecord) {
        if let Some(i) = rally.winner.index() {
            self.wins[i] += 1;
        }
        if matches!(rally.cause, RallyCause::Fault(_)) {
            self.faults += 1;
        }
        if rally.spike_kill {
            self.spike_kills += 1;
        }
        debug!("rally {} -> {} ({})", rally.rally, rally.winner, rally.cause);
        self.inner.on_rally_end(rally);
    }

    fn on_interrupted(&mut self, tick: Tick, steps: u64) {
        self.interrupted += 1;
        self.inner.on_interrupted(tick, steps);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<RallyConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => RallyConfig::default(),
    };

    println!("=== rally_demo — scripted 2v2 on a toy court ===");
    println!(
        "Rallies: {RALLIES}  |  Step: {} s  |  Roles: {:?}  |  Seed: {}",
        config.step_secs, config.roles.strategy, config.seed
    );
    println!();

    // 1. Roster.
    let registry = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    println!(
        "Roster: {} agents ({} blue, {} red)",
        registry.count,
        registry.team_size(Team::Blue),
        registry.team_size(Team::Red)
    );

    // 2. Host stand-ins.
    let court = ToyCourt::new(registry.count, config.court.net_z, config.court.gravity);
    let tally = RewardTally::new(NoopRewards, registry.count);

    // 3. Output.
    let out_dir = Path::new("output/rally_demo");
    std::fs::create_dir_all(out_dir)?;
    let observer = Scoreboard::new(RallyOutputObserver::new(CsvWriter::new(out_dir)?));

    // 4. Arena.
    let mut arena = ArenaBuilder::new(config.clone(), registry, court, tally)
        .observer(observer)
        .build()?;
    arena.reset_scene();

    // 5. Run.
    let mut policy = ScriptedPolicy::new(POLICY_SEED, &config);
    let dt = config.step_secs;
    let mut stats_written = 0u64;
    let t0 = Instant::now();

    while arena.rally_count() < RALLIES && arena.clock().current_tick < Tick(MAX_TICKS) {
        let now_secs = arena.clock().elapsed_secs();
        let plan = policy.plan(arena.physics(), arena.registry(), arena.state(), dt);

        for (id, delta) in plan.moves {
            arena.physics_mut().move_agent(id, delta);
        }
        if let Some(c) = plan.contact {
            let outcome = arena.register_touch(c.agent, c.touch, now_secs);
            if matches!(outcome, TouchOutcome::Continue { .. }) {
                arena.physics_mut().strike(c.velocity);
            }
        }
        for event in arena.physics_mut().step(dt) {
            if let Some(winner) = arena.resolve_event(event).winner() {
                debug!("{event:?} decided the rally for {winner}");
                break;
            }
        }
        arena.step();

        if arena.rally_count() > stats_written {
            let stats = TeamRewardStats::collect(arena.registry(), arena.rewards());
            arena.observer_mut().inner.write_reward_stats(stats_written, &stats);
            arena.rewards_mut().reset();
            stats_written = arena.rally_count();
            if stats_written % 50 == 0 {
                info!("{stats_written} rallies played");
            }
        }
    }
    let elapsed = t0.elapsed();

    let board = arena.observer_mut();
    board.inner.finish();
    if let Some(e) = board.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let board = arena.observer();
    println!(
        "Simulation complete in {:.3} s ({} ticks, {:.1} s simulated)",
        elapsed.as_secs_f64(),
        arena.clock().current_tick,
        arena.clock().elapsed_secs()
    );
    println!("  rallies      : {}", arena.rally_count());
    println!("  blue / red   : {} / {}", board.wins[0], board.wins[1]);
    println!("  faults       : {}", board.faults);
    println!("  spike kills  : {}", board.spike_kills);
    println!("  interrupted  : {}", board.interrupted);
    println!("  touches      : {}", board.touches);
    println!("  net crossings: {}", board.crossings);
    println!("  rallies.csv  : {} rows", board.inner.rows_written());
    println!();

    // 7. Final agent table.
    let physics = arena.physics();
    println!("{:<12} {:<6} {:<8} {:>7} {:>7} {:>6}", "Agent", "Team", "Role", "x", "z", "yaw");
    println!("{}", "-".repeat(50));
    for id in arena.registry().agent_ids() {
        let at = physics.agent(id).unwrap_or_default();
        println!(
            "{:<12} {:<6} {:<8} {:>7.2} {:>7.2} {:>6.0}",
            id.to_string(),
            arena.registry().team(id).unwrap_or(Team::Unset).to_string(),
            arena.role(id).map(|r| r.to_string()).unwrap_or_default(),
            at.x,
            at.z,
            physics.agent_yaw(id).unwrap_or_default(),
        );
    }

    Ok(())
}
