//! `vb-sim` — the rally lifecycle.
//!
//! An [`Arena`] is one court.  The host drives it once per physics tick:
//!
//! ```text
//! reset_scene()                      once, before the first tick
//! per tick:
//!   register_touch(..) / resolve_event(..)   zero or more, physics order
//!   step()                                   exactly once, last
//!     ① steps_since_reset += 1
//!     ② fire due timers (guard release, flash clear)
//!     ③ serve watchdog
//!     ④ max-step interruption
//! ```
//!
//! A fault or point ends the rally through one guarded path: rewards,
//! episode end, serve rotation, `reset_scene`, and a timed guard release.
//! Any further ruling in the same window is dropped.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `step_all` steps arenas on Rayon's thread pool.        |
//!
//! # Crate layout
//!
//! | Module          | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | [`arena`]       | `Arena`, `step_all`                               |
//! | [`builder`]     | `ArenaBuilder`                                    |
//! | [`timers`]      | `TimerQueue`, `TimerEvent`                        |
//! | [`observer`]    | `RallyObserver`, `NoopObserver`, record types     |
//! | [`observation`] | `AgentObservation`                                |
//! | [`error`]       | `ArenaError`, `ArenaResult<T>`                    |

pub mod arena;
pub mod builder;
pub mod error;
pub mod observation;
pub mod observer;
pub mod timers;


pub use arena::{Arena, step_all};
pub use builder::ArenaBuilder;
pub use error::{ArenaError, ArenaResult};
pub use observation::AgentObservation;
pub use observer::{NoopObserver, RallyCause, RallyObserver, RallyRecord, TouchRecord};
pub use timers::{TimerEvent, TimerQueue};
