//! `vb-serve` — where the ball starts each rally and when it starts moving.
//!
//! ```text
//!   reset_ball ──► Frozen ──(first legal touch | watchdog)──► Live
//!        ▲                                                     │
//!        └──────────────────── next rally ◄────────────────────┘
//! ```
//!
//! A frozen ball hangs above the serving team's side and is kinematic, so
//! agents cannot knock it away before the serve.  `Live` is terminal until
//! the next `reset_ball`.
//!
//! # Crate layout
//!
//! | Module      | Contents          |
//! |-------------|-------------------|
//! | [`manager`] | `ServeManager`    |

pub mod manager;

#[cfg(test)]
mod tests;

pub use manager::ServeManager;
