//! Tapdown Animation System
//!
//! Spring physics and a frame-driven scheduler for widget animations.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Frame-Driven Scheduler**: the host ticks once per platform frame
//!   callback; no background threads, no globals
//! - **Interruptible**: retargeting a live spring preserves its velocity
//! - **Animated Values**: spring-backed scalars that clean up on drop
//!
//! # Example
//!
//! ```rust
//! use tapdown_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
//!
//! let scheduler = SchedulerHandle::new();
//! let mut progress = AnimatedValue::new(scheduler.clone(), 0.0, SpringConfig::gentle());
//!
//! progress.set_target(1.0);
//! while scheduler.tick(1.0 / 60.0) {}
//! assert!((progress.get() - 1.0).abs() < 1e-2);
//! ```

pub mod interpolate;
pub mod scheduler;
pub mod spring;

pub use interpolate::{map_range, Interpolate};
pub use scheduler::{AnimatedValue, SchedulerHandle, SpringId};
pub use spring::{Spring, SpringConfig};
