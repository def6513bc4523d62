//! Tapdown Core
//!
//! Foundational primitives shared by the Tapdown widget crates:
//!
//! - **Color Model**: linear RGBA colors with CSS-style string parsing
//! - **Geometry**: the small value types the frame view-model needs
//! - **Reactive State**: fine-grained `State<T>` handles for widget fields
//!
//! # Example
//!
//! ```rust
//! use tapdown_core::reactive::StateStore;
//!
//! let store = StateStore::new();
//! let label = store.state(String::new());
//!
//! label.set("Rust".to_string());
//! assert_eq!(label.get(), "Rust");
//! ```

pub mod color;
pub mod geometry;
pub mod reactive;

pub use color::{Color, ColorParseError};
pub use geometry::Vec2;
pub use reactive::{ChangeListener, SignalId, State, StateStore};
