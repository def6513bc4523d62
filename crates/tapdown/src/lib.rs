//! Tapdown
//!
//! An animated dropdown selection control ("combo box") for mobile UI
//! hosts. A tappable header shows the current selection; tapping it
//! reveals or hides a spring-animated, scrollable list of options, and
//! picking an option updates the header and notifies the caller with the
//! option's index.
//!
//! The widget is pure state plus a view-model: the host routes taps in,
//! ticks the animation scheduler from its frame callbacks, and draws the
//! [`ComboFrame`] that comes out. Icon rendering, text measurement, and
//! compositing stay on the host side of the boundary.
//!
//! # Example
//!
//! ```rust
//! use tapdown::{ComboBox, SchedulerHandle};
//!
//! let scheduler = SchedulerHandle::new();
//! let mut combo = ComboBox::builder(["Espresso", "Filter", "Cold Brew"])
//!     .on_value_select(|index| println!("picked option {index}"))
//!     .build(scheduler.clone());
//!
//! combo.toggle();                         // header tap
//! while scheduler.tick(1.0 / 60.0) {}     // host frame callbacks
//! assert!(combo.is_open());
//!
//! combo.select_option(1);                 // row tap
//! assert_eq!(combo.label(), "Filter");
//! ```

pub mod combo;
pub mod driver;
pub mod frame;
pub mod options;
pub mod state;
pub mod style;

pub use combo::{ComboBox, ComboBoxBuilder, SelectCallback};
pub use driver::{AnimationDriver, DisclosurePhase, ListPlacement};
pub use frame::{
    ComboFrame, HeaderChild, HeaderFrame, IconFrame, LabelFrame, ListFrame, RowFrame,
    DISCLOSURE_ICON,
};
pub use options::OptionList;
pub use state::SelectionState;
pub use style::{ComboStyle, LayoutDirection, Metrics, Shadow, TextStyle};

// Re-exported so hosts depend on one crate
pub use tapdown_animation::{SchedulerHandle, SpringConfig};
pub use tapdown_core::{Color, ColorParseError, StateStore};
