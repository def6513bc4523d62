//! The combo box widget
//!
//! Construction goes through [`ComboBoxBuilder`]; afterwards the host routes
//! taps to [`ComboBox::toggle`] (header) and [`ComboBox::select_option`]
//! (rows), ticks the scheduler from its frame callbacks, and draws whatever
//! [`ComboBox::frame`] returns.
//!
//! ```rust
//! use tapdown::{ComboBox, SchedulerHandle};
//!
//! let scheduler = SchedulerHandle::new();
//! let mut combo = ComboBox::builder(["Rust", "Swift", "Kotlin"])
//!     .default_value("Rust")
//!     .on_value_select(|index| println!("picked {index}"))
//!     .build(scheduler.clone());
//!
//! combo.toggle();
//! while scheduler.tick(1.0 / 60.0) {}
//! combo.select_option(2);
//! assert_eq!(combo.label(), "Kotlin");
//! ```

use std::sync::Arc;

use tapdown_animation::{SchedulerHandle, SpringConfig};
use tapdown_core::{Color, ColorParseError, StateStore};

use crate::driver::AnimationDriver;
use crate::frame::{
    ComboFrame, HeaderChild, HeaderFrame, IconFrame, LabelFrame, ListFrame, RowFrame,
    DISCLOSURE_ICON,
};
use crate::options::OptionList;
use crate::state::SelectionState;
use crate::style::{ComboStyle, LayoutDirection, Shadow};

/// Callback invoked synchronously with the picked option's index
pub type SelectCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// An animated dropdown selection control
pub struct ComboBox {
    options: OptionList,
    selection: SelectionState,
    driver: AnimationDriver,
    style: ComboStyle,
    on_value_select: Option<SelectCallback>,
    store: StateStore,
}

impl ComboBox {
    /// Start building a combo box over the given option labels
    pub fn builder<I, S>(values: I) -> ComboBoxBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ComboBoxBuilder::new(values)
    }

    /// Header tap: flip the expansion flag and retarget the animation
    ///
    /// No debouncing — a tap during the transient retargets the in-flight
    /// spring, which keeps its velocity and turns around.
    pub fn toggle(&mut self) {
        let open = self.selection.flip_open();
        tracing::debug!(open, "combo box toggled");
        self.driver.set_open(open);
    }

    /// Row tap: show the picked label, notify the caller, close the list
    ///
    /// `index` comes from a rendered row, so it is in range by construction;
    /// anything else is a caller bug. The label update and the callback both
    /// happen before the closing retarget, so the callback observes pre-close
    /// state.
    pub fn select_option(&mut self, index: usize) {
        debug_assert!(index < self.options.len(), "row index out of range");
        let Some(label) = self.options.label(index) else {
            return;
        };
        tracing::debug!(index, label, "option selected");

        self.selection.set_label(label.to_string());
        if let Some(callback) = self.on_value_select.clone() {
            callback(index);
        }
        self.toggle();
    }

    pub fn label(&self) -> String {
        self.selection.label()
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn style(&self) -> &ComboStyle {
        &self.style
    }

    /// The animation driver, for progress/rotation reads and diagnostics
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// The state store backing this widget's reactive fields
    ///
    /// Hosts hook `on_change` here to schedule re-renders.
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Observation handle for the displayed label
    pub fn label_state(&self) -> tapdown_core::State<String> {
        self.selection.label_state()
    }

    /// Observation handle for the expansion flag
    pub fn open_state(&self) -> tapdown_core::State<bool> {
        self.selection.open_state()
    }

    /// Compute the view-model for the current animation progress
    pub fn frame(&self) -> ComboFrame {
        let m = &self.style.metrics;
        let text_style = self.style.text_style();

        let label = HeaderChild::Label(LabelFrame {
            text: self.selection.label(),
            style: text_style.clone(),
        });
        let icon = HeaderChild::Icon(IconFrame {
            name: DISCLOSURE_ICON,
            rotation_deg: self.driver.rotation_deg(),
        });
        let children = match self.style.direction {
            LayoutDirection::LeftToRight => vec![label, icon],
            LayoutDirection::RightToLeft => vec![icon, label],
        };

        let height = self.options.height(m);
        ComboFrame {
            outer_padding: m.outer_padding,
            header: HeaderFrame {
                height: m.header_height,
                padding_x: m.padding_x,
                margin_bottom: m.header_margin_bottom,
                background: self.style.background,
                shadow: Shadow::from_elevation(m.header_elevation),
                children,
            },
            list: ListFrame {
                height,
                background: self.style.background,
                shadow: Shadow::from_elevation(m.list_elevation),
                inset_left: m.list_inset,
                z_index: m.list_z_index,
                placement: self.driver.list_placement(height, m),
                scrolls: self.options.scrolls(m),
                rows: self
                    .options
                    .rows()
                    .map(|(index, text)| RowFrame {
                        index,
                        text: text.to_string(),
                        height: m.row_height,
                        style: text_style.clone(),
                    })
                    .collect(),
            },
        }
    }
}

/// Fluent construction for [`ComboBox`]
pub struct ComboBoxBuilder {
    values: Vec<String>,
    default_value: String,
    style: ComboStyle,
    spring: SpringConfig,
    on_value_select: Option<SelectCallback>,
    store: Option<StateStore>,
}

impl ComboBoxBuilder {
    fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            default_value: String::new(),
            style: ComboStyle::default(),
            spring: SpringConfig::gentle(),
            on_value_select: None,
            store: None,
        }
    }

    /// Initial header label (empty if never set)
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.style.text_color = Some(color);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = Some(family.into());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.style.font_size = Some(size);
        self
    }

    /// Header and list background as a [`Color`] value
    pub fn background(mut self, color: Color) -> Self {
        self.style.background = color;
        self
    }

    /// Header and list background as a CSS-style string
    pub fn background_color(mut self, color: &str) -> Result<Self, ColorParseError> {
        self.style.background = color.parse()?;
        Ok(self)
    }

    /// Reverse the header's label/icon order (right-to-left layout)
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.style.direction = if rtl {
            LayoutDirection::RightToLeft
        } else {
            LayoutDirection::LeftToRight
        };
        self
    }

    /// Replace the whole style bag (metrics included)
    pub fn style(mut self, style: ComboStyle) -> Self {
        self.style = style;
        self
    }

    /// Spring parameters for the open/close animation
    pub fn spring_config(mut self, config: SpringConfig) -> Self {
        self.spring = config;
        self
    }

    pub fn on_value_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_value_select = Some(Arc::new(callback));
        self
    }

    /// Share an existing state store instead of creating a private one
    pub fn store(mut self, store: StateStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the widget; it starts closed, settled at progress 0
    pub fn build(self, scheduler: SchedulerHandle) -> ComboBox {
        let store = self.store.unwrap_or_default();
        let selection = SelectionState::new(&store, self.default_value);
        let driver = AnimationDriver::new(scheduler, self.spring);

        ComboBox {
            options: OptionList::new(self.values),
            selection,
            driver,
            style: self.style,
            on_value_select: self.on_value_select,
            store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let combo = ComboBox::builder(["A", "B"]).build(SchedulerHandle::new());
        assert_eq!(combo.label(), "");
        assert!(!combo.is_open());
        assert_eq!(combo.style().background, Color::WHITE);
        assert_eq!(combo.options().len(), 2);
    }

    #[test]
    fn test_background_color_parsing() {
        let combo = ComboBox::builder(["A"])
            .background_color("#20242c")
            .unwrap()
            .build(SchedulerHandle::new());
        assert!((combo.style().background.r - 0x20 as f32 / 255.0).abs() < 1e-6);

        assert!(ComboBox::builder(["A"]).background_color("blurple").is_err());
    }

    #[test]
    fn test_rtl_flips_header_children_only() {
        let scheduler = SchedulerHandle::new();
        let ltr = ComboBox::builder(["A", "B"]).build(scheduler.clone());
        let rtl = ComboBox::builder(["A", "B"]).rtl(true).build(scheduler);

        let ltr_frame = ltr.frame();
        let rtl_frame = rtl.frame();

        assert!(matches!(ltr_frame.header.children[0], HeaderChild::Label(_)));
        assert!(matches!(rtl_frame.header.children[0], HeaderChild::Icon(_)));

        // Option rows are unaffected by direction
        let texts = |f: &ComboFrame| {
            f.list
                .rows
                .iter()
                .map(|r| (r.index, r.text.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(texts(&ltr_frame), texts(&rtl_frame));
    }

    #[test]
    fn test_empty_values_degrade_gracefully() {
        let scheduler = SchedulerHandle::new();
        let mut combo = ComboBox::builder(Vec::<String>::new()).build(scheduler.clone());

        let frame = combo.frame();
        assert_eq!(frame.list.height, 0.0);
        assert!(frame.list.rows.is_empty());

        // Toggling the empty list still animates without incident
        combo.toggle();
        while scheduler.tick(1.0 / 60.0) {}
        assert!(combo.is_open());
    }

    #[test]
    fn test_select_option_order_label_then_callback_then_close() {
        use std::sync::Mutex;

        let scheduler = SchedulerHandle::new();
        let store = StateStore::new();
        let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let callback_events = events.clone();
        let mut combo = ComboBox::builder(["A", "B", "C"])
            .store(store.clone())
            .on_value_select(move |index| {
                callback_events.lock().unwrap().push(format!("callback {index}"));
            })
            .build(scheduler);

        // Log every state write alongside the expansion flag at that moment
        let label_state = combo.label_state();
        let open_state = combo.open_state();
        let write_events = events.clone();
        store.on_change(move |_| {
            write_events.lock().unwrap().push(format!(
                "write label={} open={}",
                label_state.get(),
                open_state.get()
            ));
        });

        combo.toggle();
        combo.select_option(1);

        let log = events.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                // header tap
                "write label= open=true".to_string(),
                // pick: label lands first, callback sees pre-close state,
                // then the closing flip
                "write label=B open=true".to_string(),
                "callback 1".to_string(),
                "write label=B open=false".to_string(),
            ]
        );
        drop(log);

        assert_eq!(combo.label(), "B");
        assert!(!combo.is_open());
        assert!(!combo.driver().target_open());
    }

    #[test]
    fn test_callback_fires_exactly_once_per_pick() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();
        let mut combo = ComboBox::builder(["A", "B", "C"])
            .on_value_select(move |_| {
                calls_in.fetch_add(1, Ordering::SeqCst);
            })
            .build(SchedulerHandle::new());

        combo.toggle();
        combo.select_option(2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(combo.label(), "C");
    }
}
