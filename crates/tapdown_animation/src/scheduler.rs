//! Frame-driven animation scheduler
//!
//! Owns every live spring and advances them when the host calls
//! [`SchedulerHandle::tick`] from its platform frame callback. Starting an
//! animation returns immediately; progress arrives on subsequent ticks.
//!
//! There is no background thread and no process-global handle: the widget
//! runs on the UI thread, the host owns the scheduler, and `tick`'s return
//! value tells the host whether to request another frame.
//!
//! Springs are registered by [`AnimatedValue`] and removed when the value is
//! dropped, so an unmounted widget can never be advanced by a later frame.

use crate::spring::{Spring, SpringConfig};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Handle to a registered spring animation
    pub struct SpringId;
}

struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
}

/// Shared handle to the animation scheduler
///
/// Cheap to clone; all clones drive the same set of springs.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                springs: SlotMap::with_key(),
            })),
        }
    }

    /// Advance all springs by `dt` seconds
    ///
    /// Returns `true` while any spring is still in flight, i.e. the host
    /// should schedule another frame.
    pub fn tick(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let mut active = false;
        for (_, spring) in inner.springs.iter_mut() {
            spring.step(dt);
            if !spring.is_settled() {
                active = true;
            }
        }
        active
    }

    /// No spring currently needs another frame
    pub fn is_idle(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.springs.values().all(|s| s.is_settled())
    }

    /// Number of registered springs (live, settled or not)
    pub fn spring_count(&self) -> usize {
        self.inner.lock().unwrap().springs.len()
    }

    pub(crate) fn register_spring(&self, spring: Spring) -> SpringId {
        let id = self.inner.lock().unwrap().springs.insert(spring);
        tracing::trace!(?id, "spring registered");
        id
    }

    pub(crate) fn remove_spring(&self, id: SpringId) {
        self.inner.lock().unwrap().springs.remove(id);
        tracing::trace!(?id, "spring removed");
    }

    pub(crate) fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(spring) = self.inner.lock().unwrap().springs.get_mut(id) {
            spring.set_target(target);
        }
    }

    pub(crate) fn spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner.lock().unwrap().springs.get(id).map(|s| s.value())
    }

    pub(crate) fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .lock()
            .unwrap()
            .springs
            .get(id)
            .map(|s| s.is_settled())
            .unwrap_or(true)
    }
}

impl Default for SchedulerHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// A spring-backed scalar value
///
/// The spring is registered lazily on the first retarget that actually moves
/// the value, and removed again when the `AnimatedValue` is dropped.
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    /// Last known value while no spring is registered
    current: f32,
    target: f32,
}

impl AnimatedValue {
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            current: initial,
            target: initial,
        }
    }

    /// Retarget; starts animating if the target differs from the value
    pub fn set_target(&mut self, target: f32) {
        self.target = target;

        if let Some(id) = self.spring_id {
            self.handle.set_spring_target(id, target);
        } else if (target - self.current).abs() > 1e-4 {
            let spring = Spring::new(self.config, self.current);
            let id = self.handle.register_spring(spring);
            self.handle.set_spring_target(id, target);
            self.spring_id = Some(id);
        }
    }

    /// Current animated value
    pub fn get(&self) -> f32 {
        match self.spring_id {
            Some(id) => self.handle.spring_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// Jump to a value with no animation, dropping any active spring
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
        self.current = value;
        self.target = value;
    }

    /// True while the spring is still moving toward its target
    pub fn is_animating(&self) -> bool {
        match self.spring_id {
            Some(id) => !self.handle.is_spring_settled(id),
            None => false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_idle(scheduler: &SchedulerHandle) {
        let mut frames = 0;
        while scheduler.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 1000, "animation failed to settle");
        }
    }

    #[test]
    fn test_animated_value_reaches_target() {
        let scheduler = SchedulerHandle::new();
        let mut value = AnimatedValue::new(scheduler.clone(), 0.0, SpringConfig::gentle());

        value.set_target(1.0);
        assert!(value.is_animating());

        run_until_idle(&scheduler);
        assert!((value.get() - 1.0).abs() < 1e-2);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_lazy_registration() {
        let scheduler = SchedulerHandle::new();
        let mut value = AnimatedValue::new(scheduler.clone(), 0.5, SpringConfig::gentle());
        assert_eq!(scheduler.spring_count(), 0);

        // Retargeting to the current value registers nothing
        value.set_target(0.5);
        assert_eq!(scheduler.spring_count(), 0);

        value.set_target(1.0);
        assert_eq!(scheduler.spring_count(), 1);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let scheduler = SchedulerHandle::new();
        let mut value = AnimatedValue::new(scheduler.clone(), 0.0, SpringConfig::gentle());

        value.set_target(1.0);
        for _ in 0..5 {
            scheduler.tick(1.0 / 60.0);
        }
        let partway = value.get();
        assert!(partway > 0.0 && partway < 1.0);

        // Redirect to closed; the same spring turns around
        value.set_target(0.0);
        assert_eq!(scheduler.spring_count(), 1);

        run_until_idle(&scheduler);
        assert!(value.get().abs() < 1e-2);
    }

    #[test]
    fn test_set_immediate_skips_animation() {
        let scheduler = SchedulerHandle::new();
        let mut value = AnimatedValue::new(scheduler.clone(), 0.0, SpringConfig::gentle());

        value.set_target(1.0);
        value.set_immediate(0.25);

        assert_eq!(scheduler.spring_count(), 0);
        assert_eq!(value.get(), 0.25);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_drop_removes_spring() {
        let scheduler = SchedulerHandle::new();
        {
            let mut value = AnimatedValue::new(scheduler.clone(), 0.0, SpringConfig::gentle());
            value.set_target(1.0);
            assert_eq!(scheduler.spring_count(), 1);
        }
        // Nothing left for a later frame callback to advance
        assert_eq!(scheduler.spring_count(), 0);
        assert!(scheduler.is_idle());
    }
}
