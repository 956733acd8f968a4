// src/ui/components/wheel/view.rs
//! The wheel widget
//!
//! [`WheelView`] owns the item list, the style and the gesture pipeline. The
//! host feeds it touch events through [`Touchable`], calls
//! [`WheelView::update`] once per frame to advance flings and settles, and
//! redraws it through [`Drawable`] whenever it reports itself dirty.

use alloc::string::String;
use alloc::vec::Vec;
use embassy_time::Instant;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use super::animation::{ScrollAnimator, Scroller};
use super::bridge::GestureBridge;
use super::gesture::{GestureDetector, GestureRecognizer};
use super::metrics::WheelMetrics;
use super::render::WheelFrame;
use super::scroll_state::ScrollState;
use crate::config::WheelConfig;
use crate::ui::core::{Drawable, TouchEvent, TouchPhase, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::WheelStyle;

/// Touch driven picker showing one selected item out of a list
///
/// # Examples
///
/// ```ignore
/// let mut hours = WheelView::new(
///     Rectangle::new(Point::new(20, 40), Size::new(120, 160)),
///     WheelStyle::new().with_bottom_text(true),
/// );
/// hours.set_items_and_scale((0..24).map(|h| format!("{:02}", h)).collect(), "hour");
/// hours.set_selected_index(8);
/// ```
pub struct WheelView<A: ScrollAnimator = Scroller, G: GestureRecognizer = GestureDetector> {
    bounds: Rectangle,
    style: WheelStyle,
    metrics: WheelMetrics,
    items: Vec<String>,
    caption: String,
    detector: G,
    bridge: GestureBridge<A>,
    dirty: bool,
}

impl WheelView {
    pub fn new(bounds: Rectangle, style: WheelStyle) -> Self {
        Self::with_parts(bounds, style, Scroller::new(), GestureDetector::new())
    }

    pub fn from_config(bounds: Rectangle, config: &WheelConfig) -> Self {
        let mut view = Self::new(bounds, config.style);
        view.set_cyclic(config.cyclic);
        view
    }
}

impl<A: ScrollAnimator, G: GestureRecognizer> WheelView<A, G> {
    /// Build a wheel around a custom animator and gesture recognizer
    pub fn with_parts(bounds: Rectangle, style: WheelStyle, animator: A, detector: G) -> Self {
        let metrics = WheelMetrics::new(&style);
        let mut state = ScrollState::new(metrics.item_height());
        state.set_widget_height(bounds.size.height);

        Self {
            bounds,
            style,
            metrics,
            items: Vec::new(),
            caption: String::new(),
            detector,
            bridge: GestureBridge::new(state, animator),
            dirty: true,
        }
    }

    /// Replace the items and the scale caption drawn above them
    ///
    /// The selection is pulled back onto the last item if it no longer exists.
    pub fn set_items_and_scale(&mut self, items: Vec<String>, caption: &str) {
        debug!("wheel: {} items, caption {:?}", items.len(), caption);

        if items.is_empty() {
            self.bridge.cancel();
            self.bridge.state_mut().finish();
            self.detector.reset();
        }

        self.items = items;
        self.caption = String::from(caption);
        self.bridge.state_mut().set_item_count(self.items.len());
        self.dirty = true;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn selected_index(&self) -> usize {
        self.bridge.state().selected()
    }

    /// Select an item, clamping into range
    pub fn set_selected_index(&mut self, index: usize) {
        self.bridge.state_mut().set_selected(index);
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected_index()).map(String::as_str)
    }

    pub fn is_cyclic(&self) -> bool {
        self.bridge.state().is_cyclic()
    }

    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.bridge.state_mut().set_cyclic(cyclic);
    }

    pub fn style(&self) -> &WheelStyle {
        &self.style
    }

    /// Restyle the wheel
    ///
    /// Fonts and margins follow the new style; the item height keeps the value
    /// derived at construction.
    pub fn set_style(&mut self, style: WheelStyle) {
        self.style = style;
        self.metrics.refresh(&style);
        self.dirty = true;
    }

    /// Current style and flags, ready to persist
    pub fn config(&self) -> WheelConfig {
        WheelConfig::new(self.style, self.is_cyclic())
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
        self.bridge.state_mut().set_widget_height(bounds.size.height);
        self.dirty = true;
    }

    /// Pixel distance that moves the wheel by one item
    pub fn item_height(&self) -> i32 {
        self.bridge.state().item_height()
    }

    /// Current sub-item offset of the drawn text
    pub fn scroll_offset(&self) -> i32 {
        self.bridge.state().offset()
    }

    /// True from the first drag until the wheel has settled
    pub fn is_scrolling(&self) -> bool {
        self.bridge.state().is_scrolling()
    }

    /// True while a fling or settle animation is running
    pub fn is_animating(&self) -> bool {
        self.bridge.is_animating()
    }

    /// Advance a running fling or settle to `now`
    ///
    /// Call once per frame. Returns whether the wheel is still animating.
    pub fn update(&mut self, now: Instant) -> bool {
        self.bridge.step(now)
    }

    fn frame(&self) -> WheelFrame<'_> {
        let state = self.bridge.state();
        WheelFrame {
            items: &self.items,
            caption: &self.caption,
            selected: state.selected(),
            offset: state.offset(),
            style: &self.style,
            metrics: &self.metrics,
            bounds: self.bounds,
        }
    }
}

impl<A: ScrollAnimator, G: GestureRecognizer> Drawable for WheelView<A, G> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.frame().draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.bridge.state().is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.bridge.state_mut().mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl<A: ScrollAnimator, G: GestureRecognizer> Touchable for WheelView<A, G> {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if self.items.is_empty() {
            return TouchResult::NotHandled;
        }

        // Only streams that started on the wheel belong to it
        let ours = match event.phase {
            TouchPhase::Press => self.contains_point(event.point),
            _ => self.detector.is_tracking(),
        };
        if !ours {
            return TouchResult::NotHandled;
        }

        let handled = self.detector.on_touch_event(event, &mut self.bridge);
        if !handled && event.is_terminal() {
            self.bridge.justify(event.time);
        }

        TouchResult::Handled
    }
}
