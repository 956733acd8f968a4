//! Desktop simulator for the wheel-view picker.
//!
//! Shows an hours wheel and a cyclic minutes wheel side by side in an SDL2
//! window via `embedded-graphics-simulator`. The mouse stands in for a finger:
//! press, drag and release are forwarded as touch events.
//!
//! # Key bindings
//!
//! | Key | Action                              |
//! |-----|-------------------------------------|
//! | A   | Cycle text alignment                |
//! | B   | Toggle the next-item label          |
//! | C   | Toggle cyclic scrolling for hours   |
//! | Q   | Quit                                |

use std::time::{Duration, Instant};

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Text};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use wheel_view::config::WheelConfig;
use wheel_view::ui::{
    Drawable, TextAlign, TouchEvent, TouchPoint, Touchable, WheelStyle, WheelView,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Wheels
// ---------------------------------------------------------------------------

fn labels(count: u32) -> Vec<String> {
    (0..count).map(|n| format!("{:02}", n)).collect()
}

fn hours_wheel(style: WheelStyle) -> WheelView {
    let bounds = Rectangle::new(Point::new(40, 0), Size::new(100, DISPLAY_HEIGHT_PX));
    let mut wheel = WheelView::new(bounds, style);
    wheel.set_items_and_scale(labels(24), "hour");
    wheel.set_selected_index(8);
    wheel
}

fn minutes_wheel(style: WheelStyle) -> WheelView {
    let bounds = Rectangle::new(Point::new(180, 0), Size::new(100, DISPLAY_HEIGHT_PX));
    let mut wheel = WheelView::from_config(bounds, &WheelConfig::new(style, true));
    wheel.set_items_and_scale(labels(60), "min");
    wheel.set_selected_index(30);
    wheel
}

fn next_alignment(align: TextAlign) -> TextAlign {
    match align {
        TextAlign::Left => TextAlign::Center,
        TextAlign::Center => TextAlign::Right,
        TextAlign::Right => TextAlign::Left,
    }
}

/// Convert an SDL position into a touch point, clamped onto the screen.
fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(
        point.x.clamp(0, DISPLAY_WIDTH_PX as i32 - 1) as u16,
        point.y.clamp(0, DISPLAY_HEIGHT_PX as i32 - 1) as u16,
    )
}

fn draw_all(
    display: &mut SimulatorDisplay<Rgb565>,
    wheels: &mut [WheelView; 2],
) -> Result<(), core::convert::Infallible> {
    display.clear(Rgb565::BLACK)?;

    let separator = MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE);
    Text::with_alignment(
        ":",
        Point::new(DISPLAY_WIDTH_PX as i32 / 2, DISPLAY_HEIGHT_PX as i32 / 2 + 6),
        separator,
        Alignment::Center,
    )
    .draw(display)?;

    for wheel in wheels.iter_mut() {
        wheel.draw(display)?;
        wheel.mark_clean();
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting wheel-view simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: A=Alignment  B=Bottom label  C=Cyclic hours  Q=Quit");

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Wheel Simulator", &output_settings);

    let mut style = WheelStyle::default();
    let mut wheels = [hours_wheel(style), minutes_wheel(style)];
    let mut selection = wheels.each_ref().map(|w| w.selected_index());

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = draw_all(&mut display, &mut wheels);
    window.update(&display);

    let mut pressed = false;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            let now = embassy_time::Instant::now();

            let touch = match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    match keycode {
                        Keycode::Q | Keycode::Escape => break 'running,
                        Keycode::A => {
                            style = style.with_align(next_alignment(style.align));
                            info!("Alignment → {:?}", style.align);
                        }
                        Keycode::B => {
                            style = style.with_bottom_text(!style.show_bottom_text);
                            info!("Bottom label → {}", style.show_bottom_text);
                        }
                        Keycode::C => {
                            let cyclic = !wheels[0].is_cyclic();
                            wheels[0].set_cyclic(cyclic);
                            info!("Cyclic hours → {}", cyclic);
                        }
                        _ => {}
                    }
                    for wheel in wheels.iter_mut() {
                        wheel.set_style(style);
                    }
                    None
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    pressed = true;
                    Some(TouchEvent::press(touch_point(point), now))
                }

                SimulatorEvent::MouseMove { point } if pressed => {
                    Some(TouchEvent::drag(touch_point(point), now))
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    pressed = false;
                    Some(TouchEvent::release(touch_point(point), now))
                }

                _ => None,
            };

            if let Some(touch) = touch {
                for wheel in wheels.iter_mut() {
                    wheel.handle_touch(touch);
                }
            }
        }

        // --- Animation tick -----------------------------------------------
        let now = embassy_time::Instant::now();
        for wheel in wheels.iter_mut() {
            wheel.update(now);
        }

        for (wheel, last) in wheels.iter().zip(selection.iter_mut()) {
            if !wheel.is_scrolling() && wheel.selected_index() != *last {
                *last = wheel.selected_index();
                info!("Selected {:?} {}", wheel.selected_item(), wheel.caption());
            }
        }

        // --- Render -------------------------------------------------------
        if wheels.iter().any(|w| w.is_dirty()) {
            if let Err(e) = draw_all(&mut display, &mut wheels) {
                log::error!("Draw error: {:?}", e);
            }
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
