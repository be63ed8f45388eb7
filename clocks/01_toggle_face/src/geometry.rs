//! Geometry module - pure layout math for the clock face
//!
//! All positions are in the view-local frame: origin at the top-left corner of
//! the square face, x to the right, y down.

use nannou::prelude::*;
use shared::{hour_label, WallClockSample};

/// Degrees between adjacent tick marks on the degree ring
pub const TICK_STEP_DEG: u32 = 6;
/// Number of tick marks on the degree ring
pub const TICK_COUNT: usize = (360 / TICK_STEP_DEG) as usize;

/// Alpha of ticks that don't fall on a 15° boundary
pub const DIM_ALPHA: u8 = 140;
pub const FULL_ALPHA: u8 = 255;

const TICK_OUTER: f32 = 0.99;
const TICK_INNER: f32 = 0.95;
const NUMERAL_RADIUS: f32 = 0.75;
const HUB_OUTER: f32 = 0.04;
const HUB_INNER: f32 = 0.02;

/// Stroke widths and font sizes, as fractions of the side length
pub const DEGREE_STROKE: f32 = 0.010;
pub const NEEDLE_STROKE: f32 = 0.015;
pub const NUMERAL_FONT: f32 = 0.1;
pub const DIGITAL_FONT: f32 = 0.2;
/// Size of the meridiem suffix relative to the digital base font
pub const MERIDIEM_SCALE: f32 = 0.3;

/// Square region the face is laid out in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Side length of the square
    pub side: f32,
}

impl ViewBounds {
    pub fn new(side: f32) -> Self {
        Self { side: side.max(0.0) }
    }

    pub fn radius(&self) -> f32 {
        self.side / 2.0
    }

    pub fn center(&self) -> Point2 {
        pt2(self.radius(), self.radius())
    }
}

/// Largest square that fits in the available space after padding on every side
pub fn measure_square(available_width: f32, available_height: f32, padding: f32) -> f32 {
    let width = available_width - 2.0 * padding;
    let height = available_height - 2.0 * padding;
    width.min(height).max(0.0)
}

/// Needle lengths for a given face radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleLengths {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl NeedleLengths {
    pub fn for_radius(radius: f32) -> Self {
        Self {
            hour: radius * 0.45,
            minute: radius * 0.55,
            second: radius * 0.70,
        }
    }
}

/// Hour needle angle in degrees clockwise from 12 o'clock
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    (360.0 * hour as f32 / 12.0 + 30.0 * minute as f32 / 60.0) % 360.0
}

/// Minute needle angle in degrees clockwise from 12 o'clock
pub fn minute_angle(minute: u32) -> f32 {
    360.0 * minute as f32 / 60.0
}

/// Second needle angle in degrees clockwise from 12 o'clock
pub fn second_angle(second: u32) -> f32 {
    360.0 * second as f32 / 60.0
}

/// Point at `length` from `center`, `degrees` clockwise from vertical
pub fn dial_point(center: Point2, length: f32, degrees: f32) -> Point2 {
    let theta = degrees.to_radians();
    pt2(center.x + length * theta.sin(), center.y - length * theta.cos())
}

/// Point at `length` from `center`, `degrees` counter-clockwise from the x axis
pub fn polar_point(center: Point2, length: f32, degrees: f32) -> Point2 {
    let theta = degrees.to_radians();
    pt2(center.x + length * theta.cos(), center.y - length * theta.sin())
}

/// One mark on the degree ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub degrees: u32,
    pub start: Point2,
    pub end: Point2,
    pub alpha: u8,
}

/// The 60 tick marks, counter-clockwise from 3 o'clock
pub fn degree_ring(bounds: ViewBounds) -> Vec<TickMark> {
    let center = bounds.center();
    let outer = bounds.radius() * TICK_OUTER;
    let inner = bounds.radius() * TICK_INNER;

    (0..TICK_COUNT as u32)
        .map(|i| i * TICK_STEP_DEG)
        .map(|degrees| {
            let alpha = if degrees % 90 == 0 || degrees % 15 == 0 {
                FULL_ALPHA
            } else {
                DIM_ALPHA
            };
            let angle = degrees as f32;
            TickMark {
                degrees,
                start: polar_point(center, outer, angle),
                end: polar_point(center, inner, angle),
                alpha,
            }
        })
        .collect()
}

/// Center point and text of each hour numeral, starting with "12" at the top
pub fn hour_numerals(bounds: ViewBounds) -> Vec<(&'static str, Point2)> {
    let center = bounds.center();
    let r_text = bounds.radius() * NUMERAL_RADIUS;

    (0..12)
        .map(|i| {
            let degrees = 360.0 * i as f32 / 12.0;
            (hour_label(i), dial_point(center, r_text, degrees))
        })
        .collect()
}

/// Tip positions of the three needles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleTips {
    pub hour: Point2,
    pub minute: Point2,
    pub second: Point2,
}

pub fn needle_tips(bounds: ViewBounds, time: &WallClockSample) -> NeedleTips {
    let center = bounds.center();
    let lengths = NeedleLengths::for_radius(bounds.radius());

    NeedleTips {
        hour: dial_point(center, lengths.hour, hour_angle(time.hour, time.minute)),
        minute: dial_point(center, lengths.minute, minute_angle(time.minute)),
        second: dial_point(center, lengths.second, second_angle(time.second)),
    }
}

/// Outer and inner radius of the center hub
pub fn hub_radii(bounds: ViewBounds) -> (f32, f32) {
    (bounds.radius() * HUB_OUTER, bounds.radius() * HUB_INNER)
}
