//! Clock face - display mode state and the analog/digital renderers

use nannou::prelude::*;
use shared::{hour_label_in, DigitStyle, WallClockSample};

use crate::drawing::{Canvas, Palette, Stroke};
use crate::geometry::{
    degree_ring, hour_numerals, hub_radii, measure_square, needle_tips, ViewBounds,
    DEGREE_STROKE, DIGITAL_FONT, MERIDIEM_SCALE, NEEDLE_STROKE, NUMERAL_FONT,
};

/// What the face shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Analog,
    Digital,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Analog => DisplayMode::Digital,
            DisplayMode::Digital => DisplayMode::Analog,
        }
    }
}

/// Everything a single frame is drawn from, apart from the time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub bounds: ViewBounds,
    pub mode: DisplayMode,
    pub palette: Palette,
    pub digits: DigitStyle,
}

/// The clock widget: owns the display mode and a pending-repaint flag
#[derive(Debug)]
pub struct ClockFace {
    mode: DisplayMode,
    padding: f32,
    digits: DigitStyle,
    repaint: bool,
}

impl ClockFace {
    pub fn new(padding: f32, digits: DigitStyle) -> Self {
        Self {
            mode: DisplayMode::default(),
            padding: padding.max(0.0),
            digits,
            repaint: true,
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.mode != mode {
            log::info!("display mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.repaint = true;
    }

    pub fn toggle(&mut self) {
        self.set_display_mode(self.mode.toggled());
    }

    /// The ticker fired; the next frame reads the clock again
    pub fn on_time_advanced(&mut self) {
        self.repaint = true;
    }

    /// Whether a repaint was requested since the last call
    pub fn take_repaint(&mut self) -> bool {
        std::mem::replace(&mut self.repaint, false)
    }

    /// Side of the largest square that fits in the padded available space
    pub fn measure(&self, available_width: f32, available_height: f32) -> f32 {
        measure_square(available_width, available_height, self.padding)
    }

    pub fn render_state(&self, side: f32) -> RenderState {
        RenderState {
            bounds: ViewBounds::new(side),
            mode: self.mode,
            palette: Palette::default(),
            digits: self.digits,
        }
    }

    /// Draw the face in its current mode for the live system time
    pub fn render_now<C: Canvas>(&self, canvas: &mut C, side: f32) {
        render(canvas, &self.render_state(side), &WallClockSample::now());
    }
}

/// Draw one frame of the face
pub fn render<C: Canvas>(canvas: &mut C, state: &RenderState, time: &WallClockSample) {
    match state.mode {
        DisplayMode::Analog => {
            draw_degrees(canvas, state);
            draw_hour_values(canvas, state);
            draw_needles(canvas, state, time);
            draw_center(canvas, state);
        }
        DisplayMode::Digital => draw_digital(canvas, state, time),
    }
}

fn draw_degrees<C: Canvas>(canvas: &mut C, state: &RenderState) {
    let width = state.bounds.side * DEGREE_STROKE;
    for tick in degree_ring(state.bounds) {
        let stroke = Stroke {
            width,
            color: state.palette.degrees,
            alpha: tick.alpha,
        };
        canvas.line(tick.start, tick.end, stroke);
    }
}

fn draw_hour_values<C: Canvas>(canvas: &mut C, state: &RenderState) {
    let font_size = state.bounds.side * NUMERAL_FONT;
    for (index, (_, center)) in hour_numerals(state.bounds).into_iter().enumerate() {
        let label = hour_label_in(index, state.digits);
        let size = canvas.measure_text(&label, font_size);
        canvas.text(&label, font_size, center - size / 2.0, state.palette.numerals);
    }
}

fn draw_needles<C: Canvas>(canvas: &mut C, state: &RenderState, time: &WallClockSample) {
    let center = state.bounds.center();
    let width = state.bounds.side * NEEDLE_STROKE;
    let tips = needle_tips(state.bounds, time);

    canvas.line(center, tips.hour, Stroke::solid(width, state.palette.hour_needle));
    canvas.line(center, tips.minute, Stroke::solid(width, state.palette.minute_needle));
    canvas.line(
        center,
        tips.second,
        Stroke::solid(width * 0.5, state.palette.second_needle),
    );
}

fn draw_center<C: Canvas>(canvas: &mut C, state: &RenderState) {
    let center = state.bounds.center();
    let (outer, inner) = hub_radii(state.bounds);
    canvas.circle(center, outer, state.palette.hub_outer);
    canvas.circle(center, inner, state.palette.hub_inner);
}

/// "HH:MM:SS" at full size followed by a small raised meridiem
fn draw_digital<C: Canvas>(canvas: &mut C, state: &RenderState, time: &WallClockSample) {
    let readout = time.format_digital_in(state.digits);
    let (digits, meridiem) = readout.split_at(readout.len() - 2);

    let base = state.bounds.side * DIGITAL_FONT;
    let small = base * MERIDIEM_SCALE;
    let digits_size = canvas.measure_text(digits, base);
    let meridiem_size = canvas.measure_text(meridiem, small);

    let total = vec2(
        digits_size.x + meridiem_size.x,
        digits_size.y.max(meridiem_size.y),
    );
    let top_left = state.bounds.center() - total / 2.0;

    canvas.text(digits, base, top_left, state.palette.numerals);
    canvas.text(
        meridiem,
        small,
        top_left + vec2(digits_size.x, 0.0),
        state.palette.numerals,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{NeedleLengths, DIM_ALPHA, FULL_ALPHA, TICK_COUNT};
    use shared::Meridiem;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Line(Point2, Point2, Stroke),
        Circle(Point2, f32, Srgb<u8>),
        Text(String, f32, Point2),
    }

    /// Records primitives; every glyph is 0.5em wide and 1em tall
    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl RecordingCanvas {
        fn lines(&self) -> Vec<(Point2, Point2, Stroke)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Line(a, b, s) => Some((*a, *b, *s)),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<(String, f32, Point2)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t, size, at) => Some((t.clone(), *size, *at)),
                    _ => None,
                })
                .collect()
        }

        fn circles(&self) -> Vec<(Point2, f32, Srgb<u8>)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Circle(c, r, color) => Some((*c, *r, *color)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn line(&mut self, start: Point2, end: Point2, stroke: Stroke) {
            self.ops.push(Op::Line(start, end, stroke));
        }

        fn circle(&mut self, center: Point2, radius: f32, color: Srgb<u8>) {
            self.ops.push(Op::Circle(center, radius, color));
        }

        fn text(&mut self, text: &str, font_size: f32, top_left: Point2, _color: Srgb<u8>) {
            self.ops.push(Op::Text(text.to_string(), font_size, top_left));
        }

        fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
            vec2(text.chars().count() as f32 * font_size * 0.5, font_size)
        }
    }

    fn close(a: Point2, b: Point2) -> bool {
        (a - b).length() < 1e-3
    }

    fn state(side: f32, mode: DisplayMode) -> RenderState {
        RenderState {
            bounds: ViewBounds::new(side),
            mode,
            palette: Palette::default(),
            digits: DigitStyle::ASCII,
        }
    }

    #[test]
    fn test_initial_mode_is_analog() {
        let face = ClockFace::new(0.0, DigitStyle::ASCII);
        assert_eq!(face.display_mode(), DisplayMode::Analog);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut face = ClockFace::new(0.0, DigitStyle::ASCII);
        face.toggle();
        assert_eq!(face.display_mode(), DisplayMode::Digital);
        face.toggle();
        assert_eq!(face.display_mode(), DisplayMode::Analog);
    }

    #[test]
    fn test_set_display_mode_is_idempotent() {
        let mut face = ClockFace::new(0.0, DigitStyle::ASCII);
        face.take_repaint();
        face.set_display_mode(DisplayMode::Digital);
        face.set_display_mode(DisplayMode::Digital);
        assert_eq!(face.display_mode(), DisplayMode::Digital);
        assert!(face.take_repaint());
        assert!(!face.take_repaint());
    }

    #[test]
    fn test_time_advance_requests_repaint_only() {
        let mut face = ClockFace::new(0.0, DigitStyle::ASCII);
        assert!(face.take_repaint());
        face.on_time_advanced();
        assert!(face.take_repaint());
        assert_eq!(face.display_mode(), DisplayMode::Analog);
    }

    #[test]
    fn test_measure_uses_padding() {
        let face = ClockFace::new(20.0, DigitStyle::ASCII);
        assert_eq!(face.measure(400.0, 300.0), 260.0);
        assert_eq!(face.measure(30.0, 30.0), 0.0);
    }

    #[test]
    fn test_analog_draw_order() {
        let mut canvas = RecordingCanvas::default();
        let time = WallClockSample::new(3, 0, 0, Meridiem::AM);
        render(&mut canvas, &state(300.0, DisplayMode::Analog), &time);

        // 60 ticks, 12 numerals, 3 needles, 2 hub circles
        assert_eq!(canvas.ops.len(), TICK_COUNT + 12 + 3 + 2);
        assert!(matches!(canvas.ops[0], Op::Line(..)));
        assert!(matches!(canvas.ops[TICK_COUNT], Op::Text(..)));
        assert!(matches!(canvas.ops.last(), Some(Op::Circle(..))));
    }

    #[test]
    fn test_analog_ticks_alpha() {
        let mut canvas = RecordingCanvas::default();
        let time = WallClockSample::new(0, 0, 0, Meridiem::AM);
        render(&mut canvas, &state(200.0, DisplayMode::Analog), &time);

        let lines = canvas.lines();
        let ticks = &lines[..TICK_COUNT];
        assert_eq!(ticks.iter().filter(|(_, _, s)| s.alpha == FULL_ALPHA).count(), 12);
        assert_eq!(ticks.iter().filter(|(_, _, s)| s.alpha == DIM_ALPHA).count(), 48);
        assert!(ticks.iter().all(|(_, _, s)| (s.width - 2.0).abs() < 1e-4));
    }

    #[test]
    fn test_analog_needles_at_three() {
        let mut canvas = RecordingCanvas::default();
        let time = WallClockSample::new(3, 0, 0, Meridiem::PM);
        let st = state(300.0, DisplayMode::Analog);
        render(&mut canvas, &st, &time);

        let lines = canvas.lines();
        let needles = &lines[TICK_COUNT..];
        assert_eq!(needles.len(), 3);

        let center = pt2(150.0, 150.0);
        let lengths = NeedleLengths::for_radius(150.0);
        let (start, hour_tip, hour_stroke) = needles[0];
        assert!(close(start, center));
        assert!(close(hour_tip, pt2(150.0 + lengths.hour, 150.0)));

        let (_, minute_tip, minute_stroke) = needles[1];
        assert!(close(minute_tip, pt2(150.0, 150.0 - lengths.minute)));

        let (_, _, second_stroke) = needles[2];
        assert_eq!(hour_stroke.width, minute_stroke.width);
        assert!((second_stroke.width - hour_stroke.width / 2.0).abs() < 1e-5);
        assert_eq!(second_stroke.color, st.palette.second_needle);
    }

    #[test]
    fn test_analog_numerals_centered() {
        let mut canvas = RecordingCanvas::default();
        let time = WallClockSample::new(0, 0, 0, Meridiem::AM);
        render(&mut canvas, &state(200.0, DisplayMode::Analog), &time);

        let texts = canvas.texts();
        let labels: Vec<&str> = texts.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(
            labels,
            ["12", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11"]
        );

        // "12" at 20px is 20x20 and centered on (100, 25)
        let (_, size, top_left) = &texts[0];
        assert!((size - 20.0).abs() < 1e-4);
        assert!(close(*top_left, pt2(90.0, 15.0)));
    }

    #[test]
    fn test_analog_hub_outer_then_inner() {
        let mut canvas = RecordingCanvas::default();
        let time = WallClockSample::new(0, 0, 0, Meridiem::AM);
        let st = state(200.0, DisplayMode::Analog);
        render(&mut canvas, &st, &time);

        let circles = canvas.circles();
        assert_eq!(circles.len(), 2);
        assert!(close(circles[0].0, pt2(100.0, 100.0)));
        assert!((circles[0].1 - 4.0).abs() < 1e-4);
        assert!((circles[1].1 - 2.0).abs() < 1e-4);
        assert_eq!(circles[0].2, st.palette.hub_outer);
        assert_eq!(circles[1].2, st.palette.hub_inner);
        assert_ne!(circles[0].2, circles[1].2);
    }

    #[test]
    fn test_digital_readout_layout() {
        let mut canvas = RecordingCanvas::default();
        let time = WallClockSample::new(1, 5, 9, Meridiem::AM);
        render(&mut canvas, &state(300.0, DisplayMode::Digital), &time);

        let texts = canvas.texts();
        assert_eq!(texts.len(), 2);
        assert!(canvas.lines().is_empty());
        assert!(canvas.circles().is_empty());

        let (digits, base, digits_at) = &texts[0];
        let (meridiem, small, meridiem_at) = &texts[1];
        assert_eq!(format!("{}{}", digits, meridiem), "01:05:09AM");
        assert_eq!(meridiem, "AM");
        assert!((base - 60.0).abs() < 1e-4);
        assert!((small - 18.0).abs() < 1e-4);

        // 8 glyphs at 30px + 2 glyphs at 9px = 258px wide, 60px tall
        assert!(close(*digits_at, pt2(150.0 - 129.0, 120.0)));
        assert!(close(*meridiem_at, pt2(150.0 - 129.0 + 240.0, 120.0)));
    }

    #[test]
    fn test_render_now_follows_mode() {
        let mut face = ClockFace::new(0.0, DigitStyle::ASCII);
        face.toggle();
        let mut canvas = RecordingCanvas::default();
        face.render_now(&mut canvas, 300.0);
        let texts = canvas.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0.len(), 8);
        assert!(texts[1].0 == "AM" || texts[1].0 == "PM");

        face.toggle();
        let mut canvas = RecordingCanvas::default();
        face.render_now(&mut canvas, 300.0);
        assert_eq!(canvas.lines().len(), TICK_COUNT + 3);
        assert_eq!(canvas.circles().len(), 2);
    }

    #[test]
    fn test_localized_digits() {
        let mut st = state(300.0, DisplayMode::Digital);
        st.digits = DigitStyle::for_locale("ar-EG");
        let time = WallClockSample::new(1, 5, 9, Meridiem::AM);

        let mut canvas = RecordingCanvas::default();
        render(&mut canvas, &st, &time);
        let texts = canvas.texts();
        assert_eq!(texts[0].0, "٠١:٠٥:٠٩");
        assert_eq!(texts[1].0, "AM");

        st.mode = DisplayMode::Analog;
        let mut canvas = RecordingCanvas::default();
        render(&mut canvas, &st, &time);
        let labels: Vec<String> = canvas.texts().into_iter().map(|(t, _, _)| t).collect();
        assert_eq!(labels[0], "١٢");
        assert_eq!(labels[1], "٠١");
        assert_eq!(labels[11], "١١");
    }
}
