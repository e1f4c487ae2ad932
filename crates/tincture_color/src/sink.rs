//! The color sink consumed at render time.
//!
//! A sink is whatever applies a normalized RGBA color to ambient draw state,
//! typically an immediate-mode color stack. Sinks are only safe to call from
//! the render thread.

/// Receiver of normalized RGBA colors.
pub trait ColorSink {
    /// Applies a color; every component is in `0.0..=1.0`.
    fn apply(&mut self, r: f32, g: f32, b: f32, a: f32);
}

impl<S: ColorSink + ?Sized> ColorSink for &mut S {
    #[inline]
    fn apply(&mut self, r: f32, g: f32, b: f32, a: f32) {
        (**self).apply(r, g, b, a);
    }
}

impl<S: ColorSink + ?Sized> ColorSink for Box<S> {
    #[inline]
    fn apply(&mut self, r: f32, g: f32, b: f32, a: f32) {
        (**self).apply(r, g, b, a);
    }
}

/// Records every applied color, in call order. Handy for headless rendering.
impl ColorSink for Vec<[f32; 4]> {
    fn apply(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.push([r, g, b, a]);
    }
}
