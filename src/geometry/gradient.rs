/// A gradient expressed as "1 in N".
///
/// `ratio` is signed: horizontal run divided by rise, so a fall gives a
/// negative ratio. `1 / ratio` is the slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub ratio: f64,
}

impl Gradient {
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    /// Rise per unit of horizontal run.
    #[must_use]
    pub fn slope(&self) -> f64 {
        1.0 / self.ratio
    }

    /// The unsigned `N` of "1 in N".
    #[must_use]
    pub fn one_in(&self) -> f64 {
        self.ratio.abs()
    }

    /// True when the gradient descends from start to end.
    #[must_use]
    pub fn is_fall(&self) -> bool {
        self.ratio < 0.0
    }

    /// Text written into gradient markers: `N` rounded to a whole number.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.0}", self.one_in())
    }
}
