//! The four-parameter sinusoid state and its keyed-update contract.
//!
//! `y = A·sin(ω·x + φ) + B`. All four parameters are free reals: ω = 0
//! degenerates to a flat offset line and negative A flips the phase, both
//! of which the renderer handles. Phase is stored in **radians**; input
//! surfaces that deliver phase in multiples of π convert before calling
//! [`SineParams::update`].

// ─────────────────────────────────────────────────────────────────────────────
// ParamField
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies one of the four sinusoid parameters.
///
/// This is the closed update contract used by sliders and by
/// [`ParamsController`](crate::controllers::ParamsController): every
/// mutation names its target field explicitly instead of going through
/// stringly-keyed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    /// A — amplitude, in plot units. Vertical stretch.
    Amplitude,
    /// ω — angular frequency, in radians per plot unit. Horizontal stretch.
    Frequency,
    /// φ — phase offset, in radians. Horizontal shift.
    Phase,
    /// B — vertical offset, in plot units. Vertical shift.
    Offset,
}

impl ParamField {
    /// All fields, in display order (matches the control panel top-to-bottom).
    pub fn all() -> [ParamField; 4] {
        [
            ParamField::Amplitude,
            ParamField::Frequency,
            ParamField::Phase,
            ParamField::Offset,
        ]
    }

    /// Short display label used by the control panel.
    pub fn label(self) -> &'static str {
        match self {
            ParamField::Amplitude => "A (amplitude)",
            ParamField::Frequency => "ω (frequency)",
            ParamField::Phase => "φ (phase, × π)",
            ParamField::Offset => "B (offset)",
        }
    }

    /// Canned explanation of the geometric effect of this parameter,
    /// shown when it was the last one the user changed.
    pub fn observation_note(self) -> &'static str {
        match self {
            ParamField::Amplitude => {
                "A (amplitude): vertical stretch. Watch the distance from the \
                 peaks to the X axis grow as A increases."
            }
            ParamField::Frequency => {
                "ω (frequency): horizontal stretch. Larger ω packs more peaks \
                 into each unit of length."
            }
            ParamField::Phase => {
                "φ (phase): horizontal shift. Positive φ slides the curve to \
                 the left, negative φ to the right."
            }
            ParamField::Offset => {
                "B (offset): vertical shift. Watch the curve's own center line \
                 move relative to the X axis."
            }
        }
    }
}

impl std::fmt::Display for ParamField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamField::Amplitude => write!(f, "amplitude"),
            ParamField::Frequency => write!(f, "frequency"),
            ParamField::Phase => write!(f, "phase"),
            ParamField::Offset => write!(f, "offset"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SineParams
// ─────────────────────────────────────────────────────────────────────────────

/// Current values of `y = A·sin(ω·x + φ) + B`.
///
/// `Copy` on purpose: the frame loop takes one snapshot of this struct at
/// the top of each frame, so a mutation landing mid-draw can never tear a
/// rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineParams {
    /// A — amplitude in plot units.
    pub a: f64,
    /// ω — angular frequency in rad per plot unit.
    pub omega: f64,
    /// φ — phase offset in radians.
    pub phi: f64,
    /// B — vertical offset in plot units.
    pub b: f64,
}

impl Default for SineParams {
    fn default() -> Self {
        Self {
            a: 1.0,
            omega: 1.0,
            phi: 0.0,
            b: 0.0,
        }
    }
}

impl SineParams {
    /// Read one field by key.
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Amplitude => self.a,
            ParamField::Frequency => self.omega,
            ParamField::Phase => self.phi,
            ParamField::Offset => self.b,
        }
    }

    /// Write one field by key.
    ///
    /// Non-finite values are rejected and leave the prior state unchanged;
    /// returns `false` in that case. A malformed external input must never
    /// be able to poison the renderer with a NaN.
    pub fn update(&mut self, field: ParamField, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match field {
            ParamField::Amplitude => self.a = value,
            ParamField::Frequency => self.omega = value,
            ParamField::Phase => self.phi = value,
            ParamField::Offset => self.b = value,
        }
        true
    }

    /// Restore the default tuple `{A=1, ω=1, φ=0, B=0}`.
    ///
    /// Idempotent. All four fields are written together; with the single
    /// render thread nothing observes a half-reset state.
    pub fn reset(&mut self) {
        *self = SineParams::default();
    }

    /// Evaluate the parametrized curve at plot-space `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * (self.omega * x + self.phi).sin() + self.b
    }
}
