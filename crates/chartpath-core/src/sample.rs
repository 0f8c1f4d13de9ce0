// File: crates/chartpath-core/src/sample.rs
// Summary: Series model for single-valued and banded (upper/lower) samples.
// Notes:
// - A series is tagged with one SampleKind and holds one active data vector;
//   the constructors are the only way to populate them, so a series can
//   never mix single and banded samples.

/// Upper/lower bound pair for one banded sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Try to construct a band enforcing `lower <= upper`.
    pub fn try_new(lower: f64, upper: f64) -> Result<Self, &'static str> {
        if lower > upper {
            return Err("lower bound above upper bound");
        }
        Ok(Self { lower, upper })
    }

    /// True when both bounds are exactly zero; such samples are dropped by
    /// the skip-zero path variants.
    pub fn is_zero(&self) -> bool {
        self.lower == 0.0 && self.upper == 0.0
    }
}

/// Which variant of sample a series holds. One series never mixes kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
    Single,
    Banded,
}

/// One sample as handed back by lookups.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SamplePoint {
    Single(f64),
    Banded(Band),
}

impl SamplePoint {
    /// The single value, if this sample carries one. Banded samples have no
    /// single value, so marker placement skips them.
    pub fn value(&self) -> Option<f64> {
        match self {
            SamplePoint::Single(v) => Some(*v),
            SamplePoint::Banded(_) => None,
        }
    }
}

/// An ordered, index-stable sequence of samples forming one plotted line or
/// band. Ordering defines left-to-right x placement and is never reordered.
#[derive(Clone, Debug)]
pub struct Series {
    label: String,
    kind: SampleKind,
    data_value: Vec<f64>,
    data_band: Vec<Band>,
}

impl Series {
    /// A single-valued series from plain values.
    pub fn from_values(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            kind: SampleKind::Single,
            data_value: values,
            data_band: Vec::new(),
        }
    }

    /// A banded series from upper/lower bound pairs.
    pub fn from_bands(label: impl Into<String>, bands: Vec<Band>) -> Self {
        Self {
            label: label.into(),
            kind: SampleKind::Banded,
            data_value: Vec::new(),
            data_band: bands,
        }
    }

    /// Legend tag carried into hit-test results.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> SampleKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        match self.kind {
            SampleKind::Single => self.data_value.len(),
            SampleKind::Banded => self.data_band.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<SamplePoint> {
        match self.kind {
            SampleKind::Single => self.data_value.get(index).map(|&v| SamplePoint::Single(v)),
            SampleKind::Banded => self.data_band.get(index).map(|&b| SamplePoint::Banded(b)),
        }
    }

    /// The values of a single-valued series; empty for banded series.
    pub fn values(&self) -> &[f64] {
        &self.data_value
    }

    /// The bands of a banded series; empty for single-valued series.
    pub fn bands(&self) -> &[Band] {
        &self.data_band
    }
}
