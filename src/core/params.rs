use fnv::FnvHashMap;

/// One adjustable input of a principle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
    pub unit: &'static str,
}

impl ParamSpec {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        (min, max, step): (f32, f32, f32),
        default: f32,
        unit: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            min,
            max,
            step,
            default,
            unit,
        }
    }

    /// Clamp into `[min, max]`. NaN maps to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Decimal places shown by the slider readout.
    pub fn decimals(&self) -> usize {
        if self.step < 1.0 {
            2
        } else {
            0
        }
    }

    pub fn format_value(&self, value: f32) -> String {
        let text = format!("{:.*}", self.decimals(), value);
        if self.unit.is_empty() {
            text
        } else {
            format!("{} {}", text, self.unit)
        }
    }
}

/// Live values for the active principle's parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamSnapshot {
    values: FnvHashMap<&'static str, f32>,
}

impl ParamSnapshot {
    pub fn defaults(specs: &[ParamSpec]) -> Self {
        Self {
            values: specs.iter().map(|s| (s.id, s.default)).collect(),
        }
    }

    /// Value for `id`, or 0.0 when the id is not part of the snapshot.
    #[inline]
    pub fn get(&self, id: &str) -> f32 {
        self.values.get(id).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Insert without range checks; callers clamp through [`ParamSpec`].
    pub fn set(&mut self, id: &'static str, value: f32) {
        self.values.insert(id, value);
    }

    /// Builder-style variant of [`ParamSnapshot::set`].
    pub fn with(mut self, id: &'static str, value: f32) -> Self {
        self.set(id, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
