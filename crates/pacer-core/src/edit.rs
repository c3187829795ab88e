//! Edit operations applied to a single quantity.

/// A pending edit to one quantity of a watch.
///
/// The caller either knows the target value outright (a dial option was
/// picked, a knob angle resolved to a value) or only knows how to transform
/// the current value (commit rounding at the end of a drag). The two cases
/// are kept as explicit variants rather than a polymorphic parameter.
/// `Update` carries a plain function pointer so edits stay `Copy`.
#[derive(Debug, Clone, Copy)]
pub enum Edit {
    /// Replace the quantity with the given value.
    Set(f64),
    /// Transform the current value of the quantity.
    Update(fn(f64) -> f64),
}

impl Edit {
    /// Resolves the edit against the current value of the quantity.
    pub fn apply(self, current: f64) -> f64 {
        match self {
            Edit::Set(value) => value,
            Edit::Update(f) => f(current),
        }
    }
}
