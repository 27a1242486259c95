//! Bounded quantity input with decrement / increment buttons.
//!
//! The stepper never emits a value outside `min..=max`. Typed input follows
//! browser `parseInt` semantics: a leading integer prefix is accepted, an
//! empty field is pending until committed, anything else is ignored.

/// Quantity limits for a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityBounds {
    pub min: u32,
    /// `None` means unbounded.
    pub max: Option<u32>,
    pub step: u32,
}

impl Default for QuantityBounds {
    fn default() -> Self {
        Self {
            min: 1,
            max: None,
            step: 1,
        }
    }
}

/// Outcome of typing into the stepper field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperInput {
    /// Field was cleared; nothing is emitted until commit.
    Empty,
    /// Not a number; the quantity is left alone.
    Ignored,
    /// Clamped value to emit.
    Value(u32),
}

impl QuantityBounds {
    /// Bounds of `1..=max` with step 1.
    #[must_use]
    pub const fn up_to(max: u32) -> Self {
        Self {
            min: 1,
            max: Some(max),
            step: 1,
        }
    }

    /// Clamp any integer into `min..=max`.
    #[must_use]
    pub fn clamp(&self, quantity: i64) -> u32 {
        let upper = self.max.map_or(i64::from(u32::MAX), i64::from);
        let clamped = quantity.max(i64::from(self.min)).min(upper);
        u32::try_from(clamped).unwrap_or(self.min)
    }

    #[must_use]
    pub fn increment(&self, quantity: u32) -> u32 {
        self.clamp(i64::from(quantity) + i64::from(self.step))
    }

    #[must_use]
    pub fn decrement(&self, quantity: u32) -> u32 {
        self.clamp(i64::from(quantity) - i64::from(self.step))
    }

    #[must_use]
    pub const fn can_decrement(&self, quantity: u32) -> bool {
        quantity > self.min
    }

    #[must_use]
    pub const fn can_increment(&self, quantity: u32) -> bool {
        match self.max {
            Some(max) => quantity < max,
            None => true,
        }
    }

    /// Interpret text typed into the field.
    #[must_use]
    pub fn parse_input(&self, text: &str) -> StepperInput {
        if text.trim().is_empty() {
            return StepperInput::Empty;
        }
        parse_leading_int(text).map_or(StepperInput::Ignored, |n| {
            StepperInput::Value(self.clamp(n))
        })
    }

    /// Resolve a pending value when the field loses focus.
    ///
    /// Empty or below-minimum input becomes `min`; above-maximum becomes `max`.
    #[must_use]
    pub fn commit(&self, pending: Option<i64>) -> u32 {
        pending.map_or(self.min, |n| self.clamp(n))
    }
}

/// `parseInt`-style parse: optional whitespace and sign, then the longest run
/// of ASCII digits. Saturates instead of overflowing.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..)?),
        Some(b'+') => (false, trimmed.get(1..)?),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Visual size of the stepper buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepperSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl StepperSize {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Sm => "stepper-sm",
            Self::Default => "stepper-md",
            Self::Lg => "stepper-lg",
        }
    }
}

/// Render-ready stepper.
///
/// Templates post `decrement_value` / `increment_value` from the buttons and
/// the typed value from the field; the handler clamps again on receipt.
#[derive(Debug, Clone)]
pub struct QuantityStepper {
    pub value: u32,
    pub min: u32,
    pub max: Option<u32>,
    pub step: u32,
    pub decrement_value: u32,
    pub increment_value: u32,
    pub can_decrement: bool,
    pub can_increment: bool,
    pub disabled: bool,
    pub size: StepperSize,
}

impl QuantityStepper {
    /// Build a stepper; `value` is clamped into `bounds`.
    #[must_use]
    pub fn new(bounds: QuantityBounds, value: u32) -> Self {
        let value = bounds.clamp(i64::from(value));
        Self {
            value,
            min: bounds.min,
            max: bounds.max,
            step: bounds.step,
            decrement_value: bounds.decrement(value),
            increment_value: bounds.increment(value),
            can_decrement: bounds.can_decrement(value),
            can_increment: bounds.can_increment(value),
            disabled: false,
            size: StepperSize::Default,
        }
    }

    #[must_use]
    pub const fn size(mut self, size: StepperSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the decrement button should render disabled.
    #[must_use]
    pub const fn decrement_disabled(&self) -> bool {
        self.disabled || !self.can_decrement
    }

    /// Whether the increment button should render disabled.
    #[must_use]
    pub const fn increment_disabled(&self) -> bool {
        self.disabled || !self.can_increment
    }

    /// `max` attribute value (empty when unbounded).
    #[must_use]
    pub fn max_attr(&self) -> String {
        self.max.map(|m| m.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_decrement_respect_bounds() {
        let bounds = QuantityBounds::up_to(10);
        assert_eq!(bounds.increment(3), 4);
        assert_eq!(bounds.increment(10), 10);
        assert_eq!(bounds.decrement(3), 2);
        assert_eq!(bounds.decrement(1), 1);
    }

    #[test]
    fn test_step() {
        let bounds = QuantityBounds {
            min: 0,
            max: Some(9),
            step: 4,
        };
        assert_eq!(bounds.increment(8), 9);
        assert_eq!(bounds.decrement(2), 0);
    }

    #[test]
    fn test_unbounded_max() {
        let bounds = QuantityBounds::default();
        assert!(bounds.can_increment(u32::MAX - 1));
        assert_eq!(bounds.increment(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_button_states() {
        let bounds = QuantityBounds::up_to(10);
        assert!(!bounds.can_decrement(1));
        assert!(bounds.can_decrement(2));
        assert!(bounds.can_increment(9));
        assert!(!bounds.can_increment(10));
    }

    #[test]
    fn test_parse_input() {
        let bounds = QuantityBounds::up_to(10);
        assert_eq!(bounds.parse_input(""), StepperInput::Empty);
        assert_eq!(bounds.parse_input("  "), StepperInput::Empty);
        assert_eq!(bounds.parse_input("abc"), StepperInput::Ignored);
        assert_eq!(bounds.parse_input("-"), StepperInput::Ignored);
        assert_eq!(bounds.parse_input("7"), StepperInput::Value(7));
        assert_eq!(bounds.parse_input("12abc"), StepperInput::Value(10));
        assert_eq!(bounds.parse_input("-3"), StepperInput::Value(1));
        assert_eq!(bounds.parse_input("0"), StepperInput::Value(1));
        assert_eq!(
            bounds.parse_input("99999999999999999999999"),
            StepperInput::Value(10)
        );
    }

    #[test]
    fn test_commit() {
        let bounds = QuantityBounds::up_to(10);
        assert_eq!(bounds.commit(None), 1);
        assert_eq!(bounds.commit(Some(-4)), 1);
        assert_eq!(bounds.commit(Some(50)), 10);
        assert_eq!(bounds.commit(Some(6)), 6);
    }

    #[test]
    fn test_quantity_never_leaves_bounds() {
        let bounds = QuantityBounds {
            min: 2,
            max: Some(7),
            step: 3,
        };
        for start in [-100_i64, -1, 0, 1, 2, 5, 7, 8, 1000] {
            let mut q = bounds.clamp(start);
            for _ in 0..5 {
                assert!((2..=7).contains(&q));
                q = bounds.increment(q);
            }
            for _ in 0..5 {
                assert!((2..=7).contains(&q));
                q = bounds.decrement(q);
            }
        }
    }

    #[test]
    fn test_view_clamps_initial_value() {
        let stepper = QuantityStepper::new(QuantityBounds::up_to(10), 42);
        assert_eq!(stepper.value, 10);
        assert!(stepper.increment_disabled());
        assert!(!stepper.decrement_disabled());
        assert_eq!(stepper.decrement_value, 9);
        assert_eq!(stepper.max_attr(), "10");

        let disabled = QuantityStepper::new(QuantityBounds::default(), 3).disabled(true);
        assert!(disabled.decrement_disabled());
        assert_eq!(disabled.max_attr(), "");
    }
}
