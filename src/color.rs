//! The scalar and tuple types every color model is built from.

/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// Represent the three channels that describe most colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}

impl From<[Component; 3]> for Components {
    fn from(value: [Component; 3]) -> Self {
        Self(value[0], value[1], value[2])
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        [value.0, value.1, value.2]
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Round `value` to the nearest integer (halves away from zero) when `round`
/// is set.
#[inline]
pub(crate) fn round_if(value: Component, round: bool) -> Component {
    if round {
        value.round()
    } else {
        value
    }
}
