/// A single literal spacing value and the design token that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub literal: &'static str,
    pub token: &'static str,
}

impl Mapping {
    pub const fn new(literal: &'static str, token: &'static str) -> Self {
        Self { literal, token }
    }

    /// The stylesheet variable reference, e.g. `var(--space-4)`.
    pub fn reference(&self) -> String {
        format!("var(--{})", self.token)
    }

    /// The negated reference, e.g. `-var(--space-4)`.
    pub fn negated_reference(&self) -> String {
        format!("-{}", self.reference())
    }

    /// A negated zero is not a distinct token, so zero skips the negated pass.
    pub fn is_zero(&self) -> bool {
        self.literal == "0"
    }
}

/// The spacing scale, in the order entries are applied.
pub const SPACING_SCALE: &[Mapping] = &[
    Mapping::new("0", "space-0"),
    Mapping::new("0.25rem", "space-1"),
    Mapping::new("0.5rem", "space-2"),
    Mapping::new("0.75rem", "space-3"),
    Mapping::new("1rem", "space-4"),
    Mapping::new("1.25rem", "space-5"),
    Mapping::new("1.5rem", "space-6"),
    Mapping::new("2rem", "space-8"),
    Mapping::new("2.5rem", "space-10"),
    Mapping::new("3rem", "space-12"),
    Mapping::new("4rem", "space-16"),
    Mapping::new("5rem", "space-20"),
    Mapping::new("6rem", "space-24"),
    Mapping::new("8rem", "space-32"),
];
