use log::warn;

/// Ordered table of image-perturbation functions. Selector values coming out
/// of a genome are 1-based indices into this table; the names must match the
/// perturbation library's own registry.
const FUNCTIONS: [&str; 6] = [
    "gaussian_noise",
    "poisson_noise",
    "impulse_noise",
    "defocus_blur",
    "glass_blur",
    "increase_brightness",
];

/// Maps perturbation-function selectors to function names, with a fixed
/// default for out-of-range selectors.
pub struct PerturbationRegistry {
    functions: &'static [&'static str],
}

impl PerturbationRegistry {
    pub fn new() -> Self {
        Self {
            functions: &FUNCTIONS,
        }
    }

    /// Resolve a 1-based selector to a function name.
    ///
    /// Selectors outside `[1, len]` fall back to the first entry. The
    /// fallback is a recoverable condition and only emits a diagnostic.
    pub fn resolve(&self, selector: i32) -> &'static str {
        if selector > 0 && selector <= self.functions.len() as i32 {
            self.functions[(selector - 1) as usize]
        } else {
            warn!(
                "Perturbation function not found for selector {}, using default",
                selector
            );
            self.functions[0]
        }
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in selector order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.iter().copied()
    }
}

impl Default for PerturbationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_valid_range() {
        let registry = PerturbationRegistry::new();
        let expected = [
            "gaussian_noise",
            "poisson_noise",
            "impulse_noise",
            "defocus_blur",
            "glass_blur",
            "increase_brightness",
        ];
        for (i, name) in expected.iter().enumerate() {
            assert_eq!(registry.resolve(i as i32 + 1), *name);
        }
    }

    #[test]
    fn test_resolve_out_of_range_falls_back_to_default() {
        let registry = PerturbationRegistry::new();
        for selector in [0, -1, -42, 7, 100, i32::MIN, i32::MAX] {
            assert_eq!(registry.resolve(selector), registry.resolve(1));
        }
    }

    #[test]
    fn test_names_match_selector_order() {
        let registry = PerturbationRegistry::new();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names.len(), registry.len());
        for (i, name) in names.iter().enumerate() {
            assert_eq!(registry.resolve(i as i32 + 1), *name);
        }
    }
}
