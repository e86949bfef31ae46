//! The conversion policy, deciding whether plain integers may be
//! promoted into a modular system during mixed operations.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

/// Environment variable read once to initialize [`DEFAULT_CONVERSION_POLICY`].
pub const CONVERSION_ENV: &str = "MODINT_CONVERSION";

/// Decides whether a plain integer may be promoted into a modular system.
///
/// It only governs the plain → modular direction. Reading the value out of
/// a [`ModInt`](crate::ModInt) is always allowed.
#[derive(Debug)]
pub struct ConversionPolicy {
    allowed: AtomicBool,
}

impl ConversionPolicy {
    /// Creates a new [`ConversionPolicy`].
    #[inline]
    pub const fn new(allowed: bool) -> Self {
        Self {
            allowed: AtomicBool::new(allowed),
        }
    }

    /// Creates a [`ConversionPolicy`] from the [`CONVERSION_ENV`] variable.
    ///
    /// `0`, `false`, `off`, `no` and `disabled` disable conversion,
    /// anything else leaves it allowed.
    pub fn from_env() -> Self {
        let allowed = match std::env::var(CONVERSION_ENV) {
            Ok(value) => !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no" | "disabled"
            ),
            Err(_) => true,
        };
        Self::new(allowed)
    }

    /// Returns `true` if plain integers may be promoted.
    #[inline]
    pub fn allowed(&self) -> bool {
        self.allowed.load(Ordering::SeqCst)
    }

    /// Sets whether plain integers may be promoted.
    #[inline]
    pub fn set(&self, allowed: bool) {
        self.allowed.store(allowed, Ordering::SeqCst);
    }

    /// Allows promotion.
    #[inline]
    pub fn enable(&self) {
        self.set(true);
    }

    /// Forbids promotion.
    #[inline]
    pub fn disable(&self) {
        self.set(false);
    }

    /// Flips the policy and returns the new state.
    #[inline]
    pub fn toggle(&self) -> bool {
        !self.allowed.fetch_xor(true, Ordering::SeqCst)
    }
}

impl Default for ConversionPolicy {
    #[inline]
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for ConversionPolicy {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.allowed())
    }
}

/// The process-wide policy used by every operation without an explicit one.
pub static DEFAULT_CONVERSION_POLICY: Lazy<ConversionPolicy> = Lazy::new(ConversionPolicy::from_env);

/// Returns the process-wide policy.
#[inline]
pub fn default_policy() -> &'static ConversionPolicy {
    &DEFAULT_CONVERSION_POLICY
}

/// Returns `true` if the process-wide policy allows promotion.
#[inline]
pub fn conversion_allowed() -> bool {
    DEFAULT_CONVERSION_POLICY.allowed()
}

/// Sets the process-wide policy.
#[inline]
pub fn set_conversion(allowed: bool) {
    DEFAULT_CONVERSION_POLICY.set(allowed);
}

/// Flips the process-wide policy and returns the new state.
#[inline]
pub fn toggle_conversion() -> bool {
    DEFAULT_CONVERSION_POLICY.toggle()
}
