use std::fmt::{Debug, Display, Formatter, Result};

use crate::{ModInt, ModIntError};

use super::check_base;

impl Display for ModInt {
    /// Prints the value only.
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self.value(), f)
    }
}

impl Debug for ModInt {
    /// Prints the value together with its modulus.
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "ModInt({}, mod={})", self.value(), self.modulus())
    }
}

impl ModInt {
    /// Renders the value in the numeral `base`, with lowercase digits.
    ///
    /// # Errors
    ///
    /// Returns [`ModIntError::InvalidBase`] if `base` is outside `[2, 36]`.
    pub fn to_str_radix(&self, base: u32) -> std::result::Result<String, ModIntError> {
        check_base(base)?;
        Ok(self.value().to_str_radix(base))
    }

    /// Renders the whole congruence class as `"<value> + <modulus> * <param_name>"`.
    ///
    /// # Errors
    ///
    /// Returns [`ModIntError::InvalidParamName`] if `param_name` is empty or
    /// contains whitespace.
    pub fn parametric(&self, param_name: &str) -> std::result::Result<String, ModIntError> {
        if param_name.is_empty() || param_name.chars().any(char::is_whitespace) {
            return Err(ModIntError::InvalidParamName {
                name: param_name.to_string(),
            });
        }
        Ok(format!(
            "{} + {} * {}",
            self.value(),
            self.modulus(),
            param_name
        ))
    }
}
