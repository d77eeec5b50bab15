//! Address validation seam.

/// Checks address-like cells. Returns an error message when invalid.
///
/// Callers supply their own implementation (e.g. with EIP-55 checksum
/// verification); [`HexAddressValidator`] only checks the shape.
pub trait AddressValidator {
    fn check(&self, value: &str) -> Option<String>;
}

impl<F> AddressValidator for F
where
    F: Fn(&str) -> Option<String>,
{
    fn check(&self, value: &str) -> Option<String> {
        self(value)
    }
}

/// Accepts `0x` followed by 40 hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexAddressValidator;

impl AddressValidator for HexAddressValidator {
    fn check(&self, value: &str) -> Option<String> {
        let valid = value
            .strip_prefix("0x")
            .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        (!valid).then(|| "Must be a 0x-prefixed 40-character hex address".to_string())
    }
}
