//! Standard alphabets

/// Decimal digits
pub const DIGITS: &str = "0123456789";

/// Lowercase ASCII letters
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits followed by lowercase letters (radix 36)
pub const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Digits, lowercase then uppercase letters (radix 62)
pub const ALPHANUMERIC: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
