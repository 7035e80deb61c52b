// studio-backend/src/utils/validation/common.rs

//! Wspólne reguły walidacji formularzy.
//!
//! Stałe i funkcje współdzielone przez DTO obu formularzy (rezerwacja i
//! kontakt). Komunikaty błędów są kluczami lokalizacyjnymi — tłumaczenie
//! następuje dopiero na granicy odpowiedzi HTTP.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

// =============================================================================
// Validation constants
// =============================================================================

/// Imię i nazwisko
pub mod name {
    pub const MIN_LENGTH: u64 = 2;
    pub const MAX_LENGTH: u64 = 30;
}

/// Adres e-mail
pub mod email {
    pub const MAX_LENGTH: u64 = 50;
}

/// Numer telefonu (długość całego wpisu, razem z prefiksem + lub 00)
pub mod phone {
    pub const MIN_LENGTH: u64 = 7;
    pub const MAX_LENGTH: u64 = 15;
}

/// Wiadomość
pub mod message {
    pub const BOOKING_MAX_LENGTH: u64 = 500;
    pub const CONTACT_MIN_LENGTH: u64 = 10;
}

/// Pola wymagane
pub mod required {
    pub const MIN_LENGTH: u64 = 1;
}

// =============================================================================
// Validation regexes
// =============================================================================

/// Litery (łacińskie i polskie znaki diakrytyczne) oraz spacje.
pub static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZąćęłńóśźżĄĆĘŁŃÓŚŹŻ\s]+$").expect("Invalid name regex")
});

/// Prefiks `+` lub `00`, potem 7-15 cyfr bez zera wiodącego.
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+|00)[1-9][0-9]{6,14}$").expect("Invalid phone regex"));

// =============================================================================
// Custom validation functions
// =============================================================================

/// Zestaw znaków imienia. Granice długości sprawdza `length` w derive;
/// oba naruszenia zgłaszają ten sam rodzaj błędu.
pub fn validate_name_charset(value: &str) -> Result<(), ValidationError> {
    if !NAME_REGEX.is_match(value) {
        let mut error = ValidationError::new("invalid_name");
        error.message = Some("forms.validation.nameRequired".into());
        return Err(error);
    }
    Ok(())
}

/// Format e-maila, o ile pole nie jest puste. Wymagalność zależna od
/// wybranej metody kontaktu rozstrzyga schemat formularza, nie DTO.
pub fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if !value.validate_email() {
        let mut error = ValidationError::new("invalid_email");
        error.message = Some("forms.validation.emailValid".into());
        return Err(error);
    }
    Ok(())
}

/// Wzorzec i długość telefonu, o ile pole nie jest puste.
pub fn validate_phone_format(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let length = value.chars().count() as u64;
    if length < phone::MIN_LENGTH || length > phone::MAX_LENGTH || !PHONE_REGEX.is_match(value) {
        let mut error = ValidationError::new("invalid_phone");
        error.message = Some("forms.validation.phoneLength".into());
        return Err(error);
    }
    Ok(())
}

/// Czy wartość nie składa się wyłącznie z białych znaków.
pub fn validate_not_empty_or_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("empty_or_whitespace");
        error.message = Some("Field cannot be empty or contain only whitespace".into());
        return Err(error);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
