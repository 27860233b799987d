//! Sign-up and sign-in form validation.
//!
//! Rules run in a fixed order and only the first failure is reported, so
//! the user fixes one field at a time.

use std::sync::LazyLock;

use alerta_vecinal_account_models::{LoginForm, RegistrationForm};
use regex::Regex;
use thiserror::Error;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").expect("valid regex")
});

/// A failed form rule. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El nombre completo es obligatorio")]
    MissingFullName,
    #[error("El nombre de usuario es obligatorio")]
    MissingUsername,
    #[error("El correo electrónico es obligatorio")]
    MissingEmail,
    #[error("Por favor ingresa un correo electrónico válido")]
    InvalidEmail,
    #[error("El teléfono es obligatorio")]
    MissingPhone,
    #[error("La dirección es obligatoria")]
    MissingAddress,
    #[error("El barrio/comunidad es obligatorio")]
    MissingNeighborhood,
    #[error("La contraseña es obligatoria")]
    MissingPassword,
    #[error("La contraseña debe tener al menos 6 caracteres")]
    PasswordTooShort,
    #[error("Debes confirmar tu contraseña")]
    MissingPasswordConfirmation,
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("Debes aceptar los términos y condiciones")]
    TermsNotAccepted,
    #[error("Debes aceptar la Ley de Protección de Datos")]
    DataLawNotAccepted,
    #[error("Por favor ingresa tu usuario y contraseña")]
    MissingCredentials,
}

/// Whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks the sign-up form, returning the first failing rule.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule the form breaks.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    let rules = [
        (!form.full_name.is_empty(), ValidationError::MissingFullName),
        (!form.username.is_empty(), ValidationError::MissingUsername),
        (!form.email.is_empty(), ValidationError::MissingEmail),
        (is_valid_email(&form.email), ValidationError::InvalidEmail),
        (!form.phone.is_empty(), ValidationError::MissingPhone),
        (!form.address.is_empty(), ValidationError::MissingAddress),
        (
            !form.neighborhood.is_empty(),
            ValidationError::MissingNeighborhood,
        ),
        (!form.password.is_empty(), ValidationError::MissingPassword),
        (
            form.password.chars().count() >= MIN_PASSWORD_LENGTH,
            ValidationError::PasswordTooShort,
        ),
        (
            !form.confirm_password.is_empty(),
            ValidationError::MissingPasswordConfirmation,
        ),
        (
            form.password == form.confirm_password,
            ValidationError::PasswordMismatch,
        ),
        (form.accept_terms, ValidationError::TermsNotAccepted),
        (form.accept_data_law, ValidationError::DataLawNotAccepted),
    ];

    match rules.into_iter().find(|(valid, _)| !valid) {
        Some((_, error)) => Err(error),
        None => Ok(()),
    }
}

/// Checks that both sign-in fields are filled.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCredentials`] if either is empty.
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if form.identifier.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "José Moreno".to_string(),
            username: "jmoreno".to_string(),
            email: "josemoreno@gmail.com".to_string(),
            phone: "+507 6123-4567".to_string(),
            address: "Calle A, Urb. Mirador".to_string(),
            neighborhood: "Rio Hato".to_string(),
            password: "secreto1".to_string(),
            confirm_password: "secreto1".to_string(),
            accept_terms: true,
            accept_data_law: true,
            profile_image: None,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(validate_registration(&valid_form()), Ok(()));
    }

    #[test]
    fn full_name_error_reported_before_email() {
        let form = RegistrationForm {
            full_name: String::new(),
            email: String::new(),
            ..valid_form()
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::MissingFullName)
        );
    }

    #[test]
    fn empty_form_reports_full_name() {
        assert_eq!(
            validate_registration(&RegistrationForm::default()),
            Err(ValidationError::MissingFullName)
        );
    }

    #[test]
    fn invalid_email_reported_before_phone() {
        let form = RegistrationForm {
            email: "no-es-correo".to_string(),
            phone: String::new(),
            ..valid_form()
        };
        assert_eq!(validate_registration(&form), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn short_password_rejected() {
        let form = RegistrationForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn password_length_counts_characters() {
        let form = RegistrationForm {
            password: "ñañañá".to_string(),
            confirm_password: "ñañañá".to_string(),
            ..valid_form()
        };
        assert_eq!(validate_registration(&form), Ok(()));
    }

    #[test]
    fn mismatch_and_consent_order() {
        let form = RegistrationForm {
            confirm_password: "otra-clave".to_string(),
            accept_terms: false,
            ..valid_form()
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::PasswordMismatch)
        );

        let form = RegistrationForm {
            accept_terms: false,
            accept_data_law: false,
            ..valid_form()
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::TermsNotAccepted)
        );

        let form = RegistrationForm {
            accept_data_law: false,
            ..valid_form()
        };
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::DataLawNotAccepted)
        );
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("vecino.rio_hato+alertas@correo.com.pa"));
        assert!(!is_valid_email("vecino@correo"));
        assert!(!is_valid_email("vecino@correo.c"));
        assert!(!is_valid_email(" vecino@correo.com"));
        assert!(!is_valid_email("@correo.com"));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingFullName.to_string(),
            "El nombre completo es obligatorio"
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            identifier: "jmoreno".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(validate_login(&form), Err(ValidationError::MissingCredentials));
        let form = LoginForm {
            password: "secreto1".to_string(),
            ..form
        };
        assert_eq!(validate_login(&form), Ok(()));
    }
}
