//! Field validation for the registration form.
//!
//! Every rule is independent and a single pass reports every failing field
//! at once. The same pass runs in the client form and again on the server
//! boundary, so a bypassed client changes nothing.
use std::collections::BTreeMap;

use regex::Regex;

use crate::models::{Field, FormData};

/// Field name to error message; empty means the snapshot is valid.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Validates one snapshot. Pure and idempotent; call it as often as
/// needed.
pub fn validate(form: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.cedula.trim().is_empty() {
        errors.insert(Field::Cedula, "La cédula es requerida");
    } else {
        // Hyphens and spaces are presentation; digits are the identity.
        let digits = Regex::new(r"[-\s]").unwrap().replace_all(&form.cedula, "");

        if !Regex::new(r"^\d{7,11}$").unwrap().is_match(&digits) {
            errors.insert(Field::Cedula, "Formato de cédula inválido");
        }
    }

    if form.nombre_apellido.trim().is_empty() {
        errors.insert(Field::NombreApellido, "Nombre y apellido son requeridos");
    }

    if form.centro_electoral.trim().is_empty() {
        errors.insert(Field::CentroElectoral, "Centro electoral es requerido");
    }

    if form.telefono.trim().is_empty() {
        errors.insert(Field::Telefono, "Teléfono es requerido");
    } else if !Regex::new(r"^\+?[\d\s\-()]{10,}$")
        .unwrap()
        .is_match(&form.telefono)
    {
        errors.insert(Field::Telefono, "Formato de teléfono inválido");
    }

    if form.hora_asistencia.is_empty() {
        errors.insert(Field::HoraAsistencia, "Hora de asistencia es requerida");
    }

    errors
}
