//! Registration form state machine.
//!
//! Mirrors the browser form exactly: an edit clears only the edited
//! field's error, a submit validates the whole snapshot at once, and only
//! a fully valid snapshot makes the single insert call. One notice per
//! submit attempt, success or failure.
use padron::{
    models::{Field, FormData},
    remote::RegistrationStore,
    validate::{FieldErrors, validate},
};
use tracing::error;

use crate::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
}

pub struct RegistrationForm {
    data: FormData,
    errors: FieldErrors,
    phase: Phase,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            data: FormData::default(),
            errors: FieldErrors::new(),
            phase: Phase::Editing,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// True while the insert call is pending. The exclusive borrow in
    /// [`Self::submit`] already rules out a second concurrent submit from
    /// this form instance; the phase exists so a UI can disable its
    /// submit control.
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Updates one field. An error on that field clears immediately;
    /// every other field keeps its error until the next submit.
    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::Cedula => self.data.cedula = value.to_string(),
            Field::NombreApellido => self.data.nombre_apellido = value.to_string(),
            Field::CentroElectoral => self.data.centro_electoral = value.to_string(),
            Field::Telefono => self.data.telefono = value.to_string(),
            Field::RedesSociales => self.data.redes_sociales = Some(value.to_string()),
            Field::HoraAsistencia => self.data.hora_asistencia = value.to_string(),
        }

        self.errors.remove(&field);
    }

    /// One submit attempt. Invalid snapshots never leave the process; a
    /// valid one makes exactly one insert call. Success clears the form,
    /// failure keeps everything the user typed.
    pub async fn submit(&mut self, store: &impl RegistrationStore) -> Notice {
        self.errors = validate(&self.data);
        if !self.errors.is_empty() {
            return Notice::error(
                "Error en el formulario",
                "Por favor, corrige los errores antes de continuar.",
            );
        }

        self.phase = Phase::Submitting;
        let result = store.insert(&self.data.clone().into_registration()).await;
        self.phase = Phase::Editing;

        match result {
            Ok(()) => {
                self.data = FormData::default();

                Notice::exito(
                    "Registro exitoso",
                    "Los datos han sido registrados correctamente en la base de datos.",
                )
            }
            Err(e) => {
                error!("Error saving registration: {e}");

                Notice::error(
                    "Error al guardar",
                    "Ocurrió un error al guardar los datos. Inténtalo de nuevo.",
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use padron::{
        models::{NewRegistration, Registration},
        remote::StoreError,
    };

    use crate::notice::Kind;

    use super::*;

    /// Counting in-memory store; `fail` makes every insert bounce.
    #[derive(Default)]
    struct FakeStore {
        rows: Mutex<Vec<NewRegistration>>,
        fail: bool,
    }

    impl RegistrationStore for FakeStore {
        async fn insert(&self, row: &NewRegistration) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Rejected {
                    status: 500,
                    message: "store down".to_string(),
                });
            }

            self.rows.lock().unwrap().push(row.clone());
            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<Registration>, StoreError> {
            Ok(Vec::new())
        }
    }

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.edit(Field::Cedula, "12345678");
        form.edit(Field::NombreApellido, "Juan Pérez García");
        form.edit(Field::CentroElectoral, "Escuela Nacional Bolivariana");
        form.edit(Field::Telefono, "+58 412-123-4567");
        form.edit(Field::HoraAsistencia, "08:30");
        form
    }

    #[tokio::test]
    async fn test_invalid_submit_makes_no_remote_call() {
        let store = FakeStore::default();
        let mut form = RegistrationForm::new();

        let notice = form.submit(&store).await;

        assert_eq!(notice.kind, Kind::Error);
        assert_eq!(form.errors().len(), 5);
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_clears_only_that_fields_error() {
        let store = FakeStore::default();
        let mut form = RegistrationForm::new();
        form.submit(&store).await;

        form.edit(Field::Cedula, "12345678");

        assert!(!form.errors().contains_key(&Field::Cedula));
        assert_eq!(form.errors().len(), 4);
    }

    #[tokio::test]
    async fn test_valid_submit_inserts_once_and_clears_fields() {
        let store = FakeStore::default();
        let mut form = filled_form();

        let notice = form.submit(&store).await;

        assert_eq!(notice.kind, Kind::Exito);
        assert_eq!(*form.data(), FormData::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());

        let rows = store.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cedula, "12345678");
        // Untouched optional field arrives as explicit absence.
        assert_eq!(rows[0].redes_sociales, None);
    }

    #[tokio::test]
    async fn test_empty_redes_normalizes_to_null() {
        let store = FakeStore::default();
        let mut form = filled_form();
        form.edit(Field::RedesSociales, "  ");

        form.submit(&store).await;

        assert_eq!(store.rows.lock().unwrap()[0].redes_sociales, None);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_the_typed_values() {
        let store = FakeStore {
            fail: true,
            ..FakeStore::default()
        };
        let mut form = filled_form();

        let notice = form.submit(&store).await;

        assert_eq!(notice.kind, Kind::Error);
        assert_eq!(notice.title, "Error al guardar");
        assert_eq!(form.data().cedula, "12345678");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_valid_resubmit_after_failure_inserts() {
        let store = FakeStore::default();
        let mut form = RegistrationForm::new();
        form.submit(&store).await;

        // The user fixes every field and tries again.
        form.edit(Field::Cedula, "23456789");
        form.edit(Field::NombreApellido, "María Rodríguez");
        form.edit(Field::CentroElectoral, "Liceo Andrés Bello");
        form.edit(Field::Telefono, "0414 555 0199");
        form.edit(Field::HoraAsistencia, "09:15");

        let notice = form.submit(&store).await;

        assert_eq!(notice.kind, Kind::Exito);
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }
}
