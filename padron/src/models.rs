use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One confirmed row of the remote `registrations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub cedula: String,
    pub nombre_apellido: String,
    pub centro_electoral: String,
    pub telefono: String,
    pub redes_sociales: Option<String>,
    pub hora_asistencia: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload: the six user fields. The store assigns `id` and
/// `created_at`. `redes_sociales` serializes as explicit `null` when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub cedula: String,
    pub nombre_apellido: String,
    pub centro_electoral: String,
    pub telefono: String,
    pub redes_sociales: Option<String>,
    pub hora_asistencia: String,
}

/// Raw form snapshot exactly as typed, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub cedula: String,
    pub nombre_apellido: String,
    pub centro_electoral: String,
    pub telefono: String,
    pub redes_sociales: Option<String>,
    pub hora_asistencia: String,
}

impl FormData {
    /// Normalizes a snapshot into an insert payload. Values pass through
    /// as typed; only an empty `redes_sociales` collapses to `None`.
    pub fn into_registration(self) -> NewRegistration {
        NewRegistration {
            cedula: self.cedula,
            nombre_apellido: self.nombre_apellido,
            centro_electoral: self.centro_electoral,
            telefono: self.telefono,
            redes_sociales: self.redes_sociales.filter(|s| !s.trim().is_empty()),
            hora_asistencia: self.hora_asistencia,
        }
    }
}

/// Form field identifiers, serialized under the names the form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Cedula,
    NombreApellido,
    CentroElectoral,
    Telefono,
    RedesSociales,
    HoraAsistencia,
}
