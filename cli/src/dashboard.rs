//! Gated admin view: three summary cards plus the full registration
//! table, in the order the store returns (newest first).
use chrono::Local;
use padron::{
    models::Registration,
    remote::RegistrationStore,
    stats::{self, Stats},
};
use tracing::error;

use crate::notice::Notice;

pub struct DashboardView {
    pub stats: Stats,
    pub registrations: Vec<Registration>,
}

/// One fetch. A failure leaves the table empty and reports a notice; the
/// user reloads to retry.
pub async fn load(store: &impl RegistrationStore) -> (DashboardView, Option<Notice>) {
    let (rows, notice) = match store.list_all().await {
        Ok(rows) => (rows, None),
        Err(e) => {
            error!("Error fetching registrations: {e}");
            (
                Vec::new(),
                Some(Notice::error(
                    "Error",
                    "No se pudieron cargar los registros.",
                )),
            )
        }
    };

    let stats = stats::compute(&rows, Local::now().date_naive());

    (
        DashboardView {
            stats,
            registrations: rows,
        },
        notice,
    )
}

pub fn render(view: &DashboardView) {
    println!("Total Registros: {}", view.stats.total);
    println!("Hoy:             {}", view.stats.today);
    println!("Centros:         {}\n", view.stats.unique_centros);

    if view.registrations.is_empty() {
        println!("No hay registros disponibles");
        return;
    }

    println!(
        "{:<12} {:<24} {:<28} {:<18} {:<16} {:<6} Fecha Registro",
        "Cédula", "Nombre y Apellido", "Centro Electoral", "Teléfono", "Redes Sociales", "Hora"
    );

    for r in &view.registrations {
        println!(
            "{:<12} {:<24} {:<28} {:<18} {:<16} {:<6} {}",
            r.cedula,
            r.nombre_apellido,
            r.centro_electoral,
            r.telefono,
            r.redes_sociales.as_deref().unwrap_or("-"),
            r.hora_asistencia,
            r.created_at
                .with_timezone(&Local)
                .format("%d/%m/%Y %H:%M:%S"),
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use padron::{models::NewRegistration, remote::StoreError};

    use crate::notice::Kind;

    use super::*;

    struct FakeStore {
        rows: Vec<Registration>,
        fail: bool,
    }

    impl RegistrationStore for FakeStore {
        async fn insert(&self, _row: &NewRegistration) -> Result<(), StoreError> {
            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<Registration>, StoreError> {
            if self.fail {
                return Err(StoreError::Rejected {
                    status: 500,
                    message: "store down".to_string(),
                });
            }

            Ok(self.rows.clone())
        }
    }

    fn row(centro: &str) -> Registration {
        Registration {
            id: "x".to_string(),
            cedula: "12345678".to_string(),
            nombre_apellido: "Juan Pérez García".to_string(),
            centro_electoral: centro.to_string(),
            telefono: "+58 412-123-4567".to_string(),
            redes_sociales: None,
            hora_asistencia: "08:30".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_load_keeps_store_order_and_counts() {
        let store = FakeStore {
            rows: vec![row("A"), row("B"), row("A")],
            fail: false,
        };

        let (view, notice) = load(&store).await;

        assert!(notice.is_none());
        assert_eq!(view.stats.total, 3);
        assert_eq!(view.stats.unique_centros, 2);
        assert_eq!(view.registrations[1].centro_electoral, "B");
    }

    #[tokio::test]
    async fn test_failed_load_reports_and_leaves_table_empty() {
        let store = FakeStore {
            rows: Vec::new(),
            fail: true,
        };

        let (view, notice) = load(&store).await;

        assert_eq!(notice.unwrap().kind, Kind::Error);
        assert!(view.registrations.is_empty());
        assert_eq!(view.stats.total, 0);
    }
}
