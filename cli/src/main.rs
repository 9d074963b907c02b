use std::io::Write;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, fmt};

use padron::{
    auth::FixedSecret,
    models::{Field, FormData},
    remote::{RegistrationStore, SupabaseStore},
    validate::FieldErrors,
};

use cli::{
    dashboard,
    form::RegistrationForm,
    gate::AdminGate,
    notice::Notice,
    session::{FileSessionPort, SessionPort},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Envía un registro al padrón
    Registrar {
        #[arg(long)]
        cedula: String,
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        centro: String,
        #[arg(long)]
        telefono: String,
        #[arg(long)]
        redes: Option<String>,
        #[arg(long)]
        hora: String,
    },
    /// Abre el panel administrativo
    Dashboard {
        /// Contraseña del panel; se pide por consola si falta
        #[arg(long)]
        password: Option<String>,
    },
    /// Cierra la sesión administrativa
    Logout,
    /// Inserta registros de muestra
    Seed {
        #[arg(default_value_t = 5)]
        count: u32,
    },
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let store = store_from_env();
    let port = FileSessionPort::default();

    match args.command {
        Command::Registrar {
            cedula,
            nombre,
            centro,
            telefono,
            redes,
            hora,
        } => {
            let mut form = RegistrationForm::new();
            form.edit(Field::Cedula, &cedula);
            form.edit(Field::NombreApellido, &nombre);
            form.edit(Field::CentroElectoral, &centro);
            form.edit(Field::Telefono, &telefono);
            if let Some(redes) = &redes {
                form.edit(Field::RedesSociales, redes);
            }
            form.edit(Field::HoraAsistencia, &hora);

            let notice = form.submit(&store).await;
            report(&notice, form.errors());
        }
        Command::Dashboard { password } => {
            if !port.read().authenticated {
                let input = match password {
                    Some(p) => p,
                    None => prompt("Contraseña: "),
                };

                let gate = AdminGate::new(FixedSecret::default());
                let (session, notice) = gate.attempt(input.trim(), &port);
                println!("{notice}");

                if !session.authenticated {
                    return;
                }
            }

            let (view, notice) = dashboard::load(&store).await;
            if let Some(notice) = notice {
                println!("{notice}");
            }

            dashboard::render(&view);
        }
        Command::Logout => {
            port.write(port.read().logout());
            println!(
                "{}",
                Notice::exito("Sesión cerrada", "Has salido del panel administrativo.")
            );
        }
        Command::Seed { count } => seed(&store, count).await,
    }
}

fn store_from_env() -> SupabaseStore {
    let url = std::env::var("SUPABASE_URL")
        .unwrap_or_else(|_| "http://localhost:54321".to_string());
    let key = std::env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY no está definida");

    SupabaseStore::new(&url, &key).expect("HTTP client misconfigured!")
}

fn report(notice: &Notice, errors: &FieldErrors) {
    println!("{notice}");

    for (field, message) in errors {
        println!("  - {field:?}: {message}");
    }
}

fn prompt(label: &str) -> String {
    print!("{label}");
    std::io::stdout().flush().unwrap();

    let mut input = String::new();
    std::io::stdin().read_line(&mut input).unwrap();
    input
}

async fn seed(store: &SupabaseStore, count: u32) {
    let samples = [
        (
            "12345678",
            "Juan Pérez García",
            "Escuela Nacional Bolivariana",
            "+58 412-123-4567",
            Some("@juanperez"),
            "08:30",
        ),
        (
            "23456789",
            "María Rodríguez",
            "Liceo Andrés Bello",
            "+58 414-555-0199",
            None,
            "09:15",
        ),
        (
            "345678901",
            "Carlos Medina",
            "Unidad Educativa El Valle",
            "(0212) 555-1234",
            Some("@cmedina"),
            "10:00",
        ),
    ];

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut inserted = 0;

    for i in 0..count {
        let (cedula, nombre, centro, telefono, redes, hora) = samples[(i as usize) % samples.len()];
        pb.set_message(format!("Insertando {nombre}"));

        let row = FormData {
            cedula: cedula.to_string(),
            nombre_apellido: nombre.to_string(),
            centro_electoral: centro.to_string(),
            telefono: telefono.to_string(),
            redes_sociales: redes.map(str::to_string),
            hora_asistencia: hora.to_string(),
        }
        .into_registration();

        match store.insert(&row).await {
            Ok(()) => inserted += 1,
            Err(e) => pb.println(format!("Fila rechazada: {e}")),
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!("Registros insertados: {inserted}/{count}");
}
