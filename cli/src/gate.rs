//! Password gate in front of the dashboard.
use padron::auth::Authenticator;

use crate::{
    notice::Notice,
    session::{AdminSession, SessionPort},
};

pub struct AdminGate<A> {
    auth: A,
}

impl<A: Authenticator> AdminGate<A> {
    pub fn new(auth: A) -> Self {
        Self { auth }
    }

    /// One attempt. A match persists the flag and opens the session; a
    /// mismatch changes nothing. Either way, exactly one notice.
    pub fn attempt(&self, input: &str, port: &impl SessionPort) -> (AdminSession, Notice) {
        if !self.auth.verify(input) {
            return (
                port.read(),
                Notice::error(
                    "Contraseña incorrecta",
                    "La contraseña ingresada no es válida.",
                ),
            );
        }

        let session = port.read().login();
        port.write(session);

        (
            session,
            Notice::exito("Acceso concedido", "Bienvenido al panel administrativo."),
        )
    }
}
