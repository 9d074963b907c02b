//! # Client contract
//!
//! What a frontend (browser or CLI) needs to know to talk to this server.
//!
//! ## Registration
//!
//! `POST /registrations` with a JSON form snapshot:
//!
//! ```json
//! {
//!   "cedula": "12345678",
//!   "nombre_apellido": "Juan Pérez García",
//!   "centro_electoral": "Escuela Nacional Bolivariana",
//!   "telefono": "+58 412-123-4567",
//!   "redes_sociales": null,
//!   "hora_asistencia": "08:30"
//! }
//! ```
//!
//! - 201 on success, no body
//! - 422 with `{"errors": {"cedula": "...", ...}}` when validation fails;
//!   keys use the form's field names (`nombreApellido`, `horaAsistencia`, …)
//! - 502 when the row store rejects the insert or is unreachable
//!
//! Missing fields deserialize as empty strings and fail validation the
//! same way empty inputs do.
//!
//! ## Admin flag
//!
//! `POST /admin/login` with `{"password": "..."}`.
//!
//! - 200 with `{"authenticated": true}` on a match; persist the value
//!   under the `adminAuthenticated` key on the client
//! - 401 on a mismatch, nothing to persist
//!
//! There is no server-side session, no expiry, and no logout endpoint;
//! logging out means deleting the stored flag.
//!
//! ## Dashboard
//!
//! `GET /dashboard` with header `x-admin-authenticated: true`.
//!
//! - 200 with `{"stats": {"total", "today", "uniqueCentros"},
//!   "registrations": [...]}`; rows arrive newest-first
//! - 401 without the header
//! - 502 when the row store fails; the client keeps its table empty
