//! Transient user-facing notices, one per attempted action (the toast
//! equivalent).
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Exito,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: Kind,
    pub title: &'static str,
    pub detail: &'static str,
}

impl Notice {
    pub fn exito(title: &'static str, detail: &'static str) -> Self {
        Self {
            kind: Kind::Exito,
            title,
            detail,
        }
    }

    pub fn error(title: &'static str, detail: &'static str) -> Self {
        Self {
            kind: Kind::Error,
            title,
            detail,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marca = match self.kind {
            Kind::Exito => "✓",
            Kind::Error => "✗",
        };

        write!(f, "{marca} {}: {}", self.title, self.detail)
    }
}
