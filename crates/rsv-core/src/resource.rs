use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Admin-managed resource collections exposed by the ReservaT services.
///
/// Each maps to a REST collection under `/api/v1/`. The service owns the
/// record schemas; clients treat records as opaque JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Usuarios,
    Experiencias,
    Hoteles,
    Restaurantes,
    Transportes,
    Mayoristas,
    Rutas,
    Viajes,
    Restricciones,
    Fotos,
}

impl Resource {
    /// All known resources, in display order.
    pub const ALL: [Self; 10] = [
        Self::Usuarios,
        Self::Experiencias,
        Self::Hoteles,
        Self::Restaurantes,
        Self::Transportes,
        Self::Mayoristas,
        Self::Rutas,
        Self::Viajes,
        Self::Restricciones,
        Self::Fotos,
    ];

    /// Collection name as it appears in API paths and on the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Usuarios => "usuarios",
            Self::Experiencias => "experiencias",
            Self::Hoteles => "hoteles",
            Self::Restaurantes => "restaurantes",
            Self::Transportes => "transportes",
            Self::Mayoristas => "mayoristas",
            Self::Rutas => "rutas",
            Self::Viajes => "viajes",
            Self::Restricciones => "restricciones",
            Self::Fotos => "fotos",
        }
    }

    /// Collection path, e.g. `/api/v1/usuarios/`.
    ///
    /// The trailing slash matters: the services route collections with it.
    #[must_use]
    pub fn collection_path(self) -> String {
        format!("/api/v1/{}/", self.name())
    }

    /// Item path for a record id, e.g. `/api/v1/usuarios/42`.
    #[must_use]
    pub fn item_path(self, id: &str) -> String {
        format!("/api/v1/{}/{}", self.name(), urlencoding::encode(id))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|resource| resource.name() == lowered)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// Parse error for an unrecognized resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResource(pub String);

impl fmt::Display for UnknownResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recurso desconocido '{}' (conocidos: {})",
            self.0,
            Resource::ALL.map(Resource::name).join(", ")
        )
    }
}

impl std::error::Error for UnknownResource {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_every_known_name() {
        for resource in Resource::ALL {
            assert_eq!(resource.name().parse::<Resource>(), Ok(resource));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Usuarios".parse::<Resource>(), Ok(Resource::Usuarios));
        assert_eq!("  HOTELES ".parse::<Resource>(), Ok(Resource::Hoteles));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "vuelos".parse::<Resource>().unwrap_err();
        assert!(err.to_string().contains("vuelos"));
        assert!(err.to_string().contains("usuarios"));
    }

    #[test]
    fn collection_path_has_trailing_slash() {
        assert_eq!(
            Resource::Experiencias.collection_path(),
            "/api/v1/experiencias/"
        );
    }

    #[test]
    fn item_path_escapes_id() {
        assert_eq!(
            Resource::Fotos.item_path("a b/c"),
            "/api/v1/fotos/a%20b%2Fc"
        );
    }
}
