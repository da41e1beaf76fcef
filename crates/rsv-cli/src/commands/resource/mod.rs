pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod update;

use anyhow::Context as _;
use serde_json::Value;

/// Parse a `--data` payload, insisting on a JSON object.
fn parse_record(data: &str) -> anyhow::Result<Value> {
    let value: Value =
        serde_json::from_str(data).context("--data no es JSON válido")?;
    anyhow::ensure!(value.is_object(), "--data debe ser un objeto JSON");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::parse_record;

    #[test]
    fn parse_record_accepts_objects() {
        let record = parse_record(r#"{"nombre":"Hotel Playa Azul"}"#).expect("should parse");
        assert_eq!(record["nombre"], "Hotel Playa Azul");
    }

    #[test]
    fn parse_record_rejects_non_json() {
        assert!(parse_record("nombre=hotel").is_err());
    }

    #[test]
    fn parse_record_rejects_non_objects() {
        assert!(parse_record("[1,2,3]").is_err());
    }
}
