use reqwest::Method;
use serde_json::Value;

use rsv_core::Resource;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Fetch every record of a resource collection.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` for non-2xx responses, `ApiError::Transport` for
    /// network failures.
    pub async fn list(&self, resource: Resource) -> Result<Vec<Value>, ApiError> {
        let value = self
            .json(Method::GET, &resource.collection_path(), None)
            .await?;
        Ok(into_rows(value))
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` (404 for an unknown id), `ApiError::Transport`.
    pub async fn fetch(&self, resource: Resource, id: &str) -> Result<Value, ApiError> {
        self.json(Method::GET, &resource.item_path(id), None).await
    }

    /// Create a record; returns the service's stored representation.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` (422 for rejected payloads), `ApiError::Transport`.
    pub async fn create(&self, resource: Resource, record: &Value) -> Result<Value, ApiError> {
        self.json(Method::POST, &resource.collection_path(), Some(record))
            .await
    }

    /// Replace a record by id; returns the updated representation.
    ///
    /// # Errors
    ///
    /// `ApiError::Status`, `ApiError::Transport`.
    pub async fn update(&self, resource: Resource, id: &str, record: &Value) -> Result<Value, ApiError> {
        self.json(Method::PUT, &resource.item_path(id), Some(record))
            .await
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// `ApiError::Status`, `ApiError::Transport`.
    pub async fn remove(&self, resource: Resource, id: &str) -> Result<(), ApiError> {
        self.json(Method::DELETE, &resource.item_path(id), None)
            .await?;
        Ok(())
    }
}

/// Normalize a collection response into rows.
///
/// The services mostly answer with a bare array, but some wrap it in an
/// envelope object; the first array-valued field wins there.
fn into_rows(value: Value) -> Vec<Value> {
    match value {
        Value::Array(rows) => rows,
        Value::Object(map) => map
            .into_iter()
            .find_map(|(_, field)| match field {
                Value::Array(rows) => Some(rows),
                _ => None,
            })
            .unwrap_or_default(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use rsv_auth::CredentialStore;
    use rsv_auth::tiers::MemoryTier;

    use super::*;

    #[test]
    fn into_rows_passes_arrays_through() {
        let rows = into_rows(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn into_rows_unwraps_envelope_objects() {
        let rows = into_rows(json!({"total": 2, "items": [{"id": 1}, {"id": 2}]}));
        assert_eq!(rows, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn into_rows_handles_null_and_scalars() {
        assert_eq!(into_rows(Value::Null), Vec::<Value>::new());
        assert_eq!(into_rows(json!(7)), vec![json!(7)]);
    }

    fn test_client(base_url: &str) -> ApiClient {
        let store = Arc::new(CredentialStore::new(vec![Box::new(MemoryTier::new())]));
        ApiClient::new(base_url, store, 7, Duration::from_secs(5)).expect("client")
    }

    /// Serve exactly one request on an ephemeral port.
    fn serve_once<F>(handler: F) -> (String, thread::JoinHandle<()>)
    where
        F: FnOnce(tiny_http::Request) + Send + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("port");
        let handle = thread::spawn(move || {
            let request = server
                .recv_timeout(Duration::from_secs(5))
                .expect("recv")
                .expect("request before timeout");
            handler(request);
        });
        (format!("http://127.0.0.1:{port}"), handle)
    }

    #[tokio::test]
    async fn list_hits_collection_path_with_bearer() {
        let (base_url, server) = serve_once(|request| {
            assert_eq!(request.url(), "/api/v1/usuarios/");
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string())
                .expect("bearer header present");
            // empty bearer when logged out; some stacks trim the trailing space
            assert_eq!(auth.trim_end(), "Bearer");
            let response = tiny_http::Response::from_string(r#"[{"id":1},{"id":2}]"#)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        });

        let rows = test_client(&base_url)
            .list(Resource::Usuarios)
            .await
            .expect("list");
        assert_eq!(rows.len(), 2);
        server.join().expect("server thread");
    }

    #[tokio::test]
    async fn fetch_unknown_id_maps_404() {
        let (base_url, server) = serve_once(|request| {
            assert_eq!(request.url(), "/api/v1/hoteles/99");
            let _ = request.respond(
                tiny_http::Response::from_string(r#"{"detail":"Hotel no encontrado"}"#)
                    .with_status_code(404),
            );
        });

        let error = test_client(&base_url)
            .fetch(Resource::Hoteles, "99")
            .await
            .expect_err("should fail");
        assert_eq!(error.to_string(), "Hotel no encontrado");
        server.join().expect("server thread");
    }

    #[tokio::test]
    async fn remove_accepts_empty_body() {
        let (base_url, server) = serve_once(|request| {
            assert_eq!(request.method(), &tiny_http::Method::Delete);
            let _ = request.respond(tiny_http::Response::from_string("").with_status_code(204));
        });

        test_client(&base_url)
            .remove(Resource::Fotos, "7")
            .await
            .expect("remove");
        server.join().expect("server thread");
    }
}
