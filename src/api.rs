use gloo_net::http::Request;
use serde::Serialize;

use crate::{
    config::KioskConfig,
    error::ApiError,
    record::{ApiResponse, BarcodeRequest, PrintRequest},
};

/// A parsed backend answer, before deciding whether it counts as success.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: ApiResponse,
}

impl Reply {
    /// Transport status and the body's `success` flag must both agree.
    pub fn accepted(self) -> Result<ApiResponse, ApiError> {
        if (200..300).contains(&self.status) && self.body.success {
            Ok(self.body)
        } else {
            Err(ApiError::Rejected {
                status: self.status,
                message: self.body.error,
            })
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait LabelApi {
    async fn lookup(&self, barcode: &str) -> Result<Reply, ApiError>;

    async fn print(&self, serial_number: &str) -> Result<Reply, ApiError>;

    async fn lookup_and_print(&self, barcode: &str) -> Result<Reply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    config: KioskConfig,
}

impl HttpApi {
    pub fn new(config: KioskConfig) -> Self {
        Self { config }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Reply, ApiError> {
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // error statuses still carry a JSON body with the message
        let status = response.status();
        let body = response
            .json::<ApiResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(Reply { status, body })
    }
}

impl LabelApi for HttpApi {
    async fn lookup(&self, barcode: &str) -> Result<Reply, ApiError> {
        self.post("/buscar", &BarcodeRequest { barcode }).await
    }

    async fn print(&self, serial_number: &str) -> Result<Reply, ApiError> {
        self.post("/imprimir", &PrintRequest { serial_number }).await
    }

    async fn lookup_and_print(&self, barcode: &str) -> Result<Reply, ApiError> {
        self.post("/buscar-e-imprimir", &BarcodeRequest { barcode })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: u16, body: serde_json::Value) -> Reply {
        Reply {
            status,
            body: serde_json::from_value(body).unwrap(),
        }
    }

    #[test]
    fn success_needs_status_and_flag() {
        assert!(reply(200, json!({ "success": true })).accepted().is_ok());
        assert!(reply(500, json!({ "success": true })).accepted().is_err());
        assert!(reply(200, json!({ "success": false })).accepted().is_err());
    }

    #[test]
    fn rejection_keeps_server_message() {
        let err = reply(404, json!({ "error": "Nenhum registro encontrado para Peça: PBS, OP: 1" }))
            .accepted()
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 404,
                message: Some("Nenhum registro encontrado para Peça: PBS, OP: 1".into()),
            }
        );
    }
}
