use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::escape_html;

pub const NOT_FOUND: &str = "Não encontrado";

/// Body of `/buscar` and `/buscar-e-imprimir`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarcodeRequest<'a> {
    #[serde(rename = "codigoBarras")]
    pub barcode: &'a str,
}

/// Body of `/imprimir`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintRequest<'a> {
    #[serde(rename = "serialNumber")]
    pub serial_number: &'a str,
}

/// Envelope shared by the three endpoints. Error bodies usually carry only `error`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<RecordData>,
    #[serde(default, deserialize_with = "text")]
    pub peca: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub op: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecordData {
    #[serde(default, deserialize_with = "text")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub peca: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub op: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub projeto: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub veiculo: Option<String>,
}

// The backend passes database columns through untouched, so the work order
// can arrive as a number. Empty strings count as missing.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => return Err(D::Error::custom(format!("expected text, found {other}"))),
    })
}

/// The last record fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentRecord {
    pub serial_number: Option<String>,
    pub part: Option<String>,
    pub work_order: Option<String>,
    pub project: Option<String>,
    pub vehicle: Option<String>,
}

impl CurrentRecord {
    /// Builds the record from `data`, falling back to the top-level `peca`/`op`.
    pub fn from_response(response: &ApiResponse) -> Self {
        let data = response.data.clone().unwrap_or_default();
        Self {
            serial_number: data.serial_number,
            part: data.peca.or_else(|| response.peca.clone()),
            work_order: data.op.or_else(|| response.op.clone()),
            project: data.projeto,
            vehicle: data.veiculo,
        }
    }

    pub fn info_items(&self) -> [InfoItem; 5] {
        [
            InfoItem::new("Serial Number", &self.serial_number),
            InfoItem::new("Peça", &self.part),
            InfoItem::new("OP", &self.work_order),
            InfoItem::new("Projeto", &self.project),
            InfoItem::new("Veículo", &self.vehicle),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

impl InfoItem {
    fn new(label: &'static str, value: &Option<String>) -> Self {
        Self {
            label,
            value: value.clone().unwrap_or_else(|| NOT_FOUND.to_owned()),
        }
    }
}

/// Markup for the info grid. Every label and value is escaped.
pub fn info_grid_html(items: &[InfoItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="info-item"><div class="info-label">{}</div><div class="info-value">{}</div></div>"#,
                escape_html(item.label),
                escape_html(&item.value),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ApiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn lookup_response_fills_part_and_order_from_envelope() {
        let response = parse(json!({
            "success": true,
            "data": { "serial_number": "SN1", "projeto": "P1" },
            "peca": "PC1",
            "op": "OP1"
        }));
        let record = CurrentRecord::from_response(&response);
        let values: Vec<_> = record
            .info_items()
            .into_iter()
            .map(|item| (item.label, item.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Serial Number", "SN1".to_owned()),
                ("Peça", "PC1".to_owned()),
                ("OP", "OP1".to_owned()),
                ("Projeto", "P1".to_owned()),
                ("Veículo", NOT_FOUND.to_owned()),
            ]
        );
    }

    #[test]
    fn data_fields_win_over_envelope() {
        let response = parse(json!({
            "success": true,
            "data": { "serial_number": "SN9", "peca": "PBS", "op": 12345, "projeto": null, "veiculo": "" },
            "peca": "OTHER",
            "op": "1"
        }));
        let record = CurrentRecord::from_response(&response);
        assert_eq!(record.part.as_deref(), Some("PBS"));
        assert_eq!(record.work_order.as_deref(), Some("12345"));
        assert_eq!(record.project, None);
        assert_eq!(record.vehicle, None);
    }

    #[test]
    fn error_body_parses_without_success_flag() {
        let response = parse(json!({ "error": "Formato de código de barras inválido" }));
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Formato de código de barras inválido")
        );
        assert_eq!(response.data, None);
    }

    #[test]
    fn object_where_text_expected_is_rejected() {
        let result = serde_json::from_value::<ApiResponse>(json!({ "op": { "n": 1 } }));
        assert!(result.is_err());
    }

    #[test]
    fn grid_markup_is_escaped() {
        let record = CurrentRecord {
            serial_number: Some("SN1".into()),
            part: Some("<b>X</b>".into()),
            ..Default::default()
        };
        let html = info_grid_html(&record.info_items());
        assert!(html.contains(r#"<div class="info-value">&lt;b&gt;X&lt;/b&gt;</div>"#));
        assert!(!html.contains("<b>X</b>"));
        assert_eq!(html.matches(r#"class="info-item""#).count(), 5);
    }

    #[test]
    fn request_bodies_use_backend_field_names() {
        let body = serde_json::to_value(BarcodeRequest { barcode: "PBS12345" }).unwrap();
        assert_eq!(body, json!({ "codigoBarras": "PBS12345" }));
        let body = serde_json::to_value(PrintRequest { serial_number: "SN1" }).unwrap();
        assert_eq!(body, json!({ "serialNumber": "SN1" }));
    }
}
