// 3rd party crates
use serde::de::DeserializeOwned;
use serde::Serialize;

// Project imports
use crate::submission::{SerializationError, Serializer};

/// Encodes documents as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl<D> Serializer<D> for JsonSerializer
where
    D: Serialize + DeserializeOwned,
{
    fn encode(&self, document: &D) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec(document)?)
    }

    fn decode(&self, payload: &[u8]) -> Result<D, SerializationError> {
        Ok(serde_json::from_slice(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::documents::{Description, ProductDocument};

    #[test]
    fn test_encode_uses_wire_field_names() {
        let document = ProductDocument {
            description: Some(Description {
                participant_inn: Some("7700000000".to_string()),
            }),
            doc_type: Some("LP_INTRODUCE_GOODS".to_string()),
            import_request: true,
            production_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..Default::default()
        };

        let payload = JsonSerializer.encode(&document).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();

        assert_eq!(value["description"]["participantInn"], "7700000000");
        assert_eq!(value["doc_type"], "LP_INTRODUCE_GOODS");
        assert_eq!(value["importRequest"], true);
        assert_eq!(value["production_date"], "2024-01-15");
    }

    #[test]
    fn test_decode_partial_document() {
        let payload = br#"{
            "doc_id": "abc",
            "reg_date": "2023-12-31",
            "products": [{ "uit_code": "010460", "production_date": "2023-11-01" }]
        }"#;

        let document: ProductDocument = JsonSerializer.decode(payload).unwrap();

        assert_eq!(document.doc_id.as_deref(), Some("abc"));
        assert_eq!(document.reg_date, NaiveDate::from_ymd_opt(2023, 12, 31));
        assert_eq!(document.products.len(), 1);
        assert_eq!(document.products[0].uit_code.as_deref(), Some("010460"));
        assert!(!document.import_request);
    }

    #[test]
    fn test_decode_rejects_bad_date() {
        let payload = br#"{ "reg_date": "31.12.2023" }"#;

        let result: Result<ProductDocument, _> = JsonSerializer.decode(payload);

        assert!(matches!(result, Err(SerializationError::Json(_))));
    }
}
