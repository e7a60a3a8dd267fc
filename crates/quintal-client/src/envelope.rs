//! Cart API wire types.
//!
//! Every response carries the `{ success, data: { cart: { items } } }`
//! envelope; request bodies address lines by their
//! `(productId, variantId)` key. All JSON is camelCase.

use crate::error::ApiError;
use quintal_commerce::cart::CartLine;
use quintal_commerce::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// The JSON envelope wrapping every Cart API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Build a rejection envelope.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Unwrap the payload, turning `success: false` or a missing payload
    /// into a rejection error.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Rejected("response carried no cart data".to_string()))
    }
}

/// Payload of every cart response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartData {
    pub cart: CartDocument,
}

/// The server's canonical cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartDocument {
    pub items: Vec<CartLine>,
}

/// A line reference: the key plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRef {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub quantity: i64,
}

impl From<&CartLine> for LineRef {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            variant_id: line.variant_id.clone(),
            quantity: line.quantity,
        }
    }
}

/// Body of `POST /cart/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub quantity: i64,
}

/// Body of `PUT /cart/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemBody {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub quantity: i64,
}

/// Body of `DELETE /cart/remove`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemBody {
    pub product_id: ProductId,
    pub variant_id: VariantId,
}

/// Body of `POST /cart/sync`, the one-time guest merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncBody {
    pub local_items: Vec<LineRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parses_verbatim() {
        let raw = r#"{
            "success": true,
            "data": { "cart": { "items": [] } }
        }"#;
        let envelope: ApiEnvelope<CartData> = serde_json::from_str(raw).unwrap();
        let data = envelope.into_data().unwrap();
        assert!(data.cart.items.is_empty());
    }

    #[test]
    fn test_envelope_rejection() {
        let raw = r#"{ "success": false, "message": "out of stock" }"#;
        let envelope: ApiEnvelope<CartData> = serde_json::from_str(raw).unwrap();
        match envelope.into_data() {
            Err(ApiError::Rejected(message)) => assert_eq!(message, "out of stock"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_missing_data_is_rejection() {
        let raw = r#"{ "success": true }"#;
        let envelope: ApiEnvelope<CartData> = serde_json::from_str(raw).unwrap();
        assert!(matches!(envelope.into_data(), Err(ApiError::Rejected(_))));
    }

    #[test]
    fn test_sync_body_wire_shape() {
        let body = SyncBody {
            local_items: vec![LineRef {
                product_id: ProductId::new("p1"),
                variant_id: VariantId::new("v1"),
                quantity: 3,
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("localItems").is_some());
        assert_eq!(json["localItems"][0]["productId"], "p1");
        assert_eq!(json["localItems"][0]["quantity"], 3);
    }
}
