use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::page::{DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE};

/// Order as returned by the order service. Monetary amounts arrive as JSON
/// numbers; this client only displays them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: Option<i64>,
    pub order_no: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub total_amount: f64,
    pub status: i32,
    #[serde(default)]
    pub payment_method: Option<i32>,
    #[serde(default)]
    pub payment_time: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub receiver_phone: String,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
}

impl Order {
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(self.status)
    }

    pub fn can_pay(&self) -> bool {
        self.status() == Some(OrderStatus::PendingPayment)
    }

    pub fn can_cancel(&self) -> bool {
        self.status() == Some(OrderStatus::PendingPayment)
    }
}

/// Status codes used by the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Cancelled,
    Completed,
    Closed,
}

impl OrderStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::PendingPayment),
            1 => Some(Self::Paid),
            2 => Some(Self::Cancelled),
            3 => Some(Self::Completed),
            4 => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::PendingPayment => 0,
            Self::Paid => 1,
            Self::Cancelled => 2,
            Self::Completed => 3,
            Self::Closed => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PendingPayment => "Pending payment",
            Self::Paid => "Paid",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::Closed => "Closed",
        }
    }
}

/// Body for `POST /order/create`. The idempotent token is fetched separately
/// and attached by the caller.
#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: i64,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "receiver is required"))]
    pub receiver: String,
    #[validate(length(min = 1, message = "receiver phone is required"))]
    pub receiver_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[validate(length(min = 1, message = "idempotent token is required"))]
    pub idempotent_token: String,
}

/// Query for `GET /order/my-orders`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPageQuery {
    pub page_num: u32,
    pub page_size: u32,
}

impl Default for OrderPageQuery {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl OrderPageQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pageNum", self.page_num.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            product_id: 7,
            quantity: 2,
            address: "1 Main St".into(),
            receiver: "Alice".into(),
            receiver_phone: "5551234".into(),
            remark: None,
            idempotent_token: "tok-1".into(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut req = request();
        req.quantity = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_receiver_rejected() {
        let mut req = request();
        req.receiver = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_idempotent_token_rejected() {
        let mut req = request();
        req.idempotent_token = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["productId"], 7);
        assert_eq!(json["receiverPhone"], "5551234");
        assert_eq!(json["idempotentToken"], "tok-1");
        assert!(json.get("remark").is_none());
    }

    #[test]
    fn test_status_codes_round_trip() {
        for code in 0..=4 {
            let status = OrderStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(OrderStatus::from_code(9), None);
    }

    #[test]
    fn test_only_pending_orders_payable() {
        let raw = r#"{"orderNo":"ORD123","productId":7,"quantity":1,"status":0}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert!(order.can_pay());
        assert!(order.can_cancel());

        let raw = r#"{"orderNo":"ORD124","productId":7,"quantity":1,"status":1}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert!(!order.can_pay());
        assert!(!order.can_cancel());
    }

    #[test]
    fn test_order_query_pairs() {
        let query = OrderPageQuery::default();
        assert_eq!(
            query.to_pairs(),
            vec![("pageNum", "1".to_string()), ("pageSize", "10".to_string())]
        );
    }
}
