use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::models::coerce::{lenient_f64, lenient_i64};

/// 表单字段
///
/// 字段名与评分接口的 JSON 键名一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionField {
    Amount,
    Method,
    Category,
    Quantity,
    CustomerAge,
    CustomerLocation,
    Device,
    Ip,
    Day,
    Month,
    Hour,
}

impl TransactionField {
    /// 表单中的全部字段（按页面顺序）
    pub const ALL: [TransactionField; 11] = [
        TransactionField::Amount,
        TransactionField::Method,
        TransactionField::Category,
        TransactionField::Quantity,
        TransactionField::CustomerAge,
        TransactionField::CustomerLocation,
        TransactionField::Device,
        TransactionField::Ip,
        TransactionField::Day,
        TransactionField::Month,
        TransactionField::Hour,
    ];

    /// 接口中的键名
    pub fn name(self) -> &'static str {
        match self {
            TransactionField::Amount => "amount",
            TransactionField::Method => "method",
            TransactionField::Category => "category",
            TransactionField::Quantity => "quantity",
            TransactionField::CustomerAge => "customerAge",
            TransactionField::CustomerLocation => "customerLocation",
            TransactionField::Device => "device",
            TransactionField::Ip => "IP",
            TransactionField::Day => "day",
            TransactionField::Month => "month",
            TransactionField::Hour => "hour",
        }
    }
}

impl FromStr for TransactionField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| InputError::UnknownField { name: s.to_string() })
    }
}

impl fmt::Display for TransactionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 表单原始输入
///
/// 每个字段都保存用户输入的原始文本，提交时才做数值转换。
/// 从 TOML 加载时数值键也可以直接写数字。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    #[serde(deserialize_with = "text_or_number")]
    pub amount: String,
    #[serde(deserialize_with = "text_or_number")]
    pub method: String,
    #[serde(deserialize_with = "text_or_number")]
    pub category: String,
    #[serde(deserialize_with = "text_or_number")]
    pub quantity: String,
    #[serde(rename = "customerAge", deserialize_with = "text_or_number")]
    pub customer_age: String,
    #[serde(rename = "customerLocation", deserialize_with = "text_or_number")]
    pub customer_location: String,
    #[serde(deserialize_with = "text_or_number")]
    pub device: String,
    #[serde(rename = "IP", deserialize_with = "text_or_number")]
    pub ip: String,
    #[serde(deserialize_with = "text_or_number")]
    pub day: String,
    #[serde(deserialize_with = "text_or_number")]
    pub month: String,
    #[serde(deserialize_with = "text_or_number")]
    pub hour: String,
}

impl TransactionForm {
    /// 读取字段
    pub fn get(&self, field: TransactionField) -> &str {
        match field {
            TransactionField::Amount => &self.amount,
            TransactionField::Method => &self.method,
            TransactionField::Category => &self.category,
            TransactionField::Quantity => &self.quantity,
            TransactionField::CustomerAge => &self.customer_age,
            TransactionField::CustomerLocation => &self.customer_location,
            TransactionField::Device => &self.device,
            TransactionField::Ip => &self.ip,
            TransactionField::Day => &self.day,
            TransactionField::Month => &self.month,
            TransactionField::Hour => &self.hour,
        }
    }

    /// 返回修改了一个字段的新表单
    pub fn with_field(&self, field: TransactionField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            TransactionField::Amount => &mut next.amount,
            TransactionField::Method => &mut next.method,
            TransactionField::Category => &mut next.category,
            TransactionField::Quantity => &mut next.quantity,
            TransactionField::CustomerAge => &mut next.customer_age,
            TransactionField::CustomerLocation => &mut next.customer_location,
            TransactionField::Device => &mut next.device,
            TransactionField::Ip => &mut next.ip,
            TransactionField::Day => &mut next.day,
            TransactionField::Month => &mut next.month,
            TransactionField::Hour => &mut next.hour,
        };
        *slot = value.into();
        next
    }

    /// 空着的必填字段（所有字段都是必填）
    pub fn missing_required(&self) -> Vec<TransactionField> {
        TransactionField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// 转换为提交给评分接口的载荷
    pub fn normalize(&self) -> TransactionInput {
        TransactionInput {
            amount: lenient_f64(&self.amount),
            method: self.method.clone(),
            category: self.category.clone(),
            quantity: lenient_i64(&self.quantity),
            customer_age: lenient_i64(&self.customer_age),
            customer_location: self.customer_location.clone(),
            device: self.device.clone(),
            ip: self.ip.clone(),
            day: lenient_i64(&self.day),
            month: lenient_i64(&self.month),
            hour: lenient_i64(&self.hour),
        }
    }
}

/// 评分接口的交易载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub amount: f64,
    pub method: String,
    pub category: String,
    pub quantity: i64,
    #[serde(rename = "customerAge")]
    pub customer_age: i64,
    #[serde(rename = "customerLocation")]
    pub customer_location: String,
    pub device: String,
    #[serde(rename = "IP")]
    pub ip: String,
    pub day: i64,
    pub month: i64,
    pub hour: i64,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(i) => i.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_form() -> TransactionForm {
        TransactionForm::default()
            .with_field(TransactionField::Amount, "100.5")
            .with_field(TransactionField::Method, "card")
            .with_field(TransactionField::Category, "retail")
            .with_field(TransactionField::Quantity, "2")
            .with_field(TransactionField::CustomerAge, "30")
            .with_field(TransactionField::CustomerLocation, "NYC")
            .with_field(TransactionField::Device, "mobile")
            .with_field(TransactionField::Ip, "1.2.3.4")
            .with_field(TransactionField::Day, "15")
            .with_field(TransactionField::Month, "6")
            .with_field(TransactionField::Hour, "14")
    }

    #[test]
    fn test_normalize_end_to_end_example() {
        let payload = serde_json::to_value(sample_form().normalize()).unwrap();

        assert_eq!(
            payload,
            json!({
                "amount": 100.5,
                "method": "card",
                "category": "retail",
                "quantity": 2,
                "customerAge": 30,
                "customerLocation": "NYC",
                "device": "mobile",
                "IP": "1.2.3.4",
                "day": 15,
                "month": 6,
                "hour": 14
            })
        );
    }

    #[test]
    fn test_normalize_empty_and_garbage_numbers_become_zero() {
        let form = sample_form()
            .with_field(TransactionField::Amount, "")
            .with_field(TransactionField::Quantity, "lots")
            .with_field(TransactionField::CustomerAge, "")
            .with_field(TransactionField::Day, "?")
            .with_field(TransactionField::Month, "")
            .with_field(TransactionField::Hour, "noon");

        let input = form.normalize();
        assert_eq!(input.amount, 0.0);
        assert_eq!(input.quantity, 0);
        assert_eq!(input.customer_age, 0);
        assert_eq!(input.day, 0);
        assert_eq!(input.month, 0);
        assert_eq!(input.hour, 0);
        // 文本字段原样保留
        assert_eq!(input.method, "card");
    }

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for field in TransactionField::ALL {
            assert_eq!(field.name().parse::<TransactionField>().unwrap(), field);
        }
        assert!(matches!(
            "ip".parse::<TransactionField>(),
            Err(InputError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_missing_required_lists_empty_fields_in_order() {
        let form = sample_form()
            .with_field(TransactionField::Device, "")
            .with_field(TransactionField::Amount, "");

        assert_eq!(
            form.missing_required(),
            vec![TransactionField::Amount, TransactionField::Device]
        );
        assert_eq!(TransactionForm::default().missing_required().len(), 11);
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let before = TransactionForm::default();
        let after = before.with_field(TransactionField::Method, "cash");
        assert_eq!(before.method, "");
        assert_eq!(after.method, "cash");
    }

    #[test]
    fn test_form_deserializes_numbers_and_text() {
        let form: TransactionForm = toml::from_str(
            r#"
            amount = 12.5
            quantity = "3"
            IP = "10.0.0.1"
            customerAge = 41
            "#,
        )
        .unwrap();

        assert_eq!(form.amount, "12.5");
        assert_eq!(form.quantity, "3");
        assert_eq!(form.ip, "10.0.0.1");
        assert_eq!(form.customer_age, "41");
        assert_eq!(form.method, "");
    }
}
