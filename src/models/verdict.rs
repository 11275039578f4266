use serde_json::Value;

/// 评分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 被标记为欺诈
    Fraud,
    /// 非欺诈
    NotFraud,
}

impl Verdict {
    /// 从评分接口的响应中读取 `isFraud`
    ///
    /// 缺失、`null`、`false`、`0`、`""` 均视为非欺诈；非空字符串、数组、对象视为欺诈。
    pub fn from_response(body: &Value) -> Self {
        let flagged = match body.get("isFraud") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        };

        if flagged {
            Verdict::Fraud
        } else {
            Verdict::NotFraud
        }
    }

    /// 展示给用户的结论
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Fraud => "The transaction is flagged as fraud.",
            Verdict::NotFraud => "The transaction is not fraud.",
        }
    }

    pub fn is_fraud(self) -> bool {
        self == Verdict::Fraud
    }
}
