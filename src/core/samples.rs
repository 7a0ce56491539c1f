use crate::domain::model::{ReplaceableAttribute, ReplaceableItem};

pub const FIRST_NAME_ATTR: &str = "first_name";
pub const LAST_NAME_ATTR: &str = "last_name";
pub const EMAIL_ATTR: &str = "email";

const SAMPLE_CUSTOMERS: [(&str, &str, &str, &str); 4] = [
    ("cust_001", "John", "Doe", "john@example.com"),
    ("cust_002", "Jane", "Doe", "jane@example.com"),
    ("cust_003", "Mary", "Smith", "mary@example.com"),
    ("cust_004", "Bob", "Smith", "bob@example.com"),
];

/// 固定的四筆示範客戶資料, 每個屬性都設定 replace = true
pub fn build_sample_records() -> Vec<ReplaceableItem> {
    SAMPLE_CUSTOMERS
        .iter()
        .map(|(id, first, last, email)| {
            ReplaceableItem::new(*id).with_attributes([
                ReplaceableAttribute::new(FIRST_NAME_ATTR, *first, true),
                ReplaceableAttribute::new(LAST_NAME_ATTR, *last, true),
                ReplaceableAttribute::new(EMAIL_ATTR, *email, true),
            ])
        })
        .collect()
}
