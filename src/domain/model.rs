use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceableAttribute {
    pub name: String,
    pub value: String,
    pub replace: bool,
}

impl ReplaceableAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, replace: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            replace,
        }
    }
}

/// 批次寫入用的單筆資料 (item name + 有序屬性)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceableItem {
    pub name: String,
    pub attributes: Vec<ReplaceableAttribute>,
}

impl ReplaceableItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes<I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = ReplaceableAttribute>,
    {
        self.attributes.extend(attributes);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    pub request_id: String,
    pub box_usage: Option<f64>,
}

impl fmt::Display for ResponseMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{RequestId: {}", self.request_id)?;
        if let Some(usage) = self.box_usage {
            write!(f, ", BoxUsage: {}", usage)?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDomainOutput {
    pub metadata: ResponseMetadata,
}

impl fmt::Display for CreateDomainOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.metadata.fmt(f)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainsOutput {
    pub domain_names: Vec<String>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainMetadata {
    pub item_count: u64,
    pub item_names_size_bytes: u64,
    pub attribute_name_count: u64,
    pub attribute_name_size_bytes: u64,
    pub attribute_value_count: u64,
    pub attribute_values_size_bytes: u64,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOutput {
    pub items: Vec<Item>,
    pub next_token: Option<String>,
}

impl fmt::Display for SelectOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Items: [")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{Name: {},Attributes: [", item.name)?;
            for (j, attr) in item.attributes.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{{Name: {},Value: {}}}", attr.name, attr.value)?;
            }
            write!(f, "]}}")?;
        }
        write!(f, "],")?;
        if let Some(token) = &self.next_token {
            write!(f, "NextToken: {}", token)?;
        }
        write!(f, "}}")
    }
}

/// list_domains 的彙總結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainSummary {
    pub domain_count: usize,
    pub total_items: u64,
}
