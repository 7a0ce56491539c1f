use crate::domain::model::{
    Attribute, DomainMetadata, Item, ListDomainsOutput, ResponseMetadata, SelectOutput,
};
use crate::utils::error::{DemoError, Result, ServiceError};
use std::borrow::Cow;
use xmlparser::{ElementEnd, Token, Tokenizer};

/// 回應 XML 的簡易樹狀結構 (忽略 namespace 與屬性)
#[derive(Debug, Default, Clone)]
pub struct XmlNode {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.trim())
    }

    /// Depth-first search for the first descendant (or self) with this name.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}

pub fn parse_document(body: &str) -> Result<XmlNode> {
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    for token in Tokenizer::from(body) {
        match token? {
            Token::ElementStart { local, .. } => stack.push(XmlNode {
                name: local.as_str().to_string(),
                ..Default::default()
            }),
            Token::ElementEnd { end, .. } => {
                let closing = match end {
                    ElementEnd::Open => continue,
                    ElementEnd::Close(_, local) => Some(local.as_str()),
                    ElementEnd::Empty => None,
                };
                let node = stack.pop().ok_or_else(|| xml_error("unbalanced closing tag"))?;
                if let Some(name) = closing {
                    if name != node.name {
                        return Err(xml_error(&format!(
                            "expected </{}> but found </{}>",
                            node.name, name
                        )));
                    }
                }
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Token::Text { text } => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&unescape(text.as_str())?);
                }
            }
            Token::Cdata { text, .. } => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(text.as_str());
                }
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(xml_error("document ended before all elements were closed"));
    }
    root.ok_or_else(|| xml_error("document has no root element"))
}

pub fn parse_response_metadata(root: &XmlNode) -> ResponseMetadata {
    let request_id = root
        .find("RequestId")
        .or_else(|| root.find("RequestID"))
        .map(|n| n.text.trim().to_string())
        .unwrap_or_default();
    let box_usage = root
        .find("BoxUsage")
        .and_then(|n| n.text.trim().parse::<f64>().ok());

    ResponseMetadata {
        request_id,
        box_usage,
    }
}

pub fn parse_list_domains(body: &str) -> Result<ListDomainsOutput> {
    let root = parse_document(body)?;
    let result = required(&root, "ListDomainsResult")?;

    Ok(ListDomainsOutput {
        domain_names: result
            .children_named("DomainName")
            .map(|n| n.text.trim().to_string())
            .collect(),
        next_token: result.child_text("NextToken").map(str::to_string),
    })
}

pub fn parse_domain_metadata(body: &str) -> Result<DomainMetadata> {
    let root = parse_document(body)?;
    let result = required(&root, "DomainMetadataResult")?;

    Ok(DomainMetadata {
        item_count: required_number(result, "ItemCount")?,
        item_names_size_bytes: optional_number(result, "ItemNamesSizeBytes")?,
        attribute_name_count: optional_number(result, "AttributeNameCount")?,
        attribute_name_size_bytes: optional_number(result, "AttributeNamesSizeBytes")?,
        attribute_value_count: optional_number(result, "AttributeValueCount")?,
        attribute_values_size_bytes: optional_number(result, "AttributeValuesSizeBytes")?,
        timestamp: optional_number(result, "Timestamp")?,
    })
}

pub fn parse_select(body: &str) -> Result<SelectOutput> {
    let root = parse_document(body)?;
    let result = required(&root, "SelectResult")?;

    let items = result
        .children_named("Item")
        .map(|item| -> Result<Item> {
            let attributes = item
                .children_named("Attribute")
                .map(|attr| -> Result<Attribute> {
                    Ok(Attribute {
                        name: required_text(attr, "Name")?.to_string(),
                        value: attr
                            .child("Value")
                            .map(|v| v.text.clone())
                            .unwrap_or_default(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Item {
                name: required_text(item, "Name")?.to_string(),
                attributes,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SelectOutput {
        items,
        next_token: result.child_text("NextToken").map(str::to_string),
    })
}

/// 將錯誤回應轉成 ServiceError。格式無法解析時仍回傳 ServiceError (code = "Unknown")
pub fn parse_error(status_code: u16, body: &str) -> ServiceError {
    let parsed = parse_document(body).ok().and_then(|root| {
        let error = root.find("Error")?;
        Some(ServiceError {
            message: error.child_text("Message").unwrap_or_default().to_string(),
            status_code,
            error_code: error.child_text("Code").unwrap_or("Unknown").to_string(),
            request_id: root
                .find("RequestID")
                .or_else(|| root.find("RequestId"))
                .map(|n| n.text.trim().to_string())
                .unwrap_or_default(),
        })
    });

    parsed.unwrap_or_else(|| ServiceError {
        message: body.trim().to_string(),
        status_code,
        error_code: "Unknown".to_string(),
        request_id: String::new(),
    })
}

fn required<'a>(root: &'a XmlNode, name: &str) -> Result<&'a XmlNode> {
    root.find(name)
        .ok_or_else(|| xml_error(&format!("missing <{}> element", name)))
}

fn required_text<'a>(node: &'a XmlNode, name: &str) -> Result<&'a str> {
    node.child_text(name)
        .ok_or_else(|| xml_error(&format!("missing <{}> element", name)))
}

fn parse_number(name: &str, text: &str) -> Result<u64> {
    text.parse()
        .map_err(|_| xml_error(&format!("<{}> is not a number: '{}'", name, text)))
}

fn required_number(node: &XmlNode, name: &str) -> Result<u64> {
    parse_number(name, required_text(node, name)?)
}

/// 僅供參考的統計欄位, 缺少時視為 0
fn optional_number(node: &XmlNode, name: &str) -> Result<u64> {
    node.child_text(name)
        .map_or(Ok(0), |text| parse_number(name, text))
}

fn xml_error(message: &str) -> DemoError {
    DemoError::Xml {
        message: message.to_string(),
    }
}

fn unescape(text: &str) -> Result<Cow<'_, str>> {
    if !text.contains('&') {
        return Ok(Cow::Borrowed(text));
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let end = rest[start..]
            .find(';')
            .ok_or_else(|| xml_error("unterminated entity reference"))?
            + start;
        let entity = &rest[start + 1..end];
        let ch = match entity {
            "lt" => '<',
            "gt" => '>',
            "amp" => '&',
            "quot" => '"',
            "apos" => '\'',
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse().ok()
                } else {
                    None
                };
                code.and_then(char::from_u32)
                    .ok_or_else(|| xml_error(&format!("unknown entity '&{};'", entity)))?
            }
        };
        out.push(ch);
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}
