// src/model.rs
//! Output records. Field names follow the JSON contract consumed by the
//! documentation generators (`methodName`, `type`, ...).

use serde::{Deserialize, Serialize};

/// Documentation of one field of a named shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeFieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    pub required: bool,
    /// Fields of the shape named by `type_name`; one level only.
    pub parameters: Vec<ShapeFieldDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleCode {
    pub content: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnsRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub method_name: String,
    pub description: String,
    pub example: Option<ExampleCode>,
    pub parameters: Vec<ParameterRecord>,
    /// `None` when not deprecated; `Some("")` when deprecated without text.
    pub deprecated: Option<String>,
    pub returns: ReturnsRecord,
}
