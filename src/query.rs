// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    fn render(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Float(f) => f.to_string(),
            ParamValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// An insertion-ordered set of query parameters.
///
/// Entries whose value is absent, `false`, or an empty string are omitted at
/// append time, so the rendered query string never carries `foo=false` or
/// `foo=` noise. Everything here is plain string construction; there is no
/// encoding state and no I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name=value`, unless the value is `false` or an empty string.
    pub fn append(&mut self, name: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match &value {
            ParamValue::Bool(false) => return,
            ParamValue::Str(s) if s.is_empty() => return,
            _ => {}
        }
        self.entries.push((name.to_string(), value));
    }

    /// Appends `name=value` when the value is present; `None` is omitted.
    pub fn append_opt(&mut self, name: &str, value: Option<impl Into<ParamValue>>) {
        if let Some(value) = value {
            self.append(name, value);
        }
    }

    pub fn entries(&self) -> &[(String, ParamValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders `a=1&d=x`, percent-encoding names and values.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| {
                format!("{}={}", percent_encode(name), percent_encode(&value.render()))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
