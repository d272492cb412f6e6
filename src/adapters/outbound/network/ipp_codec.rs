//! Minimal IPP/1.1 codec for the Get-Printer-Attributes exchange
//!
//! Only what a status sweep needs is supported: encoding one fixed request
//! and decoding the attribute groups of the response into typed values.

use crate::monitoring::domain::{DeviceDescription, Marker};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::collections::HashMap;
use thiserror::Error;

const IPP_VERSION: [u8; 2] = [0x01, 0x01];
const OP_GET_PRINTER_ATTRIBUTES: u16 = 0x000B;

const TAG_OPERATION_ATTRIBUTES: u8 = 0x01;
const TAG_END_OF_ATTRIBUTES: u8 = 0x03;
const TAG_PRINTER_ATTRIBUTES: u8 = 0x04;

const TAG_INTEGER: u8 = 0x21;
const TAG_BOOLEAN: u8 = 0x22;
const TAG_ENUM: u8 = 0x23;
const TAG_TEXT_WITH_LANGUAGE: u8 = 0x35;
const TAG_NAME_WITH_LANGUAGE: u8 = 0x36;
const TAG_TEXT: u8 = 0x41;
const TAG_NAME: u8 = 0x42;
const TAG_KEYWORD: u8 = 0x44;
const TAG_URI: u8 = 0x45;
const TAG_CHARSET: u8 = 0x47;
const TAG_NATURAL_LANGUAGE: u8 = 0x48;

/// Printer attributes asked for in every query
pub const REQUESTED_ATTRIBUTES: [&str; 8] = [
    "printer-state",
    "printer-state-message",
    "marker-names",
    "marker-colors",
    "marker-levels",
    "marker-types",
    "printer-media-sheets-completed",
    "printer-impressions-completed",
];

#[derive(Debug, Error, PartialEq)]
pub enum IppError {
    #[error("IPP response truncated at byte {offset}")]
    Truncated { offset: usize },

    #[error("unsupported IPP version {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },

    #[error("IPP request failed with status 0x{0:04x}")]
    Status(u16),

    #[error("attribute found outside of any attribute group")]
    MissingGroup,

    #[error("attribute value uses additional-value form with no preceding attribute")]
    OrphanValue,
}

/// One decoded attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum IppValue {
    Integer(i32),
    Boolean(bool),
    Enum(i32),
    Text(String),
    Other(u8),
}

impl IppValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            IppValue::Integer(v) | IppValue::Enum(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            IppValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Decoded Get-Printer-Attributes response
#[derive(Debug, Default, PartialEq)]
pub struct PrinterAttributes {
    pub status_code: u16,
    pub request_id: u32,
    values: HashMap<String, Vec<IppValue>>,
}

impl PrinterAttributes {
    pub fn get(&self, name: &str) -> &[IppValue] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    fn first_int(&self, name: &str) -> Option<i64> {
        self.get(name).first().and_then(IppValue::as_int)
    }

    fn texts(&self, name: &str) -> Vec<&str> {
        self.get(name).iter().filter_map(IppValue::as_text).collect()
    }

    /// Maps the raw attributes onto the device description used by the domain
    ///
    /// Marker attributes are parallel lists; a list shorter than the others
    /// leaves the missing fields empty (or -1 for levels).
    pub fn into_description(self) -> DeviceDescription {
        let names = self.texts("marker-names");
        let colors = self.texts("marker-colors");
        let types = self.texts("marker-types");
        let levels: Vec<i64> = self
            .get("marker-levels")
            .iter()
            .filter_map(IppValue::as_int)
            .collect();

        let count = names.len().max(levels.len());
        let markers = (0..count)
            .map(|i| {
                let level = levels
                    .get(i)
                    .and_then(|l| i32::try_from(*l).ok())
                    .unwrap_or(-1);
                Marker::new(
                    names.get(i).copied().unwrap_or(""),
                    colors.get(i).copied(),
                    level,
                    types.get(i).copied().unwrap_or(""),
                )
            })
            .collect();

        let sheets_completed = self
            .first_int("printer-media-sheets-completed")
            .filter(|n| *n >= 0)
            .or_else(|| {
                self.first_int("printer-impressions-completed")
                    .filter(|n| *n >= 0)
            });

        DeviceDescription {
            state_message: self.texts("printer-state-message").first().map(|s| s.to_string()),
            sheets_completed,
            markers,
        }
    }
}

/// Encodes a Get-Printer-Attributes request for `printer_uri`
pub fn encode_get_printer_attributes(printer_uri: &str, request_id: u32) -> Bytes {
    let mut buf = BytesMut::with_capacity(512);
    buf.put_slice(&IPP_VERSION);
    buf.put_u16(OP_GET_PRINTER_ATTRIBUTES);
    buf.put_u32(request_id);

    buf.put_u8(TAG_OPERATION_ATTRIBUTES);
    put_attribute(&mut buf, TAG_CHARSET, "attributes-charset", b"utf-8");
    put_attribute(&mut buf, TAG_NATURAL_LANGUAGE, "attributes-natural-language", b"en");
    put_attribute(&mut buf, TAG_URI, "printer-uri", printer_uri.as_bytes());
    put_attribute(
        &mut buf,
        TAG_NAME,
        "requesting-user-name",
        env!("CARGO_PKG_NAME").as_bytes(),
    );
    for (i, attribute) in REQUESTED_ATTRIBUTES.iter().enumerate() {
        let name = if i == 0 { "requested-attributes" } else { "" };
        put_attribute(&mut buf, TAG_KEYWORD, name, attribute.as_bytes());
    }

    buf.put_u8(TAG_END_OF_ATTRIBUTES);
    buf.freeze()
}

fn put_attribute(buf: &mut BytesMut, tag: u8, name: &str, value: &[u8]) {
    buf.put_u8(tag);
    buf.put_u16(name.len() as u16);
    buf.put_slice(name.as_bytes());
    buf.put_u16(value.len() as u16);
    buf.put_slice(value);
}

/// Decodes a Get-Printer-Attributes response
///
/// Only the printer attribute group is retained.
///
/// # Errors
/// Returns an error if the body is truncated or the status code is not a
/// successful one (0x0000 to 0x00FF)
pub fn decode_response(body: &[u8]) -> Result<PrinterAttributes, IppError> {
    let total = body.len();
    let mut buf = body;
    let offset = |buf: &[u8]| total - buf.remaining();

    ensure(buf, 8, offset(buf))?;
    let major = buf.get_u8();
    let minor = buf.get_u8();
    if !(1..=2).contains(&major) {
        return Err(IppError::UnsupportedVersion { major, minor });
    }
    let status_code = buf.get_u16();
    let request_id = buf.get_u32();

    if status_code > 0x00FF {
        return Err(IppError::Status(status_code));
    }

    let mut attributes = PrinterAttributes {
        status_code,
        request_id,
        values: HashMap::new(),
    };
    let mut group = 0u8;
    let mut last_name: Option<String> = None;

    loop {
        if !buf.has_remaining() {
            return Err(IppError::Truncated { offset: total });
        }
        let tag = buf.get_u8();

        if tag == TAG_END_OF_ATTRIBUTES {
            break;
        }
        if tag <= 0x0F {
            group = tag;
            last_name = None;
            continue;
        }

        ensure(buf, 2, offset(buf))?;
        let name_len = buf.get_u16() as usize;
        ensure(buf, name_len, offset(buf))?;
        let name = String::from_utf8_lossy(&buf[..name_len]).into_owned();
        buf.advance(name_len);

        ensure(buf, 2, offset(buf))?;
        let value_len = buf.get_u16() as usize;
        ensure(buf, value_len, offset(buf))?;
        let value = decode_value(tag, &buf[..value_len]);
        buf.advance(value_len);

        if group == 0 {
            return Err(IppError::MissingGroup);
        }

        let name = if name.is_empty() {
            last_name.clone().ok_or(IppError::OrphanValue)?
        } else {
            last_name = Some(name.clone());
            name
        };

        if group == TAG_PRINTER_ATTRIBUTES {
            attributes.values.entry(name).or_default().push(value);
        }
    }

    Ok(attributes)
}

fn ensure(buf: &[u8], needed: usize, offset: usize) -> Result<(), IppError> {
    if buf.remaining() < needed {
        return Err(IppError::Truncated { offset });
    }
    Ok(())
}

fn decode_value(tag: u8, raw: &[u8]) -> IppValue {
    match tag {
        TAG_INTEGER | TAG_ENUM if raw.len() == 4 => {
            let v = i32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
            if tag == TAG_ENUM {
                IppValue::Enum(v)
            } else {
                IppValue::Integer(v)
            }
        }
        TAG_BOOLEAN if raw.len() == 1 => IppValue::Boolean(raw[0] != 0),
        TAG_TEXT_WITH_LANGUAGE | TAG_NAME_WITH_LANGUAGE => {
            // language length, language, text length, text
            let mut rest = raw;
            if rest.len() < 2 {
                return IppValue::Other(tag);
            }
            let lang_len = rest.get_u16() as usize;
            if rest.len() < lang_len + 2 {
                return IppValue::Other(tag);
            }
            rest.advance(lang_len);
            let text_len = (rest.get_u16() as usize).min(rest.len());
            IppValue::Text(String::from_utf8_lossy(&rest[..text_len]).into_owned())
        }
        TAG_TEXT..=0x49 => IppValue::Text(String::from_utf8_lossy(raw).into_owned()),
        _ => IppValue::Other(tag),
    }
}
