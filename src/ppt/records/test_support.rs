//! Builders for synthetic record bytes used by the unit tests.

use crate::ppt::consts::{CONTAINER_VERSION, RecordType};

pub fn header_bytes(version: u8, instance: u16, raw_type: u16, length: u32) -> [u8; 8] {
    let ver_inst = (u16::from(version) & 0x000F) | ((instance & 0x0FFF) << 4);
    let mut bytes = [0u8; 8];
    bytes[0..2].copy_from_slice(&ver_inst.to_le_bytes());
    bytes[2..4].copy_from_slice(&raw_type.to_le_bytes());
    bytes[4..8].copy_from_slice(&length.to_le_bytes());
    bytes
}

/// Header plus payload with the length field set to the payload size.
pub fn record(version: u8, instance: u16, raw_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = header_bytes(version, instance, raw_type, payload.len() as u32).to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

pub fn atom(record_type: RecordType, instance: u16, payload: &[u8]) -> Vec<u8> {
    record(0, instance, record_type.code(), payload)
}

pub fn container(record_type: RecordType, instance: u16, children: &[Vec<u8>]) -> Vec<u8> {
    record(CONTAINER_VERSION, instance, record_type.code(), &children.concat())
}

pub fn utf16(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

pub fn cstring(instance: u16, text: &str) -> Vec<u8> {
    atom(RecordType::CString, instance, &utf16(text))
}

/// Little-endian concatenation of `u32` values.
pub fn u32s(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
