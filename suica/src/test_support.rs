//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and response-frame
//! construction so tests across the crate and tests/ directory can reuse
//! the same logic.
#![allow(dead_code)]

use std::time::Duration;

use crate::card::CardSession;
use crate::protocol::Frame;
use crate::reader::{Initialized, Reader};
use crate::transport::mock::MockTransport;
use crate::transport::Transport;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// IDm used by all canned frames below.
#[doc(hidden)]
pub fn sample_idm() -> Idm {
    Idm::from_bytes([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08])
}

/// PMm used by all canned frames below.
#[doc(hidden)]
pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes([0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10])
}

/// Build a MockTransport pre-seeded with the given framed responses and
/// return it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: create and initialize a Reader backed by a MockTransport
/// pre-seeded with the provided frames.
#[doc(hidden)]
pub fn initialized_mock_reader(responses: Vec<Vec<u8>>) -> Result<Reader<Initialized>> {
    let boxed = boxed_mock_with_responses(responses);
    Reader::new_with_transport(boxed).initialize()
}

/// Poll the mock-backed reader once and return the resulting session.
/// The polling frame must already be queued on the transport.
#[doc(hidden)]
pub fn polled_session(reader: &mut Reader<Initialized>) -> Result<CardSession<'_>> {
    reader.poll(SystemCode::SUICA, Duration::from_millis(0))
}

/// A framed Polling response for the sample card.
#[doc(hidden)]
pub fn polling_frame() -> Vec<u8> {
    let mut payload = vec![0x01u8];
    payload.extend_from_slice(sample_idm().as_bytes());
    payload.extend_from_slice(sample_pmm().as_bytes());
    payload.extend_from_slice(&SystemCode::SUICA.to_be_bytes());
    Frame::encode(&payload).expect("polling payload fits a frame")
}

/// A framed successful ReadWithoutEncryption response carrying one block.
#[doc(hidden)]
pub fn read_response_frame(block: &[u8; 16]) -> Vec<u8> {
    let mut payload = vec![0x07u8];
    payload.extend_from_slice(sample_idm().as_bytes());
    payload.push(0); // status1
    payload.push(0); // status2
    payload.push(1); // block count
    payload.extend_from_slice(block);
    Frame::encode(&payload).expect("read payload fits a frame")
}

/// A framed ReadWithoutEncryption response carrying only status flags.
#[doc(hidden)]
pub fn read_status_frame(s1: u8, s2: u8) -> Vec<u8> {
    let mut payload = vec![0x07u8];
    payload.extend_from_slice(sample_idm().as_bytes());
    payload.push(s1);
    payload.push(s2);
    Frame::encode(&payload).expect("status payload fits a frame")
}

/// Raw history block bytes for the given logical fields.
#[doc(hidden)]
pub fn history_block(
    action: u8,
    year: u16,
    month: u8,
    day: u8,
    balance: u16,
    serial: u32,
) -> [u8; 16] {
    let packed = (year - 2000) << 9 | u16::from(month) << 5 | u16::from(day);
    let mut b = [0u8; 16];
    b[0] = action;
    b[4..6].copy_from_slice(&packed.to_be_bytes());
    b[10..12].copy_from_slice(&balance.to_le_bytes());
    b[12] = (serial >> 16) as u8;
    b[13] = (serial >> 8) as u8;
    b[14] = serial as u8;
    b
}

/// The zero-leading sentinel block that terminates a history scan.
#[doc(hidden)]
pub fn sentinel_block() -> [u8; 16] {
    [0u8; 16]
}
