// suica-rs/suica/src/protocol/codec.rs

use crate::Result;

use super::commands::Command;
use super::frame::Frame;
use super::responses::Response;

/// Encode a Command into a full wire frame (with the length prefix).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let payload = cmd.encode();
    Frame::encode(&payload)
}

/// Decode a full wire frame and parse the contained response for the
/// expected command code.
pub fn decode_response_frame(expected_cmd: u8, frame: &[u8]) -> Result<Response> {
    let payload = Frame::decode(frame)?;
    Response::decode(expected_cmd, &payload)
}
