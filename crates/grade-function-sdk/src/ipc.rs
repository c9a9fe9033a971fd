//! IPC protocol for communicating with the hosting gateway.
//!
//! Handlers receive invocation events and return responses over a simple
//! length-prefixed JSON protocol: each frame is a 4-byte big-endian length
//! followed by that many bytes of JSON. Events arrive on stdin, responses go
//! out on stdout. Anything a handler wants to log must go to stderr, since
//! stray writes on stdout corrupt the frame stream.

use std::io::{self, Read, Write};

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::response::Response;

/// Transport-layer faults.
///
/// Distinct from `HandlerError`: a transport fault means no response can be
/// delivered at all, so it never maps to a status code.
#[derive(Error, Debug)]
pub enum IpcError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("frame codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Read one invocation event from stdin.
///
/// Returns `Ok(None)` on clean end-of-stream (the host closed the pipe).
pub fn read_event() -> Result<Option<JsonValue>, IpcError> {
    read_event_from(&mut io::stdin().lock())
}

/// Send one response to stdout.
pub fn send_response(response: &Response) -> Result<(), IpcError> {
    write_response_to(&mut io::stdout().lock(), response)
}

fn read_event_from<R: Read>(reader: &mut R) -> Result<Option<JsonValue>, IpcError> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let len = u32::from_be_bytes(len_buf) as usize;
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;

    Ok(Some(serde_json::from_slice(&payload)?))
}

fn write_response_to<W: Write>(writer: &mut W, response: &Response) -> Result<(), IpcError> {
    let payload = serde_json::to_vec(response)?;

    writer.write_all(&(payload.len() as u32).to_be_bytes())?;
    writer.write_all(&payload)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame(payload: &[u8]) -> Vec<u8> {
        let mut buf = (payload.len() as u32).to_be_bytes().to_vec();
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn test_read_event_frame() {
        let bytes = frame(br#"{"student_id": "S1", "grades": [85, 90]}"#);
        let event = read_event_from(&mut bytes.as_slice()).unwrap().unwrap();
        assert_eq!(event["student_id"], json!("S1"));
        assert_eq!(event["grades"], json!([85, 90]));
    }

    #[test]
    fn test_eof_before_length_prefix_is_end_of_stream() {
        let bytes: Vec<u8> = Vec::new();
        assert!(read_event_from(&mut bytes.as_slice()).unwrap().is_none());
    }

    #[test]
    fn test_truncated_payload_is_io_error() {
        let mut bytes = frame(br#"{"a": 1}"#);
        bytes.truncate(bytes.len() - 3);
        assert!(matches!(
            read_event_from(&mut bytes.as_slice()),
            Err(IpcError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_json_frame_is_codec_error() {
        let bytes = frame(b"{not json");
        assert!(matches!(
            read_event_from(&mut bytes.as_slice()),
            Err(IpcError::Codec(_))
        ));
    }

    #[test]
    fn test_response_round_trip() {
        let response = Response::json(200, json!({"message": "OK"})).with_cors();

        let mut wire = Vec::new();
        write_response_to(&mut wire, &response).unwrap();

        let len = u32::from_be_bytes(wire[..4].try_into().unwrap()) as usize;
        assert_eq!(wire.len(), 4 + len);

        let decoded: Response = serde_json::from_slice(&wire[4..]).unwrap();
        assert_eq!(decoded.status_code, 200);
        assert_eq!(decoded.headers.len(), 4);
        assert_eq!(decoded.body, response.body);
    }
}
