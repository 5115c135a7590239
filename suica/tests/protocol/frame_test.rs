use suica::protocol::Frame;

#[test]
fn frame_roundtrip_read_command_payload() {
    let payload = vec![0x06, 1, 2, 3, 4, 5, 6, 7, 8, 0x01, 0x0f, 0x09, 0x01, 0x80, 0x00];
    let frame = Frame::encode(&payload).unwrap();
    assert_eq!(frame.len(), payload.len() + 1);
    assert_eq!(frame[0] as usize, frame.len());
    assert_eq!(Frame::decode(&frame).unwrap(), payload);
}

#[test]
fn frame_rejects_inconsistent_length_byte() {
    let mut frame = Frame::encode(&[0x06, 0x00]).unwrap();
    frame.push(0xFF); // trailing garbage the length byte does not cover
    assert!(Frame::decode(&frame).is_err());
}

#[test]
fn frame_rejects_empty_input() {
    assert!(Frame::decode(&[]).is_err());
}
