use suica::protocol::codec::encode_command_frame;
use suica::protocol::Command;
use suica::types::{BlockElement, Idm, ServiceCode, SystemCode};

#[test]
fn read_history_block_wire_layout() {
    let cmd = Command::ReadWithoutEncryption {
        idm: Idm::from_bytes([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]),
        service: ServiceCode::SUICA_HISTORY,
        block: BlockElement::new(0, 0),
    };

    let frame = encode_command_frame(&cmd).unwrap();

    // [len][0x06][idm(8)][svc count][0x090f LE][blk count][0x80, 0x00]
    assert_eq!(
        frame,
        vec![
            0x10, 0x06, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x01, 0x0f, 0x09, 0x01,
            0x80, 0x00
        ]
    );
}

#[test]
fn read_command_block_index_varies() {
    let base = |idx| Command::ReadWithoutEncryption {
        idm: Idm::from_bytes([0; 8]),
        service: ServiceCode::SUICA_HISTORY,
        block: BlockElement::new(0, idx),
    };

    let f0 = encode_command_frame(&base(0)).unwrap();
    let f9 = encode_command_frame(&base(9)).unwrap();
    assert_eq!(f0.len(), f9.len());
    assert_eq!(*f9.last().unwrap(), 9);
}

#[test]
fn polling_wire_layout() {
    let cmd = Command::Polling {
        system_code: SystemCode::SUICA,
        request_code: 1,
        time_slot: 0,
    };

    let frame = encode_command_frame(&cmd).unwrap();
    // [len][0x00][system code BE][request code][time slot]
    assert_eq!(frame, vec![0x06, 0x00, 0x00, 0x03, 0x01, 0x00]);
}
