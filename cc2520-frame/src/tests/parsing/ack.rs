use crate::*;

#[test]
fn parse_imm_ack() {
    let packet = [0x09, 0x02, 0x00, 0x01, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00];
    let packet = Packet::new(&packet[..]).unwrap();
    let fc = packet.frame_control();

    test!(
        fc.frame_type() => FrameType::Ack,
        fc.security_enabled() => false,
        fc.frame_pending() => false,
        fc.ack_request() => false,
        fc.intra_pan() => false,
        fc.dst_addressing_mode() => AddressingMode::Absent,
        fc.src_addressing_mode() => AddressingMode::Absent,
        fc.reserved() => 0,
        packet.sequence_number() => 1,
        packet.payload() => &[0u8; 0][..],
        packet.requires_ack() => false,
        packet.validate() => Ok(()),
    );

    let addressing = packet.addressing().unwrap();
    test!(
        addressing.dst_pan_id => None,
        addressing.dst_address => Address::Absent,
        addressing.src_address => Address::Absent,
    );
}

#[test]
fn ack_with_ack_request_is_not_acked() {
    // An acknowledgement that (wrongly) asks to be acknowledged.
    let packet = hex::decode("092200073412ffff0000").unwrap();
    let packet = Packet::new(&packet[..]).unwrap();

    test!(
        packet.frame_control().frame_type() => FrameType::Ack,
        packet.frame_control().ack_request() => true,
        packet.requires_ack() => false,
        packet.imm_ack() => Ok(None),
    );
}
