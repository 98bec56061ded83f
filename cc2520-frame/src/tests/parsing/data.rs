use crate::*;

#[test]
fn parse_data_packet() {
    let packet = [
        0x0d, 0x61, 0x88, 0x01, 0xcd, 0xab, 0x34, 0x12, 0x78, 0x56, 0x2b, 0x00, 0x00, 0x00,
    ];
    let packet = Packet::new(&packet[..]).unwrap();
    let fc = packet.frame_control();

    test!(
        packet.radio_header().length() => 13,
        fc.raw() => 0x8861,
        fc.frame_type() => FrameType::Data,
        fc.security_enabled() => false,
        fc.frame_pending() => false,
        fc.ack_request() => true,
        fc.intra_pan() => true,
        fc.dst_addressing_mode() => AddressingMode::Short,
        fc.src_addressing_mode() => AddressingMode::Short,
        packet.sequence_number() => 1,
        packet.header().dst_pan_id() => 0xabcd,
        packet.requires_ack() => true,
        packet.payload() => &[0x2b, 0x00, 0x00, 0x00][..],
    );

    let addressing = packet.addressing().unwrap();
    test!(
        addressing.dst_pan_id => Some(0xabcd),
        addressing.src_pan_id() => Some(0xabcd),
        addressing.dst_address => Address::Short(0x1234),
        addressing.src_address => Address::Short(0x5678),
    );
}

#[test]
fn parse_broadcast_packet() {
    let packet = hex::decode("0a6188feffffffff0100aa").unwrap();
    let packet = Packet::new(&packet[..]).unwrap();

    let addressing = packet.addressing().unwrap();
    test!(
        packet.frame_control().ack_request() => true,
        addressing.dst_pan_id => Some(IEEE154_BROADCAST_PAN),
        addressing.dst_address => Address::BROADCAST,
        addressing.src_address => Address::Short(0x0001),
        packet.requires_ack() => false,
        packet.payload() => &[0xaa][..],
    );
}

#[test]
fn parse_then_emit() {
    let data = hex::decode("0d618801cdab341278562b000000").unwrap();
    let packet = Packet::new(&data[..]).unwrap();
    let repr = PacketRepr::parse(&packet).unwrap();

    test!(
        repr.frame_control.frame_type => FrameType::Data,
        repr.frame_control.ack_request => true,
        repr.sequence_number => 1,
        repr.dst_pan_id => 0xabcd,
        repr.dst_address => Address::Short(0x1234),
        repr.src_address => Address::Short(0x5678),
        repr.payload => &[0x2b, 0x00, 0x00, 0x00][..],
    );

    let buffer = repr.to_buffer().unwrap();
    assert_eq!(&buffer[..], &data[..]);
}

#[test]
fn trailing_bytes_are_not_payload() {
    // Length covers two payload bytes, the buffer holds four.
    let data = hex::decode("0b418801cdab34127856aabbccdd").unwrap();
    let packet = Packet::new(&data[..]).unwrap();

    test!(
        packet.validate() => Ok(()),
        packet.payload() => &[0xaa, 0xbb][..],
    );
}
