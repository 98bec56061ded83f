use super::*;

mod parsing;

#[test]
fn emit_imm_ack() {
    let imm_ack = PacketBuilder::new_imm_ack(1).finalize().unwrap();

    let mut buffer = vec![0; imm_ack.buffer_len()];
    imm_ack.emit(&mut Packet::new_unchecked(&mut buffer[..]));

    assert_eq!(
        buffer,
        [0x09, 0x02, 0x00, 0x01, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn emit_data_packet() {
    let packet = PacketBuilder::new_data(&[0x2b, 0x00, 0x00, 0x00])
        .set_sequence_number(1)
        .set_dst_pan_id(0xabcd)
        .set_dst_address(Address::Short(0x1234))
        .set_src_address(Address::Short(0x5678))
        .set_ack_request(true)
        .finalize()
        .unwrap();

    let mut buffer = vec![0; packet.buffer_len()];
    packet.emit(&mut Packet::new_unchecked(&mut buffer[..]));

    assert_eq!(
        buffer,
        hex::decode("0d618801cdab341278562b000000").unwrap()
    );
}

#[test]
fn emit_broadcast_packet() {
    let packet = PacketBuilder::new_data(&[0xaa])
        .set_sequence_number(0xfe)
        .set_dst_pan_id(IEEE154_BROADCAST_PAN)
        .set_dst_address(Address::BROADCAST)
        .set_src_address(Address::Short(0x0001))
        .finalize()
        .unwrap();

    let buffer = packet.to_buffer().unwrap();
    assert_eq!(&buffer[..], hex::decode("0a4188feffffffff0100aa").unwrap());

    let packet = Packet::new(&buffer[..]).unwrap();
    assert!(!packet.requires_ack());
}

#[test]
fn emit_preserves_reserved_bits() {
    let data = hex::decode("0de1bb01cdab341278562b000000").unwrap();
    let packet = Packet::new(&data[..]).unwrap();
    let repr = PacketRepr::parse(&packet).unwrap();
    assert_eq!(repr.frame_control.reserved, 0x3380);

    let mut buffer = vec![0; repr.buffer_len()];
    repr.emit(&mut Packet::new_unchecked(&mut buffer[..]));
    assert_eq!(buffer, data);
}

#[test]
fn to_buffer_rejects_unrepresentable() {
    let repr = PacketRepr {
        dst_address: Address::Extended(1),
        ..Default::default()
    };
    assert_eq!(
        repr.to_buffer(),
        Err(Error::UnrepresentableAddressing(
            Unrepresentable::ExtendedAddress
        ))
    );

    let repr = PacketRepr {
        frame_control: FrameControlRepr::decode(0x8001),
        src_address: Address::Short(0x5678),
        ..Default::default()
    };
    assert_eq!(
        repr.to_buffer(),
        Err(Error::UnrepresentableAddressing(
            Unrepresentable::SourcePanId
        ))
    );
}

#[test]
fn largest_packet() {
    let payload = [0x55; PacketRepr::<'static>::MAX_PAYLOAD_LEN];
    let repr = PacketBuilder::new_data(&payload)
        .set_dst_address(Address::Short(0x1234))
        .finalize()
        .unwrap();

    let buffer = repr.to_buffer().unwrap();
    assert_eq!(buffer.len(), RADIO_BUFFER_LEN);
    assert_eq!(buffer[0] as usize, IEEE154_LINK_MTU);

    let packet = Packet::new(&buffer[..]).unwrap();
    assert_eq!(packet.validate(), Ok(()));
    assert_eq!(packet.payload(), &payload[..]);
}

#[test]
fn receive_then_acknowledge() {
    let data = hex::decode("0d618801cdab341278562b000000").unwrap();
    let packet = Packet::new(&data[..]).unwrap();

    let ack = packet.imm_ack().unwrap().unwrap();
    let buffer = ack.to_buffer().unwrap();
    let ack = Packet::new(&buffer[..]).unwrap();

    assert_eq!(ack.frame_control().frame_type(), FrameType::Ack);
    assert_eq!(ack.sequence_number(), packet.sequence_number());
    assert!(ack.payload().is_empty());
    assert!(!ack.requires_ack());
    assert_eq!(requires_ack(&buffer), Ok(false));
}
