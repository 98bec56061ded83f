use crate::*;

#[test]
fn empty_buffer() {
    test!(
        Packet::new(&[0u8; 0][..]).err() => Some(Error::TruncatedBuffer),
        requires_ack(&[]) => Err(Error::TruncatedBuffer),
        decode_addressing(&[]) => Err(Error::TruncatedBuffer),
    );
}

#[test]
fn every_short_buffer_is_truncated() {
    let data = hex::decode("0d618801cdab341278562b000000").unwrap();

    for len in 0..Packet::<&[u8]>::HEADER_LEN {
        test!(
            requires_ack(&data[..len]) => Err(Error::TruncatedBuffer),
            decode_addressing(&data[..len]) => Err(Error::TruncatedBuffer),
        );
    }

    test!(
        requires_ack(&data[..Packet::<&[u8]>::HEADER_LEN]) => Ok(true),
    );
}

#[test]
fn length_beyond_buffer() {
    // Declares 4 payload bytes, holds 2.
    let data = hex::decode("0d618801cdab341278562b00").unwrap();
    let packet = Packet::new(&data[..]).unwrap();

    test!(
        packet.validate() => Err(Error::TruncatedBuffer),
        packet.payload() => &[0x2b, 0x00][..],
        packet.requires_ack() => true,
    );
}

#[test]
fn length_beyond_mtu() {
    let mut data = [0u8; 130];
    data[0] = 0x80;
    let packet = Packet::new(&data[..]).unwrap();

    test!(
        packet.radio_header().check_mtu() => Err(Error::LengthExceedsMtu),
        packet.validate() => Err(Error::LengthExceedsMtu),
    );
}

#[test]
fn extended_addressing() {
    // Data, intra-PAN, extended destination, short source.
    let data = hex::decode("09418c01cdab34127856").unwrap();
    let packet = Packet::new(&data[..]).unwrap();

    test!(
        packet.frame_control().dst_addressing_mode() => AddressingMode::Extended,
        packet.addressing() => Err(Error::UnrepresentableAddressing(
            Unrepresentable::ExtendedAddress
        )),
        PacketRepr::parse(&packet) => Err(Error::UnrepresentableAddressing(
            Unrepresentable::ExtendedAddress
        )),
    );
}

#[test]
fn inter_pan_source() {
    // Data, intra-PAN clear, short destination and source.
    let data = hex::decode("09018801cdab34127856").unwrap();
    let packet = Packet::new(&data[..]).unwrap();

    test!(
        packet.frame_control().intra_pan() => false,
        packet.addressing() => Err(Error::UnrepresentableAddressing(
            Unrepresentable::SourcePanId
        )),
    );
}

#[test]
fn reserved_frame_type() {
    let data = hex::decode("09658801cdab34127856").unwrap();
    let packet = Packet::new(&data[..]).unwrap();

    test!(
        packet.frame_control().frame_type() => FrameType::Reserved(5),
        packet.requires_ack() => true,
        packet.addressing().map(|a| a.dst_address) => Ok(Address::Short(0x1234)),
    );
}
