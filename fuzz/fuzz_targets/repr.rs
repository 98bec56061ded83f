#![no_main]

use cc2520_frame::{FrameControlRepr, FrameType, Packet, PacketRepr, FCF_RESERVED_MASK};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|repr: PacketRepr| {
    let fc = repr.frame_control;
    let canonical = FrameType::from(fc.frame_type.bits()) == fc.frame_type
        && fc.reserved & !FCF_RESERVED_MASK == 0;
    if canonical {
        assert_eq!(FrameControlRepr::decode(fc.encode()), fc);
    }

    if repr.validate().is_err() {
        return;
    }

    let buffer = repr.to_buffer().unwrap();
    let packet = Packet::new(&buffer[..]).unwrap();
    assert_eq!(packet.validate(), Ok(()));
    assert_eq!(packet.payload(), repr.payload);
    assert_eq!(packet.sequence_number(), repr.sequence_number);

    let expected = PacketRepr {
        frame_control: FrameControlRepr::decode(fc.encode()),
        ..repr
    };
    assert_eq!(PacketRepr::parse(&packet), Ok(expected));
});
