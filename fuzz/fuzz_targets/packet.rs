#![no_main]

use cc2520_frame::{requires_ack, Packet, PacketRepr, RADIO_BUFFER_LEN};

use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: &[u8]| -> Corpus {
    if data.len() > RADIO_BUFFER_LEN {
        return Corpus::Reject;
    }

    let Ok(packet) = Packet::new(data) else {
        assert!(requires_ack(data).is_err());
        return Corpus::Keep;
    };

    let _ = packet.validate();
    let _ = packet.payload();
    assert_eq!(requires_ack(data), Ok(packet.requires_ack()));

    if let Ok(repr) = PacketRepr::parse(&packet) {
        assert_eq!(repr.frame_control.encode(), packet.frame_control().raw());
    }

    Corpus::Keep
});
