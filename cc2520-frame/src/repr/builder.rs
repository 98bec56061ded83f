use super::*;
use crate::{AddressingMode, FrameType};

/// Marker for a data packet builder.
pub struct Data;
/// Marker for an acknowledgement packet builder.
pub struct Ack;

/// A helper for building CC2520 packets.
pub struct PacketBuilder<'p, T> {
    packet: PacketRepr<'p>,
    r#type: core::marker::PhantomData<T>,
}

impl<'p> PacketBuilder<'p, Ack> {
    /// Create a new builder for an immediate acknowledgment packet.
    ///
    /// The acknowledgement carries no addressing and no payload.
    pub fn new_imm_ack(sequence_number: u8) -> Self {
        Self {
            packet: PacketRepr {
                frame_control: FrameControlRepr {
                    frame_type: FrameType::Ack,
                    security_enabled: false,
                    frame_pending: false,
                    ack_request: false,
                    intra_pan: false,
                    dst_addressing_mode: AddressingMode::Absent,
                    src_addressing_mode: AddressingMode::Absent,
                    reserved: 0,
                },
                sequence_number,
                ..Default::default()
            },
            r#type: core::marker::PhantomData,
        }
    }
}

impl<'p> PacketBuilder<'p, Data> {
    /// Create a new builder for a data packet.
    ///
    /// Source and destination share the destination PAN identifier, which
    /// is the only PAN identifier the simplified header carries.
    pub fn new_data(payload: &'p [u8]) -> Self {
        Self {
            packet: PacketRepr {
                frame_control: FrameControlRepr {
                    frame_type: FrameType::Data,
                    security_enabled: false,
                    frame_pending: false,
                    ack_request: false,
                    intra_pan: true,
                    dst_addressing_mode: AddressingMode::Absent,
                    src_addressing_mode: AddressingMode::Absent,
                    reserved: 0,
                },
                payload,
                ..Default::default()
            },
            r#type: core::marker::PhantomData,
        }
    }

    /// Set the acknowledgement request bit.
    pub fn set_ack_request(mut self, ack_request: bool) -> Self {
        self.packet.frame_control.ack_request = ack_request;
        self
    }

    /// Set the destination PAN ID.
    pub fn set_dst_pan_id(mut self, pan_id: u16) -> Self {
        self.packet.dst_pan_id = pan_id;
        self
    }

    /// Set the destination address.
    ///
    /// # Note
    /// Based on the address, the addressing mode will be set.
    pub fn set_dst_address(mut self, address: Address) -> Self {
        self.packet.frame_control.dst_addressing_mode = address.into();
        self.packet.dst_address = address;
        self
    }

    /// Set the source address.
    ///
    /// # Note
    /// Based on the address, the addressing mode will be set.
    pub fn set_src_address(mut self, address: Address) -> Self {
        self.packet.frame_control.src_addressing_mode = address.into();
        self.packet.src_address = address;
        self
    }

    /// Set the packet payload.
    pub fn set_payload(mut self, payload: &'p [u8]) -> Self {
        self.packet.payload = payload;
        self
    }
}

impl<'p, T> PacketBuilder<'p, T> {
    /// Set the data sequence number.
    pub fn set_sequence_number(mut self, sequence_number: u8) -> Self {
        self.packet.sequence_number = sequence_number;
        self
    }

    /// Set the frame pending bit.
    pub fn set_frame_pending(mut self, frame_pending: bool) -> Self {
        self.packet.frame_control.frame_pending = frame_pending;
        self
    }

    /// Finalize the packet builder, returning the packet representation.
    ///
    /// # Errors
    /// Fails when the packet does not pass [`PacketRepr::validate`].
    pub fn finalize(self) -> Result<PacketRepr<'p>> {
        self.packet.validate()?;
        Ok(self.packet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imm_ack() {
        let ack = PacketBuilder::new_imm_ack(7).finalize().unwrap();

        assert_eq!(ack.frame_control.encode(), 0x0002);
        assert_eq!(ack.sequence_number, 7);
        assert_eq!(ack.dst_address, Address::Absent);
        assert_eq!(ack.src_address, Address::Absent);
        assert!(ack.payload.is_empty());
        assert_eq!(ack.buffer_len(), 10);
    }

    #[test]
    fn data() {
        let data = PacketBuilder::new_data(&[1, 2, 3])
            .set_sequence_number(1)
            .set_dst_pan_id(0xabcd)
            .set_dst_address(Address::Short(0x1234))
            .set_src_address(Address::Short(0x5678))
            .set_ack_request(true)
            .finalize()
            .unwrap();

        assert_eq!(data.frame_control.encode(), 0x8861);
        assert_eq!(data.buffer_len(), 13);
    }

    #[test]
    fn extended_address_is_rejected() {
        assert_eq!(
            PacketBuilder::new_data(&[])
                .set_dst_address(Address::Extended(0x0012_4b00_14b5_d9c7))
                .finalize(),
            Err(Error::UnrepresentableAddressing(
                Unrepresentable::ExtendedAddress
            ))
        );
    }

    #[test]
    fn payload_must_fit_the_mtu() {
        let payload = [0u8; PacketRepr::<'static>::MAX_PAYLOAD_LEN + 1];
        assert_eq!(
            PacketBuilder::new_data(&payload).finalize(),
            Err(Error::LengthExceedsMtu)
        );

        let payload = [0u8; PacketRepr::<'static>::MAX_PAYLOAD_LEN];
        let repr = PacketBuilder::new_data(&payload).finalize().unwrap();
        assert_eq!(repr.buffer_len(), 1 + IEEE154_LINK_MTU);
    }
}
