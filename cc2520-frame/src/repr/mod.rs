//! High-level representation of CC2520 packets.

use crate::{
    Address, AddressingMode, Error, Packet, Result, SimpleHeader, Unrepresentable,
    IEEE154_BROADCAST_PAN, IEEE154_LINK_MTU, RADIO_BUFFER_LEN,
};

mod frame_control;
pub use frame_control::{decode_frame_control, encode_frame_control, FrameControlRepr};

mod builder;
pub use builder::{Ack, Data, PacketBuilder};

/// A high-level representation of a CC2520 packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct PacketRepr<'p> {
    /// The frame control field.
    pub frame_control: FrameControlRepr,
    /// The data sequence number.
    pub sequence_number: u8,
    /// The destination PAN identifier.
    pub dst_pan_id: u16,
    /// The destination address.
    pub dst_address: Address,
    /// The source address.
    pub src_address: Address,
    /// The payload.
    pub payload: &'p [u8],
}

impl<'p> PacketRepr<'p> {
    /// Largest payload that fits in a packet.
    pub const MAX_PAYLOAD_LEN: usize = IEEE154_LINK_MTU - SimpleHeader::<&'static [u8]>::SIZE;

    /// Parse a CC2520 packet.
    ///
    /// # Errors
    ///
    /// Fails when the addressing cannot be decoded, see
    /// [`FrameAddress::decode`](crate::FrameAddress::decode).
    pub fn parse<T: AsRef<[u8]>>(reader: &'p Packet<T>) -> Result<Self> {
        let header = reader.header();
        let addressing = reader.addressing()?;

        Ok(Self {
            frame_control: FrameControlRepr::parse(reader.frame_control()),
            sequence_number: header.sequence_number(),
            dst_pan_id: header.dst_pan_id(),
            dst_address: addressing.dst_address,
            src_address: addressing.src_address,
            payload: reader.payload(),
        })
    }

    /// Validate the packet: the addressing must fit the simplified header and
    /// agree with the addressing modes, and the payload must fit the MTU.
    ///
    /// # Errors
    ///
    /// The checks follow the order of [`FrameAddress::decode`]: an extended
    /// destination, an extended source, an address that disagrees with its
    /// mode ([`Unrepresentable::ModeMismatch`]), then a source address
    /// without intra-PAN. A payload longer than [`MAX_PAYLOAD_LEN`] is
    /// [`Error::LengthExceedsMtu`].
    ///
    /// [`FrameAddress::decode`]: crate::FrameAddress::decode
    /// [`MAX_PAYLOAD_LEN`]: PacketRepr::MAX_PAYLOAD_LEN
    pub fn validate(&self) -> Result<()> {
        let fc = &self.frame_control;
        let fields = [
            (fc.dst_addressing_mode, self.dst_address),
            (fc.src_addressing_mode, self.src_address),
        ];

        for (mode, address) in fields {
            if mode == AddressingMode::Extended || matches!(address, Address::Extended(_)) {
                return Err(Error::UnrepresentableAddressing(
                    Unrepresentable::ExtendedAddress,
                ));
            }
        }

        for (mode, address) in fields {
            let consistent = match mode {
                AddressingMode::Short => matches!(address, Address::Short(_)),
                _ => address.is_absent(),
            };
            if !consistent {
                return Err(Error::UnrepresentableAddressing(
                    Unrepresentable::ModeMismatch,
                ));
            }
        }

        if fc.src_addressing_mode == AddressingMode::Short && !fc.intra_pan {
            return Err(Error::UnrepresentableAddressing(
                Unrepresentable::SourcePanId,
            ));
        }

        if self.payload.len() > Self::MAX_PAYLOAD_LEN {
            return Err(Error::LengthExceedsMtu);
        }

        Ok(())
    }

    /// Return the length of the packet when emitted into a buffer, length
    /// prefix included.
    pub fn buffer_len(&self) -> usize {
        Packet::<&[u8]>::HEADER_LEN + self.payload.len()
    }

    /// Emit the packet into a buffer of at least [`buffer_len`] bytes.
    ///
    /// The header always has a `dest` and a `src` slot. A slot whose address
    /// is absent, including one under the reserved addressing mode, is
    /// written as zero: whatever a parsed packet held there is not carried
    /// through. Call [`validate`] first: an extended address is written as
    /// zero as well.
    ///
    /// [`buffer_len`]: PacketRepr::buffer_len
    /// [`validate`]: PacketRepr::validate
    pub fn emit(&self, packet: &mut Packet<&'_ mut [u8]>) {
        self.frame_control.emit(&mut packet.frame_control_mut());

        let mut header = packet.header_mut();
        header.set_sequence_number(self.sequence_number);
        header.set_dst_pan_id(self.dst_pan_id);
        header.set_dst_address(short_or_zero(self.dst_address));
        header.set_src_address(short_or_zero(self.src_address));

        packet.set_payload(self.payload);
    }

    /// Validate and emit the packet into a buffer sized for the radio.
    pub fn to_buffer(&self) -> Result<heapless::Vec<u8, RADIO_BUFFER_LEN>> {
        self.validate()?;

        let mut buffer: heapless::Vec<u8, RADIO_BUFFER_LEN> = heapless::Vec::new();
        buffer
            .resize(self.buffer_len(), 0)
            .map_err(|_| Error::LengthExceedsMtu)?;
        self.emit(&mut Packet::new_unchecked(&mut buffer[..]));

        Ok(buffer)
    }
}

impl Default for PacketRepr<'_> {
    fn default() -> Self {
        Self {
            frame_control: FrameControlRepr::decode(0),
            sequence_number: 0,
            dst_pan_id: IEEE154_BROADCAST_PAN,
            dst_address: Address::Absent,
            src_address: Address::Absent,
            payload: &[],
        }
    }
}

fn short_or_zero(address: Address) -> u16 {
    match address {
        Address::Short(value) => value,
        Address::Absent | Address::Extended(_) => 0,
    }
}
