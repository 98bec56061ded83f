use crate::{AddressingMode, FrameControl, FrameType};

/// A high-level representation of the IEEE 802.15.4 Frame Control field.
///
/// Every 16-bit value decodes into a [`FrameControlRepr`], and encoding it
/// again yields the same 16 bits: unassigned frame types, the reserved
/// addressing mode and the reserved bits are all carried through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameControlRepr {
    /// Frame type.
    pub frame_type: FrameType,
    /// Security enabled.
    pub security_enabled: bool,
    /// Frame pending.
    pub frame_pending: bool,
    /// Acknowledgement request.
    pub ack_request: bool,
    /// Intra-PAN.
    pub intra_pan: bool,
    /// Destination addressing mode.
    pub dst_addressing_mode: AddressingMode,
    /// Source addressing mode.
    pub src_addressing_mode: AddressingMode,
    /// Reserved bits, kept at their position in the field.
    pub reserved: u16,
}

impl FrameControlRepr {
    /// Parse an IEEE 802.15.4 Frame Control field.
    pub fn parse(fc: FrameControl<&[u8]>) -> Self {
        Self {
            frame_type: fc.frame_type(),
            security_enabled: fc.security_enabled(),
            frame_pending: fc.frame_pending(),
            ack_request: fc.ack_request(),
            intra_pan: fc.intra_pan(),
            dst_addressing_mode: fc.dst_addressing_mode(),
            src_addressing_mode: fc.src_addressing_mode(),
            reserved: fc.reserved(),
        }
    }

    /// Decode a raw Frame Control field.
    pub fn decode(raw: u16) -> Self {
        Self::parse(FrameControl::new_unchecked(&raw.to_le_bytes()[..]))
    }

    /// Encode into a raw Frame Control field.
    ///
    /// Field values are written by bit pattern, without validation.
    pub fn encode(&self) -> u16 {
        let mut raw = [0u8; 2];
        self.emit(&mut FrameControl::new_unchecked(&mut raw[..]));
        u16::from_le_bytes(raw)
    }

    /// Return the length of the frame control field when emitted into a buffer.
    pub const fn buffer_len(&self) -> usize {
        2
    }

    /// Emit the frame control field into a buffer.
    pub fn emit(&self, fc: &mut FrameControl<&mut [u8]>) {
        fc.set_frame_type(self.frame_type);
        fc.set_security_enabled(self.security_enabled);
        fc.set_frame_pending(self.frame_pending);
        fc.set_ack_request(self.ack_request);
        fc.set_intra_pan(self.intra_pan);
        fc.set_dst_addressing_mode(self.dst_addressing_mode);
        fc.set_src_addressing_mode(self.src_addressing_mode);
        fc.set_reserved(self.reserved);
    }
}

impl From<u16> for FrameControlRepr {
    fn from(raw: u16) -> Self {
        Self::decode(raw)
    }
}

impl From<FrameControlRepr> for u16 {
    fn from(repr: FrameControlRepr) -> Self {
        repr.encode()
    }
}

/// Decode a raw Frame Control field. See [`FrameControlRepr::decode`].
pub fn decode_frame_control(raw: u16) -> FrameControlRepr {
    FrameControlRepr::decode(raw)
}

/// Encode a Frame Control field. See [`FrameControlRepr::encode`].
pub fn encode_frame_control(fields: &FrameControlRepr) -> u16 {
    fields.encode()
}
