//! IEEE 802.15.4 Frame Control field readers and writers.
//!
//! ```notrust
//! +------+-----+-----+-----+-----+------+-------+--------+--------+
//! | 0..2 |  3  |  4  |  5  |  6  | 7..9 | 10..11| 12..13 | 14..15 |
//! | type | sec | pnd | ack | pan | rsvd |  dst  |  rsvd  |  src   |
//! +------+-----+-----+-----+-----+------+-------+--------+--------+
//! ```

use super::AddressingMode;
use super::{Error, Result};

/// Bit offset of the frame type field.
pub const FCF_FRAME_TYPE: u16 = 0;
/// Mask of the frame type field, after shifting.
pub const FCF_FRAME_TYPE_MASK: u16 = 0b111;
/// Bit offset of the security enabled flag.
pub const FCF_SECURITY_ENABLED: u16 = 3;
/// Bit offset of the frame pending flag.
pub const FCF_FRAME_PENDING: u16 = 4;
/// Bit offset of the acknowledgement request flag.
pub const FCF_ACK_REQ: u16 = 5;
/// Bit offset of the intra-PAN flag.
pub const FCF_INTRA_PAN: u16 = 6;
/// Bit offset of the destination addressing mode field.
pub const FCF_DST_ADDR_MODE: u16 = 10;
/// Bit offset of the source addressing mode field.
pub const FCF_SRC_ADDR_MODE: u16 = 14;
/// Mask of an addressing mode field, after shifting.
pub const FCF_ADDR_MODE_MASK: u16 = 0b11;
/// Bits 7..=9 and 12..=13, which are carried but not interpreted.
pub const FCF_RESERVED_MASK: u16 = 0b0011_0011_1000_0000;

/// Extract the raw frame type bits from a Frame Control field.
#[inline]
pub const fn frame_type_bits(fcf: u16) -> u8 {
    ((fcf >> FCF_FRAME_TYPE) & FCF_FRAME_TYPE_MASK) as u8
}

/// Extract the raw addressing mode bits located at `offset`.
#[inline]
pub const fn addressing_mode_bits(fcf: u16, offset: u16) -> u8 {
    ((fcf >> offset) & FCF_ADDR_MODE_MASK) as u8
}

/// Replace the field of `mask` located at `offset` with `value`, leaving every
/// other bit untouched.
#[inline]
pub const fn with_field(fcf: u16, offset: u16, mask: u16, value: u16) -> u16 {
    (fcf & !(mask << offset)) | ((value & mask) << offset)
}

bitflags::bitflags! {
    /// The single-bit flags of the Frame Control field.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct FrameControlFlags: u16 {
        /// The frame is protected by link-layer security.
        const SECURITY_ENABLED = 1 << FCF_SECURITY_ENABLED;
        /// The sender has more data buffered for the recipient.
        const FRAME_PENDING = 1 << FCF_FRAME_PENDING;
        /// The sender requests an acknowledgement.
        const ACK_REQUEST = 1 << FCF_ACK_REQ;
        /// Source and destination share the destination PAN identifier.
        const INTRA_PAN = 1 << FCF_INTRA_PAN;
    }
}

/// IEEE 802.15.4 frame type.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameType {
    /// Beacon frame.
    Beacon,
    /// Data frame.
    Data,
    /// Acknowledgement frame.
    Ack,
    /// MAC command frame.
    MacCommand,
    /// One of the unassigned values 0b100..=0b111, kept as is.
    Reserved(u8),
}

impl FrameType {
    /// Return the 3-bit value of the frame type.
    pub const fn bits(&self) -> u8 {
        match self {
            Self::Beacon => 0b000,
            Self::Data => 0b001,
            Self::Ack => 0b010,
            Self::MacCommand => 0b011,
            Self::Reserved(value) => *value & FCF_FRAME_TYPE_MASK as u8,
        }
    }
}

impl From<u8> for FrameType {
    fn from(value: u8) -> Self {
        match value & FCF_FRAME_TYPE_MASK as u8 {
            0b000 => Self::Beacon,
            0b001 => Self::Data,
            0b010 => Self::Ack,
            0b011 => Self::MacCommand,
            value => Self::Reserved(value),
        }
    }
}

/// A reader/writer for the IEEE 802.15.4 Frame Control field.
pub struct FrameControl<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> FrameControl<T> {
    /// Create a new [`FrameControl`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let fc = Self::new_unchecked(buffer);

        if !fc.check_len() {
            return Err(Error::TruncatedBuffer);
        }

        Ok(fc)
    }

    /// Returns `false` if the buffer is too short to contain the Frame Control field.
    pub fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= 2
    }

    /// Create a new [`FrameControl`] reader/writer from a given buffer without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the raw 16-bit Frame Control field.
    pub fn raw(&self) -> u16 {
        let b = &self.buffer.as_ref()[..2];
        u16::from_le_bytes([b[0], b[1]])
    }

    /// Return the single-bit flags.
    pub fn flags(&self) -> FrameControlFlags {
        FrameControlFlags::from_bits_truncate(self.raw())
    }

    /// Return the [`FrameType`] field.
    pub fn frame_type(&self) -> FrameType {
        FrameType::from(frame_type_bits(self.raw()))
    }

    /// Returns `true` when the security enabled field is set.
    pub fn security_enabled(&self) -> bool {
        self.flags().contains(FrameControlFlags::SECURITY_ENABLED)
    }

    /// Returns `true` when the frame pending field is set.
    pub fn frame_pending(&self) -> bool {
        self.flags().contains(FrameControlFlags::FRAME_PENDING)
    }

    /// Returns `true` when the acknowledgement request field is set.
    pub fn ack_request(&self) -> bool {
        self.flags().contains(FrameControlFlags::ACK_REQUEST)
    }

    /// Returns `true` when the intra-PAN field is set.
    pub fn intra_pan(&self) -> bool {
        self.flags().contains(FrameControlFlags::INTRA_PAN)
    }

    /// Return the Destination [`AddressingMode`].
    pub fn dst_addressing_mode(&self) -> AddressingMode {
        AddressingMode::from(addressing_mode_bits(self.raw(), FCF_DST_ADDR_MODE))
    }

    /// Return the Source [`AddressingMode`].
    pub fn src_addressing_mode(&self) -> AddressingMode {
        AddressingMode::from(addressing_mode_bits(self.raw(), FCF_SRC_ADDR_MODE))
    }

    /// Return the reserved bits, in place.
    pub fn reserved(&self) -> u16 {
        self.raw() & FCF_RESERVED_MASK
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> FrameControl<T> {
    /// Overwrite the whole Frame Control field.
    pub fn set_raw(&mut self, raw: u16) {
        self.buffer.as_mut()[..2].copy_from_slice(&raw.to_le_bytes());
    }

    fn set_flag(&mut self, flag: FrameControlFlags, value: bool) {
        let raw = self.raw();
        let raw = if value {
            raw | flag.bits()
        } else {
            raw & !flag.bits()
        };
        self.set_raw(raw);
    }

    /// Set the frame type field.
    pub fn set_frame_type(&mut self, frame_type: FrameType) {
        let raw = with_field(
            self.raw(),
            FCF_FRAME_TYPE,
            FCF_FRAME_TYPE_MASK,
            frame_type.bits() as u16,
        );
        self.set_raw(raw);
    }

    /// Set the security enabled field.
    pub fn set_security_enabled(&mut self, security_enabled: bool) {
        self.set_flag(FrameControlFlags::SECURITY_ENABLED, security_enabled);
    }

    /// Set the frame pending field.
    pub fn set_frame_pending(&mut self, frame_pending: bool) {
        self.set_flag(FrameControlFlags::FRAME_PENDING, frame_pending);
    }

    /// Set the acknowledgement request field.
    pub fn set_ack_request(&mut self, ack_request: bool) {
        self.set_flag(FrameControlFlags::ACK_REQUEST, ack_request);
    }

    /// Set the intra-PAN field.
    pub fn set_intra_pan(&mut self, intra_pan: bool) {
        self.set_flag(FrameControlFlags::INTRA_PAN, intra_pan);
    }

    /// Set the destination addressing mode field.
    pub fn set_dst_addressing_mode(&mut self, addressing_mode: AddressingMode) {
        let raw = with_field(
            self.raw(),
            FCF_DST_ADDR_MODE,
            FCF_ADDR_MODE_MASK,
            addressing_mode as u16,
        );
        self.set_raw(raw);
    }

    /// Set the source addressing mode field.
    pub fn set_src_addressing_mode(&mut self, addressing_mode: AddressingMode) {
        let raw = with_field(
            self.raw(),
            FCF_SRC_ADDR_MODE,
            FCF_ADDR_MODE_MASK,
            addressing_mode as u16,
        );
        self.set_raw(raw);
    }

    /// Set the reserved bits. Bits outside [`FCF_RESERVED_MASK`] are ignored.
    pub fn set_reserved(&mut self, reserved: u16) {
        let raw = (self.raw() & !FCF_RESERVED_MASK) | (reserved & FCF_RESERVED_MASK);
        self.set_raw(raw);
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for FrameControl<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Frame Control")?;
        writeln!(f, "  type: {:?}", self.frame_type())?;
        writeln!(
            f,
            "  security enabled: {}",
            self.security_enabled() as usize
        )?;
        writeln!(f, "  frame pending: {}", self.frame_pending() as usize)?;
        writeln!(f, "  ack request: {}", self.ack_request() as usize)?;
        writeln!(f, "  intra pan: {}", self.intra_pan() as usize)?;
        writeln!(f, "  dst addressing mode: {:?}", self.dst_addressing_mode())?;
        writeln!(f, "  src addressing mode: {:?}", self.src_addressing_mode())?;
        Ok(())
    }
}
