//! The CC2520 packet: radio header, simplified IEEE 802.15.4 header and
//! payload.

use super::{
    Error, FrameAddress, FrameControl, FrameType, PacketBuilder, PacketRepr, RadioHeader, Result,
    SimpleHeader, IEEE154_BROADCAST_ADDR,
};

/// A reader/writer for a complete CC2520 packet.
/// ```notrust
/// +--------+---------------+---------+
/// | length | simple header | payload |
/// +--------+---------------+---------+
///     1            9        length - 9
/// ```
pub struct Packet<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> Packet<T> {
    /// Size of the combined radio and simplified header in octets.
    pub const HEADER_LEN: usize =
        RadioHeader::<&'static [u8]>::SIZE + SimpleHeader::<&'static [u8]>::SIZE;

    /// Create a new [`Packet`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedBuffer`] if the buffer cannot hold the
    /// combined header. The length field is not checked, see
    /// [`Packet::validate`].
    pub fn new(buffer: T) -> Result<Self> {
        let packet = Self::new_unchecked(buffer);

        if !packet.check_len() {
            return Err(Error::TruncatedBuffer);
        }

        Ok(packet)
    }

    /// Returns `false` if the buffer is too short to contain the combined header.
    pub fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= Self::HEADER_LEN
    }

    /// Create a new [`Packet`] reader/writer without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Check the length field: it must not exceed the MTU, must cover the
    /// simplified header and must fit in the buffer.
    pub fn validate(&self) -> Result<()> {
        let radio = self.radio_header();
        radio.check_mtu()?;

        let length = radio.length() as usize;
        if length < SimpleHeader::<&[u8]>::SIZE
            || self.buffer.as_ref().len() < RadioHeader::<&[u8]>::SIZE + length
        {
            return Err(Error::TruncatedBuffer);
        }

        Ok(())
    }

    /// Return the underlying buffer.
    pub fn into_inner(self) -> T {
        self.buffer
    }

    /// Returns a [`RadioHeader`] reader.
    pub fn radio_header(&self) -> RadioHeader<&'_ [u8]> {
        RadioHeader::new_unchecked(&self.buffer.as_ref()[..RadioHeader::<&[u8]>::SIZE])
    }

    /// Returns a [`SimpleHeader`] reader.
    pub fn header(&self) -> SimpleHeader<&'_ [u8]> {
        SimpleHeader::new_unchecked(&self.buffer.as_ref()[RadioHeader::<&[u8]>::SIZE..])
    }

    /// Returns a [`FrameControl`] reader.
    pub fn frame_control(&self) -> FrameControl<&'_ [u8]> {
        FrameControl::new_unchecked(&self.buffer.as_ref()[RadioHeader::<&[u8]>::SIZE..][..2])
    }

    /// Returns the data sequence number.
    pub fn sequence_number(&self) -> u8 {
        self.header().sequence_number()
    }

    /// Decode the addressing fields into a [`FrameAddress`].
    pub fn addressing(&self) -> Result<FrameAddress> {
        FrameAddress::decode(&self.header())
    }

    /// Returns `true` when the receiver must acknowledge this packet.
    ///
    /// Acknowledgements are never themselves acknowledged, and neither are
    /// packets sent to the broadcast address. Everything else is acknowledged
    /// when the sender set the acknowledgement request bit.
    pub fn requires_ack(&self) -> bool {
        let fc = self.frame_control();

        fc.frame_type() != FrameType::Ack
            && fc.ack_request()
            && self.header().dst_address() != IEEE154_BROADCAST_ADDR
    }

    /// Return the immediate acknowledgement the receiver must send back for
    /// this packet, if any.
    pub fn imm_ack(&self) -> Result<Option<PacketRepr<'static>>> {
        if !self.requires_ack() {
            return Ok(None);
        }

        PacketBuilder::new_imm_ack(self.sequence_number())
            .finalize()
            .map(Some)
    }

    /// Returns the payload: the `length - 9` bytes following the header,
    /// limited to what the buffer holds.
    pub fn payload(&self) -> &[u8] {
        let buffer = self.buffer.as_ref();
        let end = (RadioHeader::<&[u8]>::SIZE + self.radio_header().length() as usize)
            .clamp(Self::HEADER_LEN, buffer.len());

        &buffer[Self::HEADER_LEN..end]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Packet<T> {
    /// Returns a [`RadioHeader`] writer.
    pub fn radio_header_mut(&mut self) -> RadioHeader<&'_ mut [u8]> {
        RadioHeader::new_unchecked(&mut self.buffer.as_mut()[..RadioHeader::<&[u8]>::SIZE])
    }

    /// Returns a [`SimpleHeader`] writer.
    pub fn header_mut(&mut self) -> SimpleHeader<&'_ mut [u8]> {
        SimpleHeader::new_unchecked(&mut self.buffer.as_mut()[RadioHeader::<&[u8]>::SIZE..])
    }

    /// Returns a [`FrameControl`] writer.
    pub fn frame_control_mut(&mut self) -> FrameControl<&'_ mut [u8]> {
        FrameControl::new_unchecked(
            &mut self.buffer.as_mut()[RadioHeader::<&[u8]>::SIZE..][..2],
        )
    }

    /// Copy `payload` after the header and update the length field.
    ///
    /// # Panics
    /// Panics if the payload is longer than [`PacketRepr::MAX_PAYLOAD_LEN`], or
    /// if the buffer is too small to hold the payload.
    pub fn set_payload(&mut self, payload: &[u8]) {
        assert!(
            payload.len() <= PacketRepr::MAX_PAYLOAD_LEN,
            "payload of {} bytes exceeds the MTU",
            payload.len()
        );
        self.buffer.as_mut()[Self::HEADER_LEN..][..payload.len()].copy_from_slice(payload);
        self.radio_header_mut()
            .set_length((SimpleHeader::<&[u8]>::SIZE + payload.len()) as u8);
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for Packet<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "length: {}", self.radio_header().length())?;
        write!(f, "{}", self.header())?;
        writeln!(f, "payload: {:x?}", self.payload())?;
        Ok(())
    }
}

/// Returns `true` when the packet stored in `buffer` must be acknowledged.
///
/// See [`Packet::requires_ack`].
///
/// # Errors
///
/// Returns [`Error::TruncatedBuffer`] when `buffer` cannot hold the combined
/// header, so that a truncated packet is never mistaken for one that does
/// not need an acknowledgement.
pub fn requires_ack(buffer: &[u8]) -> Result<bool> {
    Ok(Packet::new(buffer)?.requires_ack())
}
