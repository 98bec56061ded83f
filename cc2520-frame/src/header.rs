//! Readers and writers for the radio length prefix and the simplified
//! IEEE 802.15.4 header.

use super::{Error, FrameControl, Result, IEEE154_LINK_MTU};

/// A reader/writer for the CC2520 radio header.
/// ```notrust
/// +--------+
/// | length |
/// +--------+
/// ```
///
/// The length counts the bytes that follow it on air.
pub struct RadioHeader<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> RadioHeader<T> {
    /// Size of the radio header in octets.
    pub const SIZE: usize = 1;

    /// Create a new [`RadioHeader`] reader/writer from a given buffer.
    pub fn new(buffer: T) -> Result<Self> {
        let header = Self::new_unchecked(buffer);

        if !header.check_len() {
            return Err(Error::TruncatedBuffer);
        }

        Ok(header)
    }

    /// Returns `false` if the buffer is too short to contain the radio header.
    pub fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= Self::SIZE
    }

    /// Create a new [`RadioHeader`] reader/writer without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the length field.
    pub fn length(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Check the length field against [`IEEE154_LINK_MTU`].
    pub fn check_mtu(&self) -> Result<()> {
        if self.length() as usize > IEEE154_LINK_MTU {
            return Err(Error::LengthExceedsMtu);
        }

        Ok(())
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> RadioHeader<T> {
    /// Set the length field.
    pub fn set_length(&mut self, length: u8) {
        self.buffer.as_mut()[0] = length;
    }
}

/// A reader/writer for the simplified IEEE 802.15.4 header.
/// ```notrust
/// +-----+-----+---------+------+-----+
/// | fcf | dsn | destpan | dest | src |
/// +-----+-----+---------+------+-----+
///    2     1       2        2     2
/// ```
///
/// The header always reserves room for the destination PAN, the destination
/// address and the source address, whatever the addressing modes say. Use
/// [`FrameAddress::decode`] to learn which of them are meaningful.
///
/// [`FrameAddress::decode`]: crate::FrameAddress::decode
pub struct SimpleHeader<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> SimpleHeader<T> {
    /// Size of the simplified header in octets.
    pub const SIZE: usize = 9;

    const FCF: core::ops::Range<usize> = 0..2;
    const DSN: usize = 2;
    const DST_PAN_ID: core::ops::Range<usize> = 3..5;
    const DST_ADDRESS: core::ops::Range<usize> = 5..7;
    const SRC_ADDRESS: core::ops::Range<usize> = 7..9;

    /// Create a new [`SimpleHeader`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedBuffer`] if the buffer is shorter than
    /// [`SimpleHeader::SIZE`].
    pub fn new(buffer: T) -> Result<Self> {
        let header = Self::new_unchecked(buffer);

        if !header.check_len() {
            return Err(Error::TruncatedBuffer);
        }

        Ok(header)
    }

    /// Returns `false` if the buffer is too short to contain the header.
    pub fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= Self::SIZE
    }

    /// Create a new [`SimpleHeader`] reader/writer without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    fn read_u16(&self, range: core::ops::Range<usize>) -> u16 {
        let b = &self.buffer.as_ref()[range];
        u16::from_le_bytes([b[0], b[1]])
    }

    /// Returns a [`FrameControl`] reader.
    pub fn frame_control(&self) -> FrameControl<&'_ [u8]> {
        FrameControl::new_unchecked(&self.buffer.as_ref()[Self::FCF])
    }

    /// Returns the data sequence number.
    pub fn sequence_number(&self) -> u8 {
        self.buffer.as_ref()[Self::DSN]
    }

    /// Returns the raw destination PAN identifier field.
    pub fn dst_pan_id(&self) -> u16 {
        self.read_u16(Self::DST_PAN_ID)
    }

    /// Returns the raw destination address field.
    pub fn dst_address(&self) -> u16 {
        self.read_u16(Self::DST_ADDRESS)
    }

    /// Returns the raw source address field.
    pub fn src_address(&self) -> u16 {
        self.read_u16(Self::SRC_ADDRESS)
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> SimpleHeader<T> {
    fn write_u16(&mut self, range: core::ops::Range<usize>, value: u16) {
        self.buffer.as_mut()[range].copy_from_slice(&value.to_le_bytes());
    }

    /// Returns a [`FrameControl`] writer.
    pub fn frame_control_mut(&mut self) -> FrameControl<&'_ mut [u8]> {
        FrameControl::new_unchecked(&mut self.buffer.as_mut()[Self::FCF])
    }

    /// Set the data sequence number.
    pub fn set_sequence_number(&mut self, sequence_number: u8) {
        self.buffer.as_mut()[Self::DSN] = sequence_number;
    }

    /// Set the destination PAN identifier field.
    pub fn set_dst_pan_id(&mut self, pan_id: u16) {
        self.write_u16(Self::DST_PAN_ID, pan_id);
    }

    /// Set the destination address field.
    pub fn set_dst_address(&mut self, address: u16) {
        self.write_u16(Self::DST_ADDRESS, address);
    }

    /// Set the source address field.
    pub fn set_src_address(&mut self, address: u16) {
        self.write_u16(Self::SRC_ADDRESS, address);
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for SimpleHeader<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.frame_control())?;
        writeln!(f, "sequence number: {}", self.sequence_number())?;
        writeln!(f, "dst pan id: {:04x}", self.dst_pan_id())?;
        writeln!(f, "dst address: {:04x}", self.dst_address())?;
        writeln!(f, "src address: {:04x}", self.src_address())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radio_header_mtu() {
        assert!(RadioHeader::new(&[127u8][..]).unwrap().check_mtu().is_ok());
        assert_eq!(
            RadioHeader::new(&[128u8][..]).unwrap().check_mtu(),
            Err(Error::LengthExceedsMtu)
        );
        assert_eq!(
            RadioHeader::new(&[0u8; 0][..]).err(),
            Some(Error::TruncatedBuffer)
        );
    }

    #[test]
    fn simple_header_fields_are_little_endian() {
        let buffer = [0x61, 0x88, 0x2a, 0xcd, 0xab, 0x34, 0x12, 0x78, 0x56];
        let header = SimpleHeader::new(&buffer[..]).unwrap();

        assert_eq!(header.frame_control().raw(), 0x8861);
        assert_eq!(header.sequence_number(), 0x2a);
        assert_eq!(header.dst_pan_id(), 0xabcd);
        assert_eq!(header.dst_address(), 0x1234);
        assert_eq!(header.src_address(), 0x5678);
    }

    #[test]
    fn simple_header_write() {
        let mut buffer = [0u8; SimpleHeader::<&[u8]>::SIZE];
        let mut header = SimpleHeader::new(&mut buffer[..]).unwrap();
        header.frame_control_mut().set_raw(0x8861);
        header.set_sequence_number(0x2a);
        header.set_dst_pan_id(0xabcd);
        header.set_dst_address(0x1234);
        header.set_src_address(0x5678);

        assert_eq!(buffer, [0x61, 0x88, 0x2a, 0xcd, 0xab, 0x34, 0x12, 0x78, 0x56]);
    }

    #[test]
    fn simple_header_too_short() {
        let buffer = [0u8; 8];
        assert_eq!(
            SimpleHeader::new(&buffer[..]).err(),
            Some(Error::TruncatedBuffer)
        );
    }
}
