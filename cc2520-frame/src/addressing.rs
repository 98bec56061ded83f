//! Addressing fields and their decoding.

use super::{Error, Result, SimpleHeader, Unrepresentable, IEEE154_BROADCAST_ADDR};

/// An IEEE 802.15.4 address.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// No address.
    Absent,
    /// A 16-bit short address.
    Short(u16),
    /// A 64-bit extended address.
    Extended(u64),
}

impl Address {
    /// The broadcast address.
    pub const BROADCAST: Address = Address::Short(IEEE154_BROADCAST_ADDR);

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !self.is_absent() && !self.is_broadcast()
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the address is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Address::Absent)
    }

    /// Return the length of the address in octets.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Address::Absent => 0,
            Address::Short(_) => 2,
            Address::Extended(_) => 8,
        }
    }
}

impl From<Address> for AddressingMode {
    fn from(value: Address) -> Self {
        match value {
            Address::Absent => AddressingMode::Absent,
            Address::Short(_) => AddressingMode::Short,
            Address::Extended(_) => AddressingMode::Extended,
        }
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Address::Absent => write!(f, "absent"),
            Address::Short(value) => {
                let b = value.to_be_bytes();
                write!(f, "{:02x}:{:02x}", b[0], b[1])
            }
            Address::Extended(value) => {
                let b = value.to_be_bytes();
                write!(
                    f,
                    "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
                    b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]
                )
            }
        }
    }
}

/// IEEE 802.15.4 addressing mode.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    /// No address field.
    Absent = 0b00,
    /// Unassigned value. Decoded and carried as is, never an error.
    Reserved = 0b01,
    /// 16-bit short address.
    Short = 0b10,
    /// 64-bit extended address.
    Extended = 0b11,
}

impl AddressingMode {
    /// Return the size of the address in octets.
    pub fn size(&self) -> usize {
        match self {
            Self::Absent | Self::Reserved => 0,
            Self::Short => 2,
            Self::Extended => 8,
        }
    }
}

impl From<u8> for AddressingMode {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Absent,
            0b01 => Self::Reserved,
            0b10 => Self::Short,
            _ => Self::Extended,
        }
    }
}

/// The decoded addressing of a packet.
///
/// The simplified header always reserves a destination PAN, a destination
/// address and a source address. Which of these carry meaning depends on the
/// addressing modes of the Frame Control field.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameAddress {
    /// Destination PAN identifier, shared by the source when present.
    pub dst_pan_id: Option<u16>,
    /// Destination address.
    pub dst_address: Address,
    /// Source address.
    pub src_address: Address,
}

impl FrameAddress {
    /// Decode the addressing fields of a simplified header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableAddressing`] when an addressing mode
    /// is extended, or when intra-PAN is clear while a source address is
    /// present. Neither can be carried by the simplified header.
    pub fn decode<T: AsRef<[u8]>>(header: &SimpleHeader<T>) -> Result<Self> {
        let fc = header.frame_control();

        let dst_address = address_from_mode(fc.dst_addressing_mode(), header.dst_address())?;
        let src_address = address_from_mode(fc.src_addressing_mode(), header.src_address())?;

        if !src_address.is_absent() && !fc.intra_pan() {
            return Err(Error::UnrepresentableAddressing(
                Unrepresentable::SourcePanId,
            ));
        }

        let dst_pan_id = if !dst_address.is_absent() || fc.intra_pan() {
            Some(header.dst_pan_id())
        } else {
            None
        };

        Ok(Self {
            dst_pan_id,
            dst_address,
            src_address,
        })
    }

    /// Return the source PAN identifier if a source address is present.
    ///
    /// Only intra-PAN addressing decodes successfully, so this is always the
    /// destination PAN identifier.
    pub fn src_pan_id(&self) -> Option<u16> {
        if self.src_address.is_absent() {
            None
        } else {
            self.dst_pan_id
        }
    }
}

fn address_from_mode(mode: AddressingMode, raw: u16) -> Result<Address> {
    match mode {
        AddressingMode::Absent | AddressingMode::Reserved => Ok(Address::Absent),
        AddressingMode::Short => Ok(Address::Short(raw)),
        AddressingMode::Extended => Err(Error::UnrepresentableAddressing(
            Unrepresentable::ExtendedAddress,
        )),
    }
}

/// Decode the addressing of the packet stored in `buffer`.
///
/// # Errors
///
/// Returns [`Error::TruncatedBuffer`] when `buffer` cannot hold the packet
/// header, and the errors of [`FrameAddress::decode`] otherwise.
pub fn decode_addressing(buffer: &[u8]) -> Result<FrameAddress> {
    crate::Packet::new(buffer)?.addressing()
}
