//! Zero-copy read and write structures for CC2520 radio packets carrying
//! IEEE 802.15.4 frames.
//!
//! Every packet handed to or received from the radio starts with a fixed
//! 10-byte header: the one-byte radio length prefix followed by a simplified
//! IEEE 802.15.4 MAC header.
//!
//! ```notrust
//! +--------+-----+-----+---------+------+-----+---------+
//! | length | fcf | dsn | destpan | dest | src | payload |
//! +--------+-----+-----+---------+------+-----+---------+
//!     1       2     1       2       2      2    length - 9
//! ```
//!
//! Each reader contains the following functions:
//! - [`new`]: Create a new reader, checking the buffer length.
//! - [`check_len`]: Check if the buffer is long enough.
//! - [`new_unchecked`]: Create a new reader without checking the buffer
//!   length.
//!
//! The most important reader is the [`Packet`] reader. It provides:
//! - [`radio_header`]: returns a [`RadioHeader`] reader.
//! - [`header`]: returns a [`SimpleHeader`] reader.
//! - [`frame_control`]: returns a [`FrameControl`] reader.
//! - [`addressing`]: decodes the addressing fields into a [`FrameAddress`].
//! - [`requires_ack`]: whether the packet must be acknowledged.
//! - [`payload`]: returns the payload of the packet.
//!
//! ## Reading a packet
//! ```
//! # use cc2520_frame::{Address, FrameType, Packet};
//! let data = [
//!     0x0d, 0x61, 0x88, 0x01, 0xcd, 0xab, 0x34, 0x12, 0x78, 0x56, 0x2b, 0x00, 0x00, 0x00,
//! ];
//! let packet = Packet::new(&data[..]).unwrap();
//! let fc = packet.frame_control();
//!
//! assert_eq!(fc.frame_type(), FrameType::Data);
//! assert!(packet.requires_ack());
//!
//! let addressing = packet.addressing().unwrap();
//! assert_eq!(addressing.dst_address, Address::Short(0x1234));
//! assert_eq!(addressing.src_address, Address::Short(0x5678));
//! assert_eq!(packet.payload(), &[0x2b, 0x00, 0x00, 0x00]);
//! ```
//!
//! ## Writing a packet
//! ```
//! # use cc2520_frame::{Address, Packet, PacketBuilder};
//! let repr = PacketBuilder::new_data(&[0x2b, 0x00, 0x00, 0x00])
//!     .set_sequence_number(1)
//!     .set_dst_pan_id(0xabcd)
//!     .set_dst_address(Address::Short(0x1234))
//!     .set_src_address(Address::Short(0x5678))
//!     .set_ack_request(true)
//!     .finalize()
//!     .unwrap();
//!
//! let mut buffer = [0u8; 14];
//! repr.emit(&mut Packet::new_unchecked(&mut buffer[..]));
//! assert_eq!(buffer[0], 13);
//! ```
//!
//! [`new`]: Packet::new
//! [`check_len`]: Packet::check_len
//! [`new_unchecked`]: Packet::new_unchecked
//! [`radio_header`]: Packet::radio_header
//! [`header`]: Packet::header
//! [`frame_control`]: Packet::frame_control
//! [`addressing`]: Packet::addressing
//! [`requires_ack`]: Packet::requires_ack
//! [`payload`]: Packet::payload
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(test)]
mod tests;

mod frame_control;
pub use frame_control::*;

mod addressing;
pub use addressing::*;

mod header;
pub use header::*;

mod packet;
pub use packet::*;

mod repr;
pub use repr::*;

/// Maximum size of an IEEE 802.15.4 frame on air, which is also the largest
/// value the radio length byte may hold.
pub const IEEE154_LINK_MTU: usize = 127;

/// The broadcast short address.
pub const IEEE154_BROADCAST_ADDR: u16 = 0xffff;

/// The broadcast PAN identifier.
pub const IEEE154_BROADCAST_PAN: u16 = 0xffff;

/// Size of a radio buffer: the length prefix plus the largest frame.
pub const RADIO_BUFFER_LEN: usize = 1 + IEEE154_LINK_MTU;

/// Why an addressing mode cannot be expressed by the simplified header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unrepresentable {
    /// An extended (64-bit) address does not fit the 16-bit address field.
    ExtendedAddress,
    /// Intra-PAN is clear, so a source PAN identifier should follow the
    /// destination address, but the header has no field for it.
    SourcePanId,
    /// The address does not match the addressing mode of the Frame Control
    /// field, so the emitted header would not decode to it.
    ModeMismatch,
}

/// An error that can occur when reading or writing a CC2520 packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The buffer is shorter than the header, or than the length it
    /// declares.
    TruncatedBuffer,
    /// The addressing cannot be carried by the simplified header.
    UnrepresentableAddressing(Unrepresentable),
    /// The radio length byte exceeds [`IEEE154_LINK_MTU`].
    LengthExceedsMtu,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::TruncatedBuffer => write!(f, "truncated buffer"),
            Error::UnrepresentableAddressing(Unrepresentable::ExtendedAddress) => {
                write!(f, "unrepresentable addressing: extended address")
            }
            Error::UnrepresentableAddressing(Unrepresentable::SourcePanId) => {
                write!(f, "unrepresentable addressing: source PAN id")
            }
            Error::UnrepresentableAddressing(Unrepresentable::ModeMismatch) => {
                write!(f, "unrepresentable addressing: address does not match its mode")
            }
            Error::LengthExceedsMtu => write!(f, "length exceeds MTU of {IEEE154_LINK_MTU}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A type alias for `Result<T, cc2520_frame::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
