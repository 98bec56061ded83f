//! `cat` for CC2520 packets: render a packet as indented, colored text.

use cc2520_frame::*;
use colored::*;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent -= 2;
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.writeln(title.underline().bold().to_string());
    }

    fn field(&mut self, name: &str, value: impl core::fmt::Display) {
        self.writeln(format!("{}: {}", name.bold(), value));
    }
}

/// Errors that stop a packet from being rendered at all.
#[derive(Debug)]
pub enum ParseError {
    /// The input is not a valid hex string.
    Hex(hex::FromHexError),
    /// The packet could not be read.
    Packet(Error),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Hex(err) => write!(f, "invalid hex input: {err}"),
            ParseError::Packet(err) => write!(f, "invalid packet: {err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Hex(err) => Some(err),
            ParseError::Packet(err) => Some(err),
        }
    }
}

impl From<hex::FromHexError> for ParseError {
    fn from(err: hex::FromHexError) -> Self {
        ParseError::Hex(err)
    }
}

impl From<Error> for ParseError {
    fn from(err: Error) -> Self {
        ParseError::Packet(err)
    }
}

/// Renders CC2520 packets.
pub struct PacketParser {}

impl PacketParser {
    /// Decode `input` as hex and render the packet it holds.
    pub fn parse_hex(input: &str) -> core::result::Result<String, ParseError> {
        let data = hex::decode(input.trim())?;
        log::debug!("decoded {} bytes of input", data.len());
        Self::parse(&data)
    }

    /// Render the packet in `input`, length prefix included.
    ///
    /// Only a buffer too short for the header is an error. Packets that fail
    /// validation or carry unrepresentable addressing are rendered with the
    /// reason in place of the affected fields.
    pub fn parse(input: &[u8]) -> core::result::Result<String, ParseError> {
        let packet = Packet::new(input)?;
        log::debug!("parsing packet:\n{packet}");

        let mut buffer = String::new();
        let mut w = Writer::new(&mut buffer);

        // -----------------------------------------------------------------
        // Radio Header
        // -----------------------------------------------------------------
        w.section("Radio Header");
        w.increase_indent();
        w.field("length", packet.radio_header().length());
        if let Err(err) = packet.validate() {
            log::warn!("packet failed validation: {err}");
            w.field("invalid", err.to_string().red());
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Frame Control
        // -----------------------------------------------------------------
        let fc = packet.frame_control();
        w.section("Frame Control");
        w.increase_indent();
        w.field("frame type", format!("{:?}", fc.frame_type()).bright_blue());
        w.field("security", fc.security_enabled() as usize);
        w.field("frame pending", fc.frame_pending() as usize);
        w.field("ack request", fc.ack_request() as usize);
        w.field("intra pan", fc.intra_pan() as usize);
        w.field("dst addressing mode", format!("{:?}", fc.dst_addressing_mode()));
        w.field("src addressing mode", format!("{:?}", fc.src_addressing_mode()));
        if fc.reserved() != 0 {
            w.field("reserved", format!("{:#06x}", fc.reserved()));
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Sequence Number
        // -----------------------------------------------------------------
        w.section("Sequence Number");
        w.increase_indent();
        w.field("sequence number", packet.sequence_number());
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Addressing
        // -----------------------------------------------------------------
        w.section("Addressing");
        w.increase_indent();
        match packet.addressing() {
            Ok(addr) => {
                if let Some(dst_pan_id) = addr.dst_pan_id {
                    w.field("dst pan id", format!("{:x}", dst_pan_id));
                }

                if !addr.dst_address.is_absent() {
                    w.field("dst addr", with_broadcast(addr.dst_address));
                }

                if !addr.src_address.is_absent() {
                    w.field("src addr", with_broadcast(addr.src_address));
                }
            }
            Err(err) => {
                log::warn!("cannot decode addressing: {err}");
                w.writeln(err.to_string().red().to_string());
            }
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Acknowledgement
        // -----------------------------------------------------------------
        w.section("Acknowledgement");
        w.increase_indent();
        w.field("required", packet.requires_ack() as usize);
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Payload
        // -----------------------------------------------------------------
        let payload = packet.payload();
        if !payload.is_empty() {
            w.section("Payload");
            w.increase_indent();
            w.writeln(format!("{:x?}", payload));
            w.decrease_indent();
        }

        debug_assert_eq!(w.indent, 0);

        Ok(buffer)
    }
}

fn with_broadcast(address: Address) -> String {
    format!(
        "{}{}",
        address,
        if address.is_broadcast() {
            " (broadcast)"
        } else {
            ""
        }
    )
}
