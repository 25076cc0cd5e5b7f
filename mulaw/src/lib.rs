use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

mod error;
pub use error::Error;

/// Serialized size of the RIFF/fmt/data header, in bytes.
pub const HEADER_LEN: usize = 44;

// Fixed encoding parameters for raw u-Law captures.
const AUDIO_FORMAT_MULAW: u16 = 7;
const NUM_CHANNELS: u16 = 1;
const SAMPLE_RATE: u32 = 8000;
const BITS_PER_SAMPLE: u16 = 8;
const FMT_CHUNK_SIZE: u32 = 16;

// The RIFF chunk size field counts everything after itself: the "WAVE"
// tag plus the fmt and data chunks, so 36 bytes on top of the payload.
const CHUNK_OVERHEAD: u32 = 36;

#[derive(Debug, Copy, Clone)]
pub struct WavHeader {
    pub chunk_size: u32,
    pub fmt_chunk_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    /// Builds the header for a payload of `len` bytes.
    ///
    /// Every field except the two size fields is a constant of the
    /// 8-bit mono 8000 Hz u-Law encoding. Lengths that would overflow
    /// the 32-bit size fields are rejected.
    pub fn for_payload(len: u64) -> Result<Self, Error> {
        if len > (u32::MAX - CHUNK_OVERHEAD) as u64 {
            return Err(Error::PayloadTooLarge(len));
        }
        let data_size = len as u32;
        let bytes_per_sample = BITS_PER_SAMPLE / 8;

        Ok(Self {
            chunk_size: CHUNK_OVERHEAD + data_size,
            fmt_chunk_size: FMT_CHUNK_SIZE,
            audio_format: AUDIO_FORMAT_MULAW,
            num_channels: NUM_CHANNELS,
            sample_rate: SAMPLE_RATE,
            byte_rate: SAMPLE_RATE * NUM_CHANNELS as u32 * bytes_per_sample as u32,
            block_align: NUM_CHANNELS * bytes_per_sample,
            bits_per_sample: BITS_PER_SAMPLE,
            data_size,
        })
    }

    /// Packs the header into its 44-byte little-endian layout.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), io::Error> {
        writer.write_all(b"RIFF")?;
        writer.write_u32::<LittleEndian>(self.chunk_size)?;
        writer.write_all(b"WAVE")?;

        writer.write_all(b"fmt ")?;
        writer.write_u32::<LittleEndian>(self.fmt_chunk_size)?;
        writer.write_u16::<LittleEndian>(self.audio_format)?;
        writer.write_u16::<LittleEndian>(self.num_channels)?;
        writer.write_u32::<LittleEndian>(self.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate)?;
        writer.write_u16::<LittleEndian>(self.block_align)?;
        writer.write_u16::<LittleEndian>(self.bits_per_sample)?;

        writer.write_all(b"data")?;
        writer.write_u32::<LittleEndian>(self.data_size)
    }
}

/// Writes the header followed by the payload, verbatim.
pub fn wrap<W: Write>(payload: &[u8], mut writer: W) -> Result<(), Error> {
    let header = WavHeader::for_payload(payload.len() as u64)?;
    header.write_to(&mut writer)?;
    writer.write_all(payload)?;
    Ok(())
}
