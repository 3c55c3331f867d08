use std::path::Path;

/// Sample rate of the raw PCM returned by the speech service.
pub const SAMPLE_RATE: u32 = 24000;
pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;
pub const HEADER_LEN: usize = 44;
pub const MEDIA_TYPE: &str = "audio/wav";

const BYTE_RATE: u32 = SAMPLE_RATE * CHANNELS as u32 * (BITS_PER_SAMPLE as u32 / 8);
const BLOCK_ALIGN: u16 = CHANNELS * (BITS_PER_SAMPLE / 8);

/// A finished RIFF/WAVE file: 44-byte header followed by the PCM data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavContainer {
    bytes: Vec<u8>,
}

impl WavContainer {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &'static str {
        MEDIA_TYPE
    }

    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Playback length in whole frames; a trailing partial frame is ignored.
    pub fn duration_seconds(&self) -> f64 {
        let frames = self.pcm_data().len() / BLOCK_ALIGN as usize;
        frames as f64 / SAMPLE_RATE as f64
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, &self.bytes)
    }
}

/// Concatenates raw 24 kHz mono 16-bit PCM buffers in order and wraps them
/// in a WAV header. Never fails; no buffers yields a header-only file.
pub fn assemble<I, B>(buffers: I) -> WavContainer
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut bytes = vec![0u8; HEADER_LEN];
    for buffer in buffers {
        bytes.extend_from_slice(buffer.as_ref());
    }
    let header = wav_header(bytes.len() - HEADER_LEN);
    bytes[..HEADER_LEN].copy_from_slice(&header);
    WavContainer { bytes }
}

fn wav_header(data_len: usize) -> [u8; HEADER_LEN] {
    // RIFF sizes are u32; anything past 4 GiB saturates.
    let data_size = u32::try_from(data_len).unwrap_or(u32::MAX);
    let riff_size = data_size.saturating_add((HEADER_LEN - 8) as u32);

    let mut header = [0u8; HEADER_LEN];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&riff_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
    header[22..24].copy_from_slice(&CHANNELS.to_le_bytes());
    header[24..28].copy_from_slice(&SAMPLE_RATE.to_le_bytes());
    header[28..32].copy_from_slice(&BYTE_RATE.to_le_bytes());
    header[32..34].copy_from_slice(&BLOCK_ALIGN.to_le_bytes());
    header[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}
