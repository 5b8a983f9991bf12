use std::io;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// The flat JSON object delivered to the native host. Field presence follows
/// the composed message exactly; absent fields are omitted, not nulled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "imageSrc", skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub netflix: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The host's reply object: `{"result": "OK"}` or
/// `{"result": "ERROR", "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum HostReply {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// Frame a payload for the native-messaging channel: a 4-byte native-endian
/// length prefix followed by the payload bytes.
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(4 + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    frame.extend_from_slice(payload);
    frame
}

/// Write one framed payload and flush.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(&encode_frame(payload)).await?;
    writer.flush().await
}

/// Read one framed payload. `Ok(None)` means the peer closed the channel
/// cleanly before (or instead of) sending a frame.
pub async fn read_frame<R>(reader: &mut R) -> io::Result<Option<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    let mut length_bytes = [0u8; 4];
    match reader.read_exact(&mut length_bytes).await {
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(err) => return Err(err),
    }

    let length = u32::from_ne_bytes(length_bytes) as usize;
    if length == 0 {
        return Ok(None);
    }

    let mut payload = vec![0u8; length];
    reader.read_exact(&mut payload).await?;
    Ok(Some(payload))
}
