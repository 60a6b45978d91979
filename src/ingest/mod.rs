/// Image ingestion pipeline
///
/// Turns user-selected files into inline-encoded images usable both for
/// preview widgets and for submission payloads. A batch is fan-out/fan-in:
/// every file is read fully and encoded before the result is returned, in
/// selection order. Non-image files are silently dropped; a single file
/// that fails to read or decode is skipped without aborting its siblings
/// (best-effort batches, logged per file).
///
/// The original bytes are embedded as-is, with no resizing and no
/// compression.
/// Known limitation at real scale: payload size grows with the source photos.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::widget::image::Handle;

/// Monotonic source for preview ids; only list-key stability matters.
static NEXT_PREVIEW_ID: AtomicU64 = AtomicU64::new(1);

/// One ingested image: the encoded payload plus everything the preview
/// list needs to render it.
#[derive(Debug, Clone)]
pub struct IngestedImage {
    /// `data:<mime>;base64,<payload>` string, embedded verbatim in JSON.
    pub data_uri: String,
    /// Display name: the source filename, or a synthetic positional name
    /// when rebuilt from stored images.
    pub filename: String,
    /// Synthetic id for list-key stability; never persisted.
    pub preview_id: u64,
    /// Decoded handle for the preview widget.
    pub handle: Handle,
}

impl IngestedImage {
    /// Build an entry from raw bytes read off disk.
    pub fn from_bytes(bytes: Vec<u8>, mime: &str, filename: String) -> Self {
        let data_uri = encode_data_uri(&bytes, mime);
        Self {
            data_uri,
            filename,
            preview_id: NEXT_PREVIEW_ID.fetch_add(1, Ordering::Relaxed),
            handle: Handle::from_bytes(bytes),
        }
    }

    /// Rebuild an entry from a data URI already stored on the backend,
    /// e.g. when pre-populating an edit form. `filename` is synthetic.
    pub fn from_data_uri(data_uri: &str, filename: String) -> Self {
        let bytes = decode_data_uri(data_uri).unwrap_or_default();
        Self {
            data_uri: data_uri.to_string(),
            filename,
            preview_id: NEXT_PREVIEW_ID.fetch_add(1, Ordering::Relaxed),
            handle: Handle::from_bytes(bytes),
        }
    }
}

/// Encode raw bytes as a self-contained data URI.
pub fn encode_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Recover the raw bytes from a data URI. Returns `None` when the string
/// is not a base64 data URI.
pub fn decode_data_uri(data_uri: &str) -> Option<Vec<u8>> {
    let payload = data_uri.split_once(";base64,")?.1;
    STANDARD.decode(payload).ok()
}

/// Sniff the media type of the file content. Returns `None` for anything
/// that is not an image; such files are dropped from the batch.
fn sniff_image_mime(bytes: &[u8], path: &Path) -> Option<&'static str> {
    if let Ok(format) = image::guess_format(bytes) {
        return Some(format.to_mime_type());
    }

    // Content sniffing covers every format the backend will see in
    // practice; fall back to the extension for completeness.
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => Some("image/jpeg"),
        Some("png") => Some("image/png"),
        Some("gif") => Some("image/gif"),
        Some("webp") => Some("image/webp"),
        Some("bmp") => Some("image/bmp"),
        _ => None,
    }
}

/// Read and encode one file. Errors abort only this file.
async fn ingest_one(path: PathBuf) -> Result<IngestedImage, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

    let mime = sniff_image_mime(&bytes, &path)
        .ok_or_else(|| format!("not an image: {}", path.display()))?;

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    Ok(IngestedImage::from_bytes(bytes, mime, filename))
}

/// Ingest a batch of user-selected files.
///
/// The returned sequence contains every file that survived the batch, in
/// selection order. Skipped files (unreadable, or not images) are logged
/// and do not affect their siblings.
pub async fn ingest_files(paths: Vec<PathBuf>) -> Vec<IngestedImage> {
    let mut ingested = Vec::with_capacity(paths.len());

    for path in paths {
        match ingest_one(path).await {
            Ok(entry) => ingested.push(entry),
            Err(reason) => tracing::warn!("skipping file during ingest: {}", reason),
        }
    }

    tracing::info!("ingested {} image(s)", ingested.len());
    ingested
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Smallest valid PNG header bytes; enough for format sniffing.
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gloam-ingest-{}-{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_data_uri_round_trip() {
        let bytes = vec![1u8, 2, 3, 4];
        let uri = encode_data_uri(&bytes, "image/png");
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_uri(&uri).unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_plain_strings() {
        assert!(decode_data_uri("https://example.test/cover.png").is_none());
    }

    #[test]
    fn test_preview_ids_are_unique() {
        let a = IngestedImage::from_data_uri("data:image/png;base64,AAAA", "Image 1".to_string());
        let b = IngestedImage::from_data_uri("data:image/png;base64,AAAA", "Image 2".to_string());
        assert_ne!(a.preview_id, b.preview_id);
    }

    #[tokio::test]
    async fn test_batch_drops_non_images_and_keeps_order() {
        let png_a = temp_file("a.png", &PNG_MAGIC);
        let text = temp_file("notes.txt", b"hello");
        let png_b = temp_file("b.png", &PNG_MAGIC);
        let missing = std::env::temp_dir().join("gloam-ingest-definitely-missing.png");

        let result = ingest_files(vec![
            png_a.clone(),
            text.clone(),
            missing,
            png_b.clone(),
        ])
        .await;

        // One text file and one unreadable file skipped, order preserved.
        assert_eq!(result.len(), 2);
        assert!(result[0].filename.ends_with("a.png"));
        assert!(result[1].filename.ends_with("b.png"));
        assert!(result[0].data_uri.starts_with("data:image/png;base64,"));

        for path in [png_a, text, png_b] {
            let _ = std::fs::remove_file(path);
        }
    }
}
