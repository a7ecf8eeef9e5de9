// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Logo payload decoding: base64 (optionally wrapped in a `data:` URI) to a
// verified raster image. Pure Rust, so every bridge shares it.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use tracing::{debug, instrument};
use upn_core::error::{Result, UpnError};

use crate::traits::RenderedLogo;

/// Clients in the wild send logos with and without `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// File extensions offered by logo file choosers.
pub const PICKER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Decode an embedded logo and sniff its format.
///
/// The declared MIME type of a `data:` URI is ignored; the bytes decide.
#[instrument(skip(payload), fields(payload_len = payload.len()))]
pub fn render_logo(payload: &str) -> Result<RenderedLogo> {
    let encoded: String = strip_data_uri(payload)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if encoded.is_empty() {
        return Err(UpnError::Image("empty logo payload".into()));
    }

    let bytes = LENIENT
        .decode(encoded.as_bytes())
        .map_err(|e| UpnError::Image(format!("invalid base64: {e}")))?;
    render_bytes(&bytes)
}

/// Turn raw image file contents into the bare base64 payload the backend
/// stores. Bytes that are not a decodable image are rejected.
pub fn encode_logo(bytes: &[u8]) -> Result<String> {
    render_bytes(bytes)?;
    Ok(STANDARD.encode(bytes))
}

fn render_bytes(bytes: &[u8]) -> Result<RenderedLogo> {
    if bytes.is_empty() {
        return Err(UpnError::Image("empty image file".into()));
    }
    let format = image::guess_format(bytes)
        .map_err(|e| UpnError::Image(format!("unrecognised image format: {e}")))?;
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| UpnError::Image(format!("failed to decode image: {e}")))?;

    let mime_type = format.to_mime_type();
    debug!(
        width = img.width(),
        height = img.height(),
        mime_type,
        "logo decoded"
    );

    Ok(RenderedLogo {
        mime_type,
        width: img.width(),
        height: img.height(),
        data_uri: format!("data:{mime_type};base64,{}", STANDARD.encode(bytes)),
    })
}

/// Everything after `;base64,` for `data:` URIs, the input otherwise.
fn strip_data_uri(payload: &str) -> &str {
    const MARKER: &str = ";base64,";
    let trimmed = payload.trim();
    match trimmed.find(MARKER) {
        Some(idx) if trimmed.starts_with("data:") => &trimmed[idx + MARKER.len()..],
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_base64(width: u32, height: u32) -> String {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        STANDARD.encode(buf.into_inner())
    }

    #[test]
    fn decodes_bare_base64_png() {
        let logo = render_logo(&png_base64(4, 3)).unwrap();
        assert_eq!(logo.mime_type, "image/png");
        assert_eq!((logo.width, logo.height), (4, 3));
        assert!(logo.data_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn accepts_data_uri_with_wrong_declared_type() {
        let payload = format!("data:image/jpeg;base64,{}", png_base64(2, 2));
        let logo = render_logo(&payload).unwrap();
        assert_eq!(logo.mime_type, "image/png");
    }

    #[test]
    fn tolerates_missing_padding_and_line_breaks() {
        let encoded = png_base64(5, 5);
        let unpadded = encoded.trim_end_matches('=');
        let wrapped: String = unpadded
            .as_bytes()
            .chunks(20)
            .map(|c| format!("{}\n", std::str::from_utf8(c).unwrap()))
            .collect();
        assert!(render_logo(&wrapped).is_ok());
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = render_logo(&STANDARD.encode(b"definitely not a png")).unwrap_err();
        assert!(matches!(err, UpnError::Image(_)));
    }

    #[test]
    fn picked_file_encodes_to_renderable_payload() {
        let bytes = LENIENT.decode(png_base64(3, 2)).unwrap();
        let payload = encode_logo(&bytes).unwrap();
        let logo = render_logo(&payload).unwrap();
        assert_eq!((logo.width, logo.height), (3, 2));
    }

    #[test]
    fn picked_non_image_is_rejected() {
        assert!(matches!(encode_logo(b"%PDF-1.7"), Err(UpnError::Image(_))));
        assert!(matches!(encode_logo(&[]), Err(UpnError::Image(_))));
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(render_logo("%%%not base64%%%").is_err());
        assert!(render_logo("data:image/png;base64,").is_err());
    }
}
