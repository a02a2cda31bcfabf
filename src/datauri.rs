use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use bytes::Bytes;
use log::{debug, trace};

use crate::error::Result;

pub const DATA_URI_SCHEME: &str = "data:";
pub const BASE64_MARKER: &str = ";base64,";

// Standard alphabet with trailing bits ignored. A payload is either fully
// padded or not padded at all, partial padding is rejected.
const STANDARD_PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

const STANDARD_UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

fn decode_payload(payload: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    if payload.ends_with('=') {
        STANDARD_PADDED.decode(payload)
    } else {
        STANDARD_UNPADDED.decode(payload)
    }
}

/// Splits a `data:<media type>;base64,<payload>` string into its decoded
/// content and media type.
///
/// Input that is absent, lacks the `data:` scheme or has no `,` separator is
/// not treated as an error: it yields empty content and no media type. Once
/// the shape matches, a payload that is not valid base64 is an error.
pub fn parse<'a>(value: impl Into<Option<&'a str>>) -> Result<(Bytes, Option<String>)> {
    let value = match value.into() {
        Some(v) => v,
        None => {
            trace!("No data uri given, using empty content");
            return Ok((Bytes::new(), None));
        }
    };

    let comma = match value.find(',') {
        Some(idx) if value.starts_with(DATA_URI_SCHEME) => idx,
        _ => {
            trace!(
                "Value of {} bytes is not a data uri, using empty content",
                value.len()
            );
            return Ok((Bytes::new(), None));
        }
    };

    // Both indices are taken against the whole string, so a ';' after the
    // comma still bounds the media type.
    let media_type = match value.find(';') {
        Some(semi) if semi > DATA_URI_SCHEME.len() => {
            Some(value[DATA_URI_SCHEME.len()..semi].to_string())
        }
        _ => None,
    };

    let content = decode_payload(&value[comma + 1..]).map_err(|e| {
        debug!("Failed to decode data uri payload: {}", e);
        e
    })?;

    Ok((Bytes::from(content), media_type))
}

/// Renders content as `data:<media type>;base64,<payload>`. An absent media
/// type renders as an empty segment.
pub fn render(content: &[u8], media_type: Option<&str>) -> String {
    let payload = STANDARD_PADDED.encode(content);

    let media_type = media_type.unwrap_or_default();
    let mut out = String::with_capacity(
        DATA_URI_SCHEME.len() + media_type.len() + BASE64_MARKER.len() + payload.len(),
    );
    out.push_str(DATA_URI_SCHEME);
    out.push_str(media_type);
    out.push_str(BASE64_MARKER);
    out.push_str(&payload);

    out
}
