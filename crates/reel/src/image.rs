use crate::item::ImageUri;
use gdk_pixbuf::Pixbuf;
use gdk_pixbuf::PixbufLoader;
use gdk_pixbuf::prelude::*;
use thiserror::Error;

pub const SVG_DATA_PREFIX: &str = "data:image/svg+xml,";

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported image URI: only inline SVG data URIs are rendered")]
    UnsupportedUri,
    #[error("Malformed percent-encoding in image data")]
    MalformedEscape,
    #[error("Pixbuf loader error: {0}")]
    Loader(#[from] glib::Error),
    #[error("Pixbuf loader produced no image")]
    Empty,
}

pub fn encode_svg(svg: &str) -> ImageUri {
    let escaped = glib::Uri::escape_string(svg, None::<&str>, false);
    ImageUri::new(format!("{SVG_DATA_PREFIX}{escaped}"))
}

pub fn decode_svg(uri: &ImageUri) -> Result<String, ImageError> {
    let payload = uri
        .strip_prefix(SVG_DATA_PREFIX)
        .ok_or(ImageError::UnsupportedUri)?;

    glib::Uri::unescape_string(payload, None::<&str>)
        .map(|s| s.to_string())
        .ok_or(ImageError::MalformedEscape)
}

/// Rasterizes the SVG behind `uri` into a `size`x`size` pixbuf.
pub fn load_pixbuf(uri: &ImageUri, size: i32) -> Result<Pixbuf, ImageError> {
    let svg = decode_svg(uri)?;

    let loader = PixbufLoader::with_mime_type("image/svg+xml")?;
    loader.set_size(size, size);
    loader.write(svg.as_bytes())?;
    loader.close()?;

    loader.pixbuf().ok_or(ImageError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_svg_decodes_back() {
        let svg = r##"<svg viewBox="0 0 80 80"><circle fill="#e11d48"/></svg>"##;
        let uri = encode_svg(svg);

        assert!(uri.starts_with(SVG_DATA_PREFIX));
        assert!(!uri[SVG_DATA_PREFIX.len()..].contains(' '));
        assert!(!uri[SVG_DATA_PREFIX.len()..].contains('#'));
        assert_eq!(decode_svg(&uri).unwrap(), svg);
    }

    #[test]
    fn test_rejects_non_svg_uris() {
        let uri = ImageUri::new("https://example.com/cherry.png");
        assert!(matches!(decode_svg(&uri), Err(ImageError::UnsupportedUri)));
    }

    #[test]
    fn test_rejects_broken_escapes() {
        let uri = ImageUri::new(format!("{SVG_DATA_PREFIX}%zz"));
        assert!(matches!(decode_svg(&uri), Err(ImageError::MalformedEscape)));
    }
}
