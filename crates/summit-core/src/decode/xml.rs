//! Small quick-xml helpers shared by the XML-based decoders

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{DecodeError, DecodeResult};

/// Read the text content of an element as an owned, trimmed String.
///
/// Called right after the element's `Event::Start`. Handles plain text,
/// CDATA sections and entity references.
pub(crate) fn read_text_owned<'a>(
    reader: &mut Reader<&'a [u8]>,
    start: &BytesStart<'_>,
) -> DecodeResult<String> {
    let end_name = start.name().0.to_vec();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(e) => text.push_str(utf8(e.as_ref())?),
            Event::CData(e) => text.push_str(utf8(e.as_ref())?),
            Event::GeneralRef(e) => {
                if let Ok(Some(ch)) = e.resolve_char_ref() {
                    text.push(ch);
                } else {
                    match utf8(e.as_ref())? {
                        "amp" => text.push('&'),
                        "lt" => text.push('<'),
                        "gt" => text.push('>'),
                        "quot" => text.push('"'),
                        "apos" => text.push('\''),
                        _ => {}
                    }
                }
            }
            Event::Start(e) => {
                // Markup inside a text element (e.g. unescaped HTML) is dropped
                reader.read_to_end(e.name())?;
            }
            Event::End(e) if e.name().0 == end_name.as_slice() => break,
            Event::Eof => return Err(unexpected_eof()),
            _ => {}
        }
    }

    Ok(text.trim().to_string())
}

/// Skip the remainder of an element whose `Event::Start` was just read
pub(crate) fn skip_element<'a>(
    reader: &mut Reader<&'a [u8]>,
    start: &BytesStart<'_>,
) -> DecodeResult<()> {
    reader.read_to_end(start.name())?;
    Ok(())
}

/// Error for a document that ends inside an open element
pub(crate) fn unexpected_eof() -> DecodeError {
    DecodeError::Xml("unexpected end of document".to_string())
}

fn utf8(bytes: &[u8]) -> DecodeResult<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| DecodeError::Xml(format!("invalid UTF-8 in text: {}", e)))
}
