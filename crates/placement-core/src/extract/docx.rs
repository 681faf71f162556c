use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::TextExtract;

/// DOCX extraction.
///
/// A .docx file is a zip archive; the document body lives in
/// `word/document.xml`. Text runs (`<w:t>`) are concatenated and every closed
/// paragraph (`</w:p>`) appends one newline, so paragraphs come out in
/// document order, one per line.
pub struct DocxExtractor;

impl TextExtract for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> anyhow::Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| anyhow::anyhow!("opening DOCX archive: {e}"))?;

        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| anyhow::anyhow!("DOCX archive has no word/document.xml: {e}"))?
            .read_to_string(&mut document_xml)
            .map_err(|e| anyhow::anyhow!("reading word/document.xml: {e}"))?;

        paragraph_text(&document_xml)
    }
}

fn paragraph_text(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"t" => in_run_text = false,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"p" => text.push('\n'),
            Ok(Event::Text(t)) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| anyhow::anyhow!("decoding DOCX text run: {e}"))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(anyhow::anyhow!("parsing word/document.xml: {e}")),
        }
    }

    Ok(text)
}
