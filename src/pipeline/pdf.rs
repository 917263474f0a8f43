use super::types::PdfExtractor;
use super::ExtractionError;

/// PDF text extractor backed by the pdf-extract crate's per-page text layer
/// decoding. Pages are emitted in document order starting at page 1; the text
/// runs of each page are joined by single spaces and a trailing space is
/// appended after every page's contribution. Run order within a page follows
/// the content-stream decoder, with no re-sorting by visual position.
pub struct PdfTextExtractor;

impl PdfExtractor for PdfTextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        let mut full_text = String::new();
        for page_text in &pages {
            let mut first = true;
            for run in page_text.split_whitespace() {
                if !first {
                    full_text.push(' ');
                }
                full_text.push_str(run);
                first = false;
            }
            full_text.push(' ');
        }

        Ok(full_text)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Build a small PDF with one page per entry, each page carrying a single
    /// Helvetica text run.
    pub fn make_test_pdf(pages: &[&str]) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = pages
            .iter()
            .map(|text| {
                let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
                let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

                let page_id = doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                    "Contents" => content_id,
                    "Resources" => dictionary! {
                        "Font" => dictionary! {
                            "F1" => font_id,
                        },
                    },
                });
                page_id.into()
            })
            .collect();

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::make_test_pdf;
    use super::*;
    use crate::pipeline::types::ErrorKind;

    #[test]
    fn extracts_text_from_single_page() {
        let pdf = make_test_pdf(&["Invoice #45231 due"]);
        let text = PdfTextExtractor.extract_text(&pdf).unwrap();
        assert!(
            text.contains("Invoice #45231 due"),
            "expected invoice line, got: {text}"
        );
    }

    #[test]
    fn pages_concatenate_in_order_with_trailing_spaces() {
        let pdf = make_test_pdf(&["first page", "second page"]);
        let text = PdfTextExtractor.extract_text(&pdf).unwrap();

        let first = text.find("first page").expect("page 1 text missing");
        let second = text.find("second page").expect("page 2 text missing");
        assert!(first < second, "pages out of order: {text}");
        assert!(text.ends_with(' '), "missing trailing page space: {text:?}");
    }

    #[test]
    fn runs_joined_by_single_spaces() {
        let pdf = make_test_pdf(&["alpha beta"]);
        let text = PdfTextExtractor.extract_text(&pdf).unwrap();
        assert!(!text.contains('\n'), "newlines should be folded: {text:?}");
        assert!(!text.contains("  "), "double spaces should be folded: {text:?}");
    }

    #[test]
    fn malformed_pdf_aborts_with_parse_error() {
        let err = PdfTextExtractor.extract_text(b"not a pdf").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PdfParse);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(PdfTextExtractor.extract_text(b"").is_err());
    }
}
