//! Page counting for rendered PDFs

use lopdf::{Document, Object};
use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary
/// This is more reliable than get_pages() which doesn't handle nested page trees
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_ref = doc.trailer.get(b"Root")
        .map_err(|_| Error::PdfStructure("No Root in trailer".to_string()))?;

    let catalog_id = match catalog_ref {
        Object::Reference(id) => *id,
        _ => return Err(Error::PdfStructure("Root is not a reference".to_string())),
    };

    let catalog_dict = match doc.get_object(catalog_id)? {
        Object::Dictionary(dict) => dict,
        _ => return Err(Error::PdfStructure("Catalog is not a dictionary".to_string())),
    };

    let pages_id = match catalog_dict.get(b"Pages") {
        Ok(Object::Reference(id)) => *id,
        Ok(_) => return Err(Error::PdfStructure("Pages is not a reference".to_string())),
        Err(_) => return Err(Error::PdfStructure("No Pages in catalog".to_string())),
    };

    let pages_dict = match doc.get_object(pages_id)? {
        Object::Dictionary(dict) => dict,
        _ => return Err(Error::PdfStructure("Pages is not a dictionary".to_string())),
    };

    match pages_dict.get(b"Count") {
        Ok(Object::Integer(n)) if *n >= 0 => Ok(*n as usize),
        Ok(_) => Err(Error::PdfStructure("Count is not a page count".to_string())),
        Err(_) => Err(Error::PdfStructure("No Count in Pages".to_string())),
    }
}

/// Count the pages of an in-memory PDF
///
/// Fails when the bytes are not a PDF or the document has no pages.
pub fn count_pages(pdf: &[u8]) -> Result<usize> {
    let doc = Document::load_mem(pdf)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf);
    }

    Ok(page_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    fn pdf_with_pages(count: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = (0..count)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                })
                .into()
            })
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_count_pages() {
        assert_eq!(count_pages(&pdf_with_pages(1)).unwrap(), 1);
        assert_eq!(count_pages(&pdf_with_pages(3)).unwrap(), 3);
    }

    #[test]
    fn test_count_pages_empty_document() {
        let result = count_pages(&pdf_with_pages(0));
        assert!(matches!(result.unwrap_err(), Error::EmptyPdf));
    }

    #[test]
    fn test_count_pages_not_a_pdf() {
        let result = count_pages(b"<html>definitely not a pdf</html>");
        assert!(matches!(result.unwrap_err(), Error::Pdf(_)));
    }
}
