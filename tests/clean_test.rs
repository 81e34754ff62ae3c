//! End-to-end tests for scanning and cleaning real PDF bytes.

use unblank::{clean_bytes, clean_reader, scan_bytes, CleanOutcome, Error, PdfSource, TextSource};

/// Build a PDF where each entry is one page: `Some(text)` draws a single
/// line of text, `None` leaves the content stream empty.
fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
    use lopdf::{dictionary, Object, Stream};

    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for page in pages {
        let content = match page {
            Some(text) => format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes(),
            None => Vec::new(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
    };
    let pages_id = doc.add_object(pages_dict);

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Extract the text of every page of a serialized PDF, in order.
fn page_texts(pdf: &[u8]) -> Vec<String> {
    let source = PdfSource::load_bytes(pdf).unwrap();
    source
        .page_numbers()
        .into_iter()
        .map(|p| source.page_text(p).unwrap())
        .collect()
}

#[test]
fn five_page_document_drops_blank_pages() {
    let pdf = pdf_with_pages(&[
        Some("Intro"),
        None,
        Some("Body"),
        None,
        Some("Conclusion"),
    ]);

    let outcome = clean_bytes(&pdf).unwrap();
    match &outcome {
        CleanOutcome::Cleaned { pdf, report } => {
            assert_eq!(report.total_pages, 5);
            assert_eq!(report.removed(), 2);
            assert_eq!(report.blank_pages, vec![2, 4]);
            assert_eq!(report.kept(), 3);

            let texts = page_texts(pdf);
            assert_eq!(texts.len(), 3);
            assert!(texts[0].contains("Intro"));
            assert!(texts[1].contains("Body"));
            assert!(texts[2].contains("Conclusion"));
        }
        CleanOutcome::AlreadyClean { .. } => panic!("expected pages to be removed"),
    }

    assert_eq!(
        outcome.summary("report.pdf"),
        "Removed 2 blank page(s) from 5 total pages in report.pdf"
    );
}

#[test]
fn already_clean_document_produces_no_output() {
    let pdf = pdf_with_pages(&[Some("One"), Some("Two"), Some("Three")]);

    let outcome = clean_bytes(&pdf).unwrap();
    assert!(matches!(outcome, CleanOutcome::AlreadyClean { .. }));
    assert!(outcome.pdf().is_none());
    assert_eq!(outcome.total_pages(), 3);
    assert_eq!(outcome.removed(), 0);
    assert_eq!(
        outcome.summary("clean.pdf"),
        "No blank pages found in clean.pdf (Total pages: 3)"
    );
}

#[test]
fn whitespace_only_page_is_blank() {
    let pdf = pdf_with_pages(&[Some("Text"), Some("   ")]);

    let report = scan_bytes(&pdf).unwrap();
    assert_eq!(report.blank_pages, vec![2]);
}

#[test]
fn counts_always_add_up() {
    let pdf = pdf_with_pages(&[None, Some("a"), None, None, Some("b")]);

    let report = scan_bytes(&pdf).unwrap();
    assert_eq!(report.removed() + report.kept(), report.total_pages);

    let outcome = clean_bytes(&pdf).unwrap();
    let cleaned = outcome.pdf().expect("blank pages should be removed");
    let remaining = PdfSource::load_bytes(cleaned).unwrap().page_count();
    assert_eq!(remaining, report.kept());
}

#[test]
fn cleaning_is_idempotent() {
    let pdf = pdf_with_pages(&[Some("Keep"), None, Some("Also keep")]);

    let first = clean_bytes(&pdf).unwrap();
    let cleaned = first.pdf().expect("first pass should remove a page");

    let second = clean_bytes(cleaned).unwrap();
    assert!(matches!(second, CleanOutcome::AlreadyClean { .. }));
    assert_eq!(second.total_pages(), 2);
}

#[test]
fn kept_pages_preserve_order_without_duplication() {
    let pdf = pdf_with_pages(&[Some("A"), None, Some("B"), Some("C"), None, Some("D")]);

    let outcome = clean_bytes(&pdf).unwrap();
    let texts = page_texts(outcome.pdf().unwrap());
    let letters: Vec<&str> = texts
        .iter()
        .map(|t| t.trim())
        .collect();
    assert_eq!(letters, vec!["A", "B", "C", "D"]);
}

#[test]
fn scan_reports_verdicts_in_document_order() {
    let pdf = pdf_with_pages(&[Some("x"), None, Some("y")]);

    let report = scan_bytes(&pdf).unwrap();
    let pages: Vec<u32> = report.verdicts.iter().map(|v| v.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
    assert!(report.verdicts[0].verdict.is_kept());
    assert!(report.verdicts[1].verdict.is_blank());
    assert!(report.warnings.is_empty());
}

#[test]
fn corrupt_document_fails_without_affecting_the_next() {
    let corrupt: &[u8] = b"%PDF-1.5\ngarbage everywhere";
    let valid = pdf_with_pages(&[Some("Real"), None]);

    // First document fails on its own...
    assert!(clean_bytes(corrupt).is_err());

    // ...and the second still cleans, in either processing order.
    let outcome = clean_bytes(&valid).unwrap();
    assert_eq!(outcome.removed(), 1);
    assert!(clean_bytes(corrupt).is_err());
}

#[test]
fn non_pdf_input_is_rejected_up_front() {
    assert!(matches!(clean_bytes(b"plain text"), Err(Error::NotAPdf)));
}

#[test]
fn clean_reader_stages_and_cleans() {
    let pdf = pdf_with_pages(&[Some("Stream me"), None]);

    let outcome = clean_reader(pdf.as_slice()).unwrap();
    assert_eq!(outcome.removed(), 1);
    assert_eq!(outcome.total_pages(), 2);
}
