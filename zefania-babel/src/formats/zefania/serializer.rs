//! Zefania XML writer
//!
//! Output is built as text rather than through a DOM: the element set is small and fixed,
//! and verse content arrives already escaped from [`clean`], with `<i>` as the only markup.

use super::{ZefaniaInfo, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use crate::ir::{BibleDocument, BookEntry, ChapterEntry, VerseEntry};
use crate::sanitize::clean;
use log::warn;
use std::fmt::Write;

const NAMESPACE: &str = "http://www.zefania.de/2009/xmlbible";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://www.zefania.de/2009/xmlbible http://www.zefania.de/2009/xmlbible.xsd";

const HEADER_COMMENTS: [&str; 4] = [
    "Visit the online documentation for Zefania XML Markup",
    "http://bgfdb.de/zefaniaxml/bml/",
    "Download another Zefania XML files from",
    "http://sourceforge.net/projects/zefania-sharp",
];

/// Write a document that has already passed validation.
pub(super) fn serialize(doc: &BibleDocument, info: &ZefaniaInfo) -> String {
    let title = info
        .title
        .as_deref()
        .or_else(|| Some(doc.title.as_str()).filter(|t| !t.trim().is_empty()))
        .unwrap_or(DEFAULT_TITLE);
    let description = info
        .description
        .as_deref()
        .or(doc.description.as_deref())
        .unwrap_or(DEFAULT_DESCRIPTION);
    let language = info
        .language
        .as_deref()
        .unwrap_or_else(|| doc.language_or_default());
    let date = info
        .date
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    if info.header_comments {
        for comment in HEADER_COMMENTS {
            let _ = writeln!(out, "<!--{comment}-->");
        }
    }

    let _ = writeln!(
        out,
        "<XMLBIBLE xmlns=\"{NAMESPACE}\" xmlns:xsi=\"{XSI_NAMESPACE}\" xsi:schemaLocation=\"{SCHEMA_LOCATION}\" version=\"{}\" status=\"{}\" biblename=\"{}\" revision=\"{}\" type=\"{}\">",
        escape(&info.version),
        escape(&info.status),
        escape(title),
        escape(&info.revision),
        escape(&info.bible_type),
    );

    out.push_str("  <INFORMATION>\n");
    let fields = [
        ("subject", info.subject.as_str()),
        ("format", info.format.as_str()),
        ("date", date.as_str()),
        ("title", title),
        ("description", description),
        ("language", language),
        ("creator", info.creator.as_str()),
        ("identifier", title),
        ("publisher", info.publisher.as_str()),
        ("contributors", ""),
        ("type", ""),
        ("source", ""),
        ("coverage", ""),
        ("rights", ""),
    ];
    for (name, value) in fields {
        if value.is_empty() {
            let _ = writeln!(out, "    <{name}/>");
        } else {
            let _ = writeln!(out, "    <{name}>{}</{name}>", escape(value));
        }
    }
    out.push_str("  </INFORMATION>\n");

    let mut books: Vec<&BookEntry> = doc.books.iter().collect();
    books.sort_by_key(|book| book.number);
    for book in books {
        write_book(&mut out, book);
    }

    out.push_str("</XMLBIBLE>\n");
    out
}

fn write_book(out: &mut String, book: &BookEntry) {
    if book.chapters.is_empty() {
        warn!("Book {} has no chapters, skipping", book.name);
        return;
    }

    let _ = writeln!(
        out,
        "  <BIBLEBOOK bnumber=\"{}\" bname=\"{}\" bsname=\"{}\">",
        book.number,
        escape(&book.name),
        escape(&short_name(book)),
    );

    let mut chapters: Vec<&ChapterEntry> = book.chapters.iter().collect();
    chapters.sort_by_key(|chapter| chapter.number);
    for chapter in chapters {
        if chapter.verses.is_empty() {
            warn!("Chapter {} of {} has no verses, skipping", chapter.number, book.name);
            continue;
        }

        let _ = writeln!(out, "    <CHAPTER cnumber=\"{}\">", chapter.number);
        let mut verses: Vec<&VerseEntry> = chapter.verses.iter().collect();
        verses.sort_by_key(|verse| verse.number);
        for verse in verses {
            let text = clean(&verse.text);
            if text.is_empty() {
                warn!(
                    "Verse {} of {} {} is empty, skipping",
                    verse.number, book.name, chapter.number
                );
                continue;
            }
            let _ = writeln!(out, "      <VERS vnumber=\"{}\">{text}</VERS>", verse.number);
        }
        out.push_str("    </CHAPTER>\n");
    }

    out.push_str("  </BIBLEBOOK>\n");
}

/// Explicit short name, else the registry's, else the first three characters of the name.
fn short_name(book: &BookEntry) -> String {
    if !book.short_name.trim().is_empty() {
        return book.short_name.trim().to_string();
    }
    match crate::books::get_book_by_number(book.number) {
        Some(canonical) => canonical.short_name.to_string(),
        None => book.name.chars().take(3).collect(),
    }
}

/// Escape text for attribute values and metadata elements.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_info() -> ZefaniaInfo {
        ZefaniaInfo {
            date: Some("2024-01-01".to_string()),
            ..ZefaniaInfo::default()
        }
    }

    fn genesis() -> BibleDocument {
        let mut chapter = ChapterEntry::new(1);
        chapter.verses.push(VerseEntry::new(2, "And the earth"));
        chapter.verses.push(VerseEntry::new(1, "In the beginning..."));
        let mut book = BookEntry::new("Genesis", 1);
        book.short_name = "Gn".to_string();
        book.chapters.push(chapter);
        let mut doc = BibleDocument::new("Test Bible");
        doc.books.push(book);
        doc
    }

    #[test]
    fn writes_the_full_document() {
        let xml = serialize(&genesis(), &fixed_info());
        insta::assert_snapshot!(xml.trim_end(), @r###"
        <?xml version="1.0" encoding="UTF-8"?>
        <XMLBIBLE xmlns="http://www.zefania.de/2009/xmlbible" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.zefania.de/2009/xmlbible http://www.zefania.de/2009/xmlbible.xsd" version="1" status="v" biblename="Test Bible" revision="0" type="x-bible">
          <INFORMATION>
            <subject>Holy Bible</subject>
            <format>Zefania XML Bible Markup Language</format>
            <date>2024-01-01</date>
            <title>Test Bible</title>
            <description>Convertida para formato Zefania XML</description>
            <language>POR</language>
            <creator>Zefania XML Converter</creator>
            <identifier>Test Bible</identifier>
            <publisher>Conversor Automático</publisher>
            <contributors/>
            <type/>
            <source/>
            <coverage/>
            <rights/>
          </INFORMATION>
          <BIBLEBOOK bnumber="1" bname="Genesis" bsname="Gn">
            <CHAPTER cnumber="1">
              <VERS vnumber="1">In the beginning...</VERS>
              <VERS vnumber="2">And the earth</VERS>
            </CHAPTER>
          </BIBLEBOOK>
        </XMLBIBLE>
        "###);
    }

    #[test]
    fn books_and_chapters_are_sorted() {
        let mut doc = genesis();
        let mut exodus = BookEntry::new("Exodus", 2);
        let mut ch2 = ChapterEntry::new(2);
        ch2.verses.push(VerseEntry::new(1, "b"));
        let mut ch1 = ChapterEntry::new(1);
        ch1.verses.push(VerseEntry::new(1, "a"));
        exodus.chapters = vec![ch2, ch1];
        doc.books.insert(0, exodus);

        let xml = serialize(&doc, &fixed_info());
        let genesis_at = xml.find("bname=\"Genesis\"").unwrap();
        let exodus_at = xml.find("bname=\"Exodus\"").unwrap();
        assert!(genesis_at < exodus_at);
        assert!(xml.find("cnumber=\"1\">\n      <VERS vnumber=\"1\">a").is_some());
    }

    #[test]
    fn blank_content_is_skipped() {
        let mut doc = genesis();
        doc.books[0].chapters[0].verses.push(VerseEntry::new(3, "   "));
        doc.books[0].chapters.push(ChapterEntry::new(2));
        let xml = serialize(&doc, &fixed_info());
        assert!(!xml.contains("vnumber=\"3\""));
        assert!(!xml.contains("cnumber=\"2\""));
    }

    #[test]
    fn verse_text_is_sanitized() {
        let mut doc = genesis();
        doc.books[0].chapters[0].verses[0].text = "[2] <b>Tom</b> & Jerry".to_string();
        let xml = serialize(&doc, &fixed_info());
        assert!(xml.contains("<VERS vnumber=\"2\"><i>Tom</i> &amp; Jerry</VERS>"));
    }

    #[test]
    fn metadata_is_escaped_and_overridable() {
        let mut doc = genesis();
        doc.title = "A \"quoted\" & <odd> title".to_string();
        let xml = serialize(&doc, &fixed_info());
        assert!(xml.contains("biblename=\"A &quot;quoted&quot; &amp; &lt;odd&gt; title\""));

        let info = ZefaniaInfo {
            title: Some("Override".to_string()),
            language: Some("ENG".to_string()),
            header_comments: true,
            ..fixed_info()
        };
        let xml = serialize(&doc, &info);
        assert!(xml.contains("biblename=\"Override\""));
        assert!(xml.contains("<language>ENG</language>"));
        assert!(xml.contains("<!--http://bgfdb.de/zefaniaxml/bml/-->"));
    }

    #[test]
    fn empty_title_uses_the_default() {
        let mut doc = genesis();
        doc.title = String::new();
        let xml = serialize(&doc, &fixed_info());
        assert!(xml.contains("biblename=\"Bíblia Sagrada\""));
    }

    #[test]
    fn short_name_fallbacks() {
        let mut book = BookEntry::new("Genesis", 1);
        assert_eq!(short_name(&book), "Gn");
        book.short_name = "Gen".to_string();
        assert_eq!(short_name(&book), "Gen");
        let unknown = BookEntry::new("Apócrifo", 70);
        assert_eq!(short_name(&unknown), "Apó");
    }
}
