use super::DEFAULT_TITLE;
use crate::books;
use crate::error::FormatError;
use crate::format::ParseOptions;
use crate::formats::common::{
    number_field, ordinal, parse_number, prune_empty, resolve_book, trailing_segment_number,
};
use crate::ir::{BibleDocument, ChapterEntry, VerseEntry};
use crate::xml::{as_sequence, XmlChild, XmlNode};
use log::{debug, warn};

pub(super) fn parse_tree(
    tree: &XmlNode,
    options: &ParseOptions,
) -> Result<BibleDocument, FormatError> {
    let osis_text = match tree.get("osis") {
        Some(osis) => osis.get("osisText").unwrap_or(osis),
        None => tree.get("osisText").ok_or_else(|| {
            FormatError::UnsupportedFormat("expected an osis or osisText root".to_string())
        })?,
    };

    let mut doc = BibleDocument::new(DEFAULT_TITLE);
    let work = osis_text
        .get("header")
        .and_then(|header| header.get("work"))
        .and_then(|work| as_sequence(work).into_iter().next());
    if let Some(work) = work {
        if let Some(title) = work.field_text("title") {
            doc.title = title.to_string();
        }
        doc.description = work.field_text("description").map(str::to_string);
        doc.language = work.field_text("language").map(str::to_string);
    }

    let mut book_divs = Vec::new();
    collect_book_divs(osis_text, &mut book_divs);

    for div in book_divs {
        let osis_id = div.field_text("osisID");
        let title = div.get("title").and_then(XmlNode::deep_text);
        let name = osis_id
            .filter(|id| books::lookup(id, options.match_mode()).is_some())
            .or(title)
            .or(osis_id);
        let mut book = resolve_book(name, None, None, options);

        let mut walker = BookWalker::default();
        walker.walk(div);
        walker.finish_verse();
        book.chapters = walker.chapters;

        debug!("Parsed {} with {} chapters", book.name, book.chapters.len());
        doc.books.push(book);
    }

    prune_empty(&mut doc);
    Ok(doc)
}

/// Book divs in document order, looking through grouping divs.
fn collect_book_divs<'a>(node: &'a XmlNode, out: &mut Vec<&'a XmlNode>) {
    let Some(divs) = node.get("div") else {
        return;
    };
    for div in as_sequence(divs) {
        let is_book = div
            .field_text("type")
            .is_some_and(|kind| kind.eq_ignore_ascii_case("book"));
        if is_book {
            out.push(div);
        } else {
            collect_book_divs(div, out);
        }
    }
}

/// Elements whose text is never verse text.
const SKIPPED: [&str; 2] = ["note", "title"];

struct OpenVerse {
    chapter: Option<u32>,
    number: u32,
    text: String,
}

/// Walks a book div in document order.
///
/// Chapters and verses may be containers (`<verse osisID="Gen.1.1">…</verse>`) or
/// milestones (`<verse sID="Gen.1.1"/>…<verse eID="Gen.1.1"/>`), and milestone text can
/// span paragraph and line groups. Text only counts while a verse is open.
#[derive(Default)]
struct BookWalker {
    chapters: Vec<ChapterEntry>,
    current_chapter: Option<u32>,
    chapters_seen: usize,
    open: Option<OpenVerse>,
}

impl BookWalker {
    fn walk(&mut self, node: &XmlNode) {
        for child in node.children() {
            match child {
                XmlChild::Text(text) => {
                    if let Some(open) = &mut self.open {
                        open.text.push_str(text);
                    }
                }
                XmlChild::Element(name, element) => self.element(name, element),
            }
        }
    }

    fn element(&mut self, name: &str, node: &XmlNode) {
        if name.eq_ignore_ascii_case("chapter") {
            self.chapter(node);
        } else if name.eq_ignore_ascii_case("verse") {
            self.verse(node);
        } else if !SKIPPED.iter().any(|skipped| name.eq_ignore_ascii_case(skipped)) {
            if name.eq_ignore_ascii_case("w") {
                if let Some(open) = &mut self.open {
                    separate_word(&mut open.text);
                }
            }
            self.walk(node);
        }
    }

    fn chapter(&mut self, node: &XmlNode) {
        self.finish_verse();
        if node.has("eID") {
            return;
        }
        let number = reference_number(node).unwrap_or_else(|| ordinal(self.chapters_seen));
        self.chapters_seen += 1;
        self.current_chapter = Some(number);

        if !node.has("sID") {
            self.walk(node);
            self.finish_verse();
        }
    }

    fn verse(&mut self, node: &XmlNode) {
        self.finish_verse();
        if node.has("eID") {
            return;
        }

        // No positional fallback: a verse that names no number is dropped.
        self.open = Some(OpenVerse {
            chapter: self.current_chapter.or_else(|| chapter_of_reference(node)),
            number: reference_number(node).unwrap_or(0),
            text: String::new(),
        });
        if !node.has("sID") {
            self.walk(node);
            self.finish_verse();
        }
    }

    fn finish_verse(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        let Some(chapter_number) = open.chapter else {
            warn!("Skipping verse {} outside of any chapter", open.number);
            return;
        };

        let text = open.text.split_whitespace().collect::<Vec<_>>().join(" ");
        let index = match self.chapters.iter().position(|c| c.number == chapter_number) {
            Some(index) => index,
            None => {
                self.chapters.push(ChapterEntry::new(chapter_number));
                self.chapters.len() - 1
            }
        };
        self.chapters[index]
            .verses
            .push(VerseEntry::new(open.number, text));
    }
}

/// Strong's-tagged words are separate words even when the source runs them together.
fn separate_word(text: &mut String) {
    if !text.is_empty() && !text.ends_with(char::is_whitespace) {
        text.push(' ');
    }
}

/// `n`, else the last segment of `osisID`, else of `sID`.
fn reference_number(node: &XmlNode) -> Option<u32> {
    number_field(node, &["n"]).or_else(|| {
        node.field_text_any(&["osisID", "sID"])
            .and_then(trailing_segment_number)
    })
}

/// `"Gen.1.3"` → 1, for verses that sit outside any chapter element.
fn chapter_of_reference(node: &XmlNode) -> Option<u32> {
    let reference = node.field_text_any(&["osisID", "sID"])?;
    let mut segments = reference.rsplitn(3, '.');
    segments.next()?;
    let chapter = segments.next()?;
    segments.next()?;
    parse_number(chapter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::decode;

    fn parse(source: &str) -> BibleDocument {
        parse_tree(&decode(source).unwrap(), &ParseOptions::default()).unwrap()
    }

    #[test]
    fn reads_header_and_books() {
        let doc = parse(
            r#"<osis><osisText osisIDWork="KJV">
                 <header><work osisWork="KJV"><title>King James</title><language>en</language></work></header>
                 <div type="book" osisID="Gen">
                   <chapter osisID="Gen.1">
                     <verse osisID="Gen.1.1">In the beginning</verse>
                     <verse osisID="Gen.1.2">And the earth</verse>
                   </chapter>
                 </div>
               </osisText></osis>"#,
        );
        assert_eq!(doc.title, "King James");
        assert_eq!(doc.language.as_deref(), Some("en"));
        let book = &doc.books[0];
        assert_eq!((book.name.as_str(), book.number), ("Genesis", 1));
        assert_eq!(book.chapters[0].number, 1);
        assert_eq!(book.chapters[0].verses[1].number, 2);
    }

    #[test]
    fn default_title_without_header() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Rev"><chapter n="22">
                 <verse n="21">The grace</verse></chapter></div></osisText></osis>"#,
        );
        assert_eq!(doc.title, "OSIS Bible");
        assert_eq!(doc.books[0].number, 66);
        assert_eq!(doc.books[0].chapters[0].number, 22);
        assert_eq!(doc.books[0].chapters[0].verses[0].number, 21);
    }

    #[test]
    fn strongs_words_are_joined() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Gen"><chapter osisID="Gen.1">
                 <verse osisID="Gen.1.1"><w lemma="strong:H7225">In the beginning</w><w lemma="strong:H430">God</w></verse>
               </chapter></div></osisText></osis>"#,
        );
        assert_eq!(
            doc.books[0].chapters[0].verses[0].text,
            "In the beginning God"
        );
    }

    #[test]
    fn punctuation_between_strongs_words_is_kept() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Gen"><chapter osisID="Gen.1">
                 <verse osisID="Gen.1.1"><w lemma="strong:H7225">In the beginning</w> <w lemma="strong:H430">God</w> <w lemma="strong:H1254">created</w>.</verse>
               </chapter></div></osisText></osis>"#,
        );
        assert_eq!(
            doc.books[0].chapters[0].verses[0].text,
            "In the beginning God created."
        );
    }

    #[test]
    fn notes_inside_verses_are_dropped() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Gen"><chapter osisID="Gen.1">
                 <verse osisID="Gen.1.2">And the earth<note type="study">Or, was.</note> was without form.</verse>
               </chapter></div></osisText></osis>"#,
        );
        assert_eq!(
            doc.books[0].chapters[0].verses[0].text,
            "And the earth was without form."
        );
    }

    #[test]
    fn milestone_chapters_and_verses() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Gen">
                 <chapter sID="Gen.1" osisID="Gen.1"/>
                 <title type="chapter">Chapter 1</title>
                 <verse sID="Gen.1.1" osisID="Gen.1.1"/>In the beginning God created the heaven and the earth.<verse eID="Gen.1.1"/>
                 <verse sID="Gen.1.2" osisID="Gen.1.2"/>And the earth was without form<verse eID="Gen.1.2"/>
                 <chapter eID="Gen.1"/>
                 <chapter sID="Gen.2" osisID="Gen.2"/>
                 <verse sID="Gen.2.1" osisID="Gen.2.1"/>Thus the heavens<verse eID="Gen.2.1"/>
                 <chapter eID="Gen.2"/>
               </div></osisText></osis>"#,
        );
        let book = &doc.books[0];
        assert_eq!(book.name, "Genesis");
        let chapters: Vec<_> = book.chapters.iter().map(|c| c.number).collect();
        assert_eq!(chapters, vec![1, 2]);
        assert_eq!(
            book.chapters[0].verses[0].text,
            "In the beginning God created the heaven and the earth."
        );
        assert_eq!(book.chapters[0].verses[1].number, 2);
        assert_eq!(book.chapters[1].verses[0].text, "Thus the heavens");
    }

    #[test]
    fn milestone_text_spans_paragraphs() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Ps"><chapter osisID="Ps.23">
                 <lg><l><verse sID="Ps.23.1" osisID="Ps.23.1"/>The LORD is my shepherd;</l>
                 <l>I shall not want.<verse eID="Ps.23.1"/></l></lg>
               </chapter></div></osisText></osis>"#,
        );
        let verse = &doc.books[0].chapters[0].verses[0];
        assert_eq!((verse.number, verse.text.as_str()), (1, "The LORD is my shepherd; I shall not want."));
    }

    #[test]
    fn verses_outside_chapters_use_their_reference() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Jude">
                 <verse sID="Jude.1.1" osisID="Jude.1.1"/>Jude, the servant<verse eID="Jude.1.1"/>
               </div></osisText></osis>"#,
        );
        let chapter = &doc.books[0].chapters[0];
        assert_eq!((chapter.number, chapter.verses[0].number), (1, 1));
    }

    #[test]
    fn book_groups_are_flattened() {
        let doc = parse(
            r#"<osis><osisText>
                 <div type="bookGroup">
                   <div type="book" osisID="Matt"><chapter n="1"><verse n="1">a</verse></chapter></div>
                   <div type="book" osisID="Mark"><chapter n="1"><verse n="1">b</verse></chapter></div>
                 </div>
                 <div type="colophon"><p>end</p></div>
               </osisText></osis>"#,
        );
        let numbers: Vec<_> = doc.books.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![40, 41]);
    }

    #[test]
    fn title_is_used_when_osis_id_is_unknown() {
        let doc = parse(
            r#"<osisText><div type="book" osisID="XYZ"><title>Salmos</title>
                 <chapter n="1"><verse n="1">Bem-aventurado</verse></chapter></div></osisText>"#,
        );
        assert_eq!(doc.books[0].name, "Psalms");
    }

    #[test]
    fn verses_need_a_number_and_text() {
        let doc = parse(
            r#"<osis><osisText><div type="book" osisID="Gen"><chapter n="1">
                 <verse>no number</verse>
                 <verse n="2"></verse>
                 <verse sID="Gen.1.3" osisID="Gen.1.3"/><verse eID="Gen.1.3"/>
                 <verse n="4">kept</verse>
               </chapter></div></osisText></osis>"#,
        );
        let verses = &doc.books[0].chapters[0].verses;
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].number, 4);
    }
}
