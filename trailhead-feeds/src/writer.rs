//! Incremental XML emission.
//!
//! A thin layer over the `quick-xml` event writer giving the generators
//! explicit start/end element calls. Output is written to the sink as
//! calls occur; nothing is buffered into a tree, so feed size does not
//! affect memory use. Balanced nesting is the caller's responsibility —
//! an unbalanced sequence is a programming error, checked by debug
//! assertions and the test suite, not handled at runtime.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::FeedError;

/// Streaming XML writer used by every feed generator.
pub struct XmlFeedWriter<W: Write> {
    inner: Writer<W>,
    depth: usize,
}

impl<W: Write> XmlFeedWriter<W> {
    /// Wrap a sink. One writer produces exactly one document.
    pub fn new(sink: W) -> Self {
        Self {
            inner: Writer::new(sink),
            depth: 0,
        }
    }

    /// Write the XML declaration. Call exactly once, before any element.
    pub fn start_document(&mut self) -> Result<(), FeedError> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// Finish the document.
    pub fn end_document(&mut self) -> Result<(), FeedError> {
        debug_assert_eq!(self.depth, 0, "unclosed elements at end of document");
        Ok(())
    }

    /// Open an element with ordered attributes.
    pub fn start_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), FeedError> {
        let mut element = BytesStart::new(name);
        for (key, value) in attrs {
            element.push_attribute((*key, *value));
        }
        self.inner.write_event(Event::Start(element))?;
        self.depth += 1;
        Ok(())
    }

    /// Write a self-closing element with ordered attributes.
    pub fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), FeedError> {
        let mut element = BytesStart::new(name);
        for (key, value) in attrs {
            element.push_attribute((*key, *value));
        }
        self.inner.write_event(Event::Empty(element))?;
        Ok(())
    }

    /// Close the innermost open element, which must be `name`.
    pub fn end_element(&mut self, name: &str) -> Result<(), FeedError> {
        debug_assert!(self.depth > 0, "end_element {name:?} with no open element");
        self.depth = self.depth.saturating_sub(1);
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write entity-escaped character data.
    pub fn text(&mut self, text: &str) -> Result<(), FeedError> {
        self.inner.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Write a CDATA section, verbatim.
    pub fn cdata(&mut self, text: &str) -> Result<(), FeedError> {
        self.inner.write_event(Event::CData(BytesCData::new(text)))?;
        Ok(())
    }

    /// Recover the sink once the document is complete.
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}
