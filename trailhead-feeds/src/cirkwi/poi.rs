//! The `<pois version="2">` feed.

use std::io::Write;

use log::debug;

use trailhead_core::locale;
use trailhead_core::{CoordTransformer, Poi, plain_text};

use crate::cirkwi::timestamp;
use crate::error::FeedError;
use crate::fields::{RequestContext, float_repr, write_field, write_medias};
use crate::writer::XmlFeedWriter;

/// Per-POI emission logic, shared between the POI and circuit feeds.
///
/// Holds the collaborators a `<poi>` element needs: the request context
/// for absolute media URLs and the reprojection seam for the address
/// block. It carries no per-document state, so the circuit serializer
/// composes one rather than inheriting the POI serializer.
pub(crate) struct PoiEmitter<'a> {
    pub(crate) request: &'a RequestContext,
    pub(crate) transformer: &'a dyn CoordTransformer,
}

impl PoiEmitter<'_> {
    /// Write one `<poi>` element.
    ///
    /// A POI with no published locales still produces the wrapper, the
    /// category block when one applies, and the address block — just no
    /// `<informations>` blocks.
    pub(crate) fn write_poi<W: Write>(
        &self,
        xml: &mut XmlFeedWriter<W>,
        poi: &Poi,
    ) -> Result<(), FeedError> {
        let created = timestamp(&poi.created);
        let updated = timestamp(&poi.updated);
        let id = poi.id.to_string();
        xml.start_element(
            "poi",
            &[
                ("date_creation", &created),
                ("date_modification", &updated),
                ("id_poi", &id),
            ],
        )?;

        // One category per POI: the partner referential is flat here.
        if let Some(tag) = poi.kind.as_ref().and_then(|kind| kind.cirkwi.as_ref()) {
            let eid = tag.eid.to_string();
            xml.start_element("categories", &[])?;
            write_field(xml, "categorie", "", &[("id", &eid), ("nom", &tag.name)])?;
            xml.end_element("categories")?;
        }

        for lang in &poi.published_locales {
            let _active = locale::activate(lang);
            xml.start_element("informations", &[("language", lang.as_str())])?;
            write_field(xml, "titre", poi.name.localized().unwrap_or_default(), &[])?;
            let description = poi
                .description
                .localized()
                .map(plain_text)
                .unwrap_or_default();
            write_field(xml, "description", &description, &[])?;
            write_medias(xml, self.request, &poi.pictures)?;
            xml.end_element("informations")?;
        }

        let position = self.transformer.transform_point(poi.geometry, poi.srid)?;
        xml.start_element("adresse", &[])?;
        xml.start_element("position", &[])?;
        // Feed order is lat then lng; storage order is (x=lng, y=lat).
        write_field(xml, "lat", &float_repr(position.y()), &[])?;
        write_field(xml, "lng", &float_repr(position.x()), &[])?;
        xml.end_element("position")?;
        xml.end_element("adresse")?;
        xml.end_element("poi")
    }
}

/// Streaming generator for the flat POI feed.
///
/// Constructed once per feed-generation call; it holds no cross-request
/// state. `serialize` writes a complete document and hands the sink back.
pub struct CirkwiPoiSerializer<'a, W: Write> {
    xml: XmlFeedWriter<W>,
    emitter: PoiEmitter<'a>,
}

impl<'a, W: Write> CirkwiPoiSerializer<'a, W> {
    /// Bind the generator to a request, a reprojection seam, and a sink.
    pub fn new(
        request: &'a RequestContext,
        transformer: &'a dyn CoordTransformer,
        sink: W,
    ) -> Self {
        Self {
            xml: XmlFeedWriter::new(sink),
            emitter: PoiEmitter {
                request,
                transformer,
            },
        }
    }

    /// Write the whole `<pois version="2">` document and return the sink.
    pub fn serialize(mut self, pois: &[Poi]) -> Result<W, FeedError> {
        self.xml.start_document()?;
        self.xml.start_element("pois", &[("version", "2")])?;
        for poi in pois {
            self.emitter.write_poi(&mut self.xml, poi)?;
        }
        self.xml.end_element("pois")?;
        self.xml.end_document()?;
        debug!("serialized cirkwi poi feed ({} pois)", pois.len());
        Ok(self.xml.into_inner())
    }
}
