//! The `<circuits version="2">` feed.

use std::io::Write;

use log::debug;

use trailhead_core::locale;
use trailhead_core::{CoordTransformer, LocalizedString, TagLookup, Trek, plain_text};

use crate::cirkwi::{PoiEmitter, timestamp};
use crate::error::FeedError;
use crate::fields::{RequestContext, float_repr, write_field, write_medias};
use crate::writer::XmlFeedWriter;

/// The supplementary info fields of a circuit, in feed order.
///
/// A closed list instead of runtime field reflection: each variant knows
/// its accessor and its localized display label, and the array below
/// fixes the emission order of the `informations_complementaires` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrekInfoField {
    Departure,
    Arrival,
    Ambiance,
    Access,
    DisabledInfrastructure,
    AdvisedParking,
    PublicTransport,
    Advice,
}

impl TrekInfoField {
    const ORDERED: [Self; 8] = [
        Self::Departure,
        Self::Arrival,
        Self::Ambiance,
        Self::Access,
        Self::DisabledInfrastructure,
        Self::AdvisedParking,
        Self::PublicTransport,
        Self::Advice,
    ];

    fn value(self, trek: &Trek) -> &LocalizedString {
        match self {
            Self::Departure => &trek.departure,
            Self::Arrival => &trek.arrival,
            Self::Ambiance => &trek.ambiance,
            Self::Access => &trek.access,
            Self::DisabledInfrastructure => &trek.disabled_infrastructure,
            Self::AdvisedParking => &trek.advised_parking,
            Self::PublicTransport => &trek.public_transport,
            Self::Advice => &trek.advice,
        }
    }

    /// Display label in the active locale (French catalogue, English
    /// fallback, like the admin field labels).
    fn label(self) -> &'static str {
        let french = locale::active().as_str() == "fr";
        match self {
            Self::Departure => {
                if french {
                    "Départ"
                } else {
                    "Departure"
                }
            }
            Self::Arrival => {
                if french {
                    "Arrivée"
                } else {
                    "Arrival"
                }
            }
            Self::Ambiance => "Ambiance",
            Self::Access => {
                if french {
                    "Accès"
                } else {
                    "Access"
                }
            }
            Self::DisabledInfrastructure => {
                if french {
                    "Aménagements handicapés"
                } else {
                    "Disabled infrastructure"
                }
            }
            Self::AdvisedParking => {
                if french {
                    "Parking conseillé"
                } else {
                    "Advised parking"
                }
            }
            Self::PublicTransport => {
                if french {
                    "Transports en commun"
                } else {
                    "Public transport"
                }
            }
            Self::Advice => {
                if french {
                    "Recommandations"
                } else {
                    "Advice"
                }
            }
        }
    }
}

/// Streaming generator for the circuit feed.
///
/// Composes the shared [`PoiEmitter`] for the embedded `<pois>` block
/// and the [`TagLookup`] seam for the public tag list.
pub struct CirkwiTrekSerializer<'a, W: Write> {
    xml: XmlFeedWriter<W>,
    emitter: PoiEmitter<'a>,
    tags: &'a dyn TagLookup,
}

impl<'a, W: Write> CirkwiTrekSerializer<'a, W> {
    /// Bind the generator to its collaborators and a sink.
    pub fn new(
        request: &'a RequestContext,
        transformer: &'a dyn CoordTransformer,
        tags: &'a dyn TagLookup,
        sink: W,
    ) -> Self {
        Self {
            xml: XmlFeedWriter::new(sink),
            emitter: PoiEmitter {
                request,
                transformer,
            },
            tags,
        }
    }

    /// Write the whole `<circuits version="2">` document and return the
    /// sink.
    pub fn serialize(mut self, treks: &[Trek]) -> Result<W, FeedError> {
        self.xml.start_document()?;
        self.xml.start_element("circuits", &[("version", "2")])?;
        for trek in treks {
            self.write_circuit(trek)?;
        }
        self.xml.end_element("circuits")?;
        self.xml.end_document()?;
        debug!("serialized cirkwi circuit feed ({} circuits)", treks.len());
        Ok(self.xml.into_inner())
    }

    fn write_circuit(&mut self, trek: &Trek) -> Result<(), FeedError> {
        let created = timestamp(&trek.created);
        let updated = timestamp(&trek.updated);
        let id = trek.id.to_string();
        self.xml.start_element(
            "circuit",
            &[
                ("date_creation", &created),
                ("date_modification", &updated),
                ("id_circuit", &id),
            ],
        )?;

        for lang in &trek.published_locales {
            let _active = locale::activate(lang);
            self.xml
                .start_element("informations", &[("language", lang.as_str())])?;
            write_field(
                &mut self.xml,
                "titre",
                trek.name.localized().unwrap_or_default(),
                &[],
            )?;
            if let Some(description) = trek.merged_description() {
                write_field(&mut self.xml, "description", &description, &[])?;
            }
            write_medias(&mut self.xml, self.emitter.request, &trek.pictures)?;

            self.xml.start_element("informations_complementaires", &[])?;
            for field in TrekInfoField::ORDERED {
                self.write_additional_info(trek, field)?;
            }
            self.xml.end_element("informations_complementaires")?;

            self.write_tags(trek)?;
            self.xml.end_element("informations")?;

            // Emitted once per language block; frozen wire behaviour.
            let metres = trek.length_m.trunc() as i64;
            if metres != 0 {
                write_field(&mut self.xml, "distance", &metres.to_string(), &[])?;
            }
            self.write_locomotions(trek)?;
        }

        self.write_trace(trek)?;

        if !trek.pois.is_empty() {
            self.xml.start_element("pois", &[])?;
            for poi in &trek.pois {
                self.emitter.write_poi(&mut self.xml, poi)?;
            }
            self.xml.end_element("pois")?;
        }
        // Parking location and reference points are not part of this
        // feed; the partner referential has no slot for them.
        self.xml.end_element("circuit")
    }

    fn write_additional_info(
        &mut self,
        trek: &Trek,
        field: TrekInfoField,
    ) -> Result<(), FeedError> {
        let Some(value) = field.value(trek).localized() else {
            return Ok(());
        };
        self.xml.start_element("information_complementaire", &[])?;
        write_field(&mut self.xml, "titre", field.label(), &[])?;
        write_field(&mut self.xml, "description", &plain_text(value), &[])?;
        self.xml.end_element("information_complementaire")
    }

    fn write_tags(&mut self, trek: &Trek) -> Result<(), FeedError> {
        self.xml.start_element("tags_publics", &[])?;
        for tag in self.tags.lookup(&trek.cirkwi_tag_ids()) {
            let eid = tag.eid.to_string();
            write_field(
                &mut self.xml,
                "tag_public",
                "",
                &[("id", &eid), ("nom", &tag.name)],
            )?;
        }
        self.xml.end_element("tags_publics")
    }

    fn write_locomotions(&mut self, trek: &Trek) -> Result<(), FeedError> {
        let mut attrs: Vec<(&str, String)> = Vec::new();
        if let Some(tag) = trek.practice.as_ref().and_then(|p| p.cirkwi.as_ref()) {
            attrs.push(("type", tag.name.clone()));
            attrs.push(("id_locomotion", tag.eid.to_string()));
        }
        // Level zero reads as "no rating", like duration and distance.
        if let Some(level) = trek
            .difficulty
            .as_ref()
            .and_then(|d| d.cirkwi_level)
            .filter(|level| *level != 0)
        {
            attrs.push(("difficulte", level.to_string()));
        }
        if let Some(minutes) = trek.duration_minutes() {
            attrs.push(("duree", minutes.to_string()));
        }
        if attrs.is_empty() {
            return Ok(());
        }
        let borrowed: Vec<(&str, &str)> = attrs
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        self.xml.start_element("locomotions", &[])?;
        write_field(&mut self.xml, "locomotion", "", &borrowed)?;
        self.xml.end_element("locomotions")
    }

    fn write_trace(&mut self, trek: &Trek) -> Result<(), FeedError> {
        let line = self
            .emitter
            .transformer
            .transform_line(&trek.geometry, trek.srid)?;
        self.xml.start_element("trace", &[])?;
        for coord in line.coords() {
            self.xml.start_element("point", &[])?;
            write_field(&mut self.xml, "lat", &float_repr(coord.y), &[])?;
            write_field(&mut self.xml, "lng", &float_repr(coord.x), &[])?;
            self.xml.end_element("point")?;
        }
        self.xml.end_element("trace")
    }
}
