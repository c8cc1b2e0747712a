use thiserror::Error;

use crate::cei::element::Element;
use crate::cei::schema::{
    BackSlot, ChDescSlot, DiplomaticAnalysisSlot, FileDescSlot, PhysicalDescSlot,
    WitnessOrigSlot, BACK_ORDER, CEI_NS, CEI_SCHEMA_LOCATION, CH_DESC_ORDER,
    DIPLOMATIC_ANALYSIS_ORDER, FILE_DESC_ORDER, NO_DATE_TEXT, NO_DATE_VALUE,
    PHYSICAL_DESC_ORDER, WITNESS_ORIG_ORDER, WITNESS_TYPE, XSI_NS,
};
use crate::charter::{Charter, CharterGroup, PersonRef, Seal, SealDesc};
use crate::types::DateValue;

/// Errors raised while mapping a model instance onto the CEI schema.
///
/// Construction-time validation normally rules these out; they stay
/// reachable for instances that bypassed the builders (deserialized data).
/// Silent omission of mandatory archival metadata is not an option, so the
/// mapping fails instead.
#[derive(Debug, Error)]
pub enum SchemaMappingError {
    #[error("charter has an empty identifier, cannot emit cei:idno")]
    MissingIdentifier,

    #[error("charter group has an empty name, cannot emit cei:title")]
    MissingGroupName,
}

/// Maps charters and charter groups onto CEI element trees.
///
/// Pure and stateless: every call walks its input and returns a fresh
/// tree. The only knob is whether root elements advertise the schema
/// location.
#[derive(Debug, Clone, Default)]
pub struct CeiSerializer {
    add_schema_location: bool,
}

impl CeiSerializer {
    pub fn new() -> Self {
        CeiSerializer::default()
    }

    /// Also stamp `xsi:schemaLocation` (and the xsi namespace) on root
    /// elements.
    pub fn with_schema_location(mut self) -> Self {
        self.add_schema_location = true;
        self
    }

    /// Serialize one charter as a standalone `cei:text` document root.
    pub fn charter_to_xml(&self, charter: &Charter) -> Result<Element, SchemaMappingError> {
        Ok(self.namespaced(self.charter_element(charter)?))
    }

    /// Serialize a charter group as a `cei:cei` document root wrapping one
    /// `cei:text` per charter, in the group's stored order.
    pub fn group_to_xml(&self, group: &CharterGroup) -> Result<Element, SchemaMappingError> {
        if group.name().is_empty() {
            return Err(SchemaMappingError::MissingGroupName);
        }
        let mut charters = Vec::with_capacity(group.charters().len());
        for charter in group.charters() {
            charters.push(self.charter_element(charter)?);
        }
        Ok(self
            .namespaced(Element::new("cei:cei"))
            .child(self.tei_header(group))
            .child(
                Element::new("cei:text")
                    .child(Element::new("cei:group").children_from(charters)),
            ))
    }

    fn namespaced(&self, element: Element) -> Element {
        let element = element.attr("xmlns:cei", CEI_NS);
        if self.add_schema_location {
            element
                .attr("xmlns:xsi", XSI_NS)
                .attr("xsi:schemaLocation", CEI_SCHEMA_LOCATION)
        } else {
            element
        }
    }

    // ----- charter ------------------------------------------------------

    fn charter_element(&self, charter: &Charter) -> Result<Element, SchemaMappingError> {
        if charter.id().text().is_empty() {
            return Err(SchemaMappingError::MissingIdentifier);
        }
        Ok(Element::new("cei:text")
            .attr("type", "charter")
            .child(self.front(charter))
            .child(self.body(charter))
            .child(self.back(charter)))
    }

    /// `cei:front` is structurally mandatory and may be empty.
    fn front(&self, charter: &Charter) -> Element {
        Element::new("cei:front").maybe(self.source_desc(charter))
    }

    fn source_desc(&self, charter: &Charter) -> Option<Element> {
        let mut children = Vec::new();
        if !charter.abstract_sources().is_empty() {
            children.push(
                Element::new("cei:sourceDescRegest")
                    .children_from(bibls(charter.abstract_sources())),
            );
        }
        if !charter.transcription_sources().is_empty() {
            children.push(
                Element::new("cei:sourceDescVolltext")
                    .children_from(bibls(charter.transcription_sources())),
            );
        }
        wrap_non_empty("cei:sourceDesc", children)
    }

    fn body(&self, charter: &Charter) -> Element {
        Element::new("cei:body")
            .child(self.idno(charter))
            .maybe(self.ch_desc(charter))
            .maybe(self.tenor(charter))
    }

    fn idno(&self, charter: &Charter) -> Element {
        let mut idno = Element::new("cei:idno").attr("id", charter.id().norm());
        if let Some(old) = charter.id_old() {
            idno = idno.attr("old", old);
        }
        idno.text(charter.id().text())
    }

    fn ch_desc(&self, charter: &Charter) -> Option<Element> {
        let mut children = Vec::new();
        for slot in CH_DESC_ORDER {
            match slot {
                ChDescSlot::Abstract => children.extend(self.abstract_element(charter)),
                ChDescSlot::Issued => children.push(self.issued(charter)),
                ChDescSlot::WitnessOrig => children.extend(self.witness_orig(charter)),
                ChDescSlot::DiplomaticAnalysis => {
                    children.extend(self.diplomatic_analysis(charter))
                }
                ChDescSlot::Language => children.extend(
                    charter
                        .language()
                        .map(|language| Element::new("cei:lang_MOM").text(language)),
                ),
            }
        }
        wrap_non_empty("cei:chDesc", children)
    }

    /// `cei:abstract` holds the summary text plus the parties: recipient
    /// first, then issuers, as mixed content.
    fn abstract_element(&self, charter: &Charter) -> Option<Element> {
        let mut parties = Vec::new();
        if let Some(recipient) = charter.recipient() {
            parties.push(person_element("cei:recipient", recipient));
        }
        for issuer in charter.issuers() {
            parties.push(person_element("cei:issuer", issuer));
        }
        if charter.abstract_text().is_none() && parties.is_empty() {
            return None;
        }
        let mut element = Element::new("cei:abstract");
        if let Some(text) = charter.abstract_text() {
            element = element.text(text);
        }
        Some(element.children_from(parties))
    }

    /// The dating chain is structurally mandatory: a charter without a
    /// date still gets `cei:issued` with a placeholder date element.
    fn issued(&self, charter: &Charter) -> Element {
        let mut issued = Element::new("cei:issued");
        if let Some(place) = charter.issued_place() {
            issued = issued.child(Element::new("cei:placeName").text(place));
        }
        issued.child(self.date_element(charter.date()))
    }

    fn date_element(&self, date: Option<&DateValue>) -> Element {
        match date {
            Some(DateValue::Exact(day)) => Element::new("cei:date")
                .attr("value", day.iso())
                .text(day.iso()),
            Some(DateValue::Range { from, to }) => Element::new("cei:dateRange")
                .attr("from", from.iso())
                .attr("to", to.iso())
                .text(format!("{} - {}", from.iso(), to.iso())),
            Some(DateValue::Text(phrase)) => Element::new("cei:date")
                .attr("value", NO_DATE_VALUE)
                .text(phrase.as_str()),
            None => Element::new("cei:date")
                .attr("value", NO_DATE_VALUE)
                .text(NO_DATE_TEXT),
        }
    }

    fn witness_orig(&self, charter: &Charter) -> Option<Element> {
        let mut children = Vec::new();
        for slot in WITNESS_ORIG_ORDER {
            match slot {
                WitnessOrigSlot::Tradition => children.extend(
                    charter
                        .tradition()
                        .map(|tradition| Element::new("cei:traditioForm").text(tradition)),
                ),
                WitnessOrigSlot::ArchIdentifier => {
                    children.extend(self.arch_identifier(charter))
                }
                WitnessOrigSlot::Auth => children.extend(self.auth(charter)),
                WitnessOrigSlot::PhysicalDesc => children.extend(self.physical_desc(charter)),
                WitnessOrigSlot::Notes => children.extend(
                    charter
                        .chancellary_remarks()
                        .iter()
                        .map(|remark| Element::new("cei:nota").text(remark.as_str())),
                ),
                WitnessOrigSlot::Figures => children.extend(
                    charter.graphic_urls().iter().map(|url| {
                        Element::new("cei:figure")
                            .child(Element::new("cei:graphic").attr("url", url.as_str()))
                    }),
                ),
            }
        }
        wrap_non_empty("cei:witnessOrig", children)
    }

    fn arch_identifier(&self, charter: &Charter) -> Option<Element> {
        let mut children = Vec::new();
        if let Some(archive) = charter.archive() {
            children.push(Element::new("cei:arch").text(archive));
        }
        if let Some(link) = charter.external_link() {
            children.push(Element::new("cei:ref").attr("target", link));
        }
        wrap_non_empty("cei:archIdentifier", children)
    }

    fn auth(&self, charter: &Charter) -> Option<Element> {
        let mut children = Vec::new();
        if let Some(notarial) = charter.notarial_authentication() {
            children.push(Element::new("cei:notariusDesc").text(notarial));
        }
        if let Some(seal_desc) = self.seal_desc(charter.seals()) {
            children.push(seal_desc);
        }
        wrap_non_empty("cei:auth", children)
    }

    fn physical_desc(&self, charter: &Charter) -> Option<Element> {
        let mut children = Vec::new();
        for slot in PHYSICAL_DESC_ORDER {
            let child = match slot {
                PhysicalDescSlot::Material => charter
                    .material()
                    .map(|material| Element::new("cei:material").text(material)),
                PhysicalDescSlot::Dimensions => charter
                    .dimensions()
                    .map(|dimensions| Element::new("cei:dimensions").text(dimensions)),
                PhysicalDescSlot::Condition => charter
                    .condition()
                    .map(|condition| Element::new("cei:condition").text(condition)),
            };
            children.extend(child);
        }
        wrap_non_empty("cei:physicalDesc", children)
    }

    fn seal_desc(&self, seals: Option<&SealDesc>) -> Option<Element> {
        match seals {
            None => None,
            Some(SealDesc::Text(text)) => {
                Some(Element::new("cei:sealDesc").text(text.as_str()))
            }
            Some(SealDesc::Seals(seals)) => wrap_non_empty(
                "cei:sealDesc",
                seals.iter().filter_map(seal_element).collect(),
            ),
        }
    }

    fn diplomatic_analysis(&self, charter: &Charter) -> Option<Element> {
        let mut children = Vec::new();
        for slot in DIPLOMATIC_ANALYSIS_ORDER {
            match slot {
                DiplomaticAnalysisSlot::Literature => children
                    .extend(bibl_list("cei:listBibl", charter.literature())),
                DiplomaticAnalysisSlot::Editions => children.extend(bibl_list(
                    "cei:listBiblEdition",
                    charter.literature_editions(),
                )),
                DiplomaticAnalysisSlot::Abstracts => children.extend(bibl_list(
                    "cei:listBiblRegest",
                    charter.literature_abstracts(),
                )),
                DiplomaticAnalysisSlot::Depictions => children.extend(bibl_list(
                    "cei:listBiblFaksimile",
                    charter.literature_depictions(),
                )),
                DiplomaticAnalysisSlot::Secondary => children.extend(bibl_list(
                    "cei:listBiblErw",
                    charter.literature_secondary(),
                )),
                DiplomaticAnalysisSlot::DateQuote => children.extend(
                    charter.date_quote().map(|quote| {
                        Element::new("cei:quoteOriginaldatierung").text(quote)
                    }),
                ),
                DiplomaticAnalysisSlot::Comments => children.extend(
                    charter
                        .comments()
                        .iter()
                        .map(|comment| Element::new("cei:p").text(comment.as_str())),
                ),
            }
        }
        wrap_non_empty("cei:diplomaticAnalysis", children)
    }

    fn tenor(&self, charter: &Charter) -> Option<Element> {
        charter
            .transcription()
            .map(|transcription| Element::new("cei:tenor").text(transcription))
    }

    /// `cei:back` is structurally mandatory and may be empty.
    fn back(&self, charter: &Charter) -> Element {
        let mut children = Vec::new();
        for slot in BACK_ORDER {
            match slot {
                BackSlot::Witnesses => children.extend(
                    charter
                        .witnesses()
                        .iter()
                        .map(|witness| pers_name(witness, Some(WITNESS_TYPE))),
                ),
                BackSlot::Persons => children.extend(
                    charter
                        .index_persons()
                        .iter()
                        .map(|person| pers_name(person, None)),
                ),
                BackSlot::Organizations => children.extend(
                    charter
                        .index_organizations()
                        .iter()
                        .map(|name| Element::new("cei:orgName").text(name.as_str())),
                ),
                BackSlot::Places => children.extend(
                    charter
                        .index_places()
                        .iter()
                        .map(|name| Element::new("cei:placeName").text(name.as_str())),
                ),
                BackSlot::GeoFeatures => children.extend(
                    charter
                        .index_geo_features()
                        .iter()
                        .map(|name| Element::new("cei:geogName").text(name.as_str())),
                ),
                BackSlot::IndexTerms => children.extend(
                    charter
                        .index_terms()
                        .iter()
                        .map(|term| Element::new("cei:index").text(term.as_str())),
                ),
                BackSlot::Footnotes => {
                    if !charter.footnotes().is_empty() {
                        children.push(Element::new("cei:divNotes").children_from(
                            charter.footnotes().iter().map(|footnote| {
                                Element::new("cei:note").text(footnote.as_str())
                            }),
                        ));
                    }
                }
            }
        }
        Element::new("cei:back").children_from(children)
    }

    // ----- group --------------------------------------------------------

    fn tei_header(&self, group: &CharterGroup) -> Element {
        let mut children = Vec::new();
        for slot in FILE_DESC_ORDER {
            match slot {
                FileDescSlot::Title => children.push(
                    Element::new("cei:titleStmt")
                        .child(Element::new("cei:title").text(group.name())),
                ),
                FileDescSlot::Publication => children.extend(
                    group.repository().map(|repository| {
                        Element::new("cei:publicationStmt")
                            .child(Element::new("cei:p").text(repository))
                    }),
                ),
                FileDescSlot::Source => children.extend(
                    group.description().map(|description| {
                        Element::new("cei:sourceDesc")
                            .child(Element::new("cei:p").text(description))
                    }),
                ),
            }
        }
        Element::new("cei:teiHeader")
            .child(Element::new("cei:fileDesc").children_from(children))
    }
}

fn wrap_non_empty(name: &'static str, children: Vec<Element>) -> Option<Element> {
    if children.is_empty() {
        None
    } else {
        Some(Element::new(name).children_from(children))
    }
}

fn bibls(entries: &[String]) -> Vec<Element> {
    entries
        .iter()
        .map(|entry| Element::new("cei:bibl").text(entry.as_str()))
        .collect()
}

fn bibl_list(name: &'static str, entries: &[String]) -> Option<Element> {
    if entries.is_empty() {
        None
    } else {
        Some(Element::new(name).children_from(bibls(entries)))
    }
}

fn person_element(name: &'static str, person: &PersonRef) -> Element {
    let mut element = Element::new(name);
    if let Some(key) = person.key.as_deref() {
        element = element.attr("key", key);
    }
    element.text(person.name.as_str())
}

fn pers_name(person: &PersonRef, kind: Option<&'static str>) -> Element {
    let mut element = Element::new("cei:persName");
    if let Some(kind) = kind {
        element = element.attr("type", kind);
    }
    if let Some(key) = person.key.as_deref() {
        element = element.attr("key", key);
    }
    element.text(person.name.as_str())
}

fn seal_element(seal: &Seal) -> Option<Element> {
    if seal.is_empty() {
        return None;
    }
    let mut children = Vec::new();
    if let Some(condition) = seal.condition.as_deref() {
        children.push(Element::new("cei:sealCondition").text(condition));
    }
    if let Some(dimensions) = seal.dimensions.as_deref() {
        children.push(Element::new("cei:sealDimensions").text(dimensions));
    }
    for legend in &seal.legends {
        let mut element = Element::new("cei:legend");
        if let Some(place) = legend.place.as_deref() {
            element = element.attr("place", place);
        }
        children.push(element.text(legend.text.as_str()));
    }
    if let Some(material) = seal.material.as_deref() {
        children.push(Element::new("cei:sealMaterial").text(material));
    }
    if let Some(sigillant) = &seal.sigillant {
        children.push(person_element("cei:sigillant", sigillant));
    }
    Some(Element::new("cei:seal").children_from(children))
}
