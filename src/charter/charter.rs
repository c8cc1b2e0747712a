use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::charter::{opt_text, text_list, PersonRef, SealDesc};
use crate::types::{CharterId, DateValue, ValidationError};

/// One historical charter record.
///
/// Immutable once built; construction goes through [`Charter::builder`],
/// which is where the invariants are enforced. "Updating" a charter means
/// building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charter {
    id: CharterId,
    id_old: Option<String>,
    abstract_text: Option<String>,
    abstract_sources: Vec<String>,
    archive: Option<String>,
    chancellary_remarks: Vec<String>,
    comments: Vec<String>,
    condition: Option<String>,
    date: Option<DateValue>,
    date_quote: Option<String>,
    dimensions: Option<String>,
    external_link: Option<String>,
    footnotes: Vec<String>,
    graphic_urls: Vec<String>,
    index_terms: Vec<String>,
    index_geo_features: Vec<String>,
    index_organizations: Vec<String>,
    index_persons: Vec<PersonRef>,
    index_places: Vec<String>,
    issued_place: Option<String>,
    issuers: Vec<PersonRef>,
    language: Option<String>,
    literature: Vec<String>,
    literature_abstracts: Vec<String>,
    literature_depictions: Vec<String>,
    literature_editions: Vec<String>,
    literature_secondary: Vec<String>,
    material: Option<String>,
    notarial_authentication: Option<String>,
    recipient: Option<PersonRef>,
    seals: Option<SealDesc>,
    tradition: Option<String>,
    transcription: Option<String>,
    transcription_sources: Vec<String>,
    witnesses: Vec<PersonRef>,
}

impl Charter {
    /// Start building a charter from its human-readable identifier.
    pub fn builder(id_text: impl Into<String>) -> CharterBuilder {
        CharterBuilder::new(id_text)
    }

    pub fn id(&self) -> &CharterId {
        &self.id
    }

    pub fn id_old(&self) -> Option<&str> {
        self.id_old.as_deref()
    }

    pub fn abstract_text(&self) -> Option<&str> {
        self.abstract_text.as_deref()
    }

    pub fn abstract_sources(&self) -> &[String] {
        &self.abstract_sources
    }

    pub fn archive(&self) -> Option<&str> {
        self.archive.as_deref()
    }

    pub fn chancellary_remarks(&self) -> &[String] {
        &self.chancellary_remarks
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    pub fn date(&self) -> Option<&DateValue> {
        self.date.as_ref()
    }

    pub fn date_quote(&self) -> Option<&str> {
        self.date_quote.as_deref()
    }

    pub fn dimensions(&self) -> Option<&str> {
        self.dimensions.as_deref()
    }

    pub fn external_link(&self) -> Option<&str> {
        self.external_link.as_deref()
    }

    pub fn footnotes(&self) -> &[String] {
        &self.footnotes
    }

    pub fn graphic_urls(&self) -> &[String] {
        &self.graphic_urls
    }

    pub fn index_terms(&self) -> &[String] {
        &self.index_terms
    }

    pub fn index_geo_features(&self) -> &[String] {
        &self.index_geo_features
    }

    pub fn index_organizations(&self) -> &[String] {
        &self.index_organizations
    }

    pub fn index_persons(&self) -> &[PersonRef] {
        &self.index_persons
    }

    pub fn index_places(&self) -> &[String] {
        &self.index_places
    }

    pub fn issued_place(&self) -> Option<&str> {
        self.issued_place.as_deref()
    }

    pub fn issuers(&self) -> &[PersonRef] {
        &self.issuers
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn literature(&self) -> &[String] {
        &self.literature
    }

    pub fn literature_abstracts(&self) -> &[String] {
        &self.literature_abstracts
    }

    pub fn literature_depictions(&self) -> &[String] {
        &self.literature_depictions
    }

    pub fn literature_editions(&self) -> &[String] {
        &self.literature_editions
    }

    pub fn literature_secondary(&self) -> &[String] {
        &self.literature_secondary
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn notarial_authentication(&self) -> Option<&str> {
        self.notarial_authentication.as_deref()
    }

    pub fn recipient(&self) -> Option<&PersonRef> {
        self.recipient.as_ref()
    }

    pub fn seals(&self) -> Option<&SealDesc> {
        self.seals.as_ref()
    }

    pub fn tradition(&self) -> Option<&str> {
        self.tradition.as_deref()
    }

    pub fn transcription(&self) -> Option<&str> {
        self.transcription.as_deref()
    }

    pub fn transcription_sources(&self) -> &[String] {
        &self.transcription_sources
    }

    pub fn witnesses(&self) -> &[PersonRef] {
        &self.witnesses
    }
}

/// Builder for [`Charter`].
///
/// All setters take ownership and return the builder; empty strings for
/// optional text fields count as absent. [`CharterBuilder::build`] checks
/// the construction invariants: non-empty identifier, plausible external
/// link, unique witness keys.
#[derive(Debug, Clone, Default)]
pub struct CharterBuilder {
    id_text: String,
    id_norm: Option<String>,
    id_old: Option<String>,
    abstract_text: Option<String>,
    abstract_sources: Vec<String>,
    archive: Option<String>,
    chancellary_remarks: Vec<String>,
    comments: Vec<String>,
    condition: Option<String>,
    date: Option<DateValue>,
    date_quote: Option<String>,
    dimensions: Option<String>,
    external_link: Option<String>,
    footnotes: Vec<String>,
    graphic_urls: Vec<String>,
    index_terms: Vec<String>,
    index_geo_features: Vec<String>,
    index_organizations: Vec<String>,
    index_persons: Vec<PersonRef>,
    index_places: Vec<String>,
    issued_place: Option<String>,
    issuers: Vec<PersonRef>,
    language: Option<String>,
    literature: Vec<String>,
    literature_abstracts: Vec<String>,
    literature_depictions: Vec<String>,
    literature_editions: Vec<String>,
    literature_secondary: Vec<String>,
    material: Option<String>,
    notarial_authentication: Option<String>,
    recipient: Option<PersonRef>,
    seals: Option<SealDesc>,
    tradition: Option<String>,
    transcription: Option<String>,
    transcription_sources: Vec<String>,
    witnesses: Vec<PersonRef>,
}

impl CharterBuilder {
    pub fn new(id_text: impl Into<String>) -> Self {
        CharterBuilder {
            id_text: id_text.into(),
            ..CharterBuilder::default()
        }
    }

    /// Normalized identifier override; percent-encoded on output.
    pub fn id_norm(mut self, id_norm: impl Into<String>) -> Self {
        self.id_norm = opt_text(id_norm);
        self
    }

    /// An old, now obsolete archival signature.
    pub fn id_old(mut self, id_old: impl Into<String>) -> Self {
        self.id_old = opt_text(id_old);
        self
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = opt_text(text);
        self
    }

    pub fn abstract_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abstract_sources = text_list(sources);
        self
    }

    /// Name of the archive holding the original.
    pub fn archive(mut self, archive: impl Into<String>) -> Self {
        self.archive = opt_text(archive);
        self
    }

    pub fn chancellary_remarks<I, S>(mut self, remarks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chancellary_remarks = text_list(remarks);
        self
    }

    /// Paragraphs of diplomatic commentary.
    pub fn comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = text_list(comments);
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = opt_text(condition);
        self
    }

    pub fn date(mut self, date: DateValue) -> Self {
        self.date = Some(date);
        self
    }

    /// The dating phrase as it appears in the original text.
    pub fn date_quote(mut self, quote: impl Into<String>) -> Self {
        self.date_quote = opt_text(quote);
        self
    }

    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = opt_text(dimensions);
        self
    }

    /// Link to an external representation of the charter. Validated for a
    /// plausible `http(s)` URL shape at build time.
    pub fn external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = opt_text(link);
        self
    }

    pub fn footnotes<I, S>(mut self, footnotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footnotes = text_list(footnotes);
        self
    }

    /// URLs or file names of images of the charter.
    pub fn graphic_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.graphic_urls = text_list(urls);
        self
    }

    pub fn index_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_terms = text_list(terms);
        self
    }

    pub fn index_geo_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_geo_features = text_list(features);
        self
    }

    pub fn index_organizations<I, S>(mut self, organizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_organizations = text_list(organizations);
        self
    }

    pub fn index_persons<I, P>(mut self, persons: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PersonRef>,
    {
        self.index_persons = persons.into_iter().map(Into::into).collect();
        self
    }

    pub fn index_places<I, S>(mut self, places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_places = text_list(places);
        self
    }

    pub fn issued_place(mut self, place: impl Into<String>) -> Self {
        self.issued_place = opt_text(place);
        self
    }

    /// Append one issuer.
    pub fn issuer(mut self, issuer: impl Into<PersonRef>) -> Self {
        self.issuers.push(issuer.into());
        self
    }

    pub fn issuers<I, P>(mut self, issuers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PersonRef>,
    {
        self.issuers = issuers.into_iter().map(Into::into).collect();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = opt_text(language);
        self
    }

    pub fn literature<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literature = text_list(entries);
        self
    }

    pub fn literature_abstracts<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literature_abstracts = text_list(entries);
        self
    }

    pub fn literature_depictions<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literature_depictions = text_list(entries);
        self
    }

    pub fn literature_editions<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literature_editions = text_list(entries);
        self
    }

    pub fn literature_secondary<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literature_secondary = text_list(entries);
        self
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = opt_text(material);
        self
    }

    pub fn notarial_authentication(mut self, text: impl Into<String>) -> Self {
        self.notarial_authentication = opt_text(text);
        self
    }

    pub fn recipient(mut self, recipient: impl Into<PersonRef>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn seals(mut self, seals: impl Into<SealDesc>) -> Self {
        let seals = seals.into();
        // An empty free-text description carries no information.
        self.seals = match seals {
            SealDesc::Text(text) if text.is_empty() => None,
            other => Some(other),
        };
        self
    }

    /// Status of tradition: original, copy, or any free text.
    pub fn tradition(mut self, tradition: impl Into<String>) -> Self {
        self.tradition = opt_text(tradition);
        self
    }

    pub fn transcription(mut self, transcription: impl Into<String>) -> Self {
        self.transcription = opt_text(transcription);
        self
    }

    pub fn transcription_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transcription_sources = text_list(sources);
        self
    }

    /// Append one witness. Order is archival order and is preserved.
    pub fn witness(mut self, witness: impl Into<PersonRef>) -> Self {
        self.witnesses.push(witness.into());
        self
    }

    pub fn witnesses<I, P>(mut self, witnesses: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PersonRef>,
    {
        self.witnesses = witnesses.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<Charter, ValidationError> {
        let id = match self.id_norm {
            Some(norm) => CharterId::with_norm(self.id_text, norm)?,
            None => CharterId::new(self.id_text)?,
        };
        if let Some(link) = &self.external_link {
            if !looks_like_url(link) {
                return Err(ValidationError::InvalidExternalLink(link.clone()));
            }
        }
        let mut seen_keys = BTreeSet::new();
        for witness in &self.witnesses {
            if let Some(key) = &witness.key {
                if !seen_keys.insert(key.as_str()) {
                    return Err(ValidationError::DuplicateWitnessKey(key.clone()));
                }
            }
        }
        Ok(Charter {
            id,
            id_old: self.id_old,
            abstract_text: self.abstract_text,
            abstract_sources: self.abstract_sources,
            archive: self.archive,
            chancellary_remarks: self.chancellary_remarks,
            comments: self.comments,
            condition: self.condition,
            date: self.date,
            date_quote: self.date_quote,
            dimensions: self.dimensions,
            external_link: self.external_link,
            footnotes: self.footnotes,
            graphic_urls: self.graphic_urls,
            index_terms: self.index_terms,
            index_geo_features: self.index_geo_features,
            index_organizations: self.index_organizations,
            index_persons: self.index_persons,
            index_places: self.index_places,
            issued_place: self.issued_place,
            issuers: self.issuers,
            language: self.language,
            literature: self.literature,
            literature_abstracts: self.literature_abstracts,
            literature_depictions: self.literature_depictions,
            literature_editions: self.literature_editions,
            literature_secondary: self.literature_secondary,
            material: self.material,
            notarial_authentication: self.notarial_authentication,
            recipient: self.recipient,
            seals: self.seals,
            tradition: self.tradition,
            transcription: self.transcription,
            transcription_sources: self.transcription_sources,
            witnesses: self.witnesses,
        })
    }
}

/// A deliberately loose shape check: scheme, then at least one character,
/// a dot, and at least one more character. Full URL parsing is not the
/// model's business.
fn looks_like_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));
    match rest {
        Some(rest) => rest
            .find('.')
            .is_some_and(|dot| dot > 0 && dot + 1 < rest.len()),
        None => false,
    }
}
