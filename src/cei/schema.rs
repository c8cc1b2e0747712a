//! CEI vocabulary constants and content-model order tables.
//!
//! The CEI schema fixes the order in which children appear inside the
//! composite elements. That order is data here, not code sequence: the
//! serializer walks these tables, so the contract can be audited and
//! tested on its own.

/// The CEI namespace.
pub const CEI_NS: &str = "http://www.monasterium.net/NS/cei";

/// Prefix used for every CEI element.
pub const CEI_PREFIX: &str = "cei";

/// XML Schema instance namespace, used for `xsi:schemaLocation`.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Value of `xsi:schemaLocation` when schema-location emission is enabled.
pub const CEI_SCHEMA_LOCATION: &str =
    "http://www.monasterium.net/NS/cei http://www.monasterium.net/NS/cei";

/// Text content of the placeholder date emitted for charters without a
/// date. The dating chain is structurally mandatory.
pub const NO_DATE_TEXT: &str = "No date";

/// `@value` of the placeholder date, per mom-ca data practice.
pub const NO_DATE_VALUE: &str = "99999999";

/// `@type` stamped on witness `cei:persName` entries.
pub const WITNESS_TYPE: &str = "Zeuge";

/// Child slots of `cei:chDesc`, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChDescSlot {
    Abstract,
    Issued,
    WitnessOrig,
    DiplomaticAnalysis,
    Language,
}

pub const CH_DESC_ORDER: [ChDescSlot; 5] = [
    ChDescSlot::Abstract,
    ChDescSlot::Issued,
    ChDescSlot::WitnessOrig,
    ChDescSlot::DiplomaticAnalysis,
    ChDescSlot::Language,
];

/// Child slots of `cei:witnessOrig`, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessOrigSlot {
    Tradition,
    ArchIdentifier,
    Auth,
    PhysicalDesc,
    Notes,
    Figures,
}

pub const WITNESS_ORIG_ORDER: [WitnessOrigSlot; 6] = [
    WitnessOrigSlot::Tradition,
    WitnessOrigSlot::ArchIdentifier,
    WitnessOrigSlot::Auth,
    WitnessOrigSlot::PhysicalDesc,
    WitnessOrigSlot::Notes,
    WitnessOrigSlot::Figures,
];

/// Child slots of `cei:physicalDesc`, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalDescSlot {
    Material,
    Dimensions,
    Condition,
}

pub const PHYSICAL_DESC_ORDER: [PhysicalDescSlot; 3] = [
    PhysicalDescSlot::Material,
    PhysicalDescSlot::Dimensions,
    PhysicalDescSlot::Condition,
];

/// Child slots of `cei:diplomaticAnalysis`, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiplomaticAnalysisSlot {
    Literature,
    Editions,
    Abstracts,
    Depictions,
    Secondary,
    DateQuote,
    Comments,
}

pub const DIPLOMATIC_ANALYSIS_ORDER: [DiplomaticAnalysisSlot; 7] = [
    DiplomaticAnalysisSlot::Literature,
    DiplomaticAnalysisSlot::Editions,
    DiplomaticAnalysisSlot::Abstracts,
    DiplomaticAnalysisSlot::Depictions,
    DiplomaticAnalysisSlot::Secondary,
    DiplomaticAnalysisSlot::DateQuote,
    DiplomaticAnalysisSlot::Comments,
];

/// Child slots of `cei:back`, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackSlot {
    Witnesses,
    Persons,
    Organizations,
    Places,
    GeoFeatures,
    IndexTerms,
    Footnotes,
}

pub const BACK_ORDER: [BackSlot; 7] = [
    BackSlot::Witnesses,
    BackSlot::Persons,
    BackSlot::Organizations,
    BackSlot::Places,
    BackSlot::GeoFeatures,
    BackSlot::IndexTerms,
    BackSlot::Footnotes,
];

/// Child slots of `cei:fileDesc` in a group header, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDescSlot {
    Title,
    Publication,
    Source,
}

pub const FILE_DESC_ORDER: [FileDescSlot; 3] = [
    FileDescSlot::Title,
    FileDescSlot::Publication,
    FileDescSlot::Source,
];
