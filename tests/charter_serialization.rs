use cei_core::cei::{CeiSerializer, Element, SchemaMappingError};
use cei_core::charter::{Charter, PersonRef, Seal, SealLegend};
use cei_core::types::{CalendarDate, DateValue};

fn serialize(charter: &Charter) -> Element {
    CeiSerializer::new().charter_to_xml(charter).unwrap()
}

fn minimal() -> Charter {
    Charter::builder("1").build().unwrap()
}

#[test]
fn has_correct_base_structure() {
    let xml = serialize(&minimal());
    assert_eq!(xml.name(), "cei:text");
    assert_eq!(xml.attribute("type"), Some("charter"));
    assert_eq!(
        xml.attribute("xmlns:cei"),
        Some("http://www.monasterium.net/NS/cei")
    );

    let children: Vec<&str> = xml.child_elements().map(|child| child.name()).collect();
    assert_eq!(children, ["cei:front", "cei:body", "cei:back"]);
}

#[test]
fn schema_location_is_opt_in() {
    let charter = minimal();
    let plain = CeiSerializer::new().charter_to_xml(&charter).unwrap();
    assert_eq!(plain.attribute("xsi:schemaLocation"), None);

    let stamped = CeiSerializer::new()
        .with_schema_location()
        .charter_to_xml(&charter)
        .unwrap();
    assert_eq!(
        stamped.attribute("xsi:schemaLocation"),
        Some("http://www.monasterium.net/NS/cei http://www.monasterium.net/NS/cei")
    );
    assert_eq!(
        stamped.attribute("xmlns:xsi"),
        Some("http://www.w3.org/2001/XMLSchema-instance")
    );
}

#[test]
fn idno_carries_normalized_id_and_old_signature() {
    let charter = Charter::builder("1307 II 22")
        .id_old("123456 α")
        .build()
        .unwrap();
    let xml = serialize(&charter);
    let idno = xml.find("cei:idno").unwrap();
    assert_eq!(idno.attribute("id"), Some("1307%20II%2022"));
    assert_eq!(idno.attribute("old"), Some("123456 α"));
    assert_eq!(idno.text_content(), "1307 II 22");
}

#[test]
fn abstract_holds_text_recipient_and_issuers() {
    let charter = Charter::builder("1")
        .abstract_text("Konrad von Lintz beurkundet den vorstehenden Vertrag.")
        .recipient("Heinrich, des Praitenvelders Schreiber")
        .issuer(PersonRef::new("Konrad von Lintz").with_key("konrad-1"))
        .build()
        .unwrap();
    let xml = serialize(&charter);

    let abstract_xml = xml.find("cei:abstract").unwrap();
    assert_eq!(
        abstract_xml.text_content(),
        "Konrad von Lintz beurkundet den vorstehenden Vertrag."
    );

    let children: Vec<&str> = abstract_xml
        .child_elements()
        .map(|child| child.name())
        .collect();
    assert_eq!(children, ["cei:recipient", "cei:issuer"]);

    let issuer = abstract_xml.find("cei:issuer").unwrap();
    assert_eq!(issuer.text_content(), "Konrad von Lintz");
    assert_eq!(issuer.attribute("key"), Some("konrad-1"));
}

#[test]
fn omitted_issuer_produces_no_element_at_all() {
    let charter = Charter::builder("1")
        .abstract_text("A grant of land to the monastery.")
        .build()
        .unwrap();
    let xml = serialize(&charter);
    assert!(xml.find("cei:issuer").is_none());
    assert!(xml.find("cei:recipient").is_none());
}

#[test]
fn issuer_without_abstract_text_still_appears() {
    // An abstract element with party children but no summary text beats
    // dropping recorded archival metadata on the floor.
    let charter = Charter::builder("1").issuer("Konrad von Lintz").build().unwrap();
    let xml = serialize(&charter);
    let abstract_xml = xml.find("cei:abstract").unwrap();
    assert_eq!(abstract_xml.text_content(), "");
    assert_eq!(
        abstract_xml.find("cei:issuer").unwrap().text_content(),
        "Konrad von Lintz"
    );
}

#[test]
fn missing_date_emits_the_documented_placeholder() {
    let xml = serialize(&minimal());
    let issued = xml.find("cei:issued").unwrap();
    let date = issued.find("cei:date").unwrap();
    assert_eq!(date.attribute("value"), Some("99999999"));
    assert_eq!(date.text_content(), "No date");
}

#[test]
fn exact_date_renders_with_iso_value_attribute() {
    let charter = Charter::builder("1")
        .date(DateValue::exact(CalendarDate::new(1307, 2, 22).unwrap()))
        .build()
        .unwrap();
    let xml = serialize(&charter);
    let date = xml.find("cei:date").unwrap();
    assert_eq!(date.attribute("value"), Some("1307-02-22"));
    assert_eq!(date.text_content(), "1307-02-22");
}

#[test]
fn date_range_renders_with_from_and_to_attributes() {
    let charter = Charter::builder("1")
        .date(DateValue::parse_range("13000101", "13001231").unwrap())
        .build()
        .unwrap();
    let xml = serialize(&charter);
    assert!(xml.find("cei:date").is_none());
    let range = xml.find("cei:dateRange").unwrap();
    assert_eq!(range.attribute("from"), Some("1300-01-01"));
    assert_eq!(range.attribute("to"), Some("1300-12-31"));
    assert_eq!(range.text_content(), "1300-01-01 - 1300-12-31");
}

#[test]
fn text_date_renders_without_a_normalized_value() {
    let charter = Charter::builder("1")
        .date(DateValue::text("Sine dato").unwrap())
        .build()
        .unwrap();
    let xml = serialize(&charter);
    let date = xml.find("cei:date").unwrap();
    assert_eq!(date.attribute("value"), Some("99999999"));
    assert_eq!(date.text_content(), "Sine dato");
}

#[test]
fn issued_place_precedes_the_date() {
    let charter = Charter::builder("1")
        .issued_place("Wiener Neustadt")
        .date(DateValue::exact(CalendarDate::new(1307, 2, 22).unwrap()))
        .build()
        .unwrap();
    let xml = serialize(&charter);
    let issued = xml.find("cei:issued").unwrap();
    let children: Vec<&str> = issued.child_elements().map(|child| child.name()).collect();
    assert_eq!(children, ["cei:placeName", "cei:date"]);
    assert_eq!(
        issued.find("cei:placeName").unwrap().text_content(),
        "Wiener Neustadt"
    );
}

#[test]
fn ch_desc_children_follow_the_schema_order() {
    let charter = Charter::builder("1")
        .abstract_text("An abstract")
        .tradition("orig.")
        .comments(["The diplomatic analysis is inconclusive"])
        .language("Deutsch")
        .build()
        .unwrap();
    let xml = serialize(&charter);
    let ch_desc = xml.find("cei:chDesc").unwrap();
    let children: Vec<&str> = ch_desc.child_elements().map(|child| child.name()).collect();
    assert_eq!(
        children,
        [
            "cei:abstract",
            "cei:issued",
            "cei:witnessOrig",
            "cei:diplomaticAnalysis",
            "cei:lang_MOM",
        ]
    );
}

#[test]
fn witness_orig_collects_the_physical_record() {
    let charter = Charter::builder("1")
        .tradition("orig.")
        .archive("Stiftsarchiv Schotten, Wien")
        .external_link("https://example.com/charters/1")
        .notarial_authentication("Albertus Magnus")
        .material("Pergament")
        .dimensions("20x20cm")
        .condition("Beschädigtes Pergament")
        .chancellary_remarks(["commissio domini imperatoris in consilio"])
        .graphic_urls(["StAS__13070222-2.jpg"])
        .build()
        .unwrap();
    let xml = serialize(&charter);

    let witness_orig = xml.find("cei:witnessOrig").unwrap();
    let children: Vec<&str> = witness_orig
        .child_elements()
        .map(|child| child.name())
        .collect();
    assert_eq!(
        children,
        [
            "cei:traditioForm",
            "cei:archIdentifier",
            "cei:auth",
            "cei:physicalDesc",
            "cei:nota",
            "cei:figure",
        ]
    );

    let arch_identifier = witness_orig.find("cei:archIdentifier").unwrap();
    assert_eq!(
        arch_identifier.find("cei:arch").unwrap().text_content(),
        "Stiftsarchiv Schotten, Wien"
    );
    assert_eq!(
        arch_identifier.find("cei:ref").unwrap().attribute("target"),
        Some("https://example.com/charters/1")
    );

    let physical = witness_orig.find("cei:physicalDesc").unwrap();
    let physical_children: Vec<&str> = physical
        .child_elements()
        .map(|child| child.name())
        .collect();
    assert_eq!(
        physical_children,
        ["cei:material", "cei:dimensions", "cei:condition"]
    );

    assert_eq!(
        witness_orig
            .find("cei:figure")
            .unwrap()
            .find("cei:graphic")
            .unwrap()
            .attribute("url"),
        Some("StAS__13070222-2.jpg")
    );
}

#[test]
fn seal_text_description_renders_inline() {
    let charter = Charter::builder("1").seals("2 Siegel").build().unwrap();
    let xml = serialize(&charter);
    let seal_desc = xml.find("cei:sealDesc").unwrap();
    assert_eq!(seal_desc.text_content(), "2 Siegel");
    assert!(seal_desc.find("cei:seal").is_none());
}

#[test]
fn seal_objects_render_their_parts_in_order() {
    let seals = vec![
        Seal::new()
            .with_condition("beschädigt")
            .with_dimensions("4cm")
            .with_legend(SealLegend::at_place("recto", "S PETRI"))
            .with_material("Wachs")
            .with_sigillant(PersonRef::new("Konrad von Lintz")),
        Seal::new().with_material("Wachs"),
    ];
    let charter = Charter::builder("1").seals(seals).build().unwrap();
    let xml = serialize(&charter);

    let seal_elements = xml.find_all("cei:seal");
    assert_eq!(seal_elements.len(), 2);

    let first: Vec<&str> = seal_elements[0]
        .child_elements()
        .map(|child| child.name())
        .collect();
    assert_eq!(
        first,
        [
            "cei:sealCondition",
            "cei:sealDimensions",
            "cei:legend",
            "cei:sealMaterial",
            "cei:sigillant",
        ]
    );
    assert_eq!(
        seal_elements[0].find("cei:legend").unwrap().attribute("place"),
        Some("recto")
    );
    assert_eq!(
        seal_elements[1].find("cei:sealMaterial").unwrap().text_content(),
        "Wachs"
    );
}

#[test]
fn empty_seals_are_skipped_entirely() {
    let charter = Charter::builder("1")
        .seals(vec![Seal::new()])
        .build()
        .unwrap();
    let xml = serialize(&charter);
    assert!(xml.find("cei:sealDesc").is_none());
    assert!(xml.find("cei:auth").is_none());
}

#[test]
fn diplomatic_analysis_orders_its_lists() {
    let charter = Charter::builder("1")
        .literature(["Entry 1"])
        .literature_editions(["MGH DD Burg. 103"])
        .literature_abstracts(["RI XIII H. 4 n. 778"])
        .literature_depictions(["ADEVA Faksimile"])
        .literature_secondary(["HAUSWIRTH, Schotten S. 123-124"])
        .date_quote("an sand peters tage in der vasten")
        .comments(["Comment a", "Comment b"])
        .build()
        .unwrap();
    let xml = serialize(&charter);

    let analysis = xml.find("cei:diplomaticAnalysis").unwrap();
    let children: Vec<&str> = analysis.child_elements().map(|child| child.name()).collect();
    assert_eq!(
        children,
        [
            "cei:listBibl",
            "cei:listBiblEdition",
            "cei:listBiblRegest",
            "cei:listBiblFaksimile",
            "cei:listBiblErw",
            "cei:quoteOriginaldatierung",
            "cei:p",
            "cei:p",
        ]
    );
    assert_eq!(
        analysis.find("cei:listBibl").unwrap().find("cei:bibl").unwrap().text_content(),
        "Entry 1"
    );
}

#[test]
fn sources_live_in_the_front_matter() {
    let charter = Charter::builder("1")
        .abstract_sources(["Bibl a", "Bibl b"])
        .transcription_sources(["Bibl c"])
        .build()
        .unwrap();
    let xml = serialize(&charter);

    let front = xml.child_elements().next().unwrap();
    assert_eq!(front.name(), "cei:front");
    let source_desc = front.find("cei:sourceDesc").unwrap();

    let regest = source_desc.find("cei:sourceDescRegest").unwrap();
    let texts: Vec<String> = regest
        .child_elements()
        .map(|bibl| bibl.text_content())
        .collect();
    assert_eq!(texts, ["Bibl a", "Bibl b"]);

    assert_eq!(
        source_desc
            .find("cei:sourceDescVolltext")
            .unwrap()
            .find("cei:bibl")
            .unwrap()
            .text_content(),
        "Bibl c"
    );
}

#[test]
fn transcription_becomes_the_tenor() {
    let charter = Charter::builder("1")
        .transcription("Ich Hainrich, des Praitenvelder Schreiber ...")
        .build()
        .unwrap();
    let xml = serialize(&charter);
    let body = xml.find("cei:body").unwrap();
    let children: Vec<&str> = body.child_elements().map(|child| child.name()).collect();
    assert_eq!(children, ["cei:idno", "cei:chDesc", "cei:tenor"]);
}

#[test]
fn back_matter_collects_witnesses_and_indexes() {
    let charter = Charter::builder("1")
        .witnesses([
            PersonRef::new("Franz von Ehrlingen"),
            PersonRef::new("Ulrich der Schneider").with_key("ulrich-2"),
        ])
        .index_persons(["Hubert, der Schuster"])
        .index_organizations(["Bistum Passau"])
        .index_places(["Wien"])
        .index_geo_features(["Leithagebirge"])
        .index_terms(["Arenga"])
        .footnotes(["Siehe RI #1234", "Abweichend von Nr. 15"])
        .build()
        .unwrap();
    let xml = serialize(&charter);

    let back = xml.child_elements().last().unwrap();
    assert_eq!(back.name(), "cei:back");
    let children: Vec<&str> = back.child_elements().map(|child| child.name()).collect();
    assert_eq!(
        children,
        [
            "cei:persName",
            "cei:persName",
            "cei:persName",
            "cei:orgName",
            "cei:placeName",
            "cei:geogName",
            "cei:index",
            "cei:divNotes",
        ]
    );

    // Witnesses are typed; index persons are not.
    let pers_names = back.find_all("cei:persName");
    assert_eq!(pers_names[0].attribute("type"), Some("Zeuge"));
    assert_eq!(pers_names[1].attribute("type"), Some("Zeuge"));
    assert_eq!(pers_names[1].attribute("key"), Some("ulrich-2"));
    assert_eq!(pers_names[2].attribute("type"), None);

    let notes = back.find("cei:divNotes").unwrap();
    let texts: Vec<String> = notes
        .child_elements()
        .map(|note| note.text_content())
        .collect();
    assert_eq!(texts, ["Siehe RI #1234", "Abweichend von Nr. 15"]);
}

#[test]
fn mapping_rejects_deserialized_charter_without_identifier() {
    // serde bypasses the builder, so the serializer re-checks what the
    // schema treats as mandatory.
    let charter = minimal();
    let mut value = serde_json::to_value(&charter).unwrap();
    value["id"]["text"] = serde_json::Value::String(String::new());
    let broken: Charter = serde_json::from_value(value).unwrap();

    let result = CeiSerializer::new().charter_to_xml(&broken);
    assert!(matches!(
        result,
        Err(SchemaMappingError::MissingIdentifier)
    ));
}
