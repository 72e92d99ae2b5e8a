//! Validating builders across the datatypes

use ferrum_models::codes::{AdministrativeGender, IdentifierUse, NameUse};
use ferrum_models::datatypes::{
    Annotation, CodeableConcept, Coding, ContactPoint, Extension, HumanName, Identifier,
    Narrative, Period, Quantity, Reference,
};
use ferrum_models::prelude::*;
use ferrum_models::{Code, Error, FhirString};
use rust_decimal::Decimal;

fn ext(url: &str, value: &str) -> Extension {
    Extension::builder()
        .url(url)
        .value(FhirString::of(value))
        .build()
        .unwrap()
}

fn identifier() -> Identifier {
    Identifier::builder()
        .id("mrn")
        .extension(ext("http://example.org/a", "1"))
        .extension(ext("http://example.org/b", "2"))
        .extension(ext("http://example.org/a", "3"))
        .use_(IdentifierUse::Usual)
        .type_(
            CodeableConcept::builder()
                .coding(
                    Coding::builder()
                        .system("http://terminology.hl7.org/CodeSystem/v2-0203")
                        .code("MR")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .system("urn:oid:1.2.36.146.595.217.0.1")
        .value("12345")
        .period(Period::builder().start("2001-05-06").build().unwrap())
        .assigner(Reference::builder().display("Acme Healthcare").build().unwrap())
        .build()
        .unwrap()
}

#[test]
fn to_builder_round_trips_every_datatype() {
    let id = identifier();
    assert_eq!(id.to_builder().build().unwrap(), id);

    let name = HumanName::builder()
        .use_(NameUse::Official)
        .family("Chalmers")
        .given("Peter")
        .given("James")
        .period(Period::builder().end("2020-01-01").build().unwrap())
        .build()
        .unwrap();
    assert_eq!(name.to_builder().build().unwrap(), name);

    let q = Quantity::builder()
        .value(Decimal::new(1250, 2))
        .system("http://unitsofmeasure.org")
        .code("mg")
        .build()
        .unwrap();
    assert_eq!(q.to_builder().build().unwrap(), q);

    let note = Annotation::builder()
        .author_reference(Reference::builder().reference("Practitioner/1").build().unwrap())
        .time("2024-02-01T10:00:00Z")
        .text("Reviewed")
        .build()
        .unwrap();
    assert_eq!(note.to_builder().build().unwrap(), note);

    let narrative = Narrative::builder()
        .status_code("generated")
        .unwrap()
        .div("<div xmlns=\"http://www.w3.org/1999/xhtml\">ok</div>")
        .build()
        .unwrap();
    assert_eq!(narrative.to_builder().build().unwrap(), narrative);

    let gender = Code::from(AdministrativeGender::Unknown);
    assert_eq!(gender.to_builder().build().unwrap(), gender);
}

#[test]
fn extension_order_survives_copy() {
    let copy = identifier().to_builder().build().unwrap();
    let urls: Vec<&str> = copy.extension().iter().map(|e| e.url()).collect();
    assert_eq!(
        urls,
        vec![
            "http://example.org/a",
            "http://example.org/b",
            "http://example.org/a"
        ]
    );
    assert_eq!(copy.extensions_by_url("http://example.org/a").len(), 2);
    assert_eq!(
        copy.find_extension("http://example.org/b").map(|e| e.url()),
        Some("http://example.org/b")
    );
}

#[test]
fn copy_with_changes_leaves_the_original_alone() {
    let original = identifier();
    let changed = original
        .to_builder()
        .value("67890")
        .extension(ext("http://example.org/c", "4"))
        .build()
        .unwrap();
    assert_eq!(original.value().and_then(|v| v.as_str()), Some("12345"));
    assert_eq!(changed.value().and_then(|v| v.as_str()), Some("67890"));
    assert_eq!(original.extension().len(), 3);
    assert_eq!(changed.extension().len(), 4);
}

#[test]
fn missing_required_fields_are_named() {
    let cases: Vec<(Error, &str)> = vec![
        (
            Extension::builder()
                .value(FhirString::of("x"))
                .build()
                .unwrap_err(),
            "Extension.url",
        ),
        (
            Annotation::builder().build().unwrap_err(),
            "Annotation.text",
        ),
        (
            Narrative::builder().div("<div/>").build().unwrap_err(),
            "Narrative.status",
        ),
        (
            Quantity::builder().code("mg").build().unwrap_err(),
            "Quantity.system",
        ),
        (
            ContactPoint::builder().value("x").build().unwrap_err(),
            "ContactPoint.system",
        ),
    ];
    for (err, field) in cases {
        assert_eq!(err, Error::MissingRequiredField { field });
        assert!(err.to_string().contains(field));
    }
}

#[test]
fn closed_coded_fields_reject_unknown_wire_codes() {
    let err = Identifier::builder().use_code("primary").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownCode {
            code: "primary".to_string(),
            vocabulary: "IdentifierUse",
        }
    );
    assert!(HumanName::builder().use_code("maiden").is_ok());
}

#[test]
fn empty_elements_are_rejected() {
    assert_eq!(
        Period::builder().id("p").build().unwrap_err(),
        Error::NoValueOrChildren { element: "Period" }
    );
    assert!(CodeableConcept::builder().build().is_err());
    assert!(Reference::builder()
        .extension(ext("http://example.org/a", "1"))
        .build()
        .is_ok());
}
