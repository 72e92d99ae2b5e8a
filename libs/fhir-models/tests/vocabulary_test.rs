//! Coded values against the shipped vocabularies

use ferrum_models::codes::{
    AdministrativeGender, CommonLanguages, ContactPointSystem, ContactPointUse, IdentifierUse,
    NameUse, NarrativeStatus, PublicationStatus, QuantityComparator,
};
use ferrum_models::prelude::*;
use ferrum_models::{Code, Error};
use quickcheck::{QuickCheck, TestResult};

fn round_trip_all<V: Vocabulary>() {
    for member in V::members() {
        let by_code = Code::<V>::of(member.code()).unwrap();
        let by_member = Code::from(*member);
        assert_eq!(by_code, by_member, "{}", member.code());
        assert_eq!(by_code.member(), Some(*member));
        assert_eq!(by_code.value(), Some(member.code()));
    }
}

#[test]
fn every_closed_member_round_trips() {
    round_trip_all::<AdministrativeGender>();
    round_trip_all::<IdentifierUse>();
    round_trip_all::<NameUse>();
    round_trip_all::<ContactPointSystem>();
    round_trip_all::<ContactPointUse>();
    round_trip_all::<QuantityComparator>();
    round_trip_all::<NarrativeStatus>();
    round_trip_all::<PublicationStatus>();
    round_trip_all::<CommonLanguages>();
}

/// Property: a closed vocabulary rejects every string that is not a member
#[test]
fn prop_closed_vocabulary_rejects_non_members() {
    fn prop(s: String) -> TestResult {
        if AdministrativeGender::DESCRIPTOR.contains(&s) {
            return TestResult::discard();
        }
        match Code::<AdministrativeGender>::of(&s) {
            Err(Error::UnknownCode { code, vocabulary }) => {
                TestResult::from_bool(code == s && vocabulary == "AdministrativeGender")
            }
            _ => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: case variants of a member are not members
#[test]
fn prop_lookup_is_case_sensitive() {
    fn prop(upper: bool) -> TestResult {
        let code = if upper { "MALE" } else { "Male" };
        TestResult::from_bool(Code::<AdministrativeGender>::of(code).is_err())
    }

    QuickCheck::new()
        .tests(10)
        .quickcheck(prop as fn(bool) -> TestResult);
}

/// Property: an open vocabulary accepts any single-token code
#[test]
fn prop_open_vocabulary_accepts_tokens() {
    fn prop(s: String) -> TestResult {
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return TestResult::discard();
        }
        let code = Code::<CommonLanguages>::of(&s);
        TestResult::from_bool(matches!(code, Ok(ref c) if c.value() == Some(s.as_str())))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

#[test]
fn member_enums_parse_and_display() {
    for member in ContactPointSystem::ALL {
        let parsed: ContactPointSystem = member.to_string().parse().unwrap();
        assert_eq!(parsed, *member);
    }
    assert!(matches!(
        "telex".parse::<ContactPointSystem>(),
        Err(Error::UnknownCode { .. })
    ));
}
