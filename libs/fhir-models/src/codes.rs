//! Vocabularies bound by the shipped datatypes
//!
//! Member lists follow the R4 value sets of the same name.

use crate::coded::vocabulary;

vocabulary! {
    /// The gender of a person used for administrative purposes.
    pub enum AdministrativeGender: Closed("AdministrativeGender", "http://hl7.org/fhir/administrative-gender") {
        Male = "male" => "Male",
        Female = "female" => "Female",
        Other = "other" => "Other",
        Unknown = "unknown" => "Unknown",
    }
}

vocabulary! {
    /// Identifies the purpose for this identifier, if known.
    pub enum IdentifierUse: Closed("IdentifierUse", "http://hl7.org/fhir/identifier-use") {
        Usual = "usual" => "Usual",
        Official = "official" => "Official",
        Temp = "temp" => "Temp",
        Secondary = "secondary" => "Secondary",
        Old = "old" => "Old",
    }
}

vocabulary! {
    /// The use of a human name.
    pub enum NameUse: Closed("NameUse", "http://hl7.org/fhir/name-use") {
        Usual = "usual" => "Usual",
        Official = "official" => "Official",
        Temp = "temp" => "Temp",
        Nickname = "nickname" => "Nickname",
        Anonymous = "anonymous" => "Anonymous",
        Old = "old" => "Old",
        Maiden = "maiden" => "Name changed for Marriage",
    }
}

vocabulary! {
    /// Telecommunications form for a contact point.
    pub enum ContactPointSystem: Closed("ContactPointSystem", "http://hl7.org/fhir/contact-point-system") {
        Phone = "phone" => "Phone",
        Fax = "fax" => "Fax",
        Email = "email" => "Email",
        Pager = "pager" => "Pager",
        Url = "url" => "URL",
        Sms = "sms" => "SMS",
        Other = "other" => "Other",
    }
}

vocabulary! {
    /// Use of a contact point.
    pub enum ContactPointUse: Closed("ContactPointUse", "http://hl7.org/fhir/contact-point-use") {
        Home = "home" => "Home",
        Work = "work" => "Work",
        Temp = "temp" => "Temp",
        Old = "old" => "Old",
        Mobile = "mobile" => "Mobile",
    }
}

vocabulary! {
    /// How the Quantity should be understood and represented.
    pub enum QuantityComparator: Closed("QuantityComparator", "http://hl7.org/fhir/quantity-comparator") {
        LessThan = "<" => "Less than",
        LessOrEqual = "<=" => "Less or Equal to",
        GreaterOrEqual = ">=" => "Greater or Equal to",
        GreaterThan = ">" => "Greater than",
    }
}

vocabulary! {
    /// The status of a resource narrative.
    pub enum NarrativeStatus: Closed("NarrativeStatus", "http://hl7.org/fhir/narrative-status") {
        Generated = "generated" => "Generated",
        Extensions = "extensions" => "Extensions",
        Additional = "additional" => "Additional",
        Empty = "empty" => "Empty",
    }
}

vocabulary! {
    /// The lifecycle status of an artifact.
    pub enum PublicationStatus: Closed("PublicationStatus", "http://hl7.org/fhir/publication-status") {
        Draft = "draft" => "Draft",
        Active = "active" => "Active",
        Retired = "retired" => "Retired",
        Unknown = "unknown" => "Unknown",
    }
}

vocabulary! {
    /// BCP-47 language tags. Any tag is accepted; the members are common ones.
    pub enum CommonLanguages: Open("CommonLanguages", "urn:ietf:bcp:47") {
        Ar = "ar" => "Arabic",
        De = "de" => "German",
        DeDe = "de-DE" => "German (Germany)",
        En = "en" => "English",
        EnGb = "en-GB" => "English (Great Britain)",
        EnUs = "en-US" => "English (United States)",
        Es = "es" => "Spanish",
        Fr = "fr" => "French",
        It = "it" => "Italian",
        Ja = "ja" => "Japanese",
        Nl = "nl" => "Dutch",
        Pt = "pt" => "Portuguese",
        Zh = "zh" => "Chinese",
    }
}
