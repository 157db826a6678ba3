//! Tests for the category taxonomy.

use sarica_core::errors::EssenceError;
use sarica_core::taxonomy::{Alignment, UserClass};

#[test]
fn nineteen_categories() {
    assert_eq!(UserClass::ALL.len(), 19);
}

#[test]
fn names_replace_underscores() {
    assert_eq!(UserClass::BugGirlConnoisseur.name(), "Bug Girl Connoisseur");
    assert_eq!(UserClass::SoulHealer.to_string(), "Soul Healer");
    assert_eq!(UserClass::GameDev.name(), "GameDev");
}

#[test]
fn parse_accepts_identifier_and_display_forms() {
    assert_eq!("Soul_Healer".parse::<UserClass>().unwrap(), UserClass::SoulHealer);
    assert_eq!("soul healer".parse::<UserClass>().unwrap(), UserClass::SoulHealer);
    assert_eq!("Reader".parse::<UserClass>().unwrap(), UserClass::Reader);
}

#[test]
fn parse_rejects_unknown_category() {
    let err = "Necromancer".parse::<UserClass>().unwrap_err();
    assert!(matches!(err, EssenceError::UnknownCategory { ref name } if name == "Necromancer"));
    assert!(err.to_string().contains("unknown category"));
}

#[test]
fn every_name_parses_back() {
    for class in UserClass::ALL {
        assert_eq!(class.name().parse::<UserClass>().unwrap(), class);
        assert_eq!(class.identifier().parse::<UserClass>().unwrap(), class);
    }
}

#[test]
fn alignment_parse() {
    assert_eq!("celestial".parse::<Alignment>().unwrap(), Alignment::Celestial);
    assert_eq!(Alignment::default(), Alignment::Primordial);
    assert!("Chaotic".parse::<Alignment>().is_err());
}
