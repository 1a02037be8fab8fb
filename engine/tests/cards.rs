use engine::{Archetype, CardKind};

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(CardKind::from_name("strike"), Some(CardKind::Strike));
    assert_eq!(CardKind::from_name("SLAM"), Some(CardKind::Slam));
    assert_eq!(CardKind::from_name("Fireball"), None);
}

#[test]
fn catalog_data_is_fixed() {
    let strike = CardKind::Strike.card();
    assert_eq!((strike.damage, strike.block, strike.energy_cost), (6, 0, 1));
    assert!(strike.requires_target);

    let defend = CardKind::Defend.card();
    assert_eq!((defend.damage, defend.block, defend.energy_cost), (0, 5, 1));
    assert!(!defend.requires_target);

    let slam = CardKind::Slam.card();
    assert_eq!((slam.damage, slam.block, slam.energy_cost), (7, 5, 2));
    assert!(slam.requires_target);

    let sap = CardKind::Sap.card();
    assert_eq!((sap.damage, sap.energy_cost), (3, 0));
    assert_eq!((sap.weak, sap.vulnerable), (1, 2));
    assert!(sap.requires_target);

    let brace = CardKind::Brace.card();
    assert_eq!((brace.block, brace.strength, brace.energy_cost), (8, 1, 1));
    assert!(!brace.requires_target);
}

fn count(deck: &[CardKind], kind: CardKind) -> usize {
    deck.iter().filter(|c| **c == kind).count()
}

#[test]
fn vanguard_starting_deck() {
    assert_eq!(Archetype::Vanguard.max_hp(), 80);
    let deck = Archetype::Vanguard.starting_deck();
    assert_eq!(deck.len(), 10);
    assert_eq!(count(&deck, CardKind::Strike), 5);
    assert_eq!(count(&deck, CardKind::Defend), 4);
    assert_eq!(count(&deck, CardKind::Slam), 1);
}

#[test]
fn stalker_starting_deck() {
    assert_eq!(Archetype::Stalker.max_hp(), 70);
    let deck = Archetype::Stalker.starting_deck();
    assert_eq!(deck.len(), 12);
    assert_eq!(count(&deck, CardKind::Strike), 5);
    assert_eq!(count(&deck, CardKind::Defend), 5);
    assert_eq!(count(&deck, CardKind::Sap), 1);
    assert_eq!(count(&deck, CardKind::Brace), 1);
}

#[test]
fn archetype_from_name() {
    assert_eq!(Archetype::from_name("vanguard"), Some(Archetype::Vanguard));
    assert_eq!(Archetype::from_name("Stalker"), Some(Archetype::Stalker));
    assert_eq!(Archetype::from_name("wizard"), None);
}
