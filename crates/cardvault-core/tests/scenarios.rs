//! End-to-end inventory walkthroughs through the public API only.

use cardvault_core::{
    BinderType, Card, ContainerKey, DeckType, Declined, Inventory, Money, Rarity, Variant,
};

fn dollars(d: i64) -> Money {
    Money::from_cents(d * 100)
}

#[test]
fn test_alt_art_rare_triples_base_price() {
    let card = Card::new("Foo", Rarity::Rare, Variant::AltArt, dollars(10)).unwrap();
    assert_eq!(card.value(), dollars(30));
    assert_eq!(card.variant(), Variant::AltArt);
}

#[test]
fn test_pauper_binder_sale() {
    let mut inv = Inventory::new();
    let b1 = inv.create_binder("B1", BinderType::Pauper).unwrap();
    let rock = inv
        .add_card_to_collection("Rock", Rarity::Common, Variant::Normal, dollars(1))
        .unwrap();
    let dragon = inv
        .add_card_to_collection("Dragon", Rarity::Rare, Variant::Normal, dollars(5))
        .unwrap();

    inv.add_card_to_container(&b1, rock).unwrap();
    assert_eq!(inv.quantity_of(rock), Some(0));

    assert!(matches!(
        inv.add_card_to_container(&b1, dragon),
        Err(Declined::Rejected { .. })
    ));
    assert_eq!(inv.quantity_of(dragon), Some(1));

    assert_eq!(inv.sell_binder("B1"), Ok(dollars(1)));
    assert_eq!(inv.balance(), dollars(1));
    assert!(inv.binder("B1").is_none());
    // The sold card is consumed
    assert_eq!(inv.quantity_of(rock), Some(0));
}

#[test]
fn test_luxury_binder_custom_price() {
    let mut inv = Inventory::new();
    let lux = inv.create_binder("Showcase", BinderType::Luxury).unwrap();
    let foo = inv
        .add_card_to_collection("Foo", Rarity::Rare, Variant::AltArt, dollars(10))
        .unwrap();
    inv.add_card_to_container(&lux, foo).unwrap();

    assert!(matches!(
        inv.set_custom_price("Showcase", dollars(20)),
        Err(Declined::PriceBelowCardValue { .. })
    ));
    assert_eq!(inv.binder("Showcase").unwrap().custom_price(), None);

    inv.set_custom_price("Showcase", dollars(40)).unwrap();
    assert_eq!(inv.sell_binder("Showcase"), Ok(dollars(44)));
    assert_eq!(inv.balance(), dollars(44));
}

#[test]
fn test_trade_for_new_card() {
    let mut inv = Inventory::new();
    let b = inv.create_binder("Trades", BinderType::Basic).unwrap();
    let x = inv
        .add_card_to_collection("X", Rarity::Uncommon, Variant::Normal, dollars(2))
        .unwrap();
    inv.add_card_to_container(&b, x).unwrap();

    let y = Card::new("Y", Rarity::Rare, Variant::Normal, dollars(3)).unwrap();
    let y = inv.execute_trade("Trades", y, x).unwrap();

    let binder = inv.binder("Trades").unwrap();
    assert_eq!(binder.cards(), &[y]);
    assert_eq!(inv.quantity_of(y), Some(0));
    // Nothing else held X, so its entry is gone
    assert_eq!(inv.quantity_of(x), None);
    assert_eq!(inv.find_card("x"), None);
}

#[test]
fn test_trade_keeps_outgoing_entry_while_referenced() {
    let mut inv = Inventory::new();
    let x = inv
        .add_card_with_quantity("X", Rarity::Common, Variant::Normal, dollars(2), 2)
        .unwrap();
    let binder = inv.create_binder("Trades", BinderType::Basic).unwrap();
    let deck = inv.create_deck("Main", DeckType::Normal).unwrap();
    inv.add_card_to_container(&binder, x).unwrap();
    inv.add_card_to_container(&deck, x).unwrap();

    let y = Card::new("Y", Rarity::Common, Variant::Normal, dollars(2)).unwrap();
    inv.execute_trade("Trades", y, x).unwrap();

    // Still in the deck
    assert_eq!(inv.quantity_of(x), Some(0));

    // With a free copy on hand the entry also survives
    let mut inv = Inventory::new();
    let x = inv
        .add_card_with_quantity("X", Rarity::Common, Variant::Normal, dollars(2), 2)
        .unwrap();
    let binder = inv.create_binder("Trades", BinderType::Basic).unwrap();
    inv.add_card_to_container(&binder, x).unwrap();

    let y = Card::new("Y", Rarity::Common, Variant::Normal, dollars(2)).unwrap();
    inv.execute_trade("Trades", y, x).unwrap();
    assert_eq!(inv.quantity_of(x), Some(1));
}

#[test]
fn test_capacity_is_enforced_through_inventory() {
    let mut inv = Inventory::new();
    let rock = inv
        .add_card_with_quantity("Rock", Rarity::Common, Variant::Normal, dollars(1), 25)
        .unwrap();
    let b = inv.create_binder("B", BinderType::Basic).unwrap();

    for _ in 0..20 {
        inv.add_card_to_container(&b, rock).unwrap();
    }
    assert!(matches!(
        inv.add_card_to_container(&b, rock),
        Err(Declined::ContainerFull { capacity: 20, .. })
    ));
    assert_eq!(inv.quantity_of(rock), Some(5));
    assert_eq!(inv.binder("B").unwrap().len(), 20);

    let d = inv.create_deck("D", DeckType::Sellable).unwrap();
    for i in 0..10 {
        let id = inv
            .add_card_to_collection(&format!("Card {i}"), Rarity::Common, Variant::Normal, dollars(1))
            .unwrap();
        inv.add_card_to_container(&d, id).unwrap();
    }
    let extra = inv
        .add_card_to_collection("Extra", Rarity::Common, Variant::Normal, dollars(1))
        .unwrap();
    assert!(matches!(
        inv.add_card_to_container(&d, extra),
        Err(Declined::ContainerFull { capacity: 10, .. })
    ));
    assert_eq!(inv.quote_container(&ContainerKey::deck("D")), Ok(dollars(10)));
}

#[test]
fn test_copies_are_conserved_across_moves() {
    let mut inv = Inventory::new();
    let rock = inv
        .add_card_with_quantity("Rock", Rarity::Common, Variant::Normal, dollars(1), 4)
        .unwrap();
    let b = inv.create_binder("B", BinderType::Basic).unwrap();
    let d = inv.create_deck("D", DeckType::Normal).unwrap();

    let total = |inv: &Inventory| {
        let held: usize = inv
            .binders()
            .iter()
            .chain(inv.decks().iter())
            .map(|c| c.count_of(rock))
            .sum();
        inv.quantity_of(rock).unwrap_or(0) + held as i64
    };

    inv.add_card_to_container(&b, rock).unwrap();
    inv.add_card_to_container(&b, rock).unwrap();
    inv.add_card_to_container(&d, rock).unwrap();
    assert_eq!(total(&inv), 4);

    inv.remove_card_from_container(&b, rock).unwrap();
    assert_eq!(total(&inv), 4);

    inv.delete_deck("D").unwrap();
    assert_eq!(total(&inv), 4);
    assert_eq!(inv.quantity_of(rock), Some(3));
}

#[test]
fn test_declined_operations_leave_ledger_alone() {
    let mut inv = Inventory::new();
    let collector = inv.create_binder("Vault", BinderType::Collector).unwrap();
    let gem = inv
        .add_card_to_collection("Gem", Rarity::Legendary, Variant::ExtendedArt, dollars(10))
        .unwrap();
    inv.add_card_to_container(&collector, gem).unwrap();

    assert!(!inv.is_binder_sellable("Vault"));
    assert!(matches!(
        inv.sell_binder("Vault"),
        Err(Declined::NotSellable { .. })
    ));
    assert!(matches!(
        inv.sell_deck("Nope"),
        Err(Declined::ContainerNotFound { .. })
    ));
    assert!(inv.balance().is_zero());
    assert_eq!(inv.binder("Vault").unwrap().len(), 1);
}
