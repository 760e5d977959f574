//! Property tests over shuffles, deals and random play.

use proptest::prelude::*;

use freecell_engine::{
    CardId, Deck, Destination, FreecellConfig, FreecellGame, GameRng, GameStatus, COLUMN_COUNT,
    DECK_SIZE,
};

fn all_ids() -> Vec<CardId> {
    CardId::all().collect()
}

proptest! {
    /// Any shuffle is a permutation of the same 52 cards.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(seed));

        let mut ids = deck.ids();
        ids.sort();
        prop_assert_eq!(ids, all_ids());
    }

    /// Every deal puts all 52 cards on the tableau, 7-7-7-7-6-6-6-6.
    #[test]
    fn prop_deal_distribution(seed in any::<u64>()) {
        let game = FreecellGame::new(FreecellConfig::default().with_seed(seed));

        for (i, column) in game.tableau().iter().enumerate() {
            prop_assert_eq!(column.len(), if i < 4 { 7 } else { 6 });
        }
        prop_assert!(game.free_cells().iter().all(Option::is_none));
        prop_assert!(game.foundations().iter().all(Vec::is_empty));
        prop_assert!(game.board().check_integrity().is_ok());
        prop_assert_eq!(game.board().card_count(), DECK_SIZE);
        prop_assert!(!game.is_won());
    }

    /// Random legal play never loses or duplicates a card, and the movable
    /// set is always 0..=12 accessible cards.
    #[test]
    fn prop_random_play_preserves_invariants(
        seed in any::<u64>(),
        choices in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..120),
    ) {
        let mut game = FreecellGame::new(FreecellConfig::default().with_seed(seed));

        for (pick, drop) in choices {
            let movable = game.movable_card_ids();
            prop_assert!(movable.len() <= 12);

            // Never a buried card.
            for column in game.tableau() {
                if column.len() > 1 {
                    for buried in &column[..column.len() - 1] {
                        prop_assert!(!movable.contains(&buried.id()));
                    }
                }
            }

            if movable.is_empty() {
                break;
            }
            let id = movable[pick.index(movable.len())];
            let dests = game.destinations_for(id).unwrap();
            if dests.is_empty() {
                continue;
            }
            let dest = dests[drop.index(dests.len())];
            game.move_card(id, dest).unwrap();

            prop_assert!(game.board().check_integrity().is_ok());
            prop_assert_eq!(game.is_won(), game.status() == GameStatus::Won);
        }
    }

    /// A card moved to a free cell is movable again immediately.
    #[test]
    fn prop_free_cell_card_is_movable(seed in any::<u64>(), column in 0..COLUMN_COUNT, cell in 0usize..4) {
        let mut game = FreecellGame::new(FreecellConfig::default().with_seed(seed));
        let id = game.tableau()[column].last().unwrap().id();

        game.move_card(id, Destination::FreeCell(cell)).unwrap();
        prop_assert!(game.movable_card_ids().contains(&id));
    }
}
