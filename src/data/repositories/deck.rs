use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::data::models::{Deck, NewDeck};
use crate::schema::decks;

/// Deck store, scoped to the owning user like the card store.
pub struct DeckRepository;

impl DeckRepository {
    pub fn create(
        conn: &mut SqliteConnection,
        owner_id: i32,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<Deck, diesel::result::Error> {
        diesel::insert_into(decks::table)
            .values(&NewDeck {
                user_id: owner_id,
                deck_name: name,
                created_at: now,
                updated_at: now,
            })
            .returning(Deck::as_returning())
            .get_result(conn)
    }

    pub fn find_by_id_and_owner(
        conn: &mut SqliteConnection,
        deck_id: i32,
        owner_id: i32,
    ) -> Result<Option<Deck>, diesel::result::Error> {
        decks::table
            .filter(decks::deck_id.eq(deck_id))
            .filter(decks::user_id.eq(owner_id))
            .select(Deck::as_select())
            .first(conn)
            .optional()
    }

    pub fn list_for_owner(
        conn: &mut SqliteConnection,
        owner_id: i32,
    ) -> Result<Vec<Deck>, diesel::result::Error> {
        decks::table
            .filter(decks::user_id.eq(owner_id))
            .order(decks::deck_name.asc())
            .select(Deck::as_select())
            .load(conn)
    }
}
