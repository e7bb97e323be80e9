//! Database CRUD operations for stays.
//!
//! This module implements all create, read, update, and delete operations
//! for stays in the database.

use chrono::NaiveDate;
use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::room::Room;
use crate::stay::{Stay, StayId};

use super::connection::Database;
use super::schema::{DELETE_STAY, INSERT_STAY, INSERT_STAY_WITH_ID, UPDATE_STAY};

// SQL statements for read operations
const SELECT_STAY: &str = r"
    SELECT id, first_name, last_name, email, arrival_date, departure_date, room
    FROM stays
    WHERE id = ?
";

const SELECT_BY_ARRIVAL_RANGE: &str = r"
    SELECT id, first_name, last_name, email, arrival_date, departure_date, room
    FROM stays
    WHERE arrival_date BETWEEN ? AND ?
    ORDER BY arrival_date, id
";

const LIST_STAYS: &str = r"
    SELECT id, first_name, last_name, email, arrival_date, departure_date, room
    FROM stays
    ORDER BY arrival_date, id
";

/// Helper function to deserialize a stay from a database row.
///
/// Expects row fields in this order: id, `first_name`, `last_name`, email,
/// `arrival_date`, `departure_date`, room.
fn row_to_stay(row: &rusqlite::Row<'_>) -> rusqlite::Result<Stay> {
    let id: i64 = row.get(0)?;
    let first_name: String = row.get(1)?;
    let last_name: String = row.get(2)?;
    let email: String = row.get(3)?;
    let arrival_text: String = row.get(4)?;
    let departure_text: String = row.get(5)?;
    let room_value: Option<u16> = row.get(6)?;

    let arrival = NaiveDate::parse_from_str(&arrival_text, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let departure = NaiveDate::parse_from_str(&departure_text, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    let mut stay = Stay::builder(arrival, departure)
        .first_name(first_name)
        .last_name(last_name)
        .email(email)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    stay.set_id(StayId::new(id));

    if let Some(value) = room_value {
        let room = Room::try_from(value)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        stay.assign_room(room);
    }

    Ok(stay)
}

impl Database {
    /// Persists a stay and returns it with its store-assigned id.
    ///
    /// A stay without an id is inserted and the new id filled in. A stay
    /// with an id rewrites its existing row; if the row vanished in the
    /// meantime it is re-inserted under the same id. Either way the write
    /// happens inside an IMMEDIATE transaction so concurrent writers
    /// serialize at the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or the write
    /// fails.
    pub fn save_stay(&mut self, stay: &Stay) -> Result<Stay> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let arrival = stay.arrival_date().to_string();
        let departure = stay.departure_date().to_string();
        let room = stay.room().map(Room::number);

        let mut persisted = stay.clone();
        match stay.id() {
            None => {
                tx.execute(
                    INSERT_STAY,
                    params![
                        stay.first_name(),
                        stay.last_name(),
                        stay.email(),
                        arrival,
                        departure,
                        room
                    ],
                )?;
                persisted.set_id(StayId::new(tx.last_insert_rowid()));
            }
            Some(id) => {
                let updated = tx.execute(
                    UPDATE_STAY,
                    params![
                        stay.first_name(),
                        stay.last_name(),
                        stay.email(),
                        arrival,
                        departure,
                        room,
                        id.value()
                    ],
                )?;
                if updated == 0 {
                    tx.execute(
                        INSERT_STAY_WITH_ID,
                        params![
                            id.value(),
                            stay.first_name(),
                            stay.last_name(),
                            stay.email(),
                            arrival,
                            departure,
                            room
                        ],
                    )?;
                }
            }
        }

        tx.commit()?;
        Ok(persisted)
    }

    /// Fetches a stay by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; an unknown id is `Ok(None)`.
    pub fn find_stay(&self, id: StayId) -> Result<Option<Stay>> {
        match self
            .conn
            .query_row(SELECT_STAY, [id.value()], row_to_stay)
        {
            Ok(stay) => Ok(Some(stay)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a stay by id.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails.
    pub fn delete_stay(&self, id: StayId) -> Result<()> {
        self.conn.execute(DELETE_STAY, [id.value()])?;
        Ok(())
    }

    /// Returns the stays whose arrival date falls in the inclusive range
    /// `[start, end]`, ascending by arrival date then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stays_with_arrival_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Stay>> {
        let mut stmt = self.conn.prepare(SELECT_BY_ARRIVAL_RANGE)?;
        let rows = stmt.query_map(params![start.to_string(), end.to_string()], row_to_stay)?;

        let mut stays = Vec::new();
        for row in rows {
            stays.push(row?);
        }
        Ok(stays)
    }

    /// Returns every stay in the store, ascending by arrival date then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_stays(&self) -> Result<Vec<Stay>> {
        let mut stmt = self.conn.prepare(LIST_STAYS)?;
        let rows = stmt.query_map([], row_to_stay)?;

        let mut stays = Vec::new();
        for row in rows {
            stays.push(row?);
        }
        Ok(stays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_stay(arrival: NaiveDate, departure: NaiveDate) -> Stay {
        Stay::builder(arrival, departure)
            .first_name("Ada")
            .last_name("Lovelace")
            .email("ada@example.com")
            .build()
            .unwrap()
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut db = create_test_database();
        let stay = sample_stay(date(2020, 10, 1), date(2020, 10, 2));

        let first = db.save_stay(&stay).unwrap();
        let second = db.save_stay(&stay).unwrap();

        assert_eq!(first.id(), Some(StayId::new(1)));
        assert_eq!(second.id(), Some(StayId::new(2)));
    }

    #[test]
    fn test_find_round_trips_all_fields() {
        let mut db = create_test_database();
        let mut stay = sample_stay(date(2020, 10, 1), date(2020, 10, 3));
        stay.assign_room(Room::try_from(4).unwrap());

        let persisted = db.save_stay(&stay).unwrap();
        let found = db.find_stay(persisted.id().unwrap()).unwrap().unwrap();

        assert_eq!(found, persisted);
        assert_eq!(found.first_name(), "Ada");
        assert_eq!(found.arrival_date(), date(2020, 10, 1));
        assert_eq!(found.departure_date(), date(2020, 10, 3));
        assert_eq!(found.room().unwrap().number(), 4);
    }

    #[test]
    fn test_find_unknown_id_is_none() {
        let db = create_test_database();
        assert!(db.find_stay(StayId::new(42)).unwrap().is_none());
    }

    #[test]
    fn test_save_with_id_rewrites_row() {
        let mut db = create_test_database();
        let persisted = db
            .save_stay(&sample_stay(date(2020, 10, 1), date(2020, 10, 2)))
            .unwrap();

        let mut changed = sample_stay(date(2020, 10, 5), date(2020, 10, 6));
        changed.set_id(persisted.id().unwrap());
        changed.assign_room(Room::try_from(2).unwrap());
        db.save_stay(&changed).unwrap();

        let found = db.find_stay(persisted.id().unwrap()).unwrap().unwrap();
        assert_eq!(found.arrival_date(), date(2020, 10, 5));
        assert_eq!(found.room().unwrap().number(), 2);
        assert_eq!(db.list_all_stays().unwrap().len(), 1);
    }

    #[test]
    fn test_save_with_vanished_id_reinserts() {
        let mut db = create_test_database();
        let mut stay = sample_stay(date(2020, 10, 1), date(2020, 10, 2));
        stay.set_id(StayId::new(9));

        let persisted = db.save_stay(&stay).unwrap();
        assert_eq!(persisted.id(), Some(StayId::new(9)));
        assert!(db.find_stay(StayId::new(9)).unwrap().is_some());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut db = create_test_database();
        let persisted = db
            .save_stay(&sample_stay(date(2020, 10, 1), date(2020, 10, 2)))
            .unwrap();
        let id = persisted.id().unwrap();

        db.delete_stay(id).unwrap();
        assert!(db.find_stay(id).unwrap().is_none());

        db.delete_stay(id).unwrap();
        db.delete_stay(StayId::new(404)).unwrap();
    }

    #[test]
    fn test_arrival_range_is_inclusive_and_ordered() {
        let mut db = create_test_database();
        db.save_stay(&sample_stay(date(2020, 10, 5), date(2020, 10, 6)))
            .unwrap();
        db.save_stay(&sample_stay(date(2020, 10, 1), date(2020, 10, 2)))
            .unwrap();
        db.save_stay(&sample_stay(date(2020, 10, 3), date(2020, 10, 4)))
            .unwrap();
        db.save_stay(&sample_stay(date(2020, 10, 9), date(2020, 10, 10)))
            .unwrap();

        let stays = db
            .stays_with_arrival_between(date(2020, 10, 1), date(2020, 10, 5))
            .unwrap();
        let arrivals: Vec<NaiveDate> = stays.iter().map(Stay::arrival_date).collect();
        assert_eq!(
            arrivals,
            vec![date(2020, 10, 1), date(2020, 10, 3), date(2020, 10, 5)]
        );
    }

    #[test]
    fn test_date_range_across_year_boundary() {
        let mut db = create_test_database();
        db.save_stay(&sample_stay(date(2020, 12, 31), date(2021, 1, 1)))
            .unwrap();
        db.save_stay(&sample_stay(date(2021, 1, 2), date(2021, 1, 3)))
            .unwrap();

        // ISO-8601 TEXT ordering matches chronological ordering
        let stays = db
            .stays_with_arrival_between(date(2020, 12, 30), date(2021, 1, 2))
            .unwrap();
        assert_eq!(stays.len(), 2);
    }

    #[test]
    fn test_list_all_stays() {
        let mut db = create_test_database();
        assert!(db.list_all_stays().unwrap().is_empty());

        db.save_stay(&sample_stay(date(2020, 10, 1), date(2020, 10, 2)))
            .unwrap();
        db.save_stay(&sample_stay(date(2020, 10, 3), date(2020, 10, 4)))
            .unwrap();
        assert_eq!(db.list_all_stays().unwrap().len(), 2);
    }
}
