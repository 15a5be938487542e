use crate::db::Database;
use crate::error::{ConciergeError, Result};
use crate::models::{
    GarmentCategory, Rating, Thickness, Transport, WardrobeItem, WearLog, Weight, WindResistance,
};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Row};
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Wardrobe Queries

impl Database {
    /// Insert a new item. A blank name is replaced by the category name.
    pub fn add_item(&self, item: &WardrobeItem) -> Result<()> {
        let name = if item.name.trim().is_empty() {
            GarmentCategory::lookup(item.category_id)
                .map(|c| c.name.to_string())
                .unwrap_or_else(|| "Outer".to_string())
        } else {
            item.name.clone()
        };

        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO wardrobe_items
                    (id, category_id, name, thickness, weight, wind_resistance, color,
                     image, warmth, has_hood, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
                params![
                    item.id,
                    item.category_id,
                    name,
                    item.thickness.as_str(),
                    item.weight.as_str(),
                    item.wind_resistance.as_str(),
                    item.color,
                    item.image,
                    item.warmth,
                    item.has_hood,
                    item.created_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }

    /// All items in the order they were added
    pub fn list_items(&self) -> Result<Vec<WardrobeItem>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT * FROM wardrobe_items ORDER BY seq")?;
            let items = stmt
                .query_map([], row_to_item)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(items)
        })
    }

    pub fn get_item(&self, id: &str) -> Result<Option<WardrobeItem>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT * FROM wardrobe_items WHERE id = ?1",
                [id],
                row_to_item,
            )
            .optional()
            .map_err(Into::into)
        })
    }

    pub fn update_item(&self, item: &WardrobeItem) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute(
                r#"
                UPDATE wardrobe_items SET
                    category_id = ?1, name = ?2, thickness = ?3, weight = ?4,
                    wind_resistance = ?5, color = ?6, image = ?7, warmth = ?8, has_hood = ?9
                WHERE id = ?10
                "#,
                params![
                    item.category_id,
                    item.name,
                    item.thickness.as_str(),
                    item.weight.as_str(),
                    item.wind_resistance.as_str(),
                    item.color,
                    item.image,
                    item.warmth,
                    item.has_hood,
                    item.id,
                ],
            )?)
        })?;

        if changed == 0 {
            return Err(ConciergeError::NotFound(format!("wardrobe item {}", item.id)));
        }
        Ok(())
    }

    pub fn delete_item(&self, id: &str) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM wardrobe_items WHERE id = ?1", [id])?)
        })?;

        if changed == 0 {
            return Err(ConciergeError::NotFound(format!("wardrobe item {}", id)));
        }
        Ok(())
    }
}

fn row_to_item(row: &Row) -> rusqlite::Result<WardrobeItem> {
    let thickness_str: String = row.get("thickness")?;
    let weight_str: String = row.get("weight")?;
    let wind_str: String = row.get("wind_resistance")?;
    let created_at_str: String = row.get("created_at")?;

    let thickness = Thickness::from_str(&thickness_str).unwrap_or_else(|| {
        warn!(thickness = %thickness_str, "Unknown thickness in database, defaulting to normal");
        Thickness::Normal
    });
    let weight = Weight::from_str(&weight_str).unwrap_or_else(|| {
        warn!(weight = %weight_str, "Unknown weight in database, defaulting to normal");
        Weight::Normal
    });
    let wind_resistance = WindResistance::from_str(&wind_str).unwrap_or_else(|| {
        warn!(
            wind_resistance = %wind_str,
            "Unknown wind_resistance in database, defaulting to normal"
        );
        WindResistance::Normal
    });

    Ok(WardrobeItem {
        id: row.get("id")?,
        category_id: row.get("category_id")?,
        name: row.get("name")?,
        thickness,
        weight,
        wind_resistance,
        color: row.get("color")?,
        image: row.get("image")?,
        warmth: row.get("warmth")?,
        has_hood: row.get("has_hood")?,
        created_at: parse_timestamp(&created_at_str),
    })
}

// Wear Log Queries

impl Database {
    pub fn add_log(&self, log: &WearLog) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO wear_logs
                    (id, date, item_name, item_color, min_temp, max_temp, transport,
                     start_hour, end_hour, rating, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
                params![
                    log.id,
                    log.date.format(DATE_FORMAT).to_string(),
                    log.item_name,
                    log.item_color,
                    log.min_temp,
                    log.max_temp,
                    log.transport.map(|t| t.as_str()),
                    log.start_hour,
                    log.end_hour,
                    log.rating.map(|r| r.as_str()),
                    log.created_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }

    /// Newest first
    pub fn list_logs(&self) -> Result<Vec<WearLog>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT * FROM wear_logs ORDER BY date DESC, created_at DESC")?;
            let logs = stmt
                .query_map([], row_to_log)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(logs)
        })
    }

    pub fn get_log(&self, id: &str) -> Result<Option<WearLog>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT * FROM wear_logs WHERE id = ?1", [id], row_to_log)
                .optional()
                .map_err(Into::into)
        })
    }

    pub fn rate_log(&self, id: &str, rating: Rating) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute(
                "UPDATE wear_logs SET rating = ?1 WHERE id = ?2",
                params![rating.as_str(), id],
            )?)
        })?;

        if changed == 0 {
            return Err(ConciergeError::NotFound(format!("wear log {}", id)));
        }
        Ok(())
    }

    pub fn delete_log(&self, id: &str) -> Result<()> {
        let changed = self
            .with_conn(|conn| Ok(conn.execute("DELETE FROM wear_logs WHERE id = ?1", [id])?))?;

        if changed == 0 {
            return Err(ConciergeError::NotFound(format!("wear log {}", id)));
        }
        Ok(())
    }
}

fn row_to_log(row: &Row) -> rusqlite::Result<WearLog> {
    let date_str: String = row.get("date")?;
    let transport_str: Option<String> = row.get("transport")?;
    let rating_str: Option<String> = row.get("rating")?;
    let created_at_str: String = row.get("created_at")?;

    let transport = transport_str.as_ref().and_then(|t| {
        Transport::from_str(t).or_else(|| {
            warn!(transport = %t, "Unknown transport in database, ignoring");
            None
        })
    });
    let rating = rating_str.as_ref().and_then(|r| {
        Rating::from_str(r).or_else(|| {
            warn!(rating = %r, "Unknown rating in database, ignoring");
            None
        })
    });

    Ok(WearLog {
        id: row.get("id")?,
        date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .unwrap_or_else(|_| chrono::Local::now().date_naive()),
        item_name: row.get("item_name")?,
        item_color: row.get("item_color")?,
        min_temp: row.get("min_temp")?,
        max_temp: row.get("max_temp")?,
        transport,
        start_hour: row.get("start_hour")?,
        end_hour: row.get("end_hour")?,
        rating,
        created_at: parse_timestamp(&created_at_str),
    })
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

trait OptionalExt<T> {
    fn optional(self) -> rusqlite::Result<Option<T>>;
}

impl<T> OptionalExt<T> for rusqlite::Result<T> {
    fn optional(self) -> rusqlite::Result<Option<T>> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
