//! # In-Memory Ledger Stores
//!
//! One store per domain, each an ordered sequence of records (newest first,
//! by construction) behind a `tokio::sync::RwLock`, plus whatever aggregate
//! the domain needs. Reads filter and slice; writes append under the write
//! lock so no partial mutation is ever observable.
//!
//! Filters apply in a fixed order: equality filters first, then the
//! case-insensitive free-text match against the domain's allow-listed
//! fields, then date-range bounds.

use chrono::{DateTime, Datelike, Local, LocalResult, NaiveTime, Utc};
use shared::Envelope;

pub mod admin;
pub mod agent;
pub mod seed;
pub mod wallet;

/// Start of the current calendar day in local time, as a UTC instant.
pub(crate) fn start_of_today() -> DateTime<Utc> {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // A DST transition can remove local midnight; fall back to the UTC day.
        LocalResult::None => Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc(),
    }
}

/// Whether `ts` falls in the current calendar month, local time.
pub(crate) fn in_current_month(ts: DateTime<Utc>) -> bool {
    let now = Local::now();
    let local = ts.with_timezone(&Local);
    local.year() == now.year() && local.month() == now.month()
}

/// Case-insensitive substring match over the allow-listed fields of a record.
pub(crate) fn matches_query(query: &str, fields: &[Option<&str>]) -> bool {
    let q = query.to_lowercase();
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&q))
}

/// Slice one page out of a filtered sequence.
///
/// `page` and `page_size` are clamped to at least 1; a page past the end
/// yields empty items with the correct total.
pub(crate) fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Envelope<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = filtered.len();
    let start = (page - 1) * page_size;
    let items = if start >= total {
        Vec::new()
    } else {
        filtered[start..(start + page_size).min(total)].to_vec()
    };
    Envelope {
        items,
        total,
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_clamps_and_slices() {
        let data: Vec<u32> = (0..25).collect();

        let first = paginate(&data, 0, 0);
        assert_eq!(first.page, 1);
        assert_eq!(first.page_size, 1);
        assert_eq!(first.items, vec![0]);

        let second = paginate(&data, 2, 10);
        assert_eq!(second.items, (10..20).collect::<Vec<u32>>());
        assert_eq!(second.total, 25);

        let last = paginate(&data, 3, 10);
        assert_eq!(last.items.len(), 5);

        let past_end = paginate(&data, 9, 10);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 25);
    }

    #[test]
    fn query_match_is_case_insensitive_and_skips_missing_fields() {
        assert!(matches_query("RENT", &[Some("u_tx_4"), Some("Rent"), None]));
        assert!(matches_query("u_tx", &[Some("u_tx_4"), None, None]));
        assert!(!matches_query("gift", &[Some("u_tx_4"), Some("Rent"), None]));
    }
}
