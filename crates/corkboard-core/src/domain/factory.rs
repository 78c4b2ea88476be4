//! Card Factory
//!
//! Mints new card records. Ids come from a process-wide counter seeded from
//! wall-clock milliseconds, so they are unique within the process and do not
//! repeat ids handed out by earlier sessions.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use super::card::Card;

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Fields to preset on a new card; anything left `None` gets the default
#[derive(Debug, Clone, Default)]
pub struct CardOverrides {
    pub id: Option<u64>,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CardOverrides {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

/// Next id: `max(now_ms, last + 1)`
fn next_id() -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let previous = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(previous + 1)
}

/// Create one card: empty content and the current time unless overridden
pub fn create_card(overrides: CardOverrides) -> Card {
    Card {
        id: overrides.id.unwrap_or_else(next_id),
        content: overrides.content.unwrap_or_default(),
        created_at: overrides.created_at.unwrap_or_else(Utc::now),
    }
}

/// Create `n` cards sharing the same overrides, each with its own id.
/// An explicit id override only applies to the first card.
pub fn create_many_cards(n: usize, overrides: CardOverrides) -> Vec<Card> {
    (0..n)
        .map(|i| {
            let mut per_card = overrides.clone();
            if i > 0 {
                per_card.id = None;
            }
            create_card(per_card)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_card_defaults() {
        let before = Utc::now();
        let card = create_card(CardOverrides::default());
        assert!(card.content.is_empty());
        assert!(card.created_at >= before);
        assert!(card.id > 0);
    }

    #[test]
    fn test_create_card_overrides() {
        let card = create_card(CardOverrides {
            id: Some(10),
            content: Some("yadda yadda".to_string()),
            created_at: None,
        });
        assert_eq!(card.id, 10);
        assert_eq!(card.content, "yadda yadda");
    }

    #[test]
    fn test_create_many_cards_distinct_ids() {
        let cards = create_many_cards(50, CardOverrides::content("test-content"));
        let ids: HashSet<u64> = cards.iter().map(|c| c.id).collect();
        assert_eq!(cards.len(), 50);
        assert_eq!(ids.len(), 50);
        assert!(cards.iter().all(|c| c.content == "test-content"));
    }

    #[test]
    fn test_ids_increase_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| create_many_cards(100, CardOverrides::default())))
            .collect();
        let ids: HashSet<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .map(|c| c.id)
            .collect();
        assert_eq!(ids.len(), 400);
    }
}
