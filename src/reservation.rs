use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::models::Property;

/// How long an optimistic reservation holds a plot
pub const RESERVATION_WINDOW_DAYS: i64 = 3;

pub fn reservation_window() -> Duration {
    Duration::days(RESERVATION_WINDOW_DAYS)
}

/// What the detail view shows for a booked plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Remaining { days: i64, hours: i64 },
    Expired,
}

impl TimeRemaining {
    pub fn is_expired(&self) -> bool {
        matches!(self, TimeRemaining::Expired)
    }
}

/// When a reservation made at `booked_at` lapses, saturating at the end of
/// the representable calendar.
pub fn expires_at(booked_at: DateTime<Utc>) -> DateTime<Utc> {
    booked_at
        .checked_add_signed(reservation_window())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Time left before a reservation made at `booked_at` lapses.
///
/// Hours are counted on what remains after removing whole days.
pub fn time_remaining(booked_at: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let expiry = expires_at(booked_at);
    if now >= expiry {
        return TimeRemaining::Expired;
    }

    let left = expiry - now;
    let days = left.num_days();
    let hours = (left - Duration::days(days)).num_hours();
    TimeRemaining::Remaining { days, hours }
}

/// Flip the booking state of the plot with `id`.
///
/// Returns the updated plot, or `None` when no plot carries that id. An
/// unknown id leaves the collection untouched.
pub fn toggle_reservation<'a>(
    properties: &'a mut [Property],
    id: &str,
    now: DateTime<Utc>,
) -> Option<&'a Property> {
    let Some(property) = properties.iter_mut().find(|p| p.id == id) else {
        debug!("Reservation toggle ignored, unknown property id: {}", id);
        return None;
    };

    property.booked_at = match property.booked_at {
        Some(_) => {
            info!("Cancelled reservation for {}", property.id);
            None
        }
        None => {
            info!("Reserved {} until {}", property.id, expires_at(now));
            Some(now)
        }
    };

    Some(property)
}

/// Clear every reservation whose window has passed, returning the released ids
pub fn release_expired(properties: &mut [Property], now: DateTime<Utc>) -> Vec<String> {
    let mut released = Vec::new();

    for property in properties.iter_mut() {
        let expired = property
            .reservation_status(now)
            .is_some_and(|status| status.is_expired());
        if expired {
            property.booked_at = None;
            released.push(property.id.clone());
        }
    }

    if !released.is_empty() {
        info!("Released {} expired reservation(s): {}", released.len(), released.join(", "));
    }

    released
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::seed_properties;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn full_window_right_after_booking() {
        assert_eq!(
            time_remaining(t0(), t0()),
            TimeRemaining::Remaining { days: 3, hours: 0 }
        );
        // sub-second drift does not show up in whole hours
        assert_eq!(
            time_remaining(t0(), t0() + Duration::milliseconds(400)),
            TimeRemaining::Remaining { days: 2, hours: 23 }
        );
    }

    #[test]
    fn hours_are_remainder_after_days() {
        let now = t0() + Duration::hours(30) + Duration::minutes(10);
        assert_eq!(
            time_remaining(t0(), now),
            TimeRemaining::Remaining { days: 1, hours: 17 }
        );
    }

    #[test]
    fn expired_at_and_after_window() {
        let expiry = t0() + Duration::days(3);
        assert_eq!(time_remaining(t0(), expiry), TimeRemaining::Expired);
        assert_eq!(
            time_remaining(t0(), expiry + Duration::weeks(2)),
            TimeRemaining::Expired
        );
        assert_eq!(
            time_remaining(t0(), expiry - Duration::seconds(1)),
            TimeRemaining::Remaining { days: 0, hours: 0 }
        );
    }

    #[test]
    fn far_future_booking_does_not_overflow() {
        let booked_at = DateTime::<Utc>::MAX_UTC - Duration::seconds(1);
        assert_eq!(expires_at(booked_at), DateTime::<Utc>::MAX_UTC);
        assert!(!time_remaining(booked_at, t0()).is_expired());
        assert_eq!(time_remaining(booked_at, DateTime::<Utc>::MAX_UTC), TimeRemaining::Expired);

        let mut properties = seed_properties();
        toggle_reservation(&mut properties, "prop-001", booked_at);
        assert!(properties[0].is_booked());
    }

    #[test]
    fn far_future_timestamp_from_feed_is_displayable() {
        let raw = serde_json::json!({
            "id": "prop-x",
            "title": "t",
            "location": "l",
            "price": 1,
            "size": "100 sq.ft",
            "facing": "North",
            "coordinates": { "lat": 0.0, "lng": 0.0 },
            "isBooked": true,
            "bookingTimestamp": 8_210_266_876_799_000_i64
        });
        let property: Property = serde_json::from_value(raw).unwrap();
        assert!(matches!(
            property.reservation_status(t0()),
            Some(TimeRemaining::Remaining { .. })
        ));
    }

    #[test]
    fn toggle_books_then_cancels() {
        let mut properties = seed_properties();
        let booked = toggle_reservation(&mut properties, "prop-002", t0()).unwrap();
        assert!(booked.is_booked());
        assert_eq!(booked.booked_at, Some(t0()));

        let later = t0() + Duration::hours(5);
        let cancelled = toggle_reservation(&mut properties, "prop-002", later).unwrap();
        assert!(!cancelled.is_booked());
        assert!(cancelled.booked_at.is_none());
    }

    #[test]
    fn toggle_twice_restores_every_plot() {
        let original = seed_properties();
        for property in &original {
            let mut properties = original.clone();
            toggle_reservation(&mut properties, &property.id, t0());
            toggle_reservation(&mut properties, &property.id, t0() + Duration::minutes(1));
            assert_eq!(properties, original);
        }
    }

    #[test]
    fn toggle_only_touches_matching_plot() {
        let mut properties = seed_properties();
        toggle_reservation(&mut properties, "prop-004", t0());
        let booked: Vec<_> = properties.iter().filter(|p| p.is_booked()).map(|p| p.id.as_str()).collect();
        assert_eq!(booked, ["prop-004"]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut properties = seed_properties();
        let before = properties.clone();
        assert!(toggle_reservation(&mut properties, "prop-999", t0()).is_none());
        assert_eq!(properties, before);
    }

    #[test]
    fn release_expired_clears_only_lapsed() {
        let mut properties = seed_properties();
        properties[0].booked_at = Some(t0() - Duration::days(4));
        properties[1].booked_at = Some(t0() - Duration::days(1));

        let released = release_expired(&mut properties, t0());
        assert_eq!(released, vec!["prop-001".to_string()]);
        assert!(!properties[0].is_booked());
        assert!(properties[1].is_booked());

        assert!(release_expired(&mut properties, t0()).is_empty());
    }
}
