use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Local departure time of the trip, read in `TRIP_ZONE`.
pub const TRIP_DEPARTURE: &str = "2025-12-31 23:59:59";
pub const TRIP_ZONE: Tz = chrono_tz::Europe::Berlin;

const DEPARTURE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const EVENT_PASSED_TEXT: &str = "🏔️ Время вышло — значит, пора в дорогу! \
Счастливого пути, мягкого снега, тёплой сауны и минимум падений 🙌";

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Tz>,
}

/// Positive time left until the target, split into calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Returns `None` once the target has been reached.
    pub fn from_secs(total: i64) -> Option<Self> {
        if total <= 0 {
            return None;
        }

        let days = total / SECS_PER_DAY;
        let rest = total % SECS_PER_DAY;
        let hours = rest / SECS_PER_HOUR;
        let rest = rest % SECS_PER_HOUR;

        Some(Self {
            days,
            hours,
            minutes: rest / SECS_PER_MINUTE,
            seconds: rest % SECS_PER_MINUTE,
        })
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Once a larger unit shows up, every smaller one is printed too.
        if self.days > 0 {
            write!(f, "{} дн. ", self.days)?;
        }
        if self.hours > 0 || self.days > 0 {
            write!(f, "{} ч. ", self.hours)?;
        }
        if self.minutes > 0 || self.hours > 0 || self.days > 0 {
            write!(f, "{} мин. ", self.minutes)?;
        }
        write!(f, "{} сек.", self.seconds)
    }
}

impl Countdown {
    /// Fails on malformed input and on local times skipped or repeated by DST.
    pub fn new(local: &str, zone: Tz) -> anyhow::Result<Self> {
        let naive = NaiveDateTime::parse_from_str(local, DEPARTURE_FORMAT)?;
        let target = zone
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| anyhow::anyhow!("{} is not a single instant in {}", local, zone))?;
        Ok(Self { target })
    }

    pub fn trip() -> anyhow::Result<Self> {
        Self::new(TRIP_DEPARTURE, TRIP_ZONE)
    }

    pub fn remaining_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<Remaining> {
        let delta = self.target.with_timezone(&Utc) - now.with_timezone(&Utc);
        Remaining::from_secs(delta.num_seconds())
    }

    pub fn text_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String {
        match self.remaining_at(now) {
            Some(left) => format!(
                "⏳ До поездки осталось:\n{}\n\nДата выезда: {} ({})",
                left,
                self.target.format("%d.%m.%Y %H:%M:%S"),
                self.target.timezone().name()
            ),
            None => EVENT_PASSED_TEXT.to_string(),
        }
    }
}
