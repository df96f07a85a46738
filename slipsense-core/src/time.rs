//! Time helpers: slips carry Thai-bank local dates.

use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Bangkok;

/// Today's calendar date in Asia/Bangkok, the default the assembler uses
/// when no date could be extracted from the slip.
pub fn bangkok_today() -> NaiveDate {
    Utc::now().with_timezone(&Bangkok).date_naive()
}
