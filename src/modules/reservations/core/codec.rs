// Reservation record codec.
//
// Purpose
// - Map rows of the durable comma-separated log onto the canonical record,
//   across every width the log has carried over its lifetime.
//
// Responsibilities
// - Resolve the historical row width once, here; the rest of the crate only
//   ever sees `ReservationRecord`.
// - Always encode at the current full width so the log upgrades itself as
//   rows are appended or rewritten.

use crate::modules::reservations::core::record::{ReservationRecord, ReservationStatus};

/// Current full row width.
pub const FIELD_COUNT: usize = 8;

const HEADER_FIELDS: [&str; FIELD_COUNT] = [
    "timestamp", "empresa", "chofer", "telefono", "dock", "fecha", "hora", "status",
];

/// First-field values that mark a header row, whichever era wrote it.
const HEADER_MARKERS: [&str; 3] = ["timestamp", "ts", "time"];

/// The three row widths the log has carried, widest match first.
enum LegacyRow<'a> {
    /// ts, company, driver, phone, dock, date, time, status
    Full(&'a [&'a str]),
    /// ts, company, driver, phone, dock, date, time — status implicit ACTIVE
    NoStatus(&'a [&'a str]),
    /// ts, company, driver, phone, date, time — single-dock era, dock and
    /// status both implicit
    SingleDock(&'a [&'a str]),
}

impl<'a> LegacyRow<'a> {
    fn classify(fields: &'a [&'a str]) -> Option<Self> {
        match fields.len() {
            n if n >= FIELD_COUNT => Some(Self::Full(&fields[..FIELD_COUNT])),
            7 => Some(Self::NoStatus(fields)),
            6 => Some(Self::SingleDock(fields)),
            _ => None,
        }
    }

    fn normalize(self, default_dock: &str) -> ReservationRecord {
        let (fields, dock, date, time, status) = match self {
            Self::Full(f) => (f, f[4], f[5], f[6], ReservationStatus::parse(f[7])),
            Self::NoStatus(f) => (f, f[4], f[5], f[6], ReservationStatus::Active),
            Self::SingleDock(f) => (f, default_dock, f[4], f[5], ReservationStatus::Active),
        };
        ReservationRecord {
            created_at: fields[0].trim().to_string(),
            company: fields[1].trim().to_string(),
            driver: fields[2].trim().to_string(),
            phone: fields[3].trim().to_string(),
            dock: dock.trim().to_string(),
            date: date.trim().to_string(),
            time: time.trim().to_string(),
            status,
        }
    }
}

/// One raw log line, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    Record(ReservationRecord),
    /// Blank line or a header row.
    Skip,
    /// Narrower than the narrowest historical width. Never aborts a read.
    Malformed,
}

pub fn is_header(first_field: &str) -> bool {
    let marker = first_field.trim().to_ascii_lowercase();
    HEADER_MARKERS.contains(&marker.as_str())
}

pub fn decode_fields(fields: &[&str], default_dock: &str) -> Option<ReservationRecord> {
    LegacyRow::classify(fields).map(|row| row.normalize(default_dock))
}

pub fn decode_line(line: &str, default_dock: &str) -> DecodedLine {
    if line.trim().is_empty() {
        return DecodedLine::Skip;
    }
    let fields: Vec<&str> = line.split(',').collect();
    if is_header(fields[0]) {
        return DecodedLine::Skip;
    }
    match decode_fields(&fields, default_dock) {
        Some(record) => DecodedLine::Record(record),
        None => DecodedLine::Malformed,
    }
}

/// Always emits the full current width, whatever width the record was read
/// at. The log carries no quoting, so an embedded comma or newline would
/// shift width detection on the next read; both are flattened to spaces.
pub fn encode_record(record: &ReservationRecord) -> String {
    [
        record.created_at.as_str(),
        record.company.as_str(),
        record.driver.as_str(),
        record.phone.as_str(),
        record.dock.as_str(),
        record.date.as_str(),
        record.time.as_str(),
        record.status.as_str(),
    ]
    .map(clean_field)
    .join(",")
}

pub fn header_line() -> String {
    HEADER_FIELDS.join(",")
}

fn clean_field(value: &str) -> String {
    value
        .trim()
        .replace([',', '\n', '\r'], " ")
}

#[cfg(test)]
mod reservation_codec_tests {
    use super::*;
    use rstest::rstest;

    const DEFAULT_DOCK: &str = "Dock 1";

    fn decode(line: &str) -> DecodedLine {
        decode_line(line, DEFAULT_DOCK)
    }

    #[rstest]
    fn it_should_decode_a_full_width_row_keeping_the_explicit_status() {
        let line = "2024-05-30 12:00:00,Acme,J. Doe,+17005551234,Dock 3,2024-06-01,08:30,CANCELLED";
        match decode(line) {
            DecodedLine::Record(record) => {
                assert_eq!(record.dock, "Dock 3");
                assert_eq!(record.status, ReservationStatus::Cancelled);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_default_status_to_active_for_a_seven_field_row() {
        let line = "2024-05-30 12:00:00,Acme,J. Doe,+17005551234,Dock 3,2024-06-01,08:30";
        match decode(line) {
            DecodedLine::Record(record) => {
                assert_eq!(record.dock, "Dock 3");
                assert_eq!(record.date, "2024-06-01");
                assert_eq!(record.time, "08:30");
                assert_eq!(record.status, ReservationStatus::Active);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_default_dock_and_status_for_a_six_field_row() {
        let line = "2024-05-30 12:00:00,Acme,J. Doe,+17005551234,2024-06-01,08:30";
        match decode(line) {
            DecodedLine::Record(record) => {
                assert_eq!(record.dock, DEFAULT_DOCK);
                assert_eq!(record.date, "2024-06-01");
                assert_eq!(record.time, "08:30");
                assert_eq!(record.status, ReservationStatus::Active);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_take_the_first_eight_fields_of_an_overlong_row() {
        let line =
            "2024-05-30 12:00:00,Acme,J. Doe,+17005551234,Dock 3,2024-06-01,08:30,ACTIVE,junk";
        match decode(line) {
            DecodedLine::Record(record) => {
                assert_eq!(record.status, ReservationStatus::Active);
                assert_eq!(record.time, "08:30");
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[rstest]
    #[case("timestamp,empresa,chofer,telefono,dock,fecha,hora,status")]
    #[case("TS,a,b,c,d,e")]
    #[case("Time,a,b,c,d,e,f")]
    #[case("")]
    #[case("   ")]
    fn it_should_skip_headers_and_blank_lines(#[case] line: &str) {
        assert_eq!(decode(line), DecodedLine::Skip);
    }

    #[rstest]
    #[case("2024-05-30 12:00:00,Acme,J. Doe")]
    #[case("just-one-field-that-is-no-header")]
    fn it_should_flag_rows_narrower_than_the_oldest_width(#[case] line: &str) {
        assert_eq!(decode(line), DecodedLine::Malformed);
    }

    #[rstest]
    fn it_should_trim_every_field_on_decode() {
        let line = " 2024-05-30 12:00:00 , Acme , J. Doe , +17005551234 , Dock 3 , 2024-06-01 , 08:30 , active ";
        match decode(line) {
            DecodedLine::Record(record) => {
                assert_eq!(record.created_at, "2024-05-30 12:00:00");
                assert_eq!(record.company, "Acme");
                assert_eq!(record.status, ReservationStatus::Active);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_round_trip_a_canonical_record() {
        let record = ReservationRecord {
            created_at: "2024-05-30 12:00:00".to_string(),
            company: "Acme Freight".to_string(),
            driver: "J. Doe".to_string(),
            phone: "+17005551234".to_string(),
            dock: "Dock 2".to_string(),
            date: "2024-06-01".to_string(),
            time: "08:30".to_string(),
            status: ReservationStatus::Cancelled,
        };
        let line = encode_record(&record);
        assert_eq!(decode(&line), DecodedLine::Record(record));
    }

    #[rstest]
    fn it_should_flatten_separator_characters_on_encode() {
        let record = ReservationRecord {
            created_at: "2024-05-30 12:00:00".to_string(),
            company: "Acme, Inc.".to_string(),
            driver: "J.\nDoe".to_string(),
            phone: "+17005551234".to_string(),
            dock: "Dock 2".to_string(),
            date: "2024-06-01".to_string(),
            time: "08:30".to_string(),
            status: ReservationStatus::Active,
        };
        let line = encode_record(&record);
        assert_eq!(line.split(',').count(), FIELD_COUNT);
        assert!(!line.contains('\n'));
    }

    #[rstest]
    fn it_should_emit_the_canonical_header() {
        assert!(is_header(header_line().split(',').next().unwrap()));
        assert_eq!(header_line().split(',').count(), FIELD_COUNT);
    }
}
