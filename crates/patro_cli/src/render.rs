//! Plain-text rendering of the calendar views.

use std::collections::BTreeMap;
use std::fmt::Write;

use patro_core::{
    BsDate, DayRecord, FestivalEntry, MonthHeader, NEPALI_WEEKDAYS, TodaySummary, ZodiacSign,
    format_english_date, to_nepali_number,
};

/// Width of one grid cell, in characters.
const CELL_WIDTH: usize = 10;

fn pad_cell(text: &str) -> String {
    let len = text.chars().count();
    let mut out = " ".repeat(CELL_WIDTH.saturating_sub(len));
    out.push_str(text);
    out
}

/// Label of one grid cell: day number in both digit sets, `*` for event days,
/// brackets for today.
fn cell_label(record: &DayRecord) -> String {
    let mut label = format!(
        "{} {}",
        record.nepali_day,
        to_nepali_number(record.nepali_day as u64)
    );
    if record.is_festival() {
        label.push('*');
    }
    if record.is_today {
        label = format!("[{label}]");
    }
    label
}

/// Month view: header, weekday row, grid and the event legend.
pub fn month(
    header: &MonthHeader,
    grid: &[[Option<u8>; 7]],
    records: &BTreeMap<u8, DayRecord>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  ({})", header.nepali, header.english);
    for name in NEPALI_WEEKDAYS {
        out.push_str(&pad_cell(name));
    }
    out.push('\n');

    for week in grid {
        for &cell in week {
            let text = cell
                .and_then(|day| records.get(&day))
                .map(cell_label)
                .unwrap_or_default();
            out.push_str(&pad_cell(&text));
        }
        out.push('\n');
    }

    let marked: Vec<&DayRecord> = records.values().filter(|r| r.is_festival()).collect();
    if !marked.is_empty() {
        out.push('\n');
        for r in marked {
            let _ = writeln!(
                out,
                "{:>3}  {}  {}  ({})",
                r.nepali_day,
                r.events.join(", "),
                r.tithi,
                format_english_date(r.approximate_gregorian)
            );
        }
    }
    out
}

/// Month title, then one line per day with tithi, approximate Gregorian date
/// and events.
pub fn month_details(
    header: &MonthHeader,
    cursor: &BsDate,
    records: &BTreeMap<u8, DayRecord>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  ({} {})",
        header.nepali,
        cursor.bs_month().name(),
        cursor.year
    );
    for r in records.values() {
        let today = if r.is_today { " (today)" } else { "" };
        let _ = writeln!(
            out,
            "{:>3}  {}  {} ({})  {}{}",
            r.nepali_day,
            r.approximate_gregorian,
            r.tithi,
            r.tithi.paksha.name(),
            r.events.join(", "),
            today
        );
    }
    out
}

pub fn today(summary: &TodaySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  |  {}", summary.bs_year, summary.gregorian_year);
    let _ = writeln!(out, "Time:    {}", summary.clock);
    let _ = writeln!(out, "BS:      {}", summary.bs_date);
    let _ = writeln!(out, "AD:      {}", summary.gregorian_date);
    let _ = writeln!(out, "Tithi:   {}", summary.tithi);
    let _ = writeln!(out, "Weekday: {}", summary.weekday);
    out
}

pub fn festivals(entries: &[FestivalEntry]) -> String {
    let mut out = String::new();
    for f in entries {
        let _ = writeln!(
            out,
            "{} ({})  {}: {}",
            f.nepali_date_label, f.gregorian_date_label, f.name, f.description
        );
    }
    out
}

pub fn horoscope(sign: &ZodiacSign) -> String {
    format!(
        "{} ({})\n{}\n",
        sign.display_name,
        sign.key.western_name(),
        sign.horoscope_text
    )
}
