use crate::{
    error::CronError,
    pattern::{FieldPattern, FieldType, FieldValueType},
    series::StepSeries,
    utils, Result,
};
use std::{fmt::Display, str::FromStr};

/// Number of fields in a cron expression.
const FIELD_COUNT: usize = 5;

/// One concrete matched instant, expressed as the minimal set of
/// constrained field values.
///
/// Every entry returned by [`get_schedules`] carries `minute` and `hour`.
/// `day` and `month` are either both present or both absent; `weekday`
/// appears independently of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    /// Minute of the hour, `0..=59`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub minute: Option<FieldValueType>,
    /// Hour of the day, `0..=23`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hour: Option<FieldValueType>,
    /// Day of the month, `1..=31`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub day: Option<FieldValueType>,
    /// Month of the year, `1..=12`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub month: Option<FieldValueType>,
    /// Day of the week, `0..=6`, with `0` being Sunday.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub weekday: Option<FieldValueType>,
}

impl ScheduleEntry {
    /// Neutral element for combination: no field constrained.
    pub(crate) const EMPTY: Self = Self {
        minute: None,
        hour: None,
        day: None,
        month: None,
        weekday: None,
    };

    /// An entry constraining exactly one field.
    pub(crate) fn bound(type_: FieldType, value: FieldValueType) -> Self {
        let mut entry = Self::EMPTY;
        match type_ {
            FieldType::Minutes => entry.minute = Some(value),
            FieldType::Hours => entry.hour = Some(value),
            FieldType::Doms => entry.day = Some(value),
            FieldType::Months => entry.month = Some(value),
            FieldType::Dows => entry.weekday = Some(value),
        }

        entry
    }

    /// Merges two partial entries, with `other`'s bindings winning on
    /// collision.
    pub(crate) fn merge(&self, other: &Self) -> Self {
        Self {
            minute: other.minute.or(self.minute),
            hour: other.hour.or(self.hour),
            day: other.day.or(self.day),
            month: other.month.or(self.month),
            weekday: other.weekday.or(self.weekday),
        }
    }

    pub(crate) fn is_unconstrained(&self) -> bool {
        *self == Self::EMPTY
    }

    /// `true` if the entry binds a day greater than its month's fixed
    /// maximum day count. Months without a calendar table row never
    /// invalidate a day.
    pub(crate) fn is_impossible_date(&self) -> bool {
        match (self.month, self.day) {
            (Some(month), Some(day)) => utils::max_days_in_month(month).is_some_and(|max| day > max),
            _ => false,
        }
    }
}

impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = [
            ("weekday", self.weekday),
            ("month", self.month),
            ("day", self.day),
            ("hour", self.hour),
            ("minute", self.minute),
        ];

        let bound = fields
            .iter()
            .filter_map(|(name, value)| value.map(|value| format!("{name}={value}")))
            .collect::<Vec<_>>();

        if bound.is_empty() {
            write!(f, "*")
        } else {
            write!(f, "{}", bound.join(" "))
        }
    }
}

/// Represents a parsed five-field cron expression.
///
/// For the expression format and usage examples, please refer to the
/// [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct CronExpression {
    minute: FieldPattern,
    hour: FieldPattern,
    dom: FieldPattern,
    month: FieldPattern,
    dow: FieldPattern,
}

impl CronExpression {
    /// Parses and validates the provided `expression` and constructs a
    /// [`CronExpression`] instance.
    ///
    /// Alternative ways to construct it are the `try_from` and `from_str`
    /// methods.
    ///
    /// Returns [`CronError::WrongPattern`] carrying the whole original
    /// expression when the field count is wrong, any field fails the
    /// grammar, or any value is out of its field's domain.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        let fields: Vec<&str> = expression.split_whitespace().collect();

        if fields.len() != FIELD_COUNT {
            return Err(CronError::WrongPattern(expression));
        }

        // Field-level failures are re-surfaced uniformly with the whole
        // offending expression, never with internal detail.
        Self::parse_fields(&fields).map_err(|_| CronError::WrongPattern(expression))
    }

    fn parse_fields(fields: &[&str]) -> Result<Self> {
        Ok(Self {
            minute: FieldPattern::parse(FieldType::Minutes, fields[0])?,
            hour: FieldPattern::parse(FieldType::Hours, fields[1])?,
            dom: FieldPattern::parse(FieldType::Doms, fields[2])?,
            month: FieldPattern::parse(FieldType::Months, fields[3])?,
            dow: FieldPattern::parse(FieldType::Dows, fields[4])?,
        })
    }

    /// Expands the expression into the complete, ordered list of schedule
    /// entries it matches.
    ///
    /// Entries appear in nesting order: weekday (when constrained) varies
    /// outermost, then month, day, hour, with minute innermost. When both
    /// day-of-month and day-of-week are constrained, the result is the
    /// union of both branches, weekday branch first.
    pub fn schedules(&self) -> Vec<ScheduleEntry> {
        let minutes = field_components(&self.minute);
        let hours = field_components(&self.hour);
        let days = field_components(&self.dom);
        let months = field_components(&self.month);
        let weekdays = field_components(&self.dow);

        let (minutes, hours, days, months) = apply_domain_defaults(minutes, hours, days, months);

        assemble(&weekdays, &months, &days, &hours, &minutes)
    }
}

/// Expands `expression` into the complete, ordered list of schedule
/// entries it matches.
///
/// This is shorthand for [`CronExpression::new`] followed by
/// [`CronExpression::schedules`]; see those methods for the details.
pub fn get_schedules(expression: &str) -> Result<Vec<ScheduleEntry>> {
    Ok(CronExpression::new(expression)?.schedules())
}

/// Turns one parsed field into its component list: one single-binding
/// entry per concrete value, or the empty list for a wildcard.
fn field_components(pattern: &FieldPattern) -> Vec<ScheduleEntry> {
    let type_ = pattern.field_type();
    pattern
        .expand()
        .into_iter()
        .map(|value| ScheduleEntry::bound(type_, value))
        .collect()
}

/// The full ascending domain of a field as a component list.
fn full_range(type_: FieldType) -> Vec<ScheduleEntry> {
    let (min, max) = type_.min_max();
    StepSeries::new(min, max, 1)
        .map(|value| ScheduleEntry::bound(type_, value))
        .collect()
}

/// Replaces certain wildcard lists with explicit full ranges before
/// combination.
///
/// Minute and hour always enumerate. Day and month enumerate only when the
/// other of the pair is explicit; weekday never defaults. Emptiness is
/// judged on the lists as extracted, before any replacement.
fn apply_domain_defaults(
    minutes: Vec<ScheduleEntry>,
    hours: Vec<ScheduleEntry>,
    days: Vec<ScheduleEntry>,
    months: Vec<ScheduleEntry>,
) -> (Vec<ScheduleEntry>, Vec<ScheduleEntry>, Vec<ScheduleEntry>, Vec<ScheduleEntry>) {
    let day_is_wildcard = days.is_empty();
    let month_is_wildcard = months.is_empty();

    let minutes = if minutes.is_empty() {
        full_range(FieldType::Minutes)
    } else {
        minutes
    };
    let hours = if hours.is_empty() { full_range(FieldType::Hours) } else { hours };
    let days = if day_is_wildcard && !month_is_wildcard {
        full_range(FieldType::Doms)
    } else {
        days
    };
    let months = if month_is_wildcard && !day_is_wildcard {
        full_range(FieldType::Months)
    } else {
        months
    };

    (minutes, hours, days, months)
}

/// Cartesian join of two component lists, outer varying slowest.
///
/// An empty list joins as the single neutral entry. A merged pair naming
/// an impossible calendar date is discarded, as is a pair that ends up
/// with no bindings at all.
fn combine(outer: &[ScheduleEntry], inner: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    const NEUTRAL: &[ScheduleEntry] = &[ScheduleEntry::EMPTY];

    let outer = if outer.is_empty() { NEUTRAL } else { outer };
    let inner = if inner.is_empty() { NEUTRAL } else { inner };

    let mut combined = Vec::with_capacity(outer.len() * inner.len());
    for outer_entry in outer {
        for inner_entry in inner {
            let merged = outer_entry.merge(inner_entry);
            if merged.is_impossible_date() || merged.is_unconstrained() {
                continue;
            }

            combined.push(merged);
        }
    }

    combined
}

/// Composes the final entry list from the five component lists.
///
/// Three non-exclusive branches, concatenated in fixed order: the bare
/// time branch, the weekday branch, and the day/month branch. Day-of-month
/// and day-of-week restrictions combine as a union, so both of the latter
/// branches contribute when both fields are constrained.
fn assemble(
    weekdays: &[ScheduleEntry],
    months: &[ScheduleEntry],
    days: &[ScheduleEntry],
    hours: &[ScheduleEntry],
    minutes: &[ScheduleEntry],
) -> Vec<ScheduleEntry> {
    let times = combine(hours, minutes);
    let mut entries = Vec::new();

    if weekdays.is_empty() && days.is_empty() && months.is_empty() {
        entries.extend_from_slice(&times);
    }
    if !weekdays.is_empty() {
        entries.extend(combine(weekdays, &times));
    }
    if !days.is_empty() || !months.is_empty() {
        entries.extend(combine(months, &combine(days, &times)));
    }

    entries
}

impl From<CronExpression> for String {
    fn from(value: CronExpression) -> Self {
        value.to_string()
    }
}

impl From<&CronExpression> for String {
    fn from(value: &CronExpression) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CronExpression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for CronExpression {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CronExpression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for CronExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.dom, self.month, self.dow
        )
    }
}
