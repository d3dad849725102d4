use crate::{error::CronError, series::StepSeries, utils, Result};
use std::fmt::Display;

/// Numeric type of a single cron field value.
pub type FieldValueType = u8;

/// One parsed field of a cron expression: which field it is plus the
/// value form its text matched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct FieldPattern {
    type_: FieldType,
    form: ValueForm,
}

impl FieldPattern {
    /// Classifies `input` into exactly one [`ValueForm`], validating every
    /// numeric sub-token against the field's domain.
    ///
    /// The whole field text must be consumed by the matched form; anything
    /// else is a hard parse failure.
    pub(crate) fn parse(type_: FieldType, input: &str) -> Result<Self> {
        let form = if input == "*" {
            ValueForm::Every
        } else if let Some(step) = input.strip_prefix("*/") {
            ValueForm::EveryStep(type_.parse_step(step)?)
        } else if input.contains(',') {
            // List items are plain values: a range or step inside a list
            // fails the value parse below.
            let values = input
                .split(',')
                .map(|value| type_.parse_value(value))
                .collect::<Result<Vec<_>>>()?;

            ValueForm::List(values)
        } else if let Some((range, step)) = input.split_once('/') {
            let (start, end) = range
                .split_once('-')
                .ok_or_else(|| CronError::WrongPattern(input.to_owned()))?;

            ValueForm::RangeStep(type_.parse_value(start)?, type_.parse_value(end)?, type_.parse_step(step)?)
        } else if let Some((start, end)) = input.split_once('-') {
            ValueForm::Range(type_.parse_value(start)?, type_.parse_value(end)?)
        } else {
            ValueForm::Single(type_.parse_value(input)?)
        };

        Ok(Self { type_, form })
    }

    pub(crate) fn field_type(&self) -> FieldType {
        self.type_
    }

    /// Expands the matched form into the ordered list of concrete values.
    ///
    /// An empty list means the field is a true wildcard. A reversed range
    /// (`start > end`) expands to nothing rather than wrapping around.
    pub(crate) fn expand(&self) -> Vec<FieldValueType> {
        match &self.form {
            ValueForm::Every => Vec::new(),
            ValueForm::Single(value) => vec![*value],
            ValueForm::List(values) => values.clone(),
            ValueForm::Range(start, end) => StepSeries::new(*start, *end, 1).collect(),
            ValueForm::RangeStep(start, end, step) => StepSeries::new(*start, *end, *step).collect(),
            // The whole-domain series counts from zero for every field,
            // including day and month whose domain starts at 1.
            ValueForm::EveryStep(step) => StepSeries::new(0, self.type_.min_max().1, *step).collect(),
        }
    }
}

impl Display for FieldPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.form)
    }
}

/// Cron field discriminator with the fixed numeric domain of each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldType {
    Minutes = 0,
    Hours = 1,
    Doms = 2,
    Months = 3,
    Dows = 4,
}

impl FieldType {
    pub(crate) fn min_max(self) -> (FieldValueType, FieldValueType) {
        match self {
            Self::Minutes => (0, 59),
            Self::Hours => (0, 23),
            Self::Doms => (1, 31),
            Self::Months => (1, 12),
            Self::Dows => (0, 6),
        }
    }

    fn parse_value(self, input: &str) -> Result<FieldValueType> {
        let (min, max) = self.min_max();
        utils::parse_field_value(input, min, max).ok_or_else(|| CronError::WrongPattern(input.to_owned()))
    }

    /// A step is validated like any other value of the field, with zero
    /// rejected on top of that.
    fn parse_step(self, input: &str) -> Result<FieldValueType> {
        let step = self.parse_value(input)?;
        if step == 0 {
            return Err(CronError::WrongPattern(input.to_owned()));
        }

        Ok(step)
    }
}

/// The six recognized value forms of a cron field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum ValueForm {
    // *
    Every,
    // */step
    EveryStep(FieldValueType),
    // value
    Single(FieldValueType),
    // value,value,...
    List(Vec<FieldValueType>),
    // start-end
    Range(FieldValueType, FieldValueType),
    // start-end/step
    RangeStep(FieldValueType, FieldValueType, FieldValueType),
}

impl Display for ValueForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueForm::Every => write!(f, "*"),
            ValueForm::EveryStep(step) => write!(f, "*/{step}"),
            ValueForm::Single(value) => write!(f, "{value}"),
            ValueForm::List(values) => {
                let values = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{values}")
            }
            ValueForm::Range(start, end) => write!(f, "{start}-{end}"),
            ValueForm::RangeStep(start, end, step) => write!(f, "{start}-{end}/{step}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldType::Minutes)]
    #[case(FieldType::Hours)]
    #[case(FieldType::Doms)]
    #[case(FieldType::Months)]
    #[case(FieldType::Dows)]
    fn test_value_form_display(#[case] type_: FieldType) {
        let test_cases = vec![
            (ValueForm::Every, "*"),
            (ValueForm::EveryStep(5), "*/5"),
            (ValueForm::Single(7), "7"),
            (ValueForm::List(vec![3, 1, 12]), "3,1,12"),
            (ValueForm::Range(2, 5), "2-5"),
            (ValueForm::RangeStep(1, 30, 5), "1-30/5"),
        ];

        for (form, expected) in test_cases {
            assert_eq!(form.to_string(), expected);
            let pattern = FieldPattern { type_, form };
            assert_eq!(pattern.to_string(), expected);
        }
    }

    #[rstest]
    #[case(FieldType::Minutes, "*", ValueForm::Every)]
    #[case(FieldType::Minutes, "0", ValueForm::Single(0))]
    #[case(FieldType::Minutes, "59", ValueForm::Single(59))]
    #[case(FieldType::Minutes, "3,1", ValueForm::List(vec![3, 1]))]
    #[case(FieldType::Minutes, "1,2,3,4", ValueForm::List(vec![1, 2, 3, 4]))]
    #[case(FieldType::Minutes, "5,5", ValueForm::List(vec![5, 5]))]
    #[case(FieldType::Minutes, "2-5", ValueForm::Range(2, 5))]
    #[case(FieldType::Minutes, "5-2", ValueForm::Range(5, 2))]
    #[case(FieldType::Minutes, "7-7", ValueForm::Range(7, 7))]
    #[case(FieldType::Minutes, "0-59/15", ValueForm::RangeStep(0, 59, 15))]
    #[case(FieldType::Minutes, "0-9/2", ValueForm::RangeStep(0, 9, 2))]
    #[case(FieldType::Minutes, "*/10", ValueForm::EveryStep(10))]
    #[case(FieldType::Minutes, "*/59", ValueForm::EveryStep(59))]
    #[case(FieldType::Hours, "*", ValueForm::Every)]
    #[case(FieldType::Hours, "23", ValueForm::Single(23))]
    #[case(FieldType::Hours, "9-17", ValueForm::Range(9, 17))]
    #[case(FieldType::Hours, "8,12,16", ValueForm::List(vec![8, 12, 16]))]
    #[case(FieldType::Hours, "0-23/6", ValueForm::RangeStep(0, 23, 6))]
    #[case(FieldType::Hours, "*/6", ValueForm::EveryStep(6))]
    #[case(FieldType::Doms, "1", ValueForm::Single(1))]
    #[case(FieldType::Doms, "10", ValueForm::Single(10))]
    #[case(FieldType::Doms, "20", ValueForm::Single(20))]
    #[case(FieldType::Doms, "31", ValueForm::Single(31))]
    #[case(FieldType::Doms, "1-15/3", ValueForm::RangeStep(1, 15, 3))]
    #[case(FieldType::Doms, "*/10", ValueForm::EveryStep(10))]
    #[case(FieldType::Months, "12", ValueForm::Single(12))]
    #[case(FieldType::Months, "6,12", ValueForm::List(vec![6, 12]))]
    #[case(FieldType::Months, "3-9", ValueForm::Range(3, 9))]
    #[case(FieldType::Months, "*/5", ValueForm::EveryStep(5))]
    #[case(FieldType::Dows, "0", ValueForm::Single(0))]
    #[case(FieldType::Dows, "6", ValueForm::Single(6))]
    #[case(FieldType::Dows, "1-5", ValueForm::Range(1, 5))]
    #[case(FieldType::Dows, "0,6", ValueForm::List(vec![0, 6]))]
    #[case(FieldType::Dows, "*/2", ValueForm::EveryStep(2))]
    fn test_field_pattern_parse_valid(#[case] type_: FieldType, #[case] input: &str, #[case] expected: ValueForm) {
        let pattern = FieldPattern::parse(type_, input);
        assert!(
            pattern.is_ok(),
            "type = {type_:?}, input = {input}, error = {}",
            pattern.err().unwrap()
        );
        assert_eq!(pattern.unwrap().form, expected, "input = {input}");
    }

    #[rstest]
    #[case(FieldType::Minutes, vec!["", " ", "60", "99", "256", "-1", "+1", "05", "00", "a", "1a", "1 2", "*a", "**", "*,1", "1,", ",1", "1,,2", "1, 2", "1-", "-1-2", "1-2-3", "1-60", "60-61", "/", "*/", "*/a", "*/0", "*/60", "5/2", "0-30/", "0-30/0", "0-30/60", "1-2/3/4", "?", "L", "W", "1#2"])]
    #[case(FieldType::Hours, vec!["", "24", "99", "05", "1,24", "24-25", "*/24", "*/0", "0-12/24", "2/2", "a-b", "1-2,3", "1,2-3"])]
    #[case(FieldType::Doms, vec!["", "0", "32", "010", "1,0", "0-5", "1-32", "*/0", "*/32", "1-10/0", "2/2", "1,2-3", "?", "L", "15W"])]
    #[case(FieldType::Months, vec!["", "0", "13", "01", "JAN", "jan-dec", "1,13", "0-5", "*/0", "*/13", "1-6/13", "2/2"])]
    #[case(FieldType::Dows, vec!["", "7", "07", "SUN", "mon-fri", "1,7", "5-7", "*/0", "*/7", "0-6/7", "2/2", "1#4", "4L"])]
    fn test_field_pattern_parse_invalid(#[case] type_: FieldType, #[case] inputs: Vec<&str>) {
        for input in inputs {
            let result = FieldPattern::parse(type_, input);
            assert!(result.is_err(), "type = {type_:?}, input = '{input}'");
        }
    }

    #[rstest]
    #[case(FieldType::Minutes, "*", vec![])]
    #[case(FieldType::Minutes, "30", vec![30])]
    #[case(FieldType::Minutes, "3,1,2", vec![3, 1, 2])]
    #[case(FieldType::Minutes, "0-5", vec![0, 1, 2, 3, 4, 5])]
    #[case(FieldType::Minutes, "5-0", vec![])]
    #[case(FieldType::Minutes, "9-9", vec![9])]
    #[case(FieldType::Minutes, "0-9/2", vec![0, 2, 4, 6, 8])]
    #[case(FieldType::Minutes, "50-59/3", vec![50, 53, 56, 59])]
    #[case(FieldType::Minutes, "30-10/5", vec![])]
    #[case(FieldType::Minutes, "*/15", vec![0, 15, 30, 45])]
    #[case(FieldType::Minutes, "*/50", vec![0, 50])]
    #[case(FieldType::Hours, "*/6", vec![0, 6, 12, 18])]
    #[case(FieldType::Hours, "9-17", (9..=17).collect::<Vec<FieldValueType>>())]
    #[case(FieldType::Doms, "*", vec![])]
    #[case(FieldType::Doms, "1-31", (1..=31).collect::<Vec<FieldValueType>>())]
    #[case(FieldType::Doms, "*/10", vec![0, 10, 20, 30])]
    #[case(FieldType::Doms, "*/7", vec![0, 7, 14, 21, 28])]
    #[case(FieldType::Months, "*/5", vec![0, 5, 10])]
    #[case(FieldType::Months, "1-12", (1..=12).collect::<Vec<FieldValueType>>())]
    #[case(FieldType::Dows, "*/2", vec![0, 2, 4, 6])]
    #[case(FieldType::Dows, "1-5", vec![1, 2, 3, 4, 5])]
    fn test_field_pattern_expand(#[case] type_: FieldType, #[case] input: &str, #[case] expected: Vec<FieldValueType>) {
        let pattern = FieldPattern::parse(type_, input).unwrap();
        assert_eq!(pattern.expand(), expected, "type = {type_:?}, input = {input}");
    }

    #[rstest]
    #[case(FieldType::Minutes, "*")]
    #[case(FieldType::Minutes, "30")]
    #[case(FieldType::Minutes, "3,1,2")]
    #[case(FieldType::Minutes, "0-5")]
    #[case(FieldType::Minutes, "0-59/15")]
    #[case(FieldType::Minutes, "*/15")]
    #[case(FieldType::Doms, "1-31")]
    #[case(FieldType::Dows, "0,6")]
    fn test_field_pattern_display_round_trip(#[case] type_: FieldType, #[case] input: &str) {
        let pattern = FieldPattern::parse(type_, input).unwrap();
        assert_eq!(pattern.to_string(), input);
        assert_eq!(FieldPattern::parse(type_, &pattern.to_string()).unwrap(), pattern);
    }
}
