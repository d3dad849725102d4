use cron_expand::{get_schedules, Result, ScheduleEntry};

#[test]
fn time_product() -> Result<()> {
    // Minute values × hour values, hour varying slowest.
    let entries = get_schedules("0,30 8-10 * * *")?;

    let expected: Vec<ScheduleEntry> = [8, 9, 10]
        .iter()
        .flat_map(|&hour| {
            [0, 30].iter().map(move |&minute| ScheduleEntry {
                minute: Some(minute),
                hour: Some(hour),
                ..ScheduleEntry::default()
            })
        })
        .collect();

    assert_eq!(entries, expected);

    Ok(())
}

#[test]
fn union_of_day_and_weekday() -> Result<()> {
    let entries = get_schedules("0 0 1 1 0")?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].weekday, Some(0));
    assert_eq!(entries[0].day, None);
    assert_eq!(entries[0].month, None);
    assert_eq!(entries[1].weekday, None);
    assert_eq!(entries[1].day, Some(1));
    assert_eq!(entries[1].month, Some(1));

    Ok(())
}

#[test]
fn deterministic() -> Result<()> {
    let first = get_schedules("*/10 */6 15 * 3")?;
    let second = get_schedules("*/10 */6 15 * 3")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn no_impossible_dates() -> Result<()> {
    for day in [29, 30, 31] {
        for entry in get_schedules(&format!("0 0 {day} * *"))? {
            let month = entry.month.unwrap();
            let max = match month {
                2 => 29,
                4 | 6 | 9 | 11 => 30,
                _ => 31,
            };

            assert!(entry.day.unwrap() <= max, "entry = {entry}");
        }
    }

    Ok(())
}
