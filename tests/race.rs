use regex::Regex;

use sort_kit_rs::race::{self, RaceReport, SortRace};
use sort_kit_rs::Error;
use sort_test_tools::patterns;

fn check_report(report: &RaceReport, expected_names: &[&str]) {
    let entries = report.entries();
    let names = entries.iter().map(|entry| entry.name).collect::<Vec<_>>();
    assert_eq!(names, expected_names);

    // The winner can't be slower than anyone else in the same run.
    assert!(entries.iter().all(|entry| report.ticks() <= entry.ticks()));
    assert!(names.contains(&report.fastest()));

    // Ties go to the contender that ran first.
    let first_fastest = entries
        .iter()
        .find(|entry| entry.elapsed == report.elapsed())
        .map(|entry| entry.name);
    assert_eq!(first_fastest, Some(report.fastest()));
}

fn check_report_text(report: &RaceReport, expected_names: &[&str]) {
    let text = report.to_string();
    let mut lines = text.lines();

    let header = Regex::new(r"^The fastest sort is (\w+) and cost (\d+) ticks\.$").unwrap();
    let caps = header.captures(lines.next().unwrap()).unwrap();
    assert_eq!(&caps[1], report.fastest());
    assert_eq!(caps[2].parse::<u64>().unwrap(), report.ticks());

    assert_eq!(lines.next(), Some("*****History*****"));

    let history_line = Regex::new(r"^(\w+) Sort Time : (\d+) ticks$").unwrap();
    let history = lines.collect::<Vec<_>>();
    assert_eq!(history.len(), expected_names.len());
    for ((line, name), entry) in history.iter().zip(expected_names).zip(report.entries()) {
        let caps = history_line.captures(line).unwrap();
        assert_eq!(&caps[1], *name);
        assert_eq!(caps[2].parse::<u64>().unwrap(), entry.ticks());
    }

    assert_eq!(report.history().lines().count(), expected_names.len());
    assert!(text.ends_with('\n'));
}

#[test]
fn generic_race() {
    let data = patterns::random(500);
    let report = SortRace::generic().run(&data).unwrap();

    let expected = ["Merge", "Quick", "Heap", "Bubble", "Insertion", "Selection"];
    check_report(&report, &expected);
    check_report_text(&report, &expected);
}

#[test]
fn generic_race_on_strings() {
    let data = patterns::random(200)
        .into_iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>();
    let report = SortRace::generic().run(&data).unwrap();

    check_report(
        &report,
        &["Merge", "Quick", "Heap", "Bubble", "Insertion", "Selection"],
    );
}

#[test]
fn integer_race() {
    let data = patterns::random(500);
    let report = SortRace::integer().run(&data).unwrap();

    let expected = [
        "Radix4",
        "Radix8",
        "Radix16",
        "Radix32",
        "Merge",
        "Quick",
        "Heap",
        "Bubble",
        "Insertion",
        "Selection",
    ];
    check_report(&report, &expected);
    check_report_text(&report, &expected);
}

#[test]
fn race_does_not_touch_the_source() {
    let data = patterns::descending(300);
    let original = data.clone();

    SortRace::integer().run(&data).unwrap();
    assert_eq!(data, original);
}

#[test]
fn contenders_really_sort() {
    fn sort_and_check(v: &mut [i32]) {
        v.sort();
        // Would panic the race if a contender got anything but a copy of the source.
        assert_eq!(v.len(), 64);
    }

    let data = patterns::random(64);
    let report = SortRace::new()
        .with_contender("Checked", sort_and_check)
        .run(&data)
        .unwrap();

    assert_eq!(report.fastest(), "Checked");
    assert_eq!(report.entries().len(), 1);
}

#[test]
fn custom_race_keeps_insertion_order() {
    let data = patterns::ascending(100);
    let report = SortRace::new()
        .with_contender("Std", |v: &mut [i32]| v.sort())
        .with_contender("StdUnstable", |v: &mut [i32]| v.sort_unstable())
        .with_contender("Noop", |_: &mut [i32]| {})
        .run(&data)
        .unwrap();

    check_report(&report, &["Std", "StdUnstable", "Noop"]);
    check_report_text(&report, &["Std", "StdUnstable", "Noop"]);
}

#[test]
fn empty_input_still_reports() {
    let data: Vec<i32> = Vec::new();
    let report = SortRace::integer().run(&data).unwrap();
    assert_eq!(report.entries().len(), 10);
}

#[test]
fn race_without_contenders() {
    let race = SortRace::<i32>::new();
    assert_eq!(race.run(&[3, 2, 1]), Err(Error::NoContenders));
}

#[test]
fn write_to_sink() {
    let data = patterns::random(100);
    let report = SortRace::generic().run(&data).unwrap();

    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), report.to_string());
}

#[test]
fn display_fastest_prints_full_report() {
    let data = patterns::random(200);

    // Header, separator, then one line per contender.
    let report = race::display_fastest_sort(&data).unwrap();
    let text = report.to_string();
    assert_eq!(text.lines().count(), 2 + SortRace::<i32>::generic().contenders().len());
    assert!(text.starts_with(&format!("The fastest sort is {} ", report.fastest())));

    let report = race::display_fastest_integer_sort(&data).unwrap();
    let text = report.to_string();
    assert_eq!(text.lines().count(), 2 + SortRace::<i32>::integer().contenders().len());
    assert_eq!(text.lines().nth(2), Some(report.entries()[0].to_string().as_str()));
}
