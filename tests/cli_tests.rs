use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::Sandbox;

#[test]
fn test_init_creates_empty_store() {
    let sb = Sandbox::new();

    sb.cal()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&sb.store()).exists());
    assert!(sb.stored_events().is_empty());
    // test mode never writes the config file
    assert!(!sb.home().join("rschoolcal.conf").exists());
}

#[test]
fn test_add_and_list() {
    let sb = Sandbox::new();
    sb.init();

    sb.cal()
        .args([
            "add",
            "Staff meeting",
            "--start",
            "2025-11-12 09:30",
            "--end",
            "2025-11-12 10:30",
            "--type",
            "meeting",
            "--location",
            "Room 4",
        ])
        .assert()
        .success()
        .stdout(contains("Added 'Staff meeting' on 2025-11-12 (09:30-10:30)"));

    sb.add("Sports day", "2025-12-02 08:00", "2025-12-02 15:00");

    sb.cal()
        .args(["list", "--period", "2025-11"])
        .assert()
        .success()
        .stdout(contains("Staff meeting"))
        .stdout(contains("Room 4"))
        .stdout(contains("Sports day").not());

    sb.cal()
        .args(["list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2 event(s)"));

    let events = sb.stored_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Staff meeting");
}

#[test]
fn test_add_all_day_without_end() {
    let sb = Sandbox::new();
    sb.init();

    sb.cal()
        .args(["add", "Founders day", "--start", "2025-11-20", "--all-day"])
        .assert()
        .success()
        .stdout(contains("all day"));

    let ev = &sb.stored_events()[0];
    assert!(ev.all_day);
    assert_eq!(ev.start, ev.end);
}

#[test]
fn test_read_only_role_cannot_add() {
    let sb = Sandbox::new();
    sb.init();

    sb.cal()
        .args([
            "--role",
            "parent",
            "add",
            "Party",
            "--start",
            "2025-11-12 15:00",
        ])
        .assert()
        .failure()
        .stderr(contains("not allowed"));

    assert!(sb.stored_events().is_empty());
}

#[test]
fn test_add_rejects_end_before_start() {
    let sb = Sandbox::new();
    sb.init();

    sb.cal()
        .args([
            "add",
            "Backwards",
            "--start",
            "2025-11-12 10:00",
            "--end",
            "2025-11-12 09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid event"));

    sb.cal()
        .args(["add", "Bad", "--start", "tomorrow"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_month_view() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    sb.cal()
        .args(["view", "--mode", "month", "--date", "2025-11-12"])
        .assert()
        .success()
        .stdout(contains("November 2025"))
        .stdout(contains("Children's Day"))
        .stdout(contains("09:30 Staff"));

    sb.cal()
        .args(["view", "--mode", "month", "--date", "2025-11-12", "--next"])
        .assert()
        .success()
        .stdout(contains("December 2025"))
        .stdout(contains("Christmas Day"));

    sb.cal()
        .args(["view", "--mode", "month", "--date", "2025-11-12", "--prev", "2"])
        .assert()
        .success()
        .stdout(contains("September 2025"));
}

#[test]
fn test_view_rejects_step_counts_beyond_range() {
    let sb = Sandbox::new();
    sb.init();

    sb.cal()
        .args(["view", "--mode", "month", "--date", "2025-11-12", "--next", "4294967295"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));

    sb.cal()
        .args(["view", "--mode", "day", "--date", "2025-11-12", "--prev", "2147483648"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_day_and_week_views() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    sb.cal()
        .args(["view", "--mode", "day", "--date", "2025-11-12"])
        .assert()
        .success()
        .stdout(contains("Staff meeting (09:30-10:30)"));

    sb.cal()
        .args(["view", "--mode", "week", "--date", "2025-11-12"])
        .assert()
        .success()
        .stdout(contains("Week 2025-11-09 - 2025-11-15"))
        .stdout(contains("Staff meeting"));
}

#[test]
fn test_read_only_view_notice() {
    let sb = Sandbox::new();
    sb.init();

    sb.cal()
        .args(["--role", "student", "view", "--mode", "year", "--date", "2025-11-12"])
        .assert()
        .success()
        .stdout(contains("2025"))
        .stdout(contains("Read-only calendar (student role)"));
}

#[test]
fn test_open_day() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    sb.cal()
        .args(["open", "2025-11-13"])
        .assert()
        .success()
        .stdout(contains("No events on 2025-11-13"));

    sb.cal()
        .args(["open", "2025-11-12"])
        .assert()
        .success()
        .stdout(contains("Wednesday 12 November 2025"))
        .stdout(contains("Staff meeting (09:30-10:30)"));
}

#[test]
fn test_edit_show_and_delete_by_prefix() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    let id = sb.stored_events()[0].id.clone();
    let prefix: String = id.chars().take(8).collect();

    sb.cal()
        .args(["edit", prefix.as_str(), "--title", "Staff meeting", "--location", "Library"])
        .assert()
        .success()
        .stdout(contains("Updated 'Staff meeting'"));

    let ev = &sb.stored_events()[0];
    assert_eq!(ev.id, id);
    assert_eq!(ev.title, "Staff meeting");
    assert_eq!(ev.location, "Library");

    sb.cal()
        .args(["show", prefix.as_str()])
        .assert()
        .success()
        .stdout(contains("Staff meeting"))
        .stdout(contains("Library"))
        .stdout(contains(id.as_str()));

    // answering no keeps the event
    sb.cal()
        .args(["del", prefix.as_str()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(sb.stored_events().len(), 1);

    sb.cal()
        .args(["del", prefix.as_str(), "--yes"])
        .assert()
        .success()
        .stdout(contains("Event 'Staff meeting' has been deleted."));
    assert!(sb.stored_events().is_empty());

    sb.cal()
        .args(["show", prefix.as_str()])
        .assert()
        .failure()
        .stderr(contains("Event not found"));
}

#[test]
fn test_edit_rejects_invalid_patch() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Meeting", "2025-11-12 09:30", "2025-11-12 10:30");
    let id = sb.stored_events()[0].id.clone();

    sb.cal()
        .args(["edit", id.as_str(), "--end", "2025-11-12 08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid event"));

    assert_eq!(sb.stored_events()[0].end.format("%H:%M").to_string(), "10:30");
}

#[test]
fn test_export_and_import_csv() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");
    sb.add("Sports day", "2025-12-02 08:00", "2025-12-02 15:00");

    let out = sb.file("events.csv");
    sb.cal()
        .args(["export", "--format", "csv", "--file", out.as_str()])
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("id,title,start,end"));
    assert!(csv.contains("Staff meeting"));

    let other = Sandbox::new();
    other.init();
    other
        .cal()
        .args(["import", "--file", out.as_str()])
        .assert()
        .success()
        .stdout(contains("Import completed: 2 imported, 0 skipped"));

    let imported = other.stored_events();
    let original = sb.stored_events();
    assert_eq!(imported.len(), 2);
    assert_eq!(imported[0].title, original[0].title);
    assert_eq!(imported[0].start, original[0].start);
    assert_eq!(imported[0].end, original[0].end);
    // imported events get fresh ids
    assert_ne!(imported[0].id, original[0].id);
}

#[test]
fn test_export_range_and_formats() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    let json = sb.file("nov.json");
    sb.cal()
        .args(["export", "--format", "json", "--file", json.as_str(), "--range", "2025-11"])
        .assert()
        .success();
    let content = fs::read_to_string(&json).unwrap();
    assert!(content.contains("\"title\": \"Staff meeting\""));

    let xlsx = sb.file("nov.xlsx");
    sb.cal()
        .args(["export", "--format", "xlsx", "--file", xlsx.as_str()])
        .assert()
        .success();
    assert!(Path::new(&xlsx).exists());

    let pdf = sb.file("nov.pdf");
    sb.cal()
        .args(["export", "--format", "pdf", "--file", pdf.as_str(), "--range", "2025"])
        .assert()
        .success();
    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_export_guards() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    sb.cal()
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("Export error"));

    let empty = sb.file("empty.csv");
    sb.cal()
        .args(["export", "--file", empty.as_str(), "--range", "2030"])
        .assert()
        .success()
        .stdout(contains("No events found"));
    assert!(!Path::new(&empty).exists());
}

#[test]
fn test_backup_compressed() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    let dest = sb.file("backup/events.json");
    sb.cal()
        .args(["backup", "--file", dest.as_str(), "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(sb.home().join("backup/events.zip").exists());
    assert!(!Path::new(&dest).exists());
}

#[test]
fn test_holidays() {
    let sb = Sandbox::new();

    sb.cal()
        .args(["holidays", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("Holidays 2025"))
        .stdout(contains("2025-01-26"))
        .stdout(contains("Republic Day"));
}

#[test]
fn test_audit_log_and_info() {
    let sb = Sandbox::new();
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    sb.cal()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("init"));

    sb.cal()
        .arg("info")
        .assert()
        .success()
        .stdout(contains("Total events"))
        .stdout(contains("2025-11-12"));
}

#[test]
fn test_sqlite_store() {
    let sb = Sandbox::with_store("events.sqlite");
    sb.init();
    sb.add("Staff meeting", "2025-11-12 09:30", "2025-11-12 10:30");

    sb.cal()
        .args(["list", "--period", "2025-11-12"])
        .assert()
        .success()
        .stdout(contains("Staff meeting"));

    sb.cal()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"));
}

#[test]
fn test_invalid_period() {
    let sb = Sandbox::new();
    sb.init();

    sb.cal()
        .args(["list", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}
